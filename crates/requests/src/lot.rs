//! Raw lot shape with its optional sub-structures.

use serde::{Deserialize, Serialize};

use crate::common::{RawAddress, RawPeriod, RawValue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLot {
    pub id: String,
    pub title: String,
    pub description: String,
    pub value: RawValue,
    pub contract_period: RawPeriod,
    pub place_of_performance: Option<RawPlaceOfPerformance>,
    pub renewal: Option<RawRenewal>,
    pub recurrence: Option<RawRecurrence>,
    pub options: Option<Vec<RawLotOption>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlaceOfPerformance {
    pub address: RawAddress,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRenewal {
    pub description: Option<String>,
    pub minimum_renewals: Option<u32>,
    pub maximum_renewals: Option<u32>,
    pub period: Option<RawPeriod>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecurrence {
    pub dates: Vec<RawPeriod>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLotOption {
    pub description: Option<String>,
    pub period: Option<RawPeriod>,
}
