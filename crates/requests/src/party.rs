//! Raw procuring-entity shapes (organization, persons, business functions).

use serde::{Deserialize, Serialize};

use crate::common::{RawAddress, RawIdentifier, RawPeriod};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProcuringEntity {
    pub id: String,
    pub name: String,
    pub identifier: RawIdentifier,
    pub address: RawAddress,
    pub persons: Vec<RawPerson>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPerson {
    pub title: String,
    pub name: String,
    pub identifier: RawIdentifier,
    pub business_functions: Vec<RawBusinessFunction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBusinessFunction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub job_title: String,
    pub period: RawPeriod,
}
