//! Top-level create-notice payload.

use serde::{Deserialize, Serialize};

use crate::common::RawPeriod;
use crate::criterion::RawCriterion;
use crate::item::RawItem;
use crate::lot::RawLot;
use crate::party::RawProcuringEntity;
use crate::planning::RawPlanning;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenderRequest {
    pub planning: RawPlanning,
    pub tender: RawTender,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTender {
    pub title: String,
    pub description: String,
    pub procurement_method_details: String,
    pub main_procurement_category: String,
    pub award_criteria: String,
    pub tender_period: RawPeriod,
    pub procuring_entity: RawProcuringEntity,
    pub lots: Vec<RawLot>,
    pub items: Vec<RawItem>,
    pub documents: Option<Vec<RawDocument>>,
    pub criteria: Option<Vec<RawCriterion>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    pub id: String,
    pub document_type: String,
    pub title: String,
    pub description: Option<String>,
    pub related_lots: Option<Vec<String>>,
}
