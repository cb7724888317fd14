//! Raw item shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::{RawClassification, RawUnit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub id: String,
    pub internal_id: Option<String>,
    pub description: String,
    pub classification: RawClassification,
    pub quantity: Decimal,
    pub unit: RawUnit,
    pub related_lot: String,
}
