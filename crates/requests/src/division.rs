//! Lot-division payload.
//!
//! One lot of an existing tender is replaced by two or more new lots; the
//! tender's items are re-pointed at the replacements.

use serde::{Deserialize, Serialize};

use crate::item::RawItem;
use crate::lot::RawLot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivideLotRequest {
    pub divided_lot_id: String,
    pub lots: Vec<RawLot>,
    pub items: Vec<RawItem>,
}
