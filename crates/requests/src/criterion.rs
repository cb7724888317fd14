//! Raw exchange-criterion shapes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCriterion {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub relates_to: String,
    pub related_item: Option<String>,
    pub requirement_groups: Vec<RawRequirementGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequirementGroup {
    pub id: String,
    pub description: Option<String>,
    pub requirements: Vec<RawRequirement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequirement {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub data_type: String,
}
