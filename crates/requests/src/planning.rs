//! Planning side of a create-notice payload (budget, rationale).

use serde::{Deserialize, Serialize};

use crate::common::{RawPeriod, RawValue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlanning {
    pub budget: RawBudget,
    pub rationale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBudget {
    pub id: String,
    pub description: Option<String>,
    pub amount: RawValue,
    pub period: RawPeriod,
    pub breakdown: Vec<RawBudgetBreakdown>,
}

/// One funding source of the budget; `id` names the funding-source stage
/// container it was allocated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBudgetBreakdown {
    pub id: String,
    pub description: Option<String>,
    pub amount: RawValue,
    pub period: Option<RawPeriod>,
}
