//! Leaf shapes shared across request payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A plain decimal/currency pair; becomes `Money` after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawValue {
    pub amount: Decimal,
    pub currency: String,
}

/// A raw period; dates are free-form strings until parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPeriod {
    pub start_date: String,
    pub end_date: Option<String>,
}

/// Classification of an item (scheme + code).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClassification {
    pub scheme: String,
    pub id: String,
    pub description: Option<String>,
}

/// Unit of measure of an item quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUnit {
    pub id: Option<String>,
    pub name: String,
}

/// Postal address of a party or place of performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAddress {
    pub street_address: String,
    pub locality: String,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
}

/// Registered identifier of an organization (scheme + registration id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIdentifier {
    pub scheme: String,
    pub id: String,
    pub legal_name: String,
    pub uri: Option<String>,
}
