//! Enumerated wire codes.
//!
//! Each code parses from its wire string; `parse_allowed` additionally checks
//! membership in a caller-supplied allow-set, since the same code may be valid
//! for one operation and forbidden for another. The allow-sets themselves are
//! operation configuration, not hardcoded matches at call sites.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

macro_rules! impl_wire_code {
    ($t:ident, $( $variant:ident => $wire:literal ),+ $(,)?) => {
        impl $t {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            fn from_wire(raw: &str) -> Option<Self> {
                match raw {
                    $( $wire => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Parse a wire string, rejecting values outside the enumeration.
            pub fn parse(path: &str, raw: &str) -> DomainResult<Self> {
                Self::from_wire(raw).ok_or_else(|| DomainError::pattern_mismatch(path, raw))
            }

            /// Parse a wire string and check it against the operation's allow-set.
            pub fn parse_allowed(path: &str, raw: &str, allowed: &[Self]) -> DomainResult<Self> {
                let code = Self::parse(path, raw)?;
                if allowed.contains(&code) {
                    Ok(code)
                } else {
                    Err(DomainError::incorrect_attribute(
                        path,
                        format!("code '{raw}' is not allowed for this operation"),
                    ))
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Procurement method detail code carried by a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcurementMethodDetails {
    #[serde(rename = "MV")]
    MicroValue,
    #[serde(rename = "SV")]
    SmallValue,
    #[serde(rename = "OT")]
    OpenTender,
    #[serde(rename = "TEST_OT")]
    TestOpenTender,
    #[serde(rename = "RT")]
    RestrictedTender,
    #[serde(rename = "FA")]
    FrameworkAgreement,
}

impl_wire_code!(
    ProcurementMethodDetails,
    MicroValue => "MV",
    SmallValue => "SV",
    OpenTender => "OT",
    TestOpenTender => "TEST_OT",
    RestrictedTender => "RT",
    FrameworkAgreement => "FA",
);

/// Main procurement category of a tender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainProcurementCategory {
    Goods,
    Works,
    Services,
}

impl_wire_code!(
    MainProcurementCategory,
    Goods => "goods",
    Works => "works",
    Services => "services",
);

/// Award criteria code of a tender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AwardCriteria {
    PriceOnly,
    CostOnly,
    QualityOnly,
    RatedCriteria,
}

impl_wire_code!(
    AwardCriteria,
    PriceOnly => "priceOnly",
    CostOnly => "costOnly",
    QualityOnly => "qualityOnly",
    RatedCriteria => "ratedCriteria",
);

/// Role a person performs for the procuring entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BusinessFunctionType {
    Chairman,
    ProcurementOfficer,
    ContactPoint,
    TechnicalEvaluator,
    TechnicalOpener,
    PriceOpener,
    PriceEvaluator,
}

impl_wire_code!(
    BusinessFunctionType,
    Chairman => "chairman",
    ProcurementOfficer => "procurementOfficer",
    ContactPoint => "contactPoint",
    TechnicalEvaluator => "technicalEvaluator",
    TechnicalOpener => "technicalOpener",
    PriceOpener => "priceOpener",
    PriceEvaluator => "priceEvaluator",
);

/// What part of the document a criterion applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionRelatesTo {
    Tenderer,
    Tender,
    Lot,
    Item,
}

impl_wire_code!(
    CriterionRelatesTo,
    Tenderer => "tenderer",
    Tender => "tender",
    Lot => "lot",
    Item => "item",
);

/// Data type of a requirement's expected response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementDataType {
    Boolean,
    String,
    Number,
    Integer,
}

impl_wire_code!(
    RequirementDataType,
    Boolean => "boolean",
    String => "string",
    Number => "number",
    Integer => "integer",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_wire_strings() {
        assert_eq!(
            ProcurementMethodDetails::parse("pmd", "OT").unwrap(),
            ProcurementMethodDetails::OpenTender
        );
        assert_eq!(
            MainProcurementCategory::parse("category", "works").unwrap(),
            MainProcurementCategory::Works
        );
        assert_eq!(
            CriterionRelatesTo::parse("relatesTo", "tenderer").unwrap(),
            CriterionRelatesTo::Tenderer
        );
    }

    #[test]
    fn parse_rejects_unknown_wire_string() {
        let err = AwardCriteria::parse("awardCriteria", "cheapest").unwrap_err();
        assert_eq!(
            err,
            DomainError::pattern_mismatch("awardCriteria", "cheapest")
        );
    }

    #[test]
    fn parse_allowed_rejects_code_outside_operation_allow_set() {
        // "OT" is a real code, just not allowed for this (framework) operation.
        let err = ProcurementMethodDetails::parse_allowed(
            "pmd",
            "OT",
            &[ProcurementMethodDetails::FrameworkAgreement],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::IncorrectAttribute { .. }));

        let ok = ProcurementMethodDetails::parse_allowed(
            "pmd",
            "OT",
            &[
                ProcurementMethodDetails::OpenTender,
                ProcurementMethodDetails::TestOpenTender,
            ],
        );
        assert_eq!(ok.unwrap(), ProcurementMethodDetails::OpenTender);
    }

    #[test]
    fn unknown_code_fails_before_allow_set_check() {
        let err = BusinessFunctionType::parse_allowed("bf.type", "janitor", &[]).unwrap_err();
        assert!(matches!(err, DomainError::PatternMismatch { .. }));
    }
}
