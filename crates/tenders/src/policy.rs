//! Per-operation validation configuration.
//!
//! The same enumerated code can be valid for one operation and forbidden for
//! another. Rather than a hardcoded switch recompiled into every call site,
//! each operation supplies its allow-sets as data; the smart constructors
//! receive them as parameters.

use forgetender_core::{
    AwardCriteria, BusinessFunctionType, CriterionRelatesTo, ProcurementMethodDetails,
};

/// Allow-sets an operation grants to the validation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationPolicy {
    pub procurement_method_details: &'static [ProcurementMethodDetails],
    pub award_criteria: &'static [AwardCriteria],
    pub business_function_types: &'static [BusinessFunctionType],
    pub criterion_relations: &'static [CriterionRelatesTo],
}

const ALL_BUSINESS_FUNCTIONS: &[BusinessFunctionType] = &[
    BusinessFunctionType::Chairman,
    BusinessFunctionType::ProcurementOfficer,
    BusinessFunctionType::ContactPoint,
    BusinessFunctionType::TechnicalEvaluator,
    BusinessFunctionType::TechnicalOpener,
    BusinessFunctionType::PriceOpener,
    BusinessFunctionType::PriceEvaluator,
];

impl OperationPolicy {
    /// Creation of a competitive notice (open-tender family).
    pub fn create_cn() -> Self {
        Self {
            procurement_method_details: &[
                ProcurementMethodDetails::MicroValue,
                ProcurementMethodDetails::SmallValue,
                ProcurementMethodDetails::OpenTender,
                ProcurementMethodDetails::TestOpenTender,
                ProcurementMethodDetails::RestrictedTender,
            ],
            award_criteria: &[
                AwardCriteria::PriceOnly,
                AwardCriteria::CostOnly,
                AwardCriteria::QualityOnly,
                AwardCriteria::RatedCriteria,
            ],
            business_function_types: ALL_BUSINESS_FUNCTIONS,
            criterion_relations: &[
                CriterionRelatesTo::Tenderer,
                CriterionRelatesTo::Item,
                CriterionRelatesTo::Lot,
            ],
        }
    }

    /// Update of an existing competitive notice.
    ///
    /// Same code space as creation, except criteria may no longer be
    /// re-pointed at individual items once the notice is published.
    pub fn update_cn() -> Self {
        Self {
            criterion_relations: &[CriterionRelatesTo::Tenderer, CriterionRelatesTo::Lot],
            ..Self::create_cn()
        }
    }

    /// Creation of a framework-agreement notice.
    ///
    /// Open-tender procurement-method codes are rejected here even though
    /// they are perfectly valid for [`OperationPolicy::create_cn`].
    pub fn create_fa() -> Self {
        Self {
            procurement_method_details: &[ProcurementMethodDetails::FrameworkAgreement],
            award_criteria: &[AwardCriteria::PriceOnly, AwardCriteria::RatedCriteria],
            business_function_types: ALL_BUSINESS_FUNCTIONS,
            criterion_relations: &[CriterionRelatesTo::Tenderer, CriterionRelatesTo::Tender],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_tender_code_is_allowed_for_cn_but_not_for_fa() {
        let cn = OperationPolicy::create_cn();
        let fa = OperationPolicy::create_fa();
        assert!(cn
            .procurement_method_details
            .contains(&ProcurementMethodDetails::OpenTender));
        assert!(!fa
            .procurement_method_details
            .contains(&ProcurementMethodDetails::OpenTender));
    }

    #[test]
    fn update_narrows_criterion_relations_only() {
        let create = OperationPolicy::create_cn();
        let update = OperationPolicy::update_cn();
        assert_eq!(
            create.procurement_method_details,
            update.procurement_method_details
        );
        assert!(!update.criterion_relations.contains(&CriterionRelatesTo::Item));
    }
}
