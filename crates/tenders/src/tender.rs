use std::collections::HashSet;

use forgetender_budget::Budget;
use forgetender_core::{
    rules, AggregateRoot, AwardCriteria, Cpid, DomainError, DomainResult, ItemId, LotId,
    MainProcurementCategory, Money, Ocid, Period, ProcurementMethodDetails,
};
use forgetender_criteria::{Criterion, CriterionRelation};
use forgetender_items::Item;
use forgetender_lots::{Lot, LotRequirements};
use forgetender_parties::ProcuringEntity;
use forgetender_requests::{CreateTenderRequest, RawDocument};

use crate::policy::OperationPolicy;

/// A document attached to the tender, optionally scoped to specific lots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub document_type: String,
    pub title: String,
    pub description: Option<String>,
    pub related_lots: Vec<LotId>,
}

impl Document {
    fn try_create(path: &str, raw: &RawDocument) -> DomainResult<Self> {
        let related_lots = match &raw.related_lots {
            Some(raw_ids) => {
                let mut related_lots = Vec::with_capacity(raw_ids.len());
                for (i, raw_id) in raw_ids.iter().enumerate() {
                    related_lots.push(LotId::parse(&format!("{path}.relatedLots[{i}]"), raw_id)?);
                }
                related_lots
            }
            None => Vec::new(),
        };
        Ok(Self {
            id: rules::non_blank(&format!("{path}.id"), &raw.id)?,
            document_type: rules::non_blank(&format!("{path}.documentType"), &raw.document_type)?,
            title: rules::non_blank(&format!("{path}.title"), &raw.title)?,
            description: raw.description.clone(),
            related_lots,
        })
    }
}

/// Aggregate root: a validated competitive-notice tender.
///
/// The only way to obtain one is [`Tender::try_create`]; there is no
/// representable invalid state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tender {
    cpid: Cpid,
    ocid: Ocid,
    title: String,
    description: String,
    procurement_method_details: ProcurementMethodDetails,
    main_procurement_category: MainProcurementCategory,
    award_criteria: AwardCriteria,
    tender_period: Period,
    value: Money,
    budget: Budget,
    procuring_entity: ProcuringEntity,
    lots: Vec<Lot>,
    items: Vec<Item>,
    documents: Vec<Document>,
    criteria: Vec<Criterion>,
}

impl Tender {
    /// Validate a raw create-notice request into a tender aggregate.
    ///
    /// Validation order is fixed so the first error surfaced is deterministic
    /// for identical input: identifiers, budget, tender scalars, procuring
    /// entity, lots (construction then uniqueness), items (construction,
    /// uniqueness, then lot references), documents, criteria, tender value.
    pub fn try_create(
        cpid_raw: &str,
        ocid_raw: &str,
        request: &CreateTenderRequest,
        policy: &OperationPolicy,
    ) -> DomainResult<Self> {
        tracing::debug!(
            lots = request.tender.lots.len(),
            items = request.tender.items.len(),
            "validating create-notice request"
        );

        let cpid = Cpid::parse("cpid", cpid_raw)?;
        let ocid = Ocid::parse("ocid", ocid_raw)?;
        if ocid.cpid() != cpid {
            return Err(DomainError::incorrect_attribute(
                "ocid",
                "does not belong to the given cpid",
            ));
        }

        let budget = Budget::try_create("planning.budget", &request.planning.budget)?;

        let raw_tender = &request.tender;
        let title = rules::non_blank("tender.title", &raw_tender.title)?;
        let description = rules::non_blank("tender.description", &raw_tender.description)?;

        let procurement_method_details = ProcurementMethodDetails::parse_allowed(
            "tender.procurementMethodDetails",
            &raw_tender.procurement_method_details,
            policy.procurement_method_details,
        )?;
        let main_procurement_category = MainProcurementCategory::parse(
            "tender.mainProcurementCategory",
            &raw_tender.main_procurement_category,
        )?;
        let award_criteria = AwardCriteria::parse_allowed(
            "tender.awardCriteria",
            &raw_tender.award_criteria,
            policy.award_criteria,
        )?;

        let period_path = "tender.tenderPeriod";
        let period_end = raw_tender
            .tender_period
            .end_date
            .as_deref()
            .ok_or_else(|| DomainError::incorrect_attribute(period_path, "endDate is mandatory"))?;
        let tender_period =
            Period::try_create(period_path, &raw_tender.tender_period.start_date, period_end)?;

        let procuring_entity = ProcuringEntity::try_create(
            "tender.procuringEntity",
            &raw_tender.procuring_entity,
            policy.business_function_types,
        )?;

        let lots_path = "tender.lots";
        rules::non_empty(lots_path, &raw_tender.lots)?;
        let mut lots = Vec::with_capacity(raw_tender.lots.len());
        for (i, raw_lot) in raw_tender.lots.iter().enumerate() {
            lots.push(Lot::try_create(
                &format!("{lots_path}[{i}]"),
                raw_lot,
                LotRequirements::standard(),
            )?);
        }
        rules::unique_by(lots_path, &lots, Lot::id_typed)?;
        let lot_ids: HashSet<LotId> = lots.iter().map(Lot::id_typed).collect();

        let items_path = "tender.items";
        rules::non_empty(items_path, &raw_tender.items)?;
        let mut items = Vec::with_capacity(raw_tender.items.len());
        for (i, raw_item) in raw_tender.items.iter().enumerate() {
            items.push(Item::try_create(&format!("{items_path}[{i}]"), raw_item)?);
        }
        rules::unique_by(items_path, &items, Item::id_typed)?;
        let related_lots: Vec<LotId> = items.iter().map(Item::related_lot).collect();
        rules::known_references(
            "tender.items[].relatedLot",
            &lot_ids,
            related_lots.iter(),
        )?;
        let item_ids: HashSet<ItemId> = items.iter().map(Item::id_typed).collect();

        let documents_path = "tender.documents";
        let documents = match &raw_tender.documents {
            Some(raw_documents) => {
                rules::non_empty(documents_path, raw_documents)?;
                let mut documents = Vec::with_capacity(raw_documents.len());
                for (i, raw_document) in raw_documents.iter().enumerate() {
                    documents.push(Document::try_create(
                        &format!("{documents_path}[{i}]"),
                        raw_document,
                    )?);
                }
                rules::unique_by(documents_path, &documents, |doc| doc.id.clone())?;
                for document in &documents {
                    rules::known_references(
                        "tender.documents[].relatedLots",
                        &lot_ids,
                        document.related_lots.iter(),
                    )?;
                }
                documents
            }
            None => Vec::new(),
        };

        let criteria_path = "tender.criteria";
        let criteria = match &raw_tender.criteria {
            Some(raw_criteria) => {
                rules::non_empty(criteria_path, raw_criteria)?;
                let mut criteria = Vec::with_capacity(raw_criteria.len());
                for (i, raw_criterion) in raw_criteria.iter().enumerate() {
                    criteria.push(Criterion::try_create(
                        &format!("{criteria_path}[{i}]"),
                        raw_criterion,
                        policy.criterion_relations,
                    )?);
                }
                rules::unique_by(criteria_path, &criteria, |c| c.id_typed().clone())?;
                for (i, criterion) in criteria.iter().enumerate() {
                    let related_path = format!("{criteria_path}[{i}].relatedItem");
                    match criterion.relation() {
                        CriterionRelation::Item(item_id) => {
                            if !item_ids.contains(item_id) {
                                return Err(DomainError::missing_reference(
                                    &related_path,
                                    item_id.to_string(),
                                ));
                            }
                        }
                        CriterionRelation::Lot(lot_id) => {
                            if !lot_ids.contains(lot_id) {
                                return Err(DomainError::missing_reference(
                                    &related_path,
                                    lot_id.to_string(),
                                ));
                            }
                        }
                        CriterionRelation::Tenderer | CriterionRelation::Tender => {}
                    }
                }
                criteria
            }
            None => Vec::new(),
        };

        let value = Money::sum(lots.iter().map(|lot| lot.value().clone()), |left, right| {
            DomainError::incompatible_currency(left.as_str(), right.as_str())
        })?
        .ok_or_else(|| DomainError::empty_collection(lots_path))?;

        Ok(Self {
            cpid,
            ocid,
            title,
            description,
            procurement_method_details,
            main_procurement_category,
            award_criteria,
            tender_period,
            value,
            budget,
            procuring_entity,
            lots,
            items,
            documents,
            criteria,
        })
    }

    pub fn cpid(&self) -> &Cpid {
        &self.cpid
    }

    pub fn ocid(&self) -> &Ocid {
        &self.ocid
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn procurement_method_details(&self) -> ProcurementMethodDetails {
        self.procurement_method_details
    }

    pub fn main_procurement_category(&self) -> MainProcurementCategory {
        self.main_procurement_category
    }

    pub fn award_criteria(&self) -> AwardCriteria {
        self.award_criteria
    }

    pub fn tender_period(&self) -> &Period {
        &self.tender_period
    }

    /// The tender value: the currency-checked sum of all lot values.
    pub fn value(&self) -> &Money {
        &self.value
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn procuring_entity(&self) -> &ProcuringEntity {
        &self.procuring_entity
    }

    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }
}

impl AggregateRoot for Tender {
    type Id = Ocid;

    fn id(&self) -> &Self::Id {
        &self.ocid
    }
}
