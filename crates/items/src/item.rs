use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use forgetender_core::{rules, AggregateRoot, DomainError, DomainResult, ItemId, LotId};
use forgetender_requests::{RawClassification, RawItem, RawUnit};

static CPV_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{8}-\d$").unwrap());

/// CPV-style classification of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub scheme: String,
    pub id: String,
    pub description: Option<String>,
}

impl Classification {
    fn try_create(path: &str, raw: &RawClassification) -> DomainResult<Self> {
        let scheme = rules::non_blank(&format!("{path}.scheme"), &raw.scheme)?;
        let id_path = format!("{path}.id");
        if !CPV_PATTERN.is_match(&raw.id) {
            return Err(DomainError::pattern_mismatch(&id_path, &raw.id));
        }
        Ok(Self {
            scheme,
            id: raw.id.clone(),
            description: raw.description.clone(),
        })
    }
}

/// Unit of measure of an item quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub id: Option<String>,
    pub name: String,
}

impl Unit {
    fn try_create(path: &str, raw: &RawUnit) -> DomainResult<Self> {
        Ok(Self {
            id: raw.id.clone(),
            name: rules::non_blank(&format!("{path}.name"), &raw.name)?,
        })
    }
}

/// Aggregate root: one procured line of a tender.
///
/// `related_lot` is a plain identifier value, not an object reference; whether
/// it names an existing lot is checked by the owner of the lot collection
/// (the tender or the division), where the declared set lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    internal_id: Option<String>,
    description: String,
    classification: Classification,
    quantity: Decimal,
    unit: Unit,
    related_lot: LotId,
}

impl Item {
    /// Validate a raw item into an aggregate.
    pub fn try_create(path: &str, raw: &RawItem) -> DomainResult<Self> {
        let id = ItemId::parse(&format!("{path}.id"), &raw.id)?;
        let description = rules::non_blank(&format!("{path}.description"), &raw.description)?;
        let classification =
            Classification::try_create(&format!("{path}.classification"), &raw.classification)?;

        if raw.quantity <= Decimal::ZERO {
            return Err(DomainError::incorrect_attribute(
                &format!("{path}.quantity"),
                "must be greater than zero",
            ));
        }

        let unit = Unit::try_create(&format!("{path}.unit"), &raw.unit)?;
        let related_lot = LotId::parse(&format!("{path}.relatedLot"), &raw.related_lot)?;

        Ok(Self {
            id,
            internal_id: raw.internal_id.clone(),
            description,
            classification,
            quantity: raw.quantity,
            unit,
            related_lot,
        })
    }

    /// Re-point this item at another lot. Used when a division replaces the
    /// lot the item was bought under.
    pub fn with_related_lot(self, related_lot: LotId) -> Self {
        Self {
            related_lot,
            ..self
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn internal_id(&self) -> Option<&str> {
        self.internal_id.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn related_lot(&self) -> LotId {
        self.related_lot
    }
}

impl AggregateRoot for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn raw_item(related_lot: LotId) -> RawItem {
        RawItem {
            id: ItemId::generate().to_string(),
            internal_id: Some("INV-042".to_string()),
            description: "Office desk, oak".to_string(),
            classification: RawClassification {
                scheme: "CPV".to_string(),
                id: "39121100-7".to_string(),
                description: Some("Desks".to_string()),
            },
            quantity: Decimal::from_str("25").unwrap(),
            unit: RawUnit {
                id: Some("796".to_string()),
                name: "piece".to_string(),
            },
            related_lot: related_lot.to_string(),
        }
    }

    #[test]
    fn valid_item_constructs() {
        let lot_id = LotId::generate();
        let item = Item::try_create("items[0]", &raw_item(lot_id)).unwrap();
        assert_eq!(item.related_lot(), lot_id);
        assert_eq!(item.classification().id, "39121100-7");
    }

    #[test]
    fn malformed_classification_code_is_rejected() {
        let mut raw = raw_item(LotId::generate());
        raw.classification.id = "39121100".to_string();
        let err = Item::try_create("items[0]", &raw).unwrap_err();
        assert_eq!(
            err,
            DomainError::pattern_mismatch("items[0].classification.id", "39121100")
        );
    }

    #[test]
    fn zero_and_negative_quantities_are_rejected() {
        let mut raw = raw_item(LotId::generate());
        raw.quantity = Decimal::ZERO;
        assert!(Item::try_create("items[0]", &raw).is_err());

        raw.quantity = Decimal::from_str("-1").unwrap();
        let err = Item::try_create("items[0]", &raw).unwrap_err();
        assert_eq!(
            err,
            DomainError::incorrect_attribute("items[0].quantity", "must be greater than zero")
        );
    }

    #[test]
    fn classification_failure_short_circuits_before_quantity() {
        let mut raw = raw_item(LotId::generate());
        raw.classification.id = "bogus".to_string();
        raw.quantity = Decimal::ZERO;
        let err = Item::try_create("items[0]", &raw).unwrap_err();
        assert!(matches!(err, DomainError::PatternMismatch { .. }));
    }

    #[test]
    fn with_related_lot_repoints_identity_preserving_the_rest() {
        let item = Item::try_create("items[0]", &raw_item(LotId::generate())).unwrap();
        let target = LotId::generate();
        let repointed = item.clone().with_related_lot(target);
        assert_eq!(repointed.related_lot(), target);
        assert_eq!(repointed.id_typed(), item.id_typed());
        assert_eq!(repointed.quantity(), item.quantity());
    }
}
