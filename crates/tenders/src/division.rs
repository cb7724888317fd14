use std::collections::{HashMap, HashSet};

use forgetender_core::{rules, DomainError, DomainResult, ItemId, LotId, Money};
use forgetender_items::Item;
use forgetender_lots::{Lot, LotRequirements};
use forgetender_requests::DivideLotRequest;

use crate::tender::Tender;

/// Configuration separating the two division-shaped operations.
///
/// Dividing a lot and pre-flight-validating a division share every structural
/// check; they differ only in which optional lot sub-structures are mandatory
/// and in whether permanent identifiers are minted for the replacements. One
/// shared constructor takes that difference as data so the two paths cannot
/// drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionConfig {
    lot_requirements: LotRequirements,
    mint_ids: bool,
}

impl DivisionConfig {
    /// The real division: replacement lots must carry the full lot shape and
    /// receive fresh permanent identifiers.
    pub fn divide() -> Self {
        Self {
            lot_requirements: LotRequirements::complete(),
            mint_ids: true,
        }
    }

    /// Pre-flight validation of a division request: same checks, optional
    /// sub-structures stay optional, request identifiers are echoed back.
    pub fn validate_only() -> Self {
        Self {
            lot_requirements: LotRequirements::standard(),
            mint_ids: false,
        }
    }
}

/// The validated outcome of dividing one lot into replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotDivision {
    divided_lot_id: LotId,
    lots: Vec<Lot>,
    items: Vec<Item>,
}

impl LotDivision {
    /// Validate a lot-division request against an existing tender.
    ///
    /// Validation order is fixed: divided-lot reference, replacement-lot
    /// construction, replacement count, replacement-id uniqueness, item
    /// construction and uniqueness, item identity against the tender, item →
    /// replacement-lot references, per-lot item coverage, value
    /// reconciliation. The first failure is the overall result.
    pub fn try_create(
        tender: &Tender,
        request: &DivideLotRequest,
        config: DivisionConfig,
    ) -> DomainResult<Self> {
        tracing::debug!(
            divided_lot = %request.divided_lot_id,
            replacements = request.lots.len(),
            "validating lot-division request"
        );

        let divided_lot_id = LotId::parse("dividedLotId", &request.divided_lot_id)?;
        let divided_lot = tender
            .lots()
            .iter()
            .find(|lot| lot.id_typed() == divided_lot_id)
            .ok_or_else(|| {
                DomainError::missing_reference("dividedLotId", divided_lot_id.to_string())
            })?;

        let lots_path = "lots";
        rules::non_empty(lots_path, &request.lots)?;
        let mut lots = Vec::with_capacity(request.lots.len());
        for (i, raw_lot) in request.lots.iter().enumerate() {
            lots.push(Lot::try_create(
                &format!("{lots_path}[{i}]"),
                raw_lot,
                config.lot_requirements,
            )?);
        }
        if lots.len() < 2 {
            return Err(DomainError::incorrect_attribute(
                lots_path,
                "a lot must be divided into at least two replacement lots",
            ));
        }
        rules::unique_by(lots_path, &lots, Lot::id_typed)?;
        let replacement_ids: HashSet<LotId> = lots.iter().map(Lot::id_typed).collect();

        let items_path = "items";
        rules::non_empty(items_path, &request.items)?;
        let mut items = Vec::with_capacity(request.items.len());
        for (i, raw_item) in request.items.iter().enumerate() {
            items.push(Item::try_create(&format!("{items_path}[{i}]"), raw_item)?);
        }
        rules::unique_by(items_path, &items, Item::id_typed)?;

        // Re-pointed items must be the tender's own items, not new ones.
        let tender_item_ids: HashSet<ItemId> =
            tender.items().iter().map(Item::id_typed).collect();
        let item_ids: Vec<ItemId> = items.iter().map(Item::id_typed).collect();
        rules::known_references("items[].id", &tender_item_ids, item_ids.iter())?;

        let related_lots: Vec<LotId> = items.iter().map(Item::related_lot).collect();
        rules::known_references("items[].relatedLot", &replacement_ids, related_lots.iter())?;

        for lot in &lots {
            let covered = items
                .iter()
                .any(|item| item.related_lot() == lot.id_typed());
            if !covered {
                return Err(DomainError::incorrect_attribute(
                    lots_path,
                    format!("replacement lot '{}' has no items", lot.id_typed()),
                ));
            }
        }

        let total = Money::sum(lots.iter().map(|lot| lot.value().clone()), |left, right| {
            DomainError::incompatible_currency(left.as_str(), right.as_str())
        })?
        .ok_or_else(|| DomainError::empty_collection(lots_path))?;
        if total.currency() != divided_lot.value().currency() {
            return Err(DomainError::incompatible_currency(
                divided_lot.value().currency().as_str(),
                total.currency().as_str(),
            ));
        }
        if total.amount() != divided_lot.value().amount() {
            return Err(DomainError::incorrect_attribute(
                "lots[].value.amount",
                "replacement lot values must sum to the divided lot value",
            ));
        }

        let (lots, items) = if config.mint_ids {
            Self::mint_replacement_ids(lots, items)
        } else {
            (lots, items)
        };

        Ok(Self {
            divided_lot_id,
            lots,
            items,
        })
    }

    /// Replace the request-scoped replacement ids with fresh permanent ones,
    /// re-pointing the items through the same mapping.
    fn mint_replacement_ids(lots: Vec<Lot>, items: Vec<Item>) -> (Vec<Lot>, Vec<Item>) {
        let minted: HashMap<LotId, LotId> = lots
            .iter()
            .map(|lot| (lot.id_typed(), LotId::generate()))
            .collect();
        let lots = lots
            .into_iter()
            .map(|lot| {
                let id = minted[&lot.id_typed()];
                lot.with_id(id)
            })
            .collect();
        let items = items
            .into_iter()
            .map(|item| {
                let id = minted[&item.related_lot()];
                item.with_related_lot(id)
            })
            .collect();
        (lots, items)
    }

    pub fn divided_lot_id(&self) -> LotId {
        self.divided_lot_id
    }

    /// The replacement lots.
    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    /// The tender's items, re-pointed at the replacement lots.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
