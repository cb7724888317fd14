use rust_decimal::Decimal;

use forgetender_core::{rules, AggregateRoot, DomainError, DomainResult, LotId, Money, Period};
use forgetender_requests::{
    RawAddress, RawLot, RawLotOption, RawPeriod, RawPlaceOfPerformance, RawRecurrence, RawRenewal,
};

/// Which optional lot sub-structures the calling operation requires.
///
/// The create-notice and lot-division operations validate the same lot shape
/// but disagree on which optional parts are mandatory; that difference is
/// configuration to one shared constructor, not a second constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotRequirements {
    pub renewal: bool,
    pub recurrence: bool,
    pub options: bool,
}

impl LotRequirements {
    /// Plain notice creation: every sub-structure stays optional.
    pub fn standard() -> Self {
        Self {
            renewal: false,
            recurrence: false,
            options: false,
        }
    }

    /// Operations that replace an existing lot and must carry its full shape.
    pub fn complete() -> Self {
        Self {
            renewal: true,
            recurrence: true,
            options: true,
        }
    }
}

/// Delivery address of a lot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street_address: String,
    pub locality: String,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
}

impl Address {
    fn try_create(path: &str, raw: &RawAddress) -> DomainResult<Self> {
        let country_path = format!("{path}.country");
        if raw.country.len() != 2 || !raw.country.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(DomainError::pattern_mismatch(&country_path, &raw.country));
        }
        Ok(Self {
            street_address: rules::non_blank(&format!("{path}.streetAddress"), &raw.street_address)?,
            locality: rules::non_blank(&format!("{path}.locality"), &raw.locality)?,
            region: raw.region.clone(),
            postal_code: raw.postal_code.clone(),
            country: raw.country.clone(),
        })
    }
}

/// Where the lot's contract will be performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOfPerformance {
    pub address: Address,
    pub description: Option<String>,
}

impl PlaceOfPerformance {
    fn try_create(path: &str, raw: &RawPlaceOfPerformance) -> DomainResult<Self> {
        Ok(Self {
            address: Address::try_create(&format!("{path}.address"), &raw.address)?,
            description: raw.description.clone(),
        })
    }
}

/// Renewal terms of the lot's contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renewal {
    pub description: Option<String>,
    pub minimum_renewals: Option<u32>,
    pub maximum_renewals: Option<u32>,
    pub period: Option<Period>,
}

impl Renewal {
    fn try_create(path: &str, raw: &RawRenewal) -> DomainResult<Self> {
        if let (Some(min), Some(max)) = (raw.minimum_renewals, raw.maximum_renewals) {
            if max < min {
                return Err(DomainError::incorrect_attribute(
                    path,
                    "maximumRenewals must not be less than minimumRenewals",
                ));
            }
        }
        let period = match &raw.period {
            Some(p) => Some(try_period(&format!("{path}.period"), p)?),
            None => None,
        };
        Ok(Self {
            description: raw.description.clone(),
            minimum_renewals: raw.minimum_renewals,
            maximum_renewals: raw.maximum_renewals,
            period,
        })
    }
}

/// Recurrence of the lot's procurement (future repeat dates).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    pub dates: Vec<Period>,
    pub description: Option<String>,
}

impl Recurrence {
    fn try_create(path: &str, raw: &RawRecurrence) -> DomainResult<Self> {
        let dates_path = format!("{path}.dates");
        rules::non_empty(&dates_path, &raw.dates)?;
        let mut dates = Vec::with_capacity(raw.dates.len());
        for (i, raw_date) in raw.dates.iter().enumerate() {
            dates.push(try_period(&format!("{dates_path}[{i}]"), raw_date)?);
        }
        Ok(Self {
            dates,
            description: raw.description.clone(),
        })
    }
}

/// A contractual option on the lot (e.g. extension of scope).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotOption {
    pub description: Option<String>,
    pub period: Option<Period>,
}

impl LotOption {
    fn try_create(path: &str, raw: &RawLotOption) -> DomainResult<Self> {
        let period = match &raw.period {
            Some(p) => Some(try_period(&format!("{path}.period"), p)?),
            None => None,
        };
        Ok(Self {
            description: raw.description.clone(),
            period,
        })
    }
}

/// Aggregate root: one lot of a tender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lot {
    id: LotId,
    title: String,
    description: String,
    value: Money,
    contract_period: Period,
    place_of_performance: Option<PlaceOfPerformance>,
    renewal: Option<Renewal>,
    recurrence: Option<Recurrence>,
    options: Vec<LotOption>,
}

impl Lot {
    /// Validate a raw lot into an aggregate.
    ///
    /// Validation order: id, title/description, value, contract period, then
    /// the optional sub-structures. The first failure is the overall result.
    pub fn try_create(
        path: &str,
        raw: &RawLot,
        requirements: LotRequirements,
    ) -> DomainResult<Self> {
        let id = LotId::parse(&format!("{path}.id"), &raw.id)?;
        let title = rules::non_blank(&format!("{path}.title"), &raw.title)?;
        let description = rules::non_blank(&format!("{path}.description"), &raw.description)?;

        let value_path = format!("{path}.value");
        let value = Money::try_create(&value_path, raw.value.amount, &raw.value.currency)?;
        if value.amount() <= Decimal::ZERO {
            return Err(DomainError::incorrect_attribute(
                &format!("{value_path}.amount"),
                "must be greater than zero",
            ));
        }

        let contract_path = format!("{path}.contractPeriod");
        let contract_end = raw
            .contract_period
            .end_date
            .as_deref()
            .ok_or_else(|| DomainError::incorrect_attribute(&contract_path, "endDate is mandatory"))?;
        let contract_period =
            Period::try_create(&contract_path, &raw.contract_period.start_date, contract_end)?;

        let place_of_performance = match &raw.place_of_performance {
            Some(p) => Some(PlaceOfPerformance::try_create(
                &format!("{path}.placeOfPerformance"),
                p,
            )?),
            None => None,
        };

        let renewal = required_option(
            &format!("{path}.renewal"),
            requirements.renewal,
            &raw.renewal,
            Renewal::try_create,
        )?;
        let recurrence = required_option(
            &format!("{path}.recurrence"),
            requirements.recurrence,
            &raw.recurrence,
            Recurrence::try_create,
        )?;

        let options_path = format!("{path}.options");
        let options = match &raw.options {
            Some(raw_options) => {
                rules::non_empty(&options_path, raw_options)?;
                let mut options = Vec::with_capacity(raw_options.len());
                for (i, raw_option) in raw_options.iter().enumerate() {
                    options.push(LotOption::try_create(
                        &format!("{options_path}[{i}]"),
                        raw_option,
                    )?);
                }
                options
            }
            None if requirements.options => {
                return Err(DomainError::incorrect_attribute(
                    &options_path,
                    "is mandatory for this operation",
                ));
            }
            None => Vec::new(),
        };

        Ok(Self {
            id,
            title,
            description,
            value,
            contract_period,
            place_of_performance,
            renewal,
            recurrence,
            options,
        })
    }

    /// Re-identify this lot. Used when a division mints permanent identifiers
    /// for replacement lots; everything but identity is carried over.
    pub fn with_id(self, id: LotId) -> Self {
        Self { id, ..self }
    }

    pub fn id_typed(&self) -> LotId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> &Money {
        &self.value
    }

    pub fn contract_period(&self) -> &Period {
        &self.contract_period
    }

    pub fn place_of_performance(&self) -> Option<&PlaceOfPerformance> {
        self.place_of_performance.as_ref()
    }

    pub fn renewal(&self) -> Option<&Renewal> {
        self.renewal.as_ref()
    }

    pub fn recurrence(&self) -> Option<&Recurrence> {
        self.recurrence.as_ref()
    }

    pub fn options(&self) -> &[LotOption] {
        &self.options
    }
}

impl AggregateRoot for Lot {
    type Id = LotId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn try_period(path: &str, raw: &RawPeriod) -> DomainResult<Period> {
    match raw.end_date.as_deref() {
        Some(end) => Period::try_create(path, &raw.start_date, end),
        None => Period::try_create_open(path, &raw.start_date),
    }
}

fn required_option<R, T>(
    path: &str,
    required: bool,
    raw: &Option<R>,
    build: impl FnOnce(&str, &R) -> DomainResult<T>,
) -> DomainResult<Option<T>> {
    match raw {
        Some(value) => Ok(Some(build(path, value)?)),
        None if required => Err(DomainError::incorrect_attribute(
            path,
            "is mandatory for this operation",
        )),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use forgetender_requests::RawValue;

    fn raw_lot() -> RawLot {
        RawLot {
            id: LotId::generate().to_string(),
            title: "Lot 1: desks".to_string(),
            description: "Office desks, assembled".to_string(),
            value: RawValue {
                amount: Decimal::from_str("500.00").unwrap(),
                currency: "EUR".to_string(),
            },
            contract_period: RawPeriod {
                start_date: "2024-04-01T00:00:00Z".to_string(),
                end_date: Some("2024-10-01T00:00:00Z".to_string()),
            },
            place_of_performance: None,
            renewal: None,
            recurrence: None,
            options: None,
        }
    }

    #[test]
    fn valid_lot_constructs_with_standard_requirements() {
        let lot = Lot::try_create("lots[0]", &raw_lot(), LotRequirements::standard()).unwrap();
        assert_eq!(lot.value().currency().as_str(), "EUR");
        assert!(lot.renewal().is_none());
        assert!(lot.options().is_empty());
    }

    #[test]
    fn zero_value_is_rejected() {
        let mut raw = raw_lot();
        raw.value.amount = Decimal::ZERO;
        let err = Lot::try_create("lots[0]", &raw, LotRequirements::standard()).unwrap_err();
        assert_eq!(
            err,
            DomainError::incorrect_attribute("lots[0].value.amount", "must be greater than zero")
        );
    }

    #[test]
    fn contract_period_requires_an_end_date() {
        let mut raw = raw_lot();
        raw.contract_period.end_date = None;
        let err = Lot::try_create("lots[0]", &raw, LotRequirements::standard()).unwrap_err();
        assert_eq!(
            err,
            DomainError::incorrect_attribute("lots[0].contractPeriod", "endDate is mandatory")
        );
    }

    #[test]
    fn inverted_contract_period_is_rejected() {
        let mut raw = raw_lot();
        raw.contract_period.start_date = "2024-10-01T00:00:00Z".to_string();
        raw.contract_period.end_date = Some("2024-04-01T00:00:00Z".to_string());
        let err = Lot::try_create("lots[0]", &raw, LotRequirements::standard()).unwrap_err();
        assert!(matches!(err, DomainError::IncorrectAttribute { .. }));
    }

    #[test]
    fn complete_requirements_demand_the_optional_sub_structures() {
        let err = Lot::try_create("lots[0]", &raw_lot(), LotRequirements::complete()).unwrap_err();
        assert_eq!(
            err,
            DomainError::incorrect_attribute("lots[0].renewal", "is mandatory for this operation")
        );
    }

    #[test]
    fn renewal_bounds_must_be_ordered() {
        let mut raw = raw_lot();
        raw.renewal = Some(RawRenewal {
            description: None,
            minimum_renewals: Some(3),
            maximum_renewals: Some(1),
            period: None,
        });
        let err = Lot::try_create("lots[0]", &raw, LotRequirements::standard()).unwrap_err();
        assert_eq!(
            err,
            DomainError::incorrect_attribute(
                "lots[0].renewal",
                "maximumRenewals must not be less than minimumRenewals"
            )
        );
    }

    #[test]
    fn present_but_empty_options_are_rejected() {
        let mut raw = raw_lot();
        raw.options = Some(Vec::new());
        let err = Lot::try_create("lots[0]", &raw, LotRequirements::standard()).unwrap_err();
        assert_eq!(err, DomainError::empty_collection("lots[0].options"));
    }

    #[test]
    fn recurrence_dates_must_not_be_empty() {
        let mut raw = raw_lot();
        raw.recurrence = Some(RawRecurrence {
            dates: Vec::new(),
            description: None,
        });
        let err = Lot::try_create("lots[0]", &raw, LotRequirements::standard()).unwrap_err();
        assert_eq!(
            err,
            DomainError::empty_collection("lots[0].recurrence.dates")
        );
    }

    #[test]
    fn with_id_replaces_identity_only() {
        let lot = Lot::try_create("lots[0]", &raw_lot(), LotRequirements::standard()).unwrap();
        let minted = LotId::generate();
        let renamed = lot.clone().with_id(minted);
        assert_eq!(renamed.id_typed(), minted);
        assert_eq!(renamed.title(), lot.title());
        assert_eq!(renamed.value(), lot.value());
    }

    #[test]
    fn construction_is_idempotent() {
        let raw = raw_lot();
        let first = Lot::try_create("lots[0]", &raw, LotRequirements::standard());
        let second = Lot::try_create("lots[0]", &raw, LotRequirements::standard());
        assert_eq!(first, second);
    }
}
