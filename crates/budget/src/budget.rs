use rust_decimal::Decimal;

use forgetender_core::{rules, DomainError, DomainResult, Money, Ocid, Period};
use forgetender_requests::{RawBudget, RawBudgetBreakdown, RawPeriod};

/// One funding source of the budget.
///
/// `id` names the funding-source stage container the allocation comes from,
/// so it follows the per-stage container identifier grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetBreakdown {
    pub id: Ocid,
    pub description: Option<String>,
    pub amount: Money,
    pub period: Option<Period>,
}

impl BudgetBreakdown {
    fn try_create(path: &str, raw: &RawBudgetBreakdown) -> DomainResult<Self> {
        let id = Ocid::parse(&format!("{path}.id"), &raw.id)?;

        let amount_path = format!("{path}.amount");
        let amount = Money::try_create(&amount_path, raw.amount.amount, &raw.amount.currency)?;
        if amount.amount() <= Decimal::ZERO {
            return Err(DomainError::incorrect_attribute(
                &format!("{amount_path}.amount"),
                "must be greater than zero",
            ));
        }

        let period = match &raw.period {
            Some(p) => Some(try_period(&format!("{path}.period"), p)?),
            None => None,
        };

        Ok(Self {
            id,
            description: raw.description.clone(),
            amount,
            period,
        })
    }
}

/// The validated planning budget of a notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    id: String,
    description: Option<String>,
    amount: Money,
    period: Period,
    breakdown: Vec<BudgetBreakdown>,
}

impl Budget {
    /// Validate a raw budget into an aggregate.
    ///
    /// The breakdown must be non-empty with unique ids, sum in one currency,
    /// and the sum must equal the declared total.
    pub fn try_create(path: &str, raw: &RawBudget) -> DomainResult<Self> {
        let id = rules::non_blank(&format!("{path}.id"), &raw.id)?;

        let amount_path = format!("{path}.amount");
        let amount = Money::try_create(&amount_path, raw.amount.amount, &raw.amount.currency)?;
        if amount.amount() <= Decimal::ZERO {
            return Err(DomainError::incorrect_attribute(
                &format!("{amount_path}.amount"),
                "must be greater than zero",
            ));
        }

        let period_path = format!("{path}.period");
        let period_end = raw
            .period
            .end_date
            .as_deref()
            .ok_or_else(|| DomainError::incorrect_attribute(&period_path, "endDate is mandatory"))?;
        let period = Period::try_create(&period_path, &raw.period.start_date, period_end)?;

        let breakdown_path = format!("{path}.breakdown");
        rules::non_empty(&breakdown_path, &raw.breakdown)?;

        let mut breakdown = Vec::with_capacity(raw.breakdown.len());
        for (i, raw_part) in raw.breakdown.iter().enumerate() {
            breakdown.push(BudgetBreakdown::try_create(
                &format!("{breakdown_path}[{i}]"),
                raw_part,
            )?);
        }
        rules::unique_by(&breakdown_path, &breakdown, |part| part.id.clone())?;

        let total = Money::sum(
            breakdown.iter().map(|part| part.amount.clone()),
            |left, right| DomainError::incompatible_currency(left.as_str(), right.as_str()),
        )?
        .ok_or_else(|| DomainError::empty_collection(&breakdown_path))?;

        if total.currency() != amount.currency() {
            return Err(DomainError::incompatible_currency(
                amount.currency().as_str(),
                total.currency().as_str(),
            ));
        }
        if total.amount() != amount.amount() {
            return Err(DomainError::incorrect_attribute(
                &format!("{amount_path}.amount"),
                "must equal the sum of breakdown amounts",
            ));
        }

        Ok(Self {
            id,
            description: raw.description.clone(),
            amount,
            period,
            breakdown,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn period(&self) -> &Period {
        &self.period
    }

    pub fn breakdown(&self) -> &[BudgetBreakdown] {
        &self.breakdown
    }
}

fn try_period(path: &str, raw: &RawPeriod) -> DomainResult<Period> {
    match raw.end_date.as_deref() {
        Some(end) => Period::try_create(path, &raw.start_date, end),
        None => Period::try_create_open(path, &raw.start_date),
    }
}
