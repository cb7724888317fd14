//! Currency-tagged decimal amounts.
//!
//! Arithmetic between two `Money` values is only defined when their currencies
//! are equal; addition across mismatched currencies yields no value, never a
//! silently wrong number.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

static CURRENCY_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());

/// ISO-4217-shaped currency code (three uppercase letters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn parse(path: &str, raw: &str) -> DomainResult<Self> {
        if CURRENCY_PATTERN.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(DomainError::pattern_mismatch(path, raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for Currency {}

/// A decimal amount tagged with its currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Build a `Money` from raw wire parts, validating the currency code.
    pub fn try_create(path: &str, amount: Decimal, currency_raw: &str) -> DomainResult<Self> {
        let currency = Currency::parse(&format!("{path}.currency"), currency_raw)?;
        Ok(Self { amount, currency })
    }

    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Add two amounts of the same currency.
    ///
    /// Returns `None` when the currencies differ, distinguishable from a zero
    /// total. Callers needing a hard failure wrap the `None` in an explicit
    /// [`DomainError::IncompatibleCurrency`].
    pub fn plus(&self, other: &Money) -> Option<Money> {
        if self.currency == other.currency {
            Some(Money {
                amount: self.amount + other.amount,
                currency: self.currency.clone(),
            })
        } else {
            None
        }
    }

    /// Reduce a sequence of amounts under the first element's currency.
    ///
    /// Aborts with the caller-supplied error at the first element whose
    /// currency differs. An empty sequence reduces to `Ok(None)`, not to zero,
    /// so "nothing summed" is never mistaken for "summed to zero".
    pub fn sum<I, F>(values: I, on_mismatch: F) -> DomainResult<Option<Money>>
    where
        I: IntoIterator<Item = Money>,
        F: Fn(&Currency, &Currency) -> DomainError,
    {
        let mut iter = values.into_iter();
        let Some(mut total) = iter.next() else {
            return Ok(None);
        };
        for value in iter {
            total = total
                .plus(&value)
                .ok_or_else(|| on_mismatch(&total.currency, &value.currency))?;
        }
        Ok(Some(total))
    }
}

impl ValueObject for Money {}
