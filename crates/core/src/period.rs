//! Time periods and date parsing.

use chrono::{DateTime, Utc};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Parse a raw wire date-time (RFC 3339 with mandatory offset).
///
/// Pure format validation only; chronological ordering against a paired field
/// belongs to [`Period::try_create`], not here.
pub fn parse_date(path: &str, raw: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DomainError::pattern_mismatch(path, raw))
}

/// A validated time period.
///
/// Invariant: when an end date is present it does not precede the start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
}

impl Period {
    /// Build a closed period from raw start/end dates.
    pub fn try_create(path: &str, raw_start: &str, raw_end: &str) -> DomainResult<Self> {
        let start = parse_date(&format!("{path}.startDate"), raw_start)?;
        let end = parse_date(&format!("{path}.endDate"), raw_end)?;
        if end < start {
            return Err(DomainError::incorrect_attribute(
                path,
                "endDate must not precede startDate",
            ));
        }
        Ok(Self {
            start,
            end: Some(end),
        })
    }

    /// Build a start-only period (e.g. a business function still in effect).
    pub fn try_create_open(path: &str, raw_start: &str) -> DomainResult<Self> {
        let start = parse_date(&format!("{path}.startDate"), raw_start)?;
        Ok(Self { start, end: None })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }
}

impl ValueObject for Period {}
