//! Validated identifiers used across the notice domain.
//!
//! Construction is the only way to obtain an instance: every `parse` checks
//! the raw string against the identifier's lexical grammar and fails closed.
//! Once constructed, a value is well-formed for the rest of the computation
//! and is never re-validated downstream.

use core::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

static CPID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ocds-[a-z0-9]{6}-[A-Z]{2}-\d{13}$").unwrap());

static OCID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ocds-[a-z0-9]{6}-[A-Z]{2}-\d{13}-[A-Z]{2,4}-\d{13}$").unwrap());

static ORDINAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(\.\d+)*$").unwrap());

macro_rules! impl_uuid_id {
    ($t:ty) => {
        impl $t {
            /// Parse a raw wire string as a uuid-format identifier.
            pub fn parse(path: &str, raw: &str) -> DomainResult<Self> {
                Uuid::from_str(raw)
                    .map(Self)
                    .map_err(|_| DomainError::pattern_mismatch(path, raw))
            }

            /// Mint a fresh identifier (UUIDv7, time-ordered).
            pub fn generate() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }
    };
}

macro_rules! impl_pattern_id {
    ($t:ty, $pattern:expr) => {
        impl $t {
            /// Parse a raw wire string against this identifier's grammar.
            pub fn parse(path: &str, raw: &str) -> DomainResult<Self> {
                if $pattern.is_match(raw) {
                    Ok(Self(raw.to_string()))
                } else {
                    Err(DomainError::pattern_mismatch(path, raw))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// Composite procurement identifier, e.g. `ocds-b3wdp1-MD-1580306096784`.
///
/// Identifies the procurement as a whole across all of its stages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cpid(String);

impl_pattern_id!(Cpid, CPID_PATTERN);

/// Per-stage container identifier: the owning [`Cpid`] plus a stage suffix,
/// e.g. `ocds-b3wdp1-MD-1580306096784-EV-1580306117666`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Ocid(String);

impl_pattern_id!(Ocid, OCID_PATTERN);

impl Ocid {
    /// The composite procurement identifier this stage belongs to.
    pub fn cpid(&self) -> Cpid {
        let prefix: Vec<&str> = self.0.split('-').take(4).collect();
        Cpid(prefix.join("-"))
    }
}

/// Identifier of a lot (system-minted space, uuid format).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LotId(Uuid);

impl_uuid_id!(LotId);

/// Identifier of an item (system-minted space, uuid format).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl_uuid_id!(ItemId);

/// Identifier of a party (procuring entity, person container).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(Uuid);

impl_uuid_id!(PartyId);

/// Identifier of an exchange criterion, dotted-ordinal grammar (`1`, `2.1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CriterionId(String);

impl_pattern_id!(CriterionId, ORDINAL_PATTERN);

/// Identifier of a requirement group within a criterion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequirementGroupId(String);

impl_pattern_id!(RequirementGroupId, ORDINAL_PATTERN);

/// Identifier of a single requirement within a requirement group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequirementId(String);

impl_pattern_id!(RequirementId, ORDINAL_PATTERN);
