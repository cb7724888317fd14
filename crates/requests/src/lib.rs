//! `forgetender-requests` — raw, untrusted wire request shapes.
//!
//! These structs mirror the nested notice payloads exactly as they arrive:
//! every optional leaf is an `Option`, every constrained scalar is a plain
//! `String` or `Decimal`. They carry data, not behavior — all validation
//! lives in the smart constructors of the domain crates.

pub mod common;
pub mod criterion;
pub mod division;
pub mod item;
pub mod lot;
pub mod party;
pub mod planning;
pub mod tender;

pub use common::{RawAddress, RawClassification, RawIdentifier, RawPeriod, RawUnit, RawValue};
pub use criterion::{RawCriterion, RawRequirement, RawRequirementGroup};
pub use division::DivideLotRequest;
pub use item::RawItem;
pub use lot::{RawLot, RawLotOption, RawPlaceOfPerformance, RawRecurrence, RawRenewal};
pub use party::{RawBusinessFunction, RawPerson, RawProcuringEntity};
pub use planning::{RawBudget, RawBudgetBreakdown, RawPlanning};
pub use tender::{CreateTenderRequest, RawDocument, RawTender};
