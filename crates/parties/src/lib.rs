//! Parties domain module (procuring entities and their responsible persons).
//!
//! This crate contains the validated organization side of a notice,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod party;

pub use party::{Address, BusinessFunction, EntityIdentifier, Person, ProcuringEntity};
