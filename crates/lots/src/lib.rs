//! Lots domain module.
//!
//! A lot is the unit a tender is divided into for bidding purposes; it carries
//! its own value, contract period and optional renewal/recurrence/option
//! structures.

pub mod lot;

pub use lot::{Address, Lot, LotOption, LotRequirements, PlaceOfPerformance, Recurrence, Renewal};
