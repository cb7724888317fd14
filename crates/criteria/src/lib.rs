//! Criteria domain module.
//!
//! Exchange criteria attached to a notice: what a tenderer must demonstrate,
//! organized as criterion → requirement groups → requirements.

pub mod criterion;

pub use criterion::{Criterion, CriterionRelation, Requirement, RequirementGroup};
