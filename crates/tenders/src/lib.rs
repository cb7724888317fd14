//! Tenders domain module — the top of the validation graph.
//!
//! A raw create-notice or lot-division request enters here and leaves as
//! either a fully validated aggregate or a single typed `DomainError`;
//! nothing in between is observable.

pub mod division;
pub mod policy;
pub mod tender;

pub use division::{DivisionConfig, LotDivision};
pub use policy::OperationPolicy;
pub use tender::{Document, Tender};
