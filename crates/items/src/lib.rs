//! Items domain module.
//!
//! An item is one procured good/work/service line, classified by a CPV-style
//! code and pointing at the lot it will be bought under.

pub mod item;

pub use item::{Classification, Item, Unit};
