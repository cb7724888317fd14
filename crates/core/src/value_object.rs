//! Value object trait: equality by value, not identity.

/// Marker trait for immutable, value-compared domain objects.
///
/// A value object has no identity: two instances with the same attribute
/// values are the same value. `Money { 100, "USD" }` is a value object; a
/// `Lot` with a `LotId` is an entity. Value objects are never mutated — to
/// "change" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
