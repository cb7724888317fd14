//! Reusable structural validators.
//!
//! Each rule is a small pure predicate returning `DomainResult`; the smart
//! constructors compose them with `?`. Rules never copy or transform the
//! collections they check.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{DomainError, DomainResult};

/// Fail with [`DomainError::EmptyCollection`] when the slice has no elements;
/// otherwise pass it through unchanged.
pub fn non_empty<'a, T>(path: &str, items: &'a [T]) -> DomainResult<&'a [T]> {
    if items.is_empty() {
        Err(DomainError::empty_collection(path))
    } else {
        Ok(items)
    }
}

/// Fail with [`DomainError::IncorrectAttribute`] when the string is empty or
/// whitespace-only; otherwise hand back an owned copy.
pub fn non_blank(path: &str, value: &str) -> DomainResult<String> {
    if value.trim().is_empty() {
        Err(DomainError::incorrect_attribute(path, "must not be blank"))
    } else {
        Ok(value.to_string())
    }
}

/// Check that every extracted key occurs exactly once.
///
/// Runs in linear time: one extraction pass with set membership, no nested
/// loops. The failure payload is exactly the set of keys that repeat (each
/// reported once, in first-seen order), never the keys that are unique.
pub fn unique_by<T, K, F>(path: &str, items: &[T], key: F) -> DomainResult<()>
where
    K: Eq + Hash + std::fmt::Display,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for item in items {
        let k = key(item);
        let repr = k.to_string();
        if !seen.insert(k) && reported.insert(repr.clone()) {
            duplicates.push(repr);
        }
    }
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(DomainError::uniqueness(path, duplicates))
    }
}

/// Check that every reference names a declared identifier.
///
/// The declared set is built once by the caller and reused across all
/// references; the rule fails with [`DomainError::MissingReference`] at the
/// first reference absent from it.
pub fn known_references<'a, K, I>(
    path: &str,
    declared: &HashSet<K>,
    references: I,
) -> DomainResult<()>
where
    K: Eq + Hash + std::fmt::Display + 'a,
    I: IntoIterator<Item = &'a K>,
{
    for reference in references {
        if !declared.contains(reference) {
            return Err(DomainError::missing_reference(path, reference.to_string()));
        }
    }
    Ok(())
}
