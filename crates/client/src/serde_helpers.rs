//! Serde helpers for the Analytics wire format.
//!
//! Responsibilities:
//! - Omit request flags that the API only expects when set.
//! - Tolerate explicit `null` where the API documents an array or flag.
//!
//! Invariants / assumptions:
//! - Absent and `null` are treated the same on decode.

use serde::{Deserialize, Deserializer};

/// `skip_serializing_if` predicate for "omit when false" flags.
pub fn is_false(value: &bool) -> bool {
    !*value
}

/// Decode `null` as the type's default value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
