//! Query-string building shared by every resource operation.
//!
//! Each operation describes its parameters as a table and the rules for
//! inclusion live here, once:
//!
//! - strings are sent only when non-empty
//! - booleans and integers are always sent
//! - string lists are comma-joined and sent only when non-empty
//!
//! ```ignore
//! let mut params = QueryParams::new();
//! query_params! { params =>
//!     "rsids" => optional &self.rsids,
//!     "favorite" => flag self.favorite,
//!     "limit" => required self.limit,
//!     "expansion" => list &self.expansion,
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;

/// Ordered query parameters. Each key appears at most once; a later write to
/// the same key replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` when `value` is non-empty.
    pub fn optional(mut self, key: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.params.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Set `key` when `value` is present and non-empty.
    pub fn optional_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.optional(key, v),
            None => self,
        }
    }

    /// Always set `key`.
    pub fn required(mut self, key: &str, value: impl Display) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    /// Always set `key` to `true` or `false`.
    pub fn flag(self, key: &str, value: bool) -> Self {
        self.required(key, value)
    }

    /// Set `key` to the comma-joined values when there is at least one.
    pub fn list(mut self, key: &str, values: &[String]) -> Self {
        if !values.is_empty() {
            self.params.insert(key.to_string(), values.join(","));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Something that renders itself as query parameters.
///
/// Implemented by every per-operation query struct.
pub trait ToQuery {
    fn to_query(&self) -> QueryParams;
}

impl ToQuery for QueryParams {
    fn to_query(&self) -> QueryParams {
        self.clone()
    }
}

/// Populate a [`QueryParams`] from a table of parameters.
///
/// # Syntax Patterns
///
/// - `key => optional expr` - `&str`/`&String`, included if non-empty
/// - `key => opt expr` - `Option<&str>`, included if Some and non-empty
/// - `key => required expr` - any `Display`, always included
/// - `key => flag expr` - `bool`, always included
/// - `key => list expr` - `&[String]`, comma-joined, included if non-empty
#[macro_export]
macro_rules! query_params {
    ($params:ident =>) => {};

    ($params:ident => $key:literal => optional $val:expr, $($rest:tt)*) => {
        $params = $params.optional($key, $val);
        $crate::query_params!($params => $($rest)*);
    };

    ($params:ident => $key:literal => opt $val:expr, $($rest:tt)*) => {
        $params = $params.optional_opt($key, $val);
        $crate::query_params!($params => $($rest)*);
    };

    ($params:ident => $key:literal => required $val:expr, $($rest:tt)*) => {
        $params = $params.required($key, $val);
        $crate::query_params!($params => $($rest)*);
    };

    ($params:ident => $key:literal => flag $val:expr, $($rest:tt)*) => {
        $params = $params.flag($key, $val);
        $crate::query_params!($params => $($rest)*);
    };

    ($params:ident => $key:literal => list $val:expr, $($rest:tt)*) => {
        $params = $params.list($key, $val);
        $crate::query_params!($params => $($rest)*);
    };
}
