//! Types shared by several resources.

use serde::{Deserialize, Serialize};

use crate::endpoints::{QueryParams, ToQuery};
use crate::serde_helpers::null_as_default;

/// Page envelope returned by the paged list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<T>,
    #[serde(default)]
    pub number: i64,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub number_of_elements: i64,
    #[serde(default)]
    pub total_elements: i64,
    #[serde(default)]
    pub previous_page: bool,
    #[serde(default)]
    pub first_page: bool,
    #[serde(default)]
    pub next_page: bool,
    #[serde(default)]
    pub last_page: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort: Vec<Sort>,
    #[serde(default)]
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        !self.last_page
    }
}

/// Owner of a shared component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
}

/// Sort applied to a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(default)]
    pub ignore_case: bool,
    #[serde(default)]
    pub ascending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<TaggedComponent>>,
}

/// A component a tag is attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggedComponent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Options accepted by the single-component lookups.
///
/// `locale` is sent only when non-empty, `expansion` only when it has entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupOptions {
    pub locale: String,
    pub expansion: Vec<String>,
}

impl LookupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn expansion<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expansion = fields.into_iter().map(Into::into).collect();
        self
    }
}

impl ToQuery for LookupOptions {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .optional("locale", &self.locale)
            .list("expansion", &self.expansion)
    }
}
