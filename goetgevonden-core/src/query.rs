//! Request-side query model for the search endpoints
//!
//! These types serialize into the exact body shape the remote index expects.
//! Every optional field is omitted entirely when unset; the wire form never
//! contains `null`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Sort direction for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Wire value of this sort order.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive bound filter on a named index field.
///
/// `name` is always serialized; `from`/`to` only when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl IndexRange {
    /// Create an unbounded range on a field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            from: None,
            to: None,
        }
    }

    /// Create a range bounded on both ends.
    pub fn between(
        name: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    /// Set the lower bound.
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the upper bound.
    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }
}

/// Structured search request before transmission.
///
/// Serializes to the JSON body of `POST /projects/{project}/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexQuery {
    /// Full-text query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Term filters, field name to value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<HashMap<String, Value>>,
    /// Date range filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<IndexRange>,
    /// Numeric range filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<IndexRange>,
    /// Aggregation definitions, name to definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggs: Option<HashMap<String, Value>>,
}

impl IndexQuery {
    /// Create an empty query (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the full-text query.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the term filters.
    pub fn with_terms(mut self, terms: HashMap<String, Value>) -> Self {
        self.terms = Some(terms);
        self
    }

    /// Set the date range filter.
    pub fn with_date(mut self, date: IndexRange) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the numeric range filter.
    pub fn with_range(mut self, range: IndexRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the aggregation definitions.
    pub fn with_aggs(mut self, aggs: HashMap<String, Value>) -> Self {
        self.aggs = Some(aggs);
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
