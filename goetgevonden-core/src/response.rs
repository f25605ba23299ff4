//! Response models and shape normalization
//!
//! The search endpoints answer in one of two shapes: the flat Broccoli shape
//! (top-level `results` and `total`) and the Elasticsearch-style nested shape
//! (`hits.hits` and `hits.total`). Both normalize into [`SearchResult`] so
//! callers never branch on the source shape. Parsing works on raw
//! [`serde_json::Value`]s with per-field defaults and cannot fail on missing
//! fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// SERVER METADATA
// ============================================================================

/// Server information returned by the `/about` endpoint.
///
/// Every field defaults to the empty string when absent in the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutInfo {
    pub app_name: String,
    pub version: String,
    pub started_at: String,
    pub base_uri: String,
    pub huc_log_level: String,
}

impl AboutInfo {
    /// Build from a raw response value.
    pub fn from_value(data: &Value) -> Self {
        Self {
            app_name: str_field(data, "appName"),
            version: str_field(data, "version"),
            started_at: str_field(data, "startedAt"),
            base_uri: str_field(data, "baseURI"),
            huc_log_level: str_field(data, "hucLogLevel"),
        }
    }
}

// ============================================================================
// VIEW CONFIGURATIONS
// ============================================================================

/// Scope of a view configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ViewScope {
    #[default]
    Overlap,
    Within,
}

impl ViewScope {
    /// Parse a wire value. Anything other than `WITHIN` is `Overlap`.
    pub fn parse(value: &str) -> Self {
        match value {
            "WITHIN" => ViewScope::Within,
            _ => ViewScope::Overlap,
        }
    }

    /// Wire value of this scope.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewScope::Overlap => "OVERLAP",
            ViewScope::Within => "WITHIN",
        }
    }
}

impl std::fmt::Display for ViewScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One path/value annotation constraint within a view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewAnnoConstraint {
    pub path: String,
    pub value: String,
}

impl ViewAnnoConstraint {
    /// Build from a raw response value. Missing fields become empty strings.
    pub fn from_value(data: &Value) -> Self {
        Self {
            path: str_field(data, "path"),
            value: str_field(data, "value"),
        }
    }
}

/// Named view definition for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfiguration {
    pub anno: Vec<ViewAnnoConstraint>,
    pub scope: ViewScope,
}

impl ViewConfiguration {
    /// Build from a raw response value.
    ///
    /// An absent or unrecognized `scope` falls back to [`ViewScope::Overlap`].
    pub fn from_value(data: &Value) -> Self {
        let anno = data
            .get("anno")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(ViewAnnoConstraint::from_value).collect())
            .unwrap_or_default();
        let scope = data
            .get("scope")
            .and_then(Value::as_str)
            .map(ViewScope::parse)
            .unwrap_or_default();
        Self { anno, scope }
    }
}

// ============================================================================
// SEARCH RESULTS
// ============================================================================

/// The two known upstream shapes for search-style payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseShape {
    /// Top-level `results` and `total` (Broccoli).
    Flat,
    /// `hits.hits` and `hits.total` (Elasticsearch passthrough).
    Nested,
}

impl ResponseShape {
    fn detect(data: &Value) -> Self {
        if data.get("results").is_some() {
            ResponseShape::Flat
        } else {
            ResponseShape::Nested
        }
    }
}

/// Normalized search response.
///
/// `raw_response` retains the payload unmodified, so callers needing
/// shape-specific detail are not blocked by the normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Total hit count, always resolved to a plain integer.
    pub total: i64,
    /// Hit records in response order. Each record is an opaque mapping.
    pub hits: Vec<Value>,
    /// Aggregation results, absent when the response carried none.
    pub aggregations: Option<Value>,
    /// The original response payload.
    pub raw_response: Value,
}

impl SearchResult {
    /// Normalize a raw search payload.
    ///
    /// A `total` that is neither an integer nor an object with an integer
    /// `value` resolves to 0; upstream has not specified that case.
    pub fn from_value(data: &Value) -> Self {
        match ResponseShape::detect(data) {
            ResponseShape::Flat => Self {
                total: resolve_total(data.get("total")),
                hits: array_field(data, "results"),
                aggregations: data.get("aggs").cloned(),
                raw_response: data.clone(),
            },
            ResponseShape::Nested => {
                let hits_obj = data.get("hits").cloned().unwrap_or_else(empty_object);
                Self {
                    total: resolve_total(hits_obj.get("total")),
                    hits: array_field(&hits_obj, "hits"),
                    aggregations: data.get("aggregations").cloned(),
                    raw_response: data.clone(),
                }
            }
        }
    }
}

// ============================================================================
// ANNOTATIONS
// ============================================================================

/// Normalized annotation response for one body id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    /// The body this annotation set belongs to.
    pub body_id: String,
    /// Type of the body, empty when the response carried none.
    pub body_type: String,
    /// Annotation records in response order.
    pub annotations: Vec<Value>,
    /// The original response payload.
    pub raw_response: Value,
}

impl Annotation {
    /// Build from a raw response value.
    ///
    /// `body_id` prefers the caller-supplied identifier; an empty one falls
    /// back to the response's `bodyId` field.
    pub fn from_value(data: &Value, body_id: &str) -> Self {
        let body_id = if body_id.is_empty() {
            str_field(data, "bodyId")
        } else {
            body_id.to_string()
        };
        Self {
            body_id,
            body_type: str_field(data, "bodyType"),
            annotations: array_field(data, "annotations"),
            raw_response: data.clone(),
        }
    }
}

// ============================================================================
// FIELD EXTRACTION HELPERS
// ============================================================================

fn str_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn array_field(data: &Value, key: &str) -> Vec<Value> {
    data.get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn resolve_total(total: Option<&Value>) -> i64 {
    match total {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::Object(fields)) => fields.get("value").and_then(Value::as_i64).unwrap_or(0),
        _ => 0,
    }
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_about_info_from_full_response() {
        let data = json!({
            "appName": "Broccoli",
            "version": "0.40.2",
            "startedAt": "2024-01-01T00:00:00Z",
            "baseURI": "https://api.goetgevonden.nl",
            "hucLogLevel": "INFO",
        });
        let info = AboutInfo::from_value(&data);
        assert_eq!(info.app_name, "Broccoli");
        assert_eq!(info.version, "0.40.2");
        assert_eq!(info.started_at, "2024-01-01T00:00:00Z");
        assert_eq!(info.base_uri, "https://api.goetgevonden.nl");
        assert_eq!(info.huc_log_level, "INFO");
    }

    #[test]
    fn test_about_info_missing_fields_default_to_empty() {
        let info = AboutInfo::from_value(&json!({"version": "1.0.0"}));
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.app_name, "");
        assert_eq!(info.started_at, "");
        assert_eq!(info.base_uri, "");
        assert_eq!(info.huc_log_level, "");
    }

    #[test]
    fn test_view_scope_parse() {
        assert_eq!(ViewScope::parse("WITHIN"), ViewScope::Within);
        assert_eq!(ViewScope::parse("OVERLAP"), ViewScope::Overlap);
        assert_eq!(ViewScope::parse("bogus"), ViewScope::Overlap);
    }

    #[test]
    fn test_view_configuration_from_value() {
        let data = json!({
            "anno": [{"path": "body.type", "value": "Resolution"}],
            "scope": "WITHIN",
        });
        let config = ViewConfiguration::from_value(&data);
        assert_eq!(config.scope, ViewScope::Within);
        assert_eq!(config.anno.len(), 1);
        assert_eq!(config.anno[0].path, "body.type");
        assert_eq!(config.anno[0].value, "Resolution");
    }

    #[test]
    fn test_view_configuration_defaults() {
        let config = ViewConfiguration::from_value(&json!({}));
        assert!(config.anno.is_empty());
        assert_eq!(config.scope, ViewScope::Overlap);

        let config = ViewConfiguration::from_value(&json!({"scope": "SIDEWAYS"}));
        assert_eq!(config.scope, ViewScope::Overlap);
    }

    #[test]
    fn test_search_result_flat_shape() {
        let data = json!({
            "total": {"value": 42, "relation": "eq"},
            "results": [{"_id": "1"}],
            "aggs": {"byYear": {}},
        });
        let result = SearchResult::from_value(&data);
        assert_eq!(result.total, 42);
        assert_eq!(result.hits.len(), 1);
        assert_eq!(result.aggregations, Some(json!({"byYear": {}})));
        assert_eq!(result.raw_response, data);
    }

    #[test]
    fn test_search_result_nested_shape() {
        let data = json!({
            "hits": {
                "total": {"value": 42},
                "hits": [{"_id": "1"}, {"_id": "2"}],
            },
            "aggregations": {"byYear": {}},
        });
        let result = SearchResult::from_value(&data);
        assert_eq!(result.total, 42);
        assert_eq!(result.hits.len(), 2);
        assert_eq!(result.aggregations, Some(json!({"byYear": {}})));
    }

    #[test]
    fn test_search_result_bare_integer_total() {
        let flat = SearchResult::from_value(&json!({"total": 7, "results": []}));
        assert_eq!(flat.total, 7);

        let nested = SearchResult::from_value(&json!({"hits": {"total": 7, "hits": []}}));
        assert_eq!(nested.total, 7);
    }

    #[test]
    fn test_search_result_unrecognized_total_resolves_to_zero() {
        let result = SearchResult::from_value(&json!({"total": "many", "results": []}));
        assert_eq!(result.total, 0);

        let result = SearchResult::from_value(&json!({"total": 1.5, "results": []}));
        assert_eq!(result.total, 0);

        let result = SearchResult::from_value(&json!({"total": {"count": 3}, "results": []}));
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_search_result_empty_payload() {
        let result = SearchResult::from_value(&json!({}));
        assert_eq!(result.total, 0);
        assert!(result.hits.is_empty());
        assert!(result.aggregations.is_none());
    }

    #[test]
    fn test_search_result_flat_without_aggs() {
        let result = SearchResult::from_value(&json!({"total": 1, "results": [{"_id": "1"}]}));
        assert!(result.aggregations.is_none());
    }

    #[test]
    fn test_annotation_prefers_supplied_body_id() {
        let data = json!({
            "bodyId": "from-response",
            "bodyType": "Resolution",
            "annotations": [{"id": "a1"}],
        });
        let annotation = Annotation::from_value(&data, "from-caller");
        assert_eq!(annotation.body_id, "from-caller");
        assert_eq!(annotation.body_type, "Resolution");
        assert_eq!(annotation.annotations.len(), 1);
    }

    #[test]
    fn test_annotation_falls_back_to_response_body_id() {
        let data = json!({"bodyId": "from-response"});
        let annotation = Annotation::from_value(&data, "");
        assert_eq!(annotation.body_id, "from-response");
        assert_eq!(annotation.body_type, "");
        assert!(annotation.annotations.is_empty());
    }
}
