//! Facade over the GoetGevonden API endpoints.
//!
//! Each operation composes the transport with the request/response model from
//! `goetgevonden-core`: build the path and parameters, issue one request,
//! normalize the body. The per-operation option structs serialize to exactly
//! the outgoing query mapping, so only non-default values ever hit the wire.

use std::collections::HashMap;

use goetgevonden_core::{
    AboutInfo, Annotation, GoetGevondenError, GoetGevondenResult, IndexQuery, IndexRange,
    SearchResult, SortOrder, ViewConfiguration,
};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::config::{ClientConfig, ConfigError};
use crate::transport::HttpTransport;

// ============================================================================
// PER-OPERATION OPTIONS
// ============================================================================

/// Paging, highlighting, and sorting knobs for [`GoetGevondenClient::search`].
///
/// The five paging/sort parameters are always transmitted; `indexName` only
/// when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// Pagination offset. Must be non-negative.
    pub from: i32,
    /// Page size. Must be non-negative.
    pub size: i32,
    /// Size of text fragments in highlights.
    pub fragment_size: i32,
    /// Field to sort by.
    pub sort_by: String,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Specific index to search instead of the project default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            from: 0,
            size: 10,
            fragment_size: 100,
            sort_by: "_score".to_string(),
            sort_order: SortOrder::Desc,
            index_name: None,
        }
    }
}

impl SearchOptions {
    /// Default options with the given pagination window.
    pub fn page(from: i32, size: i32) -> Self {
        Self {
            from,
            size,
            ..Self::default()
        }
    }
}

/// Filters for [`GoetGevondenClient::annotations`].
///
/// `relativeTo` is always transmitted; the rest only when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationOptions {
    /// Reference point for annotation offsets.
    pub relative_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_results: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap_types: Option<String>,
}

impl Default for AnnotationOptions {
    fn default() -> Self {
        Self {
            relative_to: "Origin".to_string(),
            include_results: None,
            views: None,
            overlap_types: None,
        }
    }
}

/// Knobs for [`GoetGevondenClient::fill_index`]; all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_anno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_values: Option<String>,
    /// Limit on the number of items to index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteIndexParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    delete_key: Option<String>,
}

// ============================================================================
// CLIENT FACADE
// ============================================================================

/// Client for the GoetGevonden API.
///
/// The API serves the Republic project: De resoluties van de Staten-Generaal
/// (Resolutions of the States-General of the Dutch Republic).
///
/// Cloning is cheap and shares the underlying connection pool; dropping the
/// last clone releases it.
///
/// # Example
/// ```no_run
/// use goetgevonden_client::{ClientConfig, GoetGevondenClient};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GoetGevondenClient::new(ClientConfig::default())?;
/// let results = client.search_text("Amsterdam").await?;
/// println!("Found {} results", results.total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GoetGevondenClient {
    transport: HttpTransport,
    default_project: String,
}

impl GoetGevondenClient {
    /// Create a client from a configuration, validating it first.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            transport,
            default_project: config.default_project,
        })
    }

    /// Project used by the convenience search methods.
    pub fn default_project(&self) -> &str {
        &self.default_project
    }

    // ------------------------------------------------------------------------
    // Server information
    // ------------------------------------------------------------------------

    /// Get basic server information from `/about`.
    pub async fn about(&self) -> GoetGevondenResult<AboutInfo> {
        let data = self
            .transport
            .send::<(), ()>(Method::GET, "/about", None, None)
            .await?;
        Ok(AboutInfo::from_value(&data.unwrap_or(Value::Null)))
    }

    /// Get the server homepage as text, never JSON-parsed.
    pub async fn home_page(&self) -> GoetGevondenResult<String> {
        self.transport.get_text("/").await
    }

    // ------------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------------

    /// List the configured project ids (e.g. `["republic"]`).
    pub async fn list_projects(&self) -> GoetGevondenResult<Vec<String>> {
        let data = self
            .transport
            .send::<(), ()>(Method::GET, "/projects", None, None)
            .await?;
        let projects = data
            .as_ref()
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(projects)
    }

    /// Get the distinct body types configured for a project.
    pub async fn project_body_types(&self, project: &str) -> GoetGevondenResult<Option<Value>> {
        let path = format!("/projects/{}", project);
        self.transport
            .send::<(), ()>(Method::GET, &path, None, None)
            .await
    }

    /// Get the view configurations of a project, keyed by view name.
    pub async fn views(
        &self,
        project: &str,
    ) -> GoetGevondenResult<HashMap<String, ViewConfiguration>> {
        let path = format!("/projects/{}/views", project);
        let data = self
            .transport
            .send::<(), ()>(Method::GET, &path, None, None)
            .await?;
        let views = data
            .as_ref()
            .and_then(Value::as_object)
            .map(|fields| {
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), ViewConfiguration::from_value(value)))
                    .collect()
            })
            .unwrap_or_default();
        Ok(views)
    }

    /// Get the annotations of one body within a project.
    pub async fn annotations(
        &self,
        project: &str,
        body_id: &str,
        options: &AnnotationOptions,
    ) -> GoetGevondenResult<Annotation> {
        let path = format!("/projects/{}/{}", project, body_id);
        let data = self
            .transport
            .send::<AnnotationOptions, ()>(Method::GET, &path, Some(options), None)
            .await?;
        Ok(Annotation::from_value(&data.unwrap_or(Value::Null), body_id))
    }

    // ------------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------------

    /// Search a project index.
    ///
    /// Pagination bounds are validated before any request is issued.
    pub async fn search(
        &self,
        project: &str,
        query: &IndexQuery,
        options: &SearchOptions,
    ) -> GoetGevondenResult<SearchResult> {
        if options.from < 0 {
            return Err(GoetGevondenError::Validation {
                field: "from",
                reason: "must be non-negative".to_string(),
            });
        }
        if options.size < 0 {
            return Err(GoetGevondenError::Validation {
                field: "size",
                reason: "must be non-negative".to_string(),
            });
        }

        let path = format!("/projects/{}/search", project);
        let data = self
            .transport
            .send(Method::POST, &path, Some(options), Some(query))
            .await?;
        Ok(SearchResult::from_value(&data.unwrap_or(Value::Null)))
    }

    /// Full-text search in the default project with default paging.
    pub async fn search_text(&self, text: &str) -> GoetGevondenResult<SearchResult> {
        let query = IndexQuery::new().with_text(text);
        self.search(&self.default_project, &query, &SearchOptions::default())
            .await
    }

    /// Date-bounded search in the default project.
    ///
    /// `date_field` defaults to `"date"` when `None`.
    pub async fn search_by_date(
        &self,
        start: &str,
        end: &str,
        text: Option<&str>,
        date_field: Option<&str>,
    ) -> GoetGevondenResult<SearchResult> {
        let range = IndexRange::between(date_field.unwrap_or("date"), start, end);
        let mut query = IndexQuery::new().with_date(range);
        if let Some(text) = text {
            query = query.with_text(text);
        }
        self.search(&self.default_project, &query, &SearchOptions::default())
            .await
    }

    // ------------------------------------------------------------------------
    // Index administration (Brinta)
    //
    // These endpoints may require authorization upstream; the client passes
    // calls through without special handling.
    // ------------------------------------------------------------------------

    /// List the indices of a project.
    pub async fn indices(&self, project: &str) -> GoetGevondenResult<Option<Value>> {
        let path = format!("/brinta/{}/indices", project);
        self.transport
            .send::<(), ()>(Method::GET, &path, None, None)
            .await
    }

    /// Create an index.
    pub async fn create_index(
        &self,
        project: &str,
        index: &str,
    ) -> GoetGevondenResult<Option<Value>> {
        let path = format!("/brinta/{}/{}", project, index);
        self.transport
            .send::<(), ()>(Method::POST, &path, None, None)
            .await
    }

    /// Delete an index, optionally authorizing with a deletion key.
    pub async fn delete_index(
        &self,
        project: &str,
        index: &str,
        delete_key: Option<&str>,
    ) -> GoetGevondenResult<Option<Value>> {
        let path = format!("/brinta/{}/{}", project, index);
        let params = DeleteIndexParams {
            delete_key: delete_key.map(str::to_string),
        };
        self.transport
            .send::<DeleteIndexParams, ()>(Method::DELETE, &path, Some(&params), None)
            .await
    }

    /// Fill an index with project data.
    pub async fn fill_index(
        &self,
        project: &str,
        index: &str,
        options: &FillOptions,
    ) -> GoetGevondenResult<Option<Value>> {
        let path = format!("/brinta/{}/{}/fill", project, index);
        self.transport
            .send::<FillOptions, ()>(Method::POST, &path, Some(options), None)
            .await
    }
}

/// Create a client for a base URL with the given timeout, keeping every other
/// setting at its default.
pub fn create_client(
    base_url: impl Into<String>,
    timeout_secs: u64,
) -> Result<GoetGevondenClient, ConfigError> {
    GoetGevondenClient::new(ClientConfig {
        base_url: base_url.into(),
        timeout_secs,
        ..ClientConfig::default()
    })
}

// =============================================================================
// TESTS
// =============================================================================
