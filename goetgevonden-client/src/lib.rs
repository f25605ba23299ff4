//! GoetGevonden API client
//!
//! HTTP client for the GoetGevonden API (the "Broccoli" annotation and search
//! service), giving access to De resoluties van de Staten-Generaal — the
//! Resolutions of the States-General of the Dutch Republic.
//!
//! One request per call, no retries, no caching. The search endpoints answer
//! in two shapes; both normalize into `SearchResult` so callers never branch
//! on the source shape.
//!
//! # Example
//! ```no_run
//! use goetgevonden_client::{ClientConfig, GoetGevondenClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GoetGevondenClient::new(ClientConfig::default())?;
//!
//! let projects = client.list_projects().await?;
//! println!("projects: {:?}", projects);
//!
//! let results = client.search_text("Amsterdam").await?;
//! println!("Found {} results", results.total);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod transport;

pub use client::{
    create_client, AnnotationOptions, FillOptions, GoetGevondenClient, SearchOptions,
};
pub use config::{
    ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_PROJECT, DEFAULT_TIMEOUT_SECS,
};

// Re-export the data model so downstream callers need only this crate.
pub use goetgevonden_core::{
    AboutInfo, Annotation, GoetGevondenError, GoetGevondenResult, IndexQuery, IndexRange,
    SearchResult, SortOrder, ViewAnnoConstraint, ViewConfiguration, ViewScope,
};
