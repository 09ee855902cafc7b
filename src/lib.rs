//! kev-connector - ETL connector for the CISA Known Exploited
//! Vulnerabilities feed
//!
//! This library fetches the KEV JSON feed, rewrites document keys that
//! MongoDB rejects (`.` and `$` become `_`), stamps each record with an
//! `ingested_at` timestamp, and bulk-inserts the batch into a collection.
//! One invocation performs exactly one fetch and one insert; there is no
//! scheduling, retrying, or deduplication.
//!
//! # Architecture
//!
//! The crate follows a small hexagonal layout:
//!
//! - **Domain Layer** (`ingest`): Pure sanitize/transform logic over JSON
//! - **Application Layer** (`application`): The run-once pipeline use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP feed client and MongoDB sink
//! - **Shared** (`shared`): Common error types and `Result` alias
//!
//! # Example
//!
//! ```no_run
//! use kev_connector::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let feed = KevFeedClient::new(
//!     "https://www.cisa.gov/sites/default/files/feeds/known_exploited_vulnerabilities.json",
//! )?;
//! let sink = MongoSink::new(&StoreConfig {
//!     uri: Some("mongodb://localhost:27017".to_string()),
//!     database: "etl_db".to_string(),
//!     collection: "cisa_kev".to_string(),
//! });
//!
//! let report = RunIngestUseCase::new(feed, sink).execute()?;
//! println!("inserted {} documents", report.inserted);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ingest;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::network::KevFeedClient;
    pub use crate::adapters::outbound::store::MongoSink;
    pub use crate::application::use_cases::{
        IngestReport, IngestStep, RunIngestUseCase, StepError,
    };
    pub use crate::cli::Args;
    pub use crate::config::{ConnectorConfig, StoreConfig};
    pub use crate::ingest::{sanitize, transform, INGESTED_AT_FIELD, VULNERABILITIES_FIELD};
    pub use crate::ports::outbound::{DocumentSink, FeedSource};
    pub use crate::shared::{ConnectorError, ExitCode, Result};
}
