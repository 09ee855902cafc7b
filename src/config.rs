//! Connector configuration.
//!
//! Configuration is an explicit struct built once at process start from
//! CLI flags with environment-variable fallbacks, then passed into each
//! component. There are no ambient globals.

use crate::cli::Args;
use crate::shared::{ConnectorError, Result};

/// Destination store settings.
///
/// The connection string stays optional here: its absence must only fail
/// the run at load time, after fetch and transform have executed.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub uri: Option<String>,
    pub database: String,
    pub collection: String,
}

/// Full connector configuration for one run.
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    pub feed_url: String,
    pub store: StoreConfig,
}

impl ConnectorConfig {
    /// Builds the configuration from parsed CLI arguments.
    ///
    /// The feed URL is required up front; the store connection string is
    /// deliberately not validated here.
    pub fn from_args(args: Args) -> Result<Self> {
        let feed_url = args
            .feed_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConnectorError::Configuration {
                name: "CISA_KEV_URL".to_string(),
                hint: "Set the CISA_KEV_URL environment variable or pass --feed-url".to_string(),
            })?;

        Ok(Self {
            feed_url,
            store: StoreConfig {
                uri: args.mongo_uri,
                database: args.database,
                collection: args.collection,
            },
        })
    }
}
