use crate::config::StoreConfig;
use crate::ports::outbound::DocumentSink;
use crate::shared::{ConnectorError, Result};
use mongodb::bson::{self, Document};
use mongodb::sync::Client;
use serde_json::Value;
use tracing::{info, warn};

/// MongoDB implementation of the document sink
///
/// The connection is acquired inside `insert_records`, not at construction
/// time, so a missing connection string only fails the run at the load
/// step, after fetch and transform have already executed.
pub struct MongoSink {
    uri: Option<String>,
    database: String,
    collection: String,
}

impl MongoSink {
    /// Creates a sink from the store section of the connector configuration
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            uri: config.uri.clone(),
            database: config.database.clone(),
            collection: config.collection.clone(),
        }
    }

    fn namespace(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }
}

impl DocumentSink for MongoSink {
    fn insert_records(&self, records: Vec<Value>) -> Result<u64> {
        let uri = self
            .uri
            .as_deref()
            .filter(|uri| !uri.trim().is_empty())
            .ok_or_else(|| ConnectorError::Configuration {
                name: "MONGO_URI".to_string(),
                hint: "Set the MONGO_URI environment variable or pass --mongo-uri".to_string(),
            })?;

        // Endpoint validation comes first; only then may an empty batch
        // short-circuit the run
        if records.is_empty() {
            warn!("No documents to insert.");
            return Ok(0);
        }

        let client = Client::with_uri_str(uri).map_err(|e| ConnectorError::Insert {
            namespace: self.namespace(),
            details: e.to_string(),
        })?;
        let collection = client
            .database(&self.database)
            .collection::<Document>(&self.collection);

        let documents = to_documents(records).map_err(|e| ConnectorError::Insert {
            namespace: self.namespace(),
            details: e.to_string(),
        })?;

        let result = collection
            .insert_many(documents)
            .ordered(false)
            .run()
            .map_err(|e| ConnectorError::Insert {
                namespace: self.namespace(),
                details: e.to_string(),
            })?;

        let inserted = result.inserted_ids.len() as u64;
        info!(
            "Inserted {} documents into {}",
            inserted,
            self.namespace()
        );
        Ok(inserted)
    }
}

/// Converts sanitized JSON records into BSON documents.
fn to_documents(records: Vec<Value>) -> std::result::Result<Vec<Document>, bson::ser::Error> {
    records.iter().map(bson::to_document).collect()
}
