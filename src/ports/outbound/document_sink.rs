use crate::shared::Result;
use serde_json::Value;

/// DocumentSink port for persisting transformed records
///
/// This port abstracts the destination document store. Implementations
/// receive records that have already been key-sanitized and stamped.
pub trait DocumentSink {
    /// Inserts all records in a single unordered bulk call
    ///
    /// Implementations validate their endpoint configuration before
    /// anything else. An empty batch is not an error: after that
    /// validation, implementations skip the store call, emit a warning,
    /// and report zero inserted records.
    ///
    /// # Returns
    /// The number of records the store reports as inserted.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The store endpoint configuration is missing
    /// - A record cannot be represented as a store document
    /// - The store rejects the bulk insert
    fn insert_records(&self, records: Vec<Value>) -> Result<u64>;
}

impl<T: DocumentSink + ?Sized> DocumentSink for &T {
    fn insert_records(&self, records: Vec<Value>) -> Result<u64> {
        (**self).insert_records(records)
    }
}
