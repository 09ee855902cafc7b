use kev_connector::prelude::*;
use serde_json::Value;
use std::sync::Mutex;

/// Mock DocumentSink for testing
///
/// Records every batch it receives so tests can assert on what would
/// have been persisted.
pub struct MockDocumentSink {
    pub batches: Mutex<Vec<Vec<Value>>>,
    should_fail: bool,
}

impl MockDocumentSink {
    pub fn new() -> Self {
        Self {
            batches: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            batches: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    pub fn inserted_records(&self) -> Vec<Value> {
        self.batches.lock().unwrap().concat()
    }
}

impl DocumentSink for MockDocumentSink {
    fn insert_records(&self, records: Vec<Value>) -> Result<u64> {
        if self.should_fail {
            return Err(ConnectorError::Insert {
                namespace: "etl_db.cisa_kev".to_string(),
                details: "connection refused".to_string(),
            }
            .into());
        }
        let count = records.len() as u64;
        self.batches.lock().unwrap().push(records);
        Ok(count)
    }
}
