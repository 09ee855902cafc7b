use kev_connector::prelude::*;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock FeedSource for testing
pub struct MockFeedSource {
    payload: Value,
    should_fail: bool,
    calls: AtomicUsize,
}

impl MockFeedSource {
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            should_fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// A source that fails the way a non-success HTTP status does
    pub fn with_failure() -> Self {
        Self {
            payload: Value::Null,
            should_fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl FeedSource for MockFeedSource {
    fn fetch(&self) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.should_fail {
            return Err(ConnectorError::Fetch {
                url: "https://example.com/kev.json".to_string(),
                details: "server returned status 500 Internal Server Error".to_string(),
            }
            .into());
        }
        Ok(self.payload.clone())
    }
}
