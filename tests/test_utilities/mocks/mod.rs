/// Mock implementations for testing
mod mock_document_sink;
mod mock_feed_source;

pub use mock_document_sink::MockDocumentSink;
pub use mock_feed_source::MockFeedSource;
