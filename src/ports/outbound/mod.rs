/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the pipeline core uses
/// to interact with external systems (network, document store).
pub mod document_sink;
pub mod feed_source;

pub use document_sink::DocumentSink;
pub use feed_source::FeedSource;
