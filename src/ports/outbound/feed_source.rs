use crate::shared::Result;
use serde_json::Value;

/// FeedSource port for retrieving the raw vulnerability feed
///
/// This port abstracts the upstream data source (the CISA KEV JSON feed
/// over HTTP) so the pipeline can be exercised against mock sources.
pub trait FeedSource {
    /// Fetches the feed and parses the body as JSON
    ///
    /// # Returns
    /// The parsed payload. No schema is enforced beyond "is valid JSON";
    /// the transformer decides what to do with the shape.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or times out
    /// - The server responds with a non-success status
    /// - The response body is not valid JSON
    fn fetch(&self) -> Result<Value>;
}

impl<T: FeedSource + ?Sized> FeedSource for &T {
    fn fetch(&self) -> Result<Value> {
        (**self).fetch()
    }
}
