/// Network adapters for external API calls
mod kev_feed_client;

pub use kev_feed_client::KevFeedClient;
