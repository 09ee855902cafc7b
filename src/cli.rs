use clap::Parser;

/// Ingest the CISA Known Exploited Vulnerabilities feed into MongoDB
#[derive(Parser, Debug)]
#[command(name = "kev-connector")]
#[command(version)]
#[command(about = "Ingest the CISA Known Exploited Vulnerabilities feed into MongoDB", long_about = None)]
pub struct Args {
    /// URL of the KEV JSON feed
    #[arg(long, env = "CISA_KEV_URL", value_name = "URL")]
    pub feed_url: Option<String>,

    /// MongoDB connection string (checked at load time, after the fetch)
    #[arg(long, env = "MONGO_URI", value_name = "URI")]
    pub mongo_uri: Option<String>,

    /// Target database name
    #[arg(long, env = "MONGO_DB", default_value = "etl_db")]
    pub database: String,

    /// Target collection name
    #[arg(long, env = "MONGO_COLLECTION", default_value = "cisa_kev")]
    pub collection: String,

    /// Log verbosity (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
