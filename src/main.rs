use kev_connector::prelude::*;
use std::process;
use tracing::error;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = Args::parse_args();
    init_logging(&args.log_level);
    process::exit(run(args).as_i32());
}

fn run(args: Args) -> ExitCode {
    let config = match ConnectorConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            return ExitCode::RunFailed;
        }
    };

    let feed = match KevFeedClient::new(&config.feed_url) {
        Ok(feed) => feed,
        Err(e) => {
            error!("Failed to build HTTP client: {:#}", e);
            return ExitCode::RunFailed;
        }
    };
    let sink = MongoSink::new(&config.store);

    match RunIngestUseCase::new(feed, sink).execute() {
        Ok(_) => ExitCode::Success,
        Err(e) => {
            error!("ETL run failed during the {} step: {:#}", e.step, e.error);
            ExitCode::RunFailed
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(level);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .ok();
}
