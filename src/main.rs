// ------------------------------------------------------------
// Module declarations
// ------------------------------------------------------------
//
// Each module represents a well-defined responsibility:
//
// - config:    Fixed run configuration (endpoint, paths, timeout)
// - schema:    Typed view of the listing responses
// - source:    Page fetching (trait + HTTP implementation)
// - snapshot:  Snapshot persistence (data.json / names.json)
// - collector: The paginated fetch-and-accumulate loop
//
mod collector;
mod config;
mod schema;
mod snapshot;
mod source;

use collector::{Collector, RunOutcome};
use config::CollectorConfig;
use snapshot::SnapshotStore;
use source::HttpPageSource;

use log::info;

// ------------------------------------------------------------
// Application entry point
// ------------------------------------------------------------
//
// One run walks the entire public channel listing from page 1
// and leaves two snapshot files behind. There is no daemon
// mode and no resume: every invocation starts from scratch.
//
// NOTE:
// A run that stops early on a transport failure still exits
// with status 0 - the partial snapshot on disk is a valid
// result, and the log carries the failing URL.
//
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = CollectorConfig::default();
    let source = HttpPageSource::new(&config)?;
    let store = SnapshotStore::new(&config);

    info!("collecting public channels from {}", config.api_url);

    let mut collector = Collector::new(config);
    let report = collector.run(&source, &store).await?;

    match report.outcome {
        RunOutcome::Completed => info!(
            "all done: {} records across {} pages",
            report.records, report.pages
        ),
        RunOutcome::Aborted => info!(
            "all done (stopped early): {} records across {} pages persisted",
            report.records, report.pages
        ),
    }

    Ok(())
}
