use anyhow::Result;
use log::{info, warn};

use crate::{
    config::CollectorConfig,
    schema::{ChannelPage, ChannelRecord},
    snapshot::SnapshotStore,
    source::PageSource,
};

/// How a collector run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The endpoint returned an empty page: the whole listing
    /// was walked. This is the expected way to finish.
    Completed,

    /// A page could not be fetched or decoded. The loop stopped
    /// early; everything up to the previous page is persisted.
    Aborted,
}

/// Summary of a finished run, for the closing log line.
#[derive(Debug)]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// Pages that were fetched, merged and persisted
    pub pages: u64,
    /// Total records accumulated across those pages
    pub records: usize,
}

/// ============================================================
/// Collector
/// ============================================================
///
/// Owns the collection state of one run and drives the
/// fetch → parse → accumulate → persist loop.
///
/// GUARANTEES:
/// - `names` and `records` are always the same length: both are
///   extended together from the same page, and nothing else
///   mutates them.
/// - A snapshot is written after every merged page, so whatever
///   stops the loop, the files on disk reflect a complete state
///   as of the last successful page.
///
/// NOT RESPONSIBLE FOR:
/// - Transport (PageSource)
/// - Snapshot formatting and atomicity (SnapshotStore)
/// - Retry or backoff: any page failure ends the run
///
pub struct Collector {
    config: CollectorConfig,
    records: Vec<ChannelRecord>,
    names: Vec<String>,
}

impl Collector {
    pub fn new(config: CollectorConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
            names: Vec::new(),
        }
    }

    /// Walks the listing from page 1 until an empty page or the
    /// first failure.
    ///
    /// Pages are requested strictly one at a time; an iteration
    /// only starts after the previous page has been merged and
    /// persisted.
    ///
    /// ERROR MODEL:
    /// - Fetch and decode failures are soft: they are logged with
    ///   the failing URL and end the loop, but `run` still returns
    ///   `Ok` so the process exits cleanly with the partial
    ///   snapshot intact.
    /// - Snapshot write failures are hard and propagate.
    pub async fn run(
        &mut self,
        source: &dyn PageSource,
        store: &SnapshotStore,
    ) -> Result<RunReport> {
        let mut page: u64 = 0;

        let outcome = loop {
            page += 1;
            let url = self.config.page_url(page);

            let body = match source.fetch_page(&url).await {
                Ok(body) => body,
                Err(e) => {
                    warn!("fetching {} failed: {:#}", url, e);
                    break RunOutcome::Aborted;
                }
            };

            let parsed: ChannelPage = match serde_json::from_str(&body) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("decoding {} failed: {}", url, e);
                    break RunOutcome::Aborted;
                }
            };

            if parsed.channels.is_empty() {
                info!("final page reached (page {} is empty)", page);
                break RunOutcome::Completed;
            }

            self.merge_page(parsed.channels);
            store.write(&self.records, &self.names)?;

            info!("page {} done ({} records total)", page, self.records.len());
        };

        Ok(RunReport {
            outcome,
            // The terminating page (empty or failed) was never merged.
            pages: page - 1,
            records: self.records.len(),
        })
    }

    /// Appends one page worth of records, in listing order, and
    /// extracts the matching names in the same step.
    fn merge_page(&mut self, channels: Vec<ChannelRecord>) {
        self.names.extend(channels.iter().map(ChannelRecord::name));
        self.records.extend(channels);

        debug_assert_eq!(self.records.len(), self.names.len());
    }
}
