use std::path::PathBuf;
use std::time::Duration;

// ------------------------------------------------------------
// Collector configuration
// ------------------------------------------------------------
//
// Fixed configuration for a single collector run.
//
// It defines:
// - The listing endpoint and the identity sent with each request
// - Output snapshot locations
// - The per-request timeout
//
// There is deliberately no config file, CLI flag or environment
// variable layer: the collector always walks the full public
// listing from page 1 with the same constants.
//
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Base URL of the paginated listing endpoint.
    ///
    /// The page number is appended in decimal form, so the
    /// value must end with its `page=` query parameter.
    pub api_url: String,

    /// Snapshot file for the full accumulated channel records
    pub data_path: PathBuf,

    /// Snapshot file for the extracted channel names
    pub names_path: PathBuf,

    /// User-Agent header sent with every request
    ///
    /// NOTE:
    /// The listing endpoint rejects requests without a
    /// browser-looking agent, hence the bare "Mozilla".
    pub user_agent: String,

    /// Upper bound for a single request (connect + body read).
    ///
    /// Expiry is treated like any other transport failure:
    /// the run stops and the last snapshot stays on disk.
    pub request_timeout: Duration,
}

/// Public channel listing of thingspeak.com, paginated via `?page=N`
pub const PUBLIC_CHANNELS_URL: &str =
    "https://api.thingspeak.com/channels/public.json?page=";

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            api_url: PUBLIC_CHANNELS_URL.to_string(),
            data_path: PathBuf::from("./data.json"),
            names_path: PathBuf::from("./names.json"),
            user_agent: "Mozilla".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl CollectorConfig {
    /// Builds the request URL for a given page number.
    ///
    /// Pages are 1-based; page 0 is never requested.
    pub fn page_url(&self, page: u64) -> String {
        format!("{}{}", self.api_url, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_appends_decimal_page() {
        let cfg = CollectorConfig::default();
        assert_eq!(
            cfg.page_url(7),
            "https://api.thingspeak.com/channels/public.json?page=7"
        );
    }
}
