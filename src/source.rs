use anyhow::Result;
use reqwest::Client;

use crate::config::CollectorConfig;

/// PageSource is the abstraction layer between:
/// - The generic collector loop
/// - The actual HTTP listing endpoint
///
/// The loop only ever sees "give me the body behind this URL";
/// everything transport-related (client setup, headers, timeouts)
/// stays behind this trait.
///
/// THREAD SAFETY:
/// - Must be Send + Sync
/// - A source instance may be shared across the whole run
///
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches one page body.
    ///
    /// RETURNS:
    /// - `Ok(body)` with the raw response text
    /// - `Err` for any transport-level failure (connect error,
    ///   timeout, broken body read)
    ///
    /// IMPORTANT:
    /// - Non-2xx statuses are NOT errors at this layer. Their
    ///   bodies are handed to the JSON parser like any other
    ///   response and fail (softly) there if unusable.
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

// ------------------------------------------------------------
// HTTP page source
// ------------------------------------------------------------
//
// The production source: one reqwest client, reused across all
// pages so connections are pooled.
//
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    /// Builds the client with the configured identity and timeout.
    pub fn new(config: &CollectorConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let body = self.client.get(url).send().await?.text().await?;
        Ok(body)
    }
}
