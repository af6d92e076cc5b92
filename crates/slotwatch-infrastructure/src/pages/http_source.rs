//! HTTP-backed page enumeration with User-Agent rotation.
//!
//! Monitored pages are fetched with browser-like headers and a rotating
//! User-Agent; the scheduling sites this targets sit behind logins and bot
//! checks often enough that a bare client gets empty shells back.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use std::time::Duration;
use tracing::warn;
use url::Url;

use slotwatch_domain::extraction::{PageSnapshot, PageSource};
use slotwatch_domain::shared::DomainError;

/// Realistic browser User-Agent strings, rotated per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Fetch settings for the monitored pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout_seconds: u64,
    /// Custom User-Agent; a random one from the rotation list when unset
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: None,
        }
    }
}

/// [`PageSource`] that fetches a fixed list of watched URLs over HTTP.
///
/// An unreachable page is logged and skipped; only the reachable snapshots
/// are returned. An empty watch list (or all pages unreachable) yields an
/// empty snapshot set, which the scheduler reports as "not on target site".
pub struct HttpPageSource {
    client: reqwest::Client,
    watch_urls: Vec<Url>,
}

impl HttpPageSource {
    pub fn new(watch_urls: Vec<Url>, config: &FetchConfig) -> Result<Self, DomainError> {
        let ua = match &config.user_agent {
            Some(custom) => custom.clone(),
            None => random_user_agent().to_owned(),
        };

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(ua)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| {
                DomainError::Infrastructure(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, watch_urls })
    }

    async fn fetch(&self, url: &Url) -> Result<PageSnapshot, DomainError> {
        let response = self
            .client
            .get(url.clone())
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| DomainError::Infrastructure(format!("Request failed: {e}")))?
            .error_for_status()
            .map_err(|e| DomainError::Infrastructure(format!("HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| DomainError::Infrastructure(format!("Response read failed: {e}")))?;

        Ok(PageSnapshot::new(url.as_str(), html))
    }
}

/// Select a random User-Agent string from the rotation list.
fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS.choose(&mut rng).copied().unwrap_or(USER_AGENTS[0])
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn snapshots(&self) -> Result<Vec<PageSnapshot>, DomainError> {
        let mut snapshots = Vec::with_capacity(self.watch_urls.len());

        for url in &self.watch_urls {
            match self.fetch(url).await {
                Ok(snapshot) => snapshots.push(snapshot),
                Err(e) => {
                    // One unreachable page must not hide the others
                    warn!(url = %url, error = %e, "Monitored page unreachable, skipping");
                }
            }
        }

        Ok(snapshots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_user_agent_is_from_rotation() {
        let ua = random_user_agent();
        assert!(USER_AGENTS.contains(&ua));
        assert!(ua.contains("Mozilla/5.0"));
    }

    #[test]
    fn test_source_builds_with_default_config() {
        let urls = vec![Url::parse("https://exams.example.edu/schedule").unwrap()];
        let source = HttpPageSource::new(urls, &FetchConfig::default());
        assert!(source.is_ok());
    }

    #[tokio::test]
    async fn test_empty_watch_list_yields_no_snapshots() {
        let source = HttpPageSource::new(Vec::new(), &FetchConfig::default()).unwrap();
        let snapshots = source.snapshots().await.unwrap();
        assert!(snapshots.is_empty());
    }
}
