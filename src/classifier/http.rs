//! HTTP implementation of the page classifier
//!
//! Every call opens its own HTTP session with the configured user agent
//! and navigation timeout, fetches the handle's profile page, and applies
//! the heading heuristic. The session is a local value, so it is released
//! on every exit path and nothing leaks between attempts or handles.

use crate::classifier::{heading, Classifier, ClassifyError};
use crate::config::{PlatformConfig, ScanConfig};
use crate::Result;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Classifier that renders profile pages over HTTP.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    base_url: Url,
    user_agent: String,
    timeout: Duration,
}

impl HttpClassifier {
    /// Builds a classifier from validated configuration.
    pub fn new(platform: &PlatformConfig, scan: &ScanConfig) -> Result<Self> {
        let base_url = Url::parse(&platform.base_url)?;

        Ok(Self {
            base_url,
            user_agent: scan.user_agent.clone(),
            timeout: Duration::from_millis(scan.navigation_timeout_ms),
        })
    }

    /// The profile page address for a handle: base address + handle.
    fn target_address(&self, handle: &str) -> std::result::Result<Url, ClassifyError> {
        self.base_url
            .join(handle)
            .map_err(|source| ClassifyError::Address {
                handle: handle.to_string(),
                source,
            })
    }

    /// Opens a fresh session for one attempt.
    fn open_session(&self, handle: &str) -> std::result::Result<Client, ClassifyError> {
        Client::builder()
            .user_agent(self.user_agent.clone())
            .timeout(self.timeout)
            .connect_timeout(self.timeout.min(Duration::from_secs(10)))
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|source| ClassifyError::Session {
                handle: handle.to_string(),
                source,
            })
    }
}

impl Classifier for HttpClassifier {
    async fn check(&self, handle: &str) -> std::result::Result<bool, ClassifyError> {
        let session = self.open_session(handle)?;
        let address = self.target_address(handle)?;

        tracing::debug!("Navigating to {}", address);

        let response = session.get(address).send().await.map_err(|e| {
            if e.is_timeout() {
                ClassifyError::Timeout {
                    handle: handle.to_string(),
                }
            } else {
                ClassifyError::Navigation {
                    handle: handle.to_string(),
                    source: e,
                }
            }
        })?;

        // The body is read regardless of status: an unclaimed profile is
        // typically served as a 404 page that still renders the banner.
        let status = response.status();
        let body = response.text().await.map_err(|source| ClassifyError::Body {
            handle: handle.to_string(),
            source,
        })?;

        let available = heading::classify_page(&body);

        tracing::debug!(
            "{} -> HTTP {}, heading: {:?}",
            handle,
            status.as_u16(),
            heading::extract_heading(&body).map(|h| heading::normalize_heading(&h))
        );

        Ok(available)
    }
}
