//! Text transport for the version service
//!
//! The version service answers plain-text BPSV bodies over HTTP. The
//! [`TextFetcher`] trait is the seam between URL construction and the wire,
//! so callers can substitute canned responses.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode, header::RETRY_AFTER};
use std::sync::Once;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{ProtocolError, Result};

/// Install the ring crypto provider for rustls once per process
pub(crate) fn ensure_crypto_provider() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        // Fails only if another provider was installed first, which is fine
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// Fetches a response body as text
#[async_trait]
pub trait TextFetcher: Send + Sync {
    /// GET `url` and return the body, failing on transport errors and
    /// non-success statuses
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// reqwest-backed [`TextFetcher`]
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher using the timeouts and user agent from `config`
    pub fn new(config: &ClientConfig) -> Result<Self> {
        ensure_crypto_provider();
        let client = ClientBuilder::new()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl TextFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.text().await?),
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get(RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.trim().parse::<u64>().ok())
                    .map(Duration::from_secs);
                Err(ProtocolError::RateLimited { retry_after })
            }
            StatusCode::SERVICE_UNAVAILABLE => Err(ProtocolError::ServiceUnavailable),
            status if status.is_server_error() => Err(ProtocolError::ServerError(status)),
            status => Err(ProtocolError::HttpStatus(status)),
        }
    }
}
