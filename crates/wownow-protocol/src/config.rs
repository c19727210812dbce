//! Configuration for version service clients

use std::time::Duration;
use url::Url;

use crate::client::Region;
use crate::error::{ProtocolError, Result};

/// Connection settings for a [`crate::VersionsClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Version service base URL, without the `/{product}/versions` suffix
    pub base_url: String,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Request timeout
    pub request_timeout: Duration,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Region::US.tact_http_url().to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("wownow/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at the TACT HTTP endpoint of a region
    #[must_use]
    pub fn for_region(region: Region) -> Self {
        Self {
            base_url: region.tact_http_url().to_string(),
            ..Self::default()
        }
    }

    /// Check that the base URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| ProtocolError::InvalidUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ProtocolError::InvalidUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme {scheme}"),
            }),
        }
    }
}
