//! Versions endpoint client

mod region;

pub use region::Region;

use wownow_formats::TableResponse;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::transport::{HttpFetcher, TextFetcher};

/// Queries `{base_url}/{product}/versions` and parses the BPSV answer
pub struct VersionsClient<F = HttpFetcher> {
    base_url: String,
    fetcher: F,
}

impl VersionsClient<HttpFetcher> {
    /// Create an HTTP client from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(&config.base_url, HttpFetcher::new(config)?))
    }
}

impl<F: TextFetcher> VersionsClient<F> {
    /// Create a client over any text fetcher
    pub fn new(base_url: &str, fetcher: F) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            fetcher,
        }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the versions table for `product`
    pub fn versions_url(&self, product: &str) -> String {
        format!("{}/{product}/versions", self.base_url)
    }

    /// Fetch and parse the versions table for `product`
    pub async fn fetch_versions(&self, product: &str) -> Result<TableResponse> {
        let url = self.versions_url(product);
        let body = self.fetcher.fetch_text(&url).await.inspect_err(|e| {
            tracing::warn!(product, error = %e, "versions request failed");
        })?;

        let table = TableResponse::parse(&body).inspect_err(|e| {
            tracing::warn!(product, error = %e, "versions response did not parse");
        })?;
        tracing::debug!(
            product,
            seqn = table.sequence_number(),
            rows = table.row_count(),
            "parsed versions table"
        );
        Ok(table)
    }
}
