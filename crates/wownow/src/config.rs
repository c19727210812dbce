//! Command-line configuration.
//!
//! Every option has an environment variable fallback and a default, so
//! running `wownow` with no arguments queries the US version service for the
//! default products.

use clap::Parser;
use std::time::Duration;
use wownow_protocol::{ClientConfig, Region};

use crate::orchestrator::DEFAULT_PRODUCTS;

/// Report the current World of Warcraft client versions as JSON
#[derive(Debug, Clone, Parser)]
#[command(name = "wownow", version)]
pub struct Cli {
    /// Region whose version service is queried
    #[arg(long, env = "WOWNOW_REGION", default_value = "us")]
    pub region: Region,

    /// Version service base URL, overrides the region's URL
    #[arg(long, env = "WOWNOW_BASE_URL")]
    pub base_url: Option<String>,

    /// Product to report, repeatable
    #[arg(
        long = "product",
        env = "WOWNOW_PRODUCTS",
        value_delimiter = ',',
        default_values = DEFAULT_PRODUCTS
    )]
    pub products: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, env = "WOWNOW_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

impl Cli {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Client configuration for the selected region or base URL
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        let base = ClientConfig::for_region(self.region);
        ClientConfig {
            base_url: self.base_url.clone().unwrap_or(base.base_url),
            request_timeout: Duration::from_secs(self.timeout),
            ..base
        }
    }
}
