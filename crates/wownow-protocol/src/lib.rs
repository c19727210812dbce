//! # wownow-protocol
//!
//! HTTP access to the NGDP version service. Each product publishes a BPSV
//! table at `{base_url}/{product}/versions`; [`VersionsClient`] builds that
//! URL, fetches the body through a [`TextFetcher`] and parses it into a
//! [`TableResponse`](wownow_formats::TableResponse).
//!
//! ```rust,no_run
//! use wownow_protocol::{ClientConfig, VersionsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VersionsClient::from_config(&ClientConfig::default())?;
//!     let versions = client.fetch_versions("wow").await?;
//!     println!("seqn {} with {} regions", versions.sequence_number(), versions.row_count());
//!     Ok(())
//! }
//! ```
//!
//! Failed requests are not retried.

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{Region, VersionsClient};
pub use config::ClientConfig;
pub use error::{ProtocolError, Result};
pub use transport::{HttpFetcher, TextFetcher};
