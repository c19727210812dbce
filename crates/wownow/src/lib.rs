//! Current World of Warcraft client versions.
//!
//! `wownow` asks the version service for the `versions` table of a handful of
//! products, concurrently, and condenses them into one JSON report:
//!
//! ```json
//! {
//!   "retrieval_datetime": "2026-10-19T08:30:05Z",
//!   "products": {
//!     "wow": {
//!       "name": "wow",
//!       "sequence_number": 12345,
//!       "versions": [
//!         {"region": "us", "version": "10.2.5", "build": "12345", "interface": "100205"}
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! # Architecture
//!
//! - `config`: CLI arguments and environment fallbacks
//! - `orchestrator`: concurrent, order-preserving retrieval
//! - `report`: report assembly and JSON output
//! - `error`: run-level errors
//!
//! Parsing lives in `wownow-formats`, HTTP in `wownow-protocol`.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod report;

pub use config::Cli;
pub use error::RunError;
pub use orchestrator::{DEFAULT_PRODUCTS, build_report, collect_versions};
pub use report::{ProductVersions, Report, VersionEntry};
