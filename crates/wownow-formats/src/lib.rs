//! Parsers for the data served by the NGDP version service.
//!
//! # Supported Formats
//!
//! - **BPSV**: Blizzard Pipe-Separated Values, the typed table returned by
//!   `/{product}/versions` and friends
//! - **Build version**: the dotted `major.minor.patch.build` strings found in
//!   the `VersionsName` column
//!
//! Everything in this crate is pure and synchronous. Parsed values are
//! immutable and can be shared freely across threads.

#![warn(missing_docs)]

pub mod bpsv;
pub mod build_version;
mod error;

pub use bpsv::{Header, HeaderKind, TableResponse, Value};
pub use build_version::BuildVersion;
pub use error::FormatError;
