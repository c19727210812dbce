//! Error types for a report run.

use thiserror::Error;
use wownow_formats::FormatError;
use wownow_protocol::ProtocolError;

/// Anything that stops a run before the report is printed.
#[derive(Debug, Error)]
pub enum RunError {
    /// Fetching a versions table failed
    #[error("Failed to retrieve versions: {0}")]
    Protocol(#[from] ProtocolError),

    /// A versions table did not yield a report entry
    #[error("Failed to assemble report: {0}")]
    Format(#[from] FormatError),
}
