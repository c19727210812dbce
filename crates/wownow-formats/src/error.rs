use thiserror::Error;

/// Errors raised while parsing version service data
///
/// Every variant terminates the enclosing parse; nothing is recovered or
/// substituted with a default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// Column descriptor is missing its `!` or `:` separator
    #[error("Invalid header descriptor: {0}")]
    InvalidHeader(String),

    /// Column type is not one of STRING, HEX or DEC
    #[error("Unknown header type: {0}")]
    UnknownType(String),

    /// Column size is not a non-negative integer
    #[error("Invalid header size in descriptor: {0}")]
    InvalidSize(String),

    /// Body has no header row
    #[error("Missing header row")]
    MissingHeader,

    /// Body ends before the sequence number row
    #[error("Missing sequence number row")]
    MissingSequenceNumber,

    /// Second line does not read `## seqn = <digits>`
    #[error("Invalid sequence number row: {0}")]
    InvalidSequenceNumber(String),

    /// Data row has a different cell count than the header row
    #[error("Field count mismatch in data row {row}: expected {expected}, got {actual}")]
    FieldCountMismatch {
        /// Zero-based data row index
        row: usize,
        /// Number of header columns
        expected: usize,
        /// Number of cells in the row
        actual: usize,
    },

    /// HEX cell is not valid hexadecimal
    #[error("Invalid hex value: {0}")]
    InvalidHex(String),

    /// HEX cell decodes to the wrong number of bytes
    #[error("Expected {expected} bytes, got {actual}")]
    HexLengthMismatch {
        /// Declared column size in bytes
        expected: usize,
        /// Decoded byte count
        actual: usize,
    },

    /// DEC cell is not a non-negative integer
    #[error("Invalid decimal value: {0}")]
    InvalidDec(String),

    /// DEC cell needs more bits than the column declares
    #[error("Expected {max_bits} bits, got {actual_bits}")]
    DecOverflow {
        /// `size_bytes * 8`
        max_bits: usize,
        /// Minimal bit width of the value
        actual_bits: usize,
    },

    /// Requested column is not in the header row
    #[error("Invalid column name: {0}")]
    ColumnNotFound(String),

    /// Requested row does not exist
    #[error("Row index out of bounds: {0}")]
    RowIndexOutOfBounds(usize),

    /// Version string is not made of four dot-separated parts
    #[error("Invalid build version: {0}")]
    InvalidBuildVersion(String),

    /// Minor or patch component is not an integer
    #[error("Invalid {component} version component: {value}")]
    InvalidVersionComponent {
        /// `minor` or `patch`
        component: &'static str,
        /// The offending text
        value: String,
    },

    /// Column decoded to a different kind of value than the caller needs
    #[error("Column {column} does not hold a {expected} value")]
    UnexpectedValue {
        /// Column name
        column: String,
        /// Expected value kind
        expected: &'static str,
    },
}
