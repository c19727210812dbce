use num_bigint::BigUint;
use std::fmt;

/// A decoded BPSV cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// STRING cell, verbatim
    String(String),
    /// HEX cell decoded to bytes
    Bytes(Vec<u8>),
    /// DEC cell, unbounded so any declared column width fits
    Integer(BigUint),
    /// Empty HEX or DEC cell
    Absent,
}

impl Value {
    /// Get the text if this is a string
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the bytes if this is hex data
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Get the number if this is an integer
    #[must_use]
    pub fn as_integer(&self) -> Option<&BigUint> {
        match self {
            Self::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Check if the cell was empty
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Bytes(bytes) => write!(f, "{}", hex::encode(bytes)),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Absent => Ok(()),
        }
    }
}
