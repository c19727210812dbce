use crate::bpsv::value::Value;
use crate::error::FormatError;
use num_bigint::BigUint;
use std::fmt;

/// Column type tag from a header descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKind {
    /// Free-form text
    String,
    /// Fixed-size hex blob
    Hex,
    /// Bounded decimal integer
    Dec,
}

impl HeaderKind {
    /// Match an upper-cased type name
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "STRING" => Some(Self::String),
            "HEX" => Some(Self::Hex),
            "DEC" => Some(Self::Dec),
            _ => None,
        }
    }

    /// Canonical (upper-case) type name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Hex => "HEX",
            Self::Dec => "DEC",
        }
    }
}

impl fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column descriptor of a BPSV header row, e.g. `BuildConfig!HEX:16`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Column name
    pub name: String,
    /// Column type
    pub kind: HeaderKind,
    /// Declared size in bytes. Never enforced for STRING columns, where it is
    /// always zero in practice.
    pub size_bytes: usize,
}

impl Header {
    /// Create a new header
    pub fn new(name: impl Into<String>, kind: HeaderKind, size_bytes: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            size_bytes,
        }
    }

    /// Parse a descriptor of the form `NAME!TYPE:SIZE`
    ///
    /// The type name is case-insensitive.
    pub fn parse(raw: &str) -> Result<Self, FormatError> {
        let (name, rest) = raw
            .split_once('!')
            .ok_or_else(|| FormatError::InvalidHeader(raw.to_string()))?;
        let (type_name, size) = rest
            .split_once(':')
            .ok_or_else(|| FormatError::InvalidHeader(raw.to_string()))?;

        let type_name = type_name.to_uppercase();
        let kind = HeaderKind::from_name(&type_name).ok_or(FormatError::UnknownType(type_name))?;
        let size_bytes = size
            .parse::<usize>()
            .map_err(|_| FormatError::InvalidSize(raw.to_string()))?;

        Ok(Self::new(name, kind, size_bytes))
    }

    /// Decode a raw cell according to this column's type
    pub fn decode(&self, cell: &str) -> Result<Value, FormatError> {
        match self.kind {
            HeaderKind::String => Ok(Value::String(cell.to_string())),
            HeaderKind::Hex => self.decode_hex(cell),
            HeaderKind::Dec => self.decode_dec(cell),
        }
    }

    fn decode_hex(&self, cell: &str) -> Result<Value, FormatError> {
        if cell.is_empty() {
            return Ok(Value::Absent);
        }

        let bytes = hex::decode(cell).map_err(|_| FormatError::InvalidHex(cell.to_string()))?;
        if bytes.len() != self.size_bytes {
            return Err(FormatError::HexLengthMismatch {
                expected: self.size_bytes,
                actual: bytes.len(),
            });
        }
        Ok(Value::Bytes(bytes))
    }

    fn decode_dec(&self, cell: &str) -> Result<Value, FormatError> {
        if cell.is_empty() {
            return Ok(Value::Absent);
        }

        // Reject signs, whitespace and underscores that the radix parser accepts
        if !cell.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FormatError::InvalidDec(cell.to_string()));
        }
        let value = BigUint::parse_bytes(cell.as_bytes(), 10)
            .ok_or_else(|| FormatError::InvalidDec(cell.to_string()))?;

        let max_bits = self.size_bytes.saturating_mul(8);
        let actual_bits = usize::try_from(value.bits()).unwrap_or(usize::MAX);
        if actual_bits > max_bits {
            return Err(FormatError::DecOverflow {
                max_bits,
                actual_bits,
            });
        }
        Ok(Value::Integer(value))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}:{}", self.name, self.kind, self.size_bytes)
    }
}
