use crate::bpsv::header::Header;
use crate::bpsv::value::Value;
use crate::error::FormatError;
use std::collections::HashMap;
use std::fmt;

const SEQN_PREFIX: &str = "## seqn = ";

/// A parsed BPSV response: typed header row, sequence number and raw data rows
///
/// Cells are kept as raw strings and decoded on access through the header of
/// their column.
#[derive(Debug, Clone)]
pub struct TableResponse {
    sequence_number: u64,
    headers: Vec<Header>,
    rows: Vec<Vec<String>>,
    /// First index of each column name
    column_index: HashMap<String, usize>,
}

impl TableResponse {
    /// Parse a complete response body
    pub fn parse(body: &str) -> Result<Self, FormatError> {
        let mut lines = body.lines();

        let header_line = lines.next().ok_or(FormatError::MissingHeader)?;
        let headers = header_line
            .split('|')
            .map(Header::parse)
            .collect::<Result<Vec<_>, _>>()?;

        let seqn_line = lines.next().ok_or(FormatError::MissingSequenceNumber)?;
        let sequence_number = parse_sequence_line(seqn_line)?;

        let mut rows = Vec::new();
        for (row, line) in lines.enumerate() {
            let cells: Vec<String> = line.split('|').map(ToString::to_string).collect();
            if cells.len() != headers.len() {
                return Err(FormatError::FieldCountMismatch {
                    row,
                    expected: headers.len(),
                    actual: cells.len(),
                });
            }
            rows.push(cells);
        }

        let mut column_index = HashMap::with_capacity(headers.len());
        for (index, header) in headers.iter().enumerate() {
            column_index.entry(header.name.clone()).or_insert(index);
        }

        Ok(Self {
            sequence_number,
            headers,
            rows,
            column_index,
        })
    }

    /// Sequence number from the `## seqn` row
    #[must_use]
    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    /// Column descriptors in header order
    #[must_use]
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Number of data rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Decode one cell
    ///
    /// When several columns share a name, the first one wins.
    pub fn get(&self, row: usize, column: &str) -> Result<Value, FormatError> {
        let index = *self
            .column_index
            .get(column)
            .ok_or_else(|| FormatError::ColumnNotFound(column.to_string()))?;
        let cells = self
            .rows
            .get(row)
            .ok_or(FormatError::RowIndexOutOfBounds(row))?;

        self.headers[index].decode(&cells[index])
    }

    /// Column names in header order, duplicates included
    #[must_use]
    pub fn get_columns(&self) -> Vec<&str> {
        self.headers.iter().map(|h| h.name.as_str()).collect()
    }

    /// Decode every row into a column name to value map
    pub fn get_all(&self) -> Result<Vec<HashMap<String, Value>>, FormatError> {
        (0..self.rows.len())
            .map(|row| {
                self.headers
                    .iter()
                    .map(|header| {
                        self.get(row, &header.name)
                            .map(|value| (header.name.clone(), value))
                    })
                    .collect::<Result<HashMap<_, _>, _>>()
            })
            .collect()
    }
}

/// Parse `## seqn = <digits>`
///
/// The number is held as a `u64`; a digits-only value above `u64::MAX` is
/// rejected as `InvalidSequenceNumber`.
fn parse_sequence_line(line: &str) -> Result<u64, FormatError> {
    let digits = line
        .strip_prefix(SEQN_PREFIX)
        .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| FormatError::InvalidSequenceNumber(line.to_string()))?;

    digits
        .parse::<u64>()
        .map_err(|_| FormatError::InvalidSequenceNumber(line.to_string()))
}

impl fmt::Display for TableResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_row = self
            .headers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("|");
        writeln!(f, "{header_row}")?;
        writeln!(f, "{SEQN_PREFIX}{}", self.sequence_number)?;

        for row in &self.rows {
            writeln!(f, "{}", row.join("|"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::bpsv::header::HeaderKind;
    use pretty_assertions::assert_eq;

    const VERSIONS: &str = "Region!STRING:0|BuildConfig!HEX:16|CDNConfig!HEX:16|KeyRing!HEX:16|BuildId!DEC:4|VersionsName!String:0|ProductConfig!HEX:16
## seqn = 2419418
us|6f7a7a4a0c8e1e3b8e0e7d1d1d5e4f3c|c1f2a3b4c5d6e7f8091a2b3c4d5e6f70||53040|10.2.5.53040|53020d32e1a25648c8e1eafd5771935f
eu|6f7a7a4a0c8e1e3b8e0e7d1d1d5e4f3c|c1f2a3b4c5d6e7f8091a2b3c4d5e6f70||53040|10.2.5.53040|53020d32e1a25648c8e1eafd5771935f";

    #[test]
    fn test_parse_minimal() {
        let body = "Region!STRING:0|VersionsName!STRING:0\n## seqn = 12345\nus|10.2.5.12345";
        let table = TableResponse::parse(body).expect("Test operation should succeed");

        assert_eq!(table.sequence_number(), 12345);
        assert_eq!(table.row_count(), 1);
        assert_eq!(
            table.get(0, "Region").expect("Test operation should succeed"),
            Value::String("us".to_string())
        );
        assert_eq!(
            table
                .get(0, "VersionsName")
                .expect("Test operation should succeed"),
            Value::String("10.2.5.12345".to_string())
        );
    }

    #[test]
    fn test_parse_versions_table() {
        let table = TableResponse::parse(VERSIONS).expect("Test operation should succeed");

        assert_eq!(table.sequence_number(), 2419418);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.headers()[5].kind, HeaderKind::String);
        assert_eq!(
            table.get(1, "BuildId").expect("Test operation should succeed"),
            Value::Integer(53040u32.into())
        );
        assert!(
            table
                .get(0, "KeyRing")
                .expect("Test operation should succeed")
                .is_absent()
        );
        assert_eq!(
            table
                .get(0, "BuildConfig")
                .expect("Test operation should succeed")
                .as_bytes()
                .map(<[u8]>::len),
            Some(16)
        );
    }

    #[test]
    fn test_parse_header_only() {
        let table = TableResponse::parse("Region!STRING:0\n## seqn = 1\n")
            .expect("Test operation should succeed");
        assert!(table.is_empty());
        assert_eq!(table.get_all().expect("Test operation should succeed").len(), 0);
    }

    #[test]
    fn test_parse_crlf() {
        let table = TableResponse::parse("Region!STRING:0|BuildId!DEC:4\r\n## seqn = 7\r\nus|1\r\n")
            .expect("Test operation should succeed");
        assert_eq!(table.sequence_number(), 7);
        assert_eq!(
            table.get(0, "BuildId").expect("Test operation should succeed"),
            Value::Integer(1u32.into())
        );
    }

    #[test]
    fn test_parse_field_count_mismatch() {
        let body = "Region!STRING:0|VersionsName!STRING:0\n## seqn = 1\nus|1.0.0.1\neu";
        assert_eq!(
            TableResponse::parse(body).unwrap_err(),
            FormatError::FieldCountMismatch {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_parse_invalid_sequence_rows() {
        for seqn in [
            "## seqn = ",
            "## seqn = abc",
            "## seqn=1",
            "## seqn: 1",
            "# seqn = 1",
            "## seqn = 1 ",
            "## seqn = -1",
            "## seqn = 18446744073709551616",
            "us|1.0.0.1",
        ] {
            let body = format!("Region!STRING:0|VersionsName!STRING:0\n{seqn}\n");
            assert!(
                matches!(
                    TableResponse::parse(&body),
                    Err(FormatError::InvalidSequenceNumber(_))
                ),
                "accepted {seqn:?}"
            );
        }
    }

    #[test]
    fn test_parse_truncated_bodies() {
        assert_eq!(
            TableResponse::parse("").unwrap_err(),
            FormatError::MissingHeader
        );
        assert_eq!(
            TableResponse::parse("Region!STRING:0").unwrap_err(),
            FormatError::MissingSequenceNumber
        );
    }

    #[test]
    fn test_parse_bad_header() {
        assert!(matches!(
            TableResponse::parse("Region!STRING:0|Broken\n## seqn = 1\n"),
            Err(FormatError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_get_unknown_column() {
        let table = TableResponse::parse(VERSIONS).expect("Test operation should succeed");
        assert_eq!(
            table.get(0, "region").unwrap_err(),
            FormatError::ColumnNotFound("region".to_string())
        );
    }

    #[test]
    fn test_get_row_out_of_bounds() {
        let table = TableResponse::parse(VERSIONS).expect("Test operation should succeed");
        assert_eq!(
            table.get(2, "Region").unwrap_err(),
            FormatError::RowIndexOutOfBounds(2)
        );
    }

    #[test]
    fn test_get_propagates_decode_errors() {
        let table = TableResponse::parse("Key!HEX:2\n## seqn = 1\n0a")
            .expect("Test operation should succeed");
        assert_eq!(
            table.get(0, "Key").unwrap_err(),
            FormatError::HexLengthMismatch {
                expected: 2,
                actual: 1
            }
        );
        assert!(table.get_all().is_err());
    }

    #[test]
    fn test_duplicate_columns_first_match_wins() {
        let table = TableResponse::parse("Name!STRING:0|Name!DEC:1\n## seqn = 1\nfirst|2")
            .expect("Test operation should succeed");

        assert_eq!(table.get_columns(), vec!["Name", "Name"]);
        assert_eq!(
            table.get(0, "Name").expect("Test operation should succeed"),
            Value::String("first".to_string())
        );

        let rows = table.get_all().expect("Test operation should succeed");
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0]["Name"], Value::String("first".to_string()));
    }

    #[test]
    fn test_get_columns() {
        let table = TableResponse::parse(VERSIONS).expect("Test operation should succeed");
        assert_eq!(
            table.get_columns(),
            vec![
                "Region",
                "BuildConfig",
                "CDNConfig",
                "KeyRing",
                "BuildId",
                "VersionsName",
                "ProductConfig"
            ]
        );
    }

    #[test]
    fn test_get_all_matches_get() {
        let table = TableResponse::parse(VERSIONS).expect("Test operation should succeed");
        let rows = table.get_all().expect("Test operation should succeed");

        assert_eq!(rows.len(), table.row_count());
        for (index, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), table.get_columns().len());
            for column in table.get_columns() {
                assert_eq!(
                    row[column],
                    table
                        .get(index, column)
                        .expect("Test operation should succeed")
                );
            }
        }
    }

    #[test]
    fn test_display_reemits_body() {
        let body = "Region!STRING:0|BuildId!dec:4\n## seqn = 99999\nus|1111\neu|\n";
        let table = TableResponse::parse(body).expect("Test operation should succeed");

        let output = table.to_string();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Region!STRING:0|BuildId!DEC:4");
        assert_eq!(lines[1], "## seqn = 99999");
        assert_eq!(lines[2], "us|1111");
        assert_eq!(lines[3], "eu|");

        let reparsed = TableResponse::parse(&output).expect("Test operation should succeed");
        assert_eq!(reparsed.sequence_number(), 99999);
        assert_eq!(reparsed.row_count(), 2);
    }
}
