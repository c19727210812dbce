//! Consolidated version report.
//!
//! The report is what `wownow` prints: one record per product with its
//! sequence number and one `{region, version, build, interface}` entry per
//! row of the product's versions table.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use wownow_formats::{BuildVersion, FormatError, TableResponse, Value};

/// Column holding the region code
pub const REGION_COLUMN: &str = "Region";
/// Column holding the dotted `major.minor.patch.build` string
pub const VERSION_COLUMN: &str = "VersionsName";

/// Version published for one region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionEntry {
    /// Region code, e.g. `us`
    pub region: String,
    /// `major.minor.patch`
    pub version: String,
    /// Build number
    pub build: String,
    /// Numeric interface version, e.g. `100205`
    pub interface: String,
}

/// Versions of one product
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductVersions {
    /// Product identifier, e.g. `wow_classic`
    pub name: String,
    /// Sequence number of the table the entries come from
    pub sequence_number: u64,
    /// One entry per table row, in table order
    pub versions: Vec<VersionEntry>,
}

impl ProductVersions {
    /// Derive the product record from its versions table
    pub fn from_table(product: &str, table: &TableResponse) -> Result<Self, FormatError> {
        let versions = table
            .get_all()?
            .iter()
            .map(version_entry)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: product.to_string(),
            sequence_number: table.sequence_number(),
            versions,
        })
    }
}

fn version_entry(row: &HashMap<String, Value>) -> Result<VersionEntry, FormatError> {
    let region = string_cell(row, REGION_COLUMN)?;
    let build_version = BuildVersion::parse(string_cell(row, VERSION_COLUMN)?)?;

    Ok(VersionEntry {
        region: region.to_string(),
        version: build_version.version(),
        build: build_version.build().to_string(),
        interface: build_version.interface_version()?,
    })
}

fn string_cell<'a>(row: &'a HashMap<String, Value>, column: &str) -> Result<&'a str, FormatError> {
    match row.get(column) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(FormatError::UnexpectedValue {
            column: column.to_string(),
            expected: "string",
        }),
        None => Err(FormatError::ColumnNotFound(column.to_string())),
    }
}

/// Versions of every requested product at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// When the tables were retrieved, serialized with second precision
    #[serde(serialize_with = "serialize_timestamp")]
    pub retrieval_datetime: DateTime<Utc>,
    /// Products in listing order, serialized as a map keyed by product name
    #[serde(serialize_with = "serialize_products")]
    pub products: Vec<ProductVersions>,
}

impl Report {
    /// Build the report from `(product, table)` pairs in listing order
    pub fn assemble(
        retrieval_datetime: DateTime<Utc>,
        tables: &[(String, TableResponse)],
    ) -> Result<Self, FormatError> {
        let products = tables
            .iter()
            .map(|(product, table)| ProductVersions::from_table(product, table))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            retrieval_datetime,
            products,
        })
    }

    /// Look up a product record by name
    #[must_use]
    pub fn product(&self, name: &str) -> Option<&ProductVersions> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Serialize to JSON, indented when `pretty` is set
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format("%Y-%m-%dT%H:%M:%SZ"))
}

fn serialize_products<S: Serializer>(
    products: &[ProductVersions],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(products.iter().map(|p| (&p.name, p)))
}
