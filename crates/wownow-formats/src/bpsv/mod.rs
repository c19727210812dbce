//! BPSV (Blizzard Pipe-Separated Values) format support
//!
//! BPSV is the text format the version service answers with. A response is a
//! small self-describing table.
//!
//! # Format Overview
//!
//! - A header line with column descriptors (`name!TYPE:size`), where TYPE is
//!   `STRING`, `HEX` (size in bytes) or `DEC` (size in bytes of the widest
//!   allowed integer)
//! - A sequence number line (`## seqn = N`)
//! - Data rows with pipe-separated cells
//!
//! Empty HEX and DEC cells decode to [`Value::Absent`].
//!
//! # Example
//!
//! ```
//! use wownow_formats::bpsv::{TableResponse, Value};
//!
//! let body = "Region!STRING:0|BuildId!DEC:4\n## seqn = 12345\nus|1234\neu|5678";
//! let table = TableResponse::parse(body).expect("valid body");
//!
//! assert_eq!(table.sequence_number(), 12345);
//! assert_eq!(table.row_count(), 2);
//! assert_eq!(table.get(1, "BuildId"), Ok(Value::Integer(5678u32.into())));
//! ```

mod header;
mod table;
mod value;

pub use header::{Header, HeaderKind};
pub use table::TableResponse;
pub use value::Value;
