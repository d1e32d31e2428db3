//! Data models for sheet contents.
//!
//! - `Sheet`, `Row`, `CellValue`: raw values as the Sheets API returns them
//! - `SheetName`: the sheets the site reads, with their column ranges
//! - `SheetRecord`: decoding a row into a named-field record
//! - `Service`, `Organization`: the site's record types

pub mod organization;
pub mod record;
pub mod service;
pub mod sheet;

pub use organization::Organization;
pub use record::SheetRecord;
pub use service::Service;
pub use sheet::{CellValue, Row, Sheet, SheetName};
