//! sheetsource-core - data layer for a spreadsheet-backed static site.
//!
//! - `api`: Google Sheets `values` client and the `SheetSource` seam
//! - `cache`: fetch-once sheet cache and the shared index slot
//! - `models`: raw cells and rows, plus `Service` and `Organization` records
//! - `source`: the `DataSource` facade the site generator calls
//! - `bootstrap`: startup flags and load hook for the frontend
//! - `config`: API key, spreadsheet id and environment selection

pub mod api;
pub mod bootstrap;
pub mod cache;
pub mod config;
pub mod models;
pub mod source;

pub use api::{ApiError, DecodeError, SheetError, SheetSource, SheetsClient};
pub use cache::{IndexSlot, SheetCache};
pub use config::{Config, Environment};
pub use models::{CellValue, Organization, Row, Service, Sheet, SheetName, SheetRecord};
pub use source::DataSource;
