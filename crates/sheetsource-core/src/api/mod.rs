//! Google Sheets API client module.
//!
//! This module provides the `SheetsClient` for reading a sheet's values
//! through the Sheets v4 `values` endpoint, plus the `SheetSource` seam
//! the cache fetches through.
//!
//! Requests are authenticated with a plain API key in the query string.

pub mod client;
pub mod error;

pub use client::{SheetSource, SheetsClient};
pub use error::{ApiError, DecodeError, SheetError};
