//! Raw sheet data as returned by the Sheets `values` endpoint.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Environment;

/// One cell fetched with `valueRenderOption=UNFORMATTED_VALUE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// The cell as trimmed text, or `None` for blank or whitespace-only cells.
    ///
    /// Numbers use their shortest display form, so `7.0` reads as `"7"`.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(s) if s.trim().is_empty() => None,
            CellValue::Text(s) => Some(Cow::Borrowed(s.trim())),
            CellValue::Number(n) => Some(Cow::Owned(n.to_string())),
            CellValue::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        }
    }

    /// Loose identifier comparison on trimmed display text: a number cell
    /// `7` matches `"7"`, and a text cell `" s1 "` matches `"s1"`.
    ///
    /// The id is not parsed as a number, so `"07"` and `"7.0"` do not match
    /// a number cell `7`.
    pub fn matches_id(&self, id: &str) -> bool {
        self.as_text().is_some_and(|text| text == id.trim())
    }

    pub fn is_blank(&self) -> bool {
        self.as_text().is_none()
    }
}

/// A sheet row. Trailing empty cells are dropped by the API, so rows can be
/// shorter than the requested range.
pub type Row = Vec<CellValue>;

/// Sheets known to the site, ordered so they can key an ordered map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SheetName {
    Services,
    Organizations,
}

impl SheetName {
    pub const ALL: [SheetName; 2] = [SheetName::Services, SheetName::Organizations];

    pub fn as_str(&self) -> &'static str {
        match self {
            SheetName::Services => "Services",
            SheetName::Organizations => "Organizations",
        }
    }

    /// Cell range to request. CI runs only pull the first data row.
    pub fn range(&self, environment: Environment) -> &'static str {
        match (self, environment) {
            (SheetName::Services, Environment::Production) => "A2:H",
            (SheetName::Services, Environment::Ci) => "A2:H2",
            (SheetName::Organizations, Environment::Production) => "A2:M",
            (SheetName::Organizations, Environment::Ci) => "A2:M2",
        }
    }
}

impl fmt::Display for SheetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SheetName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "services" => Ok(SheetName::Services),
            "organizations" => Ok(SheetName::Organizations),
            other => Err(format!(
                "unknown sheet '{}' (expected services or organizations)",
                other
            )),
        }
    }
}

/// A fetched sheet. Shared as `Arc<Sheet>` once cached.
#[derive(Debug, Clone, Serialize)]
pub struct Sheet {
    pub name: SheetName,
    /// Range echoed back by the API, e.g. `Services!A2:H40`.
    pub range: String,
    pub rows: Vec<Row>,
    pub fetched_at: DateTime<Utc>,
}

impl Sheet {
    pub fn new(name: SheetName, range: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name,
            range: range.into(),
            rows,
            fetched_at: Utc::now(),
        }
    }

    /// First row whose identifier loosely equals `id`, with its index.
    pub fn find_row(&self, id: &str) -> Option<(usize, &Row)> {
        self.rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.first().is_some_and(|cell| cell.matches_id(id)))
    }
}
