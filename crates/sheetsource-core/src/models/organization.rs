use serde::{Deserialize, Serialize};

use crate::api::DecodeError;

use super::record::{RowReader, SheetRecord};
use super::sheet::{Row, SheetName};

/// An organization listed in the directory (Organizations sheet, columns A-M).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub hours: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Organization {
    /// Street address as a single line, for map lookups.
    pub fn full_address(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.address, &self.city, &self.state, &self.zip]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

impl SheetRecord for Organization {
    const SHEET: SheetName = SheetName::Organizations;

    fn from_row(index: usize, row: &Row) -> Result<Self, DecodeError> {
        let r = RowReader::new(Self::SHEET, index, row);
        Ok(Self {
            id: r.required_text(0, "id")?,
            name: r.required_text(1, "name")?,
            description: r.text(2, "description")?,
            address: r.text(3, "address")?,
            city: r.text(4, "city")?,
            state: r.text(5, "state")?,
            zip: r.text(6, "zip")?,
            phone: r.text(7, "phone")?,
            email: r.text(8, "email")?,
            website: r.text(9, "website")?,
            hours: r.text(10, "hours")?,
            latitude: r.number(11, "latitude")?,
            longitude: r.number(12, "longitude")?,
        })
    }
}
