use serde::{Deserialize, Serialize};

use crate::api::DecodeError;

use super::record::{RowReader, SheetRecord};
use super::sheet::{Row, SheetName};

/// A service offered by an organization (Services sheet, columns A-H).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub organization_id: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub eligibility: Option<String>,
    pub hours: Option<String>,
    pub website: Option<String>,
}

impl SheetRecord for Service {
    const SHEET: SheetName = SheetName::Services;

    fn from_row(index: usize, row: &Row) -> Result<Self, DecodeError> {
        let r = RowReader::new(Self::SHEET, index, row);
        Ok(Self {
            id: r.required_text(0, "id")?,
            name: r.required_text(1, "name")?,
            organization_id: r.text(2, "organizationId")?,
            category: r.text(3, "category")?,
            description: r.text(4, "description")?,
            eligibility: r.text(5, "eligibility")?,
            hours: r.text(6, "hours")?,
            website: r.text(7, "website")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CellValue;

    #[test]
    fn test_decode_short_row() {
        let row: Row = serde_json::from_str(r#"["s1", "Food Pantry", 3, "Food"]"#)
            .expect("row should parse");
        let service = Service::from_row(0, &row).expect("row should decode");
        assert_eq!(service.id, "s1");
        assert_eq!(service.name, "Food Pantry");
        assert_eq!(service.organization_id.as_deref(), Some("3"));
        assert_eq!(service.category.as_deref(), Some("Food"));
        assert_eq!(service.website, None);
    }

    #[test]
    fn test_decode_requires_name() {
        let row = vec![CellValue::Text("s1".to_string())];
        let err = Service::from_row(5, &row).unwrap_err();
        assert_eq!(err.column, "name");
        assert_eq!(err.row, 5);
    }

    #[test]
    fn test_serializes_camel_case() {
        let row: Row = serde_json::from_str(r#"["s1", "Clinic", "o1"]"#).expect("row should parse");
        let service = Service::from_row(0, &row).expect("row should decode");
        let json = serde_json::to_value(&service).expect("service should serialize");
        assert_eq!(json["organizationId"], "o1");
    }
}
