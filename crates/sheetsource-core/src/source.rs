//! Caller-facing data source for the site generator.
//!
//! `DataSource` owns the sheet cache and the index slot, and exposes the
//! operations the page build calls: list and look up services and
//! organizations, read or set the shared index, and build map URLs.

use std::sync::Arc;

use anyhow::Result;
use reqwest::Url;
use serde_json::Value;

use crate::api::{ApiError, SheetError, SheetSource, SheetsClient};
use crate::cache::{IndexSlot, SheetCache};
use crate::config::Config;
use crate::models::{Organization, Row, Service, Sheet, SheetName};

pub struct DataSource<S> {
    cache: SheetCache<S>,
    index: IndexSlot<Value>,
}

impl DataSource<SheetsClient> {
    /// Data source backed by the live Sheets API.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(SheetsClient::new(config)?))
    }

    pub fn map_url(&self, address: &str) -> Url {
        self.cache.source().map_embed_url(address)
    }
}

impl<S: SheetSource> DataSource<S> {
    pub fn new(source: S) -> Self {
        Self {
            cache: SheetCache::new(source),
            index: IndexSlot::new(),
        }
    }

    pub fn cache(&self) -> &SheetCache<S> {
        &self.cache
    }

    pub async fn services(&self) -> Result<Vec<Service>, SheetError> {
        self.cache.list_records().await
    }

    pub async fn organizations(&self) -> Result<Vec<Organization>, SheetError> {
        self.cache.list_records().await
    }

    pub async fn service(&self, id: &str) -> Result<Option<Service>, SheetError> {
        self.cache.lookup_record(id).await
    }

    pub async fn organization(&self, id: &str) -> Result<Option<Organization>, SheetError> {
        self.cache.lookup_record(id).await
    }

    pub async fn list_sheet(&self, name: SheetName) -> Result<Arc<Sheet>, ApiError> {
        self.cache.list_sheet(name).await
    }

    pub async fn lookup_row(&self, name: SheetName, id: &str) -> Result<Option<Row>, ApiError> {
        self.cache.lookup_row(name, id).await
    }

    /// Read the shared index, or replace it when `value` is given.
    pub fn index(&self, value: Option<Value>) -> Option<Value> {
        self.index.get_or_set(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::cache::manager::tests::FakeSource;
    use crate::config::Environment;

    fn source() -> DataSource<FakeSource> {
        DataSource::new(
            FakeSource::default()
                .with_sheet(SheetName::Services, r#"[["s1","Pantry","o1"],["s2","Clinic","o2"]]"#)
                .with_sheet(SheetName::Organizations, r#"[["o1","Food Bank"],["o2","Health Center"]]"#),
        )
    }

    #[tokio::test]
    async fn test_typed_lists_share_the_cache() {
        let ds = source();

        let services = ds.services().await.expect("services");
        assert_eq!(services.len(), 2);
        let service = ds.service("s2").await.expect("lookup").expect("s2 exists");
        assert_eq!(service.organization_id.as_deref(), Some("o2"));

        let org = ds.organization("o2").await.expect("lookup").expect("o2 exists");
        assert_eq!(org.name, "Health Center");
        assert!(ds.organization("o9").await.expect("lookup").is_none());

        // one fetch per sheet
        assert_eq!(ds.cache().source().fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_raw_passthroughs() {
        let ds = source();
        let sheet = ds.list_sheet(SheetName::Organizations).await.expect("sheet");
        assert_eq!(sheet.rows.len(), 2);
        assert!(ds.lookup_row(SheetName::Services, "s1").await.expect("lookup").is_some());
    }

    #[test]
    fn test_index_slot() {
        let ds = source();
        assert_eq!(ds.index(None), None);
        let value = json!({"s1": 0, "s2": 1});
        assert_eq!(ds.index(Some(value.clone())), Some(value.clone()));
        assert_eq!(ds.index(None), Some(value));
    }

    #[test]
    fn test_from_config_builds_map_urls() {
        let config = Config {
            api_key: Some("k".to_string()),
            spreadsheet_id: Some("id".to_string()),
            environment: Environment::Production,
            ..Config::default()
        };
        let ds = DataSource::from_config(&config).expect("data source");
        let url = ds.map_url("1 Main St");
        assert_eq!(url.as_str(), "https://www.google.com/maps/embed/v1/place?key=k&q=1+Main+St");
    }
}
