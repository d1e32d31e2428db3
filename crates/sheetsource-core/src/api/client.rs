//! API client for the Google Sheets v4 `values` endpoint.
//!
//! This module provides the `SheetsClient` struct for fetching a sheet's
//! rows, and the `SheetSource` trait the cache fetches through.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{Config, Environment};
use crate::models::{Row, Sheet, SheetName};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Google Maps embed endpoint for a single place
const MAPS_EMBED_URL: &str = "https://www.google.com/maps/embed/v1/place";

/// Ask for raw cell values (numbers as numbers, no display formatting)
const VALUE_RENDER_OPTION: &str = "UNFORMATTED_VALUE";

/// Where sheet rows come from. The cache only talks to this trait.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_sheet(&self, name: SheetName) -> Result<Sheet, ApiError>;
}

/// Body of `GET .../values/{range}`. `values` is absent when the range is empty.
#[derive(Debug, Deserialize)]
struct ValueRange {
    range: Option<String>,
    #[serde(default)]
    values: Vec<Row>,
}

/// Sheets API client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct SheetsClient {
    client: Client,
    base_url: Url,
    maps_url: Url,
    spreadsheet_id: String,
    api_key: String,
    environment: Environment,
}

impl SheetsClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid Sheets base URL: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Sheets base URL cannot have path segments: {}", config.base_url);
        }
        let maps_url = Url::parse(MAPS_EMBED_URL).context("Invalid maps embed URL")?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            maps_url,
            spreadsheet_id: config.spreadsheet_id()?.to_string(),
            api_key: config.api_key()?.to_string(),
            environment: config.environment,
        })
    }

    /// `{base}/{spreadsheet}/values/{Sheet}!{range}?key=..&valueRenderOption=UNFORMATTED_VALUE`
    pub fn sheet_url(&self, name: SheetName) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(&self.spreadsheet_id)
                .push("values")
                .push(&format!("{}!{}", name, name.range(self.environment)));
        }
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("valueRenderOption", VALUE_RENDER_OPTION);
        url
    }

    /// Embed URL for a map centered on `address`.
    pub fn map_embed_url(&self, address: &str) -> Url {
        let mut url = self.maps_url.clone();
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("q", address);
        url
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    fn parse_values(name: SheetName, range: &str, body: &str) -> Result<Sheet, ApiError> {
        let parsed: ValueRange = serde_json::from_str(body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse {} values: {}", name, e))
        })?;
        let range = parsed
            .range
            .unwrap_or_else(|| format!("{}!{}", name, range));
        Ok(Sheet::new(name, range, parsed.values))
    }
}

#[async_trait]
impl SheetSource for SheetsClient {
    async fn fetch_sheet(&self, name: SheetName) -> Result<Sheet, ApiError> {
        let range = name.range(self.environment);
        info!(sheet = %name, range, "Fetching sheet");

        // The URL carries the API key, so keep it out of error messages.
        let response = self
            .client
            .get(self.sheet_url(name))
            .send()
            .await
            .map_err(|e| ApiError::NetworkError(e.without_url()))?;
        let response = Self::check_response(response).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError(e.without_url()))?;

        let sheet = Self::parse_values(name, range, &body)?;
        debug!(sheet = %name, rows = sheet.rows.len(), "Sheet fetched");
        Ok(sheet)
    }
}
