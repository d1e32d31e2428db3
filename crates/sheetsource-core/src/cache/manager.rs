use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, warn};

use crate::api::{ApiError, SheetError, SheetSource};
use crate::models::{CellValue, Row, Sheet, SheetName, SheetRecord};

/// Fetch-once cache of sheets, keyed by sheet name.
///
/// Each name gets a `OnceCell`, so concurrent first requests share one
/// in-flight fetch. A failed fetch leaves the cell empty and the next
/// request fetches again.
pub struct SheetCache<S> {
    source: S,
    entries: Mutex<BTreeMap<SheetName, Arc<OnceCell<Arc<Sheet>>>>>,
}

impl<S: SheetSource> SheetCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    async fn entry(&self, name: SheetName) -> Arc<OnceCell<Arc<Sheet>>> {
        let mut entries = self.entries.lock().await;
        Arc::clone(entries.entry(name).or_default())
    }

    /// Return the sheet, fetching it on first access.
    pub async fn list_sheet(&self, name: SheetName) -> Result<Arc<Sheet>, ApiError> {
        let cell = self.entry(name).await;
        if let Some(sheet) = cell.get() {
            debug!(sheet = %name, "Sheet cache hit");
            return Ok(Arc::clone(sheet));
        }

        let sheet = cell
            .get_or_try_init(|| async {
                debug!(sheet = %name, "Sheet cache miss");
                match self.source.fetch_sheet(name).await {
                    Ok(sheet) => Ok(Arc::new(sheet)),
                    Err(e) => {
                        warn!(sheet = %name, error = %e, "Failed to fetch sheet");
                        Err(e)
                    }
                }
            })
            .await?;
        Ok(Arc::clone(sheet))
    }

    /// First row whose identifier equals `id`, or `None`.
    pub async fn lookup_row(&self, name: SheetName, id: &str) -> Result<Option<Row>, ApiError> {
        let sheet = self.list_sheet(name).await?;
        Ok(sheet.find_row(id).map(|(_, row)| row.clone()))
    }

    /// Decode every row of `T`'s sheet. Rows with no identifier are skipped.
    pub async fn list_records<T: SheetRecord>(&self) -> Result<Vec<T>, SheetError> {
        let name = T::SHEET;
        let sheet = self.list_sheet(name).await?;
        let mut records = Vec::with_capacity(sheet.rows.len());
        for (index, row) in sheet.rows.iter().enumerate() {
            if row.first().map_or(true, CellValue::is_blank) {
                debug!(sheet = %name, row = index, "Skipping row without id");
                continue;
            }
            records.push(T::from_row(index, row)?);
        }
        Ok(records)
    }

    pub async fn lookup_record<T: SheetRecord>(&self, id: &str) -> Result<Option<T>, SheetError> {
        let sheet = self.list_sheet(T::SHEET).await?;
        match sheet.find_row(id) {
            Some((index, row)) => Ok(Some(T::from_row(index, row)?)),
            None => Ok(None),
        }
    }

    pub async fn is_cached(&self, name: SheetName) -> bool {
        let entries = self.entries.lock().await;
        entries.get(&name).is_some_and(|cell| cell.initialized())
    }

    /// Names with a populated entry, in sheet order.
    pub async fn cached_names(&self) -> Vec<SheetName> {
        let entries = self.entries.lock().await;
        entries
            .iter()
            .filter(|(_, cell)| cell.initialized())
            .map(|(name, _)| *name)
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
