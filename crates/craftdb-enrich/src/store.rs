//! Flat-file catalog persistence.
//!
//! The catalog is a single JSON array of records, each held as a
//! [`CatalogRecord`] so keys no pass touches are written back as read.
//! Saving writes a sibling temp file, syncs it and renames it over the
//! original, so an interrupted write leaves the previous catalog in place.
//! Callers must have exclusive access to the file for the duration of a run.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use craftdb_core::{dedup_key, CatalogRecord, Product};

use crate::error::EnrichError;

/// In-memory catalog loaded from (and saved back to) the products JSON file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
}

impl Catalog {
    #[must_use]
    pub fn from_records(records: Vec<CatalogRecord>) -> Self {
        Self { records }
    }

    /// Read and parse the catalog at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::CatalogRead`] if the file cannot be read and
    /// [`EnrichError::CatalogParse`] if it is not a JSON array of objects.
    pub fn load(path: &Path) -> Result<Self, EnrichError> {
        let content = fs::read_to_string(path).map_err(|e| EnrichError::CatalogRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let catalog = Self::parse(&content, path)?;
        tracing::info!(
            path = %path.display(),
            records = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, EnrichError> {
        let records: Vec<CatalogRecord> =
            serde_json::from_str(content).map_err(|e| EnrichError::CatalogParse {
                path: path.display().to_string(),
                source: e,
            })?;

        let mut seen = HashMap::new();
        for record in &records {
            let Some(id) = record.id() else {
                tracing::warn!(
                    name = record.name().unwrap_or_default(),
                    "catalog record has no numeric id"
                );
                continue;
            };
            if let Some(previous) = seen.insert(id, record.name()) {
                tracing::warn!(
                    id,
                    first = previous.unwrap_or_default(),
                    second = record.name().unwrap_or_default(),
                    "catalog contains a duplicate product id"
                );
            }
        }

        Ok(Self { records })
    }

    /// Serialize with two-space indentation and a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::CatalogSerialize`] if a record cannot be encoded.
    pub fn to_json(&self) -> Result<String, EnrichError> {
        let mut json =
            serde_json::to_string_pretty(&self.records).map_err(EnrichError::CatalogSerialize)?;
        json.push('\n');
        Ok(json)
    }

    /// Atomically replace the file at `path` with this catalog.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::CatalogSerialize`] before touching the disk if
    /// encoding fails, or [`EnrichError::CatalogWrite`] if writing or
    /// renaming the temp file fails.
    pub fn save(&self, path: &Path) -> Result<(), EnrichError> {
        let json = self.to_json()?;
        let tmp_path = temp_path_for(path);

        let write_err = |e: std::io::Error| EnrichError::CatalogWrite {
            path: path.display().to_string(),
            source: e,
        };

        let result = write_and_sync(&tmp_path, json.as_bytes())
            .and_then(|()| fs::rename(&tmp_path, path));
        if let Err(e) = result {
            if let Err(cleanup_err) = fs::remove_file(&tmp_path) {
                tracing::debug!(
                    path = %tmp_path.display(),
                    error = %cleanup_err,
                    "could not remove temp catalog file"
                );
            }
            return Err(write_err(e));
        }

        tracing::info!(path = %path.display(), records = self.len(), "saved catalog");
        Ok(())
    }

    #[must_use]
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [CatalogRecord] {
        &mut self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One past the highest id in use; `1` when no record has an id.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.records
            .iter()
            .filter_map(CatalogRecord::id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    /// De-duplication keys of every named record in the catalog.
    #[must_use]
    pub fn name_keys(&self) -> HashSet<String> {
        self.records
            .iter()
            .filter_map(CatalogRecord::name)
            .map(dedup_key)
            .collect()
    }

    /// Append a newly generated product.
    pub fn push(&mut self, product: Product) {
        self.records.push(CatalogRecord::from(product));
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
