use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::naming::dedup_key;
use crate::pricing::PriceTable;
use crate::products::Category;
use crate::ConfigError;

/// Optional base-price overrides carried by the manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceOverrides {
    pub default: Option<u32>,
    #[serde(default)]
    pub categories: BTreeMap<String, u32>,
}

impl PriceOverrides {
    /// Apply these overrides on top of the built-in [`PriceTable`].
    #[must_use]
    pub fn to_table(&self) -> PriceTable {
        let mut table = PriceTable::default();
        if let Some(price) = self.default {
            table = table.with_default(price);
        }
        for (label, price) in &self.categories {
            table = table.with_category(Category::from(label.as_str()), *price);
        }
        table
    }
}

/// One category folder and the product folders to import from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderGroup {
    pub category: Category,
    /// Category folder name under the asset root, e.g. `"dokra"`.
    pub directory: String,
    /// Subcategory used when no keyword group matches the product name.
    pub default_subcategory: String,
    pub folders: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub prices: PriceOverrides,
    pub groups: Vec<FolderGroup>,
}

/// A single product folder together with the group it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct ManifestEntry<'a> {
    pub group: &'a FolderGroup,
    pub folder: &'a str,
}

impl Manifest {
    /// Every product folder in manifest order.
    pub fn entries(&self) -> impl Iterator<Item = ManifestEntry<'_>> {
        self.groups.iter().flat_map(|group| {
            group.folders.iter().map(move |folder| ManifestEntry {
                group,
                folder: folder.as_str(),
            })
        })
    }

    #[must_use]
    pub fn folder_count(&self) -> usize {
        self.groups.iter().map(|g| g.folders.len()).sum()
    }

    #[must_use]
    pub fn price_table(&self) -> PriceTable {
        self.prices.to_table()
    }
}

/// Load and validate the folder manifest from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_manifest(path: &Path) -> Result<Manifest, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ManifestIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let manifest: Manifest = serde_yaml::from_str(&content)?;

    validate_manifest(&manifest)?;

    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest) -> Result<(), ConfigError> {
    if let Some(0) = manifest.prices.default {
        return Err(ConfigError::Validation(
            "default base price must be greater than zero".to_string(),
        ));
    }
    for (label, price) in &manifest.prices.categories {
        if *price == 0 {
            return Err(ConfigError::Validation(format!(
                "base price for category '{label}' must be greater than zero"
            )));
        }
    }

    let mut seen_folders = HashSet::new();

    for group in &manifest.groups {
        if group.category.as_str().trim().is_empty() {
            return Err(ConfigError::Validation(
                "group category must be non-empty".to_string(),
            ));
        }

        if group.directory.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "group '{}' has an empty directory",
                group.category
            )));
        }

        if group.default_subcategory.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "group '{}' has an empty default_subcategory",
                group.category
            )));
        }

        for folder in &group.folders {
            let key = dedup_key(folder);
            if key.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "group '{}' lists an empty folder name",
                    group.category
                )));
            }
            if !seen_folders.insert(key.clone()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate product folder: '{folder}' (cleans to '{key}')"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "manifest_test.rs"]
mod tests;
