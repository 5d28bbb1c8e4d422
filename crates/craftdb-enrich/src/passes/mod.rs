//! Catalog passes: each one loads the catalog, mutates it in memory, and
//! saves it back only when something changed.
//!
//! - [`enrich_catalog`] appends records for manifest folders not yet listed.
//! - [`backfill_images`] fills the `images` list for older records.
//! - [`fix_image_paths`] rewrites stored paths into public form.
//! - [`reclassify_subcategories`] re-runs subcategory inference on names.
//! - [`verify_images`] checks that every referenced file exists (read-only).

mod backfill;
mod enrich;
mod fix_paths;
mod reclassify;
mod verify;

use std::path::{Path, PathBuf};

use crate::error::EnrichError;
use crate::paths::PathNormalizer;
use crate::scan::ImageScanner;
use crate::store::Catalog;

pub use backfill::{backfill_images, BackfillSummary};
pub use enrich::{enrich_catalog, EnrichSummary};
pub use fix_paths::{fix_image_paths, FixPathsSummary};
pub use reclassify::{reclassify_subcategories, ReclassifySummary};
pub use verify::{verify_images, MissingImage, VerifySummary};

/// Filesystem context shared by passes that look at image folders.
#[derive(Debug, Clone)]
pub struct PassContext {
    pub asset_root: PathBuf,
    pub scanner: ImageScanner,
    pub normalizer: PathNormalizer,
}

impl PassContext {
    #[must_use]
    pub fn new(asset_root: PathBuf, scanner: ImageScanner, normalizer: PathNormalizer) -> Self {
        let has_marker = asset_root
            .components()
            .any(|c| c.as_os_str() == normalizer.marker());
        if !has_marker {
            tracing::warn!(
                asset_root = %asset_root.display(),
                marker = normalizer.marker(),
                "asset root does not contain the data-root marker; fix-paths will fall back to bare file names"
            );
        }
        Self {
            asset_root,
            scanner,
            normalizer,
        }
    }

    /// Filesystem location of a product folder under the asset root.
    #[must_use]
    pub fn folder_path(&self, directory: &str, folder: &str) -> PathBuf {
        self.asset_root.join(directory).join(folder)
    }

    /// Scan `dir` and return its images in public form.
    ///
    /// Files under the asset root are mounted by their root-relative path,
    /// so the result always maps back through
    /// [`PathNormalizer::asset_relative`]. Anything else goes through the
    /// marker-based [`PathNormalizer::normalize`].
    #[must_use]
    pub fn public_images(&self, dir: &Path) -> Vec<String> {
        self.scanner
            .scan(dir)
            .iter()
            .map(|path| self.public_path(path))
            .collect()
    }

    fn public_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.asset_root) {
            Ok(relative) => self.normalizer.mount_relative(&relative.to_string_lossy()),
            Err(_) => self.normalizer.normalize(&path.to_string_lossy()),
        }
    }
}

/// Result of a pass, reporting whether the catalog needs to be written.
pub trait PassOutcome {
    fn changed(&self) -> bool;
}

/// Load the catalog at `catalog_path`, apply `pass`, and save the result.
///
/// The file is left untouched when the pass changed nothing or `dry_run` is
/// set.
///
/// # Errors
///
/// Returns [`EnrichError`] if the catalog cannot be loaded or saved.
pub fn run_pass<S, F>(catalog_path: &Path, dry_run: bool, pass: F) -> Result<S, EnrichError>
where
    S: PassOutcome,
    F: FnOnce(&mut Catalog) -> S,
{
    let mut catalog = Catalog::load(catalog_path)?;
    let outcome = pass(&mut catalog);

    if !outcome.changed() {
        tracing::info!(path = %catalog_path.display(), "no changes; catalog not rewritten");
    } else if dry_run {
        tracing::info!(path = %catalog_path.display(), "dry run; catalog not rewritten");
    } else {
        catalog.save(catalog_path)?;
    }

    Ok(outcome)
}
