use std::fmt;

use super::{PassContext, PassOutcome};
use crate::store::Catalog;

/// An image path referenced by a record with no file behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingImage {
    /// `None` for a record with no numeric id.
    pub product_id: Option<u64>,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifySummary {
    pub products_checked: usize,
    pub paths_checked: usize,
    pub missing: Vec<MissingImage>,
}

impl VerifySummary {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }
}

impl PassOutcome for VerifySummary {
    fn changed(&self) -> bool {
        false
    }
}

impl fmt::Display for VerifySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "checked {} image paths across {} products, {} missing",
            self.paths_checked,
            self.products_checked,
            self.missing.len()
        )
    }
}

/// Check that every path a record references resolves to a file under the
/// asset root. Paths outside the public mount count as missing.
#[must_use]
pub fn verify_images(catalog: &Catalog, ctx: &PassContext) -> VerifySummary {
    let mut summary = VerifySummary::default();

    for record in catalog.records() {
        summary.products_checked += 1;
        for path in record.image_paths() {
            summary.paths_checked += 1;
            let exists = ctx
                .normalizer
                .asset_relative(path)
                .is_some_and(|relative| ctx.asset_root.join(relative).is_file());
            if !exists {
                tracing::warn!(id = record.id(), path, "image file missing");
                summary.missing.push(MissingImage {
                    product_id: record.id(),
                    path: path.to_string(),
                });
            }
        }
    }

    summary
}
