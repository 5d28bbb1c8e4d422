use std::fmt;

use craftdb_core::{dedup_key, Manifest};

use super::{PassContext, PassOutcome};
use crate::infer::{infer_product, ProductFolder};
use crate::random::FieldRandomizer;
use crate::store::Catalog;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichSummary {
    /// Ids of the records appended, in manifest order.
    pub added: Vec<u64>,
    pub already_listed: usize,
    pub without_images: usize,
}

impl PassOutcome for EnrichSummary {
    fn changed(&self) -> bool {
        !self.added.is_empty()
    }
}

impl fmt::Display for EnrichSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "added {} products ({} already listed, {} folders without images)",
            self.added.len(),
            self.already_listed,
            self.without_images
        )
    }
}

/// Append a record for every manifest folder whose name is not yet in the
/// catalog. Existing records are never modified.
pub fn enrich_catalog(
    catalog: &mut Catalog,
    manifest: &Manifest,
    ctx: &PassContext,
    randomizer: &mut FieldRandomizer,
) -> EnrichSummary {
    let prices = manifest.price_table();
    let mut known = catalog.name_keys();
    let mut summary = EnrichSummary::default();

    for entry in manifest.entries() {
        let key = dedup_key(entry.folder);
        if known.contains(&key) {
            tracing::debug!(folder = entry.folder, "already listed; skipping");
            summary.already_listed += 1;
            continue;
        }

        let dir = ctx.folder_path(&entry.group.directory, entry.folder);
        let images = ctx.public_images(&dir);
        let target = ProductFolder::from(entry);
        let Some(product) = infer_product(&target, images, catalog.next_id(), &prices, randomizer)
        else {
            tracing::warn!(folder = %dir.display(), "no images found; skipping folder");
            summary.without_images += 1;
            continue;
        };

        tracing::info!(
            id = product.id,
            name = %product.name,
            category = %product.category,
            subcategory = %product.subcategory,
            price = product.price,
            images = product.images.as_ref().map_or(0, Vec::len),
            "added product"
        );
        summary.added.push(product.id);
        known.insert(key);
        catalog.push(product);
    }

    summary
}
