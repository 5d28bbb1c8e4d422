//! Catalog enrichment: turns product image folders into storefront records
//! and keeps the flat-file catalog consistent with the asset tree.

pub mod error;
pub mod infer;
pub mod keywords;
pub mod passes;
pub mod paths;
pub mod random;
pub mod scan;
pub mod store;

#[cfg(test)]
mod test_support;

pub use error::EnrichError;
pub use infer::{infer_product, infer_traits, InferredTraits, ProductFolder};
pub use passes::{
    backfill_images, enrich_catalog, fix_image_paths, reclassify_subcategories, run_pass,
    verify_images, BackfillSummary, EnrichSummary, FixPathsSummary, MissingImage, PassContext,
    PassOutcome, ReclassifySummary, VerifySummary,
};
pub use paths::PathNormalizer;
pub use random::{FieldRandomizer, ListingStats};
pub use scan::ImageScanner;
pub use store::Catalog;
