use std::fmt;
use std::path::Path;

use super::{PassContext, PassOutcome};
use crate::store::Catalog;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackfillSummary {
    pub filled: usize,
    pub already_complete: usize,
    /// Records whose primary image does not point into the asset tree.
    pub unresolved: usize,
    pub no_images_found: usize,
}

impl PassOutcome for BackfillSummary {
    fn changed(&self) -> bool {
        self.filled > 0
    }
}

impl fmt::Display for BackfillSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "filled images for {} products ({} already complete, {} unresolved, {} with no images on disk)",
            self.filled, self.already_complete, self.unresolved, self.no_images_found
        )
    }
}

/// Fill the `images` list of every record that has none, by scanning the
/// folder its primary image lives in. Only `images` is written; every other
/// key of the record is left exactly as it was read.
pub fn backfill_images(catalog: &mut Catalog, ctx: &PassContext) -> BackfillSummary {
    let mut summary = BackfillSummary::default();

    for record in catalog.records_mut() {
        if !record.is_missing_images() {
            summary.already_complete += 1;
            continue;
        }

        let image = record.image().unwrap_or_default();
        let folder = if image.trim().is_empty() {
            None
        } else {
            let public = ctx.normalizer.normalize(image);
            ctx.normalizer.asset_relative(&public).and_then(|relative| {
                Path::new(&relative)
                    .parent()
                    .filter(|parent| !parent.as_os_str().is_empty())
                    .map(Path::to_path_buf)
            })
        };
        let Some(folder) = folder else {
            tracing::warn!(
                id = record.id(),
                image,
                "cannot locate product folder from primary image"
            );
            summary.unresolved += 1;
            continue;
        };

        let images = ctx.public_images(&ctx.asset_root.join(&folder));
        if images.is_empty() {
            tracing::warn!(id = record.id(), folder = %folder.display(), "no images found for product");
            summary.no_images_found += 1;
            continue;
        }

        tracing::info!(
            id = record.id(),
            name = record.name().unwrap_or_default(),
            count = images.len(),
            "filled image list"
        );
        record.set_images(images);
        summary.filled += 1;
    }

    summary
}

#[cfg(test)]
mod tests {
    use std::fs;

    use craftdb_core::CatalogRecord;
    use serde_json::json;

    use super::*;
    use crate::paths::PathNormalizer;
    use crate::scan::ImageScanner;
    use crate::test_support::record;

    fn context(root: &Path) -> PassContext {
        PassContext::new(
            root.join("images"),
            ImageScanner::new(false),
            PathNormalizer::new("images", "/images"),
        )
    }

    fn owl_folder(root: &Path, files: &[&str]) {
        let folder = root.join("images").join("dokra").join("owl");
        fs::create_dir_all(&folder).expect("mkdir");
        for name in files {
            fs::write(folder.join(name), b"img").expect("write");
        }
    }

    fn parsed(value: serde_json::Value) -> CatalogRecord {
        serde_json::from_value(value).expect("record object")
    }

    #[test]
    fn fills_missing_null_and_empty_lists_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        owl_folder(dir.path(), &["1.jpg", "2.jpg", "3.jpg"]);

        let missing = parsed(json!({"id": 1, "image": "/images/dokra/owl/1.jpg"}));
        let null = parsed(json!({"id": 2, "image": "/images/dokra/owl/1.jpg", "images": null}));
        let empty = parsed(json!({"id": 3, "image": "/images/dokra/owl/1.jpg", "images": []}));
        let complete = record(4, "Deer");
        let mut catalog = Catalog::from_records(vec![missing, null, empty, complete.clone()]);

        let summary = backfill_images(&mut catalog, &context(dir.path()));

        assert_eq!(summary.filled, 3);
        assert_eq!(summary.already_complete, 1);
        let expected = json!([
            "/images/dokra/owl/1.jpg",
            "/images/dokra/owl/2.jpg",
            "/images/dokra/owl/3.jpg"
        ]);
        for filled in &catalog.records()[..3] {
            assert_eq!(filled.get("images"), Some(&expected));
        }
        assert_eq!(catalog.records()[3], complete);
    }

    #[test]
    fn other_keys_are_byte_identical_after_fill() {
        let dir = tempfile::tempdir().expect("tempdir");
        owl_folder(dir.path(), &["1.jpg"]);
        let legacy = r#"{"name":"Owl","rating":4,"tags":[],"images":null,"id":1,"image":"/images/dokra/owl/1.jpg","seller":{"id":"a-17"}}"#;
        let mut catalog =
            Catalog::from_records(vec![serde_json::from_str(legacy).expect("record")]);

        backfill_images(&mut catalog, &context(dir.path()));

        let written = serde_json::to_string(&catalog.records()[0]).expect("serialize");
        assert_eq!(
            written,
            r#"{"name":"Owl","rating":4,"tags":[],"images":["/images/dokra/owl/1.jpg"],"id":1,"image":"/images/dokra/owl/1.jpg","seller":{"id":"a-17"}}"#
        );
    }

    #[test]
    fn unresolvable_and_empty_folders_are_counted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loose = parsed(json!({"id": 1, "image": ""}));
        let no_image = parsed(json!({"id": 2, "name": "Bell"}));
        let gone = parsed(json!({"id": 3, "image": "/images/dokra/deer/1.jpg"}));
        let mut catalog = Catalog::from_records(vec![loose, no_image, gone]);

        let summary = backfill_images(&mut catalog, &context(dir.path()));

        assert_eq!(summary.unresolved, 2);
        assert_eq!(summary.no_images_found, 1);
        assert!(!summary.changed());
    }
}
