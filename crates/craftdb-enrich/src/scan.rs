//! Image discovery inside a single product folder.

use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];
const WEBP_EXTENSION: &str = "webp";

/// Lists image files in a product folder.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageScanner {
    allow_webp: bool,
}

impl ImageScanner {
    #[must_use]
    pub fn new(allow_webp: bool) -> Self {
        Self { allow_webp }
    }

    /// Returns `true` if `path` has an allowed image extension (case-insensitive).
    #[must_use]
    pub fn is_image(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        IMAGE_EXTENSIONS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            || (self.allow_webp && WEBP_EXTENSION.eq_ignore_ascii_case(ext))
    }

    /// Lists the image files directly inside `dir`, sorted by file name.
    ///
    /// A missing or unreadable folder yields an empty list and a warning;
    /// this never fails. Subdirectories are not descended into.
    #[must_use]
    pub fn scan(&self, dir: &Path) -> Vec<PathBuf> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(folder = %dir.display(), error = %e, "cannot read product folder");
                return Vec::new();
            }
        };

        let mut images: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(folder = %dir.display(), error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .map(|entry| entry.path())
            .filter(|path| self.is_image(path))
            .collect();
        images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        tracing::debug!(folder = %dir.display(), count = images.len(), "scanned product folder");
        images
    }
}
