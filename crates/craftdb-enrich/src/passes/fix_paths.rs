use std::fmt;

use super::PassOutcome;
use crate::paths::PathNormalizer;
use crate::store::Catalog;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixPathsSummary {
    pub fixed: usize,
    pub unchanged: usize,
}

impl PassOutcome for FixPathsSummary {
    fn changed(&self) -> bool {
        self.fixed > 0
    }
}

impl fmt::Display for FixPathsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rewrote image paths for {} products ({} already clean)",
            self.fixed, self.unchanged
        )
    }
}

/// Rewrite `image`, `preview` and `images` of every record into public form.
/// Other keys are left untouched.
pub fn fix_image_paths(catalog: &mut Catalog, normalizer: &PathNormalizer) -> FixPathsSummary {
    let mut summary = FixPathsSummary::default();

    for record in catalog.records_mut() {
        if record.rewrite_paths(|path| fix(normalizer, path)) {
            tracing::debug!(id = record.id(), image = record.image(), "normalized image paths");
            summary.fixed += 1;
        } else {
            summary.unchanged += 1;
        }
    }

    summary
}

// Blank paths stay blank rather than collapsing to the bare mount.
fn fix(normalizer: &PathNormalizer, path: &str) -> String {
    if path.trim().is_empty() {
        path.to_string()
    } else {
        normalizer.normalize(path)
    }
}
