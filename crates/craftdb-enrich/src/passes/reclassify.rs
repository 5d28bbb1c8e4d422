use std::fmt;

use super::PassOutcome;
use crate::keywords::infer_subcategory;
use crate::store::Catalog;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReclassifySummary {
    pub updated: usize,
    pub unchanged: usize,
}

impl PassOutcome for ReclassifySummary {
    fn changed(&self) -> bool {
        self.updated > 0
    }
}

impl fmt::Display for ReclassifySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "updated subcategory for {} products ({} unchanged)",
            self.updated, self.unchanged
        )
    }
}

/// Re-run subcategory inference on each record's name. A record whose name
/// matches no keyword group, or that has no name, keeps its current
/// subcategory.
pub fn reclassify_subcategories(catalog: &mut Catalog) -> ReclassifySummary {
    let mut summary = ReclassifySummary::default();

    for record in catalog.records_mut() {
        let inferred = record.name().and_then(infer_subcategory);
        match inferred {
            Some(inferred) if record.subcategory() != Some(inferred) => {
                tracing::info!(
                    id = record.id(),
                    name = record.name().unwrap_or_default(),
                    from = record.subcategory().unwrap_or_default(),
                    to = inferred,
                    "reclassified product"
                );
                record.set_subcategory(inferred);
                summary.updated += 1;
            }
            _ => summary.unchanged += 1,
        }
    }

    summary
}
