use std::collections::BTreeMap;

use crate::products::Category;

/// Base price used for categories without their own entry.
pub const DEFAULT_BASE_PRICE: u32 = 1500;

/// Base prices by category, before keyword adjustments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    default_price: u32,
    by_category: BTreeMap<Category, u32>,
}

impl Default for PriceTable {
    fn default() -> Self {
        let by_category = BTreeMap::from([
            (Category::WoodenCraft, 2000),
            (Category::DokraArt, 2500),
            (Category::TerracottaItems, 1200),
        ]);
        Self {
            default_price: DEFAULT_BASE_PRICE,
            by_category,
        }
    }
}

impl PriceTable {
    /// A table with only a default price and no per-category entries.
    #[must_use]
    pub fn flat(default_price: u32) -> Self {
        Self {
            default_price,
            by_category: BTreeMap::new(),
        }
    }

    /// Set or replace the base price for one category.
    #[must_use]
    pub fn with_category(mut self, category: Category, price: u32) -> Self {
        self.by_category.insert(category, price);
        self
    }

    /// Replace the fallback price for unlisted categories.
    #[must_use]
    pub fn with_default(mut self, price: u32) -> Self {
        self.default_price = price;
        self
    }

    /// Base price for `category`, falling back to the default.
    #[must_use]
    pub fn base_price(&self, category: &Category) -> u32 {
        self.by_category
            .get(category)
            .copied()
            .unwrap_or(self.default_price)
    }
}
