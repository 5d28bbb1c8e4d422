use serde::{Deserialize, Serialize};

/// Product category. The three named variants carry their own base price;
/// any other label is kept verbatim and priced with the default base.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    WoodenCraft,
    DokraArt,
    TerracottaItems,
    Other(String),
}

impl Category {
    /// Catalog label, e.g. `"Dokra Art"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Category::WoodenCraft => "Wooden Craft",
            Category::DokraArt => "Dokra Art",
            Category::TerracottaItems => "Terracotta Items",
            Category::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.trim().to_lowercase().as_str() {
            "wooden craft" => Category::WoodenCraft,
            "dokra art" => Category::DokraArt,
            "terracotta items" => Category::TerracottaItems,
            _ => Category::Other(label),
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::from(label.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(label) => label,
            named => named.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A newly generated catalog record.
///
/// Records already in the catalog are handled as
/// [`CatalogRecord`](crate::record::CatalogRecord) so their untouched keys
/// survive a rewrite verbatim; a `Product` is converted into one when it is
/// appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Assigned once at append time and never reassigned.
    pub id: u64,
    pub name: String,
    pub category: Category,
    pub subcategory: String,
    pub price: u32,
    /// Always `round(price * 1.2)`.
    pub regular_price: u32,
    /// Public path of the first image, e.g. `"/images/dokra/owl/1.jpg"`.
    pub image: String,
    /// Second image, or the first when the folder held only one.
    pub preview: String,
    /// Every image in folder order.
    pub images: Option<Vec<String>>,
    pub color: String,
    pub size: String,
    pub rating: f64,
    pub popularity: u32,
    pub reviews: u32,
    pub in_stock: bool,
    pub out_of_stock: bool,
    pub description: String,
    pub tags: Vec<String>,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
}
