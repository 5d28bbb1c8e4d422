//! Builds a [`Product`] from a product folder name and its discovered images.
//!
//! Keyword matching is delegated to [`crate::keywords`]; this module only
//! composes the record.

use craftdb_core::{display_name, Category, ManifestEntry, PriceTable, Product};

use crate::keywords::{
    adjusted_price, infer_color, infer_size, infer_subcategory, matched_keywords, regular_price,
};
use crate::random::FieldRandomizer;

/// The inputs that identify one product folder.
#[derive(Debug, Clone, Copy)]
pub struct ProductFolder<'a> {
    /// Raw folder name, e.g. `"DOKRA OWL DECORATIVE HOME DECOR"`.
    pub folder: &'a str,
    pub category: &'a Category,
    pub default_subcategory: &'a str,
}

impl<'a> From<ManifestEntry<'a>> for ProductFolder<'a> {
    fn from(entry: ManifestEntry<'a>) -> Self {
        Self {
            folder: entry.folder,
            category: &entry.group.category,
            default_subcategory: &entry.group.default_subcategory,
        }
    }
}

/// Everything derivable from the folder name alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredTraits {
    pub name: String,
    pub subcategory: String,
    pub price: u32,
    pub regular_price: u32,
    pub color: String,
    pub size: String,
    pub tags: Vec<String>,
    pub description: String,
}

/// Derive name, subcategory, pricing, colour, size, tags and description.
#[must_use]
pub fn infer_traits(target: &ProductFolder<'_>, prices: &PriceTable) -> InferredTraits {
    let name = display_name(target.folder);
    let subcategory = infer_subcategory(&name)
        .unwrap_or(target.default_subcategory)
        .to_string();

    let price = adjusted_price(&name, prices.base_price(target.category));

    let mut tags: Vec<String> = Vec::new();
    let candidates = [
        target.category.as_str().to_lowercase(),
        subcategory.to_lowercase(),
    ]
    .into_iter()
    .chain(matched_keywords(&name).into_iter().map(str::to_string))
    .chain(std::iter::once("handmade".to_string()));
    for tag in candidates {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    let description = format!(
        "Handcrafted {name} from our {category} collection, made by traditional artisans. \
         A distinctive piece of {sub} for your home.",
        category = target.category,
        sub = subcategory.to_lowercase(),
    );

    InferredTraits {
        subcategory,
        price,
        regular_price: regular_price(price),
        color: infer_color(&name, target.category).to_string(),
        size: infer_size(&name).to_string(),
        tags,
        description,
        name,
    }
}

/// Build a complete product record for a folder.
///
/// `images` must already be in public form. Returns `None` when the folder
/// held no images; the caller skips it. The randomizer is only advanced for
/// products that are actually built.
#[must_use]
pub fn infer_product(
    target: &ProductFolder<'_>,
    images: Vec<String>,
    id: u64,
    prices: &PriceTable,
    randomizer: &mut FieldRandomizer,
) -> Option<Product> {
    let image = images.first()?.clone();
    let preview = images.get(1).unwrap_or(&image).clone();

    let traits = infer_traits(target, prices);
    let stats = randomizer.listing_stats();

    Some(Product {
        id,
        name: traits.name,
        category: target.category.clone(),
        subcategory: traits.subcategory,
        price: traits.price,
        regular_price: traits.regular_price,
        image,
        preview,
        images: Some(images),
        color: traits.color,
        size: traits.size,
        rating: stats.rating,
        popularity: stats.popularity,
        reviews: stats.reviews,
        in_stock: true,
        out_of_stock: false,
        description: traits.description,
        tags: traits.tags,
        date: stats.date,
    })
}

#[cfg(test)]
#[path = "infer_test.rs"]
mod tests;
