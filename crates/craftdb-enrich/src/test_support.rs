//! Shared fixtures for unit tests.

use craftdb_core::{CatalogRecord, Category, Product};

/// A fully populated product with images under `/images/dokra/<slug>/`.
pub(crate) fn product(id: u64, name: &str) -> Product {
    let slug = name.to_lowercase().replace(' ', "-");
    let first = format!("/images/dokra/{slug}/1.jpg");
    Product {
        id,
        name: name.to_string(),
        category: Category::DokraArt,
        subcategory: "Home Decor".to_string(),
        price: 2500,
        regular_price: 3000,
        image: first.clone(),
        preview: first.clone(),
        images: Some(vec![first]),
        color: "Bronze".to_string(),
        size: "Medium".to_string(),
        rating: 4.5,
        popularity: 70,
        reviews: 12,
        in_stock: true,
        out_of_stock: false,
        description: format!("Handcrafted {name}."),
        tags: vec!["dokra art".to_string()],
        date: "2024-05-01".to_string(),
    }
}

/// [`product`] as it would sit in the catalog file.
pub(crate) fn record(id: u64, name: &str) -> CatalogRecord {
    CatalogRecord::from(product(id, name))
}
