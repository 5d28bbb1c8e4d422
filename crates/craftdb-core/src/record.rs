//! A catalog record exactly as it sits in the products file.
//!
//! Records are kept as JSON objects, not decoded into [`Product`], so a pass
//! that patches one key writes every other key back as it was read: same
//! order, same number formatting, same `null`s and empty arrays. Records that
//! predate a field, or carry fields added by the storefront, load the same
//! as generated ones.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::products::Product;

const ID: &str = "id";
const NAME: &str = "name";
const SUBCATEGORY: &str = "subcategory";
const IMAGE: &str = "image";
const PREVIEW: &str = "preview";
const IMAGES: &str = "images";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogRecord(Map<String, Value>);

impl CatalogRecord {
    #[must_use]
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Numeric id, if the record has one.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.0.get(ID).and_then(Value::as_u64)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.str_field(NAME)
    }

    #[must_use]
    pub fn subcategory(&self) -> Option<&str> {
        self.str_field(SUBCATEGORY)
    }

    /// Primary image path.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.str_field(IMAGE)
    }

    /// All image paths referenced by this record, without duplicates, in
    /// `image`, `preview`, `images` order. Blank and non-string entries are
    /// ignored.
    #[must_use]
    pub fn image_paths(&self) -> Vec<&str> {
        let listed = match self.0.get(IMAGES) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        };

        let mut paths: Vec<&str> = Vec::new();
        for path in [self.str_field(IMAGE), self.str_field(PREVIEW)]
            .into_iter()
            .flatten()
            .chain(listed)
        {
            if !path.trim().is_empty() && !paths.contains(&path) {
                paths.push(path);
            }
        }
        paths
    }

    /// `true` when `images` is absent, `null`, not an array, or empty.
    #[must_use]
    pub fn is_missing_images(&self) -> bool {
        match self.0.get(IMAGES) {
            Some(Value::Array(items)) => items.is_empty(),
            _ => true,
        }
    }

    /// Replace `images`, keeping the key's position when it already exists.
    pub fn set_images(&mut self, images: Vec<String>) {
        self.0.insert(IMAGES.to_string(), Value::from(images));
    }

    pub fn set_subcategory(&mut self, subcategory: &str) {
        self.0
            .insert(SUBCATEGORY.to_string(), Value::from(subcategory));
    }

    /// Apply `rewrite` to every string in `image`, `preview` and `images`.
    /// Returns `true` if any value changed.
    pub fn rewrite_paths(&mut self, rewrite: impl Fn(&str) -> String) -> bool {
        let mut changed = false;
        let mut apply = |value: &mut Value| {
            if let Value::String(path) = value {
                let rewritten = rewrite(path);
                if rewritten != *path {
                    *path = rewritten;
                    changed = true;
                }
            }
        };

        for key in [IMAGE, PREVIEW] {
            if let Some(value) = self.0.get_mut(key) {
                apply(value);
            }
        }
        if let Some(Value::Array(items)) = self.0.get_mut(IMAGES) {
            items.iter_mut().for_each(&mut apply);
        }
        changed
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Product> for CatalogRecord {
    fn from(product: Product) -> Self {
        let mut map = Map::new();
        let mut put = |key: &str, value: Value| {
            map.insert(key.to_string(), value);
        };

        put(ID, product.id.into());
        put(NAME, product.name.into());
        put("category", String::from(product.category).into());
        put(SUBCATEGORY, product.subcategory.into());
        put("price", product.price.into());
        put("regularPrice", product.regular_price.into());
        put(IMAGE, product.image.into());
        put(PREVIEW, product.preview.into());
        if let Some(images) = product.images {
            put(IMAGES, images.into());
        }
        put("color", product.color.into());
        put("size", product.size.into());
        put("rating", product.rating.into());
        put("popularity", product.popularity.into());
        put("reviews", product.reviews.into());
        put("inStock", product.in_stock.into());
        put("outOfStock", product.out_of_stock.into());
        put("description", product.description.into());
        if !product.tags.is_empty() {
            put("tags", product.tags.into());
        }
        put("date", product.date.into());

        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::products::Category;

    fn record(value: Value) -> CatalogRecord {
        serde_json::from_value(value).expect("record object")
    }

    fn generated() -> Product {
        Product {
            id: 3,
            name: "Horse Pair".to_string(),
            category: Category::DokraArt,
            subcategory: "Animal Figurines".to_string(),
            price: 2900,
            regular_price: 3480,
            image: "/images/dokra/horse/1.jpg".to_string(),
            preview: "/images/dokra/horse/2.jpg".to_string(),
            images: Some(vec![
                "/images/dokra/horse/1.jpg".to_string(),
                "/images/dokra/horse/2.jpg".to_string(),
            ]),
            color: "Bronze".to_string(),
            size: "Medium".to_string(),
            rating: 4.7,
            popularity: 64,
            reviews: 18,
            in_stock: true,
            out_of_stock: false,
            description: "Handcrafted Horse Pair.".to_string(),
            tags: vec!["dokra art".to_string(), "handmade".to_string()],
            date: "2024-06-30".to_string(),
        }
    }

    #[test]
    fn generated_record_uses_storefront_keys_in_order() {
        let record = CatalogRecord::from(generated());
        let keys: Vec<&str> = record.as_map().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "id", "name", "category", "subcategory", "price", "regularPrice", "image",
                "preview", "images", "color", "size", "rating", "popularity", "reviews",
                "inStock", "outOfStock", "description", "tags", "date"
            ]
        );
        assert_eq!(record.get("category"), Some(&json!("Dokra Art")));
        assert_eq!(record.get("regularPrice"), Some(&json!(3480)));
    }

    #[test]
    fn generated_record_omits_absent_images_and_empty_tags() {
        let mut product = generated();
        product.images = None;
        product.tags.clear();
        let record = CatalogRecord::from(product);
        assert!(record.get("images").is_none());
        assert!(record.get("tags").is_none());
    }

    #[test]
    fn sparse_record_loads_and_answers_accessors() {
        let sparse = record(json!({"id": 12, "name": "Deer", "image": "/images/dokra/deer/1.jpg"}));
        assert_eq!(sparse.id(), Some(12));
        assert_eq!(sparse.name(), Some("Deer"));
        assert!(sparse.subcategory().is_none());
        assert!(sparse.is_missing_images());
        assert_eq!(sparse.image_paths(), vec!["/images/dokra/deer/1.jpg"]);
    }

    #[test]
    fn missing_images_covers_null_non_array_and_empty() {
        assert!(record(json!({"images": null})).is_missing_images());
        assert!(record(json!({"images": "x.jpg"})).is_missing_images());
        assert!(record(json!({"images": []})).is_missing_images());
        assert!(!record(json!({"images": ["/images/a.jpg"]})).is_missing_images());
    }

    #[test]
    fn image_paths_deduplicate_and_skip_blanks() {
        let owl = record(json!({
            "image": "/images/dokra/owl/1.jpg",
            "preview": "",
            "images": ["/images/dokra/owl/1.jpg", 7, "/images/dokra/owl/2.jpg"]
        }));
        assert_eq!(
            owl.image_paths(),
            vec!["/images/dokra/owl/1.jpg", "/images/dokra/owl/2.jpg"]
        );
    }

    #[test]
    fn set_images_keeps_key_position() {
        let mut owl = record(json!({"id": 1, "images": null, "rating": 4}));
        owl.set_images(vec!["/images/dokra/owl/1.jpg".to_string()]);
        let text = serde_json::to_string(&owl).expect("serialize");
        assert_eq!(text, r#"{"id":1,"images":["/images/dokra/owl/1.jpg"],"rating":4}"#);
    }

    #[test]
    fn rewrite_paths_touches_only_path_strings() {
        let mut owl = record(json!({
            "image": "a.jpg",
            "preview": null,
            "images": ["a.jpg", "b.jpg"],
            "description": "a.jpg"
        }));
        let changed = owl.rewrite_paths(|p| format!("/images/{p}"));
        assert!(changed);
        assert_eq!(owl.get("image"), Some(&json!("/images/a.jpg")));
        assert_eq!(owl.get("preview"), Some(&Value::Null));
        assert_eq!(owl.get("images"), Some(&json!(["/images/a.jpg", "/images/b.jpg"])));
        assert_eq!(owl.get("description"), Some(&json!("a.jpg")));

        assert!(!owl.rewrite_paths(str::to_string));
    }
}
