//! Keyword heuristics over product display names: price adjustments,
//! subcategory groups, colour and size.
//!
//! Price and subcategory keywords match as substrings of the lower-cased
//! name. Colour keywords match whole words only, since short colour names
//! (`red`) hide inside ordinary words (`decorated`).

use craftdb_core::Category;

/// No generated price is ever below this.
pub const MIN_PRICE: u32 = 500;

/// Cumulative price adjustments, applied in this order.
const PRICE_ADJUSTMENTS: &[(&[&str], i64)] = &[
    (&["big", "large"], 500),
    (&["small"], -300),
    (&["pair"], 400),
    (&["set"], 600),
];

/// Subcategory keyword groups in priority order; the first hit wins.
const SUBCATEGORY_GROUPS: &[(&[&str], &str)] = &[
    (&["ganesh", "durga", "krishna", "laxmi"], "Religious Items"),
    (
        &["horse", "deer", "elephant", "owl", "peacock"],
        "Animal Figurines",
    ),
    (&["wall", "hanging"], "Wall Decor"),
    (&["tribal"], "Tribal Art"),
    (&["key", "ring"], "Accessories"),
];

const COLOR_WORDS: &[(&[&str], &str)] = &[
    (&["black"], "Black"),
    (&["white"], "White"),
    (&["gold", "golden", "brass"], "Gold"),
    (&["red"], "Red"),
    (&["blue"], "Blue"),
    (&["green"], "Green"),
];

/// Price for a product named `name` whose category base is `base`.
///
/// Each adjustment group contributes at most once, even when several of its
/// keywords appear. The sum is floored at [`MIN_PRICE`].
#[must_use]
pub fn adjusted_price(name: &str, base: u32) -> u32 {
    let lower = name.to_lowercase();
    let adjusted = PRICE_ADJUSTMENTS
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .fold(i64::from(base), |price, (_, delta)| price + delta);

    let floored = adjusted.max(i64::from(MIN_PRICE));
    u32::try_from(floored).unwrap_or(u32::MAX)
}

/// `round(price * 1.2)`, computed in integers.
#[must_use]
pub fn regular_price(price: u32) -> u32 {
    let scaled = (u64::from(price) * 12 + 5) / 10;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Subcategory implied by the first matching keyword group, if any.
#[must_use]
pub fn infer_subcategory(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    SUBCATEGORY_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, subcategory)| *subcategory)
}

/// Every subcategory keyword found in `name`, in group order.
#[must_use]
pub fn matched_keywords(name: &str) -> Vec<&'static str> {
    let lower = name.to_lowercase();
    SUBCATEGORY_GROUPS
        .iter()
        .flat_map(|(keywords, _)| keywords.iter().copied())
        .filter(|k| lower.contains(k))
        .collect()
}

/// Colour from an explicit colour word in the name, else from the category.
#[must_use]
pub fn infer_color(name: &str, category: &Category) -> &'static str {
    let lower = name.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    COLOR_WORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| words.contains(k)))
        .map_or_else(
            || match category {
                Category::DokraArt => "Bronze",
                Category::WoodenCraft => "Brown",
                Category::TerracottaItems => "Terracotta",
                Category::Other(_) => "Multicolor",
            },
            |(_, color)| *color,
        )
}

/// `Large`, `Small` or `Medium` from size words in the name.
#[must_use]
pub fn infer_size(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    if lower.contains("big") || lower.contains("large") {
        "Large"
    } else if lower.contains("small") || lower.split_whitespace().any(|w| w == "mini") {
        "Small"
    } else {
        "Medium"
    }
}
