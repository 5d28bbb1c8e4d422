//! Display-name cleaning for product folder names.
//!
//! Folder names arrive in shouting case with category words baked in, e.g.
//! `"DOKRA OWL DECORATIVE HOME DECOR"`. The cleaned, title-cased form is both
//! the product's display name and (lower-cased) the de-duplication key that
//! joins folders to existing catalog records across runs.

/// Whole-word tokens removed from folder names before display.
pub const PREFIX_TOKENS: &[&str] = &[
    "DOKRA",
    "WOODEN",
    "TERRACOTTA",
    "HANDMADE",
    "JEWELLERY",
    "ART",
    "ITEMS",
    "CRAFT",
];

/// Derive a product display name from a raw folder name.
///
/// Underscores become spaces, [`PREFIX_TOKENS`] are dropped as whole words
/// (case-insensitive), whitespace is collapsed and each remaining word is
/// title-cased. A name made only of prefix tokens keeps all of its words.
#[must_use]
pub fn display_name(folder: &str) -> String {
    let spaced = folder.replace('_', " ");
    let all: Vec<&str> = spaced.split_whitespace().collect();
    let kept: Vec<&str> = all
        .iter()
        .copied()
        .filter(|word| !is_prefix_token(word))
        .collect();
    let words = if kept.is_empty() { all } else { kept };

    words
        .into_iter()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The case-insensitive, prefix-stripped join key for a folder or product name.
#[must_use]
pub fn dedup_key(name: &str) -> String {
    display_name(name).to_lowercase()
}

fn is_prefix_token(word: &str) -> bool {
    PREFIX_TOKENS
        .iter()
        .any(|token| token.eq_ignore_ascii_case(word))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_tokens_and_title_cases() {
        assert_eq!(
            display_name("DOKRA OWL DECORATIVE HOME DECOR"),
            "Owl Decorative Home Decor"
        );
    }

    #[test]
    fn strips_tokens_anywhere_and_underscores() {
        assert_eq!(
            display_name("WOODEN_ELEPHANT  PAIR_CRAFT"),
            "Elephant Pair"
        );
    }

    #[test]
    fn keeps_words_that_merely_contain_a_token() {
        assert_eq!(display_name("DOKRA ARTWORK PARTY SET"), "Artwork Party Set");
    }

    #[test]
    fn only_prefix_tokens_falls_back_to_full_name() {
        assert_eq!(display_name("TERRACOTTA ART"), "Terracotta Art");
    }

    #[test]
    fn empty_input_yields_empty_name() {
        assert_eq!(display_name("   "), "");
    }

    #[test]
    fn dedup_key_matches_existing_display_name() {
        assert_eq!(
            dedup_key("DOKRA OWL DECORATIVE HOME DECOR"),
            dedup_key("Owl Decorative Home Decor")
        );
        assert_eq!(dedup_key("Owl Decorative Home Decor"), "owl decorative home decor");
    }
}
