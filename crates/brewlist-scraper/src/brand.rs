//! Best-effort brand extraction from product display names.
//!
//! The search endpoint carries no structured brand field, so the brand is
//! guessed from the name: strip the generic category prefix, drop common
//! descriptive words, and take the first token that looks like a brand
//! (capitalized Latin or Cyrillic word, or an all-caps code). This is a
//! heuristic, not a parser; only the documented behaviors are guaranteed.

use regex::Regex;

/// Descriptive words that never name a brand: preparation methods, origins,
/// packaging and unit words. Compared case-insensitively.
const STOPLIST: &[&str] = &[
    "растворимый",
    "молотый",
    "зерновой",
    "натуральный",
    "жареный",
    "сублимированный",
    "в",
    "капсулах",
    "дрип",
    "дрип-пакетах",
    "смесь",
    "для",
    "кофемашин",
    "эспрессо",
    "арабика",
    "робуста",
    "вес",
    "г",
    "кг",
    "мл",
];

/// Extracts a brand-like token from a product name.
///
/// Returns the first non-stoplisted token that starts with an uppercase
/// Latin or Cyrillic letter (followed by word characters or hyphens) or is
/// entirely uppercase-alphanumeric of length ≥ 2. Falls back to the first
/// non-stoplisted token of any casing, then to an empty string.
#[must_use]
pub fn extract_brand_from_name(name: &str) -> String {
    let category_prefix = Regex::new(r"(?i)^(кофе|кофейный\s+напиток|кофейные\s+напитки)\s+")
        .expect("valid regex");
    let token_splitter = Regex::new(r"[\s,]+").expect("valid regex");
    let latin_capitalized = Regex::new(r"^[A-Z][A-Za-z0-9\-]+$").expect("valid regex");
    let cyrillic_capitalized = Regex::new(r"^[А-ЯЁ][А-Яа-яЁё0-9\-]+$").expect("valid regex");
    let all_caps = Regex::new(r"^[A-Z0-9\-]{2,}$").expect("valid regex");

    let stripped = category_prefix.replace(name.trim(), "");

    let tokens: Vec<String> = token_splitter
        .split(&stripped)
        .map(clean_token)
        .filter(|token| !token.is_empty() && !is_stoplisted(token))
        .collect();

    for token in &tokens {
        if latin_capitalized.is_match(token)
            || cyrillic_capitalized.is_match(token)
            || all_caps.is_match(token)
        {
            return token.clone();
        }
    }

    tokens.first().cloned().unwrap_or_default()
}

/// Strips surrounding brackets/quotes and decorative guillemets.
fn clean_token(token: &str) -> String {
    token
        .trim()
        .trim_matches(|c: char| "()[]{}\"'".contains(c))
        .replace(['«', '»'], "")
}

fn is_stoplisted(token: &str) -> bool {
    let lower = token.to_lowercase();
    STOPLIST.iter().any(|word| *word == lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_brand_after_category_prefix() {
        assert_eq!(extract_brand_from_name("Кофе Jardin растворимый 95г"), "Jardin");
    }

    #[test]
    fn cyrillic_brand_is_recognized() {
        assert_eq!(extract_brand_from_name("Кофе Жокей молотый 250г"), "Жокей");
    }

    #[test]
    fn all_caps_brand_is_recognized() {
        assert_eq!(extract_brand_from_name("Кофе LEBO зерновой 1кг"), "LEBO");
    }

    #[test]
    fn beverage_prefix_is_stripped() {
        assert_eq!(
            extract_brand_from_name("Кофейный напиток MacCoffee растворимый"),
            "MacCoffee"
        );
    }

    #[test]
    fn plural_beverage_prefix_is_stripped() {
        assert_eq!(
            extract_brand_from_name("Кофейные напитки Nescafe смесь"),
            "Nescafe"
        );
    }

    #[test]
    fn prefix_strip_is_case_insensitive() {
        assert_eq!(extract_brand_from_name("КОФЕ Jacobs сублимированный"), "Jacobs");
    }

    #[test]
    fn guillemets_are_removed_from_tokens() {
        assert_eq!(extract_brand_from_name("Кофе «Черная карта» молотый"), "Черная");
    }

    #[test]
    fn brackets_are_stripped_from_tokens() {
        assert_eq!(extract_brand_from_name("Кофе (Egoiste) зерновой"), "Egoiste");
    }

    #[test]
    fn stoplisted_tokens_are_skipped() {
        assert_eq!(
            extract_brand_from_name("Кофе молотый для кофемашин Paulig"),
            "Paulig"
        );
    }

    #[test]
    fn falls_back_to_first_lowercase_token() {
        // No capitalized or all-caps token survives, so the first
        // non-stoplisted token wins regardless of casing.
        assert_eq!(extract_brand_from_name("некофейный продукт"), "некофейный");
    }

    #[test]
    fn empty_name_yields_empty_brand() {
        assert_eq!(extract_brand_from_name(""), "");
    }

    #[test]
    fn name_of_only_stoplisted_tokens_yields_empty_brand() {
        assert_eq!(extract_brand_from_name("Кофе молотый в капсулах"), "");
    }

    #[test]
    fn commas_split_tokens() {
        assert_eq!(extract_brand_from_name("Кофе,Tchibo,молотый"), "Tchibo");
    }

    #[test]
    fn hyphenated_brand_is_kept_whole() {
        assert_eq!(extract_brand_from_name("Кофе Coffee-Like зерновой"), "Coffee-Like");
    }
}
