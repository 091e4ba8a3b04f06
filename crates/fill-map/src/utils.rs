//! Name normalization and tokenization for mapping comparisons.

use std::collections::BTreeSet;

/// Normalizes a name for similarity comparison: trims, lowercases, and
/// collapses separators to single spaces.
pub fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes a name for exact-equality comparison: lowercases and strips
/// every non-alphanumeric character, so `firstName`, `first_name` and
/// `First Name` all compact to `firstname`.
pub fn normalize_compact(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Splits a name into comparison tokens.
///
/// Handles camelCase boundaries as well as separator characters, drops
/// digits-only tokens and stopwords, and folds common aliases onto one
/// canonical token so `mobile` and `telephone` both overlap with `phone`.
pub fn token_set(raw: &str) -> BTreeSet<String> {
    let mut spaced = String::new();
    let mut prev_lower = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if prev_lower && ch.is_ascii_uppercase() {
                spaced.push(' ');
            }
            spaced.push(ch);
            prev_lower = ch.is_ascii_lowercase();
        } else {
            spaced.push(' ');
            prev_lower = false;
        }
    }
    let mut tokens = BTreeSet::new();
    for raw_token in spaced.split_whitespace() {
        let token = raw_token.to_ascii_lowercase();
        if let Some(folded) = fold_token(&token) {
            tokens.insert(folded.to_string());
        }
    }
    tokens
}

fn fold_token(token: &str) -> Option<&str> {
    if token.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    if is_stopword(token) {
        return None;
    }
    let folded = match token {
        "mail" | "email" => "email",
        "tel" | "telephone" | "mobile" | "cell" | "phone" => "phone",
        "dob" | "birth" | "birthdate" | "birthday" => "birth",
        "zip" | "zipcode" | "postal" | "postcode" => "zip",
        "addr" | "address" => "address",
        "num" | "number" => "number",
        "nam" | "name" => "name",
        "dt" | "date" | "datetime" => "date",
        _ => token,
    };
    Some(folded)
}

fn is_stopword(token: &str) -> bool {
    matches!(
        token,
        "of" | "and"
            | "the"
            | "to"
            | "for"
            | "in"
            | "on"
            | "at"
            | "with"
            | "by"
            | "from"
            | "or"
            | "a"
            | "an"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_separators() {
        assert_eq!(normalize_text("  First_Name  "), "first name");
        assert_eq!(normalize_text("e-mail.address"), "e mail address");
    }

    #[test]
    fn compact_aligns_naming_conventions() {
        assert_eq!(normalize_compact("firstName"), "firstname");
        assert_eq!(normalize_compact("first_name"), "firstname");
        assert_eq!(normalize_compact("First Name"), "firstname");
    }

    #[test]
    fn tokens_split_camel_case_and_fold_aliases() {
        let tokens = token_set("mobileNumber");
        assert!(tokens.contains("phone"));
        assert!(tokens.contains("number"));

        let tokens = token_set("date_of_birth");
        assert!(tokens.contains("date"));
        assert!(tokens.contains("birth"));
        // stopword dropped
        assert!(!tokens.contains("of"));
    }

    #[test]
    fn digits_only_tokens_are_dropped() {
        let tokens = token_set("address_2");
        assert_eq!(tokens.len(), 1);
        assert!(tokens.contains("address"));
    }
}
