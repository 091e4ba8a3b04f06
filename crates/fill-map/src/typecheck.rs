//! Value format checks against declared field types.
//!
//! Used to warn when a mapped value looks wrong for the slot it is about
//! to fill (a phone number in a date field, say). Checks are advisory:
//! nothing here blocks a fill.

use std::sync::LazyLock;

use regex::Regex;

use fill_model::FieldType;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex compiles")
});

static DATE_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}$",
        r"^\d{4}[/\-.]\d{1,2}[/\-.]\d{1,2}$",
        r"^(?i)\d{1,2}\s+(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4}$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("date regex compiles"))
    .collect()
});

static CURRENCY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$?[\d,]+\.?\d{0,2}$").expect("currency regex compiles"));

/// Whether a value plausibly fits the declared field type.
///
/// `Text`, `Checkbox` and `Unknown` accept anything; the format-bearing
/// types apply the checks below. Empty values always pass (absence is a
/// validation concern, not a format one).
pub fn value_matches_type(field_type: FieldType, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return true;
    }
    match field_type {
        FieldType::Email => EMAIL_REGEX.is_match(value),
        FieldType::Phone => is_plausible_phone(value),
        FieldType::Date => DATE_REGEXES.iter().any(|re| re.is_match(value)),
        FieldType::Number => value.replace(',', "").parse::<f64>().is_ok(),
        FieldType::Currency => CURRENCY_REGEX.is_match(&value.replace(' ', "")),
        FieldType::Text | FieldType::Checkbox | FieldType::Unknown => true,
    }
}

/// US and international numbers land on 10-12 digits once punctuation is
/// stripped.
fn is_plausible_phone(value: &str) -> bool {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    (10..=12).contains(&digits)
}

/// Infers a field type from the field's name.
///
/// Fallback for schemas that report `Unknown`: keyword heuristics over
/// the name, defaulting to `Text`.
pub fn infer_field_type(name: &str) -> FieldType {
    let name = name.to_lowercase();
    let contains_any = |terms: &[&str]| terms.iter().any(|term| name.contains(term));

    if contains_any(&["email", "e-mail", "e_mail"]) {
        FieldType::Email
    } else if contains_any(&["phone", "mobile", "cell", "tel"]) {
        FieldType::Phone
    } else if contains_any(&["date", "birth", "dob"]) {
        FieldType::Date
    } else if contains_any(&["amount", "price", "salary", "income", "total"]) {
        FieldType::Currency
    } else if contains_any(&["count", "quantity", "qty", "age"]) {
        FieldType::Number
    } else {
        FieldType::Text
    }
}
