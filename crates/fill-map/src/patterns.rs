//! Synonym pattern rules for field names that similarity alone misses.
//!
//! Each normalized name is classified by the first group regex it hits;
//! two names match when they classify into the same group, e.g.
//! `homePhone` and `mobile_number` both land in the phone group even
//! though they share few characters. Group order matters: a name
//! containing `email` is an email field even when it also says `address`.

use std::sync::LazyLock;

use regex::Regex;

static SYNONYM_GROUPS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(first|given).*name",
        r"(last|family|sur).*name",
        r"(full|complete).*name",
        r"e.?mail",
        r"(phone|mobile|cell|tele)",
        r"(birth|dob)",
        r"(zip|postal)",
        r"(street|address|addr)",
        r"(city|town)",
        r"(salary|income|wage)",
        r"(amount|total)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("synonym pattern compiles"))
    .collect()
});

fn classify(name_norm: &str) -> Option<usize> {
    SYNONYM_GROUPS
        .iter()
        .position(|group| group.is_match(name_norm))
}

/// True when both normalized names classify into the same synonym group.
pub(crate) fn same_synonym_group(field_norm: &str, key_norm: &str) -> bool {
    match (classify(field_norm), classify(key_norm)) {
        (Some(field_group), Some(key_group)) => field_group == key_group,
        _ => false,
    }
}
