//! Pair scoring for field-name-to-data-key matching.
//!
//! Jaro-Winkler similarity on normalized names is the base metric; a
//! substring containment bonus and a token-overlap (Jaccard) score cover
//! names the character metric underrates, and synonym pattern rules
//! rescue pairs like `homePhone`/`mobile_number` that share almost no
//! text at all. The final score is the maximum of the components, so each
//! one can only raise a candidate, never drown another out.

use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;

use fill_model::MatchKind;

use crate::patterns::same_synonym_group;
use crate::utils::{normalize_compact, normalize_text, token_set};

/// Score for one pattern-rule hit.
const PATTERN_RULE_SCORE: f64 = 0.9;
/// Score when one compact name contains the other.
const SUBSTRING_SCORE: f64 = 0.7;
/// Scale applied to the token Jaccard index.
const TOKEN_OVERLAP_SCALE: f64 = 0.8;
/// Containment below this length says nothing about relatedness.
const MIN_SUBSTRING_LEN: usize = 3;

/// A scored field/key candidate pair.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PairScore {
    pub value: f64,
    pub kind: MatchKind,
}

/// Scores a form field name against a data-bag key. Total over any pair of
/// strings; returns 0.0 when nothing relates them.
pub(crate) fn score_pair(field_name: &str, key: &str) -> PairScore {
    let field_norm = normalize_text(field_name);
    let key_norm = normalize_text(key);

    let mut value = jaro_similarity(field_norm.chars(), key_norm.chars());
    value = value.max(substring_score(field_name, key));
    value = value.max(token_overlap_score(field_name, key));
    let mut kind = MatchKind::Fuzzy;

    if same_synonym_group(&field_norm, &key_norm) && PATTERN_RULE_SCORE > value {
        value = PATTERN_RULE_SCORE;
        kind = MatchKind::Pattern;
    }

    PairScore { value, kind }
}

fn substring_score(field_name: &str, key: &str) -> f64 {
    let field_compact = normalize_compact(field_name);
    let key_compact = normalize_compact(key);
    if field_compact.len() < MIN_SUBSTRING_LEN || key_compact.len() < MIN_SUBSTRING_LEN {
        return 0.0;
    }
    if field_compact.contains(&key_compact) || key_compact.contains(&field_compact) {
        SUBSTRING_SCORE
    } else {
        0.0
    }
}

fn token_overlap_score(field_name: &str, key: &str) -> f64 {
    let field_tokens = token_set(field_name);
    let key_tokens = token_set(key);
    let union = field_tokens.union(&key_tokens).count();
    if union == 0 {
        return 0.0;
    }
    let overlap = field_tokens.intersection(&key_tokens).count();
    (overlap as f64 / union as f64) * TOKEN_OVERLAP_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_names_score_at_the_top() {
        let scored = score_pair("email", "email");
        assert!(scored.value > 0.99, "got {}", scored.value);
    }

    #[test]
    fn naming_convention_variants_score_high() {
        let scored = score_pair("firstName", "first_name");
        assert!(scored.value > 0.85, "got {}", scored.value);
    }

    #[test]
    fn containment_earns_the_substring_floor() {
        let scored = score_pair("email", "emailAddress");
        assert!(scored.value >= SUBSTRING_SCORE, "got {}", scored.value);
    }

    #[test]
    fn synonym_rules_rescue_dissimilar_names() {
        let scored = score_pair("homePhone", "mobile_number");
        assert!(scored.value >= PATTERN_RULE_SCORE, "got {}", scored.value);
        assert_eq!(scored.kind, MatchKind::Pattern);
    }

    #[test]
    fn unrelated_names_stay_low() {
        let scored = score_pair("xyz123", "firstName");
        assert!(scored.value < 0.5, "got {}", scored.value);
    }

    #[test]
    fn token_overlap_is_symmetric() {
        let a = token_overlap_score("date_of_birth", "birthDate");
        let b = token_overlap_score("birthDate", "date_of_birth");
        assert_eq!(a, b);
        assert!(a > 0.0);
    }
}
