use fill_map::{EngineOptions, MappingEngine};
use fill_model::{DataBag, FieldType, FormField, MatchKind};

use proptest::prelude::*;

fn field(name: &str) -> FormField {
    FormField::new(name, FieldType::Text, false)
}

fn bag(entries: &[(&str, &str)]) -> DataBag {
    DataBag::from_entries(
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
    )
}

#[test]
fn exact_normalized_match_wins_outright() {
    let engine = MappingEngine::default();
    let fields = vec![field("email")];
    let data = bag(&[("Email", "a@x.com"), ("contact_email", "b@x.com")]);

    let mappings = engine.generate(&fields, &data);
    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].document_field.as_deref(), Some("Email"));
    assert_eq!(mappings[0].confidence, 1.0);
    assert_eq!(mappings[0].match_kind, Some(MatchKind::Exact));
}

#[test]
fn naming_convention_variants_match_exactly() {
    let engine = MappingEngine::default();
    let fields = vec![field("firstName")];
    let data = bag(&[("first_name", "John")]);

    let mappings = engine.generate(&fields, &data);
    assert_eq!(mappings[0].document_field.as_deref(), Some("first_name"));
    assert_eq!(mappings[0].match_kind, Some(MatchKind::Exact));
}

#[test]
fn no_candidate_above_threshold_leaves_field_unmatched() {
    let engine = MappingEngine::default();
    let fields = vec![field("xyz123")];
    let data = bag(&[("firstName", "John")]);

    let mappings = engine.generate(&fields, &data);
    assert_eq!(mappings.len(), 1);
    assert!(mappings[0].document_field.is_none());
    assert_eq!(mappings[0].confidence, 0.0);
    assert!(mappings[0].match_kind.is_none());
    assert!(!mappings[0].manual_override);
}

#[test]
fn one_entry_per_field_in_schema_order() {
    let engine = MappingEngine::default();
    let fields = vec![field("lastName"), field("email"), field("zzxq77")];
    let data = bag(&[("email", "a@x.com"), ("last_name", "Doe")]);

    let mappings = engine.generate(&fields, &data);
    let names: Vec<&str> = mappings.iter().map(|m| m.form_field.as_str()).collect();
    assert_eq!(names, vec!["lastName", "email", "zzxq77"]);
    assert_eq!(mappings[0].document_field.as_deref(), Some("last_name"));
    assert_eq!(mappings[1].document_field.as_deref(), Some("email"));
    assert!(mappings[2].document_field.is_none());
}

#[test]
fn ties_go_to_the_earlier_bag_key() {
    let engine = MappingEngine::default();
    let fields = vec![field("amount")];
    // Symmetric candidates: identical scores either way
    let data = bag(&[("amount_x", "10"), ("amount_y", "20")]);

    let mappings = engine.generate(&fields, &data);
    assert_eq!(mappings[0].document_field.as_deref(), Some("amount_x"));

    // Reversing insertion order flips the winner
    let data = bag(&[("amount_y", "20"), ("amount_x", "10")]);
    let mappings = engine.generate(&fields, &data);
    assert_eq!(mappings[0].document_field.as_deref(), Some("amount_y"));
}

#[test]
fn synonym_rules_map_dissimilar_names() {
    let engine = MappingEngine::default();
    let fields = vec![field("homePhone")];
    let data = bag(&[("mobile_number", "555-0100")]);

    let mappings = engine.generate(&fields, &data);
    assert_eq!(mappings[0].document_field.as_deref(), Some("mobile_number"));
    assert_eq!(mappings[0].match_kind, Some(MatchKind::Pattern));
}

#[test]
fn empty_inputs_are_valid() {
    let engine = MappingEngine::default();

    let mappings = engine.generate(&[], &bag(&[("a", "1")]));
    assert!(mappings.is_empty());

    let fields = vec![field("email"), field("phone")];
    let mappings = engine.generate(&fields, &DataBag::new());
    assert_eq!(mappings.len(), 2);
    assert!(mappings.iter().all(|m| m.document_field.is_none()));
}

#[test]
fn threshold_is_configurable() {
    let fields = vec![field("email")];
    let data = bag(&[("contact_email", "a@x.com")]);

    // Default threshold accepts the containment match
    let mappings = MappingEngine::default().generate(&fields, &data);
    assert!(mappings[0].document_field.is_some());

    // A strict enough threshold rejects it
    let strict = MappingEngine::new(EngineOptions {
        min_confidence: 0.99,
    });
    let mappings = strict.generate(&fields, &data);
    assert!(mappings[0].document_field.is_none());
}

#[test]
fn generate_set_collects_unmatched_fields() {
    let engine = MappingEngine::default();
    let fields = vec![field("email"), field("qq_zz_77")];
    let data = bag(&[("email", "a@x.com")]);

    let set = engine.generate_set("w4", &fields, &data);
    assert_eq!(set.template_id, "w4");
    assert_eq!(set.matched_count(), 1);
    assert_eq!(set.unmatched_fields, vec!["qq_zz_77".to_string()]);
}

proptest! {
    /// Two runs over identical inputs propose identical assignments.
    #[test]
    fn generation_is_deterministic(
        names in prop::collection::vec("[A-Za-z][A-Za-z0-9_ ]{0,14}", 0..8),
        keys in prop::collection::vec("[A-Za-z][A-Za-z0-9_ ]{0,14}", 0..8),
    ) {
        let fields: Vec<FormField> = names.iter().map(|n| field(n)).collect();
        let data = DataBag::from_entries(
            keys.iter().map(|k| (k.clone(), "value".to_string())).collect(),
        );
        let engine = MappingEngine::default();

        let first = engine.generate(&fields, &data);
        let second = engine.generate(&fields, &data);
        prop_assert_eq!(first, second);
    }

    /// The engine is total: every input yields one entry per field and
    /// never panics.
    #[test]
    fn generation_is_total(
        names in prop::collection::vec(".{0,20}", 0..6),
        keys in prop::collection::vec(".{0,20}", 0..6),
    ) {
        let fields: Vec<FormField> = names.iter().map(|n| field(n)).collect();
        let data = DataBag::from_entries(
            keys.iter().map(|k| (k.clone(), "v".to_string())).collect(),
        );

        let mappings = MappingEngine::default().generate(&fields, &data);
        prop_assert_eq!(mappings.len(), fields.len());
        for (mapping, form_field) in mappings.iter().zip(&fields) {
            prop_assert_eq!(&mapping.form_field, &form_field.name);
            prop_assert!(!mapping.manual_override);
        }
    }
}
