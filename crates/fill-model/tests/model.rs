use std::str::FromStr;

use fill_model::{
    DataBag, DocumentRecord, DocumentStatus, FieldMapping, FieldType, FormField, MappingSet,
    MatchKind,
};

#[test]
fn data_bag_preserves_insertion_order() {
    let mut bag = DataBag::new();
    bag.insert("zeta", "1");
    bag.insert("alpha", "2");
    bag.insert("mid", "3");

    let keys: Vec<&str> = bag.keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn data_bag_insert_replaces_value_in_place() {
    let mut bag = DataBag::new();
    bag.insert("email", "old@example.com");
    bag.insert("phone", "555-0100");
    bag.insert("email", "new@example.com");

    assert_eq!(bag.len(), 2);
    assert_eq!(bag.get("email"), Some("new@example.com"));
    let keys: Vec<&str> = bag.keys().collect();
    assert_eq!(keys, vec!["email", "phone"]);
}

#[test]
fn data_bag_round_trips_through_json_in_order() {
    let bag = DataBag::from_entries(vec![
        ("lastName".to_string(), "Doe".to_string()),
        ("firstName".to_string(), "John".to_string()),
        ("email".to_string(), "john@example.com".to_string()),
    ]);

    let json = serde_json::to_string(&bag).expect("serialize bag");
    // serde_json writes map entries in the order we emit them
    assert!(json.find("lastName").unwrap() < json.find("firstName").unwrap());
    assert!(json.find("firstName").unwrap() < json.find("email").unwrap());

    let round: DataBag = serde_json::from_str(&json).expect("deserialize bag");
    assert_eq!(round, bag);
    let keys: Vec<&str> = round.keys().collect();
    assert_eq!(keys, vec!["lastName", "firstName", "email"]);
}

#[test]
fn form_field_schema_defaults() {
    // A minimal schema entry carries just a name
    let field: FormField = serde_json::from_str(r#"{"name": "email"}"#).expect("parse field");
    assert_eq!(field.name, "email");
    assert_eq!(field.field_type, FieldType::Text);
    assert!(!field.required);

    let field: FormField =
        serde_json::from_str(r#"{"name": "ssn", "field_type": "number", "required": true}"#)
            .expect("parse field");
    assert_eq!(field.field_type, FieldType::Number);
    assert!(field.required);
}

#[test]
fn field_type_parses_and_displays() {
    assert_eq!(FieldType::from_str("Email").unwrap(), FieldType::Email);
    assert_eq!(FieldType::from_str(" date ").unwrap(), FieldType::Date);
    assert!(FieldType::from_str("blob").is_err());
    assert_eq!(FieldType::Currency.to_string(), "currency");
}

#[test]
fn document_status_parses_and_orders() {
    assert_eq!(
        DocumentStatus::from_str("Done").unwrap(),
        DocumentStatus::Done
    );
    assert!(DocumentStatus::from_str("sideways").is_err());
    // Lifecycle order backs sort-by-status
    assert!(DocumentStatus::Pending < DocumentStatus::Processing);
    assert!(DocumentStatus::Processing < DocumentStatus::Done);
    assert!(DocumentStatus::Done < DocumentStatus::Archived);
}

#[test]
fn mapping_set_round_trips_through_json() {
    let set = MappingSet::new(
        "i-9",
        vec![
            FieldMapping {
                form_field: "firstName".to_string(),
                document_field: Some("first_name".to_string()),
                confidence: 1.0,
                match_kind: Some(MatchKind::Exact),
                manual_override: false,
            },
            FieldMapping::manual("lastName", "surname"),
            FieldMapping::unmatched("alienNumber"),
        ],
    );

    let json = serde_json::to_string_pretty(&set).expect("serialize set");
    let round: MappingSet = serde_json::from_str(&json).expect("deserialize set");
    assert_eq!(round, set);
    assert_eq!(round.unmatched_fields, vec!["alienNumber".to_string()]);
}

#[test]
fn mapping_defaults_tolerate_sparse_json() {
    // Older persisted sets carry only the two reference columns
    let mapping: FieldMapping =
        serde_json::from_str(r#"{"form_field": "email", "document_field": "Email"}"#)
            .expect("parse mapping");
    assert_eq!(mapping.confidence, 0.0);
    assert!(mapping.match_kind.is_none());
    assert!(!mapping.manual_override);
}

#[test]
fn document_record_round_trips() {
    let record: DocumentRecord = serde_json::from_str(
        r#"{
            "id": "doc-1",
            "name": "W-2 2025.pdf",
            "status": "done",
            "created_at": "2026-01-15T10:30:00Z",
            "tags": ["tax", "2025"]
        }"#,
    )
    .expect("parse record");
    assert_eq!(record.status, DocumentStatus::Done);
    assert_eq!(record.tags.len(), 2);

    let json = serde_json::to_string(&record).expect("serialize record");
    let round: DocumentRecord = serde_json::from_str(&json).expect("round trip");
    assert_eq!(round, record);
}
