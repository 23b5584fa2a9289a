//! End-to-end tests across the delimited and JSON representations

use pretty_assertions::assert_eq;

use csvconv::conversion::{ConversionConfig, ConversionEngine};
use csvconv::record::{Document, Record, Scalar, ScalarKind};
use csvconv::{csv_to_json, from_csv, json_to_csv, to_csv};

fn person_document() -> Document {
    let mut max = Record::new();
    max.insert("Vorname", "Max");
    max.insert("Nachname", "Mustermann");
    max.insert("Alter", 30);
    max.insert("Email", "max@example.com");

    let mut anna = Record::new();
    anna.insert("Vorname", "Anna");
    anna.insert("Nachname", "Schmidt");
    anna.insert("Alter", 25);
    anna.insert("Email", "anna@example.com");

    vec![max, anna]
}

#[test]
fn test_reference_scenario() {
    let expected = "Vorname;Nachname;Alter;Email\n\
                    Max;Mustermann;30;max@example.com\n\
                    Anna;Schmidt;25;anna@example.com";
    assert_eq!(to_csv(&person_document(), ';'), expected);
}

#[test]
fn test_tabular_round_trip_preserves_values_and_kinds() {
    let mut record = Record::new();
    record.insert("name", "Max");
    record.insert("age", 30);
    record.insert("score", 123.45);
    record.insert("ratio", 1500.0);
    record.insert("active", true);
    record.insert("note", Scalar::Null);

    let doc = vec![record];
    let text = to_csv(&doc, ';');
    let back = from_csv(&text, ';');

    assert_eq!(back, doc);
    let kinds: Vec<ScalarKind> = back[0].iter().map(|(_, v)| v.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ScalarKind::String,
            ScalarKind::Int,
            ScalarKind::Float,
            ScalarKind::Float,
            ScalarKind::Bool,
            ScalarKind::Null,
        ]
    );
}

#[test]
fn test_round_trip_keeps_field_order() {
    let text = "z;m;a\n1;2;3";
    let doc = from_csv(text, ';');
    let names: Vec<&str> = doc[0].field_names().collect();
    assert_eq!(names, vec!["z", "m", "a"]);
    assert_eq!(to_csv(&doc, ';'), text);
}

#[test]
fn test_empty_input_idempotence() {
    assert_eq!(to_csv(&Document::new(), ';'), "");
    assert!(from_csv("", ';').is_empty());
    assert!(from_csv(" \n\t ", ';').is_empty());
    assert!(from_csv("Vorname;Nachname;Alter;Email", ';').is_empty());
}

#[test]
fn test_type_inference_determinism() {
    let doc = from_csv("v\n123\n123.45\ntrue\nfalse\n19,99\n1.5E+3", ';');
    let values: Vec<&Scalar> = doc.iter().map(|r| r.get("v").unwrap()).collect();
    assert_eq!(values[0], &Scalar::Int(123));
    assert_eq!(values[1], &Scalar::Float(123.45));
    assert_eq!(values[2], &Scalar::Bool(true));
    assert_eq!(values[3], &Scalar::Bool(false));
    assert_eq!(values[4], &Scalar::String("19,99".into()));
    assert_eq!(values[5], &Scalar::Float(1500.0));
}

#[test]
fn test_column_absence_vs_empty_cell() {
    let doc = from_csv("Name;Age;Email\nMax;30;\nAnna", ';');

    // trailing empty cell: present, explicit null
    assert_eq!(doc[0].len(), 3);
    assert_eq!(doc[0].get("Email"), Some(&Scalar::Null));

    // short row: trailing fields absent entirely
    assert_eq!(doc[1].len(), 1);
    assert_eq!(doc[1].get("Age"), None);
    assert_eq!(doc[1].get("Email"), None);
}

#[test]
fn test_delimiter_variants() {
    for delimiter in [';', ',', '\t', '|'] {
        let text = to_csv(&person_document(), delimiter);
        let header: Vec<&str> = text.lines().next().unwrap().split(delimiter).collect();
        assert_eq!(header.len(), 4);
        let back = from_csv(&text, delimiter);
        assert_eq!(back, person_document());
    }
}

#[test]
fn test_json_to_csv_scenario() {
    let json = r#"[
        {"Vorname":"Max","Nachname":"Mustermann","Alter":30,"Email":"max@example.com"},
        {"Vorname":"Anna","Nachname":"Schmidt","Alter":25,"Email":"anna@example.com"}
    ]"#;
    let csv = json_to_csv(json, ';').unwrap();
    assert_eq!(
        csv,
        "Vorname;Nachname;Alter;Email\n\
         Max;Mustermann;30;max@example.com\n\
         Anna;Schmidt;25;anna@example.com"
    );
}

#[test]
fn test_json_empty_and_non_array_roots() {
    assert_eq!(json_to_csv("", ';').unwrap(), "");
    assert_eq!(json_to_csv("[]", ';').unwrap(), "");
    assert_eq!(json_to_csv(r#"{"root":"object"}"#, ';').unwrap(), "");
}

#[test]
fn test_csv_to_json_of_empty_is_empty_array() {
    assert_eq!(csv_to_json("", ';').unwrap(), "[]");
    assert_eq!(csv_to_json("Name;Alter", ';').unwrap(), "[]");
}

#[test]
fn test_csv_to_json_infers_types() {
    let json = csv_to_json("Name;Alter;Aktiv;Quote;Notiz\nMax;30;true;19.99;", ';').unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = &parsed[0];
    assert_eq!(first["Name"], serde_json::json!("Max"));
    assert_eq!(first["Alter"], serde_json::json!(30));
    assert_eq!(first["Aktiv"], serde_json::json!(true));
    assert_eq!(first["Quote"], serde_json::json!(19.99));
    assert_eq!(first["Notiz"], serde_json::json!(null));
}

#[test]
fn test_json_round_trip_through_csv() {
    let json = r#"[{"Name":"Max","Alter":30,"Aktiv":true},{"Name":"Anna","Alter":25,"Aktiv":false}]"#;
    let csv = json_to_csv(json, ';').unwrap();
    let restored = csv_to_json(&csv, ';').unwrap();

    let original: serde_json::Value = serde_json::from_str(json).unwrap();
    let round_tripped: serde_json::Value = serde_json::from_str(&restored).unwrap();
    assert_eq!(round_tripped, original);
}

#[test]
fn test_missing_fields_of_later_records_render_empty() {
    let json = r#"[{"Name":"Max","Alter":30},{"Name":"Anna"}]"#;
    let csv = json_to_csv(json, ';').unwrap();
    assert_eq!(csv, "Name;Alter\nMax;30\nAnna;");
}

#[test]
fn test_engine_reports_stats() {
    let engine = ConversionEngine::new(ConversionConfig::default());
    let result = engine.csv_to_json("Name;Alter\nMax;30\nAnna;25").unwrap();
    assert_eq!(result.stats.record_count, 2);
    assert_eq!(result.stats.field_count, 2);
    assert!(result.stats.output_size_bytes > 0);
    assert!(result.stats.summary().contains("2 records"));
}
