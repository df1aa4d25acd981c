use sowdoc::domain::ProjectDetails;

#[test]
fn given_camel_case_json_without_version_when_deserializing_then_defaults_version() {
    let details: ProjectDetails = serde_json::from_str(
        r#"{"projectName":"Acme","clientName":"Acme Corp","authorName":"Jane"}"#,
    )
    .unwrap();

    assert_eq!(details.project_name, "Acme");
    assert_eq!(details.version, "1.0");
    assert!(details.region().is_none());
    assert!(details.has_required_fields());
}

#[test]
fn given_blank_author_when_checking_required_fields_then_fails() {
    let details = ProjectDetails::new("Acme", "Acme Corp", "  ");
    assert!(!details.has_required_fields());
}

#[test]
fn given_empty_region_when_reading_then_treated_as_absent() {
    let details = ProjectDetails::new("Acme", "Acme Corp", "Jane").with_region("");
    assert!(details.region().is_none());
}

#[test]
fn given_null_version_when_deserializing_then_defaults_version() {
    let details: ProjectDetails = serde_json::from_str(
        r#"{"projectName":"Acme","clientName":"Acme Corp","authorName":"Jane","version":null}"#,
    )
    .unwrap();

    assert_eq!(details.version, "1.0");
}

#[test]
fn given_explicit_version_when_deserializing_then_keeps_it() {
    let details: ProjectDetails =
        serde_json::from_str(r#"{"projectName":"Acme","version":"2.1"}"#).unwrap();

    assert_eq!(details.version, "2.1");
}
