use sowdoc::domain::{DocumentType, GenerationId, OutputFilename, safe_name};

#[test]
fn given_project_name_with_spaces_when_building_download_name_then_replaces_unsafe_chars() {
    let name = OutputFilename::download_name("Acme Migration (Phase 1)", DocumentType::Hld, "1.0");
    assert_eq!(name, "Acme_Migration__Phase_1__HLD_v1.0.docx");
}

#[test]
fn given_generation_id_when_building_output_name_then_prefixes_uuid() {
    let id = GenerationId::new();
    let output = OutputFilename::new(&id, "Acme", DocumentType::Lld, "2.1");
    assert_eq!(
        output.as_str(),
        format!("{}_Acme_LLD_v2.1.docx", id.as_uuid())
    );
}

#[test]
fn given_traversal_sequences_when_parsing_then_rejects() {
    for raw in ["../secret.docx", "a/b.docx", "a\\b.docx", "..", ""] {
        assert!(OutputFilename::parse(raw).is_err(), "accepted {raw:?}");
    }
}

#[test]
fn given_plain_name_when_parsing_then_accepts() {
    let parsed = OutputFilename::parse("abc_Acme_HLD_v1.0.docx").unwrap();
    assert_eq!(parsed.to_string(), "abc_Acme_HLD_v1.0.docx");
}

#[test]
fn given_allowed_punctuation_when_sanitizing_then_keeps_dash_and_underscore() {
    assert_eq!(safe_name("a-b_c.d é"), "a-b_c_d__");
}
