use sowdoc::domain::{SourceDocument, SourceFormat, extension_of};

#[test]
fn given_uppercase_extension_when_detecting_format_then_matches_case_insensitively() {
    assert_eq!(SourceFormat::from_filename("SOW.PDF"), Some(SourceFormat::Pdf));
    assert_eq!(SourceFormat::from_filename("sow.Docx"), Some(SourceFormat::Docx));
    assert_eq!(SourceFormat::from_filename("notes.txt"), Some(SourceFormat::Text));
}

#[test]
fn given_disallowed_extension_when_detecting_format_then_returns_none() {
    assert_eq!(SourceFormat::from_filename("setup.exe"), None);
    assert_eq!(SourceFormat::from_filename("README"), None);
}

#[test]
fn given_filename_without_dot_when_taking_extension_then_returns_empty() {
    assert_eq!(extension_of("README"), "");
    assert_eq!(extension_of(".bashrc"), "");
    assert_eq!(extension_of("archive.tar.GZ"), ".gz");
}

#[test]
fn given_source_document_when_staging_then_name_is_uuid_with_extension() {
    let document = SourceDocument::new("My SOW.pdf".to_string(), SourceFormat::Pdf, 42);
    let staged = document.staged_name();

    assert_eq!(staged, format!("{}.pdf", document.id.as_uuid()));
    assert!(!staged.contains(' '));
}
