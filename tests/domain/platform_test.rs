use sowdoc::domain::{DocumentType, Platform};

#[test]
fn given_lowercase_names_when_parsing_then_returns_platform() {
    assert_eq!("aws".parse::<Platform>().unwrap(), Platform::Aws);
    assert_eq!("azure".parse::<Platform>().unwrap(), Platform::Azure);
}

#[test]
fn given_unknown_platform_when_parsing_then_error_names_choices() {
    let err = "gcp".parse::<Platform>().unwrap_err();
    assert_eq!(err.to_string(), "Invalid platform. Must be \"aws\" or \"azure\"");
}

#[test]
fn given_platform_when_picking_then_returns_matching_variant() {
    assert_eq!(Platform::Aws.pick("vpc", "vnet"), "vpc");
    assert_eq!(Platform::Azure.pick("vpc", "vnet"), "vnet");
    assert_eq!(Platform::Azure.accent_color(), "0078D4");
}

#[test]
fn given_document_type_when_parsing_then_exposes_names() {
    let lld: DocumentType = "lld".parse().unwrap();
    assert_eq!(lld.abbreviation(), "LLD");
    assert_eq!(lld.full_name(), "Low-Level Design");
    assert!("HLD".parse::<DocumentType>().is_err());
}
