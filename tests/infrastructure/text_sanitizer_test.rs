use sowdoc::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_hyphenated_line_break_when_sanitizing_then_rejoins_word() {
    assert_eq!(sanitize_extracted_text("infra-\nstructure"), "infrastructure");
}

#[test]
fn given_runs_of_spaces_and_tabs_when_sanitizing_then_collapses_them() {
    assert_eq!(sanitize_extracted_text("  VPC \t  peering  "), "VPC peering");
}

#[test]
fn given_many_blank_lines_when_sanitizing_then_keeps_single_separator() {
    assert_eq!(
        sanitize_extracted_text("Scope\n\n\n\n   \nRequirements\nLine two"),
        "Scope\n\nRequirements\nLine two"
    );
}

#[test]
fn given_control_characters_and_ligatures_when_sanitizing_then_normalizes() {
    assert_eq!(sanitize_extracted_text("con\u{0007}ﬁg"), "config");
}

#[test]
fn given_whitespace_only_when_sanitizing_then_returns_empty() {
    assert_eq!(sanitize_extracted_text(" \n\t\n "), "");
}
