use sowdoc::application::services::fallback_analysis;
use sowdoc::domain::ProjectDetails;

const SOW: &str = "Statement of Work\n\
In scope: Landing zone build\n\
Out of scope: Application refactoring\n\
Requirement: 99.9% availability\n\
The vendor shall provide 24/7 support\n\
Assumption: Customer provides VPN endpoints\n";

#[test]
fn given_keyword_lines_when_analyzing_then_extracts_them() {
    let analysis = fallback_analysis(SOW, &ProjectDetails::new("Acme", "Acme Corp", "Jane"));

    assert_eq!(analysis.scope.in_scope, ["Landing zone build"]);
    assert_eq!(analysis.scope.out_of_scope, ["Application refactoring"]);
    assert_eq!(
        analysis.requirements,
        ["99.9% availability", "provide 24/7 support"]
    );
    assert_eq!(analysis.assumptions, ["Customer provides VPN endpoints"]);
    assert_eq!(analysis.raw_text, SOW);
}

#[test]
fn given_user_project_details_when_analyzing_then_copies_names() {
    let analysis = fallback_analysis("", &ProjectDetails::new("Acme", "Acme Corp", "Jane"));

    assert_eq!(analysis.project_name, "Acme");
    assert_eq!(analysis.client_name, "Acme Corp");
    assert_eq!(
        analysis.solution_strategy.migration_approach,
        "To be determined"
    );
    assert!(!analysis.executive_summary.overview.is_empty());
}

#[test]
fn given_blank_project_details_when_analyzing_then_uses_placeholders() {
    let analysis = fallback_analysis("nothing relevant", &ProjectDetails::default());

    assert_eq!(analysis.project_name, "Untitled Project");
    assert_eq!(analysis.client_name, "Client");
    assert!(analysis.requirements.is_empty());
    assert!(analysis.servers.is_empty());
}
