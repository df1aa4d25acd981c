use chrono::NaiveDate;

use sowdoc::domain::{DocumentType, Platform, ProjectDetails, RenderContext, SowAnalysis};

fn analysis_named(project: &str, client: &str) -> SowAnalysis {
    SowAnalysis {
        project_name: project.to_string(),
        client_name: client.to_string(),
        ..SowAnalysis::default()
    }
}

fn merge(analysis: SowAnalysis, project: ProjectDetails) -> RenderContext {
    RenderContext::merge(
        analysis,
        project,
        None,
        Platform::Aws,
        DocumentType::Hld,
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
    )
}

#[test]
fn given_user_and_ai_names_when_merging_then_user_names_win() {
    let ctx = merge(
        analysis_named("AI Project", "AI Client"),
        ProjectDetails::new("User Project", "User Client", "Jane"),
    );

    assert_eq!(ctx.project_name, "User Project");
    assert_eq!(ctx.client_name, "User Client");
}

#[test]
fn given_blank_user_names_when_merging_then_falls_back_to_analysis() {
    let ctx = merge(
        analysis_named("AI Project", "AI Client"),
        ProjectDetails::new("", " ", "Jane"),
    );

    assert_eq!(ctx.project_name, "AI Project");
    assert_eq!(ctx.client_name, "AI Client");
}

#[test]
fn given_no_names_anywhere_when_merging_then_uses_placeholders() {
    let ctx = merge(SowAnalysis::default(), ProjectDetails::default());

    assert_eq!(ctx.project_name, "Untitled Project");
    assert_eq!(ctx.client_name, "Client");
}

#[test]
fn given_generation_date_when_formatting_then_uses_long_month() {
    let ctx = merge(SowAnalysis::default(), ProjectDetails::default());
    assert_eq!(ctx.formatted_date(), "March 5, 2025");
}

#[test]
fn given_whitespace_additional_info_when_checking_then_reports_none() {
    let ctx = RenderContext::merge(
        SowAnalysis::default(),
        ProjectDetails::default(),
        Some("   ".to_string()),
        Platform::Azure,
        DocumentType::Lld,
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    );
    assert!(!ctx.has_additional_info());
}
