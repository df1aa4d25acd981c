use sowdoc::application::services::{
    assemble, assemble_hld, assemble_lld, component_description, project_short_name, usable_ips,
};
use sowdoc::domain::{DocumentBlock, DocumentType, HeadingLevel, Platform, Server, SowAnalysis};

use crate::support::context;

fn table_with_header<'a>(
    blocks: &'a [DocumentBlock],
    first_header: &str,
) -> Option<&'a Vec<Vec<String>>> {
    blocks.iter().find_map(|block| match block {
        DocumentBlock::Table { headers, rows, .. }
            if headers.first().map(String::as_str) == Some(first_header) =>
        {
            Some(rows)
        }
        _ => None,
    })
}

fn table_after_heading<'a>(blocks: &'a [DocumentBlock], heading: &str) -> &'a Vec<Vec<String>> {
    blocks
        .iter()
        .skip_while(|b| !matches!(b, DocumentBlock::Heading { text, .. } if text == heading))
        .find_map(|b| match b {
            DocumentBlock::Table { rows, .. } => Some(rows),
            _ => None,
        })
        .unwrap()
}

fn server(hostname: &str, environment: &str) -> Server {
    Server {
        hostname: hostname.to_string(),
        environment: environment.to_string(),
        ..Server::default()
    }
}

fn has_heading(blocks: &[DocumentBlock], wanted: &str) -> bool {
    blocks
        .iter()
        .any(|b| matches!(b, DocumentBlock::Heading { text, .. } if text == wanted))
}

#[test]
fn given_cidr_blocks_when_counting_usable_ips_then_subtracts_reserved_addresses() {
    assert_eq!(usable_ips("10.0.0.0/24"), "251");
    assert_eq!(usable_ips("10.0.0.0/16"), "65,531");
    assert_eq!(usable_ips("10.0.0.0/8"), "16,777,211");
    assert_eq!(usable_ips("10.0.0.1/32"), "0");
}

#[test]
fn given_annotated_cidr_when_counting_usable_ips_then_reads_leading_prefix_digits() {
    assert_eq!(usable_ips("10.0.0.0/16 (Production VPC)"), "65,531");
    assert_eq!(usable_ips("10.0.0.0/24 - App"), "251");
    assert_eq!(usable_ips("10.0.0.0/ 24"), "251");
}

#[test]
fn given_malformed_cidr_when_counting_usable_ips_then_returns_not_available() {
    assert_eq!(usable_ips("10.0.0.0"), "N/A");
    assert_eq!(usable_ips("10.0.0.0/33"), "N/A");
    assert_eq!(usable_ips("10.0.0.0/abc"), "N/A");
    assert_eq!(usable_ips("10.0.0.0/"), "N/A");
    assert_eq!(usable_ips("10.0.0.0/(24)"), "N/A");
}

#[test]
fn given_project_name_when_shortening_then_keeps_eight_lowercase_alphanumerics() {
    assert_eq!(project_short_name("Acme Migration"), "acmemigr");
    assert_eq!(project_short_name("X-1"), "x1");
    assert_eq!(project_short_name(""), "");
}

#[test]
fn given_unknown_component_when_describing_then_uses_generic_sentence() {
    assert_eq!(
        component_description("Bastion", Platform::Aws),
        "Bastion is deployed as part of the infrastructure solution to support the project requirements."
    );
    assert!(component_description("VPN", Platform::Azure).contains("Azure cloud environment"));
}

#[test]
fn given_same_context_when_assembling_twice_then_output_is_identical() {
    let ctx = context(SowAnalysis::default(), Platform::Aws, DocumentType::Hld);
    assert_eq!(assemble(&ctx), assemble(&ctx));
}

#[test]
fn given_document_type_when_assembling_then_dispatches_to_matching_outline() {
    let hld = context(SowAnalysis::default(), Platform::Azure, DocumentType::Hld);
    let lld = context(SowAnalysis::default(), Platform::Azure, DocumentType::Lld);

    assert_eq!(assemble(&hld), assemble_hld(&hld));
    assert_eq!(assemble(&lld), assemble_lld(&lld));
    assert_ne!(assemble(&hld), assemble(&lld));
}

#[test]
fn given_any_document_when_assembling_then_starts_with_table_of_contents() {
    let ctx = context(SowAnalysis::default(), Platform::Aws, DocumentType::Lld);
    let blocks = assemble(&ctx);

    assert_eq!(
        blocks[0],
        DocumentBlock::Heading {
            text: "Table of Contents".to_string(),
            level: HeadingLevel::H1,
        }
    );
    assert!(blocks.iter().any(|b| matches!(b, DocumentBlock::PageBreak)));
}

#[test]
fn given_analysis_requirements_when_assembling_hld_then_lists_numbered_rows() {
    let analysis = SowAnalysis {
        requirements: vec!["Encrypt data at rest".to_string(), "Daily backups".to_string()],
        ..SowAnalysis::default()
    };
    let blocks = assemble_hld(&context(analysis, Platform::Aws, DocumentType::Hld));

    let rows = table_with_header(&blocks, "Requirement ID").unwrap();
    assert_eq!(
        rows[0],
        ["REQ-001", "Infrastructure", "Encrypt data at rest", "Defined"]
    );
    assert_eq!(rows[1][0], "REQ-002");
}

#[test]
fn given_many_requirements_when_assembling_hld_then_caps_listed_rows() {
    let analysis = SowAnalysis {
        requirements: (1..=20).map(|i| format!("Requirement {i}")).collect(),
        ..SowAnalysis::default()
    };
    let blocks = assemble_hld(&context(analysis, Platform::Aws, DocumentType::Hld));

    assert_eq!(table_with_header(&blocks, "Requirement ID").unwrap().len(), 15);
}

#[test]
fn given_no_requirements_when_assembling_hld_then_renders_placeholder_instead_of_table() {
    let blocks = assemble_hld(&context(SowAnalysis::default(), Platform::Aws, DocumentType::Hld));

    assert!(table_with_header(&blocks, "Requirement ID").is_none());
    assert!(blocks.iter().any(|b| matches!(
        b,
        DocumentBlock::Paragraph { text, .. }
            if text == "Requirements will be documented based on client discovery sessions and SOW analysis."
    )));
}

#[test]
fn given_additional_info_when_assembling_then_appends_notes_section() {
    let mut ctx = context(SowAnalysis::default(), Platform::Aws, DocumentType::Hld);
    assert!(!has_heading(&assemble(&ctx), "23.3 Additional Notes"));

    ctx.additional_info = "Customer prefers Terraform".to_string();
    let blocks = assemble(&ctx);
    assert!(has_heading(&blocks, "23.3 Additional Notes"));
    assert!(matches!(
        blocks.last(),
        Some(DocumentBlock::Paragraph { text, .. }) if text == "Customer prefers Terraform"
    ));

    ctx.document_type = DocumentType::Lld;
    assert!(has_heading(&assemble(&ctx), "16.3 Additional Notes"));
}

#[test]
fn given_fortinet_component_when_assembling_lld_then_lists_appliances() {
    let analysis = SowAnalysis {
        components: vec!["FortiGate".to_string()],
        ..SowAnalysis::default()
    };
    let blocks = assemble_lld(&context(analysis, Platform::Azure, DocumentType::Lld));

    let rows = table_with_header(&blocks, "Appliance").unwrap();
    assert_eq!(rows[0][0], "FortiGate");
    assert_eq!(rows[0][1], "Standard_F4s_v2");

    let generic = assemble_lld(&context(SowAnalysis::default(), Platform::Azure, DocumentType::Lld));
    assert!(table_with_header(&generic, "Appliance").is_none());
}

#[test]
fn given_mixed_server_environments_when_assembling_hld_then_only_exact_dr_goes_to_dr_site() {
    let analysis = SowAnalysis {
        servers: vec![
            server("prod01", "Production"),
            server("dr01", "DR"),
            server("dr02", "dr"),
        ],
        ..SowAnalysis::default()
    };
    let blocks = assemble_hld(&context(analysis, Platform::Aws, DocumentType::Hld));

    let production: Vec<&str> = table_after_heading(&blocks, "9.7.2 Instances - Production Site")
        .iter()
        .map(|row| row[0].as_str())
        .collect();
    let dr: Vec<&str> = table_after_heading(&blocks, "9.7.3 Instances - DR Site")
        .iter()
        .map(|row| row[0].as_str())
        .collect();

    assert_eq!(production, ["prod01", "dr02"]);
    assert_eq!(dr, ["dr01"]);
}

#[test]
fn given_empty_analysis_when_assembling_hld_then_lists_default_constraints_and_risks() {
    let blocks = assemble_hld(&context(SowAnalysis::default(), Platform::Aws, DocumentType::Hld));

    let constraint_ids: Vec<&str> = table_with_header(&blocks, "Constraint ID")
        .unwrap()
        .iter()
        .map(|row| row[0].as_str())
        .collect();
    let risk_ids: Vec<&str> = table_with_header(&blocks, "Risk ID")
        .unwrap()
        .iter()
        .map(|row| row[0].as_str())
        .collect();

    assert_eq!(constraint_ids, ["CON-001", "CON-002", "CON-003", "CON-004"]);
    assert_eq!(risk_ids, ["RSK-001", "RSK-002", "RSK-003", "RSK-004"]);
}

#[test]
fn given_no_network_ranges_when_assembling_lld_then_default_plan_uses_usable_ip_formula() {
    let blocks = assemble_lld(&context(SowAnalysis::default(), Platform::Aws, DocumentType::Lld));

    let rows = table_with_header(&blocks, "CIDR Block").unwrap();
    assert_eq!(rows[0][..2], ["10.0.0.0/16", "65,531"]);
    assert!(rows.iter().all(|row| row[1] == usable_ips(&row[0])));
}
