//! Front matter and chapters 1 to 5: control, summary, strategy, scope and plan.

use crate::domain::{RaciEntry, RenderContext, ScopedItem};

use super::super::blocks::{Blocks, rows};
use super::super::helpers::{or_default, sequence_id};

const SCOPE_WIDTHS: [usize; 4] = [1200, 1800, 4260, 2100];
const RACI_WIDTHS: [usize; 3] = [4800, 2280, 2280];
const MAX_LISTED_ITEMS: usize = 15;

pub(super) fn document_control(ctx: &RenderContext, b: &mut Blocks) {
    let today = ctx.formatted_date();
    let author = ctx.project.author_name.as_str();
    let version = or_default(&ctx.project.version, "1.0");

    b.h1("1. Document Control");
    b.para("This section tracks the document lifecycle including revisions, review status, and responsibility assignments.");

    b.h2("1.1 Document Identification");
    b.table(
        &["Field", "Value"],
        vec![
            vec!["Document Title".into(), format!("{} - High-Level Design", ctx.project_name)],
            vec!["Document Owner".into(), author.into()],
            vec!["Classification".into(), "Company Confidential - Client / Vendor Information".into()],
            vec!["Version".into(), version.into()],
            vec!["Date".into(), today.clone()],
        ],
        &[3600, 5760],
    );

    b.h2("1.2 Preparation");
    b.table(
        &["Action", "Name", "Role / Function", "Date"],
        vec![
            vec!["Prepared by".into(), author.into(), "Technical Architect".into(), today.clone()],
            vec!["Reviewed by".into(), "[Reviewer Name]".into(), "[Role]".into(), String::new()],
            vec!["Approved by".into(), "[Approver Name]".into(), "[Role]".into(), String::new()],
        ],
        &[1800, 2400, 2760, 2400],
    );

    b.h2("1.3 Release History");
    b.table(
        &["Version", "Date", "Author", "Change Description", "Status"],
        vec![vec![
            version.into(),
            today,
            author.into(),
            "Initial draft".into(),
            "Draft".into(),
        ]],
        &[1200, 1800, 1800, 2760, 1800],
    );

    b.h2("1.4 Review Status");
    b.table(
        &["Reviewer", "Role", "Status", "Date"],
        vec![
            vec![author.into(), "Solution Architect".into(), "Pending Review".into(), String::new()],
            vec!["[Client Reviewer]".into(), "Client Technical Lead".into(), "Pending Review".into(), String::new()],
            vec!["[NTT Reviewer]".into(), "Project Manager".into(), "Pending Review".into(), String::new()],
        ],
        &[2400, 2400, 2160, 2400],
    );
    b.page_break();
}

pub(super) fn executive_summary_heading(_: &RenderContext, b: &mut Blocks) {
    b.h1("2. Executive Summary");
}

pub(super) fn has_overview(ctx: &RenderContext) -> bool {
    !ctx.analysis.executive_summary.overview.is_empty()
}

pub(super) fn overview_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    ctx.analysis
        .executive_summary
        .overview
        .split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .for_each(|p| b.para(p));
}

pub(super) fn default_overview(ctx: &RenderContext, b: &mut Blocks) {
    let label = ctx.platform.label();
    let client = &ctx.client_name;
    b.para(format!(
        "This High-Level Design (HLD) document describes the solution architecture for the {} project for {client}. \
         The solution leverages {label} cloud services to deliver a secure, scalable, and highly available infrastructure \
         that meets the client's business and technical requirements.",
        ctx.project_name
    ));
    b.para(format!(
        "NTT DATA has produced this document to define the technical solution that will be delivered to fulfil {client} requirements. \
         NTT DATA, in agreement with {client}, has decided to deploy this infrastructure on {label}. \
         The main site for this infrastructure will be in {} and the Disaster Recovery site will be in [DR Region].",
        ctx.project.region().unwrap_or("[Primary Region]")
    ));
}

pub(super) fn summary_highlights(ctx: &RenderContext, b: &mut Blocks) {
    let summary = &ctx.analysis.executive_summary;
    let lists: [(&str, &Vec<String>); 4] = [
        ("The key business drivers for this project are:", &summary.business_drivers),
        ("Key deliverables include:", &summary.key_deliverables),
        ("The solution incorporates the following key technologies:", &ctx.analysis.components),
        ("The deployment spans the following geographic locations:", &ctx.analysis.locations),
    ];
    for (intro, items) in lists {
        if !items.is_empty() {
            b.intro(intro);
            b.bullets(items.iter().cloned());
        }
    }
    b.page_break();
}

pub(super) fn strategy_principles(ctx: &RenderContext, b: &mut Blocks) {
    let label = ctx.platform.label();
    b.h1("3. Solution Strategy");

    b.h2("3.1 Overview");
    b.para(format!(
        "The solution strategy for {} follows a structured approach to cloud infrastructure deployment on {label}. \
         The design prioritizes security, high availability, and operational efficiency while adhering to industry best practices and the client's specific requirements.",
        ctx.project_name
    ));

    b.h2("3.2 Architecture Design Principles");
    b.para(
        "Good architecture is one that meets the needs of the stakeholders, does not violate established principles of system architecture, \
         and considers the relevant facilities by allowing for maintenance, evolution, and further development as the customer requires.",
    );
    b.info_box(
        "Well-Architected Framework",
        ctx.platform.pick(
            "This architecture follows the AWS Well-Architected Framework pillars: Operational Excellence, Security, Reliability, Performance Efficiency, Cost Optimization, and Sustainability.",
            "This architecture follows the Azure Well-Architected Framework pillars: Operational Excellence, Security, Reliability, Performance Efficiency, and Cost Optimization. Reference: https://learn.microsoft.com/en-us/azure/well-architected/",
        ),
    );
    b.intro("This system architecture accomplishes the following principles:");

    const PRINCIPLES: [(&str, &str); 12] = [
        ("Simplicity", "Focus on customer requirements and provide the simplest infrastructure to accomplish the goals. If a standalone system achieves requirements, complex clustered systems should be avoided."),
        ("Scalability", "Systems are built on scalable infrastructure to provide resources needed and adapted to customer needs for current and future requirements."),
        ("Flexibility", "All systems are defined and sized to be adapted quickly to different configurations. For example, building standalone systems in a way that makes it easy to move to a different infrastructure or availability configuration."),
        ("Automation", "Automation is promoted over manual actions to ease deployments, respond to load peaks, and ease operations for repeatability while avoiding human errors."),
        ("Performance", "A performant system can execute tasks accomplishing the baseline agreed with the customer for specific or global operations."),
        ("Standardized", "Configuration and designs follow industry best practices and recommendations. NTT and customer standards are applied while maintaining vendor and industry recommendations as a baseline."),
        ("Supported", "The infrastructure uses only supported versions as a strict requirement to always have vendor support contracted."),
        ("Modern", "The latest versions of software are used, and it is highly recommended to use versions that will not be out of maintenance during the contract period."),
        ("Secure", "Security is based on customer requirements and NTT standards. By default, communications are secured using encryption. Security includes all elements needed to maintain the infrastructure up to date."),
        ("Compliance", "Must be in compliance with laws, policies, and regulations stated by the customer, industry, and government."),
        ("Resilient", "Based on customer business needs and agreements, availability for each system and component will range from 99.5% to 99.95%, with automated error detection and role switching mechanisms."),
        ("Durable", "Customer requirements determine the Recovery Point Objective (RPO) per system/host/element. If not specified, the maximum RPO will be applied."),
    ];
    for (name, desc) in PRINCIPLES {
        b.labeled(format!("{name}: "), desc);
    }
}

const CURRENT_STATE_INTRO: &str =
    "The current environment assessment identifies the following characteristics of the existing infrastructure:";

pub(super) fn current_state_heading(_: &RenderContext, b: &mut Blocks) {
    b.h2("3.3 Current State (AS-IS)");
}

pub(super) fn has_current_state(ctx: &RenderContext) -> bool {
    !ctx.analysis.solution_strategy.current_state.is_empty()
}

pub(super) fn current_state_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    b.para(CURRENT_STATE_INTRO);
    b.bullets(ctx.analysis.solution_strategy.current_state.iter().cloned());
}

pub(super) fn default_current_state(_: &RenderContext, b: &mut Blocks) {
    b.para(CURRENT_STATE_INTRO);
    b.bullets([
        "Current network topology and connectivity requirements",
        "Existing security controls and compliance posture",
        "Application and workload inventory",
        "Current operational processes and tooling",
    ]);
    b.info_box(
        "Note",
        "Detailed current state analysis should be validated with the client during the discovery phase.",
    );
}

pub(super) fn target_state_heading(ctx: &RenderContext, b: &mut Blocks) {
    b.h2("3.4 Target State (TO-BE)");
    b.para(format!(
        "The target architecture deploys a {}-based solution that addresses the identified gaps and requirements:",
        ctx.platform.label()
    ));
}

pub(super) fn has_target_state(ctx: &RenderContext) -> bool {
    !ctx.analysis.solution_strategy.target_state.is_empty()
}

pub(super) fn target_state_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    b.bullets(ctx.analysis.solution_strategy.target_state.iter().cloned());
}

pub(super) fn default_target_state(ctx: &RenderContext, b: &mut Blocks) {
    let items: [&str; 8] = ctx.platform.pick(
        [
            "Multi-AZ deployment for high availability",
            "VPC architecture with segmented subnets (public, private, management)",
            "Transit Gateway for centralized routing and connectivity",
            "Site-to-Site VPN or Direct Connect for hybrid connectivity",
            "Security Groups and NACLs for network-level access control",
            "CloudWatch and CloudTrail for monitoring and auditing",
            "PSZ (Provider Service Zone) for management tooling",
            "AMZ (Administration Management Zone) for privileged access",
        ],
        [
            "Multi-region deployment for high availability",
            "VNet architecture with segmented subnets",
            "Virtual WAN or VNet Peering for connectivity",
            "Site-to-Site VPN or ExpressRoute for hybrid connectivity",
            "Network Security Groups (NSGs) for access control",
            "Azure Monitor and Microsoft Sentinel for monitoring and security",
            "PSZ (Provider Service Zone) for management tooling",
            "AMZ (Administration Management Zone) for privileged access",
        ],
    );
    b.bullets(items);
}

pub(super) fn close_chapter(_: &RenderContext, b: &mut Blocks) {
    b.page_break();
}

pub(super) fn scope_intro(ctx: &RenderContext, b: &mut Blocks) {
    b.h1("4. Scope, Requirements, and Limitations");
    b.para(format!(
        "This document contains the necessary information to permit the implementation of the {} environment in the new cloud environment based on {}. \
         It also contains the explanation of the migration processes and methodology for each of the services.",
        ctx.client_name,
        ctx.platform.label()
    ));
    b.h2("4.1 In Scope");
    b.para("This document should cover:");
}

pub(super) fn has_in_scope(ctx: &RenderContext) -> bool {
    !ctx.analysis.scope.in_scope.is_empty()
}

pub(super) fn in_scope_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    b.bullets(ctx.analysis.scope.in_scope.iter().cloned());
}

pub(super) fn default_in_scope(ctx: &RenderContext, b: &mut Blocks) {
    if ctx.platform.is_aws() {
        b.bullets([
            "Creation of the new Landing Zones in AWS that will include Production and DR",
            "VPC design and implementation",
            "Subnet configuration across availability zones",
            "Transit Gateway deployment and route configuration",
            "Site-to-Site VPN tunnel establishment",
            "Security group and NACL rule implementation",
            "NAT Gateway and Internet Gateway deployment",
            "Setup connectivity between AWS and the current environment to permit migration",
            "Deployment of new servers for Greenfield migration of services",
            "Create a new Backup infrastructure based on AWS native services",
            "PSZ (Provider Service Zone) deployment with monitoring, automation, and management tools",
            "Network monitoring and logging configuration",
            "Documentation and knowledge transfer",
        ]);
    } else {
        b.bullets([
            "Creation of the new Landing Zones in Azure that will include Production and DR",
            "VNet design and implementation",
            "Subnet configuration across regions",
            "Virtual WAN / VNet Peering configuration",
            "Site-to-Site VPN establishment",
            "Setup connectivity between Azure and the current environment to permit migration",
            "Setup connectivity between both Azure environments, Production and DR",
            "Network Security Group (NSG) implementation",
            "Azure Firewall deployment",
            "Deployment of new servers for Greenfield migration of services",
            "Create a new Backup infrastructure based on Azure native services",
            "PSZ (Provider Service Zone) deployment with monitoring, automation, and management tools",
            "Network monitoring and logging configuration",
            "Documentation and knowledge transfer",
        ]);
    }
}

pub(super) fn out_of_scope_heading(_: &RenderContext, b: &mut Blocks) {
    b.h2("4.2 Out of Scope");
}

pub(super) fn has_out_of_scope(ctx: &RenderContext) -> bool {
    !ctx.analysis.scope.out_of_scope.is_empty()
}

pub(super) fn out_of_scope_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    b.bullets(ctx.analysis.scope.out_of_scope.iter().cloned());
}

pub(super) fn default_out_of_scope(_: &RenderContext, b: &mut Blocks) {
    b.bullets([
        "Application layer deployment and configuration",
        "Database migration and data transfer",
        "End-user device configuration",
        "Third-party software licensing and procurement",
        "Physical data center operations",
        "Business continuity and disaster recovery planning (unless specified)",
        "Remote connection systems not owned or managed by NTT DATA",
    ]);
}

pub(super) fn requirements_heading(_: &RenderContext, b: &mut Blocks) {
    b.h2("4.3 Requirements");
}

pub(super) fn has_requirements(ctx: &RenderContext) -> bool {
    !ctx.analysis.requirements.is_empty()
}

pub(super) fn requirements_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    b.table(
        &["Requirement ID", "Scope", "Requirement Description", "HLD Definition"],
        numbered_rows("REQ", ctx.analysis.requirements.iter().take(MAX_LISTED_ITEMS)),
        &SCOPE_WIDTHS,
    );
}

pub(super) fn default_requirements(_: &RenderContext, b: &mut Blocks) {
    b.italic("Requirements will be documented based on client discovery sessions and SOW analysis.");
}

pub(super) fn assumptions_heading(_: &RenderContext, b: &mut Blocks) {
    b.h2("4.4 Assumptions");
}

pub(super) fn has_assumptions(ctx: &RenderContext) -> bool {
    !ctx.analysis.assumptions.is_empty()
}

pub(super) fn assumptions_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    assumptions_table(
        b,
        numbered_rows("ASM", ctx.analysis.assumptions.iter().take(MAX_LISTED_ITEMS)),
    );
}

pub(super) fn default_assumptions(ctx: &RenderContext, b: &mut Blocks) {
    let defaults = [
        format!(
            "The client has an active {} account with appropriate permissions",
            ctx.platform.label()
        ),
        "Network connectivity between on-premises and cloud is available or will be provisioned".to_string(),
        "The client will provide necessary access credentials and permissions in a timely manner".to_string(),
        "All required approvals and change management processes are handled by the client".to_string(),
        "IP address ranges provided do not conflict with existing network infrastructure".to_string(),
        "Depending on the kind of migration, versions of OS and applications will be maintained".to_string(),
    ];
    assumptions_table(b, numbered_rows("ASM", defaults.iter()));
}

fn assumptions_table(b: &mut Blocks, rows: Vec<Vec<String>>) {
    b.table(
        &["Assumption ID", "Scope", "Assumption Description", "HLD Definition"],
        rows,
        &SCOPE_WIDTHS,
    );
}

fn numbered_rows<'a>(prefix: &str, items: impl Iterator<Item = &'a String>) -> Vec<Vec<String>> {
    items
        .enumerate()
        .map(|(i, text)| {
            vec![
                sequence_id(prefix, i),
                "Infrastructure".to_string(),
                text.clone(),
                "Defined".to_string(),
            ]
        })
        .collect()
}

pub(super) fn constraints_heading(_: &RenderContext, b: &mut Blocks) {
    b.h2("4.5 Constraints");
}

pub(super) fn has_constraints(ctx: &RenderContext) -> bool {
    !ctx.analysis.constraints.is_empty()
}

pub(super) fn constraints_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    b.table(
        &["Constraint ID", "Scope", "Constraint Description", "HLD Definition"],
        scoped_rows(&ctx.analysis.constraints, "CON", "Defined"),
        &SCOPE_WIDTHS,
    );
}

pub(super) fn default_constraints(_: &RenderContext, b: &mut Blocks) {
    b.table(
        &["Constraint ID", "Scope", "Constraint Description", "HLD Definition"],
        rows(&[
            &["CON-001", "Infrastructure", "All resources must be deployed within the designated cloud regions", "Defined"],
            &["CON-002", "Security", "All communications must use encrypted protocols (TLS 1.2+)", "Defined"],
            &["CON-003", "Compliance", "Infrastructure must comply with applicable regulatory requirements", "Defined"],
            &["CON-004", "Operations", "Only supported software versions may be deployed in production", "Defined"],
        ]),
        &SCOPE_WIDTHS,
    );
}

pub(super) fn risks_heading(_: &RenderContext, b: &mut Blocks) {
    b.h2("4.6 Risks");
}

pub(super) fn has_risks(ctx: &RenderContext) -> bool {
    !ctx.analysis.risks.is_empty()
}

pub(super) fn risks_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    b.table(
        &["Risk ID", "Scope", "Risk Description", "HLD Definition"],
        scoped_rows(&ctx.analysis.risks, "RSK", "To be assessed"),
        &SCOPE_WIDTHS,
    );
}

pub(super) fn default_risks(_: &RenderContext, b: &mut Blocks) {
    b.table(
        &["Risk ID", "Scope", "Risk Description", "HLD Definition"],
        rows(&[
            &["RSK-001", "Migration", "Application compatibility issues during cloud migration", "To be assessed"],
            &["RSK-002", "Network", "Latency impact on critical applications during hybrid phase", "To be assessed"],
            &["RSK-003", "Security", "Non-standard implementations requiring disclaimers", "To be assessed"],
            &["RSK-004", "Timeline", "Dependencies on client-side actions impacting schedule", "To be assessed"],
        ]),
        &SCOPE_WIDTHS,
    );
}

fn scoped_rows(items: &[ScopedItem], prefix: &str, definition: &str) -> Vec<Vec<String>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let id = if item.id.is_empty() {
                sequence_id(prefix, i)
            } else {
                item.id.clone()
            };
            vec![
                id,
                or_default(&item.scope, "Infrastructure").to_string(),
                item.description.clone(),
                or_default(&item.hld_definition, definition).to_string(),
            ]
        })
        .collect()
}

pub(super) fn implementation_intro(ctx: &RenderContext, b: &mut Blocks) {
    b.h1("5. Implementation Plan and Strategy");
    b.para(
        "The implementation follows a phased approach to ensure controlled deployment and risk mitigation. \
         As a very high-level plan, the following technical tasks will take place:",
    );
    b.bullet(format!(
        "Create basic cloud infrastructure in {}",
        ctx.platform.label()
    ));
    b.bullets([
        "Expand or adapt the basic infrastructure: Active Directory, Backup, Monitoring, Patching, and Management systems",
        "Deploy VMs needed",
        "Execute post installs",
        "Quality Assurance for the entire infrastructure",
        "Move systems to operations",
        "Handover to customer and service go-live",
    ]);
    b.info_box(
        "Note",
        "The detailed task list will be provided during the project execution. The objective of this document is to provide high-level design information without detailed planning. All mentioned tasks will be repeated per system if needed.",
    );
}

const PHASE_HEADERS: [&str; 4] = ["Phase", "Activities", "Dependencies", "Deliverables"];
const PHASE_WIDTHS: [usize; 4] = [2100, 3060, 1800, 2400];

pub(super) fn has_phases(ctx: &RenderContext) -> bool {
    !ctx.analysis.migration_plan.phases.is_empty()
}

pub(super) fn phases_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    let rows = ctx
        .analysis
        .migration_plan
        .phases
        .iter()
        .map(|p| {
            vec![
                p.phase.clone(),
                p.activities.clone(),
                p.dependencies.clone(),
                p.deliverables.clone(),
            ]
        })
        .collect();
    b.table(&PHASE_HEADERS, rows, &PHASE_WIDTHS);
}

pub(super) fn default_phases(ctx: &RenderContext, b: &mut Blocks) {
    let label = ctx.platform.label();
    let network = ctx.platform.pick("VPC", "VNet");
    let mut table = vec![
        vec![
            "Phase 0: Landing Zone".to_string(),
            format!("{label} Landing Zone Preparation (PSZ Deployment), Firewall and management systems"),
            "Client approvals".to_string(),
            "Base infrastructure + PSZ".to_string(),
        ],
        vec![
            "Phase 1: Foundation".to_string(),
            format!("Account setup, {network} creation, IAM/RBAC configuration"),
            "Phase 0 complete".to_string(),
            "Core infrastructure".to_string(),
        ],
    ];
    table.extend(rows(&[
        &["Phase 2: Networking", "Subnet deployment, routing configuration, gateway setup", "Phase 1 complete", "Network infrastructure"],
        &["Phase 3: Connectivity", "VPN tunnels, peering, private endpoints", "Phase 2 complete", "Hybrid connectivity"],
        &["Phase 4: Security", "Firewall rules, monitoring, logging configuration", "Phase 3 complete", "Security controls"],
        &["Phase 5: Migration", "Server migration (Lift & Shift / Greenfield), data replication", "Phase 4 complete", "Migrated workloads"],
        &["Phase 6: Testing", "Connectivity validation, failover testing, performance testing, QA", "Phase 5 complete", "Test results"],
        &["Phase 7: Handover", "Documentation, knowledge transfer, operational procedures", "Phase 6 complete", "Final documentation"],
    ]));
    b.table(&PHASE_HEADERS, table, &PHASE_WIDTHS);
}

pub(super) fn raci_matrix(ctx: &RenderContext, b: &mut Blocks) {
    b.h2("5.1 Project RACI Matrix");
    b.info_box(
        "RACI Matrix",
        "R = Responsible, A = Accountable, C = Consulted, I = Informed. This matrix defines the roles and responsibilities for key project activities.",
    );

    let raci = &ctx.analysis.raci;
    raci_table(
        b,
        "5.1.1 Infrastructure and Licenses",
        &raci.infrastructure_and_licenses,
        &[
            &["Cloud Account/Subscription Setup", "R", "A"],
            &["License Procurement", "C", "R/A"],
            &["Infrastructure Provisioning", "R", "A"],
            &["Network Configuration", "R", "A"],
        ],
    );
    raci_table(
        b,
        "5.1.2 Professional Services",
        &raci.professional_services,
        &[
            &["Solution Design", "R/A", "C"],
            &["Implementation Execution", "R", "A"],
            &["Security Implementation", "R", "A"],
            &["Documentation", "R", "A"],
        ],
    );
    raci_table(
        b,
        "5.1.3 Deployment Activities",
        &raci.deployment_activities,
        &[
            &["VM Deployment", "R", "A"],
            &["OS Configuration", "R", "A"],
            &["Application Deployment", "C", "R/A"],
            &["Data Migration", "R", "A"],
        ],
    );
    raci_table(
        b,
        "5.1.4 Acceptance Testing Activities",
        &raci.acceptance_testing,
        &[
            &["Infrastructure Testing", "R", "A"],
            &["Application Testing", "C", "R/A"],
            &["Security Validation", "R", "A"],
            &["UAT Sign-off", "I", "R/A"],
        ],
    );
    raci_table(
        b,
        "5.1.5 Ongoing Service Activities",
        &raci.ongoing_services,
        &[
            &["Monitoring", "R", "I"],
            &["Patching", "R", "A"],
            &["Backup Management", "R", "A"],
            &["Incident Management", "R", "A"],
            &["Change Management", "R", "A"],
        ],
    );
    b.page_break();
}

/// RACI subsection from analysis entries, or the standard split when the
/// SOW has none for this category.
fn raci_table(b: &mut Blocks, title: &str, entries: &[RaciEntry], defaults: &[&[&str]]) {
    b.h3(title);
    let body = if entries.is_empty() {
        rows(defaults)
    } else {
        entries
            .iter()
            .map(|e| vec![e.task.clone(), e.ntt.clone(), e.customer.clone()])
            .collect()
    };
    b.table(&["Task", "NTT", "Customer"], body, &RACI_WIDTHS);
}
