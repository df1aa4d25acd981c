//! Chapters 17 to 23: applications, DR, migration, workloads, IaC, SLA and appendix.

use crate::domain::RenderContext;

use super::super::blocks::{Blocks, rows};
use super::super::helpers::or_default;

const TBD_DR_REGION: &str = "[DR Region]";
const DR_COMPONENT_HEADERS: [&str; 3] = ["Component", "DR Method", "DR Region"];
const DR_COMPONENT_WIDTHS: [usize; 3] = [2760, 3000, 3600];
const MIGRATION_HEADERS: [&str; 4] = ["Hostname", "Description", "Migration Procedure", "Migration Phase"];
const MIGRATION_WIDTHS: [usize; 4] = [2100, 2760, 2400, 2100];
const SLA_HEADERS: [&str; 3] = ["Metric", "Target", "Measurement Method"];
const SLA_WIDTHS: [usize; 3] = [2700, 2400, 4260];

pub(super) fn application_architecture(ctx: &RenderContext, b: &mut Blocks) {
    b.h1("17. Application Architecture");

    b.h2("17.1 Applications");
    b.para("Document all applications to be deployed or migrated as part of this project. Include application details, dependencies, and any specific configuration requirements.");
    b.placeholder("[Application inventory to be completed during discovery phase]");

    b.h2("17.2 Active Directory");
    b.para(ctx.platform.pick(
        "Active Directory services will be provided through AWS Managed Microsoft AD or self-managed AD on EC2 instances, depending on requirements.",
        "Active Directory services will leverage Azure Active Directory and/or domain controllers deployed within the Azure VNet.",
    ));

    b.h2("17.3 Logging");
    b.para("Log management policies for all components of the platform:");
    let logs = if ctx.platform.is_aws() {
        rows(&[
            &["AWS Services", "CloudTrail", "CloudTrail logs retained in S3, lifecycle policies applied"],
            &["Web Servers", "OS / Application Logs", "Rsyslog pushes to centralized log aggregator; Filebeat for middleware logs"],
            &["Database Servers", "Database Engine Logs", "Retained per database vendor policy"],
            &["Network", "VPC Flow Logs", "Flow logs sent to CloudWatch Logs and archived to S3"],
        ])
    } else {
        rows(&[
            &["Azure Services", "Activity Logs", "Retained in Log Analytics workspace per policy"],
            &["Web Servers", "OS / Application Logs", "Rsyslog pushes to centralized log aggregator; Filebeat for middleware logs"],
            &["Database Servers", "Database Engine Logs", "Retained per database vendor policy"],
            &["Network", "NSG Flow Logs", "Flow logs sent to Log Analytics and archived to Storage Account"],
        ])
    };
    b.table(&["Component", "Log Origin", "Log Management Policy"], logs, &[2400, 2400, 4560]);

    b.h2("17.4 Monitoring");
    b.para("Monitoring of all services/components is 24x7.");
    b.bullets([
        "Alerts for production services/components are raised 24x7",
        "Alerts for non-production services/components are raised between 08:00 and 17:00 Monday to Friday",
    ]);
    b.intro("NTT DATA has defined a standard set of monitors:");
    b.bullets([
        "Free disk space for all partitions",
        "Average system load and CPU usage",
        "Memory usage",
        "I/O operations for each disk",
        "Network traffic",
        "SSH/RDP connectivity",
        "TCP/IP connectivity",
    ]);
    b.para("Additional workload-specific monitoring will be described per workload.");
    b.page_break();

    b.h1("18. Disaster Recovery Strategy");
}

pub(super) fn has_dr_overview(ctx: &RenderContext) -> bool {
    !ctx.analysis.dr_strategy.overview.is_empty()
}

pub(super) fn dr_overview_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    let dr = &ctx.analysis.dr_strategy;
    b.para(dr.overview.clone());
    if !dr.rpo.is_empty() || !dr.rto.is_empty() {
        b.info_box(
            "DR Targets",
            format!(
                "RPO: {}  |  RTO: {}  |  DR Region: {}",
                or_default(&dr.rpo, "To be determined"),
                or_default(&dr.rto, "To be determined"),
                or_default(&dr.dr_region, "To be determined"),
            ),
        );
    }
}

pub(super) fn default_dr_overview(_: &RenderContext, b: &mut Blocks) {
    b.para("Specify if the project includes a specific process/infrastructure for disaster recovery or business continuity purposes.");
}

pub(super) fn management_dr_heading(_: &RenderContext, b: &mut Blocks) {
    b.h2("18.1 Management Servers DR Strategy");
}

pub(super) fn has_dr_components(ctx: &RenderContext) -> bool {
    !ctx.analysis.dr_strategy.components.is_empty()
}

pub(super) fn dr_components_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    let dr = &ctx.analysis.dr_strategy;
    let region = or_default(&dr.dr_region, TBD_DR_REGION);
    b.para("Management servers and infrastructure components will be replicated to the DR region using the following strategies:");
    b.table(
        &DR_COMPONENT_HEADERS,
        dr.components
            .iter()
            .map(|c| {
                vec![
                    c.component.clone(),
                    c.dr_method.clone(),
                    or_default(&c.dr_region, region).to_string(),
                ]
            })
            .collect(),
        &DR_COMPONENT_WIDTHS,
    );
}

pub(super) fn default_dr_components(ctx: &RenderContext, b: &mut Blocks) {
    b.para(format!(
        "Management servers in the PSZ will be replicated to DR. Depending on the tool, servers will be replicated using {}.",
        ctx.platform.pick(
            "AWS Elastic Disaster Recovery or deployed as a second server in the DR region",
            "Azure Site Recovery (ASR) or deployed as a second server in the DR region",
        )
    ));
    b.table(
        &DR_COMPONENT_HEADERS,
        rows(&[
            &["Logic Monitor Collector", "Separate DR instance", TBD_DR_REGION],
            &["Automation Server", "Docker image redeployment", TBD_DR_REGION],
            &["Jump Server", "Separate DR instance", TBD_DR_REGION],
        ]),
        &DR_COMPONENT_WIDTHS,
    );
}

pub(super) fn dr_backup_and_applications(ctx: &RenderContext, b: &mut Blocks) {
    b.h2("18.2 Backup DR Strategy");
    b.para(ctx.platform.pick(
        "Backup data is replicated to the DR region using AWS Backup cross-region copy. S3 buckets use Cross-Region Replication (CRR) for backup data redundancy.",
        "Backup data is replicated to the DR region through Azure Recovery Service Vaults configured with Geo-Redundant Storage (GRS).",
    ));

    b.h2("18.3 Application DR Strategy");
    b.para(format!(
        "Application-level disaster recovery strategy will be determined per workload. Options include {}.",
        ctx.platform.pick(
            "AWS Elastic Disaster Recovery, cross-region RDS replication, and active-passive failover configurations",
            "Azure Site Recovery (ASR), SQL Always-On availability groups, and active-passive failover configurations",
        )
    ));
    b.page_break();

    b.h1("19. Migration Project");
    b.h2("19.1 Migration Strategy");
}

pub(super) fn has_migration_strategy(ctx: &RenderContext) -> bool {
    !ctx.analysis.migration_plan.strategy.is_empty()
}

pub(super) fn migration_strategy_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    b.para(ctx.analysis.migration_plan.strategy.clone());
}

pub(super) fn default_migration_strategy(_: &RenderContext, b: &mut Blocks) {
    b.para("This section describes the high-level plan for migration of services. Two primary methods are available:");
}

pub(super) fn migration_methodology(ctx: &RenderContext, b: &mut Blocks) {
    let label = ctx.platform.label();
    b.labeled(
        "Lift and Shift: ",
        ctx.platform.pick(
            "Using AWS Application Migration Service (MGN) to replicate VMs to AWS. Once ready, a cutover is executed to the new environment.",
            "Using Azure Migrate to replicate VMs from the current environment to Azure. Once ready, a failover is executed to the new environment.",
        ),
    );
    b.labeled(
        "Greenfield: ",
        format!("A new server is created in {label} and then data is replicated using the corresponding technology."),
    );
    b.info_box(
        "Migration Sequence",
        format!(
            "First step: Preparation and configuration of the Landing Zone in the {label} environment and setup of the necessary connectivity. \
             During this process, migration of services can be scheduled."
        ),
    );

    b.h2("19.2 Migration Methodology");
    b.h3("19.2.1 OS Migration");
    b.para("Two main methods to migrate systems:");
    b.bullet(ctx.platform.pick(
        "Lift and Shift: VMs replicated from current environment to AWS using AWS MGN",
        "Lift and Shift: VMs replicated from current VMware/Hyper-V environment to Azure using Azure Migrate",
    ));
    b.bullet(format!(
        "Greenfield: New VM deployed in {label}, data and services migrated manually"
    ));

    b.h3("19.2.2 Application Migration");
    b.para("Application migration approach depends on the application architecture, dependencies, and vendor support for cloud deployment.");

    b.h2("19.3 System/Server/Application Migration Table");
}

pub(super) fn has_server_migrations(ctx: &RenderContext) -> bool {
    !ctx.analysis.migration_plan.server_migrations.is_empty()
}

pub(super) fn server_migrations_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    b.table(
        &MIGRATION_HEADERS,
        ctx.analysis
            .migration_plan
            .server_migrations
            .iter()
            .map(|s| {
                vec![
                    or_default(&s.hostname, "[TBD]").to_string(),
                    s.description.clone(),
                    or_default(&s.method, "TBD").to_string(),
                    or_default(&s.phase, "TBD").to_string(),
                ]
            })
            .collect(),
        &MIGRATION_WIDTHS,
    );
}

pub(super) fn default_server_migrations(_: &RenderContext, b: &mut Blocks) {
    b.table(
        &MIGRATION_HEADERS,
        rows(&[
            &["[Server 1]", "[Description]", "Lift and Shift / Greenfield", "Phase [X]"],
            &["[Server 2]", "[Description]", "Lift and Shift / Greenfield", "Phase [X]"],
            &["[Server 3]", "[Description]", "Lift and Shift / Greenfield", "Phase [X]"],
        ]),
        &MIGRATION_WIDTHS,
    );
}

pub(super) fn migration_phases(ctx: &RenderContext, b: &mut Blocks) {
    b.h2("19.4 Migration Phases");
    b.h3(format!(
        "19.4.1 Phase 0 - {} Landing Zone Preparation (PSZ Deployment)",
        ctx.platform.label()
    ));
    b.para("During Phase 0, the Landing Zone, the Firewall, and the management systems will be deployed. This includes both Production and DR environments.");
    b.h3("19.4.2 Phase 1 - Core Infrastructure");
    b.para("Network infrastructure, VPN connectivity, and foundational services deployment.");
    b.h3("19.4.3 Phase 2 - Workload Migration");
    b.para("Migration of primary workloads according to the migration table above.");
    b.h3("19.4.4 Phase 3 - Validation and Cutover");
    b.para("Final validation, testing, and production cutover.");
    b.page_break();

    b.h1("20. Customer Workloads");
    b.para(
        "This section documents the solution specification for each workload within the project scope, including infrastructure, \
         application, backup, monitoring, patching, and QA specifications.",
    );
    b.h2("20.1 Workload Overview");
}

pub(super) fn has_workloads(ctx: &RenderContext) -> bool {
    !ctx.analysis.workloads.is_empty()
}

pub(super) fn workloads_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    for (i, workload) in ctx.analysis.workloads.iter().enumerate() {
        let n = i + 1;
        if workload.name.is_empty() {
            b.h3(format!("20.1.{n} Workload {n}"));
        } else {
            b.h3(format!("20.1.{n} {}", workload.name));
        }
        if !workload.description.is_empty() {
            b.para(workload.description.clone());
        }
        for (label, value) in [
            ("Infrastructure: ", &workload.infrastructure),
            ("Backup: ", &workload.backup_policy),
            ("Monitoring: ", &workload.monitoring),
        ] {
            if !value.is_empty() {
                b.labeled(label, value.clone());
            }
        }
    }
}

pub(super) fn default_workloads(_: &RenderContext, b: &mut Blocks) {
    b.placeholder("[Short description of the concrete workload]");
}

pub(super) fn workload_operations(ctx: &RenderContext, b: &mut Blocks) {
    b.h2("20.2 Workload Architecture");
    b.info_box(
        "Topology Diagram",
        "Insert infrastructure diagram to understand deployed components and their interactions. Relationship with external entities should be drawn if they are part of the solution.",
    );

    b.h2("20.3 Workload Infrastructure");
    b.para(
        "Document IaaS, PaaS, SaaS, and every component deployed under the project scope. Include infrastructure components per environment \
         with their main characteristics, software components with versions and configuration, domain names and certificates, and 3rd party integrations.",
    );

    b.h2("20.4 Workload Backup Strategy");
    b.table(
        &["Workload", "Environment", "Component", "Policy"],
        rows(&[
            &["[Workload 1]", "Production", "[Component]", "[Backup Policy]"],
            &["[Workload 1]", "DR", "[Component]", "[Backup Policy]"],
        ]),
        &[2400, 1920, 2160, 2880],
    );

    b.h2("20.5 Workload Monitoring");
    b.para("Describe custom monitoring for each workload beyond the standard set of monitors.");

    b.h2("20.6 Quality Acceptance");
    b.para("As part of the project handover to operational support, NTT DATA performs the following quality acceptance checks:");
    let security_check = format!(
        "Firewall and {} checked for recommended configuration",
        ctx.platform.pick("AWS IAM", "Azure RBAC")
    );
    b.table(
        &["Check", "Description"],
        rows(&[
            &["Monitoring", "Monitoring is enabled, configured correctly and verified with the customer"],
            &["Access", "All instances have RDP/SSH access enabled to NTT DATA"],
            &["Processes", "Start-up and stop processes defined for all instances"],
            &["Tagging", "All services are tagged appropriately"],
            &["Documentation", "Each workload is documented with custom functions and non-standard characteristics"],
            &["Escalations", "Contacts defined, RACI matrix in place, phone numbers, emails, time schedules"],
            &["Patching", "Time/date, execution process/order, contacts for notification"],
            &["Backup", "Inclusions/exclusions, how, where, when, contacts for notification"],
            &["Scaling", "Auto scaling groups correctly configured with recommended policies"],
            &["Permissions", "Agreed with client for non-admin access"],
            &["Custom Scripts", "Defined, captured in repo, tested, and defined where they run from"],
            &["Security", security_check.as_str()],
        ]),
        &[2400, 6960],
    );

    b.h2("20.7 Application Release (Code) Management");
    b.para("Describe application release procedures and code management with the customer. CI/CD tool automations should be documented along with custom scripts, cron jobs, and any automation in place.");

    b.h2("20.8 Post Implementation Review");
    b.para("Document any pending points to be developed in the near future after the project and outside the initial scope.");
    b.page_break();
}

pub(super) fn infrastructure_as_code(ctx: &RenderContext, b: &mut Blocks) {
    b.h1("21. Infrastructure as Code (Terraform)");
    b.para("Terraform is the system used to deploy and maintain cloud resource infrastructure using Infrastructure as Code (IaC) mechanisms.");

    b.h2("21.1 Benefits");
    b.bullets([
        "Infrastructure as Code: Manages and provisions components via definition files; allows building, changing, and versioning infrastructure",
        "Automated Infrastructure Management: Works with configuration files to define and store infrastructure state for controlled updates",
        "Reduced Time to Provision: NTT DATA has an extensive Terraform code repository for rapid deployment",
        "Portability and Flexibility: Code can be reused across multiple infrastructure providers",
        "Multi-cloud Ready: Useful for Disaster Recovery or Hybrid environments",
        "Simplicity: Easy to learn coding with elegant template language",
    ]);

    b.h2("21.2 Terraform Guidelines");
    b.bullets([
        "Standardized Terraform modules for common deployment approach",
        "Separate change affectation depending on the workload",
        ctx.platform.pick(
            "State files saved and locked remotely within versioned S3 and DynamoDB",
            "State files saved and locked remotely within Azure Storage Account with state locking",
        ),
        "CI/CD pipelines for automated deployments (GitLab/GitHub Actions)",
    ]);
    b.page_break();

    b.h1("22. Service Level Agreement");
    b.para("The following service level targets apply to the deployed infrastructure:");
}

pub(super) fn has_sla_requirements(ctx: &RenderContext) -> bool {
    !ctx.analysis.sla_requirements.is_empty()
}

pub(super) fn sla_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    b.table(
        &SLA_HEADERS,
        ctx.analysis
            .sla_requirements
            .iter()
            .map(|sla| vec![sla.metric.clone(), sla.target.clone(), sla.measurement_method.clone()])
            .collect(),
        &SLA_WIDTHS,
    );
}

pub(super) fn default_sla(_: &RenderContext, b: &mut Blocks) {
    b.table(
        &SLA_HEADERS,
        rows(&[
            &["Infrastructure Availability", "99.95%", "Cloud provider SLA"],
            &["VPN Tunnel Availability", "99.9%", "Monitoring alerts"],
            &["Incident Response (P1)", "< 15 minutes", "Ticketing system"],
            &["Incident Response (P2)", "< 1 hour", "Ticketing system"],
            &["Incident Response (P3)", "< 4 hours", "Ticketing system"],
            &["Incident Response (P4)", "< 8 hours", "Ticketing system"],
            &["Change Request Turnaround", "< 5 business days", "Change management system"],
            &["Backup Success Rate", "> 99%", "Backup monitoring"],
            &["Patching Compliance", "> 95%", "Patch management reports"],
        ]),
        &SLA_WIDTHS,
    );
}

pub(super) fn appendix(ctx: &RenderContext, b: &mut Blocks) {
    b.page_break();
    b.h1("23. Appendix");
    b.para("This section contains supplementary information and references.");

    b.h2("23.1 Glossary");
    b.table(
        &["Term", "Definition"],
        rows(&[
            &["HLD", "High-Level Design - Architecture overview document"],
            &["LLD", "Low-Level Design - Detailed technical configuration document"],
            &["VPC", "Virtual Private Cloud - Isolated network in AWS"],
            &["VNet", "Virtual Network - Isolated network in Azure"],
            &["CIDR", "Classless Inter-Domain Routing - IP addressing scheme"],
            &["IPsec", "Internet Protocol Security - VPN encryption protocol"],
            &["HA", "High Availability - System design for minimal downtime"],
            &["AZ", "Availability Zone - Isolated data center within a region"],
            &["AMZ", "Administration Management Zone - NTT secure management environment for privileged access and operations"],
            &["PSZ", "Provider Service Zone - NTT management zone hosting monitoring, automation, and admin tooling"],
            &["CSZ", "Customer Security Zone - Customer workload zone with security controls and network segmentation"],
            &["SMZ", "Service Management Zone - Zone for service management tools and ITSM integration"],
            &["PAM", "Privileged Access Management - Solution for secure administrative access with session recording"],
            &["XTAM", "Xtontech Access Manager - PAM tool used by NTT for privileged session management"],
            &["RACI", "Responsible, Accountable, Consulted, Informed - Responsibility matrix"],
            &["RPO", "Recovery Point Objective - Maximum acceptable data loss measured in time"],
            &["RTO", "Recovery Time Objective - Maximum acceptable downtime for recovery"],
            &["IaC", "Infrastructure as Code - Managing infrastructure through code definitions (e.g., Terraform)"],
            &["WSUS", "Windows Server Update Services - Microsoft patch management"],
            &["CMDB", "Configuration Management Database - IT asset and configuration repository"],
            &["QA", "Quality Acceptance - NTT standard checks performed during project handover"],
            &["ASR", "Azure Site Recovery - Disaster recovery service for Azure workloads"],
            &["DR", "Disaster Recovery - Strategy and infrastructure for business continuity"],
        ]),
        &[2400, 6960],
    );

    b.h2("23.2 Contact Information");
    let mut contacts = vec![vec![
        "Solution Architect".to_string(),
        ctx.project.author_name.clone(),
        "[email]".to_string(),
        "[phone]".to_string(),
    ]];
    contacts.extend(rows(&[
        &["Project Manager", "[Name]", "[email]", "[phone]"],
        &["Client Technical Lead", "[Name]", "[email]", "[phone]"],
        &["Network Engineer", "[Name]", "[email]", "[phone]"],
        &["Security Engineer", "[Name]", "[email]", "[phone]"],
    ]));
    b.table(&["Role", "Name", "Email", "Phone"], contacts, &[2100, 2400, 2760, 2100]);
}

pub(super) fn has_additional_info(ctx: &RenderContext) -> bool {
    ctx.has_additional_info()
}

pub(super) fn additional_notes(ctx: &RenderContext, b: &mut Blocks) {
    b.h2("23.3 Additional Notes");
    b.para(ctx.additional_info.clone());
}
