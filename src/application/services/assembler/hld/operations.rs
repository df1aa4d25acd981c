//! Chapters 10 to 16: backup, PSZ tooling, patching, security, networking,
//! key components and high availability.

use crate::domain::{ParagraphStyle, RenderContext};

use super::super::blocks::{Blocks, rows};
use super::super::helpers::{component_description, or_default};

const BACKUP_HEADERS: [&str; 4] = ["Backup Type", "Frequency", "Retention", "Storage Tier"];
const BACKUP_WIDTHS: [usize; 4] = [2400, 2160, 2160, 2640];

const SERVER_HEADERS: [&str; 6] = ["Server", "Region", "Operating System", "vCPU", "RAM (GB)", "Disk"];
const CONNECTIVITY_HEADERS: [&str; 3] = ["Source Server(s)", "Destination", "Reason"];
const CONNECTIVITY_WIDTHS: [usize; 3] = [2760, 2760, 3840];

pub(super) fn backup_overview(ctx: &RenderContext, b: &mut Blocks) {
    b.h1("10. System Continuity - Backup Configuration");
    b.para("Backup will follow the standard backup recommendation from NTT and will have a combination of technologies to increase reliability and continuity.");

    b.h2("10.1 Backup Tools");
    b.para(ctx.platform.pick(
        "AWS Backup is the default tool for backups, providing centralized backup management across AWS services. Native embedded storage backup from multiple cloud services is also leveraged.",
        "Recovery Service Vaults is the Azure native tool and the main service used to back up the infrastructure using the snapshot functionality.",
    ));

    b.h2("10.2 Backup Infrastructure");
    b.para(ctx.platform.pick(
        "The backup infrastructure is provided by AWS Backup service with cross-region backup capabilities for DR purposes.",
        "The backup infrastructure is provided by Azure Recovery Service Vaults with geo-redundant storage for DR purposes.",
    ));

    b.h2("10.3 Data Types");
    b.para("The following data types and components must be considered for backup:");
    b.bullets([
        "Operating System - VM Servers",
        "Databases",
        "Disks / Volumes",
        ctx.platform.pick("S3 Buckets", "Storage Accounts"),
        "Application Configuration Files",
    ]);

    b.h2("10.4 Backup Policies");
    b.para("The following retention policies are applied:");
}

pub(super) fn has_backup_policies(ctx: &RenderContext) -> bool {
    !ctx.analysis.backup_requirements.policies.is_empty()
}

pub(super) fn backup_policies_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    let backup = &ctx.analysis.backup_requirements;
    b.table(
        &BACKUP_HEADERS,
        backup
            .policies
            .iter()
            .map(|p| {
                vec![
                    p.policy_type.clone(),
                    p.frequency.clone(),
                    p.retention.clone(),
                    or_default(&p.tier, "Standard").to_string(),
                ]
            })
            .collect(),
        &BACKUP_WIDTHS,
    );
    if !backup.special_requirements.is_empty() {
        b.intro("Special backup requirements from SOW:");
        b.bullets(backup.special_requirements.iter().cloned());
    }
}

pub(super) fn default_backup_policies(_: &RenderContext, b: &mut Blocks) {
    b.table(
        &BACKUP_HEADERS,
        rows(&[
            &["Full VM Backup", "Daily", "30 days", "Standard"],
            &["Weekly Backup", "Weekly (Sunday)", "12 weeks", "Standard"],
            &["Monthly Backup", "Monthly (1st)", "12 months", "Archive"],
            &["Annual Backup", "Yearly (Jan 1st)", "7 years", "Archive"],
            &["Database Backup", "Daily + Transaction Logs", "30 days", "Standard"],
        ]),
        &BACKUP_WIDTHS,
    );
}

pub(super) fn backup_operations(ctx: &RenderContext, b: &mut Blocks) {
    b.h2("10.5 Backup Sizing");
    b.italic("The backup sizing estimation will be calculated based on the total space currently protected. This will be finalized after server provisioning.");

    b.h2("10.6 Backup Tests and Data Integrity");
    b.para(
        "Backup verification and restore tests need to be conducted on a regular basis to ensure the backup policy is consistent. \
         Restore tests will be scheduled quarterly to validate data integrity and recovery procedures.",
    );

    b.h2("10.7 Backup Vaulting / Archiving");
    b.para(ctx.platform.pick(
        "Long-term backup data is automatically archived from S3 Standard to S3 Glacier after a configurable period (e.g., 6 months) for cost optimization.",
        "Long-term backup data is archived using Azure Backup Archive Tier for cost optimization. Recovery Service Vaults with GRS replication ensure cross-region protection.",
    ));
    b.page_break();
}

pub(super) fn provider_service_zone(ctx: &RenderContext, b: &mut Blocks) {
    b.h1("11. PSZ - Provider Service Zone");
    b.para(
        "The Provider Service Zone (PSZ) hosts the NTT DATA management and operational tooling required for infrastructure monitoring, automation, \
         and administration. The PSZ is deployed within the customer's cloud environment in a dedicated management subnet.",
    );

    b.h2("11.1 Logic Monitor");
    b.h3("11.1.1 Overview");
    b.para(
        "NTT will use Logic Monitor as the primary monitoring tool for the new platforms. \
         Logic Monitor is a SaaS-based monitoring and analytics platform which uses remote collectors to poll devices within platforms \
         and send metadata to the cloud-based platform for reporting and analytics.",
    );
    b.intro("The Logic Monitor cloud portal provides:");
    b.bullets([
        "Alerting and correlation",
        "Dashboards and forecasting",
        "Reporting",
        "ServiceNow CMDB integration",
    ]);
    b.para(
        "All connections to the Logic Monitor cloud use HTTPS with TLS 1.2 encryption. All data stored is encrypted at rest using AES-256 encryption with a unique key per customer. \
         The cloud portal is formally audited against SOC2 principles and information is handled in compliance with GDPR requirements.",
    );
    b.intro("Logic Monitor collectors support the following instrumentation protocols:");
    b.table(
        &["Device", "Protocol", "Port"],
        rows(&[
            &["Windows Servers", "WMI", "TCP/135, TCP/24158"],
            &["Linux Servers", "SSH, SNMPv3", "TCP/22, UDP/161"],
            &["Network and Storage Devices", "SSH, SNMPv3, HTTPS", "TCP/22, UDP/161, TCP/443"],
            &["Any", "ICMP (ping)", "N/A"],
        ]),
        &[3000, 2760, 3600],
    );

    b.h3("11.1.2 Design Principles");
    b.bullets([
        "One Logic Monitor collector per region deployed as virtual machine in the PSZ",
        "WMI monitoring will use privileged accounts by default",
        "RBAC configured to provide access to relevant resources per customer",
        "Portal supports 2FA and SAML IdP for authentication with IP whitelisting",
    ]);

    b.h3("11.1.3 Servers");
    b.table(
        &SERVER_HEADERS,
        rows(&[
            &["LMcollector-1", "Production", "Windows Server 2019 Std", "4", "8", "90 GB"],
            &["LMcollector-2", "DR", "Windows Server 2019 Std", "4", "8", "90 GB"],
        ]),
        &[1800, 1440, 2160, 960, 1080, 1080],
    );

    b.h3("11.1.4 External Connectivity");
    b.table(
        &CONNECTIVITY_HEADERS,
        rows(&[
            &["Logic Monitor Collectors", "Logic Monitor Cloud", "Monitoring data and configuration retrieval"],
            &["Logic Monitor Collectors", "Qualys Cloud", "Vulnerability and Compliance Scanning"],
            &["Logic Monitor Collectors", "CrowdStrike", "Antivirus reporting"],
            &["Logic Monitor Collectors", "Windows Patching", "Patch download from Microsoft"],
        ]),
        &CONNECTIVITY_WIDTHS,
    );

    b.h2("11.2 Salt/Ansible (Automation)");
    b.h3("11.2.1 Overview");
    b.para(
        "The automation server is used for central management and remote command execution, patch management, automated QAs and audits, \
         and compliance checks. These services are provided by SaltStack and Ansible, packed inside an NTT DATA managed docker image.",
    );

    b.h3("11.2.2 Core Components");
    b.para("Both Ansible and Salt obtain information (inventory or pillars) dynamically from the CMDB.");
    b.para_with(
        "SaltStack provides:",
        ParagraphStyle::labeled("SaltStack: ").space_before(120),
    );
    b.bullets([
        "API with queue mechanism (ZeroMQ) linking automation stack with ITSM",
        "ServiceNow CMDB enrichment for Windows and Linux servers",
        "Patching execution orchestration for Windows and Linux servers",
        "Automated incident and request response from ServiceNow platform",
    ]);
    b.para_with(
        "Ansible provides:",
        ParagraphStyle::labeled("Ansible: ").space_before(120),
    );
    b.bullets([
        "Quality Assurance of network, Windows and Linux devices against NTT, CIS1 and CIS2 standards",
        "Systems Configuration Management",
        "Network devices backup management",
        "ServiceNow CMDB enrichment for Windows, Linux servers, and networking devices",
    ]);

    b.h3("11.2.3 Network Requirements");
    b.table(
        &["Component", "Ports", "Description"],
        rows(&[
            &["Salt Master ↔ Minions", "TCP 4505, 4506", "AES-encrypted communication channel"],
            &["Salt API", "TCP 8000", "Must be reachable from NTT AMZ IPs"],
            &["Ansible → Linux/Network", "TCP 22, 443", "SSH and HTTPS access"],
            &["Ansible → Windows", "TCP 5986", "WinRM HTTPS access"],
        ]),
        &[2760, 2160, 4440],
    );

    b.h3("11.2.4 Servers");
    b.table(
        &SERVER_HEADERS,
        rows(&[&["Automation Server", "Production", "Ubuntu 22.04", "6-8", "16", "60 GB + 30 GB (/var/lib/docker)"]]),
        &[1800, 1440, 2160, 960, 1080, 2040],
    );

    b.h3("11.2.5 External Connectivity");
    b.table(
        &CONNECTIVITY_HEADERS,
        rows(&[
            &["Automation Server", "Qualys Cloud", "Vulnerability and Compliance Scanning"],
            &["Automation Server", "CrowdStrike", "Antivirus reporting"],
            &["Automation Server", "Linux Patching Repos", "Patch downloads"],
            &["Automation Server", ctx.platform.pick("ECR", "ACR"), "Docker image updates"],
            &["Automation Server", "ServiceNow", "CMDB enrichment"],
        ]),
        &CONNECTIVITY_WIDTHS,
    );

    b.h2("11.3 Jump Server");
    b.h3("11.3.1 Overview");
    b.para("Jump servers provide the ability for NTT to install tools for application management and connect to other servers and devices via RDP or SSH protocols.");

    b.h3("11.3.2 Design Principles");
    b.bullets([
        "All jump servers deployed on Windows Server 2019 or later",
        "Deployed in both Production and DR regions for redundancy",
        "Hardened per NTT security standards",
    ]);

    b.h3("11.3.3 Servers");
    b.table(
        &SERVER_HEADERS,
        rows(&[
            &["Jump Server 1", "Production", "Windows Server 2019", "4", "8", "100 GB"],
            &["Jump Server 2", "DR", "Windows Server 2019", "4", "8", "100 GB"],
        ]),
        &[1800, 1440, 2160, 960, 1080, 1080],
    );

    b.h3("11.3.4 External Connectivity");
    b.table(
        &CONNECTIVITY_HEADERS,
        rows(&[
            &["Jump Servers", "Qualys Cloud", "Vulnerability and Compliance Scanning"],
            &["Jump Servers", "CrowdStrike", "Antivirus reporting"],
            &["Jump Servers", "Windows Patching", "Patch download from Microsoft"],
        ]),
        &CONNECTIVITY_WIDTHS,
    );
    b.page_break();
}

pub(super) fn patching(ctx: &RenderContext, b: &mut Blocks) {
    b.h1("12. Patching");
    b.para("This section covers the tools and procedures for patching. The following principles apply to all system patching:");
    b.bullets([
        "Integration and Pre-production environments will usually be patched before Production",
        "Security patches are applied on a daily basis to reduce risk",
        "Standard patches are applied on a monthly basis",
        "Emergency / critical patches are applied ad-hoc where required",
        "When systems are redundant, patching is done with 1 hour offset between nodes to avoid general downtime",
    ]);

    b.h2("12.1 Patching Tools");
    let mut tools = rows(&[
        &["Windows OS", "WSUS for Windows, orchestrated by SaltStack"],
        &["Linux OS", "Linux repository server with SaltStack orchestration"],
        &["Databases", "Manually using database tools"],
    ]);
    tools.push(vec![
        format!("{} Services", ctx.platform.label()),
        "Managed by cloud provider (auto-patched)".to_string(),
    ]);
    b.table(&["Element", "Tool / Method"], tools, &[3600, 5760]);

    b.h2("12.2 Windows - WSUS");
    b.para(
        "WSUS servers will be used to manage Microsoft updates, including reporting and approvals of patches. \
         Patching will be orchestrated by SaltStack, but all Windows servers will download the updates from WSUS repositories.",
    );

    b.h2("12.3 Linux - Repo Server");
    b.para(format!(
        "Linux repository server centralizes Linux updates from a single place, providing a reporting layer. {}",
        ctx.platform.pick(
            "Patching execution is orchestrated through SaltStack automation.",
            "Patching is orchestrated through SaltStack automation for regions where it is available.",
        )
    ));

    b.h2("12.4 Patching Strategy");
    b.table(
        &["Workload", "Environment", "Component", "Patching Window"],
        rows(&[
            &["[Workload 1]", "Production", "OS", "[To be defined]"],
            &["[Workload 1]", "DR", "OS", "[To be defined]"],
            &["[Workload 2]", "Production", "Database", "[To be defined]"],
        ]),
        &[2400, 1920, 1920, 3120],
    );
    b.page_break();
}

pub(super) fn security_hardening(ctx: &RenderContext, b: &mut Blocks) {
    let p = ctx.platform;
    b.h1("13. Security and Hardening");
    b.para(
        "The security architecture follows a defense-in-depth approach with multiple layers of security controls. \
         The following hardening policies will be applied:",
    );

    b.h2("13.1 Administration Users");
    b.para(
        "Restrictive admin user access to operating systems and databases. All connections to customer environments use the AMZ connection pool servers \
         with user access control and session recording (XTAM PAM). As all sessions are tracked and recorded, named users in the customer infrastructure \
         are not required. User identification is done at connection level and later all actions can be traced.",
    );

    b.h2("13.2 User Management");
    b.para(
        "Define the types of users that will access the platform and how they will be managed (locally or federated). \
         Specific users, roles, or permission management required inside the project that affects operations should be documented.",
    );

    b.h2("13.3 Accessing the Platform");
    b.para("The following mechanisms are used to securely access the platform:");
    b.bullets([
        "VPN - Encrypted IPsec tunnels for site-to-site and remote access",
        "PAM (XTAM) - Privileged Access Management for all administrative sessions",
        "Jump Servers - Bastion hosts for RDP/SSH connectivity",
        "SSL/TLS - All web communications use SSL encryption",
    ]);

    b.h2("13.4 Software Security");
    b.para(
        "Software installed on the platform is kept secure through regular patching (refer to Patching section), vulnerability scanning via Qualys, \
         and endpoint protection via CrowdStrike or equivalent solution.",
    );

    b.h2("13.5 Infrastructure Security");
    b.info_box(
        "Security Framework",
        "The security design aligns with the shared responsibility model and implements controls at the network, identity, data, and application layers.",
    );
    b.table(
        &["Security Layer", "Control", "Implementation"],
        rows(&[
            &["Network", "Segmentation", p.pick("VPC Subnets, Security Groups, NACLs", "VNet Subnets, NSGs, Azure Firewall")],
            &["Network", "Encryption in Transit", "TLS 1.2+, IPsec VPN"],
            &["Network", "Zone Isolation", "Separate subnets for CSZ, PSZ, AMZ"],
            &["Identity", "Access Management", p.pick("IAM Policies, MFA, SSO", "Azure AD, RBAC, MFA, SSO")],
            &["Identity", "Privileged Access", "PAM (XTAM) with session recording"],
            &["Data", "Encryption at Rest", p.pick("KMS, S3 Encryption, EBS Encryption", "Azure Key Vault, Storage Encryption, Disk Encryption")],
            &["Monitoring", "Threat Detection", p.pick("GuardDuty, SecurityHub", "Microsoft Sentinel, Defender for Cloud")],
            &["Audit", "Logging", p.pick("CloudTrail, VPC Flow Logs", "Activity Logs, NSG Flow Logs")],
            &["Endpoint", "Protection", "CrowdStrike / Endpoint Detection and Response"],
            &["Vulnerability", "Scanning", "Qualys Cloud for vulnerability and compliance scanning"],
        ]),
        &[1800, 2100, 5460],
    );

    b.h2("13.6 Data Classification and Management");
    b.para("Data classification and handling mechanisms should be documented:");
    b.bullets([
        "Specify the classification applied to data stored in the platform",
        "List specific data handling mechanisms (e.g., data anonymization, encryption)",
        "List policies for data within the platform (e.g., online data retention, secure deletion)",
        "List certifications the platform must fulfil (e.g., PCI compliance, ISO 27001) and their impact on data and operations",
    ]);
}

pub(super) fn has_security_requirements(ctx: &RenderContext) -> bool {
    !ctx.analysis.security_requirements.is_empty()
}

pub(super) fn security_requirements(ctx: &RenderContext, b: &mut Blocks) {
    b.para_with(
        "Additional security requirements identified from the SOW:",
        ParagraphStyle::default().space_before(200),
    );
    b.bullets(ctx.analysis.security_requirements.iter().cloned());
}

pub(super) fn has_compliance_requirements(ctx: &RenderContext) -> bool {
    !ctx.analysis.compliance_requirements.is_empty()
}

pub(super) fn compliance_requirements(ctx: &RenderContext, b: &mut Blocks) {
    b.h2("13.7 Compliance Requirements");
    b.para("The following compliance and regulatory requirements have been identified from the SOW:");
    b.bullets(ctx.analysis.compliance_requirements.iter().cloned());
}

pub(super) fn networking_solution(ctx: &RenderContext, b: &mut Blocks) {
    let p = ctx.platform;
    b.page_break();
    b.h1("14. Networking Solution");

    b.h2("14.1 Connectivity Overview");
    b.para("The following connectivity methods are employed:");
    if p.is_aws() {
        b.bullets([
            "Site-to-Site VPN: IPsec tunnels for secure hybrid connectivity",
            "Transit Gateway: Central hub for VPC interconnection",
            "VPC Peering: Direct connectivity between VPCs where required",
            "VPC Endpoints: Private access to AWS services",
            "Direct Connect: Dedicated private connectivity (if applicable)",
        ]);
    } else {
        b.bullets([
            "Site-to-Site VPN: IPsec tunnels for secure hybrid connectivity",
            "ExpressRoute: Dedicated private connectivity (if applicable)",
            "VNet Peering: Direct connectivity between VNets",
            "Private Endpoints: Private access to Azure services",
            "Virtual WAN: Centralized hub for network connectivity",
        ]);
    }

    b.h2("14.2 Network Diagram");
    b.info_box(
        "Network Diagram",
        format!(
            "Insert a detailed network diagram to explain the network topology. If the network part is complex or key to understanding the infrastructure setup, \
             a separate network diagram is required. For example, to explain how {} works.",
            p.pick("Transit Gateway", "Virtual WAN")
        ),
    );
    b.placeholder("[Network Diagram Placeholder]");

    b.h2("14.3 Traffic Flow Summary");
    let monitoring_path = format!("Internal > {}", p.pick("CloudWatch", "Azure Monitor"));
    let backup_path = format!("Private > {}", p.pick("S3 Endpoint", "Storage Account"));
    b.table(
        &["Traffic Flow", "Source", "Destination", "Protocol", "Path"],
        rows(&[
            &["Management", "Admin (AMZ)", "Cloud Resources", "SSH/RDP/HTTPS", "VPN > PSZ > Workloads"],
            &["Application", "Users", "Web Servers", "HTTPS (443)", "Internet > LB > App"],
            &["Database", "App Servers", "DB Servers", "TCP (3306/5432)", "Private Subnet"],
            &["Monitoring", "All Resources", "Monitoring (PSZ)", "HTTPS/WMI/SNMP", monitoring_path.as_str()],
            &["Backup", "Servers", "Object Storage", "HTTPS", backup_path.as_str()],
            &["Automation", "Salt/Ansible (PSZ)", "Managed Servers", "SSH/WinRM", "PSZ > CSZ"],
        ]),
        &[1560, 1680, 1680, 1680, 2760],
    );
    b.page_break();

    b.h1("15. Key Components");
    b.para("This section provides a detailed description of the major solution components and their configuration approach.");
}

pub(super) fn has_components(ctx: &RenderContext) -> bool {
    !ctx.analysis.components.is_empty()
}

pub(super) fn components_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    for component in &ctx.analysis.components {
        b.h3(component.clone());
        b.para(component_description(component, ctx.platform));
    }
}

pub(super) fn default_components(_: &RenderContext, b: &mut Blocks) {
    b.italic("Key components will be detailed based on the final architecture design.");
}

pub(super) fn high_availability(ctx: &RenderContext, b: &mut Blocks) {
    b.page_break();
    b.h1("16. High Availability Design");
    b.para("The solution is designed for high availability with redundancy at multiple levels to minimize single points of failure.");
    let strategy = if ctx.platform.is_aws() {
        rows(&[
            &["VPC Infrastructure", "Multi-AZ deployment", "N/A", "Immediate"],
            &["NAT Gateway", "One per AZ", "0", "Automatic failover"],
            &["VPN Tunnels", "Dual tunnel configuration", "0", "< 60 seconds"],
            &["Transit Gateway", "Multi-AZ by default", "0", "Automatic"],
            &["Compute", "Auto Scaling Group across AZs", "Near 0", "< 5 minutes"],
            &["PSZ Services", "DR region collectors + automation", "0", "< 15 minutes"],
            &["Backup", "Cross-region replication", "24 hours", "< 4 hours"],
        ])
    } else {
        rows(&[
            &["VNet Infrastructure", "Multi-region deployment", "N/A", "Immediate"],
            &["VPN Gateway", "Active-Active configuration", "0", "Automatic failover"],
            &["Azure Firewall", "Availability Zones", "0", "Automatic"],
            &["Load Balancer", "Zone-redundant", "0", "Automatic"],
            &["Compute", "Virtual Machine Scale Sets / Availability Sets", "Near 0", "< 5 minutes"],
            &["PSZ Services", "DR region collectors + automation", "0", "< 15 minutes"],
            &["Backup", "GRS Recovery Vaults", "24 hours", "< 4 hours"],
        ])
    };
    b.table(
        &["Component", "HA Strategy", "RPO", "RTO"],
        strategy,
        &[2400, 3000, 1680, 2280],
    );
    b.page_break();
}
