//! Chapters 6 to 9: solution architecture, naming, AMZ/PAM and infrastructure.

use crate::domain::{RenderContext, Server};

use super::super::blocks::{Blocks, rows};
use super::super::helpers::{or_default, project_short_name};

pub(super) fn solution_architecture(ctx: &RenderContext, b: &mut Blocks) {
    let label = ctx.platform.label();
    b.h1("6. Solution Architecture");

    b.h2("6.1 The Solution");
    b.para(format!(
        "The solution deploys a comprehensive {label} cloud infrastructure for {}. \
         The architecture is designed following the hub-and-spoke model with distinct security zones including \
         Customer Security Zone (CSZ), Provider Service Zone (PSZ), and Administration Management Zone (AMZ).",
        ctx.client_name
    ));

    b.h2("6.2 Architecture Diagram");
    b.info_box(
        "Architecture Diagram",
        format!(
            "Insert the solution architecture diagram here. The diagram should illustrate the network topology, component placement, security zones (CSZ, PSZ, AMZ), and connectivity flows. \
             Use draw.io, Lucidchart, or {label} native diagramming tools. A separate diagram can be used for each environment or a combined diagram if components are not numerous."
        ),
    );
    b.placeholder("[Architecture Diagram Placeholder]");

    b.h2("6.3 Component Overview");
    b.para("The following table summarizes the key components of the solution architecture:");
    if ctx.platform.is_aws() {
        b.table(
            &["Component", "AWS Service", "Purpose", "Quantity"],
            rows(&[
                &["Virtual Network", "Amazon VPC", "Network isolation and segmentation", "1+"],
                &["Routing Hub", "Transit Gateway", "Centralized route management", "1"],
                &["Internet Access", "Internet Gateway", "Public internet connectivity", "1 per VPC"],
                &["NAT", "NAT Gateway", "Outbound internet for private subnets", "1+ per AZ"],
                &["VPN", "Site-to-Site VPN", "Hybrid cloud connectivity", "As required"],
                &["Firewall", "Security Groups / NACLs", "Network access control", "Per resource"],
                &["Monitoring", "CloudWatch", "Infrastructure monitoring", "1"],
                &["Audit", "CloudTrail", "API activity logging", "1"],
                &["Backup", "AWS Backup", "Centralized backup management", "1"],
                &["IaC", "Terraform / CloudFormation", "Infrastructure as Code", "1"],
            ]),
            &[1800, 2100, 3360, 1200],
        );
    } else {
        b.table(
            &["Component", "Azure Service", "Purpose", "Quantity"],
            rows(&[
                &["Virtual Network", "Azure VNet", "Network isolation and segmentation", "1+"],
                &["Routing Hub", "Virtual WAN / VNet Peering", "Centralized route management", "1"],
                &["Firewall", "Azure Firewall", "Network traffic filtering", "1+"],
                &["NAT", "NAT Gateway", "Outbound internet for private subnets", "1+ per region"],
                &["VPN", "VPN Gateway", "Hybrid cloud connectivity", "As required"],
                &["Access Control", "Network Security Groups", "Network access control", "Per subnet"],
                &["Monitoring", "Azure Monitor", "Infrastructure monitoring", "1"],
                &["Security", "Microsoft Sentinel", "Security analytics", "1"],
                &["Backup", "Recovery Service Vaults", "Centralized backup management", "1+"],
                &["IaC", "Terraform", "Infrastructure as Code", "1"],
            ]),
            &[1800, 2400, 3060, 1200],
        );
    }

    b.h2("6.4 Software Components, Versions, and Licenses");
}

const SOFTWARE_HEADERS: [&str; 6] = ["Area", "Product", "Version", "License Type", "Responsible", "EoS/EoL"];
const SOFTWARE_WIDTHS: [usize; 6] = [1560, 1920, 1200, 1680, 1560, 1440];

pub(super) fn has_software_components(ctx: &RenderContext) -> bool {
    !ctx.analysis.software_components.is_empty()
}

pub(super) fn software_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    let body = ctx
        .analysis
        .software_components
        .iter()
        .map(|sc| {
            vec![
                sc.area.clone(),
                sc.product.clone(),
                or_default(&sc.version, "TBD").to_string(),
                or_default(&sc.license_type, "TBD").to_string(),
                or_default(&sc.responsible, "TBD").to_string(),
                "TBD".to_string(),
            ]
        })
        .collect();
    b.table(&SOFTWARE_HEADERS, body, &SOFTWARE_WIDTHS);
}

pub(super) fn default_software(ctx: &RenderContext, b: &mut Blocks) {
    let linux = ctx.platform.pick("Amazon Linux 2023", "Ubuntu Linux 22.04");
    b.table(
        &SOFTWARE_HEADERS,
        rows(&[
            &["Operating System", "Windows Server 2022", "Latest SP", "Pay as Go / Reserved", "NTT / Customer", "TBD"],
            &["Operating System", linux, "Latest", "Pay as Go / Reserved", "NTT / Customer", "TBD"],
            &["Monitoring", "LogicMonitor", "Latest", "SaaS", "NTT", "N/A"],
            &["Automation", "SaltStack / Ansible", "Latest", "Open Source", "NTT", "N/A"],
            &["IaC", "Terraform", "Latest", "Open Source", "NTT", "N/A"],
            &["Database", "SQL Server / PostgreSQL", "TBD", "Pay as Go / Reserved", "Customer", "TBD"],
        ]),
        &SOFTWARE_WIDTHS,
    );
}

pub(super) fn naming_convention(ctx: &RenderContext, b: &mut Blocks) {
    let short = project_short_name(&ctx.project_name);
    b.page_break();
    b.h1("7. Naming Convention");
    b.para(
        "A basic part of any architecture design is the choice of naming styles and components. Solid naming conventions make designs easier to implement and understand in a collaborative environment. \
         It is also important that component names enable system operations where filters, scripts, and grouping are often used.",
    );
    b.intro("The goals of the naming convention are:");
    b.bullets([
        "Consistency",
        "Clarity",
        "Meaning",
        "Ability to follow an \"order of operations\" type structure",
        "Use the same case for all names when possible",
    ]);

    b.h2("7.1 Cloud Naming and Tagging");
    b.h3("7.1.1 Cloud Resources Naming");
    let example = ctx.platform.pick("prod-apse1-vpc-001", "prod-sea-vnet-001");
    b.info_box(
        "Naming Format",
        format!(
            "Format: {{project}}-{{environment}}-{{region}}-{{resource-type}}-{{identifier}}  Example: {short}-{example}"
        ),
    );
    let resources: [(&str, &str, String); 10] = if ctx.platform.is_aws() {
        [
            ("VPC", "vpc", format!("{short}-prod-apse1-vpc-001")),
            ("Subnet", "sn", format!("{short}-prod-apse1-sn-pub-001")),
            ("Security Group", "sg", format!("{short}-prod-apse1-sg-web-001")),
            ("Transit Gateway", "tgw", format!("{short}-prod-apse1-tgw-001")),
            ("NAT Gateway", "natgw", format!("{short}-prod-apse1-natgw-001")),
            ("Route Table", "rt", format!("{short}-prod-apse1-rt-pub-001")),
            ("VPN Gateway", "vpngw", format!("{short}-prod-apse1-vpngw-001")),
            ("S3 Bucket", "s3", format!("{short}-prod-apse1-s3-backup-001")),
            ("EC2 Instance", "ec2", format!("{short}-prod-apse1-ec2-web-001")),
            ("IAM Role", "role", format!("{short}-prod-role-ec2-ssm")),
        ]
    } else {
        [
            ("Virtual Network", "vnet", format!("{short}-prod-sea-vnet-001")),
            ("Subnet", "sn", format!("{short}-prod-sea-sn-pub-001")),
            ("NSG", "nsg", format!("{short}-prod-sea-nsg-web-001")),
            ("Resource Group", "rg", format!("{short}-prod-sea-rg-001")),
            ("VPN Gateway", "vpngw", format!("{short}-prod-sea-vpngw-001")),
            ("Azure Firewall", "afw", format!("{short}-prod-sea-afw-001")),
            ("Route Table", "rt", format!("{short}-prod-sea-rt-pub-001")),
            ("Storage Account", "st", format!("{short}prodseast001")),
            ("Virtual Machine", "vm", format!("{short}-prod-sea-vm-web-001")),
            ("Recovery Vault", "rsv", format!("{short}-prod-sea-rsv-001")),
        ]
    };
    b.table(
        &["Resource Type", "Abbreviation", "Example"],
        resources
            .into_iter()
            .map(|(kind, abbr, example)| vec![kind.to_string(), abbr.to_string(), example])
            .collect(),
        &[2400, 2100, 4860],
    );

    b.h3("7.1.2 Cloud Resources Tagging");
    b.para("All resources must be tagged with the following mandatory tags for operational and cost management:");
    let mut tags = rows(&[&["Project", "Project name identifier"]]);
    tags[0].push(ctx.project_name.clone());
    tags.extend(rows(&[
        &["Environment", "Deployment environment", "Production / Staging / Development"],
        &["Owner", "Resource owner or team", "NTT / Customer"],
        &["CostCenter", "Cost allocation center", "[Cost Center ID]"],
        &["ManagedBy", "Management team", "NTT DATA"],
    ]));
    tags.push(vec![
        "CreatedDate".into(),
        "Date of resource creation".into(),
        ctx.formatted_date(),
    ]);
    tags.extend(rows(&[&["Application", "Application supported", "[Application Name]"]]));
    b.table(&["Tag Key", "Description", "Example Value"], tags, &[2400, 3960, 3000]);

    b.h3("7.2 Active Directory Domain Naming");
    b.para("Active Directory domain naming follows the customer's existing domain naming standard. The domain structure will be determined during the discovery phase.");

    b.h3("7.3 Hostname Naming");
    b.para("Server hostnames follow a standardized convention for easy identification:");
    b.info_box(
        "Hostname Format",
        format!("Format: {{project}}{{env}}{{role}}{{seq}}  Example: {short}prodweb01"),
    );

    b.h3("7.4 Service and Admin Users Naming");
    b.para("Service accounts and administrative users follow naming conventions for consistency and auditability:");
    let mut accounts = rows(&[
        &["Service Account", "svc-{application}-{purpose}", "svc-monitoring-readonly"],
        &["Admin Account", "adm-{firstname}-{lastname}", "adm-john-doe"],
    ]);
    accounts.push(vec![
        "Break Glass Account".into(),
        "bg-{project}-{seq}".into(),
        format!("bg-{short}-01"),
    ]);
    accounts.extend(rows(&[&["PAM Managed Account", "nttrmadm / nttrmadm2", "nttrmadm"]]));
    b.table(&["Account Type", "Naming Pattern", "Example"], accounts, &[2400, 3000, 3960]);
    b.page_break();
}

pub(super) fn management_zone(ctx: &RenderContext, b: &mut Blocks) {
    b.h1("8. NTT Management AMZ Overview");
    b.para("The Administration Management Zone (AMZ) is the NTT DATA secure management environment that provides centralized administration, privileged access, and operational tooling for managing customer infrastructure.");

    b.h2("8.1 Features");
    b.bullets([
        "Centralized administration of all managed customer environments",
        "Secure privileged access through PAM (Privileged Access Management)",
        "Session recording and audit trail for all administrative access",
        "Automated password rotation and credential management",
        "Integration with ServiceNow for ITSM workflows",
    ]);

    b.h2("8.2 How Does AMZ Work?");
    b.para(
        "NTT DATA engineers connect to customer environments in a secure way using the PAM solution hosted in the AMZ. \
         All connections use the AMZ connection pool servers with user access control and session recording. \
         A jump server is in place for non-standard services.",
    );
    b.info_box(
        "AMZ Connectivity",
        "Direct connectivity from AMZ to customer workloads requires the following ports: SSH TCP 22, RDP TCP 3389, WinRM TCP 5986, LDAPS TCP 636, ICMP. \
         These ports are required by the PAM master nodes for session manager and job manager.",
    );

    b.h2("8.3 Role-based Access Control");
    b.para(format!(
        "Access to {} resources is controlled through role-based access control (RBAC). \
         {} are assigned based on the principle of least privilege. \
         All administrative access is routed through the AMZ for audit and compliance purposes.",
        ctx.platform.label(),
        ctx.platform.pick("AWS IAM policies", "Azure RBAC roles")
    ));

    b.h2("8.4 Privileged Access Management (PAM)");
    b.para(
        "Privileged Access Management solution (XTAM) is used to access customer environments and services. \
         It is an agentless account and password vault, session monitoring and task execution enterprise solution.",
    );

    b.h3("8.4.1 Privileged Account Management");
    b.bullets([
        "Strong password requirements with automated password rotation",
        "\"No password access\" built into core - engineers never see actual credentials",
        "Identity Vault to secure, organize and share privileged account access",
        "Customer-specific vaults and individual personal vaults",
    ]);

    b.h3("8.4.2 Privileged Session Management");
    b.bullets([
        "Secure, interactive remote sessions within standard web browser or native SSH clients",
        "Video, Keystroke, and Clipboard recording",
        "Workflow approval and Command Control",
        "Robust event tracking and reporting with one year retention",
    ]);

    b.h3("8.4.3 Privileged Job Management");
    b.bullets([
        "Automated task execution for routine maintenance",
        "Scheduled credential rotation",
        "Integration with ITSM for automated incident response",
    ]);

    b.h2("8.5 PAM Infrastructure Requirements");
    b.table(
        &["Parameter", "Specification"],
        rows(&[
            &["Operating System", "Ubuntu 20.04 LTS"],
            &["CPU", "2 vCPU"],
            &["RAM", "4 GB"],
            &["OS Disk", "30 GB"],
            &["PAM Data Disk", "20 GB (/opt/xtam)"],
        ]),
        &[3600, 5760],
    );

    b.h2("8.6 PAM Connectivity Requirements");
    b.table(
        &["From", "To", "Ports / Protocols", "Description"],
        rows(&[
            &["NTT DATA AMZ IPs", "Customer Workloads", "SSH TCP 22, RDP TCP 3389, WinRM TCP 5986, LDAPS TCP 636, ICMP", "PAM session manager and job manager"],
            &["NTT DATA AMZ IPs", "Customer XTAM Remote Nodes", "SSH TCP 22, HTTP Proxy TCP 8081, XTAM TCP 4822, ICMP", "Access from AMZ to remote nodes"],
            &["Customer XTAM Remote Nodes", "Customer Workloads", "SSH TCP 22, RDP TCP 3389, WinRM TCP 5986, LDAPS TCP 636, ICMP", "Session and job manager ports"],
            &["XTAM Remote Servers", "bin.xtontech.com", "HTTPS TCP 443", "XTAM setup and updates"],
        ]),
        &[2100, 2100, 3060, 2100],
    );

    b.h2("8.7 Compliance");
    b.para("All AMZ operations comply with customer, industry, and government regulations. Session recordings and credential management meet audit requirements for SOC2, ISO 27001, PCI-DSS, and GDPR compliance frameworks.");
    b.page_break();
}

pub(super) fn infrastructure_foundation(ctx: &RenderContext, b: &mut Blocks) {
    let label = ctx.platform.label();
    let aws = ctx.platform.is_aws();
    b.h1("9. Infrastructure Architecture");

    b.h2("9.1 Overview");
    b.para(format!(
        "This section details the {label} infrastructure components, networking, compute, storage, and identity services that form the foundation of the solution."
    ));

    b.h2(format!("9.2 {label} Basics"));
    b.para(format!(
        "{} provides a comprehensive cloud platform with global data center infrastructure. \
         The solution leverages {label} regions and availability zones for high availability and disaster recovery.",
        ctx.platform.display_name()
    ));

    b.h2(format!("9.3 {label} Diagram"));
    b.info_box(
        format!("{label} Infrastructure Diagram"),
        format!(
            "Insert the {label} infrastructure diagram showing the detailed layout of all cloud components, security zones, and connectivity. \
             Relationship with external entities should be drawn on the diagram if they are part of the solution."
        ),
    );
    b.placeholder(format!("[{label} Infrastructure Diagram Placeholder]"));

    b.h2(format!("9.4 {label} Regions"));
    let primary = ctx
        .project
        .region()
        .unwrap_or(ctx.platform.pick("ap-southeast-1", "Southeast Asia"));
    b.table(
        &["Environment", "Region", "Purpose"],
        vec![
            vec!["Production".into(), primary.into(), "Primary production workloads".into()],
            vec!["Disaster Recovery".into(), "[DR Region]".into(), "Business continuity and DR".into()],
        ],
        &[2400, 3360, 3600],
    );

    b.h2("9.5 Network");
    b.h3(format!(
        "9.5.1 {}",
        ctx.platform.pick("Amazon VPC", "Azure Virtual Network")
    ));
    b.para(format!(
        "The network design implements a hub-and-spoke topology using {} as the central routing hub. \
         This provides centralized traffic management, simplified connectivity, and consistent security policy enforcement.",
        ctx.platform.pick("AWS Transit Gateway", "Azure Virtual WAN")
    ));

    b.h3(format!("9.5.2 {}", ctx.platform.pick("VPC Subnets", "Azure Subnets")));
    b.para("Subnets are segmented by function and security zone. The following subnet types are deployed:");
    b.bullets([
        "Public Subnets - Internet-facing resources (load balancers, bastion hosts)",
        "Private Subnets - Application tier workloads",
        "Management Subnets - Management and monitoring tools",
        "PSZ Subnets - Provider Service Zone (monitoring, automation, jump servers)",
    ]);
    if aws {
        b.bullet("TGW Subnets - Transit Gateway attachments");
    } else {
        b.bullet("AzureFirewallSubnet - Dedicated subnet for Azure Firewall");
        b.bullet("GatewaySubnet - Dedicated subnet for VPN Gateway");
    }

    b.h3(format!(
        "9.5.3 {}",
        ctx.platform.pick("VPN Gateways", "Azure VPN Gateways")
    ));
    b.para("VPN connectivity provides secure hybrid cloud connectivity between on-premises infrastructure and the cloud environment.");
}

pub(super) fn has_vpn_connections(ctx: &RenderContext) -> bool {
    !ctx.analysis.vpn_connections.is_empty()
}

pub(super) fn vpn_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    b.bullets(ctx.analysis.vpn_connections.iter().cloned());
}

pub(super) fn default_vpn(_: &RenderContext, b: &mut Blocks) {
    b.italic("VPN tunnel specifications will be finalized during the detailed design phase.");
}

pub(super) fn network_security(ctx: &RenderContext, b: &mut Blocks) {
    b.h3("9.5.4 Firewall");
    b.para(ctx.platform.pick(
        "AWS Network Firewall and/or third-party firewall appliances (e.g., FortiGate) provide stateful traffic inspection, IPS/IDS, and application-layer filtering.",
        "Azure Firewall and/or third-party Network Virtual Appliances (NVAs) provide stateful traffic inspection, IPS/IDS, and application-layer filtering.",
    ));

    b.h3(format!(
        "9.5.5 {}",
        ctx.platform.pick("Security Groups / NACLs", "Azure Network Security Groups")
    ));
    b.para(ctx.platform.pick(
        "Security Groups provide stateful instance-level firewall rules. NACLs provide stateless subnet-level access control as an additional defense layer.",
        "Network Security Groups (NSGs) contain security rules that allow or deny inbound/outbound traffic. Rules are evaluated by priority (lower number = higher priority).",
    ));

    b.h3("9.5.6 IP Address Allocation");
    b.h3("Production Site");
}

pub(super) fn has_network_ranges(ctx: &RenderContext) -> bool {
    !ctx.analysis.network_ranges.is_empty()
}

pub(super) fn ranges_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    b.table(
        &["CIDR Block", "Purpose", "Environment"],
        ctx.analysis
            .network_ranges
            .iter()
            .map(|cidr| vec![cidr.clone(), "To be determined".into(), "Production".into()])
            .collect(),
        &[2400, 4560, 2400],
    );
}

pub(super) fn default_ranges(_: &RenderContext, b: &mut Blocks) {
    b.italic("IP address allocation for Production site will be determined during the detailed design phase.");
}

pub(super) fn network_services_and_storage(ctx: &RenderContext, b: &mut Blocks) {
    let short = project_short_name(&ctx.project_name);
    let aws = ctx.platform.is_aws();

    b.h3("DR Site");
    b.italic("IP address allocation for DR site will be determined during the detailed design phase.");

    b.h3("9.5.7 NTP Configuration");
    b.para(ctx.platform.pick(
        "Amazon Time Sync Service provides a reliable NTP source accessible from within the VPC via the link-local address 169.254.169.123. All instances will synchronize time using this service.",
        "Azure VMs use the Hyper-V host time synchronization by default. For domain-joined machines, Active Directory domain controllers serve as the NTP source.",
    ));

    b.h3("9.5.8 DNS and Name Resolution");
    b.para(ctx.platform.pick(
        "Amazon Route 53 Resolver provides DNS resolution within the VPC. Private Hosted Zones are used for internal name resolution. DNS forwarding rules are configured for hybrid DNS resolution with on-premises infrastructure.",
        "Azure DNS provides name resolution within the VNet. Azure Private DNS Zones are used for internal and Private Endpoint name resolution. Conditional forwarding is configured for hybrid DNS resolution.",
    ));
    b.info_box(
        "Note",
        "Host file will not be used unless a critical incident is raised and only as a workaround measure.",
    );

    b.h2(format!("9.6 {}", ctx.platform.pick("AWS Storage", "Azure Storage")));
    b.h3(format!(
        "9.6.1 {}",
        ctx.platform.pick("S3 Buckets / EBS Volumes", "Storage Accounts")
    ));
    if aws {
        b.table(
            &["Storage Type", "Name", "Purpose", "Replication", "Encryption"],
            vec![
                vec!["S3 Bucket".into(), format!("{short}-prod-backup"), "Backup storage".into(), "Cross-Region".into(), "SSE-KMS".into()],
                vec!["S3 Bucket".into(), format!("{short}-prod-logs"), "Log archival".into(), "Same-Region".into(), "SSE-S3".into()],
                vec!["EBS".into(), "Application volumes".into(), "Server storage".into(), "Within AZ".into(), "KMS encrypted".into()],
            ],
            &[1560, 2160, 1920, 1560, 2160],
        );
    } else {
        let rg = format!("{short}-rg");
        b.table(
            &["Storage Account", "Kind", "Replication", "Resource Group", "Description"],
            vec![
                vec![format!("{short}prodst001"), "StorageV2".into(), "GRS".into(), rg.clone(), "Production data storage".into()],
                vec![format!("{short}prodstbkp"), "StorageV2".into(), "GRS".into(), rg.clone(), "Backup storage".into()],
                vec![format!("{short}prodstlog"), "StorageV2".into(), "LRS".into(), rg, "Diagnostics and log storage".into()],
            ],
            &[1920, 1440, 1200, 1800, 3000],
        );
    }

    b.h2(format!("9.7 {}", ctx.platform.pick("AWS Compute", "Azure Compute")));
    b.h3("9.7.1 Available VM Profiles and Templates");
    if aws {
        b.table(
            &["Type", "Instance Families", "Description"],
            rows(&[
                &["General Purpose", "T3, M5, M6i, M7i", "Balanced CPU-to-memory ratio. Ideal for web servers, small/medium databases."],
                &["Compute Optimized", "C5, C6i, C7i", "High CPU-to-memory ratio. Good for batch processing, application servers."],
                &["Memory Optimized", "R5, R6i, R7i, X2idn", "High memory-to-CPU ratio. Great for databases, in-memory analytics."],
                &["Storage Optimized", "I3, I3en, D3", "High disk throughput and IO. Ideal for big data, data warehousing."],
                &["Accelerated Computing", "P4, G5, Inf1", "GPU-based instances for ML/AI and graphic rendering."],
            ]),
            &[2400, 2760, 4200],
        );
    } else {
        b.table(
            &["Type", "Sizes", "Description"],
            rows(&[
                &["General Purpose", "B, Dsv3, Dv3, Dasv4, Dav4, Dv5, Dsv5", "Balanced CPU-to-memory ratio. Ideal for testing, small-medium databases, low-medium traffic web servers."],
                &["Compute Optimized", "F, Fs, Fsv2, FX", "High CPU-to-memory ratio. Good for medium traffic web servers, batch processes, application servers."],
                &["Memory Optimized", "Esv3, Ev3, Easv4, Eav4, Ev5, Esv5, Mv2", "High memory-to-CPU ratio. Great for relational databases, large caches, in-memory analytics."],
                &["Storage Optimized", "Lsv2, Lsv3, Lasv3", "High disk throughput and IO. Ideal for Big Data, SQL, NoSQL databases."],
                &["GPU", "NC, NCv3, ND, NV, NVv4", "Specialized VMs for heavy graphic rendering and deep learning."],
                &["High Performance", "HB, HBv3, HC", "Fastest CPU virtual machines with optional RDMA network interfaces."],
            ]),
            &[2400, 2760, 4200],
        );
    }

    b.h3("9.7.2 Instances - Production Site");
}

const SERVER_WIDTHS: [usize; 6] = [1560, 1920, 1560, 1560, 1080, 1080];

fn server_headers(ctx: &RenderContext) -> [String; 6] {
    [
        "Hostname".to_string(),
        "Description".to_string(),
        format!("{} Size", ctx.platform.label()),
        "OS".to_string(),
        "vCPU".to_string(),
        "Memory (GiB)".to_string(),
    ]
}

fn server_table(ctx: &RenderContext, b: &mut Blocks, servers: Vec<&Server>) {
    let headers = server_headers(ctx);
    let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
    let body = if servers.is_empty() {
        rows(&[&["[To be defined]", "[Server role]", "[Instance type]", "[OS Version]", "[vCPU]", "[RAM]"]])
    } else {
        servers
            .into_iter()
            .map(|s| {
                vec![
                    or_default(&s.hostname, "[TBD]").to_string(),
                    or_default(&s.description, &s.role).to_string(),
                    or_default(&s.storage, "[Instance type]").to_string(),
                    or_default(&s.os, "[OS Version]").to_string(),
                    or_default(&s.vcpu, "[vCPU]").to_string(),
                    or_default(&s.memory, "[RAM]").to_string(),
                ]
            })
            .collect()
    };
    b.table(&headers, body, &SERVER_WIDTHS);
}

pub(super) fn has_production_servers(ctx: &RenderContext) -> bool {
    ctx.analysis.servers.iter().any(|s| !s.is_dr())
}

pub(super) fn production_servers(ctx: &RenderContext, b: &mut Blocks) {
    server_table(ctx, b, ctx.analysis.servers.iter().filter(|s| !s.is_dr()).collect());
}

pub(super) fn default_production_servers(ctx: &RenderContext, b: &mut Blocks) {
    server_table(ctx, b, Vec::new());
    b.info_box(
        "Note",
        "Server specifications will be finalized after the HLD is approved and detailed sizing is completed.",
    );
}

pub(super) fn dr_servers(ctx: &RenderContext, b: &mut Blocks) {
    b.h3("9.7.3 Instances - DR Site");
    server_table(ctx, b, ctx.analysis.servers.iter().filter(|s| s.is_dr()).collect());
}

pub(super) fn compute_placement_and_identity(ctx: &RenderContext, b: &mut Blocks) {
    let label = ctx.platform.label();
    b.h3("9.7.4 Availability Zones");
    if ctx.platform.is_aws() {
        b.para(
            "AWS Availability Zones are physically separate locations within each AWS region that are tolerant to local failures. \
             To ensure resiliency, a minimum of two availability zones are used for critical workloads.",
        );
    } else {
        b.para(
            "Azure Availability Zones are physically separate locations within each Azure region tolerant to local failures. \
             Failures can range from software and hardware failures to events such as earthquakes, floods, and fires. \
             To ensure resiliency, a minimum of three separate availability zones are present in all enabled regions.",
        );
    }

    b.h3(format!(
        "9.7.5 {}",
        ctx.platform.pick("Placement Groups", "Availability Sets")
    ));
    if ctx.platform.is_aws() {
        b.para("Placement groups control how instances are placed on underlying hardware. Spread placement groups distribute instances across distinct hardware to reduce correlated failures.");
    } else {
        b.para(
            "An availability set is a logical grouping of VMs that allows Azure to understand how your application is built to provide for redundancy and availability. \
             Two or more VMs created within an availability set provide a highly available application meeting the 99.95% Azure SLA. \
             There is no cost for the Availability Set itself.",
        );
    }

    b.h2("9.8 Identity and Security");
    b.para(ctx.platform.pick(
        "AWS IAM provides identity and access management. AWS Organizations is used for multi-account governance. SSO integration with customer identity providers is configured as needed.",
        "The subscription is under the designated Azure Active Directory tenant. Azure RBAC provides fine-grained access control to resources.",
    ));

    b.h2(format!("9.9 Other {label} Objects/Services Required"));
    b.italic("Additional cloud-native services required for the project will be documented here based on workload requirements.");

    b.h2("9.10 Operating Systems - OS Specific Settings");
    b.para("Operating system specific configuration and hardening will be applied per NTT standards. Refer to the Security and Hardening section for details.");
    b.page_break();
}
