//! Chapters 10 to 16: VPN, security appliances, SOC, HA, naming, hub
//! routing and the appendix.

use crate::domain::RenderContext;

use super::super::blocks::{Blocks, rows};

const IKE_HEADERS: [&str; 3] = ["Parameter", "Primary", "Alternative"];
const IKE_WIDTHS: [usize; 3] = [2400, 3480, 3480];

pub(super) fn vpn_configuration(_: &RenderContext, b: &mut Blocks) {
    b.h1("10. VPN Configuration");

    b.h2("10.1 Site-to-Site VPN Parameters");
    b.table(
        &["Parameter", "Value"],
        rows(&[
            &["VPN Type", "Route-based (BGP or Static)"],
            &["Number of Tunnels", "2 (Active/Standby or Active/Active)"],
            &["Encryption", "AES-256-GCM"],
            &["Hashing", "SHA-256"],
            &["DH Group", "Group 20 (384-bit ECP)"],
            &["Lifetime (Phase 1)", "28800 seconds (8 hours)"],
            &["Lifetime (Phase 2)", "3600 seconds (1 hour)"],
            &["Dead Peer Detection", "Enabled (10s interval, 3 retries)"],
            &["NAT Traversal", "Enabled"],
            &["Perfect Forward Secrecy", "Enabled (DH Group 20)"],
        ]),
        &[3600, 5760],
    );

    b.h2("10.2 IKE Phase 1 (IKEv2)");
    b.info_box(
        "IKE Phase 1",
        "IKE Phase 1 establishes a secure authenticated communication channel between VPN peers using the Internet Key Exchange protocol.",
    );
    b.table(
        &IKE_HEADERS,
        rows(&[
            &["IKE Version", "IKEv2", "IKEv1 (fallback)"],
            &["Encryption Algorithm", "AES-256-GCM", "AES-256-CBC"],
            &["Integrity Algorithm", "SHA-384", "SHA-256"],
            &["DH Group", "Group 20", "Group 14"],
            &["PRF", "SHA-384", "SHA-256"],
            &["SA Lifetime", "28800 seconds", "86400 seconds"],
            &["Authentication", "Pre-Shared Key", "Certificate"],
        ]),
        &IKE_WIDTHS,
    );

    b.h2("10.3 IKE Phase 2 (IPsec)");
    b.info_box(
        "IKE Phase 2",
        "IKE Phase 2 negotiates the IPsec Security Associations that protect the actual data traffic flowing through the VPN tunnel.",
    );
    b.table(
        &IKE_HEADERS,
        rows(&[
            &["ESP Encryption", "AES-256-GCM", "AES-256-CBC"],
            &["ESP Integrity", "SHA-256", "SHA-384"],
            &["PFS Group", "Group 20", "Group 14"],
            &["SA Lifetime", "3600 seconds", "1800 seconds"],
            &["Replay Detection", "Enabled", "Enabled"],
            &["Mode", "Tunnel", "Tunnel"],
        ]),
        &IKE_WIDTHS,
    );
    b.page_break();

    b.h1("11. Security Appliance Deployment");
    b.h2("11.1 Deployment Configuration");
}

/// True when any listed component names a Fortinet product.
pub(super) fn has_fortinet(ctx: &RenderContext) -> bool {
    ctx.analysis
        .components
        .iter()
        .any(|c| c.to_lowercase().contains("forti"))
}

pub(super) fn fortinet_appliances(ctx: &RenderContext, b: &mut Blocks) {
    let p = ctx.platform;
    b.para("Fortinet security appliances are deployed for centralized security management and logging.");
    b.table(
        &["Appliance", "Instance Type", "Deployment", "Subnet", "Purpose"],
        rows(&[
            &["FortiGate", p.pick("c5.xlarge", "Standard_F4s_v2"), "Active-Passive HA", "Security Subnet", "Next-gen firewall"],
            &["FortiManager", p.pick("c5.large", "Standard_F2s_v2"), "Single Instance", "Management Subnet", "Centralized management"],
            &["FortiAnalyzer", p.pick("c5.large", "Standard_F2s_v2"), "Single Instance", "Management Subnet", "Log analytics"],
        ]),
        &[1560, 1800, 1800, 1800, 2400],
    );
}

pub(super) fn generic_appliances(ctx: &RenderContext, b: &mut Blocks) {
    b.para(format!(
        "Security appliance specifications will be determined based on the selected vendor and deployment model. {} may be used.",
        ctx.platform.pick(
            "AWS Network Firewall or third-party appliances from AWS Marketplace",
            "Azure Firewall or third-party NVAs from Azure Marketplace",
        )
    ));
}

pub(super) fn appliance_ports_and_soc(ctx: &RenderContext, b: &mut Blocks) {
    b.h2("11.2 Port Requirements");
    b.table(
        &["Service", "Protocol", "Port", "Direction", "Purpose"],
        rows(&[
            &["Management", "TCP", "443", "Inbound", "Web-based management console"],
            &["Management", "TCP", "22", "Inbound", "CLI access via SSH"],
            &["Logging", "TCP", "514", "Inbound", "Syslog from managed devices"],
            &["Logging", "TCP", "443", "Outbound", "Cloud logging service"],
            &["HA Sync", "TCP/UDP", "703", "Bidirectional", "HA heartbeat and sync"],
            &["NTP", "UDP", "123", "Outbound", "Time synchronization"],
            &["DNS", "UDP/TCP", "53", "Outbound", "Name resolution"],
        ]),
        &[1560, 1320, 1080, 1560, 3840],
    );
    b.page_break();

    b.h1("12. SOC Integration");
    b.para("Security Operations Center (SOC) integration enables centralized security monitoring, incident detection, and response capabilities.");
    b.table(
        &["Integration Point", "Protocol", "Destination", "Data Type", "Frequency"],
        rows(&[
            &["SIEM Log Forwarding", "Syslog/TCP 514", "SOC SIEM Platform", "Security events", "Real-time"],
            &["Flow Logs", "HTTPS", ctx.platform.pick("S3 > SIEM", "Storage > Sentinel"), "Network flows", "Near real-time"],
            &["Alert Notifications", "HTTPS/Webhook", "SOC Alert Platform", "Critical alerts", "Real-time"],
            &["Vulnerability Scans", "HTTPS", "SOC Scanner", "Scan results", "Scheduled"],
        ]),
        &[2100, 1560, 2100, 1800, 1800],
    );
    b.page_break();
}

pub(super) fn availability_and_naming(ctx: &RenderContext, b: &mut Blocks) {
    let p = ctx.platform;
    b.h1("13. High Availability Design");
    b.para("The infrastructure is designed with redundancy at every layer to maximize availability.");
    b.table(
        &["Component", "HA Strategy", "Failover Type", "RPO", "RTO"],
        rows(&[
            &[p.pick("VPC", "VNet"), "Multi-AZ / Multi-region", "Automatic", "N/A", "N/A"],
            &["NAT Gateway", "One per AZ", "Automatic", "0", "Immediate"],
            &["VPN", "Dual tunnels", "Automatic (BGP)", "0", "< 60s"],
            &[p.pick("Transit Gateway", "Virtual WAN"), "Built-in HA", "Automatic", "0", "Immediate"],
            &["Security Appliance", "Active-Passive", "Stateful failover", "0", "< 30s"],
            &["Load Balancer", "Zone-redundant", "Automatic", "0", "Immediate"],
        ]),
        &[1800, 1920, 1680, 960, 1200],
    );
    b.page_break();

    b.h1("14. Naming Convention");
    b.para("All resources follow a standardized naming convention for consistency.");
    b.info_box(
        "Naming Format",
        format!(
            "Format: {{project}}-{{env}}-{{region}}-{{resource}}-{{seq}}  Example: proj-prod-{}",
            p.pick("apse1-vpc-001", "sea-vnet-001")
        ),
    );
    b.table(
        &["Abbreviation", "Environment"],
        rows(&[
            &["prod", "Production"],
            &["stg", "Staging"],
            &["dev", "Development"],
            &["uat", "User Acceptance Testing"],
        ]),
        &[3000, 6360],
    );
    b.page_break();
}

pub(super) fn hub_routing(ctx: &RenderContext, b: &mut Blocks) {
    let name = &ctx.project_name;
    b.h1(format!(
        "15. {} Configuration",
        ctx.platform.pick("Transit Gateway", "Virtual WAN")
    ));

    if ctx.platform.is_aws() {
        b.h2("15.1 TGW Attachments");
        b.table(
            &["Attachment Name", "Type", "Resource", "Subnets", "Route Table"],
            vec![
                vec![
                    "tgw-attach-prod-vpc".into(),
                    "VPC".into(),
                    format!("{name}-prod-vpc"),
                    "tgw-subnet-az1, tgw-subnet-az2".into(),
                    "tgw-rt-prod".into(),
                ],
                vec![
                    "tgw-attach-vpn".into(),
                    "VPN".into(),
                    "Site-to-Site VPN".into(),
                    "N/A".into(),
                    "tgw-rt-vpn".into(),
                ],
            ],
            &[2100, 1080, 2100, 2280, 1800],
        );

        b.h2("15.2 TGW Route Tables");
        b.h3("tgw-rt-prod");
        b.table(
            &["Destination", "Attachment", "Route Type", "Status"],
            rows(&[
                &["10.0.0.0/16", "tgw-attach-prod-vpc", "Static", "Active"],
                &["172.16.0.0/12", "tgw-attach-vpn", "Propagated", "Active"],
                &["0.0.0.0/0", "tgw-attach-prod-vpc", "Static", "Blackhole"],
            ]),
            &[2400, 2760, 1800, 2400],
        );
    } else {
        b.h2("15.1 Virtual WAN Hub");
        b.table(
            &["Parameter", "Value"],
            vec![
                vec!["Virtual WAN Name".into(), format!("{name}-vwan")],
                vec!["Hub Name".into(), format!("{name}-hub-sea")],
                vec![
                    "Hub Region".into(),
                    ctx.project.region().unwrap_or("Southeast Asia").into(),
                ],
                vec!["Hub Address Prefix".into(), "10.100.0.0/24".into()],
                vec!["SKU".into(), "Standard".into()],
            ],
            &[3600, 5760],
        );

        b.h2("15.2 Hub Connections");
        b.table(
            &["Connection Name", "Type", "Connected Resource", "Routing Configuration"],
            vec![
                vec![
                    format!("conn-{name}-vnet"),
                    "VNet Connection".into(),
                    format!("{name}-prod-vnet"),
                    "Default route table".into(),
                ],
                vec![
                    format!("conn-{name}-vpn"),
                    "VPN (S2S)".into(),
                    "On-premises gateway".into(),
                    "Default route table".into(),
                ],
            ],
            &[2400, 1800, 2760, 2400],
        );
    }
    b.page_break();
}

pub(super) fn appendix(ctx: &RenderContext, b: &mut Blocks) {
    let name = &ctx.project_name;
    b.h1("16. Appendix");

    b.h2("16.1 Resource Summary");
    b.para("Complete inventory of all provisioned resources:");
    let inventory: Vec<(&str, &str, String)> = if ctx.platform.is_aws() {
        vec![
            ("VPC", "1", format!("{name}-prod-vpc")),
            ("Subnets", "7", "pub(2), priv(2), mgmt(1), tgw(2)".into()),
            ("Internet Gateway", "1", format!("{name}-igw")),
            ("NAT Gateway", "2", format!("{name}-natgw-az1/az2")),
            ("Transit Gateway", "1", format!("{name}-tgw")),
            ("Route Tables", "4", "rt-public, rt-private-az1/az2, rt-mgmt".into()),
            ("Security Groups", "4+", "sg-web, sg-app, sg-db, sg-mgmt".into()),
            ("VPC Endpoints", "5+", "S3, DynamoDB, SSM, Logs, Monitoring".into()),
            ("Elastic IPs", "3+", "NAT GW (2), VPN (1)".into()),
        ]
    } else {
        vec![
            ("Resource Group", "1", format!("{name}-rg")),
            ("Virtual Network", "1", format!("{name}-prod-vnet")),
            ("Subnets", "7", "public(2), private(2), mgmt(1), fw(1), gw(1)".into()),
            ("NAT Gateway", "1", format!("{name}-natgw-001")),
            ("VPN Gateway", "1", format!("{name}-vpngw")),
            ("Azure Firewall", "1", format!("{name}-afw")),
            ("NSGs", "3+", "nsg-public, nsg-private, nsg-mgmt".into()),
            ("Route Tables", "3", "rt-public, rt-private, rt-mgmt".into()),
            ("Private Endpoints", "3+", "Storage, Key Vault, SQL".into()),
        ]
    };
    b.table(
        &["Resource Type", "Count", "Names"],
        inventory
            .into_iter()
            .map(|(kind, count, names)| vec![kind.to_string(), count.to_string(), names])
            .collect(),
        &[2400, 1200, 5760],
    );

    b.h2("16.2 Contact Information");
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
    ]));
    b.table(&["Role", "Name", "Email", "Phone"], contacts, &[2100, 2400, 2760, 2100]);
}

pub(super) fn has_additional_info(ctx: &RenderContext) -> bool {
    ctx.has_additional_info()
}

pub(super) fn additional_notes(ctx: &RenderContext, b: &mut Blocks) {
    b.h2("16.3 Additional Notes");
    b.para(ctx.additional_info.clone());
}
