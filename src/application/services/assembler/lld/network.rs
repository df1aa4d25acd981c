//! Chapters 1 to 9: control, connectivity, addressing, subnets, gateways,
//! routing, security groups, endpoints and public addresses.

use crate::domain::RenderContext;

use super::super::blocks::{Blocks, rows};
use super::super::helpers::{or_default, usable_ips};

const IP_HEADERS: [&str; 4] = ["CIDR Block", "Usable IPs", "Allocation", "Environment"];
const IP_WIDTHS: [usize; 4] = [2400, 1800, 3360, 1800];
const ROUTE_WIDTHS: [usize; 4] = [2400, 2400, 1560, 3000];
const AZURE_ROUTE_WIDTHS: [usize; 4] = [2400, 2400, 1800, 2760];
const SG_HEADERS: [&str; 5] = ["Direction", "Protocol", "Port Range", "Source/Destination", "Description"];
const SG_WIDTHS: [usize; 5] = [1320, 1200, 1200, 2400, 3240];
const NSG_HEADERS: [&str; 7] = ["Priority", "Direction", "Protocol", "Port", "Source", "Destination", "Action"];
const NSG_WIDTHS: [usize; 7] = [1080, 1200, 1080, 960, 1440, 1440, 1080];

pub(super) fn document_control(ctx: &RenderContext, b: &mut Blocks) {
    b.h1("1. Document Control");

    b.h2("1.1 Release History");
    b.table(
        &["Version", "Date", "Author", "Change Description", "Status"],
        vec![vec![
            or_default(&ctx.project.version, "1.0").to_string(),
            ctx.formatted_date(),
            ctx.project.author_name.clone(),
            "Initial draft".into(),
            "Draft".into(),
        ]],
        &[1200, 1800, 1800, 2760, 1800],
    );

    b.h2("1.2 RACI Matrix");
    b.table(
        &["Activity", "NTT", "Client", "Vendor"],
        rows(&[
            &["Infrastructure Provisioning", "R", "A", "C"],
            &["Network Configuration", "R", "A", "I"],
            &["Security Configuration", "R", "A", "I"],
            &["VPN Configuration", "R", "A", "C"],
            &["Testing & Validation", "R", "A", "C"],
            &["Documentation", "R", "A", "I"],
        ]),
        &[3600, 1920, 1920, 1920],
    );

    b.h2("1.3 Review Colors");
    b.table(
        &["Color", "Meaning"],
        rows(&[
            &["Green", "Approved / Completed"],
            &["Yellow", "In Review / Pending"],
            &["Red", "Rejected / Requires Changes"],
            &["Grey", "Not Started"],
        ]),
        &[3000, 6360],
    );
    b.page_break();
}

pub(super) fn introduction(ctx: &RenderContext, b: &mut Blocks) {
    b.h1("2. Introduction");

    b.h2("2.1 Project Overview");
    b.para(format!(
        "This Low-Level Design (LLD) document provides the detailed technical configuration specifications for the {} project. \
         It serves as the implementation guide for the {} infrastructure deployment for {}.",
        ctx.project_name,
        ctx.platform.label(),
        ctx.client_name
    ));
    b.para("This document should be read in conjunction with the corresponding HLD document, which provides the architectural overview and design rationale.");

    b.h2("2.2 Connectivity Overview");
    b.para("The connectivity design encompasses the following elements:");
    if ctx.platform.is_aws() {
        b.bullets([
            "VPC-to-VPC connectivity via Transit Gateway",
            "On-premises to AWS connectivity via Site-to-Site VPN",
            "Internet egress via NAT Gateway",
            "Private service access via VPC Endpoints",
        ]);
    } else {
        b.bullets([
            "VNet-to-VNet connectivity via VNet Peering / Virtual WAN",
            "On-premises to Azure connectivity via VPN Gateway",
            "Internet egress via NAT Gateway",
            "Private service access via Private Endpoints",
        ]);
    }

    b.h2("2.3 VPN Breakdown");
}

pub(super) fn has_vpn_connections(ctx: &RenderContext) -> bool {
    !ctx.analysis.vpn_connections.is_empty()
}

pub(super) fn vpn_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    b.para("The following VPN connections are identified:");
    b.bullets(ctx.analysis.vpn_connections.iter().cloned());
}

pub(super) fn default_vpn(ctx: &RenderContext, b: &mut Blocks) {
    let region = format!("{} Region", ctx.platform.label());
    b.para("VPN tunnel configurations will be specified based on the finalized network design.");
    b.table(
        &["VPN Connection", "Source", "Destination", "Type", "Status"],
        rows(&[
            &["VPN-001", "On-Premises DC", region.as_str(), "Site-to-Site IPsec", "Planned"],
            &["VPN-002", "Branch Office", region.as_str(), "Site-to-Site IPsec", "Planned"],
        ]),
        &[1800, 1920, 1920, 1920, 1800],
    );
}

pub(super) fn traffic_and_network_summary(ctx: &RenderContext, b: &mut Blocks) {
    let p = ctx.platform;
    let name = &ctx.project_name;

    b.h2("2.4 Traffic Flow Summary");
    let monitoring_path = format!("Internal > {}", p.pick("CloudWatch", "Azure Monitor"));
    let backup_path = format!("Private > {}", p.pick("S3 Endpoint", "Storage Account"));
    b.table(
        &["Traffic Flow", "Source", "Destination", "Protocol", "Path"],
        rows(&[
            &["Management", "Admin Network", "Cloud Resources", "SSH/RDP/HTTPS", "VPN > VPC/VNet"],
            &["Application", "Users", "Web Servers", "HTTPS (443)", "Internet > LB > App"],
            &["Database", "App Servers", "DB Servers", "TCP (3306/5432)", "Private Subnet"],
            &["Monitoring", "All Resources", "Monitoring Service", "HTTPS", monitoring_path.as_str()],
            &["Backup", "Servers", "Object Storage", "HTTPS", backup_path.as_str()],
        ]),
        &[1560, 1680, 1680, 1680, 2760],
    );
    b.page_break();

    let network = p.pick("VPC", "VNet");
    b.h1(format!("3. {network} Architecture"));
    b.h2(format!("3.1 {network} Summary"));
    let cidr = ctx
        .analysis
        .network_ranges
        .first()
        .map(String::as_str)
        .unwrap_or("10.0.0.0/16");
    let region = ctx
        .project
        .region()
        .unwrap_or(p.pick("ap-southeast-1", "Southeast Asia"));
    if p.is_aws() {
        b.table(
            &["VPC Name", "CIDR Block", "Region", "DNS Hostnames", "DNS Resolution", "Tenancy"],
            vec![vec![
                format!("{name}-prod-vpc"),
                cidr.into(),
                region.into(),
                "Enabled".into(),
                "Enabled".into(),
                "Default".into(),
            ]],
            &[1800, 1560, 1560, 1560, 1560, 1320],
        );
    } else {
        b.table(
            &["VNet Name", "Address Space", "Region", "Resource Group", "DNS Servers"],
            vec![vec![
                format!("{name}-prod-vnet"),
                cidr.into(),
                region.into(),
                format!("{name}-rg"),
                "Azure Default".into(),
            ]],
            &[1920, 1920, 1920, 1920, 1680],
        );
    }

    b.h2("3.2 IP Address Allocation");
    b.info_box(
        "IP Planning",
        "IP address allocation follows a structured approach to ensure scalability and avoid conflicts with existing networks. Subnets are sized according to workload requirements with room for growth.",
    );
}

pub(super) fn has_network_ranges(ctx: &RenderContext) -> bool {
    !ctx.analysis.network_ranges.is_empty()
}

pub(super) fn ranges_from_analysis(ctx: &RenderContext, b: &mut Blocks) {
    b.table(
        &IP_HEADERS,
        ctx.analysis
            .network_ranges
            .iter()
            .map(|cidr| {
                vec![
                    cidr.clone(),
                    usable_ips(cidr),
                    "To be assigned".into(),
                    "Production".into(),
                ]
            })
            .collect(),
        &IP_WIDTHS,
    );
}

pub(super) fn default_ranges(_: &RenderContext, b: &mut Blocks) {
    let mut body = vec![vec![
        "10.0.0.0/16".into(),
        usable_ips("10.0.0.0/16"),
        "Production VPC/VNet".into(),
        "Production".into(),
    ]];
    body.extend(rows(&[
        &["10.0.0.0/24", "251", "Public Subnet AZ-1", "Production"],
        &["10.0.1.0/24", "251", "Public Subnet AZ-2", "Production"],
        &["10.0.10.0/24", "251", "Private Subnet AZ-1", "Production"],
        &["10.0.11.0/24", "251", "Private Subnet AZ-2", "Production"],
        &["10.0.20.0/24", "251", "Management Subnet", "Production"],
    ]));
    b.table(&IP_HEADERS, body, &IP_WIDTHS);
}

pub(super) fn subnets_and_gateways(ctx: &RenderContext, b: &mut Blocks) {
    let name = &ctx.project_name;
    b.page_break();
    b.h1("4. Subnet Configuration");
    b.para("Subnets are configured across multiple availability zones for high availability and are segmented by function.");
    if ctx.platform.is_aws() {
        b.table(
            &["Subnet Name", "CIDR", "AZ", "Type", "Auto-assign Public IP", "Route Table"],
            rows(&[
                &["pub-subnet-az1", "10.0.0.0/24", "ap-southeast-1a", "Public", "Yes", "rt-public"],
                &["pub-subnet-az2", "10.0.1.0/24", "ap-southeast-1b", "Public", "Yes", "rt-public"],
                &["priv-subnet-az1", "10.0.10.0/24", "ap-southeast-1a", "Private", "No", "rt-private-az1"],
                &["priv-subnet-az2", "10.0.11.0/24", "ap-southeast-1b", "Private", "No", "rt-private-az2"],
                &["mgmt-subnet-az1", "10.0.20.0/24", "ap-southeast-1a", "Private", "No", "rt-mgmt"],
                &["tgw-subnet-az1", "10.0.30.0/28", "ap-southeast-1a", "Private", "No", "rt-tgw"],
                &["tgw-subnet-az2", "10.0.30.16/28", "ap-southeast-1b", "Private", "No", "rt-tgw"],
            ]),
            &[1920, 1560, 1680, 1200, 1680, 1320],
        );
    } else {
        b.table(
            &["Subnet Name", "Address Prefix", "NSG", "Purpose", "Delegation", "Service Endpoints"],
            rows(&[
                &["sn-public-001", "10.0.0.0/24", "nsg-public", "Public-facing", "None", "None"],
                &["sn-public-002", "10.0.1.0/24", "nsg-public", "Public-facing", "None", "None"],
                &["sn-private-001", "10.0.10.0/24", "nsg-private", "Application", "None", "Storage, SQL"],
                &["sn-private-002", "10.0.11.0/24", "nsg-private", "Application", "None", "Storage, SQL"],
                &["sn-mgmt-001", "10.0.20.0/24", "nsg-mgmt", "Management", "None", "None"],
                &["AzureFirewallSubnet", "10.0.30.0/26", "N/A", "Azure Firewall", "Required", "N/A"],
                &["GatewaySubnet", "10.0.31.0/27", "N/A", "VPN Gateway", "Required", "N/A"],
            ]),
            &[1800, 1560, 1320, 1320, 1200, 1560],
        );
    }
    b.page_break();

    b.h1("5. Gateway Configuration");
    b.h2("5.1 Internet Gateways");
    if ctx.platform.is_aws() {
        b.table(
            &["Resource", "Name", "Attached VPC", "Purpose"],
            vec![vec![
                "Internet Gateway".into(),
                format!("{name}-igw"),
                format!("{name}-prod-vpc"),
                "Internet access for public subnets".into(),
            ]],
            &[2400, 2400, 2760, 1800],
        );
    } else {
        b.para("Azure does not use a discrete Internet Gateway resource. Public internet access is controlled through Azure Firewall and NSG rules.");
    }

    b.h2("5.2 NAT Gateways");
    b.para("NAT Gateways provide outbound internet connectivity for resources in private subnets.");
    if ctx.platform.is_aws() {
        b.table(
            &["NAT Gateway Name", "Subnet", "Elastic IP", "AZ"],
            vec![
                vec![format!("{name}-natgw-az1"), "pub-subnet-az1".into(), "Allocated".into(), "ap-southeast-1a".into()],
                vec![format!("{name}-natgw-az2"), "pub-subnet-az2".into(), "Allocated".into(), "ap-southeast-1b".into()],
            ],
            &[2700, 2400, 1860, 2400],
        );
    } else {
        b.table(
            &["NAT Gateway Name", "Subnet", "Public IP", "SKU"],
            vec![vec![
                format!("{name}-natgw-001"),
                "sn-public-001".into(),
                "Allocated".into(),
                "Standard".into(),
            ]],
            &[2700, 2400, 1860, 2400],
        );
    }
    b.page_break();
}

pub(super) fn route_tables(ctx: &RenderContext, b: &mut Blocks) {
    b.h1("6. Route Table Configuration");
    b.para("Route tables define traffic paths for each subnet tier.");
    if ctx.platform.is_aws() {
        let headers = ["Destination", "Target", "Status", "Notes"];
        b.h3("Public Route Table (rt-public)");
        b.table(
            &headers,
            rows(&[
                &["10.0.0.0/16", "local", "Active", "VPC local traffic"],
                &["0.0.0.0/0", "igw-xxxxxxxx", "Active", "Internet traffic via IGW"],
            ]),
            &ROUTE_WIDTHS,
        );
        b.h3("Private Route Table (rt-private-az1)");
        b.table(
            &headers,
            rows(&[
                &["10.0.0.0/16", "local", "Active", "VPC local traffic"],
                &["0.0.0.0/0", "nat-xxxxxxxx", "Active", "Internet via NAT Gateway"],
                &["172.16.0.0/12", "tgw-xxxxxxxx", "Active", "On-premises via TGW"],
            ]),
            &ROUTE_WIDTHS,
        );
    } else {
        let headers = ["Address Prefix", "Next Hop Type", "Next Hop Address", "Notes"];
        b.h3("Public Route Table (rt-public)");
        b.table(
            &headers,
            rows(&[
                &["0.0.0.0/0", "Internet", "N/A", "Default internet route"],
                &["10.0.0.0/16", "VNet", "N/A", "VNet local traffic"],
            ]),
            &AZURE_ROUTE_WIDTHS,
        );
        b.h3("Private Route Table (rt-private)");
        b.table(
            &headers,
            rows(&[
                &["0.0.0.0/0", "Virtual Appliance", "Azure Firewall IP", "Forced tunneling"],
                &["10.0.0.0/16", "VNet", "N/A", "VNet local traffic"],
                &["172.16.0.0/12", "Virtual Network Gateway", "N/A", "On-premises via VPN"],
            ]),
            &AZURE_ROUTE_WIDTHS,
        );
    }
    b.page_break();
}

pub(super) fn security_groups(ctx: &RenderContext, b: &mut Blocks) {
    b.h1(format!(
        "7. {}",
        ctx.platform.pick("Security Groups", "Network Security Groups (NSGs)")
    ));
    b.info_box(
        "Security Groups",
        ctx.platform.pick(
            "Security Groups are stateful firewalls that control inbound and outbound traffic at the instance level. Rules are evaluated as a whole (no explicit deny).",
            "NSGs contain security rules that allow or deny inbound/outbound traffic. Rules are evaluated by priority (lower number = higher priority).",
        ),
    );

    if ctx.platform.is_aws() {
        b.h3("sg-web - Web Tier Security Group");
        b.table(
            &SG_HEADERS,
            rows(&[
                &["Inbound", "TCP", "443", "0.0.0.0/0", "HTTPS from internet"],
                &["Inbound", "TCP", "80", "0.0.0.0/0", "HTTP from internet (redirect)"],
                &["Outbound", "All", "All", "0.0.0.0/0", "All outbound traffic"],
            ]),
            &SG_WIDTHS,
        );
        b.h3("sg-app - Application Tier Security Group");
        b.table(
            &SG_HEADERS,
            rows(&[
                &["Inbound", "TCP", "8080", "sg-web", "App traffic from web tier"],
                &["Inbound", "TCP", "22", "sg-mgmt", "SSH from management"],
                &["Outbound", "All", "All", "0.0.0.0/0", "All outbound traffic"],
            ]),
            &SG_WIDTHS,
        );
        b.h3("sg-mgmt - Management Security Group");
        b.table(
            &SG_HEADERS,
            rows(&[
                &["Inbound", "TCP", "22", "VPN CIDR", "SSH from VPN"],
                &["Inbound", "TCP", "3389", "VPN CIDR", "RDP from VPN"],
                &["Inbound", "TCP", "443", "VPN CIDR", "HTTPS management"],
                &["Outbound", "All", "All", "0.0.0.0/0", "All outbound traffic"],
            ]),
            &SG_WIDTHS,
        );
    } else {
        b.h3("nsg-public - Public Tier NSG");
        b.table(
            &NSG_HEADERS,
            rows(&[
                &["100", "Inbound", "TCP", "443", "Internet", "VNet", "Allow"],
                &["110", "Inbound", "TCP", "80", "Internet", "VNet", "Allow"],
                &["4096", "Inbound", "Any", "Any", "Any", "Any", "Deny"],
            ]),
            &NSG_WIDTHS,
        );
        b.h3("nsg-private - Private Tier NSG");
        b.table(
            &NSG_HEADERS,
            rows(&[
                &["100", "Inbound", "TCP", "8080", "sn-public", "VNet", "Allow"],
                &["110", "Inbound", "TCP", "22", "sn-mgmt", "VNet", "Allow"],
                &["4096", "Inbound", "Any", "Any", "Any", "Any", "Deny"],
            ]),
            &NSG_WIDTHS,
        );
        b.h3("nsg-mgmt - Management NSG");
        b.table(
            &NSG_HEADERS,
            rows(&[
                &["100", "Inbound", "TCP", "22", "VPN CIDR", "VNet", "Allow"],
                &["110", "Inbound", "TCP", "3389", "VPN CIDR", "VNet", "Allow"],
                &["120", "Inbound", "TCP", "443", "VPN CIDR", "VNet", "Allow"],
                &["4096", "Inbound", "Any", "Any", "Any", "Any", "Deny"],
            ]),
            &NSG_WIDTHS,
        );
    }
    b.page_break();
}

pub(super) fn endpoints_and_public_ips(ctx: &RenderContext, b: &mut Blocks) {
    let name = &ctx.project_name;
    b.h1(format!(
        "8. {}",
        ctx.platform.pick("VPC Endpoints", "Private Endpoints")
    ));
    b.info_box(
        "Private Connectivity",
        ctx.platform.pick(
            "VPC Endpoints provide private connectivity to AWS services without traversing the public internet, improving security and reducing data transfer costs.",
            "Private Endpoints provide private connectivity to Azure services via private IP addresses in your VNet, ensuring traffic stays on the Microsoft backbone network.",
        ),
    );
    if ctx.platform.is_aws() {
        b.table(
            &["Endpoint Name", "Service", "Type", "Subnet", "Security Group"],
            rows(&[
                &["vpce-s3", "com.amazonaws.region.s3", "Gateway", "All route tables", "N/A"],
                &["vpce-dynamodb", "com.amazonaws.region.dynamodb", "Gateway", "All route tables", "N/A"],
                &["vpce-ssm", "com.amazonaws.region.ssm", "Interface", "priv-subnet-az1", "sg-endpoints"],
                &["vpce-logs", "com.amazonaws.region.logs", "Interface", "priv-subnet-az1", "sg-endpoints"],
                &["vpce-monitoring", "com.amazonaws.region.monitoring", "Interface", "priv-subnet-az1", "sg-endpoints"],
            ]),
            &[1800, 2760, 1200, 1800, 1800],
        );
    } else {
        b.table(
            &["Endpoint Name", "Target Resource", "Subnet", "Private IP", "DNS Zone"],
            rows(&[
                &["pe-storage", "Storage Account", "sn-private-001", "Auto-assigned", "privatelink.blob.core.windows.net"],
                &["pe-keyvault", "Key Vault", "sn-private-001", "Auto-assigned", "privatelink.vaultcore.azure.net"],
                &["pe-sql", "SQL Database", "sn-private-001", "Auto-assigned", "privatelink.database.windows.net"],
            ]),
            &[1800, 1920, 1680, 1560, 2400],
        );
    }
    b.page_break();

    b.h1(format!(
        "9. {}",
        ctx.platform.pick("Elastic IP Addresses", "Public IP Addresses")
    ));
    b.para("Static public IP addresses allocated for the infrastructure:");
    b.table(
        &["Name", "Allocation", "Associated Resource", "Purpose"],
        vec![
            vec![format!("{name}-eip-natgw-1"), "Static".into(), "NAT Gateway AZ-1".into(), "Outbound internet (AZ-1)".into()],
            vec![format!("{name}-eip-natgw-2"), "Static".into(), "NAT Gateway AZ-2".into(), "Outbound internet (AZ-2)".into()],
            vec![format!("{name}-eip-vpn"), "Static".into(), "VPN Gateway".into(), "VPN endpoint".into()],
        ],
        &[2400, 1440, 2520, 3000],
    );
    b.page_break();
}
