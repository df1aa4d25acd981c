use crate::domain::Platform;

/// Lowercased alphanumeric prefix of the project name used in resource names.
pub fn project_short_name(project_name: &str) -> String {
    project_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .take(8)
        .collect()
}

/// Usable addresses in a CIDR block after the five addresses the cloud
/// providers reserve, formatted with thousands separators.
pub fn usable_ips(cidr: &str) -> String {
    let prefix = cidr
        .split('/')
        .nth(1)
        .and_then(leading_prefix)
        .filter(|p| *p <= 32);

    match prefix {
        Some(p) => {
            let total = 1u64 << (32 - p);
            with_thousands_separators(total.saturating_sub(5))
        }
        None => "N/A".to_string(),
    }
}

/// Digits at the start of the prefix part. Annotations such as
/// `"16 (Production VPC)"` are ignored.
fn leading_prefix(part: &str) -> Option<u32> {
    let part = part.trim_start();
    let end = part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len());
    part[..end].parse().ok()
}

fn with_thousands_separators(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Prose description of a well-known infrastructure component.
pub fn component_description(component: &str, platform: Platform) -> String {
    let label = platform.label();
    match component {
        "Transit Gateway" => platform.pick(
            "AWS Transit Gateway acts as a centralized routing hub that connects VPCs, VPN connections, and Direct Connect gateways. It simplifies network architecture by eliminating complex VPC peering relationships.",
            "Azure Virtual WAN provides a centralized routing hub for connecting VNets, VPN connections, and ExpressRoute circuits.",
        ).to_string(),
        "TGW" => "Transit Gateway provides centralized route management and traffic inspection capabilities across the entire network.".to_string(),
        "VPN" => format!("Site-to-Site VPN establishes encrypted IPsec tunnels between the on-premises infrastructure and {label} cloud environment, ensuring secure hybrid connectivity."),
        "VPC" => "Amazon Virtual Private Cloud provides an isolated network environment with full control over IP addressing, subnets, routing, and security.".to_string(),
        "VNet" => "Azure Virtual Network provides an isolated network environment for deploying Azure resources with full control over IP addressing and security.".to_string(),
        "FortiGate" => "FortiGate Next-Generation Firewall provides advanced threat protection, SSL inspection, and application control capabilities.".to_string(),
        "FortiManager" => "FortiManager provides centralized management for Fortinet security devices including policy management, firmware updates, and configuration backup.".to_string(),
        "FortiAnalyzer" => "FortiAnalyzer provides centralized logging, reporting, and analytics for Fortinet security infrastructure.".to_string(),
        "Fortinet" => "Fortinet security fabric provides integrated security across the network including next-gen firewall, VPN, and advanced threat protection.".to_string(),
        "Load Balancer" => platform.pick(
            "Elastic Load Balancing distributes incoming traffic across multiple targets for high availability.",
            "Azure Load Balancer distributes incoming traffic across backend pool instances.",
        ).to_string(),
        "ALB" => "Application Load Balancer operates at Layer 7 and routes traffic based on content of the request.".to_string(),
        "NLB" => "Network Load Balancer operates at Layer 4 and handles millions of requests per second with ultra-low latency.".to_string(),
        "NAT Gateway" => "NAT Gateway enables outbound internet connectivity for resources in private subnets while preventing unsolicited inbound connections.".to_string(),
        "Internet Gateway" => "Internet Gateway provides connectivity between the VPC and the public internet for resources with public IP addresses.".to_string(),
        "QRadar" => "IBM QRadar SIEM provides real-time security event monitoring, correlation, and threat detection.".to_string(),
        "SIEM" => "Security Information and Event Management system aggregates and analyzes security events from across the infrastructure.".to_string(),
        "SOC" => "Security Operations Center provides 24/7 monitoring, incident detection, and response capabilities.".to_string(),
        "Firewall" => format!("{} provides managed, stateful network traffic inspection and filtering.", platform.pick("AWS Network Firewall", "Azure Firewall")),
        "WAF" => format!("{} protects web applications from common exploits and vulnerabilities.", platform.pick("AWS WAF", "Azure WAF")),
        "CloudWatch" => "Amazon CloudWatch provides monitoring and observability for AWS resources and applications.".to_string(),
        "Azure Monitor" => "Azure Monitor provides comprehensive monitoring for Azure resources with metrics, logs, and alerts.".to_string(),
        "GuardDuty" => "Amazon GuardDuty provides intelligent threat detection that continuously monitors for malicious activity.".to_string(),
        "SASE" => "Secure Access Service Edge converges networking and security functions into a unified cloud-delivered service.".to_string(),
        "SD-WAN" => "Software-Defined Wide Area Network provides centralized control and optimization of WAN connectivity.".to_string(),
        "Zscaler" => "Zscaler provides cloud-native security including Secure Web Gateway, CASB, and Zero Trust Network Access.".to_string(),
        "ZTNA" => "Zero Trust Network Access provides secure remote access to applications based on identity and context.".to_string(),
        other => format!("{other} is deployed as part of the infrastructure solution to support the project requirements."),
    }
}

/// `PREFIX-001` style identifier for the zero-based index.
pub fn sequence_id(prefix: &str, index: usize) -> String {
    format!("{}-{:03}", prefix, index + 1)
}

/// Falls back to `default` when the value is blank.
pub fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}
