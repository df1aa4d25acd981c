use crate::domain::{DocumentType, Platform, ProjectDetails};

const NOT_PROVIDED: &str = "Not provided";

/// Builds the single analysis prompt sent to the model for one SOW.
pub fn build_analysis_prompt(
    sow_text: &str,
    platform: Platform,
    document_type: DocumentType,
    project: &ProjectDetails,
) -> String {
    let mut prompt = format!(
        "You are an expert NTT DATA Solutions Architect. You are analyzing a Statement of Work (SOW) document to extract structured information for generating a {abbr} ({full}) document for a {platform} cloud infrastructure project.

IMPORTANT INSTRUCTIONS:
1. READ the entire SOW document carefully
2. REASON about the content - understand the project context, requirements, and constraints
3. EXTRACT factual information directly from the SOW - do NOT make up information
4. Where the SOW is silent on a topic, indicate \"Not specified in SOW\" or provide reasonable NTT DATA standard defaults clearly marked as defaults
5. Pay special attention to: scope items, RACI matrices, network details, security requirements, server inventories, migration plans, and SLA terms

The project details provided by the user are:
- Project Name: {project_name}
- Client Name: {client_name}
- Author: {author}
- Version: {version}
- Region: {region}
- Platform: {platform}

=== SOW DOCUMENT CONTENT ===
{sow_text}
=== END OF SOW DOCUMENT ===

Now analyze the SOW and return a JSON object with the following structure. For each field, extract ACTUAL content from the SOW. If the SOW does not mention something, use reasonable defaults but mark them clearly.

Return ONLY valid JSON with this exact structure:

",
        abbr = document_type.abbreviation(),
        full = document_type.full_name(),
        platform = platform.label(),
        project_name = or_placeholder(&project.project_name, NOT_PROVIDED),
        client_name = or_placeholder(&project.client_name, NOT_PROVIDED),
        author = or_placeholder(&project.author_name, NOT_PROVIDED),
        version = or_placeholder(&project.version, "1.0"),
        region = project.region().unwrap_or("Not specified"),
    );
    prompt.push_str(RESPONSE_SCHEMA);
    prompt
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

const RESPONSE_SCHEMA: &str = r#"{
  "projectName": "string - project name from SOW or user input",
  "clientName": "string - client/customer name from SOW or user input",
  
  "executiveSummary": {
    "overview": "string - 2-3 paragraph executive summary of the project based on the SOW",
    "businessDrivers": ["array of business drivers/objectives mentioned in SOW"],
    "keyDeliverables": ["array of key deliverables from the SOW"]
  },
  
  "solutionStrategy": {
    "currentState": ["array of bullet points describing current state/AS-IS from SOW"],
    "targetState": ["array of bullet points describing target state/TO-BE from SOW"],
    "migrationApproach": "string - migration approach described in SOW (lift-and-shift, greenfield, hybrid, etc.)"
  },
  
  "scope": {
    "inScope": ["array of in-scope items directly from the SOW"],
    "outOfScope": ["array of out-of-scope items directly from the SOW"]
  },
  
  "requirements": ["array of requirements extracted from SOW"],
  
  "assumptions": ["array of assumptions from the SOW"],
  
  "constraints": [
    {
      "id": "CON-001",
      "scope": "string - category",
      "description": "string - constraint description from SOW",
      "hldDefinition": "Defined"
    }
  ],
  
  "risks": [
    {
      "id": "RSK-001",
      "scope": "string - category",
      "description": "string - risk description from SOW",
      "hldDefinition": "To be assessed"
    }
  ],
  
  "raci": {
    "infrastructureAndLicenses": [
      {"task": "string", "ntt": "R/A/C/I", "customer": "R/A/C/I"}
    ],
    "professionalServices": [
      {"task": "string", "ntt": "R/A/C/I", "customer": "R/A/C/I"}
    ],
    "deploymentActivities": [
      {"task": "string", "ntt": "R/A/C/I", "customer": "R/A/C/I"}
    ],
    "acceptanceTesting": [
      {"task": "string", "ntt": "R/A/C/I", "customer": "R/A/C/I"}
    ],
    "ongoingServices": [
      {"task": "string", "ntt": "R/A/C/I", "customer": "R/A/C/I"}
    ]
  },
  
  "components": ["array of technology/infrastructure components mentioned in SOW (e.g., 'Transit Gateway', 'FortiGate', 'VPN', etc.)"],
  
  "locations": ["array of geographic locations/regions mentioned in SOW"],
  
  "networkRanges": ["array of CIDR ranges/IP addresses mentioned in SOW"],
  
  "networkDesign": {
    "topology": "string - network topology description from SOW",
    "vpnConnections": ["array of VPN connection details from SOW"],
    "subnets": [
      {"name": "string", "cidr": "string", "purpose": "string", "zone": "CSZ/PSZ/AMZ"}
    ],
    "firewallRules": ["array of firewall/security group rules mentioned"],
    "dnsConfig": "string - DNS configuration details from SOW",
    "loadBalancing": "string - load balancing requirements from SOW"
  },
  
  "securityRequirements": ["array of security requirements from SOW"],
  
  "servers": [
    {
      "hostname": "string",
      "description": "string",
      "role": "string",
      "os": "string",
      "vcpu": "string",
      "memory": "string",
      "storage": "string",
      "environment": "Production/DR",
      "migrationMethod": "Lift and Shift / Greenfield"
    }
  ],
  
  "backupRequirements": {
    "policies": [
      {"type": "string", "frequency": "string", "retention": "string", "tier": "string"}
    ],
    "specialRequirements": ["array of special backup requirements from SOW"]
  },
  
  "drStrategy": {
    "overview": "string - DR strategy overview from SOW",
    "rpo": "string - RPO from SOW",
    "rto": "string - RTO from SOW",
    "drRegion": "string - DR region from SOW",
    "components": [
      {"component": "string", "drMethod": "string", "drRegion": "string"}
    ]
  },
  
  "migrationPlan": {
    "strategy": "string - overall migration strategy from SOW",
    "phases": [
      {"phase": "string", "activities": "string", "dependencies": "string", "deliverables": "string"}
    ],
    "serverMigrations": [
      {"hostname": "string", "description": "string", "method": "string", "phase": "string"}
    ]
  },
  
  "workloads": [
    {
      "name": "string - workload name",
      "description": "string - workload description",
      "infrastructure": "string - infrastructure details",
      "backupPolicy": "string - backup policy for this workload",
      "monitoring": "string - monitoring requirements"
    }
  ],
  
  "slaRequirements": [
    {"metric": "string", "target": "string", "measurementMethod": "string"}
  ],
  
  "softwareComponents": [
    {"area": "string", "product": "string", "version": "string", "licenseType": "string", "responsible": "string"}
  ],
  
  "complianceRequirements": ["array of compliance/regulatory requirements from SOW"],
  
  "additionalNotes": "string - any additional important information from the SOW that doesn't fit other categories"
}"#;
