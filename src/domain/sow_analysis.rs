use serde::{Deserialize, Serialize};

/// Structured facts extracted from a Statement of Work.
///
/// Every list is always present and every nested record carries all of its
/// keys, so the assemblers never need to probe for missing data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SowAnalysis {
    pub project_name: String,
    pub client_name: String,
    pub executive_summary: ExecutiveSummary,
    pub solution_strategy: SolutionStrategy,
    pub scope: Scope,
    pub requirements: Vec<String>,
    pub assumptions: Vec<String>,
    pub constraints: Vec<ScopedItem>,
    pub risks: Vec<ScopedItem>,
    pub raci: Raci,
    pub components: Vec<String>,
    pub locations: Vec<String>,
    pub network_ranges: Vec<String>,
    pub network_design: NetworkDesign,
    pub servers: Vec<Server>,
    pub backup_requirements: BackupRequirements,
    pub dr_strategy: DrStrategy,
    pub migration_plan: MigrationPlan,
    pub workloads: Vec<Workload>,
    pub sla_requirements: Vec<SlaRequirement>,
    pub software_components: Vec<SoftwareComponent>,
    pub security_requirements: Vec<String>,
    pub compliance_requirements: Vec<String>,
    pub vpn_connections: Vec<String>,
    pub additional_notes: String,
    pub raw_text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutiveSummary {
    pub overview: String,
    pub business_drivers: Vec<String>,
    pub key_deliverables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolutionStrategy {
    pub current_state: Vec<String>,
    pub target_state: Vec<String>,
    pub migration_approach: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scope {
    pub in_scope: Vec<String>,
    pub out_of_scope: Vec<String>,
}

/// A constraint or risk row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopedItem {
    pub id: String,
    pub scope: String,
    pub description: String,
    pub hld_definition: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Raci {
    pub infrastructure_and_licenses: Vec<RaciEntry>,
    pub professional_services: Vec<RaciEntry>,
    pub deployment_activities: Vec<RaciEntry>,
    pub acceptance_testing: Vec<RaciEntry>,
    pub ongoing_services: Vec<RaciEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RaciEntry {
    pub task: String,
    pub ntt: String,
    pub customer: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkDesign {
    pub topology: String,
    pub vpn_connections: Vec<String>,
    pub subnets: Vec<Subnet>,
    pub firewall_rules: Vec<String>,
    pub dns_config: String,
    pub load_balancing: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subnet {
    pub name: String,
    pub cidr: String,
    pub purpose: String,
    pub zone: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Server {
    pub hostname: String,
    pub description: String,
    pub role: String,
    pub os: String,
    pub vcpu: String,
    pub memory: String,
    pub storage: String,
    pub environment: String,
    pub migration_method: String,
}

impl Server {
    pub fn is_dr(&self) -> bool {
        self.environment == "DR"
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackupRequirements {
    pub policies: Vec<BackupPolicy>,
    pub special_requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackupPolicy {
    #[serde(rename = "type")]
    pub policy_type: String,
    pub frequency: String,
    pub retention: String,
    pub tier: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrStrategy {
    pub overview: String,
    pub rpo: String,
    pub rto: String,
    pub dr_region: String,
    pub components: Vec<DrComponent>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrComponent {
    pub component: String,
    pub dr_method: String,
    pub dr_region: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MigrationPlan {
    pub strategy: String,
    pub phases: Vec<MigrationPhase>,
    pub server_migrations: Vec<ServerMigration>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MigrationPhase {
    pub phase: String,
    pub activities: String,
    pub dependencies: String,
    pub deliverables: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerMigration {
    pub hostname: String,
    pub description: String,
    pub method: String,
    pub phase: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Workload {
    pub name: String,
    pub description: String,
    pub infrastructure: String,
    pub backup_policy: String,
    pub monitoring: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlaRequirement {
    pub metric: String,
    pub target: String,
    pub measurement_method: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoftwareComponent {
    pub area: String,
    pub product: String,
    pub version: String,
    pub license_type: String,
    pub responsible: String,
}
