use serde_json::Value;

use crate::domain::{
    BackupPolicy, BackupRequirements, DrComponent, DrStrategy, ExecutiveSummary, MigrationPhase,
    MigrationPlan, NetworkDesign, Raci, RaciEntry, Scope, ScopedItem, Server, ServerMigration,
    SlaRequirement, SoftwareComponent, SolutionStrategy, SowAnalysis, Subnet, Workload,
};

/// Maps loosely shaped model output onto a fully populated [`SowAnalysis`].
///
/// Missing or mistyped lists become empty, null list elements are dropped,
/// non-object records fall back to their defaults and numeric or boolean
/// scalars are stringified. Never fails.
pub fn normalize(raw: &Value, raw_text: &str) -> SowAnalysis {
    let network_design = network_design(raw.get("networkDesign"));

    SowAnalysis {
        project_name: scalar(raw.get("projectName")),
        client_name: scalar(raw.get("clientName")),
        executive_summary: executive_summary(raw.get("executiveSummary")),
        solution_strategy: solution_strategy(raw.get("solutionStrategy")),
        scope: Scope {
            in_scope: string_list(nested(raw, "scope", "inScope")),
            out_of_scope: string_list(nested(raw, "scope", "outOfScope")),
        },
        requirements: string_list(raw.get("requirements")),
        assumptions: string_list(raw.get("assumptions")),
        constraints: scoped_items(raw.get("constraints"), "CON"),
        risks: scoped_items(raw.get("risks"), "RSK"),
        raci: raci(raw.get("raci")),
        components: string_list(raw.get("components")),
        locations: string_list(raw.get("locations")),
        network_ranges: string_list(raw.get("networkRanges")),
        vpn_connections: network_design.vpn_connections.clone(),
        network_design,
        servers: records(raw.get("servers"), server),
        backup_requirements: backup_requirements(raw.get("backupRequirements")),
        dr_strategy: dr_strategy(raw.get("drStrategy")),
        migration_plan: migration_plan(raw.get("migrationPlan")),
        workloads: records(raw.get("workloads"), workload),
        sla_requirements: records(raw.get("slaRequirements"), sla_requirement),
        software_components: records(raw.get("softwareComponents"), software_component),
        security_requirements: string_list(raw.get("securityRequirements")),
        compliance_requirements: string_list(raw.get("complianceRequirements")),
        additional_notes: scalar(raw.get("additionalNotes")),
        raw_text: raw_text.to_string(),
    }
}

fn nested<'a>(raw: &'a Value, outer: &str, inner: &str) -> Option<&'a Value> {
    raw.get(outer).and_then(|v| v.get(inner))
}

/// A scalar field: strings pass through, numbers and booleans are printed,
/// anything else is empty.
fn scalar(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|v| !v.is_null())
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn records<T>(value: Option<&Value>, map: impl Fn(&Value) -> T) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items.iter().filter(|v| !v.is_null()).map(map).collect(),
        _ => Vec::new(),
    }
}

fn executive_summary(value: Option<&Value>) -> ExecutiveSummary {
    let Some(v) = value.filter(|v| v.is_object()) else {
        return ExecutiveSummary::default();
    };
    ExecutiveSummary {
        overview: scalar(v.get("overview")),
        business_drivers: string_list(v.get("businessDrivers")),
        key_deliverables: string_list(v.get("keyDeliverables")),
    }
}

fn solution_strategy(value: Option<&Value>) -> SolutionStrategy {
    let Some(v) = value.filter(|v| v.is_object()) else {
        return SolutionStrategy::default();
    };
    SolutionStrategy {
        current_state: string_list(v.get("currentState")),
        target_state: string_list(v.get("targetState")),
        migration_approach: scalar(v.get("migrationApproach")),
    }
}

fn scoped_items(value: Option<&Value>, prefix: &str) -> Vec<ScopedItem> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|v| !v.is_null())
        .enumerate()
        .map(|(i, v)| {
            let default_id = format!("{}-{:03}", prefix, i + 1);
            match v {
                Value::Object(_) => {
                    let id = scalar(v.get("id"));
                    ScopedItem {
                        id: if id.is_empty() { default_id } else { id },
                        scope: scalar(v.get("scope")),
                        description: scalar(v.get("description")),
                        hld_definition: scalar(v.get("hldDefinition")),
                    }
                }
                other => ScopedItem {
                    id: default_id,
                    description: scalar(Some(other)),
                    ..ScopedItem::default()
                },
            }
        })
        .collect()
}

fn raci(value: Option<&Value>) -> Raci {
    let Some(v) = value.filter(|v| v.is_object()) else {
        return Raci::default();
    };
    Raci {
        infrastructure_and_licenses: records(v.get("infrastructureAndLicenses"), raci_entry),
        professional_services: records(v.get("professionalServices"), raci_entry),
        deployment_activities: records(v.get("deploymentActivities"), raci_entry),
        acceptance_testing: records(v.get("acceptanceTesting"), raci_entry),
        ongoing_services: records(v.get("ongoingServices"), raci_entry),
    }
}

fn raci_entry(v: &Value) -> RaciEntry {
    RaciEntry {
        task: scalar(v.get("task")),
        ntt: scalar(v.get("ntt")),
        customer: scalar(v.get("customer")),
    }
}

fn network_design(value: Option<&Value>) -> NetworkDesign {
    let Some(v) = value.filter(|v| v.is_object()) else {
        return NetworkDesign::default();
    };
    NetworkDesign {
        topology: scalar(v.get("topology")),
        vpn_connections: string_list(v.get("vpnConnections")),
        subnets: records(v.get("subnets"), |s| Subnet {
            name: scalar(s.get("name")),
            cidr: scalar(s.get("cidr")),
            purpose: scalar(s.get("purpose")),
            zone: scalar(s.get("zone")),
        }),
        firewall_rules: string_list(v.get("firewallRules")),
        dns_config: scalar(v.get("dnsConfig")),
        load_balancing: scalar(v.get("loadBalancing")),
    }
}

fn server(v: &Value) -> Server {
    Server {
        hostname: scalar(v.get("hostname")),
        description: scalar(v.get("description")),
        role: scalar(v.get("role")),
        os: scalar(v.get("os")),
        vcpu: scalar(v.get("vcpu")),
        memory: scalar(v.get("memory")),
        storage: scalar(v.get("storage")),
        environment: scalar(v.get("environment")),
        migration_method: scalar(v.get("migrationMethod")),
    }
}

fn backup_requirements(value: Option<&Value>) -> BackupRequirements {
    let Some(v) = value.filter(|v| v.is_object()) else {
        return BackupRequirements::default();
    };
    BackupRequirements {
        policies: records(v.get("policies"), |p| BackupPolicy {
            policy_type: scalar(p.get("type")),
            frequency: scalar(p.get("frequency")),
            retention: scalar(p.get("retention")),
            tier: scalar(p.get("tier")),
        }),
        special_requirements: string_list(v.get("specialRequirements")),
    }
}

fn dr_strategy(value: Option<&Value>) -> DrStrategy {
    let Some(v) = value.filter(|v| v.is_object()) else {
        return DrStrategy::default();
    };
    DrStrategy {
        overview: scalar(v.get("overview")),
        rpo: scalar(v.get("rpo")),
        rto: scalar(v.get("rto")),
        dr_region: scalar(v.get("drRegion")),
        components: records(v.get("components"), |c| DrComponent {
            component: scalar(c.get("component")),
            dr_method: scalar(c.get("drMethod")),
            dr_region: scalar(c.get("drRegion")),
        }),
    }
}

fn migration_plan(value: Option<&Value>) -> MigrationPlan {
    let Some(v) = value.filter(|v| v.is_object()) else {
        return MigrationPlan::default();
    };
    MigrationPlan {
        strategy: scalar(v.get("strategy")),
        phases: records(v.get("phases"), |p| MigrationPhase {
            phase: scalar(p.get("phase")),
            activities: scalar(p.get("activities")),
            dependencies: scalar(p.get("dependencies")),
            deliverables: scalar(p.get("deliverables")),
        }),
        server_migrations: records(v.get("serverMigrations"), |m| ServerMigration {
            hostname: scalar(m.get("hostname")),
            description: scalar(m.get("description")),
            method: scalar(m.get("method")),
            phase: scalar(m.get("phase")),
        }),
    }
}

fn workload(v: &Value) -> Workload {
    Workload {
        name: scalar(v.get("name")),
        description: scalar(v.get("description")),
        infrastructure: scalar(v.get("infrastructure")),
        backup_policy: scalar(v.get("backupPolicy")),
        monitoring: scalar(v.get("monitoring")),
    }
}

fn sla_requirement(v: &Value) -> SlaRequirement {
    SlaRequirement {
        metric: scalar(v.get("metric")),
        target: scalar(v.get("target")),
        measurement_method: scalar(v.get("measurementMethod")),
    }
}

fn software_component(v: &Value) -> SoftwareComponent {
    SoftwareComponent {
        area: scalar(v.get("area")),
        product: scalar(v.get("product")),
        version: scalar(v.get("version")),
        license_type: scalar(v.get("licenseType")),
        responsible: scalar(v.get("responsible")),
    }
}
