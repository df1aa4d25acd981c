use serde_json::json;

use sowdoc::application::services::normalize;

#[test]
fn given_non_object_input_when_normalizing_then_returns_empty_analysis() {
    for raw in [json!(null), json!(42), json!("text"), json!([1, 2])] {
        let analysis = normalize(&raw, "sow");
        assert!(analysis.project_name.is_empty());
        assert!(analysis.requirements.is_empty());
        assert!(analysis.servers.is_empty());
        assert_eq!(analysis.raw_text, "sow");
    }
}

#[test]
fn given_mistyped_fields_when_normalizing_then_falls_back_to_defaults() {
    let raw = json!({
        "requirements": "not a list",
        "executiveSummary": ["wrong"],
        "networkDesign": null,
        "servers": {"hostname": "web01"}
    });

    let analysis = normalize(&raw, "");

    assert!(analysis.requirements.is_empty());
    assert!(analysis.executive_summary.overview.is_empty());
    assert!(analysis.network_design.subnets.is_empty());
    assert!(analysis.servers.is_empty());
}

#[test]
fn given_constraints_without_ids_when_normalizing_then_numbers_them() {
    let raw = json!({
        "constraints": [
            {"description": "Budget fixed"},
            null,
            {"id": "CON-900", "description": "Go-live in Q3"},
            "Change freeze in December"
        ],
        "risks": [{"description": "Skills gap"}]
    });

    let analysis = normalize(&raw, "");

    let ids: Vec<&str> = analysis.constraints.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["CON-001", "CON-900", "CON-003"]);
    assert_eq!(analysis.constraints[2].description, "Change freeze in December");
    assert_eq!(analysis.risks[0].id, "RSK-001");
}

#[test]
fn given_numeric_scalars_when_normalizing_then_stringifies_them() {
    let raw = json!({
        "servers": [{"hostname": "db01", "vcpu": 8, "memory": 32.5}],
        "requirements": ["HA", 99, null, true]
    });

    let analysis = normalize(&raw, "");

    assert_eq!(analysis.servers[0].vcpu, "8");
    assert_eq!(analysis.servers[0].memory, "32.5");
    assert_eq!(analysis.requirements, ["HA", "99", "true"]);
}

#[test]
fn given_vpn_connections_in_network_design_when_normalizing_then_mirrors_top_level() {
    let raw = json!({
        "networkDesign": {"vpnConnections": ["HQ to cloud"], "topology": "hub-spoke"}
    });

    let analysis = normalize(&raw, "");

    assert_eq!(analysis.vpn_connections, ["HQ to cloud"]);
    assert_eq!(analysis.network_design.vpn_connections, ["HQ to cloud"]);
    assert_eq!(analysis.network_design.topology, "hub-spoke");
}

#[test]
fn given_backup_policy_type_key_when_normalizing_then_maps_to_policy_type() {
    let raw = json!({
        "backupRequirements": {
            "policies": [{"type": "Daily", "retention": "30 days"}],
            "specialRequirements": ["Immutable copies"]
        }
    });

    let analysis = normalize(&raw, "");

    let policy = &analysis.backup_requirements.policies[0];
    assert_eq!(policy.policy_type, "Daily");
    assert_eq!(policy.retention, "30 days");
    assert!(policy.frequency.is_empty());
}
