//! High-Level Design outline: 23 chapters rendered in a fixed order.

mod architecture;
mod delivery;
mod operations;
mod planning;

use crate::domain::{DocumentBlock, RenderContext};

use super::section::{Section, omit, render_outline, table_of_contents};

use architecture::*;
use delivery::*;
use operations::*;
use planning::*;

const OUTLINE: &[Section] = &[
    Section::Fixed(table_of_contents),
    Section::Fixed(document_control),
    Section::Fixed(executive_summary_heading),
    Section::DataDriven {
        has_data: has_overview,
        from_data: overview_from_analysis,
        fallback: default_overview,
    },
    Section::Fixed(summary_highlights),
    Section::Fixed(strategy_principles),
    Section::Fixed(current_state_heading),
    Section::DataDriven {
        has_data: has_current_state,
        from_data: current_state_from_analysis,
        fallback: default_current_state,
    },
    Section::Fixed(target_state_heading),
    Section::DataDriven {
        has_data: has_target_state,
        from_data: target_state_from_analysis,
        fallback: default_target_state,
    },
    Section::Fixed(close_chapter),
    Section::Fixed(scope_intro),
    Section::DataDriven {
        has_data: has_in_scope,
        from_data: in_scope_from_analysis,
        fallback: default_in_scope,
    },
    Section::Fixed(out_of_scope_heading),
    Section::DataDriven {
        has_data: has_out_of_scope,
        from_data: out_of_scope_from_analysis,
        fallback: default_out_of_scope,
    },
    Section::Fixed(requirements_heading),
    Section::DataDriven {
        has_data: has_requirements,
        from_data: requirements_from_analysis,
        fallback: default_requirements,
    },
    Section::Fixed(assumptions_heading),
    Section::DataDriven {
        has_data: has_assumptions,
        from_data: assumptions_from_analysis,
        fallback: default_assumptions,
    },
    Section::Fixed(constraints_heading),
    Section::DataDriven {
        has_data: has_constraints,
        from_data: constraints_from_analysis,
        fallback: default_constraints,
    },
    Section::Fixed(risks_heading),
    Section::DataDriven {
        has_data: has_risks,
        from_data: risks_from_analysis,
        fallback: default_risks,
    },
    Section::Fixed(close_chapter),
    Section::Fixed(implementation_intro),
    Section::DataDriven {
        has_data: has_phases,
        from_data: phases_from_analysis,
        fallback: default_phases,
    },
    Section::Fixed(raci_matrix),
    // 6. Solution architecture
    Section::Fixed(solution_architecture),
    Section::DataDriven {
        has_data: has_software_components,
        from_data: software_from_analysis,
        fallback: default_software,
    },
    Section::Fixed(naming_convention),
    Section::Fixed(management_zone),
    // 9. Infrastructure
    Section::Fixed(infrastructure_foundation),
    Section::DataDriven {
        has_data: has_vpn_connections,
        from_data: vpn_from_analysis,
        fallback: default_vpn,
    },
    Section::Fixed(network_security),
    Section::DataDriven {
        has_data: has_network_ranges,
        from_data: ranges_from_analysis,
        fallback: default_ranges,
    },
    Section::Fixed(network_services_and_storage),
    Section::DataDriven {
        has_data: has_production_servers,
        from_data: production_servers,
        fallback: default_production_servers,
    },
    Section::Fixed(dr_servers),
    Section::Fixed(compute_placement_and_identity),
    // 10-16. Operations
    Section::Fixed(backup_overview),
    Section::DataDriven {
        has_data: has_backup_policies,
        from_data: backup_policies_from_analysis,
        fallback: default_backup_policies,
    },
    Section::Fixed(backup_operations),
    Section::Fixed(provider_service_zone),
    Section::Fixed(patching),
    Section::Fixed(security_hardening),
    Section::DataDriven {
        has_data: has_security_requirements,
        from_data: security_requirements,
        fallback: omit,
    },
    Section::DataDriven {
        has_data: has_compliance_requirements,
        from_data: compliance_requirements,
        fallback: omit,
    },
    Section::Fixed(networking_solution),
    Section::DataDriven {
        has_data: has_components,
        from_data: components_from_analysis,
        fallback: default_components,
    },
    Section::Fixed(high_availability),
    // 17-23. Delivery
    Section::Fixed(application_architecture),
    Section::DataDriven {
        has_data: has_dr_overview,
        from_data: dr_overview_from_analysis,
        fallback: default_dr_overview,
    },
    Section::Fixed(management_dr_heading),
    Section::DataDriven {
        has_data: has_dr_components,
        from_data: dr_components_from_analysis,
        fallback: default_dr_components,
    },
    Section::Fixed(dr_backup_and_applications),
    Section::DataDriven {
        has_data: has_migration_strategy,
        from_data: migration_strategy_from_analysis,
        fallback: default_migration_strategy,
    },
    Section::Fixed(migration_methodology),
    Section::DataDriven {
        has_data: has_server_migrations,
        from_data: server_migrations_from_analysis,
        fallback: default_server_migrations,
    },
    Section::Fixed(migration_phases),
    Section::DataDriven {
        has_data: has_workloads,
        from_data: workloads_from_analysis,
        fallback: default_workloads,
    },
    Section::Fixed(workload_operations),
    Section::Fixed(infrastructure_as_code),
    Section::DataDriven {
        has_data: has_sla_requirements,
        from_data: sla_from_analysis,
        fallback: default_sla,
    },
    Section::Fixed(appendix),
    Section::DataDriven {
        has_data: has_additional_info,
        from_data: additional_notes,
        fallback: omit,
    },
];

/// Builds the block sequence of a High-Level Design document. The title page
/// is added by the renderer.
pub fn assemble_hld(ctx: &RenderContext) -> Vec<DocumentBlock> {
    render_outline(OUTLINE, ctx)
}
