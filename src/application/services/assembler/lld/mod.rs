//! Low-Level Design outline: 16 chapters of concrete network configuration.
//! Resource names use the full project name.

mod network;
mod services;

use crate::domain::{DocumentBlock, RenderContext};

use super::section::{Section, omit, render_outline, table_of_contents};

use network::*;
use services::*;

const OUTLINE: &[Section] = &[
    Section::Fixed(table_of_contents),
    Section::Fixed(document_control),
    Section::Fixed(introduction),
    Section::DataDriven {
        has_data: has_vpn_connections,
        from_data: vpn_from_analysis,
        fallback: default_vpn,
    },
    Section::Fixed(traffic_and_network_summary),
    Section::DataDriven {
        has_data: has_network_ranges,
        from_data: ranges_from_analysis,
        fallback: default_ranges,
    },
    Section::Fixed(subnets_and_gateways),
    Section::Fixed(route_tables),
    Section::Fixed(security_groups),
    Section::Fixed(endpoints_and_public_ips),
    Section::Fixed(vpn_configuration),
    Section::DataDriven {
        has_data: has_fortinet,
        from_data: fortinet_appliances,
        fallback: generic_appliances,
    },
    Section::Fixed(appliance_ports_and_soc),
    Section::Fixed(availability_and_naming),
    Section::Fixed(hub_routing),
    Section::Fixed(appendix),
    Section::DataDriven {
        has_data: has_additional_info,
        from_data: additional_notes,
        fallback: omit,
    },
];

/// Builds the block sequence of a Low-Level Design document. The title page
/// is added by the renderer.
pub fn assemble_lld(ctx: &RenderContext) -> Vec<DocumentBlock> {
    render_outline(OUTLINE, ctx)
}
