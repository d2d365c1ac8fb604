//! Network validation.

use crate::error::{NodalError, Result};

use super::Network;

/// Validate a network before assembly.
///
/// Checks:
/// - The network has at least one component
/// - Component values are positive and finite
/// - AC sources reference registered nodes and carry a usable frequency
///
/// Duplicate labels and DC source nodes are not checked.
pub fn validate_network(network: &Network) -> Result<()> {
    if network.is_empty() {
        return Err(NodalError::EmptyNetwork);
    }

    for component in network.components() {
        if !component.value.is_finite() || component.value <= 0.0 {
            return Err(NodalError::InvalidValue {
                component: component.label.clone(),
                value: component.value,
            });
        }
    }

    for source in network.ac_sources() {
        if !source.frequency.is_finite() || source.frequency < 0.0 {
            return Err(NodalError::InvalidFrequency {
                source_label: source.label.clone(),
                frequency: source.frequency,
            });
        }
        network.require_node(&source.ground_node)?;
        network.require_node(&source.voltage_node)?;
    }

    Ok(())
}
