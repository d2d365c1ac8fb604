//! Voltage sources.
//!
//! Sources are recorded on the network but only the first AC source takes
//! part in matrix assembly: it fixes the evaluation frequency and claims
//! the augmentation row/column. DC sources are carried for callers that
//! build their own right-hand side.

use num_complex::Complex64;

/// A DC voltage source between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct DcVoltageSource {
    pub label: String,
    pub voltage: f64,
    pub positive_node: String,
    pub negative_node: String,
}

impl DcVoltageSource {
    /// Create a new DC source.
    pub fn new(
        label: impl Into<String>,
        voltage: f64,
        positive_node: impl Into<String>,
        negative_node: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            voltage,
            positive_node: positive_node.into(),
            negative_node: negative_node.into(),
        }
    }
}

/// A sinusoidal voltage source at a single frequency.
///
/// The source enforces V(voltage_node) = voltage with `ground_node` as the
/// 0 V reference.
#[derive(Debug, Clone, PartialEq)]
pub struct AcVoltageSource {
    pub label: String,
    /// Complex amplitude (phasor)
    pub voltage: Complex64,
    pub ground_node: String,
    pub voltage_node: String,
    /// Hz
    pub frequency: f64,
}

impl AcVoltageSource {
    /// Create a new AC source.
    pub fn new(
        label: impl Into<String>,
        voltage: impl Into<Complex64>,
        ground_node: impl Into<String>,
        voltage_node: impl Into<String>,
        frequency: f64,
    ) -> Self {
        Self {
            label: label.into(),
            voltage: voltage.into(),
            ground_node: ground_node.into(),
            voltage_node: voltage_node.into(),
            frequency,
        }
    }
}
