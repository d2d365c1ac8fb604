//! Error types for network construction and matrix assembly.
//!
//! This module provides a unified error type [`NodalError`] that covers
//! every failure the library reports: unresolved node lookups, impedances
//! that cannot be inverted, and malformed networks.

use thiserror::Error;

/// Result type alias using [`NodalError`].
pub type Result<T> = std::result::Result<T, NodalError>;

/// Unified error type for all network and assembly operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NodalError {
    // ============ Topology Errors ============
    /// Node label was never registered by a component
    #[error("Node '{node}' not found in network")]
    NodeNotFound { node: String },

    /// Network has no nodes to index
    #[error("Network has no nodes - add at least one component")]
    EmptyNetwork,

    /// Matrix does not match the network it is stamped from
    #[error("Matrix dimension {actual} does not match network (expected {expected})")]
    DimensionMismatch { expected: usize, actual: usize },

    // ============ Impedance Errors ============
    /// Zero or NaN impedance cannot be inverted into an admittance
    #[error("Component '{component}' has undefined admittance at {frequency} Hz")]
    UndefinedImpedance { component: String, frequency: f64 },

    /// Component value is not a positive finite number
    #[error("Invalid value {value} for component '{component}'")]
    InvalidValue { component: String, value: f64 },

    /// Source frequency is negative or not finite
    #[error("Invalid frequency {frequency} Hz for source '{source_label}'")]
    InvalidFrequency { source_label: String, frequency: f64 },

    // ============ Input Errors ============
    /// Malformed element description (CLI / bindings)
    #[error("Invalid element spec '{spec}': {message}")]
    InvalidComponentSpec { spec: String, message: String },
}

impl NodalError {
    /// Create a node-not-found error
    pub fn node_not_found(node: impl Into<String>) -> Self {
        Self::NodeNotFound { node: node.into() }
    }

    /// Create an undefined impedance error
    pub fn undefined_impedance(component: impl Into<String>, frequency: f64) -> Self {
        Self::UndefinedImpedance {
            component: component.into(),
            frequency,
        }
    }

    /// Create an invalid element spec error
    pub fn invalid_spec(spec: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidComponentSpec {
            spec: spec.into(),
            message: message.into(),
        }
    }
}
