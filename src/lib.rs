//! # Nodal Core
//!
//! Admittance matrix assembly for linear RLC networks.
//!
//! This library provides:
//! - A builder for networks of resistors, capacitors, inductors and voltage sources
//! - A complex impedance model that represents DC opens and shorts explicitly
//! - Modified Nodal Analysis (MNA) matrix assembly at DC or a single AC frequency
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Network builder, node indexing and validation
//! - [`components`] - Component and source models
//! - [`elements`] - One-element text descriptions for the CLI and bindings
//! - [`solver`] - Admittance matrix storage and assembly
//! - [`error`] - Unified error type
//!
//! ## Usage
//!
//! ```
//! use nodal_core::{ComponentKind, MatrixAssembler, NetworkBuilder};
//!
//! let mut builder = NetworkBuilder::new();
//! builder.add_component("R1", ComponentKind::Resistor, 1000.0, ["n1", "n2"]);
//! builder.add_component("R2", ComponentKind::Resistor, 2000.0, ["n2", "n3"]);
//! builder.add_ac_voltage_source("V1", 1.0, "n1", "n3", 60.0);
//!
//! let system = MatrixAssembler::new().assemble(&builder.build()).unwrap();
//! assert_eq!(system.dimension(), 4);
//! assert_eq!(system.matrix.get(3, 2).re, 1.0);
//! ```
//!
//! ### CLI
//!
//! ```bash
//! nodal -c R1=r:1k:n1:n2 -c R2=r:2000:n2:n3 --ac V1=1:n1:n3:60
//! ```
//!
//! The resulting matrix is handed to an external linear solver; this crate
//! never solves for node voltages.

pub mod circuit;
pub mod components;
pub mod elements;
pub mod error;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{ComponentKind, Network, NetworkBuilder};
pub use error::{NodalError, Result};
pub use solver::{
    AdmittanceMatrix, AssembledSystem, AssemblyConfig, EvaluationContext, MatrixAssembler,
};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmNetwork;
