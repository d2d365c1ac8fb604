//! Component models for network assembly.
//!
//! This module provides:
//! - Linear: Resistor, Capacitor, Inductor (as [`Component`] with a
//!   [`ComponentKind`](crate::circuit::ComponentKind))
//! - Sources: DC and AC voltage sources
//!
//! Each component reduces to an [`Impedance`] at the evaluation frequency,
//! which the assembler inverts and stamps into the admittance matrix.

mod linear;
mod sources;

pub use linear::{Component, Impedance};
pub use sources::{AcVoltageSource, DcVoltageSource};
