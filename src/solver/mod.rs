//! MNA (Modified Nodal Analysis) matrix assembly.
//!
//! ## Modified Nodal Analysis
//!
//! MNA describes a linear network as Yx = z where:
//! - x contains node voltages and the voltage-source branch current
//! - Y is the complex admittance matrix
//! - z is the source vector
//!
//! For a network of N nodes driven by one AC source the matrix is
//! (N+1) x (N+1):
//! ```text
//! [ G   b ] [ v ]   [ 0 ]
//! [ bᵀ  0 ] [ j ] = [ e ]
//! ```
//!
//! where:
//! - G holds the node admittances (built by [`MatrixAssembler::fill`])
//! - b is a unit vector selecting the source's voltage node
//!   (stamped by [`MatrixAssembler::augment`])
//! - e is the source amplitude, supplied by the caller's solver
//!
//! Solving the system is outside this crate.

mod assembler;
mod mna;

pub use assembler::{
    AssembledSystem, AssemblyConfig, EvaluationContext, MatrixAssembler, OffDiagonalStamp,
};
pub use mna::AdmittanceMatrix;
