//! Network graph representation and validation.
//!
//! This module provides the topology side of assembly. A [`NetworkBuilder`]
//! accumulates components and sources, discovering nodes as components
//! reference them, and freezes into an immutable [`Network`] that maps node
//! labels to matrix indices.

mod graph;
mod types;
mod validate;

pub use graph::{Network, NetworkBuilder};
pub use types::*;
pub use validate::validate_network;
