//! WASM bindings for Nodal Core.
//!
//! This module provides JavaScript-friendly bindings for building a network
//! in the browser and handing its admittance matrix to a JS solver.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmNetwork } from 'nodal_core';
//!
//! await init();
//!
//! const net = new WasmNetwork();
//! net.add_component("R1", "resistor", 1000, "n1", "n2");
//! net.add_component("C1", "capacitor", 1e-6, "n2", "n3");
//! net.add_ac_voltage_source("V1", 1.0, "n1", "n3", 60);
//!
//! const n = net.dimension();
//! const cells = net.assemble(); // row-major [re, im, re, im, ...]
//! const y23 = { re: cells[2 * (2 * n + 3)], im: cells[2 * (2 * n + 3) + 1] };
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{ComponentKind, NetworkBuilder};
use crate::elements::parse_value;
use crate::solver::{AssemblyConfig, MatrixAssembler, OffDiagonalStamp};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible network builder and assembler.
///
/// Wraps a [`NetworkBuilder`]; every call to [`assemble`](Self::assemble)
/// snapshots the current network and builds a fresh matrix.
#[wasm_bindgen]
pub struct WasmNetwork {
    builder: NetworkBuilder,
    config: AssemblyConfig,
}

#[wasm_bindgen]
impl WasmNetwork {
    /// Create an empty network.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmNetwork {
        WasmNetwork {
            builder: NetworkBuilder::new(),
            config: AssemblyConfig::new(),
        }
    }

    /// Add a component.
    ///
    /// # Arguments
    /// * `kind` - `"resistor"`, `"capacitor"`, `"inductor"` (or `r`, `c`, `l`)
    /// * `value` - Ohms, farads or henries
    #[wasm_bindgen]
    pub fn add_component(
        &mut self,
        label: &str,
        kind: &str,
        value: f64,
        node_a: &str,
        node_b: &str,
    ) -> Result<(), JsValue> {
        let kind: ComponentKind = kind
            .parse()
            .map_err(|e: crate::NodalError| JsValue::from_str(&e.to_string()))?;
        self.builder.add_component(label, kind, value, [node_a, node_b]);
        Ok(())
    }

    /// Add a component with an SI-suffixed value such as `"4.7k"`.
    #[wasm_bindgen]
    pub fn add_component_str(
        &mut self,
        label: &str,
        kind: &str,
        value: &str,
        node_a: &str,
        node_b: &str,
    ) -> Result<(), JsValue> {
        let value = parse_value(value)
            .ok_or_else(|| JsValue::from_str(&format!("bad number '{}'", value)))?;
        self.add_component(label, kind, value, node_a, node_b)
    }

    /// Record a DC voltage source.
    #[wasm_bindgen]
    pub fn add_dc_voltage_source(
        &mut self,
        label: &str,
        voltage: f64,
        positive_node: &str,
        negative_node: &str,
    ) {
        self.builder
            .add_dc_voltage_source(label, voltage, positive_node, negative_node);
    }

    /// Record an AC voltage source. The first one sets the frequency.
    #[wasm_bindgen]
    pub fn add_ac_voltage_source(
        &mut self,
        label: &str,
        voltage: f64,
        ground_node: &str,
        voltage_node: &str,
        frequency: f64,
    ) {
        self.builder
            .add_ac_voltage_source(label, voltage, ground_node, voltage_node, frequency);
    }

    /// Use symmetric accumulated off-diagonal stamping.
    #[wasm_bindgen]
    pub fn set_canonical(&mut self, canonical: bool) {
        let policy = if canonical {
            OffDiagonalStamp::Canonical
        } else {
            OffDiagonalStamp::LastWrite
        };
        self.config = self.config.clone().with_off_diagonal(policy);
    }

    /// Node labels in matrix order.
    #[wasm_bindgen]
    pub fn nodes(&self) -> Vec<String> {
        self.builder.clone().build().nodes().to_vec()
    }

    /// Matrix dimension (node count + 1).
    #[wasm_bindgen]
    pub fn dimension(&self) -> usize {
        self.builder.node_count() + 1
    }

    /// Assemble the admittance matrix.
    ///
    /// # Returns
    /// A Float64Array of `2 * dimension²` values: row-major cells with
    /// real and imaginary parts interleaved.
    #[wasm_bindgen]
    pub fn assemble(&self) -> Result<Vec<f64>, JsValue> {
        let network = self.builder.clone().build();
        let system = MatrixAssembler::with_config(self.config.clone())
            .assemble(&network)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(system
            .matrix
            .as_slice()
            .iter()
            .flat_map(|c| [c.re, c.im])
            .collect())
    }
}

impl Default for WasmNetwork {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
