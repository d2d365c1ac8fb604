//! Network graph structure.

use std::collections::HashMap;

use num_complex::Complex64;

use super::types::{ComponentId, ComponentKind};
use crate::components::{AcVoltageSource, Component, DcVoltageSource};
use crate::error::{NodalError, Result};

/// Incrementally builds a [`Network`].
///
/// Nodes are discovered from the components that reference them, in
/// first-seen order. That order becomes the row/column order of the
/// admittance matrix.
#[derive(Debug, Default, Clone)]
pub struct NetworkBuilder {
    components: Vec<Component>,
    node_map: HashMap<String, usize>,
    nodes: Vec<String>,
    adjacency: Vec<Vec<ComponentId>>,
    dc_sources: Vec<DcVoltageSource>,
    ac_sources: Vec<AcVoltageSource>,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a two-terminal component between `nodes[0]` and `nodes[1]`.
    ///
    /// Unseen node labels are appended to the node list. The component is
    /// appended to the adjacency list of both nodes. Values are not
    /// checked here; see [`validate_network`](super::validate_network).
    pub fn add_component(
        &mut self,
        label: impl Into<String>,
        kind: ComponentKind,
        value: f64,
        nodes: [&str; 2],
    ) -> ComponentId {
        let id = ComponentId(self.components.len());
        let component = Component::new(
            id,
            label,
            kind,
            value,
            [nodes[0].to_string(), nodes[1].to_string()],
        );
        tracing::debug!(
            component = %component.label,
            %kind,
            value,
            a = nodes[0],
            b = nodes[1],
            "adding component"
        );

        for node in nodes {
            let index = self.intern_node(node);
            self.adjacency[index].push(id);
        }
        self.components.push(component);
        id
    }

    /// Record a DC voltage source. Its nodes need not exist yet.
    pub fn add_dc_voltage_source(
        &mut self,
        label: impl Into<String>,
        voltage: f64,
        positive_node: &str,
        negative_node: &str,
    ) -> &mut Self {
        let source = DcVoltageSource::new(label, voltage, positive_node, negative_node);
        tracing::debug!(source = %source.label, voltage, "adding DC voltage source");
        self.dc_sources.push(source);
        self
    }

    /// Record an AC voltage source. Its nodes need not exist yet.
    pub fn add_ac_voltage_source(
        &mut self,
        label: impl Into<String>,
        voltage: impl Into<Complex64>,
        ground_node: &str,
        voltage_node: &str,
        frequency: f64,
    ) -> &mut Self {
        let source = AcVoltageSource::new(label, voltage, ground_node, voltage_node, frequency);
        tracing::debug!(source = %source.label, frequency, "adding AC voltage source");
        self.ac_sources.push(source);
        self
    }

    /// Number of nodes discovered so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Freeze the builder into an immutable network.
    pub fn build(self) -> Network {
        Network {
            components: self.components,
            node_map: self.node_map,
            nodes: self.nodes,
            adjacency: self.adjacency,
            dc_sources: self.dc_sources,
            ac_sources: self.ac_sources,
        }
    }

    fn intern_node(&mut self, label: &str) -> usize {
        if let Some(&index) = self.node_map.get(label) {
            return index;
        }
        let index = self.nodes.len();
        self.node_map.insert(label.to_string(), index);
        self.nodes.push(label.to_string());
        self.adjacency.push(Vec::new());
        index
    }
}

/// An immutable network ready for matrix assembly.
#[derive(Debug, Clone)]
pub struct Network {
    components: Vec<Component>,
    /// Node label -> matrix index
    node_map: HashMap<String, usize>,
    /// Matrix index -> node label
    nodes: Vec<String>,
    /// Incident components per node index, in insertion order
    adjacency: Vec<Vec<ComponentId>>,
    dc_sources: Vec<DcVoltageSource>,
    ac_sources: Vec<AcVoltageSource>,
}

impl Network {
    /// All components in insertion order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Node labels in matrix order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Matrix index of a node label.
    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.node_map.get(label).copied()
    }

    /// Matrix index of a node label, or `NodeNotFound`.
    pub fn require_node(&self, label: &str) -> Result<usize> {
        self.node_index(label).ok_or_else(|| NodalError::node_not_found(label))
    }

    /// Ids of the components incident on the node at `index`.
    pub fn adjacency(&self, index: usize) -> &[ComponentId] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Components incident on `node`, in insertion order.
    pub fn linked_components(&self, node: &str) -> Result<Vec<&Component>> {
        let index = self.require_node(node)?;
        Ok(self.adjacency[index]
            .iter()
            .map(|id| &self.components[id.0])
            .collect())
    }

    /// Matrix indices of a component's two terminals.
    pub fn node_indexes(&self, component: &Component) -> Result<[usize; 2]> {
        Ok([
            self.require_node(&component.nodes[0])?,
            self.require_node(&component.nodes[1])?,
        ])
    }

    /// DC sources in insertion order.
    pub fn dc_sources(&self) -> &[DcVoltageSource] {
        &self.dc_sources
    }

    /// AC sources in insertion order.
    pub fn ac_sources(&self) -> &[AcVoltageSource] {
        &self.ac_sources
    }

    /// The AC source that drives assembly, if any.
    pub fn first_ac_source(&self) -> Option<&AcVoltageSource> {
        self.ac_sources.first()
    }

    /// Whether the network has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
