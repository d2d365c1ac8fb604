//! Admittance matrix assembly.

use num_complex::Complex64;

use crate::circuit::Network;
use crate::error::{NodalError, Result};

use super::mna::AdmittanceMatrix;

/// How each component's admittance is written off the diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffDiagonalStamp {
    /// Assign `Y[a][b] = y` for each component's terminal pair (a, b), in
    /// component order. `Y[b][a]` is left untouched and parallel
    /// components overwrite each other.
    #[default]
    LastWrite,
    /// Accumulate `-y` into both `Y[a][b]` and `Y[b][a]`, giving the
    /// symmetric nodal admittance matrix.
    Canonical,
}

/// Configuration for the matrix assembler.
#[derive(Debug, Clone, Default)]
pub struct AssemblyConfig {
    /// Off-diagonal stamping policy.
    pub off_diagonal: OffDiagonalStamp,
    /// Conductance substituted for zero-impedance components. When unset,
    /// a short is reported as [`NodalError::UndefinedImpedance`].
    pub short_conductance: Option<f64>,
}

impl AssemblyConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the off-diagonal stamping policy.
    pub fn with_off_diagonal(mut self, off_diagonal: OffDiagonalStamp) -> Self {
        self.off_diagonal = off_diagonal;
        self
    }

    /// Replace shorts (inductors at DC, 0 Ω resistors) with conductance `g`.
    pub fn with_short_conductance(mut self, g: f64) -> Self {
        self.short_conductance = Some(g);
        self
    }
}

/// The frequency a matrix is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationContext {
    /// Hz; 0 selects DC
    pub frequency: f64,
}

impl EvaluationContext {
    /// DC evaluation.
    pub fn dc() -> Self {
        Self { frequency: 0.0 }
    }

    /// AC evaluation at `frequency` Hz.
    pub fn ac(frequency: f64) -> Self {
        Self { frequency }
    }

    /// Frequency of the network's first AC source, or DC without one.
    pub fn from_network(network: &Network) -> Self {
        network
            .first_ac_source()
            .map_or_else(Self::dc, |source| Self::ac(source.frequency))
    }

    /// Whether this is a DC evaluation.
    pub fn is_dc(&self) -> bool {
        self.frequency == 0.0
    }
}

/// Result of a full assembly: matrix plus the index mapping.
#[derive(Debug, Clone)]
pub struct AssembledSystem {
    pub matrix: AdmittanceMatrix,
    pub frequency: f64,
    /// Node labels in row/column order
    pub nodes: Vec<String>,
}

impl AssembledSystem {
    /// Matrix dimension (node count + 1).
    pub fn dimension(&self) -> usize {
        self.matrix.size()
    }

    /// Row/column of a node label.
    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node == label)
    }

    /// Whether the augmentation row carries a constraint.
    pub fn is_augmented(&self) -> bool {
        let aug = self.matrix.augmentation_index();
        self.matrix.row(aug).iter().any(|c| *c != Complex64::new(0.0, 0.0))
    }
}

/// Builds admittance matrices from a [`Network`].
///
/// The assembler holds only configuration; every call produces a fresh
/// matrix.
#[derive(Debug, Clone, Default)]
pub struct MatrixAssembler {
    config: AssemblyConfig,
}

impl MatrixAssembler {
    /// Create an assembler with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assembler with a custom configuration.
    pub fn with_config(config: AssemblyConfig) -> Self {
        Self { config }
    }

    /// Fill, then augment, at the frequency of the first AC source.
    pub fn assemble(&self, network: &Network) -> Result<AssembledSystem> {
        self.assemble_at(network, EvaluationContext::from_network(network))
    }

    /// Fill at an explicit frequency, then augment.
    pub fn assemble_at(
        &self,
        network: &Network,
        ctx: EvaluationContext,
    ) -> Result<AssembledSystem> {
        let _span = tracing::info_span!(
            "assemble",
            nodes = network.node_count(),
            components = network.components().len(),
            frequency = ctx.frequency
        )
        .entered();

        let mut matrix = self.fill(network, &ctx)?;
        self.augment(network, &mut matrix)?;

        Ok(AssembledSystem {
            matrix,
            frequency: ctx.frequency,
            nodes: network.nodes().to_vec(),
        })
    }

    /// Build the (N+1) x (N+1) admittance matrix without the source
    /// constraint.
    ///
    /// Diagonal `[i][i]` is the sum of admittances incident on node i.
    /// Off-diagonal cells follow [`AssemblyConfig::off_diagonal`].
    pub fn fill(&self, network: &Network, ctx: &EvaluationContext) -> Result<AdmittanceMatrix> {
        if !ctx.frequency.is_finite() || ctx.frequency < 0.0 {
            return Err(NodalError::InvalidFrequency {
                source_label: "evaluation context".to_string(),
                frequency: ctx.frequency,
            });
        }
        let n = network.node_count();
        if n == 0 {
            return Err(NodalError::EmptyNetwork);
        }

        let admittances = network
            .components()
            .iter()
            .map(|c| c.admittance(ctx.frequency, self.config.short_conductance))
            .collect::<Result<Vec<_>>>()?;

        let mut matrix = AdmittanceMatrix::zeros(n + 1);

        for i in 0..n {
            let diagonal = network
                .adjacency(i)
                .iter()
                .map(|id| admittances[id.0])
                .sum::<Complex64>();
            matrix.set(i, i, diagonal);
        }

        for (component, &y) in network.components().iter().zip(&admittances) {
            let [row, col] = network.node_indexes(component)?;
            match self.config.off_diagonal {
                OffDiagonalStamp::LastWrite => matrix.set(row, col, y),
                OffDiagonalStamp::Canonical => matrix.stamp_mutual(row, col, y),
            }
        }

        tracing::debug!(
            size = matrix.size(),
            policy = ?self.config.off_diagonal,
            "filled admittance matrix"
        );
        Ok(matrix)
    }

    /// Write the first AC source's constraint into the last row/column.
    ///
    /// Sets `Y[N][v] = Y[v][N] = 1` where v is the source's voltage node.
    /// The ground node is the implicit reference and gets no entry. The
    /// source amplitude belongs on the right-hand side and is not written.
    /// Without an AC source the matrix is left as is.
    pub fn augment(&self, network: &Network, matrix: &mut AdmittanceMatrix) -> Result<()> {
        let expected = network.node_count() + 1;
        if matrix.size() != expected {
            return Err(NodalError::DimensionMismatch {
                expected,
                actual: matrix.size(),
            });
        }
        let Some(source) = network.first_ac_source() else {
            tracing::debug!("no AC source, augmentation skipped");
            return Ok(());
        };

        let voltage_index = network.require_node(&source.voltage_node)?;
        network.require_node(&source.ground_node)?;

        let aug = network.node_count();
        let one = Complex64::new(1.0, 0.0);
        matrix.set(aug, voltage_index, one);
        matrix.set(voltage_index, aug, one);

        if network.ac_sources().len() > 1 {
            tracing::warn!(
                used = %source.label,
                ignored = network.ac_sources().len() - 1,
                "only the first AC source is stamped"
            );
        }
        tracing::debug!(source = %source.label, voltage_index, "augmented admittance matrix");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{ComponentKind, NetworkBuilder};
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    fn zero() -> Complex64 {
        Complex64::new(0.0, 0.0)
    }

    fn divider() -> NetworkBuilder {
        let mut builder = NetworkBuilder::new();
        builder.add_component("R1", ComponentKind::Resistor, 1000.0, ["n1", "n2"]);
        builder.add_component("R2", ComponentKind::Resistor, 2000.0, ["n2", "n3"]);
        builder
    }

    #[test]
    fn test_context_from_network() {
        assert!(EvaluationContext::from_network(&divider().build()).is_dc());

        let mut builder = divider();
        builder
            .add_ac_voltage_source("V1", 1.0, "n1", "n3", 60.0)
            .add_ac_voltage_source("V2", 1.0, "n1", "n3", 400.0);
        assert_eq!(EvaluationContext::from_network(&builder.build()).frequency, 60.0);
    }

    #[test]
    fn test_fill_divider_diagonal() {
        let network = divider().build();
        let m = MatrixAssembler::new().fill(&network, &EvaluationContext::dc()).unwrap();

        assert_eq!(m.size(), 4);
        assert_relative_eq!(m.get(0, 0).re, 1.0 / 1000.0);
        assert_relative_eq!(m.get(1, 1).re, 1.0 / 1000.0 + 1.0 / 2000.0);
        assert_relative_eq!(m.get(2, 2).re, 1.0 / 2000.0);
        for i in 0..3 {
            assert_eq!(m.get(i, i).im, 0.0);
        }
    }

    #[test]
    fn test_last_write_off_diagonal_is_one_directional() {
        let network = divider().build();
        let m = MatrixAssembler::new().fill(&network, &EvaluationContext::dc()).unwrap();

        assert_relative_eq!(m.get(0, 1).re, 1.0 / 1000.0);
        assert_relative_eq!(m.get(1, 2).re, 1.0 / 2000.0);
        assert_eq!(m.get(1, 0), zero());
        assert_eq!(m.get(2, 1), zero());
        assert!(!m.is_symmetric(1e-15));
    }

    #[test]
    fn test_last_write_parallel_components_overwrite() {
        let mut builder = NetworkBuilder::new();
        builder.add_component("R1", ComponentKind::Resistor, 100.0, ["a", "b"]);
        builder.add_component("R2", ComponentKind::Resistor, 400.0, ["a", "b"]);
        let m = MatrixAssembler::new()
            .fill(&builder.build(), &EvaluationContext::dc())
            .unwrap();

        assert_relative_eq!(m.get(0, 1).re, 1.0 / 400.0);
        assert_relative_eq!(m.get(0, 0).re, 1.0 / 100.0 + 1.0 / 400.0);
    }

    #[test]
    fn test_canonical_off_diagonal_is_symmetric_sum() {
        let mut builder = NetworkBuilder::new();
        builder.add_component("R1", ComponentKind::Resistor, 100.0, ["a", "b"]);
        builder.add_component("R2", ComponentKind::Resistor, 400.0, ["b", "a"]);
        builder.add_component("C1", ComponentKind::Capacitor, 1e-6, ["b", "c"]);
        let assembler = MatrixAssembler::with_config(
            AssemblyConfig::new().with_off_diagonal(OffDiagonalStamp::Canonical),
        );
        let m = assembler.fill(&builder.build(), &EvaluationContext::ac(1000.0)).unwrap();

        let g = 1.0 / 100.0 + 1.0 / 400.0;
        assert_relative_eq!(m.get(0, 1).re, -g);
        assert_relative_eq!(m.get(1, 0).re, -g);
        assert_relative_eq!(m.get(1, 2).im, -TAU * 1000.0 * 1e-6, max_relative = 1e-12);
        assert!(m.is_symmetric(1e-15));
    }

    #[test]
    fn test_canonical_self_loop_cancels() {
        let mut builder = NetworkBuilder::new();
        builder.add_component("R1", ComponentKind::Resistor, 10.0, ["a", "b"]);
        builder.add_component("R2", ComponentKind::Resistor, 50.0, ["a", "a"]);
        let assembler = MatrixAssembler::with_config(
            AssemblyConfig::new().with_off_diagonal(OffDiagonalStamp::Canonical),
        );
        let m = assembler.fill(&builder.build(), &EvaluationContext::dc()).unwrap();
        assert_relative_eq!(m.get(0, 0).re, 0.1, max_relative = 1e-12);
    }

    #[test]
    fn test_diagonal_independent_of_add_order() {
        let parts = [
            ("R1", ComponentKind::Resistor, 330.0, ["a", "b"]),
            ("C1", ComponentKind::Capacitor, 47e-9, ["b", "c"]),
            ("L1", ComponentKind::Inductor, 2e-3, ["a", "c"]),
            ("R2", ComponentKind::Resistor, 1e3, ["c", "b"]),
        ];
        let ctx = EvaluationContext::ac(5e3);

        let diagonal_of = |order: &[usize]| {
            let mut builder = NetworkBuilder::new();
            for &i in order {
                let (label, kind, value, nodes) = parts[i];
                builder.add_component(label, kind, value, nodes);
            }
            let network = builder.build();
            let m = MatrixAssembler::new().fill(&network, &ctx).unwrap();
            ["a", "b", "c"].map(|node| {
                let i = network.node_index(node).unwrap();
                m.get(i, i)
            })
        };

        let forward = diagonal_of(&[0, 1, 2, 3]);
        let reverse = diagonal_of(&[3, 2, 1, 0]);
        for (f, r) in forward.iter().zip(&reverse) {
            assert_relative_eq!(f.re, r.re, max_relative = 1e-12);
            assert_relative_eq!(f.im, r.im, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_inductor_at_dc_is_error_unless_shorted() {
        let mut builder = NetworkBuilder::new();
        builder.add_component("L1", ComponentKind::Inductor, 1e-3, ["a", "b"]);
        let network = builder.build();

        let err = MatrixAssembler::new()
            .fill(&network, &EvaluationContext::dc())
            .unwrap_err();
        assert_eq!(err, NodalError::undefined_impedance("L1", 0.0));

        let assembler =
            MatrixAssembler::with_config(AssemblyConfig::new().with_short_conductance(1e6));
        let m = assembler.fill(&network, &EvaluationContext::dc()).unwrap();
        assert_eq!(m.get(0, 0), Complex64::new(1e6, 0.0));
    }

    #[test]
    fn test_capacitor_at_dc_is_open() {
        let mut builder = NetworkBuilder::new();
        builder.add_component("C1", ComponentKind::Capacitor, 1e-6, ["a", "b"]);
        let m = MatrixAssembler::new()
            .fill(&builder.build(), &EvaluationContext::dc())
            .unwrap();
        assert!(m.as_slice().iter().all(|c| *c == zero()));
    }

    #[test]
    fn test_empty_network_rejected() {
        let network = NetworkBuilder::new().build();
        assert_eq!(
            MatrixAssembler::new().assemble(&network).unwrap_err(),
            NodalError::EmptyNetwork
        );
    }

    #[test]
    fn test_augment_without_source_is_noop() {
        let network = divider().build();
        let assembler = MatrixAssembler::new();
        let mut m = assembler.fill(&network, &EvaluationContext::dc()).unwrap();
        let before = m.clone();
        assembler.augment(&network, &mut m).unwrap();
        assert_eq!(m, before);
        assert!((0..4).all(|i| m.get(3, i) == zero() && m.get(i, 3) == zero()));
    }

    #[test]
    fn test_augment_stamps_voltage_node_only() {
        let mut builder = divider();
        builder.add_ac_voltage_source("V1", 5.0, "n1", "n3", 60.0);
        let system = MatrixAssembler::new().assemble(&builder.build()).unwrap();
        let m = &system.matrix;
        let one = Complex64::new(1.0, 0.0);

        assert_eq!(m.get(3, 2), one);
        assert_eq!(m.get(2, 3), one);
        for i in [0, 1, 3] {
            assert_eq!(m.get(3, i), zero());
            assert_eq!(m.get(i, 3), zero());
        }
        assert!(system.is_augmented());
        assert_eq!(system.frequency, 60.0);
    }

    #[test]
    fn test_augment_unknown_voltage_node() {
        let mut builder = divider();
        builder.add_ac_voltage_source("V1", 5.0, "n1", "n9", 60.0);
        assert_eq!(
            MatrixAssembler::new().assemble(&builder.build()).unwrap_err(),
            NodalError::node_not_found("n9")
        );
    }

    #[test]
    fn test_assemble_at_overrides_source_frequency() {
        let mut builder = NetworkBuilder::new();
        builder.add_component("C1", ComponentKind::Capacitor, 1e-6, ["in", "out"]);
        builder.add_ac_voltage_source("V1", 1.0, "out", "in", 60.0);
        let network = builder.build();

        let system = MatrixAssembler::new()
            .assemble_at(&network, EvaluationContext::ac(1000.0))
            .unwrap();
        assert_eq!(system.frequency, 1000.0);
        assert_relative_eq!(
            system.matrix.get(0, 0).im,
            TAU * 1000.0 * 1e-6,
            max_relative = 1e-12
        );
        assert_eq!(system.node_index("out"), Some(1));
    }

    #[test]
    fn test_nan_value_rejected_on_assembly() {
        let mut builder = NetworkBuilder::new();
        builder.add_component("R1", ComponentKind::Resistor, f64::NAN, ["a", "b"]);
        assert!(matches!(
            MatrixAssembler::new().assemble(&builder.build()),
            Err(NodalError::UndefinedImpedance { component, .. }) if component == "R1"
        ));
    }

    #[test]
    fn test_non_finite_frequency_rejected() {
        let mut builder = NetworkBuilder::new();
        builder.add_component("C1", ComponentKind::Capacitor, 1e-6, ["a", "b"]);
        builder.add_component("L1", ComponentKind::Inductor, 1e-3, ["a", "b"]);
        let network = builder.build();
        let assembler = MatrixAssembler::new();

        for f in [f64::NAN, f64::INFINITY, -60.0] {
            assert!(matches!(
                assembler.assemble_at(&network, EvaluationContext::ac(f)),
                Err(NodalError::InvalidFrequency { .. })
            ));
        }
    }

    #[test]
    fn test_augment_rejects_foreign_matrix() {
        let mut builder = divider();
        builder.add_ac_voltage_source("V1", 1.0, "n1", "n2", 60.0);
        let network = builder.build();
        let assembler = MatrixAssembler::new();

        for size in [6, 2] {
            let mut m = AdmittanceMatrix::zeros(size);
            assert_eq!(
                assembler.augment(&network, &mut m),
                Err(NodalError::DimensionMismatch {
                    expected: 4,
                    actual: size
                })
            );
            assert_eq!(m, AdmittanceMatrix::zeros(size));
        }
    }
}
