//! Linear passive components: Resistor, Capacitor, Inductor.
//!
//! Every component reduces to a complex impedance at a given frequency:
//!
//! ```text
//! Resistor:   Z = R
//! Capacitor:  Z = -j / (2π f C)
//! Inductor:   Z = j 2π f L
//! ```
//!
//! At f = 0 the capacitor is an open circuit and the inductor a short.
//! Both are represented explicitly by [`Impedance`] rather than as
//! floating-point infinities.

use std::f64::consts::TAU;

use num_complex::Complex64;

use crate::circuit::{ComponentId, ComponentKind};
use crate::error::{NodalError, Result};

/// Impedance of a component at a single frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Impedance {
    /// Finite, non-zero impedance
    Finite(Complex64),
    /// Infinite impedance (no current flows)
    Open,
    /// Zero impedance (admittance is unbounded)
    Short,
    /// Not a number (NaN value or frequency)
    Undefined,
}

impl Impedance {
    /// Classify a computed complex impedance.
    pub fn from_complex(z: Complex64) -> Self {
        if z.re.is_nan() || z.im.is_nan() {
            Impedance::Undefined
        } else if z.re.is_infinite() || z.im.is_infinite() {
            Impedance::Open
        } else if z.re == 0.0 && z.im == 0.0 {
            Impedance::Short
        } else {
            Impedance::Finite(z)
        }
    }

    /// Invert to an admittance. `None` for a short or undefined value.
    pub fn admittance(&self) -> Option<Complex64> {
        match self {
            Impedance::Finite(z) => Some(z.inv()),
            Impedance::Open => Some(Complex64::new(0.0, 0.0)),
            Impedance::Short | Impedance::Undefined => None,
        }
    }
}

/// A two-terminal passive element.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: ComponentId,
    pub label: String,
    pub kind: ComponentKind,
    /// Ohms, farads or henries depending on `kind`
    pub value: f64,
    pub nodes: [String; 2],
}

impl Component {
    /// Create a new component.
    pub fn new(
        id: ComponentId,
        label: impl Into<String>,
        kind: ComponentKind,
        value: f64,
        nodes: [String; 2],
    ) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
            value,
            nodes,
        }
    }

    /// Impedance at `frequency` (Hz).
    pub fn impedance(&self, frequency: f64) -> Impedance {
        let omega = TAU * frequency;
        match self.kind {
            ComponentKind::Resistor => Impedance::from_complex(Complex64::new(self.value, 0.0)),
            ComponentKind::Capacitor => {
                let denom = omega * self.value;
                if denom.is_nan() {
                    Impedance::Undefined
                } else if denom == 0.0 {
                    Impedance::Open
                } else {
                    Impedance::from_complex(Complex64::new(0.0, -1.0 / denom))
                }
            }
            ComponentKind::Inductor => {
                Impedance::from_complex(Complex64::new(0.0, omega * self.value))
            }
        }
    }

    /// Admittance (1/Z) at `frequency`.
    ///
    /// An open circuit contributes zero. A short is substituted with
    /// `short_conductance` when given, otherwise it is an error. A NaN
    /// impedance is always an error.
    pub fn admittance(&self, frequency: f64, short_conductance: Option<f64>) -> Result<Complex64> {
        match self.impedance(frequency) {
            Impedance::Finite(z) => Ok(z.inv()),
            Impedance::Open => Ok(Complex64::new(0.0, 0.0)),
            Impedance::Short => match short_conductance {
                Some(g) => {
                    tracing::warn!(
                        component = %self.label,
                        frequency,
                        conductance = g,
                        "zero impedance replaced by short-circuit conductance"
                    );
                    Ok(Complex64::new(g, 0.0))
                }
                None => Err(NodalError::undefined_impedance(&self.label, frequency)),
            },
            Impedance::Undefined => Err(NodalError::undefined_impedance(&self.label, frequency)),
        }
    }
}
