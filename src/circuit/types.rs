//! Core types for network representation.

use std::fmt;
use std::str::FromStr;

use crate::error::NodalError;

/// Position of a component in the network's component list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub usize);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// The kind of a two-terminal passive element.
///
/// The component value is interpreted per kind: ohms for resistors,
/// farads for capacitors, henries for inductors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Resistor,
    Capacitor,
    Inductor,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Resistor => "resistor",
            ComponentKind::Capacitor => "capacitor",
            ComponentKind::Inductor => "inductor",
        };
        f.write_str(name)
    }
}

impl FromStr for ComponentKind {
    type Err = NodalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "resistor" => Ok(ComponentKind::Resistor),
            "c" | "capacitor" => Ok(ComponentKind::Capacitor),
            "l" | "inductor" => Ok(ComponentKind::Inductor),
            _ => Err(NodalError::invalid_spec(s, "unknown component kind")),
        }
    }
}
