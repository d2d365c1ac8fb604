//! Single-element descriptions used by the CLI and the WASM bindings.
//!
//! Each description adds exactly one element to a [`NetworkBuilder`]:
//!
//! ```text
//! component  = LABEL '=' KIND ':' VALUE ':' NODE ':' NODE
//! ac source  = LABEL '=' VOLTAGE ':' GROUND ':' NODE ':' FREQUENCY
//! dc source  = LABEL '=' VOLTAGE ':' POSITIVE ':' NEGATIVE
//! ```
//!
//! Values accept an SI suffix (`p n u m k M G`), e.g. `4.7k` or `100n`.

use std::str::FromStr;

use crate::circuit::{ComponentKind, NetworkBuilder};
use crate::error::NodalError;

/// Parse a number string with optional unit suffix.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let last = text.chars().last()?;

    let multiplier = match last {
        'p' => 1e-12,
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        _ => 1.0,
    };
    let num_str = if multiplier != 1.0 {
        &text[..text.len() - last.len_utf8()]
    } else {
        text
    };

    num_str.parse::<f64>().ok().map(|v| v * multiplier)
}

/// Split `LABEL=a:b:c` into the label and exactly `n` fields.
fn split_fields(spec: &str, n: usize) -> Result<(&str, Vec<&str>), NodalError> {
    let (label, rest) = spec
        .split_once('=')
        .ok_or_else(|| NodalError::invalid_spec(spec, "expected LABEL=..."))?;
    if label.is_empty() {
        return Err(NodalError::invalid_spec(spec, "empty label"));
    }
    let fields: Vec<&str> = rest.split(':').collect();
    if fields.len() != n || fields.iter().any(|f| f.is_empty()) {
        return Err(NodalError::invalid_spec(
            spec,
            format!("expected {} ':'-separated fields", n),
        ));
    }
    Ok((label, fields))
}

fn value_field(spec: &str, field: &str) -> Result<f64, NodalError> {
    parse_value(field)
        .ok_or_else(|| NodalError::invalid_spec(spec, format!("bad number '{}'", field)))
}

/// A component given as `LABEL=KIND:VALUE:NODE:NODE`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSpec {
    pub label: String,
    pub kind: ComponentKind,
    pub value: f64,
    pub nodes: [String; 2],
}

impl ComponentSpec {
    /// Add this component to `builder`.
    pub fn apply(&self, builder: &mut NetworkBuilder) {
        builder.add_component(
            self.label.clone(),
            self.kind,
            self.value,
            [self.nodes[0].as_str(), self.nodes[1].as_str()],
        );
    }
}

impl FromStr for ComponentSpec {
    type Err = NodalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, fields) = split_fields(s, 4)?;
        Ok(Self {
            label: label.to_string(),
            kind: fields[0].parse()?,
            value: value_field(s, fields[1])?,
            nodes: [fields[2].to_string(), fields[3].to_string()],
        })
    }
}

/// An AC source given as `LABEL=VOLTAGE:GROUND:NODE:FREQUENCY`.
#[derive(Debug, Clone, PartialEq)]
pub struct AcSourceSpec {
    pub label: String,
    pub voltage: f64,
    pub ground_node: String,
    pub voltage_node: String,
    pub frequency: f64,
}

impl AcSourceSpec {
    /// Add this source to `builder`.
    pub fn apply(&self, builder: &mut NetworkBuilder) {
        builder.add_ac_voltage_source(
            self.label.clone(),
            self.voltage,
            &self.ground_node,
            &self.voltage_node,
            self.frequency,
        );
    }
}

impl FromStr for AcSourceSpec {
    type Err = NodalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, fields) = split_fields(s, 4)?;
        Ok(Self {
            label: label.to_string(),
            voltage: value_field(s, fields[0])?,
            ground_node: fields[1].to_string(),
            voltage_node: fields[2].to_string(),
            frequency: value_field(s, fields[3])?,
        })
    }
}

/// A DC source given as `LABEL=VOLTAGE:POSITIVE:NEGATIVE`.
#[derive(Debug, Clone, PartialEq)]
pub struct DcSourceSpec {
    pub label: String,
    pub voltage: f64,
    pub positive_node: String,
    pub negative_node: String,
}

impl DcSourceSpec {
    /// Add this source to `builder`.
    pub fn apply(&self, builder: &mut NetworkBuilder) {
        builder.add_dc_voltage_source(
            self.label.clone(),
            self.voltage,
            &self.positive_node,
            &self.negative_node,
        );
    }
}

impl FromStr for DcSourceSpec {
    type Err = NodalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, fields) = split_fields(s, 3)?;
        Ok(Self {
            label: label.to_string(),
            voltage: value_field(s, fields[0])?,
            positive_node: fields[1].to_string(),
            negative_node: fields[2].to_string(),
        })
    }
}
