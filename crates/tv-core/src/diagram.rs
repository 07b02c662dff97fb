//! Diagram kinds and their axis semantics.
//!
//! Everything that depends on whether the viewer shows a pressure–enthalpy or
//! a temperature–entropy diagram is resolved here: service route, family
//! curve kind, step parameter, axis labels, and y-axis scale. Downstream code
//! matches on `DiagramType` instead of juggling field-name strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// State-diagram kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagramType {
    /// Pressure vs specific enthalpy (log-scale pressure axis).
    PressureEnthalpy,
    /// Temperature vs specific entropy (linear axes).
    TemperatureEntropy,
}

/// Y-axis scale hint for the render collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Log10,
}

/// Axis labels and scale handed to the plot alongside the traces.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub y_scale: AxisScale,
}

impl DiagramType {
    pub const ALL: [DiagramType; 2] =
        [DiagramType::PressureEnthalpy, DiagramType::TemperatureEntropy];

    /// Short wire name, also used in the service route.
    pub fn wire_name(self) -> &'static str {
        match self {
            DiagramType::PressureEnthalpy => "ph",
            DiagramType::TemperatureEntropy => "ts",
        }
    }

    /// Service route segment for this diagram's data endpoint.
    pub fn route(self) -> &'static str {
        match self {
            DiagramType::PressureEnthalpy => "ph-data",
            DiagramType::TemperatureEntropy => "ts-data",
        }
    }

    /// Query parameter carrying the isoline spacing.
    pub fn step_param(self) -> &'static str {
        match self {
            DiagramType::PressureEnthalpy => "t_step",
            DiagramType::TemperatureEntropy => "p_step",
        }
    }

    /// Query parameter names for the x-axis bounds, (min, max).
    pub fn x_bound_params(self) -> (&'static str, &'static str) {
        match self {
            DiagramType::PressureEnthalpy => ("h_min", "h_max"),
            DiagramType::TemperatureEntropy => ("s_min", "s_max"),
        }
    }

    /// Query parameter names for the y-axis bounds, (min, max).
    pub fn y_bound_params(self) -> (&'static str, &'static str) {
        match self {
            DiagramType::PressureEnthalpy => ("p_min", "p_max"),
            DiagramType::TemperatureEntropy => ("T_min", "T_max"),
        }
    }

    /// Hover label for a family curve at the given parameter value.
    pub fn family_label(self, value: f64) -> String {
        match self {
            DiagramType::PressureEnthalpy => format!("T = {value} K"),
            DiagramType::TemperatureEntropy => format!("p = {value} bar"),
        }
    }

    pub fn axis_config(self) -> AxisConfig {
        match self {
            DiagramType::PressureEnthalpy => AxisConfig {
                x_label: "Enthalpy (kJ/kg)",
                y_label: "Pressure (bar)",
                y_scale: AxisScale::Log10,
            },
            DiagramType::TemperatureEntropy => AxisConfig {
                x_label: "Entropy (kJ/kg·K)",
                y_label: "Temperature (K)",
                y_scale: AxisScale::Linear,
            },
        }
    }
}

impl fmt::Display for DiagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for DiagramType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ph" => Ok(DiagramType::PressureEnthalpy),
            "ts" => Ok(DiagramType::TemperatureEntropy),
            other => Err(CoreError::UnknownDiagram {
                name: other.to_string(),
            }),
        }
    }
}
