//! Renderable trace description.

use crate::color::{Rgb, Rgba};

/// What a trace represents; also fixes its z-order (dome beneath family
/// curves beneath quality lines, critical-point marker on top).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceRole {
    SaturationDome,
    FamilyCurve,
    QualityLine,
    CriticalPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dotted,
    Dashed,
}

/// One renderable curve. Derived from a dataset, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub role: TraceRole,
    /// Ordered (x, y) samples in physical units.
    pub points: Vec<[f64; 2]>,
    pub color: Rgb,
    pub line: LineStyle,
    /// Fill color for closed traces (the saturation dome).
    pub fill: Option<Rgba>,
    /// Legend label; `None` keeps the trace out of the legend.
    pub name: Option<String>,
    /// Hover-only label (family curves show their parameter value here).
    pub hover: Option<String>,
}
