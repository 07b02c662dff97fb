//! Dataset to trace-list transform.
//!
//! Output order is part of the contract: the saturation dome renders first
//! (beneath everything), then the family curves in service order, then the
//! quality lines in service order, then the critical-point marker.

use tv_data::{DiagramDataset, FamilyCurve, SaturationDome};

use crate::color::{QUALITY_ACCENT, Rgb, Rgba, color_for};
use crate::trace::{LineStyle, Trace, TraceRole};

const DOME_OUTLINE: Rgb = Rgb::new(0, 0, 0);
const DOME_FILL: Rgba = Rgba::new(173, 216, 230, 51);

/// Build the ordered trace list for a validated dataset.
pub fn build_traces(dataset: &DiagramDataset) -> Vec<Trace> {
    let mut traces =
        Vec::with_capacity(2 + dataset.family.len() + dataset.qualities.len());

    traces.push(dome_trace(&dataset.saturation));

    let (min, max) = family_range(&dataset.family);
    for curve in &dataset.family {
        traces.push(Trace {
            role: TraceRole::FamilyCurve,
            points: paired_points(&curve.x, &curve.y),
            color: color_for(curve.value, min, max),
            line: LineStyle::Dotted,
            fill: None,
            name: None,
            hover: Some(dataset.diagram.family_label(curve.value)),
        });
    }

    for line in &dataset.qualities {
        traces.push(Trace {
            role: TraceRole::QualityLine,
            points: paired_points(&line.x, &line.y),
            color: QUALITY_ACCENT,
            line: LineStyle::Dashed,
            fill: None,
            name: Some(format!("Q={}", line.quality)),
            hover: None,
        });
    }

    if let Some(critical) = dataset.critical {
        traces.push(Trace {
            role: TraceRole::CriticalPoint,
            points: vec![[critical.x, critical.y]],
            color: DOME_OUTLINE,
            line: LineStyle::Solid,
            fill: None,
            name: Some("Critical point".to_string()),
            hover: None,
        });
    }

    traces
}

/// Closed dome: liquid branch forward, vapor branch as delivered (the
/// service pre-reverses it), y = axis array followed by its reverse.
fn dome_trace(dome: &SaturationDome) -> Trace {
    let mut points = Vec::with_capacity(dome.liquid.len() + dome.vapor.len());
    for (x, y) in dome.liquid.iter().zip(&dome.axis) {
        points.push([*x, *y]);
    }
    for (x, y) in dome.vapor.iter().zip(dome.axis.iter().rev()) {
        points.push([*x, *y]);
    }

    Trace {
        role: TraceRole::SaturationDome,
        points,
        color: DOME_OUTLINE,
        line: LineStyle::Solid,
        fill: Some(DOME_FILL),
        name: Some("Saturation dome".to_string()),
        hover: None,
    }
}

fn family_range(family: &[FamilyCurve]) -> (f64, f64) {
    family.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), curve| {
        (min.min(curve.value), max.max(curve.value))
    })
}

fn paired_points(x: &[f64], y: &[f64]) -> Vec<[f64; 2]> {
    x.iter().zip(y).map(|(x, y)| [*x, *y]).collect()
}
