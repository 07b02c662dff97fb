//! Query-parameter encoding for fetch requests.
//!
//! Bounds are encoded with Rust's shortest round-trip float formatting, so a
//! service that echoes them back can be decoded to bit-identical values.

use tv_core::{AxisBounds, DiagramType, FetchRequest};

/// Encode a request into ordered query pairs: fluid, step, then bounds
/// (x min/max, y min/max) when a zoom window is active.
pub fn encode_query(request: &FetchRequest) -> Vec<(String, String)> {
    let diagram = request.diagram;
    let mut pairs = vec![
        (
            "fluid".to_string(),
            request.fluid.canonical_id().to_string(),
        ),
        (diagram.step_param().to_string(), fmt_f64(request.step())),
    ];

    if let Some(window) = &request.window {
        let (x_min, x_max) = diagram.x_bound_params();
        let (y_min, y_max) = diagram.y_bound_params();
        pairs.push((x_min.to_string(), fmt_f64(window.x.min)));
        pairs.push((x_max.to_string(), fmt_f64(window.x.max)));
        pairs.push((y_min.to_string(), fmt_f64(window.y.min)));
        pairs.push((y_max.to_string(), fmt_f64(window.y.max)));
    }

    pairs
}

/// Full request URL against the given service base (e.g.
/// `http://localhost:5050/thermo`).
pub fn request_url(base: &str, request: &FetchRequest) -> String {
    let query = encode_query(request)
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    format!(
        "{}/{}?{}",
        base.trim_end_matches('/'),
        request.diagram.route(),
        query
    )
}

/// Recover the zoom bounds from echoed query pairs, if all four are present
/// and parse as finite ordered ranges.
pub fn decode_window_bounds(
    pairs: &[(String, String)],
    diagram: DiagramType,
) -> Option<(AxisBounds, AxisBounds)> {
    let (x_min_key, x_max_key) = diagram.x_bound_params();
    let (y_min_key, y_max_key) = diagram.y_bound_params();

    let x = AxisBounds::new(lookup_f64(pairs, x_min_key)?, lookup_f64(pairs, x_max_key)?).ok()?;
    let y = AxisBounds::new(lookup_f64(pairs, y_min_key)?, lookup_f64(pairs, y_max_key)?).ok()?;
    Some((x, y))
}

fn lookup_f64(pairs: &[(String, String)], key: &str) -> Option<f64> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .and_then(|(_, v)| v.parse().ok())
}

fn fmt_f64(value: f64) -> String {
    format!("{value}")
}
