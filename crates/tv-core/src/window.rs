//! Zoom windows and request stamps.

use serde::{Deserialize, Serialize};

use crate::diagram::DiagramType;
use crate::error::{CoreError, CoreResult};
use crate::fluid::Fluid;

/// Default spacing between generated isolines when no zoom is active.
pub const DEFAULT_STEP: f64 = 15.0;

/// Closed range along one physical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub fn new(min: f64, max: f64) -> CoreResult<Self> {
        if !min.is_finite() {
            return Err(CoreError::NonFinite {
                what: "axis min",
                value: min,
            });
        }
        if !max.is_finite() {
            return Err(CoreError::NonFinite {
                what: "axis max",
                value: max,
            });
        }
        if min >= max {
            return Err(CoreError::InvalidBounds {
                what: "axis bounds",
                min,
                max,
            });
        }
        Ok(Self { min, max })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// A zoomed view of the diagram: physical bounds for both axes plus the
/// isoline spacing to request. `None` at the call sites means default
/// resolution over the service's full range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomWindow {
    pub x: AxisBounds,
    pub y: AxisBounds,
    pub step: f64,
}

impl ZoomWindow {
    pub fn new(x: AxisBounds, y: AxisBounds, step: f64) -> CoreResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(CoreError::NonFinite {
                what: "zoom step",
                value: step,
            });
        }
        Ok(Self { x, y, step })
    }
}

/// Monotonically increasing identifier disambiguating in-flight requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestStamp(u64);

impl RequestStamp {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Hands out strictly increasing stamps. One issuer per session.
#[derive(Debug, Default)]
pub struct StampIssuer {
    next: u64,
}

impl StampIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestStamp {
        let stamp = RequestStamp(self.next);
        self.next += 1;
        stamp
    }
}

/// Full key of a data-fetch request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchRequest {
    pub fluid: Fluid,
    pub diagram: DiagramType,
    pub window: Option<ZoomWindow>,
    pub stamp: RequestStamp,
}

impl FetchRequest {
    /// Isoline spacing to request: the window's step when zoomed, the
    /// default otherwise.
    pub fn step(&self) -> f64 {
        self.window.map_or(DEFAULT_STEP, |w| w.step)
    }
}
