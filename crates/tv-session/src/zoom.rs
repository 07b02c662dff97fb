//! Zoom state machine.
//!
//! Interaction events from the plot carry the newly visible range per axis.
//! The controller turns them into stamped fetch requests and tracks which
//! stamp is allowed to update visible state. Stamps are strictly increasing,
//! so "is this the latest request" is a single comparison.

use tv_core::{
    AxisBounds, DiagramType, FetchRequest, Fluid, RequestStamp, StampIssuer, ZoomWindow,
};

/// Isoline spacing for zoomed requests, finer than the unzoomed default.
pub const ZOOM_REFINEMENT_STEP: f64 = 5.0;

/// Zoom lifecycle for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomPhase {
    /// No zoom window; showing (or fetching) the service default range.
    #[default]
    Default,
    /// A zoom window was derived and its fetch is in flight.
    Requesting,
    /// The zoom window's data arrived and is on screen.
    Settled,
}

/// A pan/zoom notification from the render collaborator.
///
/// Axes the interaction did not touch are `None`. An event with neither axis
/// is a reset/autoscale request; an event with exactly one axis does not
/// describe a full window for this diagram and is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionEvent {
    pub x: Option<AxisBounds>,
    pub y: Option<AxisBounds>,
}

impl InteractionEvent {
    pub fn zoom(x: AxisBounds, y: AxisBounds) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn reset() -> Self {
        Self { x: None, y: None }
    }

    pub fn is_reset(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

/// Issues stamped requests and decides which responses are still relevant.
#[derive(Debug, Default)]
pub struct ZoomController {
    phase: ZoomPhase,
    issuer: StampIssuer,
    latest: Option<RequestStamp>,
}

impl ZoomController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ZoomPhase {
        self.phase
    }

    /// Stamp of the most recently issued request; only this one may settle.
    pub fn latest_stamp(&self) -> Option<RequestStamp> {
        self.latest
    }

    /// Derive a zoomed request from an interaction carrying both axes.
    /// Returns `None` for partial events (ignored per the machine's edge
    /// cases); reset events are the caller's job, via [`Self::reset`].
    pub fn on_interaction(
        &mut self,
        fluid: Fluid,
        diagram: DiagramType,
        event: InteractionEvent,
    ) -> Option<(ZoomWindow, FetchRequest)> {
        let (x, y) = match (event.x, event.y) {
            (Some(x), Some(y)) => (x, y),
            _ => return None,
        };

        let window = ZoomWindow::new(x, y, ZOOM_REFINEMENT_STEP).ok()?;
        let stamp = self.issuer.issue();
        self.latest = Some(stamp);
        self.phase = ZoomPhase::Requesting;

        Some((
            window,
            FetchRequest {
                fluid,
                diagram,
                window: Some(window),
                stamp,
            },
        ))
    }

    /// Unconditionally drop the zoom window and issue a fresh
    /// default-resolution request (fluid/diagram change, or a reset
    /// interaction).
    pub fn reset(&mut self, fluid: Fluid, diagram: DiagramType) -> FetchRequest {
        let stamp = self.issuer.issue();
        self.latest = Some(stamp);
        self.phase = ZoomPhase::Default;

        FetchRequest {
            fluid,
            diagram,
            window: None,
            stamp,
        }
    }

    /// Report an arrived result. Returns true when the stamp is current (the
    /// result may be applied); a stale stamp leaves the machine untouched.
    pub fn on_result(&mut self, stamp: RequestStamp) -> bool {
        if self.latest != Some(stamp) {
            return false;
        }
        if self.phase == ZoomPhase::Requesting {
            self.phase = ZoomPhase::Settled;
        }
        true
    }
}
