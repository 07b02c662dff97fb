//! Session state: the single owner of what the viewer shows.
//!
//! `DiagramSession` holds the `(fluid, diagram, window)` selection, runs the
//! zoom controller, and applies tagged fetch results under the
//! last-writer-wins rule. Everything that mutates visible state funnels
//! through here.

use tracing::{error, warn};
use tv_core::{DiagramType, FetchRequest, Fluid, RequestStamp, ZoomWindow};
use tv_data::{DataError, DiagramDataset};

use crate::zoom::{InteractionEvent, ZoomController, ZoomPhase};

/// The single mutable selection the whole pipeline reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub fluid: Fluid,
    pub diagram: DiagramType,
    pub window: Option<ZoomWindow>,
}

/// What the view should currently present.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewPhase {
    /// First fetch for this selection still in flight; nothing to draw yet.
    Loading,
    /// A dataset is on screen.
    Ready(DiagramDataset),
    /// The current request failed; show the message until the user retries.
    Unavailable(String),
}

/// A fetch outcome tagged with the stamp of the request that produced it.
#[derive(Debug)]
pub struct TaggedResult {
    pub stamp: RequestStamp,
    pub result: Result<DiagramDataset, DataError>,
}

pub struct DiagramSession {
    selection: Selection,
    controller: ZoomController,
    view: ViewPhase,
    /// Stamp of the last result that was applied (success or failure).
    resolved: Option<RequestStamp>,
}

impl DiagramSession {
    /// Start a session and return the initial default-window request.
    pub fn new(fluid: Fluid, diagram: DiagramType) -> (Self, FetchRequest) {
        let mut controller = ZoomController::new();
        let request = controller.reset(fluid, diagram);
        let session = Self {
            selection: Selection {
                fluid,
                diagram,
                window: None,
            },
            controller,
            view: ViewPhase::Loading,
            resolved: None,
        };
        (session, request)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn view(&self) -> &ViewPhase {
        &self.view
    }

    pub fn dataset(&self) -> Option<&DiagramDataset> {
        match &self.view {
            ViewPhase::Ready(dataset) => Some(dataset),
            _ => None,
        }
    }

    pub fn zoom_phase(&self) -> ZoomPhase {
        self.controller.phase()
    }

    /// True while the latest issued request has not resolved yet.
    pub fn in_flight(&self) -> bool {
        self.controller.latest_stamp() != self.resolved
    }

    /// Change the working fluid. Clears the zoom window and requests default
    /// resolution for the new fluid. `None` if the fluid did not change.
    pub fn set_fluid(&mut self, fluid: Fluid) -> Option<FetchRequest> {
        if self.selection.fluid == fluid {
            return None;
        }
        self.selection.fluid = fluid;
        Some(self.reset_selection())
    }

    /// Change the diagram type; same reset semantics as [`Self::set_fluid`].
    pub fn set_diagram(&mut self, diagram: DiagramType) -> Option<FetchRequest> {
        if self.selection.diagram == diagram {
            return None;
        }
        self.selection.diagram = diagram;
        Some(self.reset_selection())
    }

    /// Feed a plot interaction through the zoom machine.
    pub fn on_interaction(&mut self, event: InteractionEvent) -> Option<FetchRequest> {
        if event.is_reset() {
            self.selection.window = None;
            return Some(
                self.controller
                    .reset(self.selection.fluid, self.selection.diagram),
            );
        }

        let (window, request) =
            self.controller
                .on_interaction(self.selection.fluid, self.selection.diagram, event)?;
        self.selection.window = Some(window);
        Some(request)
    }

    /// Apply a tagged fetch result. Returns true when it updated visible
    /// state, false when it was discarded as stale.
    pub fn apply(&mut self, tagged: TaggedResult) -> bool {
        if !self.controller.on_result(tagged.stamp) {
            warn!(
                stamp = tagged.stamp.value(),
                "discarding result for superseded request"
            );
            return false;
        }
        self.resolved = Some(tagged.stamp);

        match tagged.result {
            Ok(dataset) => {
                self.view = ViewPhase::Ready(dataset);
            }
            Err(err) => {
                error!(
                    stamp = tagged.stamp.value(),
                    error = %err,
                    "diagram data unavailable"
                );
                self.view = ViewPhase::Unavailable(err.to_string());
            }
        }
        true
    }

    fn reset_selection(&mut self) -> FetchRequest {
        self.selection.window = None;
        self.view = ViewPhase::Loading;
        self.controller
            .reset(self.selection.fluid, self.selection.diagram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tv_core::AxisBounds;
    use tv_data::{FamilyCurve, SaturationDome};

    fn dataset(marker: f64) -> DiagramDataset {
        DiagramDataset {
            diagram: DiagramType::PressureEnthalpy,
            family: vec![FamilyCurve {
                value: marker,
                x: vec![1.0],
                y: vec![1.0],
            }],
            qualities: vec![],
            saturation: SaturationDome {
                liquid: vec![1.0],
                vapor: vec![2.0],
                axis: vec![10.0],
            },
            critical: None,
        }
    }

    fn zoom_event() -> InteractionEvent {
        InteractionEvent::zoom(
            AxisBounds::new(40.0, 90.0).unwrap(),
            AxisBounds::new(5.0, 30.0).unwrap(),
        )
    }

    #[test]
    fn initial_request_is_default_window() {
        let (session, request) = DiagramSession::new(Fluid::Xenon, DiagramType::PressureEnthalpy);
        assert!(request.window.is_none());
        assert_eq!(request.fluid, Fluid::Xenon);
        assert_eq!(*session.view(), ViewPhase::Loading);
        assert!(session.in_flight());
    }

    #[test]
    fn later_request_wins_regardless_of_arrival_order() {
        let (mut session, _initial) =
            DiagramSession::new(Fluid::Xenon, DiagramType::PressureEnthalpy);

        let a = session.on_interaction(zoom_event()).unwrap();
        let b = session.on_interaction(zoom_event()).unwrap();
        assert!(b.stamp > a.stamp);

        // B resolves first and is applied.
        assert!(session.apply(TaggedResult {
            stamp: b.stamp,
            result: Ok(dataset(2.0)),
        }));
        // A resolves late and is dropped.
        assert!(!session.apply(TaggedResult {
            stamp: a.stamp,
            result: Ok(dataset(1.0)),
        }));

        let visible = session.dataset().unwrap();
        assert_eq!(visible.family[0].value, 2.0);
        assert!(!session.in_flight());
    }

    #[test]
    fn fluid_change_mid_flight_discards_the_old_response() {
        let (mut session, _initial) =
            DiagramSession::new(Fluid::Xenon, DiagramType::PressureEnthalpy);
        let zoomed = session.on_interaction(zoom_event()).unwrap();
        assert_eq!(session.zoom_phase(), ZoomPhase::Requesting);

        let fresh = session.set_fluid(Fluid::Water).unwrap();
        assert_eq!(session.zoom_phase(), ZoomPhase::Default);
        assert!(fresh.window.is_none());
        assert_eq!(fresh.fluid, Fluid::Water);
        assert!(session.selection().window.is_none());

        // The zoomed old-fluid response arrives after the switch: dropped.
        assert!(!session.apply(TaggedResult {
            stamp: zoomed.stamp,
            result: Ok(dataset(1.0)),
        }));
        assert_eq!(*session.view(), ViewPhase::Loading);

        assert!(session.apply(TaggedResult {
            stamp: fresh.stamp,
            result: Ok(dataset(3.0)),
        }));
        assert_eq!(session.dataset().unwrap().family[0].value, 3.0);
    }

    #[test]
    fn unchanged_selection_issues_no_request() {
        let (mut session, _initial) =
            DiagramSession::new(Fluid::Xenon, DiagramType::PressureEnthalpy);
        assert!(session.set_fluid(Fluid::Xenon).is_none());
        assert!(
            session
                .set_diagram(DiagramType::PressureEnthalpy)
                .is_none()
        );
    }

    #[test]
    fn current_error_shows_unavailable_and_is_recoverable() {
        let (mut session, initial) =
            DiagramSession::new(Fluid::Xenon, DiagramType::PressureEnthalpy);

        assert!(session.apply(TaggedResult {
            stamp: initial.stamp,
            result: Err(DataError::Network {
                message: "connection refused".into(),
            }),
        }));
        assert!(matches!(session.view(), ViewPhase::Unavailable(msg) if msg.contains("refused")));

        // A retry via diagram switch recovers.
        let retry = session.set_diagram(DiagramType::TemperatureEntropy).unwrap();
        assert!(session.apply(TaggedResult {
            stamp: retry.stamp,
            result: Ok(dataset(1.0)),
        }));
        assert!(matches!(session.view(), ViewPhase::Ready(_)));
    }

    #[test]
    fn stale_error_does_not_clobber_a_settled_view() {
        let (mut session, _initial) =
            DiagramSession::new(Fluid::Xenon, DiagramType::PressureEnthalpy);
        let a = session.on_interaction(zoom_event()).unwrap();
        let b = session.on_interaction(zoom_event()).unwrap();

        assert!(session.apply(TaggedResult {
            stamp: b.stamp,
            result: Ok(dataset(2.0)),
        }));
        assert!(!session.apply(TaggedResult {
            stamp: a.stamp,
            result: Err(DataError::Network {
                message: "timed out".into(),
            }),
        }));
        assert!(matches!(session.view(), ViewPhase::Ready(_)));
    }

    #[test]
    fn reset_interaction_clears_the_window_but_keeps_the_data() {
        let (mut session, _initial) =
            DiagramSession::new(Fluid::Xenon, DiagramType::PressureEnthalpy);
        let zoomed = session.on_interaction(zoom_event()).unwrap();
        assert!(session.apply(TaggedResult {
            stamp: zoomed.stamp,
            result: Ok(dataset(1.0)),
        }));
        assert_eq!(session.zoom_phase(), ZoomPhase::Settled);

        let request = session.on_interaction(InteractionEvent::reset()).unwrap();
        assert!(request.window.is_none());
        assert_eq!(session.zoom_phase(), ZoomPhase::Default);
        // The zoomed dataset stays visible while the default fetch runs.
        assert!(matches!(session.view(), ViewPhase::Ready(_)));
    }

    #[test]
    fn partial_interaction_is_ignored_entirely() {
        let (mut session, _initial) =
            DiagramSession::new(Fluid::Xenon, DiagramType::PressureEnthalpy);
        let event = InteractionEvent {
            x: Some(AxisBounds::new(0.0, 1.0).unwrap()),
            y: None,
        };
        assert!(session.on_interaction(event).is_none());
        assert!(session.selection().window.is_none());
    }
}
