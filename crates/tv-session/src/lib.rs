//! tv-session: the reactive core of the viewer.
//!
//! Owns selection state, the zoom state machine, and the last-writer-wins
//! rule that keeps out-of-order fetch results from ever reaching the screen.
//! Nothing here touches the network or the UI toolkit; the app feeds
//! interaction events in and fetch requests out.

pub mod debounce;
pub mod session;
pub mod zoom;

pub use debounce::{DEBOUNCE_WINDOW, InteractionDebouncer};
pub use session::{DiagramSession, Selection, TaggedResult, ViewPhase};
pub use zoom::{InteractionEvent, ZOOM_REFINEMENT_STEP, ZoomController, ZoomPhase};
