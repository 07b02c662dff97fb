//! Interaction coalescing.
//!
//! A drag emits a viewport change per frame; issuing a fetch for each would
//! flood the service. The debouncer keeps only the newest pending event and
//! releases it once no newer event has arrived for the coalescing window.
//! Time is passed in by the caller so tests can drive the clock.

use std::time::{Duration, Instant};

use crate::zoom::InteractionEvent;

/// Quiet period required before a pending interaction is released.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub struct InteractionDebouncer {
    window: Duration,
    pending: Option<(InteractionEvent, Instant)>,
}

impl Default for InteractionDebouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}

impl InteractionDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record an event; a newer event replaces a pending one and restarts
    /// the quiet period.
    pub fn push(&mut self, event: InteractionEvent, now: Instant) {
        self.pending = Some((event, now));
    }

    /// Release the pending event if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<InteractionEvent> {
        let (event, pushed_at) = self.pending?;
        if now.duration_since(pushed_at) >= self.window {
            self.pending = None;
            Some(event)
        } else {
            None
        }
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}
