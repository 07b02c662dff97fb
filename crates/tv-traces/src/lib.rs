//! tv-traces: pure transforms from datasets to renderable traces.
//!
//! Nothing in this crate does I/O or holds state. Given the same dataset,
//! [`build_traces`] returns the same traces in the same order, which is what
//! makes the render path testable without a plot widget.

pub mod builder;
pub mod color;
pub mod trace;

pub use builder::build_traces;
pub use color::{QUALITY_ACCENT, Rgb, Rgba, color_for, plasma};
pub use trace::{LineStyle, Trace, TraceRole};
