//! tv-core: stable foundation for thermoview.
//!
//! Contains:
//! - fluid (working-fluid catalog for the picker and the service API)
//! - diagram (diagram kinds + axis semantics)
//! - window (axis bounds, zoom windows, request stamps)
//! - error (shared error types)

pub mod diagram;
pub mod error;
pub mod fluid;
pub mod window;

// Re-exports: nice ergonomics for downstream crates
pub use diagram::{AxisConfig, AxisScale, DiagramType};
pub use error::{CoreError, CoreResult};
pub use fluid::{Fluid, FluidCatalogEntry, filter_fluid_catalog, fluid_catalog};
pub use window::{AxisBounds, FetchRequest, RequestStamp, StampIssuer, ZoomWindow};
