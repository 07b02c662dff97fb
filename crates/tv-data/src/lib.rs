//! tv-data: dataset model and HTTP client for the property service.
//!
//! Provides:
//! - Wire decoding of `ph-data` / `ts-data` responses into a validated,
//!   diagram-tagged [`DiagramDataset`]
//! - Query-parameter encoding for fetch requests (including zoom bounds)
//! - [`DiagramDataClient`], a blocking HTTP client meant to run on a worker
//!   thread, never on the UI thread

pub mod client;
pub mod dataset;
pub mod error;
pub mod query;

pub use client::DiagramDataClient;
pub use dataset::{
    CriticalPoint, DiagramDataset, FamilyCurve, QualityCurve, SaturationDome, decode_dataset,
};
pub use error::{DataError, DataResult};
pub use query::{decode_window_bounds, encode_query, request_url};
