//! Blocking HTTP client for the property service.

use std::time::Duration;

use tracing::warn;
use tv_core::FetchRequest;
use ureq::Agent;

use crate::dataset::{DiagramDataset, decode_dataset};
use crate::error::{DataError, DataResult};
use crate::query::request_url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Issues parameterized data requests to the property service.
///
/// Calls block, so the client belongs on a worker thread. It holds no
/// mutable state; what to do with a result (or a failure) is entirely the
/// caller's decision.
#[derive(Debug, Clone)]
pub struct DiagramDataClient {
    base_url: String,
    agent: Agent,
}

impl DiagramDataClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .into();
        Self {
            base_url: base_url.into(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and validate the dataset for one request.
    pub fn fetch(&self, request: &FetchRequest) -> DataResult<DiagramDataset> {
        let url = request_url(&self.base_url, request);

        let mut response = self.agent.get(&url).call().map_err(|err| {
            let message = match err {
                ureq::Error::StatusCode(code) => format!("service returned HTTP {code}"),
                other => other.to_string(),
            };
            warn!(url = %url, error = %message, "diagram data request failed");
            DataError::Network { message }
        })?;

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|err| DataError::Network {
                message: format!("failed to read response body: {err}"),
            })?;

        decode_dataset(&body, request.diagram)
    }
}
