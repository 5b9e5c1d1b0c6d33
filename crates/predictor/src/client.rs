//! HTTP client for the churn prediction endpoint.

use core::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

use crate::error::PredictError;
use crate::models::{PredictionRequest, PredictionResponse};

/// Request timeout for the prediction endpoint.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the remote churn prediction service.
#[derive(Debug, Clone)]
pub struct ChurnPredictor {
    client: Client,
    endpoint_url: String,
}

impl ChurnPredictor {
    /// Creates a new client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(endpoint_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint_url: endpoint_url.into(),
        })
    }

    /// The endpoint this client posts to.
    #[must_use]
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Sends the features to the prediction service and returns the
    /// integer at the response's `prediction` key.
    ///
    /// Issues exactly one POST per call: no retries, no caching. The
    /// service's answer is passed through unvalidated, so values outside
    /// {0, 1} reach the caller unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Network`] if the endpoint is unreachable or
    /// the request times out, [`PredictError::Status`] on a non-success
    /// status, and [`PredictError::MalformedResponse`] if the body is not
    /// JSON or lacks a `prediction` key.
    pub async fn predict(&self, request: &PredictionRequest) -> Result<i64, PredictError> {
        info!(
            age = request.age,
            total_purchase = request.total_purchase,
            account_manager = request.account_manager,
            years = request.years,
            num_sites = request.num_sites,
            "Requesting churn prediction"
        );

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PredictError::Status { status, body });
        }

        let parsed: PredictionResponse = serde_json::from_str(&body)
            .map_err(|e| PredictError::MalformedResponse(format!("{e} (body: {body:?})")))?;

        info!(prediction = parsed.prediction, "Received prediction");

        Ok(parsed.prediction)
    }
}
