//! HTTP client for the remote churn prediction service.
//!
//! Builds a JSON request from the five customer features, issues a single
//! POST to the configured endpoint and returns the integer prediction.
//! No retries, no caching: one outbound call per submission.

mod client;
mod error;
mod models;

pub use client::ChurnPredictor;
pub use error::PredictError;
pub use models::{PredictionRequest, PredictionResponse};
