use thiserror::Error;

/// Errors raised by a prediction call.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The endpoint was unreachable, the connection failed or timed out.
    #[error("prediction request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("prediction service returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not JSON or lacked a `prediction` key.
    #[error("malformed prediction response: {0}")]
    MalformedResponse(String),
}
