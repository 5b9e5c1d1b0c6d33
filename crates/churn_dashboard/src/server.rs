//! Router, shared state and page handlers.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::Router;
use dataset::CustomerDataset;
use predictor::{ChurnPredictor, PredictionRequest};
use serde::Deserialize;
use tracing::error;

use crate::pages;

/// Shared state cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// The dataset, loaded once at startup and only read afterwards.
    pub dataset: Arc<CustomerDataset>,
    /// Client for the remote prediction service.
    pub predictor: ChurnPredictor,
}

/// Builds the dashboard router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/predictor", get(predictor_page))
        .route("/predict", post(predict))
        .route("/eda", get(eda_page))
        .with_state(state)
}

async fn index() -> Redirect {
    Redirect::to("/predictor")
}

async fn predictor_page() -> Html<String> {
    Html(pages::predictor_page(None))
}

/// Values posted by the predictor form.
#[derive(Debug, Deserialize)]
pub struct PredictorForm {
    pub age: i64,
    pub total_purchase: f64,
    /// The Yes/No select, encoded to 1/0 on submission.
    pub account_manager: String,
    pub years: f64,
    pub num_sites: i64,
}

impl PredictorForm {
    /// Encodes the form values into the service's wire format.
    #[must_use]
    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            age: self.age,
            total_purchase: self.total_purchase,
            account_manager: u8::from(self.account_manager == "Yes"),
            years: self.years,
            num_sites: self.num_sites,
        }
    }
}

/// Submits the features to the prediction service and renders the verdict.
///
/// Failures are caught here and shown as an error box; the render pass
/// never takes the whole process down.
async fn predict(State(state): State<AppState>, Form(form): Form<PredictorForm>) -> Html<String> {
    let request = form.to_request();

    let verdict = match state.predictor.predict(&request).await {
        Ok(1) => pages::churn_alert(),
        Ok(_) => pages::retain_alert(),
        Err(err) => {
            error!(error = %err, "Churn prediction failed");
            pages::failure_alert(&err.to_string())
        }
    };

    Html(pages::predictor_page(Some(&verdict)))
}

async fn eda_page(State(state): State<AppState>) -> Html<String> {
    Html(pages::eda_page(&report::render_report(&state.dataset)))
}
