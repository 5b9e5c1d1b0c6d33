//! Customer Churn Dashboard
//!
//! Serves two views: a predictor form that forwards customer features to
//! a remote churn model over HTTP, and a static EDA report rendered from
//! the customer churn dataset.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use config::CONFIG;
use dataset::CustomerDataset;
use predictor::ChurnPredictor;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod pages;
mod server;

/// Customer churn dashboard
#[derive(Parser)]
#[command(name = "churn-dashboard")]
#[command(about = "Dashboard for customer churn prediction and exploratory analysis")]
#[command(version)]
struct Cli {
    /// Address to bind the HTTP server to (overrides CHURN_BIND_ADDR)
    #[arg(long)]
    bind: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let dataset = CustomerDataset::from_csv_path(&CONFIG.dataset_path).with_context(|| {
        format!(
            "Failed to load customer dataset from {}",
            CONFIG.dataset_path.display()
        )
    })?;
    info!(
        rows = dataset.len(),
        path = %CONFIG.dataset_path.display(),
        "Loaded customer dataset"
    );

    let predictor = ChurnPredictor::new(CONFIG.endpoint_url.clone())?;
    info!(endpoint = predictor.endpoint_url(), "Prediction client ready");

    let state = server::AppState {
        dataset: Arc::new(dataset),
        predictor,
    };
    let app = server::router(state);

    let bind_addr = cli.bind.unwrap_or_else(|| CONFIG.bind_addr.clone());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    info!("Dashboard listening on http://{bind_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
