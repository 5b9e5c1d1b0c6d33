use std::path::PathBuf;
use std::sync::LazyLock;

/// Default prediction endpoint (the deployed churn model).
const DEFAULT_ENDPOINT_URL: &str = "https://2l01x6r0cc.execute-api.us-east-1.amazonaws.com/dev";

/// Default location of the customer churn dataset.
const DEFAULT_DATASET_PATH: &str = "data/customer_churn.csv";

/// Default address the dashboard binds to.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_env);

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the remote churn prediction service
    pub endpoint_url: String,

    /// Path to the customer churn CSV dataset
    pub dataset_path: PathBuf,

    /// Address the dashboard HTTP server binds to
    pub bind_addr: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Optional environment variables (each falls back to the built-in
    /// default when unset):
    /// - `CHURN_ENDPOINT_URL`: URL of the prediction service
    /// - `CHURN_DATASET_PATH`: path to the customer churn CSV file
    /// - `CHURN_BIND_ADDR`: listen address for the dashboard server
    fn from_env() -> Self {
        // Load .env file
        dotenvy::dotenv().ok();

        let endpoint_url = std::env::var("CHURN_ENDPOINT_URL")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT_URL.to_string());

        let dataset_path = std::env::var("CHURN_DATASET_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH), PathBuf::from);

        let bind_addr =
            std::env::var("CHURN_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Self {
            endpoint_url,
            dataset_path,
            bind_addr,
        }
    }
}
