//! Environment-backed configuration for the churn dashboard.

mod config;

pub use config::{Config, CONFIG};
