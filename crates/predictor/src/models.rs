//! Wire types for the prediction service exchange.

use serde::{Deserialize, Serialize};

/// Feature payload sent to the prediction service.
///
/// Field ranges are enforced by the form controls before submission; the
/// client forwards values as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Customer age, 22 to 65
    pub age: i64,

    /// Total purchase amount, 100.0 to 18026.01
    pub total_purchase: f64,

    /// Account manager assignment, encoded as 0 or 1 (never a JSON bool)
    pub account_manager: u8,

    /// Years as a customer, 1.0 to 9.15
    pub years: f64,

    /// Number of websites using the service, 3 to 14
    pub num_sites: i64,
}

/// Response body from the prediction service.
///
/// The service is expected to answer with 0 or 1, but the value is passed
/// through unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// The binary churn prediction
    pub prediction: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_round_trips() {
        let request = PredictionRequest {
            age: 40,
            total_purchase: 5000.0,
            account_manager: 1,
            years: 5.0,
            num_sites: 8,
        };

        let json = serde_json::to_string(&request).unwrap();
        let back: PredictionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_account_manager_serializes_as_integer() {
        let request = PredictionRequest {
            age: 40,
            total_purchase: 5000.0,
            account_manager: 1,
            years: 5.0,
            num_sites: 8,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["account_manager"], serde_json::json!(1));
        assert!(!value["account_manager"].is_boolean());
        assert_eq!(value["age"], serde_json::json!(40));
        assert_eq!(value["num_sites"], serde_json::json!(8));
    }

    #[test]
    fn test_response_requires_prediction_key() {
        assert!(serde_json::from_str::<PredictionResponse>("{}").is_err());

        let response: PredictionResponse =
            serde_json::from_str(r#"{"prediction": 1}"#).unwrap();
        assert_eq!(response.prediction, 1);
    }
}
