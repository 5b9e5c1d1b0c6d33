use serde::Deserialize;

/// A single customer row from the churn dataset.
///
/// Numeric fields are kept as `f64` regardless of how the CSV formats them
/// (the source data mixes `42` and `42.0` spellings).
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRecord {
    /// Customer name
    #[serde(rename = "Names")]
    pub name: String,

    /// Age in years
    #[serde(rename = "Age")]
    pub age: f64,

    /// Total amount purchased
    #[serde(rename = "Total_Purchase")]
    pub total_purchase: f64,

    /// Whether a dedicated account manager is assigned (0 or 1)
    #[serde(rename = "Account_Manager")]
    pub account_manager: f64,

    /// Years as a customer
    #[serde(rename = "Years")]
    pub years: f64,

    /// Number of websites using the service
    #[serde(rename = "Num_Sites")]
    pub num_sites: f64,

    /// Date the customer onboarded
    #[serde(rename = "Onboard_date")]
    pub onboard_date: String,

    /// Customer address
    #[serde(rename = "Location")]
    pub location: String,

    /// Company name
    #[serde(rename = "Company")]
    pub company: String,

    /// Whether the customer churned (0 or 1)
    #[serde(rename = "Churn")]
    pub churn: f64,
}
