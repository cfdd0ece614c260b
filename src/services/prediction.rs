// src/services/prediction.rs
use serde_json::{json, Value};

/// Client for the external license-verification / demand-prediction service.
/// The upstream is opaque: request and response bodies are fixed by contract
/// and passed through untouched.
#[derive(Clone)]
pub struct PredictionClient {
    client: reqwest::Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var("PREDICTION_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:5001".to_string());
        Self::new(base_url)
    }

    pub async fn verify_license(&self, license_number: &str) -> Result<Value, reqwest::Error> {
        self.client
            .post(format!("{}/verify-license", self.base_url))
            .json(&json!({ "licenseNumber": license_number }))
            .send()
            .await?
            .json()
            .await
    }

    pub async fn predict_demand(&self, product_id: i64) -> Result<Value, reqwest::Error> {
        self.client
            .post(format!("{}/predict", self.base_url))
            .json(&json!({ "productId": product_id }))
            .send()
            .await?
            .json()
            .await
    }
}
