use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyLicenseRequest {
    pub license_number: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictDemandRequest {
    pub product_id: i64,
}
