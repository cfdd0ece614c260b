// src/dtos/medicine.rs
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MedicineResponse {
    pub sr_number: i64,
    pub product_name: String,
    pub generic_name: Option<String>,
    pub composition: Option<String>,
    pub packet_size: Option<String>,
    pub uses: Option<String>,
    pub transfer_price: f64,
    pub storage_condition: Option<String>,
}

// Convert from Model to Response DTO
impl From<crate::models::medicine::Medicine> for MedicineResponse {
    fn from(medicine: crate::models::medicine::Medicine) -> Self {
        Self {
            sr_number: medicine.sr_number,
            product_name: medicine.product_name,
            generic_name: medicine.generic_name,
            composition: medicine.composition,
            packet_size: medicine.packet_size,
            uses: medicine.uses,
            transfer_price: medicine.transfer_price,
            storage_condition: medicine.storage_condition,
        }
    }
}
