// src/dtos/cart.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::cart::CartItemRow;

/// Body of POST /api/cart. Adds to any existing quantity.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: i64,
    pub quantity: i32,
}

/// Body of POST /api/cart/update. Overwrites the quantity outright.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    pub product_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
pub struct CartItemResponse {
    pub product_id: i64,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
    pub sr_number: i64,
    pub product_name: String,
    pub generic_name: Option<String>,
    pub composition: Option<String>,
    pub packet_size: Option<String>,
    pub uses: Option<String>,
    pub transfer_price: f64,
    pub storage_condition: Option<String>,
}

impl From<CartItemRow> for CartItemResponse {
    fn from(row: CartItemRow) -> Self {
        Self {
            product_id: row.product_id,
            quantity: row.quantity,
            added_at: row.added_at,
            sr_number: row.sr_number,
            product_name: row.product_name,
            generic_name: row.generic_name,
            composition: row.composition,
            packet_size: row.packet_size,
            uses: row.uses,
            transfer_price: row.transfer_price,
            storage_condition: row.storage_condition,
        }
    }
}
