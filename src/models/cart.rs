use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A cart row joined with its catalog record, as produced by the listing
/// query. `product_id` always equals `sr_number`; both are carried because
/// the frontend reads either.
#[derive(Debug, FromRow)]
pub struct CartItemRow {
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
