use sqlx::FromRow;

/// Catalog record, keyed by the distributor serial number. Everything past
/// the product name can be missing in the imported price list.
#[derive(Debug, FromRow)]
pub struct Medicine {
    pub sr_number: i64,
    pub product_name: String,
    pub generic_name: Option<String>,
    pub composition: Option<String>,
    pub packet_size: Option<String>,
    pub uses: Option<String>,
    pub transfer_price: f64,
    pub storage_condition: Option<String>,
}
