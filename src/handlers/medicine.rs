// src/handlers/medicine.rs
use axum::extract::State;
use axum::Json;
use tracing::{error, instrument};

use crate::dtos::medicine::MedicineResponse;
use crate::error::AppError;
use crate::models::medicine::Medicine;
use crate::state::AppState;

// GET /api/products - List the catalog
#[instrument(skip(state))]
pub async fn get_medicines(
    State(state): State<AppState>,
) -> Result<Json<Vec<MedicineResponse>>, AppError> {
    match sqlx::query_as::<_, Medicine>(
        "SELECT sr_number, product_name, generic_name, composition,
                packet_size, uses, transfer_price, storage_condition
         FROM medicines ORDER BY sr_number",
    )
    .fetch_all(&state.db_pool)
    .await
    {
        Ok(medicines) => {
            let response = medicines.into_iter().map(MedicineResponse::from).collect();
            Ok(Json(response))
        }
        Err(e) => {
            error!(?e, "Failed to fetch medicines");
            Err(e.into())
        }
    }
}
