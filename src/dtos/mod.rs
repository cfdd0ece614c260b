pub mod cart;
pub mod medicine;
pub mod prediction;
pub mod user;

use serde::Serialize;

/// Plain confirmation body shared by the mutation endpoints.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
