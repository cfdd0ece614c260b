pub mod cart;
pub mod prediction;
