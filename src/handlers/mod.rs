pub mod cart;
pub mod medicine;
pub mod prediction;
pub mod user;
