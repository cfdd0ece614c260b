pub mod cart;
pub mod medicine;
pub mod user;
