pub mod extract;
pub mod ship;
