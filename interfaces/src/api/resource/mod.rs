pub mod filter;
pub mod interface;
pub mod types;
