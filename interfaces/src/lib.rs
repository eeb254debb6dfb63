pub mod api;
pub mod data;
