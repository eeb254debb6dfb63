pub mod query;
pub mod transport;
