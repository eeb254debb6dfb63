pub mod assignment;
pub mod client;
pub mod error;
pub mod get;
pub mod students;
pub mod topic;
