pub mod args;
pub mod cli;
pub mod env_var;
