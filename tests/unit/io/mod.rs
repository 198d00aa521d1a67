pub mod cli;
pub mod configuration;
