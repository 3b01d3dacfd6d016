pub mod config;
pub mod input;
pub mod pipeline;
pub mod types;
