//! CLI library for testing purposes

pub mod config;
pub mod extract;

pub use config::FileConfig;
pub use extract::{ExtractArgs, resolve_config, run_extract_command};
