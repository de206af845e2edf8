//! File system utilities for surveyctl
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_config, read_json, write_json};
pub use paths::{config_path, resolve_cwd};
