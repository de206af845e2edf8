//! Configuration loading with defaults
//!
//! Resolution order for the API base URL: `--api-url` flag, then the
//! SURVEYCTL_API_URL environment variable, then surveyctl.json in the
//! working directory, then the built-in default.

use std::path::Path;

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

/// Environment variable overriding the configured API base URL
pub const API_URL_ENV: &str = "SURVEYCTL_API_URL";

/// Load configuration, applying env and flag overrides over the file.
///
/// # Arguments
/// * `root` - Directory to look for surveyctl.json in
/// * `api_url_flag` - Value of the `--api-url` flag, if given
pub fn load_config(root: &Path, api_url_flag: Option<&str>) -> Result<Config> {
    let mut config = fs::read_config(root)?;

    if let Ok(from_env) = std::env::var(API_URL_ENV) {
        if !from_env.is_empty() {
            config.api_url = from_env;
        }
    }
    if let Some(from_flag) = api_url_flag {
        config.api_url = from_flag.to_string();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults() {
        let temp = TempDir::new().unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().unwrap();
        let config_content = r#"{
            "api_url": "http://surveys.internal:9000",
            "timeout_seconds": 5
        }"#;
        std_fs::write(temp.path().join("surveyctl.json"), config_content).unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.api_url, "http://surveys.internal:9000");
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_flag_overrides_file() {
        let temp = TempDir::new().unwrap();
        std_fs::write(
            temp.path().join("surveyctl.json"),
            r#"{"api_url": "http://from-file:9000"}"#,
        )
        .unwrap();

        let config = load_config(temp.path(), Some("http://from-flag:7000")).unwrap();
        assert_eq!(config.api_url, "http://from-flag:7000");
    }
}
