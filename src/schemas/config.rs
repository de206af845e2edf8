//! Config schema - Configuration for surveyctl

use serde::{Deserialize, Serialize};

/// Main configuration for surveyctl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the API server (e.g., "http://localhost:5000")
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_seconds() -> u32 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            api_url: "http://localhost:5000".to_string(),
            timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api_url, config.api_url);
        assert_eq!(parsed.timeout_seconds, config.timeout_seconds);
    }

    #[test]
    fn test_config_partial_json() {
        // Simulate a config file with only some fields set
        let json = r#"{"api_url": "http://staging.internal:8080"}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.api_url, "http://staging.internal:8080");
        // Other fields should have defaults
        assert_eq!(parsed.schema_version, 1);
        assert_eq!(parsed.timeout_seconds, 30);
    }
}
