//! Task schema - document processing job configs
//!
//! The task subsystem is an opaque collaborator: the client carries its
//! records back and forth without interpreting them beyond display. Wire
//! field names are camelCase, matching the backend.

use serde::{Deserialize, Serialize};

/// A document processing job config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier assigned by the store
    #[serde(rename = "_id")]
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Opaque processing status (observed values: "pending", "in_progress")
    #[serde(default = "default_task_status")]
    pub status: String,

    #[serde(rename = "sourceType", default)]
    pub source_type: String,

    #[serde(rename = "sourcePath", default)]
    pub source_path: String,

    #[serde(rename = "outputType", default)]
    pub output_type: String,

    #[serde(rename = "outputPath", default)]
    pub output_path: String,

    #[serde(rename = "googleApiKey", default)]
    pub google_api_key: String,

    #[serde(rename = "googleCredentials", default)]
    pub google_credentials: String,

    /// ISO 8601 creation timestamp, set once by the store
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

fn default_task_status() -> String {
    "pending".to_string()
}

/// Request body for task create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub name: String,

    #[serde(default = "default_task_status")]
    pub status: String,

    #[serde(rename = "sourceType", default = "default_source_type")]
    pub source_type: String,

    #[serde(rename = "sourcePath", default)]
    pub source_path: String,

    #[serde(rename = "outputType", default = "default_output_type")]
    pub output_type: String,

    #[serde(rename = "outputPath", default)]
    pub output_path: String,

    #[serde(rename = "googleApiKey", default)]
    pub google_api_key: String,

    #[serde(rename = "googleCredentials", default)]
    pub google_credentials: String,
}

fn default_source_type() -> String {
    "google_drive".to_string()
}

fn default_output_type() -> String {
    "google_sheets".to_string()
}

impl TaskDraft {
    /// Create a draft with backend-default source/output types
    pub fn new(name: impl Into<String>) -> Self {
        TaskDraft {
            name: name.into(),
            status: default_task_status(),
            source_type: default_source_type(),
            source_path: String::new(),
            output_type: default_output_type(),
            output_path: String::new(),
            google_api_key: String::new(),
            google_credentials: String::new(),
        }
    }
}
