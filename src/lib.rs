//! Surveyctl - Admin console for questionnaire and document-processing task services
//!
//! This library provides the core functionality for the surveyctl CLI, including:
//! - Schema definitions for questionnaires, questions, tasks, and config
//! - Domain logic for the status lifecycle (toggle planning, transitions, validation)
//! - The lifecycle controller owning the one-shot start-processing side effect
//! - A typed HTTP client for the admin API and an in-memory store for tests
//! - File system utilities for reading/writing JSON drafts and config

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod store;

// Re-export commonly used types
pub use errors::{Result, SurveyctlError};
pub use schemas::{Question, QuestionType, Questionnaire, QuestionnaireDraft, Status, Task};
