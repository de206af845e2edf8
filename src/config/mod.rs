//! Configuration loading for surveyctl

mod loader;

pub use loader::{load_config, API_URL_ENV};
