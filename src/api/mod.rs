//! HTTP API client for the admin backend

mod client;
mod questionnaires;
mod tasks;

pub use client::ApiClient;
