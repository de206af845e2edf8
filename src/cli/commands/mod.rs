//! CLI command implementations

pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod show;
pub mod status;
pub mod task;
pub mod toggle;

use std::path::Path;

use crate::api::ApiClient;
use crate::config;
use crate::errors::Result;
use crate::fs;
use crate::schemas::Questionnaire;

/// Resolve config and build the API client shared by all commands.
pub(crate) fn build_client(cwd: Option<&Path>, api_url: Option<&str>) -> Result<ApiClient> {
    let root = fs::resolve_cwd(cwd);
    let config = config::load_config(&root, api_url)?;
    ApiClient::new(&config)
}

/// Print one questionnaire as a summary line.
pub(crate) fn print_summary(q: &Questionnaire) {
    println!(
        "{}  [{}]  {} question(s)  created {}  {}",
        q.id,
        q.status,
        q.questions.len(),
        q.created_at,
        q.title
    );
}

/// Print one questionnaire in full, questions numbered in display order.
pub(crate) fn print_detail(q: &Questionnaire) {
    println!("{} - {}", q.id, q.title);
    println!("  status:  {}", q.status);
    println!("  created: {}", q.created_at);
    println!("  questions:");
    for (i, question) in q.questions.iter().enumerate() {
        println!("    {}. {} ({})", i + 1, question.text, question.question_type);
        if let Some(options) = &question.options {
            for option in options {
                println!("       - {}", option);
            }
        }
    }
}
