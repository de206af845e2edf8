//! CLI module for surveyctl
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Surveyctl - Admin console for questionnaire and document-processing task services
#[derive(Parser, Debug)]
#[command(name = "surveyctl")]
#[command(version)]
#[command(about = "Admin console for questionnaire and document-processing task services")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Preview operations without issuing mutating API calls
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Override the API base URL (also: SURVEYCTL_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Override the working directory (where surveyctl.json is looked up)
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all questionnaires
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a questionnaire with its questions
    Show {
        /// Questionnaire ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Write the record to a JSON file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Create a questionnaire from a JSON draft file
    Create {
        /// Path to a draft file ({"title": ..., "questions": [...]})
        #[arg(short, long)]
        file: PathBuf,

        /// Output the created record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a questionnaire's title and/or questions
    Edit {
        /// Questionnaire ID
        id: String,

        /// Replace the title
        #[arg(long)]
        title: Option<String>,

        /// Replace the questions with the contents of a JSON file
        #[arg(long)]
        questions_file: Option<PathBuf>,

        /// Output the updated record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a questionnaire
    Delete {
        /// Questionnaire ID
        id: String,
    },

    /// Toggle a questionnaire between Running and Stopped
    Toggle {
        /// Questionnaire ID
        id: String,

        /// Output the updated record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a questionnaire's lifecycle status
    Status {
        /// Questionnaire ID
        id: String,
    },

    /// Manage document processing tasks
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// List all tasks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a task's config
    Show {
        /// Task ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a task from a JSON draft file
    Create {
        /// Path to a draft file
        #[arg(short, long)]
        file: PathBuf,

        /// Output the created record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace a task's config from a JSON draft file
    Edit {
        /// Task ID
        id: String,

        /// Path to a draft file
        #[arg(short, long)]
        file: PathBuf,

        /// Output the updated record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },

    /// Start processing for a task
    Start {
        /// Task ID
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_toggle() {
        let cli = Cli::parse_from(["surveyctl", "toggle", "q-001", "--json"]);
        match cli.command {
            Some(Commands::Toggle { id, json }) => {
                assert_eq!(id, "q-001");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from([
            "surveyctl",
            "list",
            "--api-url",
            "http://staging:8080",
            "--dry-run",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://staging:8080"));
        assert!(cli.dry_run);
    }

    #[test]
    fn test_parse_show_with_out_file() {
        let cli = Cli::parse_from(["surveyctl", "show", "q-001", "--out", "record.json"]);
        match cli.command {
            Some(Commands::Show { id, json, out }) => {
                assert_eq!(id, "q-001");
                assert!(!json);
                assert_eq!(out, Some(PathBuf::from("record.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_task_subcommand() {
        let cli = Cli::parse_from(["surveyctl", "task", "start", "t-001"]);
        match cli.command {
            Some(Commands::Task {
                command: TaskCommands::Start { id },
            }) => assert_eq!(id, "t-001"),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
