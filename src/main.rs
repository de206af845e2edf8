//! Surveyctl CLI - Admin console for questionnaire and document-processing task services

use clap::Parser;
use surveyctl::cli::{Cli, Commands, TaskCommands};
use surveyctl::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the verbosity flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> surveyctl::Result<()> {
    let cwd = cli.cwd.as_deref();
    let api_url = cli.api_url.as_deref();
    use surveyctl::cli::commands;

    match cli.command {
        Some(Commands::List { json }) => commands::list::run(cwd, api_url, json).await,
        Some(Commands::Show { id, json, out }) => {
            commands::show::run(cwd, api_url, &id, json, out.as_deref()).await
        }
        Some(Commands::Create { file, json }) => {
            commands::create::run(cwd, api_url, &file, json, cli.dry_run).await
        }
        Some(Commands::Edit {
            id,
            title,
            questions_file,
            json,
        }) => {
            commands::edit::run(
                cwd,
                api_url,
                &id,
                title,
                questions_file.as_deref(),
                json,
                cli.dry_run,
            )
            .await
        }
        Some(Commands::Delete { id }) => commands::delete::run(cwd, api_url, &id, cli.dry_run).await,
        Some(Commands::Toggle { id, json }) => {
            commands::toggle::run(cwd, api_url, &id, json, cli.dry_run).await
        }
        Some(Commands::Status { id }) => commands::status::run(cwd, api_url, &id).await,
        Some(Commands::Task { command }) => match command {
            TaskCommands::List { json } => commands::task::list(cwd, api_url, json).await,
            TaskCommands::Show { id, json } => commands::task::show(cwd, api_url, &id, json).await,
            TaskCommands::Create { file, json } => {
                commands::task::create(cwd, api_url, &file, json, cli.dry_run).await
            }
            TaskCommands::Edit { id, file, json } => {
                commands::task::edit(cwd, api_url, &id, &file, json, cli.dry_run).await
            }
            TaskCommands::Delete { id } => {
                commands::task::delete(cwd, api_url, &id, cli.dry_run).await
            }
            TaskCommands::Start { id } => commands::task::start(cwd, api_url, &id, cli.dry_run).await,
        },
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
