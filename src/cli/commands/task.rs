//! Task commands - Opaque CRUD plus start over the task subsystem

use std::path::Path;

use crate::errors::Result;
use crate::fs;
use crate::schemas::{Task, TaskDraft};

use super::build_client;

fn print_task(task: &Task) {
    println!("{}  [{}]  {}", task.id, task.status, task.name);
    println!("  source: {} ({})", task.source_path, task.source_type);
    println!("  output: {} ({})", task.output_path, task.output_type);
    println!("  created: {}", task.created_at);
}

/// List all tasks
pub async fn list(cwd: Option<&Path>, api_url: Option<&str>, json: bool) -> Result<()> {
    let client = build_client(cwd, api_url)?;
    let tasks = client.list_tasks().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks available");
        return Ok(());
    }
    for task in &tasks {
        println!("{}  [{}]  {}", task.id, task.status, task.name);
    }
    Ok(())
}

/// Show a task's config
pub async fn show(cwd: Option<&Path>, api_url: Option<&str>, id: &str, json: bool) -> Result<()> {
    let client = build_client(cwd, api_url)?;
    let task = client.get_task(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        print_task(&task);
    }
    Ok(())
}

/// Create a task from a JSON draft file
pub async fn create(
    cwd: Option<&Path>,
    api_url: Option<&str>,
    file: &Path,
    json: bool,
    dry_run: bool,
) -> Result<()> {
    let draft: TaskDraft = fs::read_json(file)?;

    if dry_run {
        println!("[DRY RUN] Would create task \"{}\"", draft.name);
        return Ok(());
    }

    let client = build_client(cwd, api_url)?;
    let created = client.create_task(&draft).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else {
        println!("Created task {}", created.id);
        print_task(&created);
    }
    Ok(())
}

/// Replace a task's config from a JSON draft file
pub async fn edit(
    cwd: Option<&Path>,
    api_url: Option<&str>,
    id: &str,
    file: &Path,
    json: bool,
    dry_run: bool,
) -> Result<()> {
    let draft: TaskDraft = fs::read_json(file)?;

    if dry_run {
        println!("[DRY RUN] Would update task {} to \"{}\"", id, draft.name);
        return Ok(());
    }

    let client = build_client(cwd, api_url)?;
    let updated = client.update_task(id, &draft).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!("Updated task {}", updated.id);
        print_task(&updated);
    }
    Ok(())
}

/// Delete a task
pub async fn delete(cwd: Option<&Path>, api_url: Option<&str>, id: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("[DRY RUN] Would delete task {}", id);
        return Ok(());
    }

    let client = build_client(cwd, api_url)?;
    client.delete_task(id).await?;
    println!("Deleted task {}", id);
    Ok(())
}

/// Start processing for a task
pub async fn start(cwd: Option<&Path>, api_url: Option<&str>, id: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("[DRY RUN] Would start task {}", id);
        return Ok(());
    }

    let client = build_client(cwd, api_url)?;
    let ack = client.start_task(id).await?;
    match ack.message {
        Some(message) => println!("{}", message),
        None => println!("Started task {}", id),
    }
    Ok(())
}
