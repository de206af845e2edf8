//! Toggle command - The lifecycle button
//!
//! Running questionnaires stop; everything else starts. Starting launches
//! processing through the lifecycle controller after the status write.

use std::path::Path;

use crate::domain::{plan_toggle, LifecycleController};
use crate::errors::Result;
use crate::store::QuestionnaireStore;

use super::build_client;

/// Toggle the lifecycle status of a questionnaire
pub async fn run(
    cwd: Option<&Path>,
    api_url: Option<&str>,
    id: &str,
    json: bool,
    dry_run: bool,
) -> Result<()> {
    let client = build_client(cwd, api_url)?;

    if dry_run {
        let current = client.get(id).await?;
        let plan = plan_toggle(current.status);
        if plan.begin_processing {
            println!(
                "[DRY RUN] Would set questionnaire {} from {} to {} and launch processing",
                id, current.status, plan.target
            );
        } else {
            println!(
                "[DRY RUN] Would set questionnaire {} from {} to {}",
                id, current.status, plan.target
            );
        }
        return Ok(());
    }

    let controller = LifecycleController::new(&client);
    let outcome = controller.toggle(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.questionnaire)?);
        return Ok(());
    }

    if outcome.started {
        println!(
            "Questionnaire {} is now {} (processing started)",
            outcome.questionnaire.id, outcome.questionnaire.status
        );
        if let Some(message) = outcome.ack.and_then(|a| a.message) {
            println!("  {}", message);
        }
    } else {
        println!(
            "Questionnaire {} is now {}",
            outcome.questionnaire.id, outcome.questionnaire.status
        );
    }
    Ok(())
}
