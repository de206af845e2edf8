//! Delete command - Delete a questionnaire

use std::path::Path;

use crate::errors::Result;
use crate::store::QuestionnaireStore;

use super::build_client;

/// Delete the questionnaire with the given id
pub async fn run(cwd: Option<&Path>, api_url: Option<&str>, id: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("[DRY RUN] Would delete questionnaire {}", id);
        return Ok(());
    }

    let client = build_client(cwd, api_url)?;
    client.delete(id).await?;
    println!("Deleted questionnaire {}", id);
    Ok(())
}
