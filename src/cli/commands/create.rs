//! Create command - Create a questionnaire from a JSON draft file

use std::path::Path;

use crate::domain::validate_draft;
use crate::errors::{Result, SurveyctlError};
use crate::fs;
use crate::schemas::QuestionnaireDraft;
use crate::store::QuestionnaireStore;

use super::{build_client, print_detail};

/// Create a questionnaire from the draft at `file`
pub async fn run(
    cwd: Option<&Path>,
    api_url: Option<&str>,
    file: &Path,
    json: bool,
    dry_run: bool,
) -> Result<()> {
    let draft: QuestionnaireDraft = fs::read_json(file)?;

    // Same pre-submit check the store applies, surfaced before any network call
    let validation = validate_draft(&draft);
    if !validation.valid {
        return Err(SurveyctlError::Validation(
            validation.reason.unwrap_or_else(|| "invalid draft".to_string()),
        ));
    }

    if dry_run {
        println!(
            "[DRY RUN] Would create questionnaire \"{}\" with {} question(s)",
            draft.title,
            draft.questions.len()
        );
        return Ok(());
    }

    let client = build_client(cwd, api_url)?;
    let created = client.create(&draft).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else {
        println!("Created questionnaire {}", created.id);
        print_detail(&created);
    }
    Ok(())
}
