//! Edit command - Replace a questionnaire's title and/or questions
//!
//! Edits are a closed set of typed variants; status is not one of them and
//! never changes through this path.

use std::path::Path;

use crate::domain::validate_draft;
use crate::errors::{Result, SurveyctlError};
use crate::fs;
use crate::schemas::{Question, QuestionnaireDraft, QuestionnaireEdit};
use crate::store::QuestionnaireStore;

use super::{build_client, print_detail};

/// Apply the given edits to a questionnaire
pub async fn run(
    cwd: Option<&Path>,
    api_url: Option<&str>,
    id: &str,
    title: Option<String>,
    questions_file: Option<&Path>,
    json: bool,
    dry_run: bool,
) -> Result<()> {
    let mut edits: Vec<QuestionnaireEdit> = Vec::new();
    if let Some(title) = title {
        edits.push(QuestionnaireEdit::Title(title));
    }
    if let Some(path) = questions_file {
        let questions: Vec<Question> = fs::read_json(path)?;
        edits.push(QuestionnaireEdit::Questions(questions));
    }
    if edits.is_empty() {
        return Err(SurveyctlError::Validation(
            "nothing to edit: pass --title and/or --questions-file".to_string(),
        ));
    }

    let client = build_client(cwd, api_url)?;
    let current = client.get(id).await?;

    // Full-record replace built from the current record; status is omitted
    // so the store leaves it untouched
    let mut draft = QuestionnaireDraft::new(current.title.clone(), current.questions.clone());
    for edit in edits {
        draft = edit.apply(draft);
    }

    let validation = validate_draft(&draft);
    if !validation.valid {
        return Err(SurveyctlError::Validation(
            validation.reason.unwrap_or_else(|| "invalid draft".to_string()),
        ));
    }

    if dry_run {
        println!(
            "[DRY RUN] Would update questionnaire {} to \"{}\" with {} question(s)",
            id,
            draft.title,
            draft.questions.len()
        );
        return Ok(());
    }

    let updated = client.update(id, &draft).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!("Updated questionnaire {}", updated.id);
        print_detail(&updated);
    }
    Ok(())
}
