//! Show command - Show a questionnaire with its questions

use std::path::Path;

use crate::errors::Result;
use crate::fs;
use crate::store::QuestionnaireStore;

use super::{build_client, print_detail};

/// Show details of a specific questionnaire, optionally writing it to a file
pub async fn run(
    cwd: Option<&Path>,
    api_url: Option<&str>,
    id: &str,
    json: bool,
    out: Option<&Path>,
) -> Result<()> {
    let client = build_client(cwd, api_url)?;
    let questionnaire = client.get(id).await?;

    if let Some(path) = out {
        fs::write_json(path, &questionnaire)?;
        println!("Wrote questionnaire {} to {}", questionnaire.id, path.display());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&questionnaire)?);
    } else {
        print_detail(&questionnaire);
    }
    Ok(())
}
