//! Status command - Show a questionnaire's lifecycle status

use std::path::Path;

use crate::domain::LifecycleController;
use crate::errors::Result;

use super::build_client;

/// Print the current lifecycle status of a questionnaire
pub async fn run(cwd: Option<&Path>, api_url: Option<&str>, id: &str) -> Result<()> {
    let client = build_client(cwd, api_url)?;
    let controller = LifecycleController::new(&client);
    let status = controller.status(id).await?;
    println!("{}", status);
    Ok(())
}
