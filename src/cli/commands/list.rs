//! List command - List all questionnaires

use std::path::Path;

use crate::errors::Result;
use crate::store::{QuestionnaireStore, RecordCache};

use super::{build_client, print_summary};

/// List all questionnaires in store order
pub async fn run(cwd: Option<&Path>, api_url: Option<&str>, json: bool) -> Result<()> {
    let client = build_client(cwd, api_url)?;

    let mut cache = RecordCache::new();
    cache.load(client.list().await?);

    if json {
        let records: Vec<_> = cache.iter().collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if cache.is_empty() {
        println!("No questionnaires available");
        return Ok(());
    }

    for record in cache.iter() {
        print_summary(record);
    }
    Ok(())
}
