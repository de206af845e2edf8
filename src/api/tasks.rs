//! Task endpoints
//!
//! The task subsystem is an opaque collaborator with the same CRUD shape as
//! questionnaires; these are plain inherent methods rather than a trait.

use crate::errors::Result;
use crate::schemas::{StartAck, Task, TaskDraft};

use super::client::ApiClient;

impl ApiClient {
    /// List all tasks
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let url = self.endpoint("api/tasks")?;
        let response = self.http().get(url).send().await?;
        Self::parse(response).await
    }

    /// Fetch a single task by id
    pub async fn get_task(&self, id: &str) -> Result<Task> {
        let url = self.endpoint(&format!("api/tasks/{}", id))?;
        let response = self.http().get(url).send().await?;
        Self::parse(response).await
    }

    /// Create a task
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task> {
        let url = self.endpoint("api/tasks")?;
        let response = self.http().post(url).json(draft).send().await?;
        Self::parse(response).await
    }

    /// Full-record replace of a task
    pub async fn update_task(&self, id: &str, draft: &TaskDraft) -> Result<Task> {
        let url = self.endpoint(&format!("api/tasks/{}", id))?;
        let response = self.http().put(url).json(draft).send().await?;
        Self::parse(response).await
    }

    /// Delete a task
    pub async fn delete_task(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&format!("api/tasks/{}", id))?;
        let response = self.http().delete(url).send().await?;
        Self::check_ok(response).await
    }

    /// Start processing for a task
    pub async fn start_task(&self, id: &str) -> Result<StartAck> {
        let url = self.endpoint(&format!("api/tasks/{}/start", id))?;
        let response = self.http().post(url).send().await?;
        Self::parse(response).await
    }
}
