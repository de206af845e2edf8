//! Questionnaire endpoints
//!
//! `QuestionnaireStore` implementation over HTTP. The collection routes keep
//! their trailing slash; the backend distinguishes them.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::errors::Result;
use crate::schemas::{Questionnaire, QuestionnaireDraft, StartAck, Status};
use crate::store::QuestionnaireStore;

use super::client::ApiClient;

#[async_trait]
impl QuestionnaireStore for ApiClient {
    async fn list(&self) -> Result<Vec<Questionnaire>> {
        let url = self.endpoint("api/questionnaires/")?;
        debug!(%url, "listing questionnaires");
        let response = self.http().get(url).send().await?;
        Self::parse(response).await
    }

    async fn get(&self, id: &str) -> Result<Questionnaire> {
        let url = self.endpoint(&format!("api/questionnaires/{}", id))?;
        let response = self.http().get(url).send().await?;
        Self::parse(response).await
    }

    async fn create(&self, draft: &QuestionnaireDraft) -> Result<Questionnaire> {
        let url = self.endpoint("api/questionnaires/")?;
        debug!(%url, title = %draft.title, "creating questionnaire");
        let response = self.http().post(url).json(draft).send().await?;
        Self::parse(response).await
    }

    async fn update(&self, id: &str, draft: &QuestionnaireDraft) -> Result<Questionnaire> {
        let url = self.endpoint(&format!("api/questionnaires/{}", id))?;
        let response = self.http().put(url).json(draft).send().await?;
        Self::parse(response).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&format!("api/questionnaires/{}", id))?;
        let response = self.http().delete(url).send().await?;
        Self::check_ok(response).await
    }

    async fn set_status(&self, id: &str, status: Status) -> Result<Questionnaire> {
        let url = self.endpoint(&format!("api/questionnaires/{}/status", id))?;
        debug!(%url, %status, "writing questionnaire status");
        let response = self
            .http()
            .put(url)
            .json(&json!({ "status": status }))
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn begin_processing(&self, id: &str) -> Result<StartAck> {
        let url = self.endpoint(&format!("api/questionnaires/{}/start", id))?;
        debug!(%url, "launching questionnaire processing");
        let response = self.http().post(url).send().await?;
        Self::parse(response).await
    }
}
