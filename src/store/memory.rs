//! In-memory questionnaire store
//!
//! Mirrors the external store's contract closely enough for lifecycle and CLI
//! tests: id/timestamp assignment, draft validation, NotFound on unknown ids.
//! Failure injection hooks stand in for a flaky backend.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::validate_draft;
use crate::errors::{Result, SurveyctlError};
use crate::schemas::{Questionnaire, QuestionnaireDraft, StartAck, Status};

use super::QuestionnaireStore;

/// In-memory implementation of `QuestionnaireStore`
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Questionnaire>>,
    next_id: AtomicUsize,
    begin_processing_calls: AtomicUsize,
    fail_set_status: AtomicBool,
    fail_begin_processing: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next set_status calls fail with an API error
    pub fn fail_set_status(&self, fail: bool) {
        self.fail_set_status.store(fail, Ordering::SeqCst);
    }

    /// Make the next begin_processing calls fail with an API error
    pub fn fail_begin_processing(&self, fail: bool) {
        self.fail_begin_processing.store(fail, Ordering::SeqCst);
    }

    /// How many times begin_processing has been invoked
    pub fn begin_processing_calls(&self) -> usize {
        self.begin_processing_calls.load(Ordering::SeqCst)
    }

    fn not_found(id: &str) -> SurveyctlError {
        SurveyctlError::NotFound(format!("questionnaire {} not found", id))
    }
}

#[async_trait]
impl QuestionnaireStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Questionnaire>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn get(&self, id: &str) -> Result<Questionnaire> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, draft: &QuestionnaireDraft) -> Result<Questionnaire> {
        let validation = validate_draft(draft);
        if !validation.valid {
            return Err(SurveyctlError::Validation(
                validation.reason.unwrap_or_else(|| "invalid draft".to_string()),
            ));
        }

        let seq = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let questionnaire = Questionnaire {
            id: format!("q-{:03}", seq),
            title: draft.title.clone(),
            questions: draft.questions.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
            status: draft.status.unwrap_or(Status::NotStarted),
        };

        self.records.lock().unwrap().push(questionnaire.clone());
        Ok(questionnaire)
    }

    async fn update(&self, id: &str, draft: &QuestionnaireDraft) -> Result<Questionnaire> {
        let validation = validate_draft(draft);
        if !validation.valid {
            return Err(SurveyctlError::Validation(
                validation.reason.unwrap_or_else(|| "invalid draft".to_string()),
            ));
        }

        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        // id and created_at are preserved; status only changes when the
        // draft explicitly carries one
        record.title = draft.title.clone();
        record.questions = draft.questions.clone();
        if let Some(status) = draft.status {
            record.status = status;
        }
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|q| q.id != id);
        if records.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }

    async fn set_status(&self, id: &str, status: Status) -> Result<Questionnaire> {
        if self.fail_set_status.load(Ordering::SeqCst) {
            return Err(SurveyctlError::Api {
                status: 500,
                message: "injected set_status failure".to_string(),
            });
        }

        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        record.status = status;
        Ok(record.clone())
    }

    async fn begin_processing(&self, id: &str) -> Result<StartAck> {
        if self.fail_begin_processing.load(Ordering::SeqCst) {
            return Err(SurveyctlError::Api {
                status: 500,
                message: "injected begin_processing failure".to_string(),
            });
        }

        let exists = self.records.lock().unwrap().iter().any(|q| q.id == id);
        if !exists {
            return Err(Self::not_found(id));
        }

        self.begin_processing_calls.fetch_add(1, Ordering::SeqCst);
        Ok(StartAck {
            questionnaire_id: Some(id.to_string()),
            status: Some("success".to_string()),
            message: Some("Questionnaire flow generated successfully".to_string()),
            file_path: None,
        })
    }
}
