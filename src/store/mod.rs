//! Store abstractions for questionnaire persistence
//!
//! The real store lives behind the HTTP API; `QuestionnaireStore` is the seam
//! that lets the lifecycle controller and the CLI run against either the
//! network client or the in-memory store.

mod cache;
mod memory;

use async_trait::async_trait;

use crate::errors::Result;
use crate::schemas::{Questionnaire, QuestionnaireDraft, StartAck, Status};

pub use cache::RecordCache;
pub use memory::MemoryStore;

/// Persistence operations on questionnaire records.
///
/// The store assigns ids and creation timestamps, owns list order, and
/// rejects unknown ids with `NotFound` (delete included).
#[async_trait]
pub trait QuestionnaireStore: Send + Sync {
    /// List all questionnaires in store-defined order
    async fn list(&self) -> Result<Vec<Questionnaire>>;

    /// Fetch a single questionnaire by id
    async fn get(&self, id: &str) -> Result<Questionnaire>;

    /// Create a questionnaire; the store assigns id, created_at, and the
    /// initial status when the draft carries none
    async fn create(&self, draft: &QuestionnaireDraft) -> Result<Questionnaire>;

    /// Full-record replace of title/questions (and optionally status);
    /// id and created_at are preserved
    async fn update(&self, id: &str, draft: &QuestionnaireDraft) -> Result<Questionnaire>;

    /// Remove a record; unknown ids fail with NotFound
    async fn delete(&self, id: &str) -> Result<()>;

    /// Write the lifecycle status for a record
    async fn set_status(&self, id: &str, status: Status) -> Result<Questionnaire>;

    /// Launch processing for a record
    async fn begin_processing(&self, id: &str) -> Result<StartAck>;
}
