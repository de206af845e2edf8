//! Schema types for surveyctl
//!
//! All types are designed to be compatible with the backend's JSON wire format.

mod config;
mod questionnaire;
mod task;

pub use config::Config;
pub use questionnaire::{
    Question, QuestionType, Questionnaire, QuestionnaireDraft, QuestionnaireEdit, StartAck,
    Status,
};
pub use task::{Task, TaskDraft};
