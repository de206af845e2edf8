//! Questionnaire schema - questionnaires, questions, and lifecycle status

use serde::{Deserialize, Serialize};

/// Processing lifecycle status of a questionnaire.
///
/// Wire strings match the backend exactly ("Not Started", not "not_started").
/// `Complete` is assigned by the processing backend only; the client never
/// requests it as a transition target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Initial state at creation
    #[serde(rename = "Not Started")]
    NotStarted,
    /// Processing has been launched
    Running,
    /// Processing paused by the operator
    Stopped,
    /// Processing finished - set by the backend, never by the client
    Complete,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NotStarted => write!(f, "Not Started"),
            Status::Running => write!(f, "Running"),
            Status::Stopped => write!(f, "Stopped"),
            Status::Complete => write!(f, "Complete"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(Status::NotStarted),
            "Running" => Ok(Status::Running),
            "Stopped" => Ok(Status::Stopped),
            "Complete" => Ok(Status::Complete),
            _ => Err(format!("Unknown questionnaire status: {}", s)),
        }
    }
}

/// Question type.
///
/// The backend has shipped several variants of this set over time, so unknown
/// values must survive a round trip instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    Essay,
    OpenEnded,
    Rating,
    /// Catch-all for question types this client does not know about
    #[serde(untagged)]
    Other(String),
}

impl QuestionType {
    /// Whether this type presents a discrete set of choices (and so carries options).
    pub fn has_options(&self) -> bool {
        matches!(self, QuestionType::MultipleChoice)
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionType::MultipleChoice => write!(f, "multiple_choice"),
            QuestionType::Essay => write!(f, "essay"),
            QuestionType::OpenEnded => write!(f, "open_ended"),
            QuestionType::Rating => write!(f, "rating"),
            QuestionType::Other(s) => write!(f, "{}", s),
        }
    }
}

/// A single question within a questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt shown to the respondent
    pub text: String,

    /// Question type
    #[serde(rename = "type")]
    pub question_type: QuestionType,

    /// Ordered answer choices, present only for choice-style questions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Question {
    /// Create a question without options
    pub fn new(text: impl Into<String>, question_type: QuestionType) -> Self {
        Question {
            text: text.into(),
            question_type,
            options: None,
        }
    }

    /// Return a new Question with the given options
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }
}

/// A titled, ordered set of questions with a processing lifecycle status.
///
/// `id` and `created_at` are assigned by the store at creation and never
/// change afterwards. `status` mutates only through the lifecycle controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    /// Opaque identifier assigned by the store
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// Questions in display order
    pub questions: Vec<Question>,

    /// ISO 8601 creation timestamp, set once by the store
    pub created_at: String,

    /// Processing lifecycle status
    #[serde(default = "default_status")]
    pub status: Status,
}

fn default_status() -> Status {
    Status::NotStarted
}

/// Request body for questionnaire create/update (`{title, questions, status?}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireDraft {
    pub title: String,
    pub questions: Vec<Question>,

    /// Optional status override; omitted on create so the store assigns the initial value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl QuestionnaireDraft {
    /// Create a draft without a status override
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        QuestionnaireDraft {
            title: title.into(),
            questions,
            status: None,
        }
    }
}

impl From<&Questionnaire> for QuestionnaireDraft {
    fn from(q: &Questionnaire) -> Self {
        QuestionnaireDraft {
            title: q.title.clone(),
            questions: q.questions.clone(),
            status: Some(q.status),
        }
    }
}

/// A single typed edit to a questionnaire.
///
/// This is the closed set of fields the client may change on an existing
/// record. Status is deliberately absent: it mutates only through the
/// lifecycle controller, never through an edit.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionnaireEdit {
    /// Replace the title
    Title(String),
    /// Replace the full question list
    Questions(Vec<Question>),
}

impl QuestionnaireEdit {
    /// Apply this edit to a draft, consuming and returning it
    pub fn apply(self, mut draft: QuestionnaireDraft) -> QuestionnaireDraft {
        match self {
            QuestionnaireEdit::Title(title) => draft.title = title,
            QuestionnaireEdit::Questions(questions) => draft.questions = questions,
        }
        draft
    }
}

/// Acknowledgment returned by the begin-processing endpoint.
///
/// The questionnaire and task endpoints return different shapes, so every
/// field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartAck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questionnaire_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(serde_json::to_string(&Status::NotStarted).unwrap(), "\"Not Started\"");
        assert_eq!(serde_json::to_string(&Status::Running).unwrap(), "\"Running\"");
        assert_eq!(serde_json::to_string(&Status::Stopped).unwrap(), "\"Stopped\"");
        assert_eq!(serde_json::to_string(&Status::Complete).unwrap(), "\"Complete\"");
    }

    #[test]
    fn test_status_deserialization() {
        assert_eq!(serde_json::from_str::<Status>("\"Not Started\"").unwrap(), Status::NotStarted);
        assert_eq!(serde_json::from_str::<Status>("\"Running\"").unwrap(), Status::Running);
        assert!(serde_json::from_str::<Status>("\"running\"").is_err());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("Not Started".parse::<Status>().unwrap(), Status::NotStarted);
        assert_eq!("Complete".parse::<Status>().unwrap(), Status::Complete);
        assert!("Paused".parse::<Status>().is_err());
    }

    #[test]
    fn test_question_type_known_values() {
        assert_eq!(
            serde_json::to_string(&QuestionType::MultipleChoice).unwrap(),
            "\"multiple_choice\""
        );
        assert_eq!(
            serde_json::from_str::<QuestionType>("\"open_ended\"").unwrap(),
            QuestionType::OpenEnded
        );
        assert_eq!(
            serde_json::from_str::<QuestionType>("\"rating\"").unwrap(),
            QuestionType::Rating
        );
    }

    #[test]
    fn test_question_type_unknown_value_round_trips() {
        let parsed: QuestionType = serde_json::from_str("\"likert_scale\"").unwrap();
        assert_eq!(parsed, QuestionType::Other("likert_scale".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"likert_scale\"");
    }

    #[test]
    fn test_question_options_skipped_when_absent() {
        let question = Question::new("How are you?", QuestionType::OpenEnded);
        let json = serde_json::to_string(&question).unwrap();
        assert!(!json.contains("options"));
        assert!(json.contains("\"type\":\"open_ended\""));
    }

    #[test]
    fn test_question_with_options() {
        let question = Question::new("Pick one", QuestionType::MultipleChoice)
            .with_options(vec!["A".to_string(), "B".to_string()]);

        let json = serde_json::to_string(&question).unwrap();
        let parsed: Question = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.options.as_ref().unwrap().len(), 2);
        assert!(parsed.question_type.has_options());
    }

    #[test]
    fn test_questionnaire_json_round_trip() {
        let json = r#"{
            "id": "q-001",
            "title": "Survey",
            "questions": [{"text": "How are you?", "type": "open_ended"}],
            "created_at": "2024-01-15T10:00:00",
            "status": "Not Started"
        }"#;

        let parsed: Questionnaire = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, "q-001");
        assert_eq!(parsed.title, "Survey");
        assert_eq!(parsed.questions.len(), 1);
        assert_eq!(parsed.status, Status::NotStarted);

        let back = serde_json::to_string(&parsed).unwrap();
        let reparsed: Questionnaire = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn test_questionnaire_status_defaults_to_not_started() {
        let json = r#"{
            "id": "q-002",
            "title": "No status field",
            "questions": [],
            "created_at": "2024-01-15T10:00:00"
        }"#;

        let parsed: Questionnaire = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, Status::NotStarted);
    }

    #[test]
    fn test_draft_omits_absent_status() {
        let draft = QuestionnaireDraft::new(
            "Survey",
            vec![Question::new("Q1", QuestionType::Essay)],
        );
        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("status"));
    }

    #[test]
    fn test_edit_title_leaves_questions_untouched() {
        let draft = QuestionnaireDraft::new(
            "Old",
            vec![Question::new("Q1", QuestionType::Essay)],
        );

        let edited = QuestionnaireEdit::Title("New".to_string()).apply(draft);
        assert_eq!(edited.title, "New");
        assert_eq!(edited.questions.len(), 1);
    }

    #[test]
    fn test_edit_questions_replaces_full_list() {
        let draft = QuestionnaireDraft::new(
            "Survey",
            vec![Question::new("Q1", QuestionType::Essay)],
        );

        let replacement = vec![
            Question::new("Q2", QuestionType::OpenEnded),
            Question::new("Q3", QuestionType::Rating),
        ];
        let edited = QuestionnaireEdit::Questions(replacement).apply(draft);
        assert_eq!(edited.questions.len(), 2);
        assert_eq!(edited.title, "Survey");
    }

    #[test]
    fn test_start_ack_tolerates_both_shapes() {
        let questionnaire_shape = r#"{
            "questionnaire_id": "q-001",
            "file_path": "flows/survey_flow.based",
            "status": "success",
            "message": "Questionnaire flow generated successfully"
        }"#;
        let ack: StartAck = serde_json::from_str(questionnaire_shape).unwrap();
        assert_eq!(ack.questionnaire_id.as_deref(), Some("q-001"));

        let task_shape = r#"{"message": "Task started successfully"}"#;
        let ack: StartAck = serde_json::from_str(task_shape).unwrap();
        assert!(ack.questionnaire_id.is_none());
        assert_eq!(ack.message.as_deref(), Some("Task started successfully"));
    }
}
