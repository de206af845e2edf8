//! Validation rules for questionnaire drafts
//!
//! The contract is deliberately thin: non-empty title, at least one question,
//! non-empty question text. Nothing else is checked on the client.

use crate::schemas::{Question, QuestionnaireDraft};

/// Result of a validation check
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Validate a questionnaire title
pub fn validate_title(title: &str) -> ValidationResult {
    if title.trim().is_empty() {
        return ValidationResult::failure("title must not be empty");
    }
    ValidationResult::success()
}

/// Validate a question list: at least one entry, each with non-empty text
pub fn validate_questions(questions: &[Question]) -> ValidationResult {
    if questions.is_empty() {
        return ValidationResult::failure("questionnaire must contain at least one question");
    }
    for (i, question) in questions.iter().enumerate() {
        if question.text.trim().is_empty() {
            return ValidationResult::failure(format!("question {} has empty text", i + 1));
        }
    }
    ValidationResult::success()
}

/// Validate a create/update draft
pub fn validate_draft(draft: &QuestionnaireDraft) -> ValidationResult {
    let title = validate_title(&draft.title);
    if !title.valid {
        return title;
    }
    validate_questions(&draft.questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::QuestionType;

    fn make_draft(title: &str, question_texts: &[&str]) -> QuestionnaireDraft {
        QuestionnaireDraft::new(
            title,
            question_texts
                .iter()
                .map(|t| Question::new(*t, QuestionType::OpenEnded))
                .collect(),
        )
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Survey").valid);
        assert!(!validate_title("").valid);
        assert!(!validate_title("   ").valid);
        assert_eq!(
            validate_title("").reason,
            Some("title must not be empty".to_string())
        );
    }

    #[test]
    fn test_validate_questions_rejects_empty_list() {
        let result = validate_questions(&[]);
        assert!(!result.valid);
        assert!(result.reason.unwrap().contains("at least one"));
    }

    #[test]
    fn test_validate_questions_rejects_empty_text() {
        let questions = vec![
            Question::new("How are you?", QuestionType::OpenEnded),
            Question::new("  ", QuestionType::Essay),
        ];
        let result = validate_questions(&questions);
        assert!(!result.valid);
        assert!(result.reason.unwrap().contains("question 2"));
    }

    #[test]
    fn test_validate_questions_accepts_valid_list() {
        let questions = vec![Question::new("How are you?", QuestionType::OpenEnded)];
        assert!(validate_questions(&questions).valid);
    }

    #[test]
    fn test_validate_draft_empty_title() {
        let draft = make_draft("", &["Q1"]);
        let result = validate_draft(&draft);
        assert!(!result.valid);
        assert!(result.reason.unwrap().contains("title"));
    }

    #[test]
    fn test_validate_draft_no_questions() {
        let draft = make_draft("X", &[]);
        let result = validate_draft(&draft);
        assert!(!result.valid);
        assert!(result.reason.unwrap().contains("question"));
    }

    #[test]
    fn test_validate_draft_valid() {
        let draft = make_draft("Survey", &["How are you?"]);
        assert!(validate_draft(&draft).valid);
    }
}
