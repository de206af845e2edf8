//! Domain logic for the questionnaire lifecycle

mod lifecycle;
pub(crate) mod states;
pub(crate) mod transitions;
pub(crate) mod validation;


pub use lifecycle::{LifecycleController, ToggleOutcome};
pub use states::{allowed_targets, is_client_target, toggle_target, validate_transition, STATUSES};
pub use transitions::{plan_toggle, TogglePlan};
pub use validation::{
    validate_draft, validate_questions, validate_title, ValidationResult,
};
