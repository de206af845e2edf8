//! Lifecycle state machine definitions
//!
//! A questionnaire toggles between Running and Stopped. Complete is assigned
//! by the processing backend and is never a client-requested target.

use crate::schemas::Status;

use super::validation::ValidationResult;

/// The canonical set of lifecycle statuses.
pub const STATUSES: &[Status] = &[
    Status::NotStarted,
    Status::Running,
    Status::Stopped,
    Status::Complete,
];

/// Returns the status a toggle should request from the given current status.
///
/// Running toggles to Stopped; everything else (NotStarted, Stopped, and
/// Complete alike) toggles to Running. This is the single mutation path for
/// the status field on the client side.
pub fn toggle_target(current: Status) -> Status {
    match current {
        Status::Running => Status::Stopped,
        Status::NotStarted | Status::Stopped | Status::Complete => Status::Running,
    }
}

/// The allowed transition targets from a given current status.
///
/// This is the explicit transition map: a toggle is the only client-side
/// mutation, so exactly one target is allowed from each status.
pub fn allowed_targets(current: Status) -> &'static [Status] {
    match current {
        Status::Running => &[Status::Stopped],
        Status::NotStarted | Status::Stopped | Status::Complete => &[Status::Running],
    }
}

/// Whether the client may request this status as a transition target.
///
/// Complete is store-driven only.
pub fn is_client_target(status: Status) -> bool {
    !matches!(status, Status::Complete)
}

/// Validate a status transition requested by the client.
pub fn validate_transition(current: Status, target: Status) -> ValidationResult {
    if !is_client_target(target) {
        return ValidationResult::failure(
            "Complete is assigned by the processing backend and cannot be requested",
        );
    }
    if !allowed_targets(current).contains(&target) {
        return ValidationResult::failure(format!(
            "cannot transition from {} to {}",
            current, target
        ));
    }
    ValidationResult::success()
}
