//! Toggle planning
//!
//! Pure functions for deciding what a toggle request must do before any
//! network call happens.

use crate::schemas::Status;

use super::states::toggle_target;

/// The plan for a single toggle: which status to write, and whether a
/// begin-processing call must follow the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TogglePlan {
    /// Status to request from the store
    pub target: Status,

    /// Whether the begin-processing side effect fires after a successful write.
    /// True exactly when the target is Running.
    pub begin_processing: bool,
}

/// Plan a toggle from the given current status.
///
/// Never mutates anything; the lifecycle controller executes the plan.
pub fn plan_toggle(current: Status) -> TogglePlan {
    let target = toggle_target(current);
    TogglePlan {
        target,
        begin_processing: target == Status::Running,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_from_not_started() {
        let plan = plan_toggle(Status::NotStarted);
        assert_eq!(plan.target, Status::Running);
        assert!(plan.begin_processing);
    }

    #[test]
    fn test_plan_from_stopped() {
        let plan = plan_toggle(Status::Stopped);
        assert_eq!(plan.target, Status::Running);
        assert!(plan.begin_processing);
    }

    #[test]
    fn test_plan_from_complete() {
        let plan = plan_toggle(Status::Complete);
        assert_eq!(plan.target, Status::Running);
        assert!(plan.begin_processing);
    }

    #[test]
    fn test_plan_from_running_has_no_side_effect() {
        let plan = plan_toggle(Status::Running);
        assert_eq!(plan.target, Status::Stopped);
        assert!(!plan.begin_processing);
    }
}
