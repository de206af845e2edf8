//! Status lifecycle controller
//!
//! Owns the one mutation path for a questionnaire's status and the one-shot
//! side effect of launching processing when a record enters Running.

use tracing::debug;

use crate::errors::{Result, SurveyctlError};
use crate::schemas::{Questionnaire, StartAck, Status};
use crate::store::QuestionnaireStore;

use super::transitions::plan_toggle;

/// Result of a successful toggle
#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    /// The record as the store returned it after the status write
    pub questionnaire: Questionnaire,

    /// Whether processing was launched by this toggle
    pub started: bool,

    /// Start acknowledgment, present iff `started`
    pub ack: Option<StartAck>,
}

/// Drives status toggles against a store.
///
/// The controller never checks record existence itself; the store's NotFound
/// surfaces unchanged. Ordering per toggle:
///
/// 1. read the current record
/// 2. plan the transition (Running -> Stopped, everything else -> Running)
/// 3. write the new status; a failure here aborts the toggle with no side
///    effects
/// 4. iff the new status is Running, call begin-processing exactly once; a
///    failure here surfaces as `InconsistentState` because the stored status
///    already says Running and nothing rolls it back
pub struct LifecycleController<'a, S: QuestionnaireStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: QuestionnaireStore + ?Sized> LifecycleController<'a, S> {
    /// Create a controller over the given store
    pub fn new(store: &'a S) -> Self {
        LifecycleController { store }
    }

    /// Toggle the lifecycle status of the record with the given id.
    pub async fn toggle(&self, id: &str) -> Result<ToggleOutcome> {
        let current = self.store.get(id).await?;
        let plan = plan_toggle(current.status);
        debug!(id, from = %current.status, to = %plan.target, "toggling questionnaire");

        let questionnaire = self.store.set_status(id, plan.target).await?;

        if !plan.begin_processing {
            return Ok(ToggleOutcome {
                questionnaire,
                started: false,
                ack: None,
            });
        }

        match self.store.begin_processing(id).await {
            Ok(ack) => Ok(ToggleOutcome {
                questionnaire,
                started: true,
                ack: Some(ack),
            }),
            Err(e) => Err(SurveyctlError::InconsistentState {
                id: id.to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Read the current lifecycle status of a record.
    pub async fn status(&self, id: &str) -> Result<Status> {
        Ok(self.store.get(id).await?.status)
    }
}
