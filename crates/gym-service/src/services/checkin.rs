//! Trainer check-in service
//!
//! A toggle opens a session when the trainer has none open and closes the
//! open one otherwise. Toggles for the same trainer are serialized in
//! process; the repository performs the read and the write in one locked
//! transaction, so concurrent processes cannot open two sessions either.

use tracing::{info, instrument};

use gym_core::{SessionTransition, TrainerId};

use crate::dto::{CheckInOutRequest, CheckInOutResponse, TrainerAttendanceResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Check-in service
pub struct CheckInService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CheckInService<'a> {
    /// Create a new CheckInService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a trainer's session and return the transition taken
    #[instrument(skip(self))]
    pub async fn toggle(&self, trainer_id: TrainerId) -> ServiceResult<SessionTransition> {
        let _guard = self.ctx.trainer_locks().lock(trainer_id).await;

        let now = self.ctx.clock().now();
        let transition = self.ctx.session_repo().toggle(trainer_id, now).await?;

        info!(
            trainer_id = %trainer_id,
            session_id = %transition.session().id,
            action = transition.message(),
            "Trainer session toggled"
        );
        Ok(transition)
    }

    /// `POST /check-in-out`
    pub async fn check_in_out(&self, request: CheckInOutRequest) -> ServiceResult<CheckInOutResponse> {
        let transition = self.toggle(request.trainer_id).await?;
        Ok(CheckInOutResponse::from(&transition))
    }

    /// Every trainer with the times of their most recent session
    #[instrument(skip(self))]
    pub async fn list_with_latest(&self) -> ServiceResult<Vec<TrainerAttendanceResponse>> {
        let rows = self.ctx.trainer_repo().list_with_latest_session().await?;
        Ok(rows.iter().map(TrainerAttendanceResponse::from).collect())
    }
}
