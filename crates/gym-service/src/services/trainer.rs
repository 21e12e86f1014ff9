//! Trainer service
//!
//! Trainer administration. Adding a trainer creates no session row; a
//! trainer who never checked in simply has no session.

use tracing::{info, instrument};
use validator::Validate;

use gym_core::{DomainError, NewTrainer, Trainer, TrainerChanges, TrainerId};

use crate::dto::{
    CreateTrainerRequest, CreatedResponse, TrainerAddedResponse, TrainerResponse,
    UpdateTrainerRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Trainer service
pub struct TrainerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TrainerService<'a> {
    /// Create a new TrainerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all trainers
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<TrainerResponse>> {
        let trainers = self.ctx.trainer_repo().list().await?;
        Ok(trainers.iter().map(TrainerResponse::from).collect())
    }

    /// `POST /tusers`
    pub async fn create(&self, request: CreateTrainerRequest) -> ServiceResult<CreatedResponse> {
        let trainer = self.insert(request).await?;
        Ok(CreatedResponse::new("Trainer added successfully", trainer.id))
    }

    /// `POST /add-trainer`
    pub async fn add(&self, request: CreateTrainerRequest) -> ServiceResult<TrainerAddedResponse> {
        let trainer = self.insert(request).await?;
        Ok(TrainerAddedResponse {
            message: "Trainer added successfully".to_string(),
            trainer_id: trainer.id,
        })
    }

    #[instrument(skip(self, request), fields(mobile = %request.mobile))]
    async fn insert(&self, request: CreateTrainerRequest) -> ServiceResult<Trainer> {
        request.validate()?;
        let new_trainer = NewTrainer::from(request);

        let trainer = self
            .ctx
            .trainer_repo()
            .create(&new_trainer, self.ctx.clock().now())
            .await?;

        info!(trainer_id = %trainer.id, "Trainer created");
        Ok(trainer)
    }

    /// Partially update a trainer; absent fields keep their value
    #[instrument(skip(self, request))]
    pub async fn update(&self, trainer_id: TrainerId, request: UpdateTrainerRequest) -> ServiceResult<()> {
        request.validate()?;
        let changes = TrainerChanges::from(request);

        let mut trainer = self
            .ctx
            .trainer_repo()
            .find_by_id(trainer_id)
            .await?
            .ok_or(DomainError::TrainerNotFound(trainer_id))?;

        if changes == TrainerChanges::default() {
            return Ok(());
        }

        changes.apply(&mut trainer);
        self.ctx.trainer_repo().update(&trainer).await?;

        info!(trainer_id = %trainer_id, "Trainer updated");
        Ok(())
    }

    /// Delete a trainer and their session history
    #[instrument(skip(self))]
    pub async fn delete(&self, trainer_id: TrainerId) -> ServiceResult<()> {
        self.ctx.trainer_repo().delete(trainer_id).await?;
        info!(trainer_id = %trainer_id, "Trainer deleted");
        Ok(())
    }
}
