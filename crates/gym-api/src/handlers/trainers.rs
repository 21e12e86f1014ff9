//! Trainer handlers
//!
//! Check-in/check-out toggling plus trainer administration.

use axum::{extract::State, Json};
use gym_core::TrainerId;
use gym_service::dto::{
    CheckInOutRequest, CheckInOutResponse, CreateTrainerRequest, CreatedResponse, MessageResponse,
    TrainerAddedResponse, TrainerAttendanceResponse, TrainerResponse, UpdateTrainerRequest,
};
use gym_service::{CheckInService, TrainerService};

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Trainers with their most recent session times
///
/// GET /trainers
pub async fn list_with_latest_session(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TrainerAttendanceResponse>>> {
    let service = CheckInService::new(state.service_context());
    let response = service.list_with_latest().await?;
    Ok(Json(response))
}

/// Toggle a trainer between checked in and checked out
///
/// POST /check-in-out
pub async fn check_in_out(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CheckInOutRequest>,
) -> ApiResult<Json<CheckInOutResponse>> {
    let service = CheckInService::new(state.service_context());
    let response = service.check_in_out(request).await?;
    Ok(Json(response))
}

/// GET /tusers
pub async fn list_trainers(State(state): State<AppState>) -> ApiResult<Json<Vec<TrainerResponse>>> {
    let service = TrainerService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// POST /tusers
pub async fn create_trainer(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTrainerRequest>,
) -> ApiResult<Created<CreatedResponse>> {
    let service = TrainerService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(response))
}

/// Trainer onboarding form
///
/// POST /add-trainer
pub async fn add_trainer(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTrainerRequest>,
) -> ApiResult<Created<TrainerAddedResponse>> {
    let service = TrainerService::new(state.service_context());
    let response = service.add(request).await?;
    Ok(Created(response))
}

/// PATCH /tusers/{id}
pub async fn update_trainer(
    State(state): State<AppState>,
    IdPath(trainer_id): IdPath<TrainerId>,
    ValidatedJson(request): ValidatedJson<UpdateTrainerRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = TrainerService::new(state.service_context());
    service.update(trainer_id, request).await?;
    Ok(Json(MessageResponse::new("Trainer updated successfully")))
}

/// DELETE /tusers/{id}
pub async fn delete_trainer(
    State(state): State<AppState>,
    IdPath(trainer_id): IdPath<TrainerId>,
) -> ApiResult<Json<MessageResponse>> {
    let service = TrainerService::new(state.service_context());
    service.delete(trainer_id).await?;
    Ok(Json(MessageResponse::new("Trainer deleted successfully")))
}
