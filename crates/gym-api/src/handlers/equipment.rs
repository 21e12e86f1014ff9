//! Equipment inventory handlers

use axum::{extract::State, Json};
use gym_core::EquipmentId;
use gym_service::dto::{
    CreateEquipmentRequest, CreatedResponse, EquipmentResponse, MessageResponse,
    UpdateEquipmentRequest,
};
use gym_service::EquipmentService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /equip
pub async fn list_equipment(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<EquipmentResponse>>> {
    let service = EquipmentService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// POST /equip
pub async fn create_equipment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateEquipmentRequest>,
) -> ApiResult<Created<CreatedResponse>> {
    let service = EquipmentService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(response))
}

/// PATCH /equip/{id}
pub async fn update_equipment(
    State(state): State<AppState>,
    IdPath(equipment_id): IdPath<EquipmentId>,
    ValidatedJson(request): ValidatedJson<UpdateEquipmentRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = EquipmentService::new(state.service_context());
    service.update(equipment_id, request).await?;
    Ok(Json(MessageResponse::new("Equipment updated successfully")))
}

/// DELETE /equip/{id}
pub async fn delete_equipment(
    State(state): State<AppState>,
    IdPath(equipment_id): IdPath<EquipmentId>,
) -> ApiResult<Json<MessageResponse>> {
    let service = EquipmentService::new(state.service_context());
    service.delete(equipment_id).await?;
    Ok(Json(MessageResponse::new("Equipment deleted successfully")))
}
