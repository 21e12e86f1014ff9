//! Member handlers
//!
//! Member administration, self registration and lookup by mobile number.

use axum::{
    extract::{Path, State},
    Json,
};
use gym_core::MemberId;
use gym_service::dto::{
    CreateMemberRequest, CreatedResponse, MemberResponse, MessageResponse, UpdateMemberRequest,
    UserEnvelope,
};
use gym_service::MemberService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /users
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Json<Vec<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// POST /users
pub async fn create_member(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMemberRequest>,
) -> ApiResult<Created<CreatedResponse>> {
    let service = MemberService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(response))
}

/// Self registration with fitness goals and medical conditions
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMemberRequest>,
) -> ApiResult<Created<MessageResponse>> {
    let service = MemberService::new(state.service_context());
    service.register(request).await?;
    Ok(Created(MessageResponse::new("User registered successfully!")))
}

/// PATCH /users/{id}
pub async fn update_member(
    State(state): State<AppState>,
    IdPath(member_id): IdPath<MemberId>,
    ValidatedJson(request): ValidatedJson<UpdateMemberRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = MemberService::new(state.service_context());
    service.update(member_id, request).await?;
    Ok(Json(MessageResponse::new("User updated successfully")))
}

/// DELETE /users/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    IdPath(member_id): IdPath<MemberId>,
) -> ApiResult<Json<MessageResponse>> {
    let service = MemberService::new(state.service_context());
    service.delete(member_id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// Member profile by mobile number
///
/// GET /user/{mobile} and GET /user/details/mobile/{mobile}
pub async fn get_by_mobile(
    State(state): State<AppState>,
    Path(mobile): Path<String>,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let response = service.get_by_mobile(&mobile).await?;
    Ok(Json(response))
}

/// Member profile by mobile number, wrapped as `{user}`
///
/// GET /api/getUserByMobile/{mobile}
pub async fn get_user_envelope(
    State(state): State<AppState>,
    Path(mobile): Path<String>,
) -> ApiResult<Json<UserEnvelope>> {
    let service = MemberService::new(state.service_context());
    let user = service.get_by_mobile(&mobile).await?;
    Ok(Json(UserEnvelope { user }))
}
