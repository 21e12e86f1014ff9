//! Member attendance handlers
//!
//! Today's roster, marking members present and per-member history.

use axum::{
    extract::{Path, State},
    Json,
};
use gym_service::dto::{
    AttendanceEntryResponse, ClientStatusResponse, MarkPresentRequest, MessageResponse,
};
use gym_service::AttendanceService;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Every member with today's attendance status (`null` until swept or marked)
///
/// GET /clients
pub async fn list_clients(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ClientStatusResponse>>> {
    let service = AttendanceService::new(state.service_context());
    let response = service.roster_today().await?;
    Ok(Json(response))
}

/// Mark a member present for today
///
/// POST /mark-present
pub async fn mark_present(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<MarkPresentRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AttendanceService::new(state.service_context());
    let response = service.mark_present(request).await?;
    Ok(Json(response))
}

/// Attendance history for the member registered with `mobile`, newest first
///
/// An unknown mobile is 404 `UNKNOWN_MEMBER`, not an empty list. A known
/// member with no records yet gets `[]`.
///
/// GET /attendance/mobile/{mobile}
pub async fn history_by_mobile(
    State(state): State<AppState>,
    Path(mobile): Path<String>,
) -> ApiResult<Json<Vec<AttendanceEntryResponse>>> {
    let service = AttendanceService::new(state.service_context());
    let response = service.history_by_mobile(&mobile).await?;
    Ok(Json(response))
}
