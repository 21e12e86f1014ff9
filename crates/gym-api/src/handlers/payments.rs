//! Payment handlers
//!
//! Recording payments, the per-member status report, transaction history and
//! payment reminders.

use axum::{extract::State, Json};
use gym_service::dto::{
    MessageResponse, PaymentRecordedResponse, PaymentReminderRequest, PaymentStatusResponse,
    RecordPaymentRequest, TransactionResponse,
};
use gym_service::{PaymentService, ReminderService};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Record (or refresh) a member's payment; the member becomes `Paid`
///
/// POST /api/payment
pub async fn record_payment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RecordPaymentRequest>,
) -> ApiResult<Json<PaymentRecordedResponse>> {
    let service = PaymentService::new(state.service_context());
    let response = service.record_payment(request).await?;
    Ok(Json(response))
}

/// Every member with `Paid` or `Due`
///
/// GET /api/payment-status
pub async fn payment_status(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PaymentStatusResponse>>> {
    let service = PaymentService::new(state.service_context());
    let response = service.status_report().await?;
    Ok(Json(response))
}

/// Payment history, newest first
///
/// GET /transaction
pub async fn transactions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TransactionResponse>>> {
    let service = PaymentService::new(state.service_context());
    let response = service.history().await?;
    Ok(Json(response))
}

/// Send a payment reminder email; a relay failure is a 500
///
/// POST /api/send-payment-reminder
pub async fn send_payment_reminder(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PaymentReminderRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ReminderService::new(state.service_context());
    let response = service.send_payment_reminder(request).await?;
    Ok(Json(response))
}
