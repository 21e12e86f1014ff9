//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Row shapes mirror
//! what the gym dashboards read: flat objects, snake_case keys, numeric ids.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use gym_core::{AttendanceStatus, EquipmentId, MemberId, PaymentStatus, TrainerId};

// ============================================================================
// Common Response Types
// ============================================================================

/// `{message}` acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{message, id}` acknowledgement for created rows
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(message: impl Into<String>, id: impl Into<i64>) -> Self {
        Self {
            message: message.into(),
            id: id.into(),
        }
    }
}

// ============================================================================
// Member Responses
// ============================================================================

/// Member row
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: MemberId,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub address: String,
    pub program: String,
    pub membership_type: String,
    pub mobile: String,
    pub email: String,
    pub fitness_goals: Vec<String>,
    pub medical_conditions: Option<String>,
    pub is_paid: bool,
    pub payment_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// `{user}` wrapper used by the client dashboard lookup
#[derive(Debug, Clone, Serialize)]
pub struct UserEnvelope {
    pub user: MemberResponse,
}

/// Member with today's attendance status (`null` before the first sweep)
#[derive(Debug, Clone, Serialize)]
pub struct ClientStatusResponse {
    #[serde(flatten)]
    pub member: MemberResponse,
    pub status: Option<AttendanceStatus>,
}

/// One row of a member's attendance history
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEntryResponse {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

// ============================================================================
// Trainer Responses
// ============================================================================

/// Trainer row
#[derive(Debug, Clone, Serialize)]
pub struct TrainerResponse {
    pub id: TrainerId,
    pub name: String,
    pub age: i32,
    pub city: String,
    pub experience: i32,
    pub mobile: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Trainer with the times of their most recent session
#[derive(Debug, Clone, Serialize)]
pub struct TrainerAttendanceResponse {
    #[serde(flatten)]
    pub trainer: TrainerResponse,
    pub check_in_time: Option<DateTime<Utc>>,
    pub check_out_time: Option<DateTime<Utc>>,
}

/// Result of a check-in/check-out toggle
#[derive(Debug, Clone, Serialize)]
pub struct CheckInOutResponse {
    pub message: &'static str,
    pub check_in_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<DateTime<Utc>>,
}

/// `POST /add-trainer` acknowledgement
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerAddedResponse {
    pub message: String,
    pub trainer_id: TrainerId,
}

// ============================================================================
// Equipment Responses
// ============================================================================

/// Equipment row
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentResponse {
    pub id: EquipmentId,
    pub name: String,
    pub quantity: i32,
    pub vendor: String,
    pub price: f64,
    pub contact: String,
    pub place: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Payment Responses
// ============================================================================

/// Payment recorded acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRecordedResponse {
    pub message: String,
    pub user_id: MemberId,
}

/// Member with projected payment status
#[derive(Debug, Clone, Serialize)]
pub struct PaymentStatusResponse {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub program: String,
    pub payment_date: Option<DateTime<Utc>>,
    pub payment_status: PaymentStatus,
}

/// One payment in the transaction history
#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    pub user_id: MemberId,
    pub name: String,
    pub mobile: String,
    pub amount: f64,
    pub transaction_id: String,
    pub payment_date: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub scheduler: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, scheduler_running: bool) -> Self {
        let all_healthy = database_healthy && scheduler_running;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                scheduler: if scheduler_running { "running" } else { "stopped" }.to_string(),
            },
        }
    }
}
