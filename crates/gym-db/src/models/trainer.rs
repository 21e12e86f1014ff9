//! Trainer database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for trainers table
#[derive(Debug, Clone, FromRow)]
pub struct TrainerModel {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub city: String,
    pub experience: i32,
    pub mobile: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Trainer left-joined with their latest session
#[derive(Debug, Clone, FromRow)]
pub struct TrainerWithSessionModel {
    #[sqlx(flatten)]
    pub trainer: TrainerModel,
    pub session_id: Option<i64>,
    pub check_in_time: Option<DateTime<Utc>>,
    pub check_out_time: Option<DateTime<Utc>>,
}
