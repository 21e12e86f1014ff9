//! Trainer session database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for trainer_attendance table
#[derive(Debug, Clone, FromRow)]
pub struct SessionModel {
    pub id: i64,
    pub trainer_id: i64,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
}
