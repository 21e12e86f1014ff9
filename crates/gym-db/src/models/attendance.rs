//! Member attendance database models

use chrono::NaiveDate;
use sqlx::FromRow;

use super::member::MemberModel;

/// Database model for member_attendance table
#[derive(Debug, Clone, FromRow)]
pub struct AttendanceModel {
    pub member_id: i64,
    pub date: NaiveDate,
    pub status: String,
}

/// Member left-joined with one day of attendance
#[derive(Debug, Clone, FromRow)]
pub struct MemberDayStatusModel {
    #[sqlx(flatten)]
    pub member: MemberModel,
    pub status: Option<String>,
}
