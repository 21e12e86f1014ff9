//! PostgreSQL implementation of AttendanceRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use gym_core::{
    AttendanceRepository, DailyAttendance, DomainError, MemberDayStatus, MemberId, RepoResult,
};

use crate::models::{AttendanceModel, MemberDayStatusModel};

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of AttendanceRepository
#[derive(Clone)]
pub struct PgAttendanceRepository {
    pool: PgPool,
}

impl PgAttendanceRepository {
    /// Create a new PgAttendanceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    #[instrument(skip(self))]
    async fn mark_present(
        &self,
        member_id: MemberId,
        date: NaiveDate,
    ) -> RepoResult<DailyAttendance> {
        let row = sqlx::query_as::<_, AttendanceModel>(
            r"
            INSERT INTO member_attendance (member_id, date, status)
            VALUES ($1, $2, 'Present')
            ON CONFLICT (member_id, date) DO UPDATE SET status = 'Present'
            RETURNING member_id, date, status
            ",
        )
        .bind(member_id.into_inner())
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::MemberNotFound(member_id)))?;

        row.try_into()
    }

    #[instrument(skip(self))]
    async fn sweep_absences(&self, date: NaiveDate) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            INSERT INTO member_attendance (member_id, date, status)
            SELECT m.id, $1::DATE, 'Absent'
            FROM members m
            WHERE NOT EXISTS (
                SELECT 1 FROM member_attendance a
                WHERE a.member_id = m.id AND a.date = $1::DATE
            )
            ON CONFLICT (member_id, date) DO NOTHING
            ",
        )
        .bind(date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn status_for(
        &self,
        member_id: MemberId,
        date: NaiveDate,
    ) -> RepoResult<Option<DailyAttendance>> {
        let row = sqlx::query_as::<_, AttendanceModel>(
            r"
            SELECT member_id, date, status
            FROM member_attendance
            WHERE member_id = $1 AND date = $2
            ",
        )
        .bind(member_id.into_inner())
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(DailyAttendance::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn history_for(&self, member_id: MemberId) -> RepoResult<Vec<DailyAttendance>> {
        let rows = sqlx::query_as::<_, AttendanceModel>(
            r"
            SELECT member_id, date, status
            FROM member_attendance
            WHERE member_id = $1
            ORDER BY date DESC
            ",
        )
        .bind(member_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(DailyAttendance::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn roster_for(&self, date: NaiveDate) -> RepoResult<Vec<MemberDayStatus>> {
        let rows = sqlx::query_as::<_, MemberDayStatusModel>(
            r"
            SELECT m.id, m.name, m.age, m.gender, m.address, m.program, m.membership_type,
                   m.mobile, m.email, m.fitness_goals, m.medical_conditions, m.is_paid,
                   m.payment_date, m.created_at, a.status
            FROM members m
            LEFT JOIN member_attendance a ON a.member_id = m.id AND a.date = $1
            ORDER BY m.id
            ",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(MemberDayStatus::try_from).collect()
    }
}
