//! PostgreSQL implementation of PaymentRepository
//!
//! `payments` holds one row per member; recording a payment is an upsert on
//! `member_id`. The expiry sweep is a pair of conditional bulk updates, so it
//! can run at any time and any number of times.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use gym_core::{
    DomainError, ExpirySweepOutcome, MemberId, MemberPaymentStatus, PaymentCommand,
    PaymentHistoryEntry, PaymentRecord, PaymentRepository, RepoResult,
};

use crate::models::{MemberPaymentStatusModel, PaymentHistoryModel, PaymentModel};

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of PaymentRepository
#[derive(Clone)]
pub struct PgPaymentRepository {
    pool: PgPool,
}

impl PgPaymentRepository {
    /// Create a new PgPaymentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PgPaymentRepository {
    #[instrument(skip(self, command), fields(member_id = %command.member_id))]
    async fn record_payment(
        &self,
        command: &PaymentCommand,
        at: DateTime<Utc>,
    ) -> RepoResult<PaymentRecord> {
        let member_id = command.member_id;
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let row = sqlx::query_as::<_, PaymentModel>(
            r"
            INSERT INTO payments (member_id, amount, transaction_id, status, payment_date)
            VALUES ($1, $2::NUMERIC, $3, 'Paid', $4)
            ON CONFLICT (member_id) DO UPDATE
            SET amount = EXCLUDED.amount,
                transaction_id = EXCLUDED.transaction_id,
                status = 'Paid',
                payment_date = EXCLUDED.payment_date
            RETURNING member_id, amount::FLOAT8 AS amount, transaction_id, status, payment_date
            ",
        )
        .bind(member_id.into_inner())
        .bind(command.amount)
        .bind(&command.transaction_id)
        .bind(at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::MemberNotFound(member_id)))?;

        sqlx::query(
            r"
            UPDATE members
            SET is_paid = TRUE, payment_date = $2
            WHERE id = $1
            ",
        )
        .bind(member_id.into_inner())
        .bind(at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        row.try_into()
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Option<PaymentRecord>> {
        let row = sqlx::query_as::<_, PaymentModel>(
            r"
            SELECT member_id, amount::FLOAT8 AS amount, transaction_id, status, payment_date
            FROM payments
            WHERE member_id = $1
            ",
        )
        .bind(member_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(PaymentRecord::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn status_report(&self) -> RepoResult<Vec<MemberPaymentStatus>> {
        let rows = sqlx::query_as::<_, MemberPaymentStatusModel>(
            r"
            SELECT m.id, m.name, m.age, m.gender, m.address, m.program, m.membership_type,
                   m.mobile, m.email, m.fitness_goals, m.medical_conditions, m.is_paid,
                   m.payment_date, m.created_at, p.status AS payment_status
            FROM members m
            LEFT JOIN payments p ON p.member_id = m.id
            ORDER BY m.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(MemberPaymentStatus::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn history(&self) -> RepoResult<Vec<PaymentHistoryEntry>> {
        let rows = sqlx::query_as::<_, PaymentHistoryModel>(
            r"
            SELECT p.member_id, m.name, m.mobile, p.amount::FLOAT8 AS amount,
                   p.transaction_id, p.payment_date
            FROM payments p
            JOIN members m ON m.id = p.member_id
            ORDER BY p.payment_date DESC, p.member_id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(PaymentHistoryEntry::from).collect())
    }

    #[instrument(skip(self))]
    async fn expire_before(&self, cutoff: DateTime<Utc>) -> RepoResult<ExpirySweepOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let payments = sqlx::query(
            r"
            UPDATE payments
            SET status = 'Due'
            WHERE status <> 'Due' AND payment_date < $1
            ",
        )
        .bind(cutoff)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let members = sqlx::query(
            r"
            UPDATE members
            SET is_paid = FALSE
            WHERE is_paid AND payment_date < $1
            ",
        )
        .bind(cutoff)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(ExpirySweepOutcome {
            payments_expired: payments.rows_affected(),
            members_marked_unpaid: members.rows_affected(),
        })
    }
}
