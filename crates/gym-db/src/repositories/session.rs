//! PostgreSQL implementation of TrainerSessionRepository
//!
//! The toggle reads the latest session and writes the transition inside one
//! transaction. The trainer row is locked first so concurrent toggles for the
//! same trainer queue up even when no session row exists yet; the partial
//! unique index on open sessions backs this up.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};

use gym_core::{
    DomainError, RepoResult, SessionTransition, ToggleAction, TrainerId, TrainerSession,
    TrainerSessionRepository,
};

use crate::models::SessionModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of TrainerSessionRepository
#[derive(Clone)]
pub struct PgTrainerSessionRepository {
    pool: PgPool,
}

impl PgTrainerSessionRepository {
    /// Create a new PgTrainerSessionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrainerSessionRepository for PgTrainerSessionRepository {
    #[instrument(skip(self))]
    async fn latest_for(&self, trainer_id: TrainerId) -> RepoResult<Option<TrainerSession>> {
        let result = sqlx::query_as::<_, SessionModel>(
            r"
            SELECT id, trainer_id, check_in_time, check_out_time
            FROM trainer_attendance
            WHERE trainer_id = $1
            ORDER BY id DESC
            LIMIT 1
            ",
        )
        .bind(trainer_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(TrainerSession::from))
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        trainer_id: TrainerId,
        at: DateTime<Utc>,
    ) -> RepoResult<SessionTransition> {
        // Dropping the transaction on an early return rolls it back
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let trainer = sqlx::query_scalar::<_, i64>(
            r"
            SELECT id FROM trainers WHERE id = $1 FOR UPDATE
            ",
        )
        .bind(trainer_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if trainer.is_none() {
            return Err(DomainError::TrainerNotFound(trainer_id));
        }

        let latest = sqlx::query_as::<_, SessionModel>(
            r"
            SELECT id, trainer_id, check_in_time, check_out_time
            FROM trainer_attendance
            WHERE trainer_id = $1
            ORDER BY id DESC
            LIMIT 1
            FOR UPDATE
            ",
        )
        .bind(trainer_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map(TrainerSession::from);

        let transition = match (ToggleAction::decide(latest.as_ref()), latest) {
            (ToggleAction::Close(session_id), Some(mut session)) => {
                session.close(at)?;

                let result = sqlx::query(
                    r"
                    UPDATE trainer_attendance
                    SET check_out_time = $2
                    WHERE id = $1 AND check_out_time IS NULL
                    ",
                )
                .bind(session_id.into_inner())
                .bind(at)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

                if result.rows_affected() == 0 {
                    return Err(DomainError::SessionAlreadyClosed(session_id));
                }

                SessionTransition::CheckedOut(session)
            }
            _ => {
                let row = sqlx::query_as::<_, SessionModel>(
                    r"
                    INSERT INTO trainer_attendance (trainer_id, check_in_time)
                    VALUES ($1, $2)
                    RETURNING id, trainer_id, check_in_time, check_out_time
                    ",
                )
                .bind(trainer_id.into_inner())
                .bind(at)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    map_unique_violation(e, || DomainError::SessionAlreadyOpen(trainer_id))
                })?;

                SessionTransition::CheckedIn(row.into())
            }
        };

        tx.commit().await.map_err(map_db_error)?;

        debug!(
            session_id = %transition.session().id,
            transition = transition.message(),
            "Trainer session toggled"
        );

        Ok(transition)
    }
}
