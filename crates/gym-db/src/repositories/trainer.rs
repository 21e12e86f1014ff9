//! PostgreSQL implementation of TrainerRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use gym_core::{
    DomainError, NewTrainer, RepoResult, Trainer, TrainerId, TrainerRepository,
    TrainerWithSession,
};

use crate::models::{TrainerModel, TrainerWithSessionModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of TrainerRepository
#[derive(Clone)]
pub struct PgTrainerRepository {
    pool: PgPool,
}

impl PgTrainerRepository {
    /// Create a new PgTrainerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrainerRepository for PgTrainerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: TrainerId) -> RepoResult<Option<Trainer>> {
        let result = sqlx::query_as::<_, TrainerModel>(
            r"
            SELECT id, name, age, city, experience, mobile, email, created_at
            FROM trainers
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Trainer::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Trainer>> {
        let rows = sqlx::query_as::<_, TrainerModel>(
            r"
            SELECT id, name, age, city, experience, mobile, email, created_at
            FROM trainers
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Trainer::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_with_latest_session(&self) -> RepoResult<Vec<TrainerWithSession>> {
        let rows = sqlx::query_as::<_, TrainerWithSessionModel>(
            r"
            SELECT t.id, t.name, t.age, t.city, t.experience, t.mobile, t.email, t.created_at,
                   s.id AS session_id, s.check_in_time, s.check_out_time
            FROM trainers t
            LEFT JOIN LATERAL (
                SELECT id, check_in_time, check_out_time
                FROM trainer_attendance
                WHERE trainer_id = t.id
                ORDER BY id DESC
                LIMIT 1
            ) s ON TRUE
            ORDER BY t.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TrainerWithSession::from).collect())
    }

    #[instrument(skip(self, trainer), fields(mobile = %trainer.mobile))]
    async fn create(&self, trainer: &NewTrainer, created_at: DateTime<Utc>) -> RepoResult<Trainer> {
        let row = sqlx::query_as::<_, TrainerModel>(
            r"
            INSERT INTO trainers (name, age, city, experience, mobile, email, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, age, city, experience, mobile, email, created_at
            ",
        )
        .bind(&trainer.name)
        .bind(trainer.age)
        .bind(&trainer.city)
        .bind(trainer.experience)
        .bind(&trainer.mobile)
        .bind(&trainer.email)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::MobileAlreadyRegistered(trainer.mobile.clone())
            })
        })?;

        Ok(row.into())
    }

    #[instrument(skip(self, trainer), fields(trainer_id = %trainer.id))]
    async fn update(&self, trainer: &Trainer) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE trainers
            SET name = $2, age = $3, city = $4, experience = $5, mobile = $6, email = $7
            WHERE id = $1
            ",
        )
        .bind(trainer.id.into_inner())
        .bind(&trainer.name)
        .bind(trainer.age)
        .bind(&trainer.city)
        .bind(trainer.experience)
        .bind(&trainer.mobile)
        .bind(&trainer.email)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::MobileAlreadyRegistered(trainer.mobile.clone())
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TrainerNotFound(trainer.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: TrainerId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM trainers WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TrainerNotFound(id));
        }

        Ok(())
    }
}
