//! PostgreSQL implementation of EquipmentRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use gym_core::{
    DomainError, Equipment, EquipmentId, EquipmentRepository, NewEquipment, RepoResult,
};

use crate::models::EquipmentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of EquipmentRepository
#[derive(Clone)]
pub struct PgEquipmentRepository {
    pool: PgPool,
}

impl PgEquipmentRepository {
    /// Create a new PgEquipmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EquipmentRepository for PgEquipmentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EquipmentId) -> RepoResult<Option<Equipment>> {
        let result = sqlx::query_as::<_, EquipmentModel>(
            r"
            SELECT id, name, quantity, vendor, price::FLOAT8 AS price, contact, place, created_at
            FROM equipment
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Equipment::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, EquipmentModel>(
            r"
            SELECT id, name, quantity, vendor, price::FLOAT8 AS price, contact, place, created_at
            FROM equipment
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Equipment::from).collect())
    }

    #[instrument(skip(self, item), fields(name = %item.name))]
    async fn create(&self, item: &NewEquipment, created_at: DateTime<Utc>) -> RepoResult<Equipment> {
        let row = sqlx::query_as::<_, EquipmentModel>(
            r"
            INSERT INTO equipment (name, quantity, vendor, price, contact, place, created_at)
            VALUES ($1, $2, $3, $4::NUMERIC, $5, $6, $7)
            RETURNING id, name, quantity, vendor, price::FLOAT8 AS price, contact, place, created_at
            ",
        )
        .bind(&item.name)
        .bind(item.quantity)
        .bind(&item.vendor)
        .bind(item.price)
        .bind(&item.contact)
        .bind(&item.place)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.into())
    }

    #[instrument(skip(self, item), fields(equipment_id = %item.id))]
    async fn update(&self, item: &Equipment) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE equipment
            SET name = $2, quantity = $3, vendor = $4, price = $5::NUMERIC, contact = $6, place = $7
            WHERE id = $1
            ",
        )
        .bind(item.id.into_inner())
        .bind(&item.name)
        .bind(item.quantity)
        .bind(&item.vendor)
        .bind(item.price)
        .bind(&item.contact)
        .bind(&item.place)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EquipmentNotFound(item.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EquipmentId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EquipmentNotFound(id));
        }

        Ok(())
    }
}
