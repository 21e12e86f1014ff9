//! Equipment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for equipment table (`price` selected as FLOAT8)
#[derive(Debug, Clone, FromRow)]
pub struct EquipmentModel {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub vendor: String,
    pub price: f64,
    pub contact: String,
    pub place: String,
    pub created_at: DateTime<Utc>,
}
