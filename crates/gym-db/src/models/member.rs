//! Member database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub address: String,
    pub program: String,
    pub membership_type: String,
    pub mobile: String,
    pub email: String,
    pub fitness_goals: Json<Vec<String>>,
    pub medical_conditions: Option<String>,
    pub is_paid: bool,
    pub payment_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
