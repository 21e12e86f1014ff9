//! Payment database models
//!
//! `amount` is NUMERIC in the schema; queries cast it to FLOAT8.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::member::MemberModel;

/// Database model for payments table
#[derive(Debug, Clone, FromRow)]
pub struct PaymentModel {
    pub member_id: i64,
    pub amount: f64,
    pub transaction_id: String,
    pub status: String,
    pub payment_date: DateTime<Utc>,
}

/// Member left-joined with their payment status
#[derive(Debug, Clone, FromRow)]
pub struct MemberPaymentStatusModel {
    #[sqlx(flatten)]
    pub member: MemberModel,
    pub payment_status: Option<String>,
}

/// Payment joined with member contact details
#[derive(Debug, Clone, FromRow)]
pub struct PaymentHistoryModel {
    pub member_id: i64,
    pub name: String,
    pub mobile: String,
    pub amount: f64,
    pub transaction_id: String,
    pub payment_date: DateTime<Utc>,
}
