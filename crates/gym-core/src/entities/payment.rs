//! Payment state machine types
//!
//! A member has at most one payment record. Recording a payment moves it to
//! `Paid` and stamps `payment_date`; the daily expiry sweep is the only writer
//! of `Due`. A member without any record is `Due`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::member::Member;
use crate::error::DomainError;
use crate::value_objects::MemberId;

/// Stored payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Due,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Due => "Due",
        }
    }

    /// Status of a member given their (possibly missing) payment record
    pub fn project(record: Option<PaymentStatus>) -> Self {
        record.unwrap_or(Self::Due)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Paid" => Ok(Self::Paid),
            "Due" => Ok(Self::Due),
            other => Err(format!("unknown payment status: {other}")),
        }
    }
}

/// The single payment record of a member
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub member_id: MemberId,
    pub amount: f64,
    pub transaction_id: String,
    pub status: PaymentStatus,
    pub payment_date: DateTime<Utc>,
}

/// Payments made strictly before the returned instant are overdue
#[inline]
pub fn expiry_cutoff(now: DateTime<Utc>, validity: Duration) -> DateTime<Utc> {
    now - validity
}

/// Smallest positive amount a `NUMERIC(10,2)` column holds
pub const MIN_PAYMENT_AMOUNT: f64 = 0.01;

/// Largest amount a `NUMERIC(10,2)` column holds
pub const MAX_PAYMENT_AMOUNT: f64 = 99_999_999.99;

/// Validated input for recording a payment
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentCommand {
    pub member_id: MemberId,
    pub amount: f64,
    pub transaction_id: String,
}

impl PaymentCommand {
    /// The amount is rounded to cents before the range check, the same
    /// rounding the database applies on insert.
    pub fn new(
        member_id: MemberId,
        amount: f64,
        transaction_id: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if !amount.is_finite() {
            return Err(DomainError::InvalidAmount);
        }
        let amount = (amount * 100.0).round() / 100.0;
        if !(MIN_PAYMENT_AMOUNT..=MAX_PAYMENT_AMOUNT).contains(&amount) {
            return Err(DomainError::InvalidAmount);
        }
        let transaction_id = transaction_id.into().trim().to_string();
        if transaction_id.is_empty() {
            return Err(DomainError::ValidationError(
                "transaction_id is required".to_string(),
            ));
        }
        Ok(Self {
            member_id,
            amount,
            transaction_id,
        })
    }

    /// The record this command produces when applied at `at`
    pub fn into_record(self, at: DateTime<Utc>) -> PaymentRecord {
        PaymentRecord {
            member_id: self.member_id,
            amount: self.amount,
            transaction_id: self.transaction_id,
            status: PaymentStatus::Paid,
            payment_date: at,
        }
    }
}

/// Member projected with their payment status
#[derive(Debug, Clone, PartialEq)]
pub struct MemberPaymentStatus {
    pub member: Member,
    pub status: PaymentStatus,
}

/// One line of the transaction history
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentHistoryEntry {
    pub member_id: MemberId,
    pub name: String,
    pub mobile: String,
    pub amount: f64,
    pub transaction_id: String,
    pub payment_date: DateTime<Utc>,
}

/// Rows touched by one expiry sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpirySweepOutcome {
    pub payments_expired: u64,
    pub members_marked_unpaid: u64,
}
