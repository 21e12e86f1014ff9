//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{EquipmentId, MemberId, SessionId, TrainerId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    #[error("No member registered with mobile {0}")]
    MobileNotFound(String),

    #[error("Trainer not found: {0}")]
    TrainerNotFound(TrainerId),

    #[error("Equipment not found: {0}")]
    EquipmentNotFound(EquipmentId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Payment amount must be between 0.01 and 99999999.99")]
    InvalidAmount,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Mobile number already registered: {0}")]
    MobileAlreadyRegistered(String),

    #[error("Trainer {0} already has an open session")]
    SessionAlreadyOpen(TrainerId),

    #[error("Session {0} is already closed")]
    SessionAlreadyClosed(SessionId),

    #[error("Check-out time must be after check-in time")]
    CheckOutBeforeCheckIn,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Reminder dispatch failed: {0}")]
    DispatchError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MemberNotFound(_) | Self::MobileNotFound(_) => "UNKNOWN_MEMBER",
            Self::TrainerNotFound(_) => "UNKNOWN_TRAINER",
            Self::EquipmentNotFound(_) => "UNKNOWN_EQUIPMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidAmount => "INVALID_AMOUNT",

            // Conflict
            Self::MobileAlreadyRegistered(_) => "MOBILE_ALREADY_REGISTERED",
            Self::SessionAlreadyOpen(_) => "SESSION_ALREADY_OPEN",
            Self::SessionAlreadyClosed(_) => "SESSION_ALREADY_CLOSED",
            Self::CheckOutBeforeCheckIn => "CHECK_OUT_BEFORE_CHECK_IN",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::DispatchError(_) => "DISPATCH_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MemberNotFound(_)
                | Self::MobileNotFound(_)
                | Self::TrainerNotFound(_)
                | Self::EquipmentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidAmount)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::MobileAlreadyRegistered(_)
                | Self::SessionAlreadyOpen(_)
                | Self::SessionAlreadyClosed(_)
                | Self::CheckOutBeforeCheckIn
        )
    }
}
