//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CheckInOutRequest, CreateEquipmentRequest, CreateMemberRequest, CreateTrainerRequest,
    MarkPresentRequest, PaymentReminderRequest, RecordPaymentRequest, UpdateEquipmentRequest,
    UpdateMemberRequest, UpdateTrainerRequest,
};

// Re-export commonly used response types
pub use responses::{
    AttendanceEntryResponse, CheckInOutResponse, ClientStatusResponse, CreatedResponse,
    EquipmentResponse, HealthChecks, HealthResponse, MemberResponse, MessageResponse,
    PaymentRecordedResponse, PaymentStatusResponse, ReadinessResponse, TrainerAddedResponse,
    TrainerAttendanceResponse, TrainerResponse, TransactionResponse, UserEnvelope,
};
