//! # gym-core
//!
//! Domain layer containing entities, value objects, the clock abstraction and
//! repository traits for the gym backend.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod clock;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use entities::{
    expiry_cutoff, AttendanceStatus, DailyAttendance, Equipment, EquipmentChanges,
    ExpirySweepOutcome, Member, MemberChanges, MemberDayStatus, MemberPaymentStatus, NewEquipment,
    NewMember, NewTrainer, PaymentCommand, PaymentHistoryEntry, PaymentRecord, PaymentStatus,
    SessionTransition, ToggleAction, Trainer, TrainerChanges, TrainerSession, TrainerWithSession,
    MAX_PAYMENT_AMOUNT, MIN_PAYMENT_AMOUNT,
};
pub use error::DomainError;
pub use traits::{
    AttendanceRepository, EquipmentRepository, MemberRepository, OutboundEmail,
    PaymentRepository, ReminderDispatcher, RepoResult, TrainerRepository,
    TrainerSessionRepository,
};
pub use value_objects::{EquipmentId, IdParseError, MemberId, SessionId, TrainerId};
