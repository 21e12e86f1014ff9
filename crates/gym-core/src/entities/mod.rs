//! Domain entities - core business objects

mod attendance;
mod equipment;
mod member;
mod payment;
mod session;
mod trainer;

pub use attendance::{AttendanceStatus, DailyAttendance, MemberDayStatus};
pub use equipment::{Equipment, EquipmentChanges, NewEquipment};
pub use member::{Member, MemberChanges, NewMember};
pub use payment::{
    expiry_cutoff, ExpirySweepOutcome, MemberPaymentStatus, PaymentCommand, PaymentHistoryEntry,
    PaymentRecord, PaymentStatus, MAX_PAYMENT_AMOUNT, MIN_PAYMENT_AMOUNT,
};
pub use session::{SessionTransition, ToggleAction, TrainerSession};
pub use trainer::{NewTrainer, Trainer, TrainerChanges, TrainerWithSession};
