//! Database models - SQLx-compatible structs for PostgreSQL tables

mod attendance;
mod equipment;
mod member;
mod payment;
mod session;
mod trainer;

pub use attendance::{AttendanceModel, MemberDayStatusModel};
pub use equipment::EquipmentModel;
pub use member::MemberModel;
pub use payment::{MemberPaymentStatusModel, PaymentHistoryModel, PaymentModel};
pub use session::SessionModel;
pub use trainer::{TrainerModel, TrainerWithSessionModel};
