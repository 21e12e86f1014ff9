//! Ports - traits implemented by the infrastructure layer

mod notifier;
mod repositories;

pub use notifier::{OutboundEmail, ReminderDispatcher};
pub use repositories::{
    AttendanceRepository, EquipmentRepository, MemberRepository, PaymentRepository, RepoResult,
    TrainerRepository, TrainerSessionRepository,
};
