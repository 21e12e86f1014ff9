//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and orchestrates
//! repository calls for one area of the gym.

pub mod attendance;
pub mod checkin;
pub mod context;
pub mod equipment;
pub mod error;
pub mod locks;
pub mod member;
pub mod payment;
pub mod reminder;
pub mod trainer;

// Re-export all services for convenience
pub use attendance::AttendanceService;
pub use checkin::CheckInService;
pub use context::{ServiceContext, ServiceContextBuilder, ServiceSettings};
pub use equipment::EquipmentService;
pub use error::{ServiceError, ServiceResult};
pub use locks::KeyedLocks;
pub use member::MemberService;
pub use payment::PaymentService;
pub use reminder::ReminderService;
pub use trainer::TrainerService;
