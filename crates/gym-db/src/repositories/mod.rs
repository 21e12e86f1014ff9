//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in gym-core.
//! Each repository handles database operations for a specific domain entity.

mod attendance;
mod equipment;
mod error;
mod member;
mod payment;
mod session;
mod trainer;

pub use attendance::PgAttendanceRepository;
pub use equipment::PgEquipmentRepository;
pub use member::PgMemberRepository;
pub use payment::PgPaymentRepository;
pub use session::PgTrainerSessionRepository;
pub use trainer::PgTrainerRepository;
