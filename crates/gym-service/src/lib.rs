//! # gym-service
//!
//! Application layer containing business logic, DTOs, the background sweep
//! scheduler and the payment reminder dispatchers.

pub mod dto;
pub mod notify;
pub mod scheduler;
pub mod services;

pub use scheduler::{next_daily_run, run_absence_sweep, run_payment_sweep, Scheduler, SweepSchedule};
pub use services::{
    AttendanceService, CheckInService, EquipmentService, MemberService, PaymentService,
    ReminderService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    ServiceSettings, TrainerService,
};
