//! Service context - dependency container for services
//!
//! Holds all repositories, the reminder dispatcher, the clock and the
//! per-trainer lock table shared by services and the sweep scheduler.

use std::sync::Arc;

use chrono::Duration;
use gym_common::{AppConfig, MailConfig, SchedulerConfig};
use gym_core::traits::{
    AttendanceRepository, EquipmentRepository, MemberRepository, PaymentRepository,
    ReminderDispatcher, TrainerRepository, TrainerSessionRepository,
};
use gym_core::{SharedClock, SystemClock, TrainerId};
use gym_db::{
    PgAttendanceRepository, PgEquipmentRepository, PgMemberRepository, PgPaymentRepository,
    PgPool, PgTrainerRepository, PgTrainerSessionRepository,
};

use crate::notify::LogDispatcher;

use super::error::{ServiceError, ServiceResult};
use super::locks::KeyedLocks;

/// Tunables the services read at request time
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// How long a payment keeps a member `Paid`
    pub payment_validity: Duration,
    /// Link rendered into reminder emails
    pub payment_link: String,
    /// Sender address for reminder emails
    pub mail_from: String,
}

impl ServiceSettings {
    pub fn from_config(scheduler: &SchedulerConfig, mail: &MailConfig) -> Self {
        Self {
            payment_validity: scheduler.payment_validity(),
            payment_link: mail.payment_link.clone(),
            mail_from: mail.from.clone(),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self::from_config(&SchedulerConfig::default(), &MailConfig::default())
    }
}

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services
/// and to the background scheduler. It provides access to:
/// - Repositories for members, trainers, sessions, attendance, payments and equipment
/// - The reminder dispatcher
/// - The clock every timestamp is taken from
/// - The per-trainer lock table that serializes check-in toggles
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    member_repo: Arc<dyn MemberRepository>,
    trainer_repo: Arc<dyn TrainerRepository>,
    session_repo: Arc<dyn TrainerSessionRepository>,
    attendance_repo: Arc<dyn AttendanceRepository>,
    payment_repo: Arc<dyn PaymentRepository>,
    equipment_repo: Arc<dyn EquipmentRepository>,

    // Collaborators
    dispatcher: Arc<dyn ReminderDispatcher>,
    clock: SharedClock,
    trainer_locks: Arc<KeyedLocks<TrainerId>>,

    settings: ServiceSettings,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        trainer_repo: Arc<dyn TrainerRepository>,
        session_repo: Arc<dyn TrainerSessionRepository>,
        attendance_repo: Arc<dyn AttendanceRepository>,
        payment_repo: Arc<dyn PaymentRepository>,
        equipment_repo: Arc<dyn EquipmentRepository>,
        dispatcher: Arc<dyn ReminderDispatcher>,
        clock: SharedClock,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            member_repo,
            trainer_repo,
            session_repo,
            attendance_repo,
            payment_repo,
            equipment_repo,
            dispatcher,
            clock,
            trainer_locks: Arc::new(KeyedLocks::new()),
            settings,
        }
    }

    // === Repositories ===

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the trainer repository
    pub fn trainer_repo(&self) -> &dyn TrainerRepository {
        self.trainer_repo.as_ref()
    }

    /// Get the trainer session repository
    pub fn session_repo(&self) -> &dyn TrainerSessionRepository {
        self.session_repo.as_ref()
    }

    /// Get the attendance repository
    pub fn attendance_repo(&self) -> &dyn AttendanceRepository {
        self.attendance_repo.as_ref()
    }

    /// Get the payment repository
    pub fn payment_repo(&self) -> &dyn PaymentRepository {
        self.payment_repo.as_ref()
    }

    /// Get the equipment repository
    pub fn equipment_repo(&self) -> &dyn EquipmentRepository {
        self.equipment_repo.as_ref()
    }

    // === Collaborators ===

    /// Get the reminder dispatcher
    pub fn dispatcher(&self) -> &dyn ReminderDispatcher {
        self.dispatcher.as_ref()
    }

    /// Get the clock
    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    /// Get the per-trainer lock table
    pub fn trainer_locks(&self) -> &KeyedLocks<TrainerId> {
        self.trainer_locks.as_ref()
    }

    /// Get the service settings
    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("dispatcher", &"dyn ReminderDispatcher")
            .field("clock", &self.clock)
            .field("trainer_locks", &self.trainer_locks.len())
            .field("settings", &self.settings)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// Repositories are required. The dispatcher defaults to logging only, the
/// clock to the system clock and the settings to their configured defaults.
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    trainer_repo: Option<Arc<dyn TrainerRepository>>,
    session_repo: Option<Arc<dyn TrainerSessionRepository>>,
    attendance_repo: Option<Arc<dyn AttendanceRepository>>,
    payment_repo: Option<Arc<dyn PaymentRepository>>,
    equipment_repo: Option<Arc<dyn EquipmentRepository>>,
    dispatcher: Option<Arc<dyn ReminderDispatcher>>,
    clock: Option<SharedClock>,
    settings: Option<ServiceSettings>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            member_repo: None,
            trainer_repo: None,
            session_repo: None,
            attendance_repo: None,
            payment_repo: None,
            equipment_repo: None,
            dispatcher: None,
            clock: None,
            settings: None,
        }
    }

    /// Builder with every repository backed by PostgreSQL
    pub fn postgres(pool: PgPool) -> Self {
        Self::new()
            .member_repo(Arc::new(PgMemberRepository::new(pool.clone())))
            .trainer_repo(Arc::new(PgTrainerRepository::new(pool.clone())))
            .session_repo(Arc::new(PgTrainerSessionRepository::new(pool.clone())))
            .attendance_repo(Arc::new(PgAttendanceRepository::new(pool.clone())))
            .payment_repo(Arc::new(PgPaymentRepository::new(pool.clone())))
            .equipment_repo(Arc::new(PgEquipmentRepository::new(pool)))
    }

    /// PostgreSQL repositories plus dispatcher and settings taken from `config`
    pub fn from_config(pool: PgPool, config: &AppConfig) -> Self {
        Self::postgres(pool)
            .dispatcher(crate::notify::dispatcher_from_config(&config.mail))
            .settings(ServiceSettings::from_config(&config.scheduler, &config.mail))
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn trainer_repo(mut self, repo: Arc<dyn TrainerRepository>) -> Self {
        self.trainer_repo = Some(repo);
        self
    }

    pub fn session_repo(mut self, repo: Arc<dyn TrainerSessionRepository>) -> Self {
        self.session_repo = Some(repo);
        self
    }

    pub fn attendance_repo(mut self, repo: Arc<dyn AttendanceRepository>) -> Self {
        self.attendance_repo = Some(repo);
        self
    }

    pub fn payment_repo(mut self, repo: Arc<dyn PaymentRepository>) -> Self {
        self.payment_repo = Some(repo);
        self
    }

    pub fn equipment_repo(mut self, repo: Arc<dyn EquipmentRepository>) -> Self {
        self.equipment_repo = Some(repo);
        self
    }

    pub fn dispatcher(mut self, dispatcher: Arc<dyn ReminderDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    pub fn clock(mut self, clock: SharedClock) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn settings(mut self, settings: ServiceSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.trainer_repo
                .ok_or_else(|| ServiceError::validation("trainer_repo is required"))?,
            self.session_repo
                .ok_or_else(|| ServiceError::validation("session_repo is required"))?,
            self.attendance_repo
                .ok_or_else(|| ServiceError::validation("attendance_repo is required"))?,
            self.payment_repo
                .ok_or_else(|| ServiceError::validation("payment_repo is required"))?,
            self.equipment_repo
                .ok_or_else(|| ServiceError::validation("equipment_repo is required"))?,
            self.dispatcher
                .unwrap_or_else(|| Arc::new(LogDispatcher::default())),
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.settings.unwrap_or_default(),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_repositories() {
        let err = ServiceContextBuilder::new().build().unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("member_repo is required"));
    }

    #[test]
    fn test_default_settings() {
        let settings = ServiceSettings::default();
        assert_eq!(settings.payment_validity, Duration::days(30));
        assert!(settings.payment_link.starts_with("http"));
    }
}
