//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every write that can race with a background
//! sweep is expressed as a single idempotent operation here (upsert,
//! insert-where-not-exists, conditional bulk update) rather than as separate
//! read and write calls.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{
    DailyAttendance, Equipment, ExpirySweepOutcome, Member, MemberDayStatus, MemberPaymentStatus,
    NewEquipment, NewMember, NewTrainer, PaymentCommand, PaymentHistoryEntry, PaymentRecord,
    SessionTransition, Trainer, TrainerSession, TrainerWithSession,
};
use crate::error::DomainError;
use crate::value_objects::{EquipmentId, MemberId, TrainerId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find member by ID
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>>;

    /// Find member by mobile number
    async fn find_by_mobile(&self, mobile: &str) -> RepoResult<Option<Member>>;

    /// List all members ordered by id
    async fn list(&self) -> RepoResult<Vec<Member>>;

    /// Insert a member; fails with `MobileAlreadyRegistered` on a duplicate mobile
    async fn create(&self, member: &NewMember, created_at: DateTime<Utc>) -> RepoResult<Member>;

    /// Update profile fields (payment fields are owned by the payment repository)
    async fn update(&self, member: &Member) -> RepoResult<()>;

    /// Delete a member and everything hanging off it
    async fn delete(&self, id: MemberId) -> RepoResult<()>;
}

// ============================================================================
// Trainer Repository
// ============================================================================

#[async_trait]
pub trait TrainerRepository: Send + Sync {
    /// Find trainer by ID
    async fn find_by_id(&self, id: TrainerId) -> RepoResult<Option<Trainer>>;

    /// List all trainers ordered by id
    async fn list(&self) -> RepoResult<Vec<Trainer>>;

    /// List all trainers with their most recent session
    async fn list_with_latest_session(&self) -> RepoResult<Vec<TrainerWithSession>>;

    /// Insert a trainer; fails with `MobileAlreadyRegistered` on a duplicate mobile
    async fn create(&self, trainer: &NewTrainer, created_at: DateTime<Utc>) -> RepoResult<Trainer>;

    /// Update an existing trainer
    async fn update(&self, trainer: &Trainer) -> RepoResult<()>;

    /// Delete a trainer and their sessions
    async fn delete(&self, id: TrainerId) -> RepoResult<()>;
}

// ============================================================================
// Trainer Session Repository
// ============================================================================

#[async_trait]
pub trait TrainerSessionRepository: Send + Sync {
    /// Most recent session of a trainer, open or closed
    async fn latest_for(&self, trainer_id: TrainerId) -> RepoResult<Option<TrainerSession>>;

    /// Open a session if the latest is closed or missing, otherwise close it
    ///
    /// The read and the write happen atomically; on error nothing changes.
    async fn toggle(&self, trainer_id: TrainerId, at: DateTime<Utc>)
        -> RepoResult<SessionTransition>;
}

// ============================================================================
// Attendance Repository
// ============================================================================

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Upsert `Present` for (member, date)
    async fn mark_present(&self, member_id: MemberId, date: NaiveDate)
        -> RepoResult<DailyAttendance>;

    /// Insert `Absent` for every member without a record on `date`
    ///
    /// Insert-only: an existing record is never touched. Returns rows inserted.
    async fn sweep_absences(&self, date: NaiveDate) -> RepoResult<u64>;

    /// Status of a member on a date
    async fn status_for(
        &self,
        member_id: MemberId,
        date: NaiveDate,
    ) -> RepoResult<Option<DailyAttendance>>;

    /// Attendance history of a member, most recent date first
    async fn history_for(&self, member_id: MemberId) -> RepoResult<Vec<DailyAttendance>>;

    /// Every member with their status on `date`
    async fn roster_for(&self, date: NaiveDate) -> RepoResult<Vec<MemberDayStatus>>;
}

// ============================================================================
// Payment Repository
// ============================================================================

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Upsert the member's payment record as `Paid` at `at` and mark the member paid
    ///
    /// Both writes are applied together.
    async fn record_payment(
        &self,
        command: &PaymentCommand,
        at: DateTime<Utc>,
    ) -> RepoResult<PaymentRecord>;

    /// The member's payment record, if any
    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Option<PaymentRecord>>;

    /// Every member with their projected payment status
    async fn status_report(&self) -> RepoResult<Vec<MemberPaymentStatus>>;

    /// Payment history, newest first
    async fn history(&self) -> RepoResult<Vec<PaymentHistoryEntry>>;

    /// Mark every payment made before `cutoff` as `Due` and its member unpaid
    async fn expire_before(&self, cutoff: DateTime<Utc>) -> RepoResult<ExpirySweepOutcome>;
}

// ============================================================================
// Equipment Repository
// ============================================================================

#[async_trait]
pub trait EquipmentRepository: Send + Sync {
    async fn find_by_id(&self, id: EquipmentId) -> RepoResult<Option<Equipment>>;

    async fn list(&self) -> RepoResult<Vec<Equipment>>;

    async fn create(&self, item: &NewEquipment, created_at: DateTime<Utc>) -> RepoResult<Equipment>;

    async fn update(&self, item: &Equipment) -> RepoResult<()>;

    async fn delete(&self, id: EquipmentId) -> RepoResult<()>;
}
