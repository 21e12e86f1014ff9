//! In-memory repositories and test doubles for service tests

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;

use gym_core::{
    AttendanceRepository, AttendanceStatus, Clock, DailyAttendance, DomainError, Equipment,
    EquipmentId, EquipmentRepository, ExpirySweepOutcome, ManualClock, Member, MemberDayStatus,
    MemberId, MemberPaymentStatus, MemberRepository, NewEquipment, NewMember, NewTrainer,
    OutboundEmail, PaymentCommand, PaymentHistoryEntry, PaymentRecord, PaymentRepository,
    PaymentStatus, ReminderDispatcher, RepoResult, SessionId, SessionTransition, ToggleAction,
    Trainer, TrainerId, TrainerRepository, TrainerSession, TrainerSessionRepository,
    TrainerWithSession,
};
use gym_service::{ServiceContext, ServiceContextBuilder, ServiceSettings};

#[derive(Default)]
struct State {
    next_id: i64,
    members: BTreeMap<i64, Member>,
    trainers: BTreeMap<i64, Trainer>,
    sessions: Vec<TrainerSession>,
    attendance: HashMap<(i64, NaiveDate), AttendanceStatus>,
    payments: HashMap<i64, PaymentRecord>,
    equipment: BTreeMap<i64, Equipment>,
    absence_sweeps: usize,
    expiry_sweeps: usize,
    failing_absence_sweeps: usize,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// One store implementing every repository port
#[derive(Default)]
pub struct InMemoryGym {
    state: Mutex<State>,
}

impl InMemoryGym {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn attendance_count(&self) -> usize {
        self.state.lock().attendance.len()
    }

    pub fn sessions_of(&self, trainer_id: TrainerId) -> Vec<TrainerSession> {
        self.state
            .lock()
            .sessions
            .iter()
            .filter(|s| s.trainer_id == trainer_id)
            .cloned()
            .collect()
    }

    /// Make the next `n` absence sweeps fail with a storage error
    pub fn fail_next_absence_sweeps(&self, n: usize) {
        self.state.lock().failing_absence_sweeps = n;
    }

    /// Absence sweeps attempted, failed ones included
    pub fn absence_sweep_runs(&self) -> usize {
        self.state.lock().absence_sweeps
    }

    pub fn expiry_sweep_runs(&self) -> usize {
        self.state.lock().expiry_sweeps
    }

    pub fn payment_count(&self) -> usize {
        self.state.lock().payments.len()
    }

    /// Backdate a member's payment, as if it had been recorded at `at`
    pub fn backdate_payment(&self, member_id: MemberId, at: DateTime<Utc>) {
        let mut s = self.state.lock();
        if let Some(record) = s.payments.get_mut(&member_id.into_inner()) {
            record.payment_date = at;
        }
        if let Some(member) = s.members.get_mut(&member_id.into_inner()) {
            member.payment_date = Some(at);
        }
    }
}

#[async_trait]
impl MemberRepository for InMemoryGym {
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        Ok(self.state.lock().members.get(&id.into_inner()).cloned())
    }

    async fn find_by_mobile(&self, mobile: &str) -> RepoResult<Option<Member>> {
        Ok(self
            .state
            .lock()
            .members
            .values()
            .find(|m| m.mobile == mobile)
            .cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Member>> {
        Ok(self.state.lock().members.values().cloned().collect())
    }

    async fn create(&self, member: &NewMember, created_at: DateTime<Utc>) -> RepoResult<Member> {
        let mut s = self.state.lock();
        if s.members.values().any(|m| m.mobile == member.mobile) {
            return Err(DomainError::MobileAlreadyRegistered(member.mobile.clone()));
        }
        let id = s.next_id();
        let created = member.clone().into_member(MemberId::new(id), created_at);
        s.members.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, member: &Member) -> RepoResult<()> {
        let mut s = self.state.lock();
        let current = s
            .members
            .get_mut(&member.id.into_inner())
            .ok_or(DomainError::MemberNotFound(member.id))?;
        let (is_paid, payment_date) = (current.is_paid, current.payment_date);
        *current = member.clone();
        current.is_paid = is_paid;
        current.payment_date = payment_date;
        Ok(())
    }

    async fn delete(&self, id: MemberId) -> RepoResult<()> {
        let mut s = self.state.lock();
        let raw = id.into_inner();
        s.members
            .remove(&raw)
            .ok_or(DomainError::MemberNotFound(id))?;
        s.attendance.retain(|(member, _), _| *member != raw);
        s.payments.remove(&raw);
        Ok(())
    }
}

#[async_trait]
impl TrainerRepository for InMemoryGym {
    async fn find_by_id(&self, id: TrainerId) -> RepoResult<Option<Trainer>> {
        Ok(self.state.lock().trainers.get(&id.into_inner()).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Trainer>> {
        Ok(self.state.lock().trainers.values().cloned().collect())
    }

    async fn list_with_latest_session(&self) -> RepoResult<Vec<TrainerWithSession>> {
        let s = self.state.lock();
        Ok(s.trainers
            .values()
            .map(|t| TrainerWithSession {
                trainer: t.clone(),
                latest_session: s
                    .sessions
                    .iter()
                    .filter(|x| x.trainer_id == t.id)
                    .max_by_key(|x| x.id)
                    .cloned(),
            })
            .collect())
    }

    async fn create(&self, trainer: &NewTrainer, created_at: DateTime<Utc>) -> RepoResult<Trainer> {
        let mut s = self.state.lock();
        if s.trainers.values().any(|t| t.mobile == trainer.mobile) {
            return Err(DomainError::MobileAlreadyRegistered(trainer.mobile.clone()));
        }
        let id = s.next_id();
        let created = Trainer {
            id: TrainerId::new(id),
            name: trainer.name.clone(),
            age: trainer.age,
            city: trainer.city.clone(),
            experience: trainer.experience,
            mobile: trainer.mobile.clone(),
            email: trainer.email.clone(),
            created_at,
        };
        s.trainers.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, trainer: &Trainer) -> RepoResult<()> {
        let mut s = self.state.lock();
        let current = s
            .trainers
            .get_mut(&trainer.id.into_inner())
            .ok_or(DomainError::TrainerNotFound(trainer.id))?;
        *current = trainer.clone();
        Ok(())
    }

    async fn delete(&self, id: TrainerId) -> RepoResult<()> {
        let mut s = self.state.lock();
        s.trainers
            .remove(&id.into_inner())
            .ok_or(DomainError::TrainerNotFound(id))?;
        s.sessions.retain(|x| x.trainer_id != id);
        Ok(())
    }
}

#[async_trait]
impl TrainerSessionRepository for InMemoryGym {
    async fn latest_for(&self, trainer_id: TrainerId) -> RepoResult<Option<TrainerSession>> {
        Ok(self
            .state
            .lock()
            .sessions
            .iter()
            .filter(|x| x.trainer_id == trainer_id)
            .max_by_key(|x| x.id)
            .cloned())
    }

    async fn toggle(
        &self,
        trainer_id: TrainerId,
        at: DateTime<Utc>,
    ) -> RepoResult<SessionTransition> {
        let mut s = self.state.lock();
        if !s.trainers.contains_key(&trainer_id.into_inner()) {
            return Err(DomainError::TrainerNotFound(trainer_id));
        }

        let latest = s
            .sessions
            .iter()
            .filter(|x| x.trainer_id == trainer_id)
            .max_by_key(|x| x.id)
            .cloned();

        match ToggleAction::decide(latest.as_ref()) {
            ToggleAction::Close(session_id) => {
                let session = s
                    .sessions
                    .iter_mut()
                    .find(|x| x.id == session_id)
                    .ok_or_else(|| DomainError::InternalError("session vanished".to_string()))?;
                let mut closed = session.clone();
                closed.close(at)?;
                *session = closed.clone();
                Ok(SessionTransition::CheckedOut(closed))
            }
            ToggleAction::Open => {
                let id = s.next_id();
                let session = TrainerSession {
                    id: SessionId::new(id),
                    trainer_id,
                    check_in_time: at,
                    check_out_time: None,
                };
                s.sessions.push(session.clone());
                Ok(SessionTransition::CheckedIn(session))
            }
        }
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryGym {
    async fn mark_present(
        &self,
        member_id: MemberId,
        date: NaiveDate,
    ) -> RepoResult<DailyAttendance> {
        let mut s = self.state.lock();
        if !s.members.contains_key(&member_id.into_inner()) {
            return Err(DomainError::MemberNotFound(member_id));
        }
        s.attendance
            .insert((member_id.into_inner(), date), AttendanceStatus::Present);
        Ok(DailyAttendance {
            member_id,
            date,
            status: AttendanceStatus::Present,
        })
    }

    async fn sweep_absences(&self, date: NaiveDate) -> RepoResult<u64> {
        let mut s = self.state.lock();
        s.absence_sweeps += 1;
        if s.failing_absence_sweeps > 0 {
            s.failing_absence_sweeps -= 1;
            return Err(DomainError::DatabaseError("connection reset".to_string()));
        }
        let ids: Vec<i64> = s.members.keys().copied().collect();
        let mut inserted = 0;
        for id in ids {
            if let std::collections::hash_map::Entry::Vacant(slot) = s.attendance.entry((id, date)) {
                slot.insert(AttendanceStatus::Absent);
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    async fn status_for(
        &self,
        member_id: MemberId,
        date: NaiveDate,
    ) -> RepoResult<Option<DailyAttendance>> {
        Ok(self
            .state
            .lock()
            .attendance
            .get(&(member_id.into_inner(), date))
            .map(|status| DailyAttendance {
                member_id,
                date,
                status: *status,
            }))
    }

    async fn history_for(&self, member_id: MemberId) -> RepoResult<Vec<DailyAttendance>> {
        let s = self.state.lock();
        let mut rows: Vec<DailyAttendance> = s
            .attendance
            .iter()
            .filter(|((member, _), _)| *member == member_id.into_inner())
            .map(|((_, date), status)| DailyAttendance {
                member_id,
                date: *date,
                status: *status,
            })
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn roster_for(&self, date: NaiveDate) -> RepoResult<Vec<MemberDayStatus>> {
        let s = self.state.lock();
        Ok(s.members
            .values()
            .map(|m| MemberDayStatus {
                member: m.clone(),
                status: s.attendance.get(&(m.id.into_inner(), date)).copied(),
            })
            .collect())
    }
}

#[async_trait]
impl PaymentRepository for InMemoryGym {
    async fn record_payment(
        &self,
        command: &PaymentCommand,
        at: DateTime<Utc>,
    ) -> RepoResult<PaymentRecord> {
        let mut s = self.state.lock();
        let raw = command.member_id.into_inner();
        let member = s
            .members
            .get_mut(&raw)
            .ok_or(DomainError::MemberNotFound(command.member_id))?;
        member.is_paid = true;
        member.payment_date = Some(at);

        let record = command.clone().into_record(at);
        s.payments.insert(raw, record.clone());
        Ok(record)
    }

    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Option<PaymentRecord>> {
        Ok(self.state.lock().payments.get(&member_id.into_inner()).cloned())
    }

    async fn status_report(&self) -> RepoResult<Vec<MemberPaymentStatus>> {
        let s = self.state.lock();
        Ok(s.members
            .values()
            .map(|m| MemberPaymentStatus {
                member: m.clone(),
                status: PaymentStatus::project(
                    s.payments.get(&m.id.into_inner()).map(|p| p.status),
                ),
            })
            .collect())
    }

    async fn history(&self) -> RepoResult<Vec<PaymentHistoryEntry>> {
        let s = self.state.lock();
        let mut rows: Vec<PaymentHistoryEntry> = s
            .payments
            .values()
            .filter_map(|p| {
                s.members.get(&p.member_id.into_inner()).map(|m| PaymentHistoryEntry {
                    member_id: p.member_id,
                    name: m.name.clone(),
                    mobile: m.mobile.clone(),
                    amount: p.amount,
                    transaction_id: p.transaction_id.clone(),
                    payment_date: p.payment_date,
                })
            })
            .collect();
        rows.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
        Ok(rows)
    }

    async fn expire_before(&self, cutoff: DateTime<Utc>) -> RepoResult<ExpirySweepOutcome> {
        let mut s = self.state.lock();
        s.expiry_sweeps += 1;
        let mut outcome = ExpirySweepOutcome::default();
        for record in s.payments.values_mut() {
            if record.status != PaymentStatus::Due && record.payment_date < cutoff {
                record.status = PaymentStatus::Due;
                outcome.payments_expired += 1;
            }
        }
        for member in s.members.values_mut() {
            if member.is_paid && member.payment_date.is_some_and(|d| d < cutoff) {
                member.is_paid = false;
                outcome.members_marked_unpaid += 1;
            }
        }
        Ok(outcome)
    }
}

#[async_trait]
impl EquipmentRepository for InMemoryGym {
    async fn find_by_id(&self, id: EquipmentId) -> RepoResult<Option<Equipment>> {
        Ok(self.state.lock().equipment.get(&id.into_inner()).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Equipment>> {
        Ok(self.state.lock().equipment.values().cloned().collect())
    }

    async fn create(&self, item: &NewEquipment, created_at: DateTime<Utc>) -> RepoResult<Equipment> {
        let mut s = self.state.lock();
        let id = s.next_id();
        let created = Equipment {
            id: EquipmentId::new(id),
            name: item.name.clone(),
            quantity: item.quantity,
            vendor: item.vendor.clone(),
            price: item.price,
            contact: item.contact.clone(),
            place: item.place.clone(),
            created_at,
        };
        s.equipment.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, item: &Equipment) -> RepoResult<()> {
        let mut s = self.state.lock();
        let current = s
            .equipment
            .get_mut(&item.id.into_inner())
            .ok_or(DomainError::EquipmentNotFound(item.id))?;
        *current = item.clone();
        Ok(())
    }

    async fn delete(&self, id: EquipmentId) -> RepoResult<()> {
        self.state
            .lock()
            .equipment
            .remove(&id.into_inner())
            .map(|_| ())
            .ok_or(DomainError::EquipmentNotFound(id))
    }
}

// ============================================================================
// Dispatchers and clocks
// ============================================================================

/// Captures every email it is asked to send
#[derive(Default)]
pub struct RecordingDispatcher {
    pub sent: Mutex<Vec<OutboundEmail>>,
}

#[async_trait]
impl ReminderDispatcher for RecordingDispatcher {
    async fn dispatch(&self, email: &OutboundEmail) -> Result<(), DomainError> {
        self.sent.lock().push(email.clone());
        Ok(())
    }
}

/// Always fails
pub struct FailingDispatcher;

#[async_trait]
impl ReminderDispatcher for FailingDispatcher {
    async fn dispatch(&self, _email: &OutboundEmail) -> Result<(), DomainError> {
        Err(DomainError::DispatchError("relay unreachable".to_string()))
    }
}

/// Moves one second forward on every reading
#[derive(Debug)]
pub struct TickingClock {
    now: Mutex<DateTime<Utc>>,
}

impl TickingClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut now = self.now.lock();
        *now += Duration::seconds(1);
        *now
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn start_of_test() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
}

pub struct Harness {
    pub store: Arc<InMemoryGym>,
    pub clock: Arc<ManualClock>,
    pub dispatcher: Arc<RecordingDispatcher>,
    pub ctx: ServiceContext,
}

pub fn harness() -> Harness {
    let store = InMemoryGym::new();
    let clock = Arc::new(ManualClock::new(start_of_test()));
    let dispatcher = Arc::new(RecordingDispatcher::default());
    let ctx = context_with(&store, clock.clone(), dispatcher.clone());
    Harness {
        store,
        clock,
        dispatcher,
        ctx,
    }
}

pub fn context_with(
    store: &Arc<InMemoryGym>,
    clock: Arc<dyn Clock>,
    dispatcher: Arc<dyn ReminderDispatcher>,
) -> ServiceContext {
    ServiceContextBuilder::new()
        .member_repo(store.clone())
        .trainer_repo(store.clone())
        .session_repo(store.clone())
        .attendance_repo(store.clone())
        .payment_repo(store.clone())
        .equipment_repo(store.clone())
        .dispatcher(dispatcher)
        .clock(clock)
        .settings(ServiceSettings {
            payment_validity: Duration::days(30),
            payment_link: "https://gym.example.com/pay".to_string(),
            mail_from: "front-desk@gym.example.com".to_string(),
        })
        .build()
        .expect("all repositories provided")
}

pub fn new_member(name: &str, mobile: &str) -> NewMember {
    NewMember {
        name: name.to_string(),
        age: 29,
        gender: "Female".to_string(),
        address: "4 Lake View".to_string(),
        program: "Cardio".to_string(),
        membership_type: "Monthly".to_string(),
        mobile: mobile.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        fitness_goals: vec!["endurance".to_string()],
        medical_conditions: None,
    }
}

pub fn new_trainer(name: &str, mobile: &str) -> NewTrainer {
    NewTrainer {
        name: name.to_string(),
        age: 35,
        city: "Chennai".to_string(),
        experience: 8,
        mobile: mobile.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

pub async fn seed_member(h: &Harness, name: &str, mobile: &str) -> Member {
    MemberRepository::create(h.store.as_ref(), &new_member(name, mobile), start_of_test())
        .await
        .unwrap()
}

pub async fn seed_trainer(h: &Harness, name: &str, mobile: &str) -> Trainer {
    TrainerRepository::create(h.store.as_ref(), &new_trainer(name, mobile), start_of_test())
        .await
        .unwrap()
}
