//! Background sweep scheduler
//!
//! Owns the two periodic jobs that reconcile stored state with the calendar:
//!
//! - the absence sweep, every `ABSENCE_SWEEP_INTERVAL_SECS` (first run at start)
//! - the payment expiry sweep, at start and then daily at `PAYMENT_SWEEP_TIME` (UTC)
//!
//! Both sweeps are idempotent and may overlap with request traffic. A failed
//! run is logged and retried on the next tick.

mod jobs;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::NaiveTime;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use gym_common::SchedulerConfig;

use crate::services::ServiceContext;

pub use jobs::{next_daily_run, run_absence_sweep, run_payment_sweep};

/// When the sweeps fire
#[derive(Debug, Clone, Copy)]
pub struct SweepSchedule {
    pub absence_interval: Duration,
    pub payment_time: NaiveTime,
    pub timeout: Duration,
}

impl From<&SchedulerConfig> for SweepSchedule {
    fn from(config: &SchedulerConfig) -> Self {
        Self {
            absence_interval: config.absence_sweep_interval(),
            payment_time: config.payment_sweep_time,
            timeout: config.sweep_timeout(),
        }
    }
}

/// Runs the sweeps as background tasks until shut down
pub struct Scheduler {
    ctx: ServiceContext,
    schedule: SweepSchedule,
    shutdown: CancellationToken,
    started: AtomicBool,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl Scheduler {
    pub fn new(ctx: ServiceContext, schedule: SweepSchedule) -> Self {
        Self {
            ctx,
            schedule,
            shutdown: CancellationToken::new(),
            started: AtomicBool::new(false),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Spawn both sweep loops; later calls do nothing
    pub async fn start(&self) {
        if self.started.swap(true, Ordering::SeqCst) || self.shutdown.is_cancelled() {
            return;
        }

        let absence = tokio::spawn(absence_loop(
            self.ctx.clone(),
            self.schedule,
            self.shutdown.clone(),
        ));
        let payment = tokio::spawn(payment_loop(
            self.ctx.clone(),
            self.schedule,
            self.shutdown.clone(),
        ));
        self.tasks.lock().await.extend([absence, payment]);

        info!(
            absence_interval_secs = self.schedule.absence_interval.as_secs(),
            payment_sweep_time = %self.schedule.payment_time.format("%H:%M"),
            "Sweep scheduler started"
        );
    }

    /// Stop both loops and wait for an in-flight run to finish
    pub async fn shutdown(&self) {
        self.shutdown.cancel();
        let tasks: Vec<_> = self.tasks.lock().await.drain(..).collect();
        for task in tasks {
            if let Err(e) = task.await {
                error!(error = %e, "Sweep task ended abnormally");
            }
        }
        info!("Sweep scheduler stopped");
    }

    /// Started and not yet shut down
    pub fn is_running(&self) -> bool {
        self.started.load(Ordering::SeqCst) && !self.shutdown.is_cancelled()
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("schedule", &self.schedule)
            .field("running", &self.is_running())
            .finish()
    }
}

async fn absence_loop(ctx: ServiceContext, schedule: SweepSchedule, shutdown: CancellationToken) {
    let mut ticker = tokio::time::interval(schedule.absence_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = run_absence_sweep(&ctx, schedule.timeout).await {
                    error!(error = %e, "Absence sweep failed");
                }
            }
            _ = shutdown.cancelled() => {
                info!("Absence sweep loop received shutdown signal");
                return;
            }
        }
    }
}

async fn payment_loop(ctx: ServiceContext, schedule: SweepSchedule, shutdown: CancellationToken) {
    // Catch up on a run missed while the process was down
    if let Err(e) = run_payment_sweep(&ctx, schedule.timeout).await {
        error!(error = %e, "Payment expiry sweep failed");
    }

    loop {
        let now = ctx.clock().now();
        let next = next_daily_run(now, schedule.payment_time);
        let wait = (next - now).to_std().unwrap_or(Duration::ZERO);
        info!(next_run = %next, "Next payment expiry sweep scheduled");

        tokio::select! {
            _ = tokio::time::sleep(wait) => {
                if let Err(e) = run_payment_sweep(&ctx, schedule.timeout).await {
                    error!(error = %e, "Payment expiry sweep failed");
                }
            }
            _ = shutdown.cancelled() => {
                info!("Payment sweep loop received shutdown signal");
                return;
            }
        }
    }
}
