//! Sweep jobs
//!
//! One run of each background sweep, bounded by a timeout. These are what the
//! scheduler loops call; they are public so tests and admin tooling can run a
//! sweep on demand.

use std::time::Duration;

use chrono::{DateTime, NaiveTime, Utc};
use tracing::info;

use gym_core::ExpirySweepOutcome;

use crate::services::{AttendanceService, PaymentService, ServiceContext, ServiceError, ServiceResult};

/// Mark every member without a record today as absent
pub async fn run_absence_sweep(ctx: &ServiceContext, limit: Duration) -> ServiceResult<u64> {
    let date = ctx.clock().today();
    let inserted = tokio::time::timeout(limit, AttendanceService::new(ctx).sweep_absences(date))
        .await
        .map_err(|_| ServiceError::Timeout("absence sweep"))??;

    info!(date = %date, marked_absent = inserted, "Absence sweep finished");
    Ok(inserted)
}

/// Move payments older than the validity window to `Due`
pub async fn run_payment_sweep(
    ctx: &ServiceContext,
    limit: Duration,
) -> ServiceResult<ExpirySweepOutcome> {
    let outcome = tokio::time::timeout(limit, PaymentService::new(ctx).sweep_expired())
        .await
        .map_err(|_| ServiceError::Timeout("payment expiry sweep"))??;

    info!(
        payments_expired = outcome.payments_expired,
        members_marked_unpaid = outcome.members_marked_unpaid,
        "Payment expiry sweep finished"
    );
    Ok(outcome)
}

/// Next instant strictly after `now` whose UTC wall-clock time is `at`
pub fn next_daily_run(now: DateTime<Utc>, at: NaiveTime) -> DateTime<Utc> {
    let today = now.date_naive().and_time(at).and_utc();
    if today > now {
        today
    } else {
        today + chrono::Duration::days(1)
    }
}
