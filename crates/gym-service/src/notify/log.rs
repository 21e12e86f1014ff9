//! Dispatcher that only logs

use async_trait::async_trait;
use tracing::info;

use gym_core::{DomainError, OutboundEmail, ReminderDispatcher};

/// Writes each reminder to the log and reports success
#[derive(Debug, Clone, Default)]
pub struct LogDispatcher;

#[async_trait]
impl ReminderDispatcher for LogDispatcher {
    async fn dispatch(&self, email: &OutboundEmail) -> Result<(), DomainError> {
        info!(to = %email.to, subject = %email.subject, "Payment reminder (not sent, no mail relay)");
        Ok(())
    }
}
