//! Outbound notification port

use async_trait::async_trait;

use crate::error::DomainError;

/// A rendered email ready to hand to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Sends a reminder exactly once, with no retry and no delivery tracking
///
/// Failures are reported as [`DomainError::DispatchError`] and never roll back
/// any stored state.
#[async_trait]
pub trait ReminderDispatcher: Send + Sync {
    async fn dispatch(&self, email: &OutboundEmail) -> Result<(), DomainError>;
}
