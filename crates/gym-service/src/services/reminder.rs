//! Payment reminder service
//!
//! Only ever triggered by an admin request. Each call renders one email and
//! hands it to the dispatcher once; a failed send is reported to the caller
//! and changes no stored state.

use tracing::{info, instrument, warn};
use validator::Validate;

use gym_core::DomainError;

use crate::dto::{MessageResponse, PaymentReminderRequest};
use crate::notify::render_payment_reminder;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reminder service
pub struct ReminderService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReminderService<'a> {
    /// Create a new ReminderService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a "fees due" reminder
    #[instrument(skip(self, request))]
    pub async fn send_payment_reminder(
        &self,
        request: PaymentReminderRequest,
    ) -> ServiceResult<MessageResponse> {
        request.validate()?;
        let (email, name) = self.resolve_recipient(request).await?;

        let message = render_payment_reminder(&email, &name, &self.ctx.settings().payment_link);
        if let Err(e) = self.ctx.dispatcher().dispatch(&message).await {
            warn!(to = %email, error = %e, "Payment reminder dispatch failed");
            return Err(e.into());
        }

        info!(to = %email, "Payment reminder sent");
        Ok(MessageResponse::new("Payment reminder sent successfully!"))
    }

    async fn resolve_recipient(
        &self,
        request: PaymentReminderRequest,
    ) -> ServiceResult<(String, String)> {
        if let Some(member_id) = request.member_id {
            let member = self
                .ctx
                .member_repo()
                .find_by_id(member_id)
                .await?
                .ok_or(DomainError::MemberNotFound(member_id))?;
            return Ok((member.email, member.name));
        }

        match (request.email, request.name) {
            (Some(email), Some(name)) => Ok((email, name)),
            _ => Err(ServiceError::validation("Missing email or name")),
        }
    }
}
