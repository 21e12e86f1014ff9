//! Payment service
//!
//! Recording a payment is one upsert that also flags the member as paid. The
//! expiry sweep is the only writer of `Due`; a member without a payment
//! record reads as `Due`.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};
use validator::Validate;

use gym_core::entities::expiry_cutoff;
use gym_core::{DomainError, ExpirySweepOutcome, MemberId, PaymentCommand, PaymentStatus};

use crate::dto::{PaymentRecordedResponse, PaymentStatusResponse, RecordPaymentRequest, TransactionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Payment service
pub struct PaymentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PaymentService<'a> {
    /// Create a new PaymentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record or refresh a member's payment
    #[instrument(skip(self, request), fields(member_id = %request.user_id))]
    pub async fn record_payment(
        &self,
        request: RecordPaymentRequest,
    ) -> ServiceResult<PaymentRecordedResponse> {
        request.validate()?;
        let command = PaymentCommand::new(request.user_id, request.amount, request.transaction_id)?;

        let now = self.ctx.clock().now();
        let record = self.ctx.payment_repo().record_payment(&command, now).await?;

        info!(
            member_id = %record.member_id,
            amount = record.amount,
            transaction_id = %record.transaction_id,
            "Payment recorded"
        );
        Ok(PaymentRecordedResponse {
            message: "Payment recorded successfully".to_string(),
            user_id: record.member_id,
        })
    }

    /// Mark every payment older than the validity window as `Due`
    #[instrument(skip(self))]
    pub async fn sweep_expired(&self) -> ServiceResult<ExpirySweepOutcome> {
        self.sweep_expired_at(self.ctx.clock().now()).await
    }

    /// Expiry sweep evaluated at `now`
    #[instrument(skip(self))]
    pub async fn sweep_expired_at(&self, now: DateTime<Utc>) -> ServiceResult<ExpirySweepOutcome> {
        let cutoff = expiry_cutoff(now, self.ctx.settings().payment_validity);
        let outcome = self.ctx.payment_repo().expire_before(cutoff).await?;
        Ok(outcome)
    }

    /// Stored payment status of a member (`Due` when they never paid)
    #[instrument(skip(self))]
    pub async fn status_for(&self, member_id: MemberId) -> ServiceResult<PaymentStatus> {
        if let Some(record) = self.ctx.payment_repo().find_by_member(member_id).await? {
            return Ok(record.status);
        }

        self.ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or(DomainError::MemberNotFound(member_id))?;

        Ok(PaymentStatus::project(None))
    }

    /// Every member with their payment status
    #[instrument(skip(self))]
    pub async fn status_report(&self) -> ServiceResult<Vec<PaymentStatusResponse>> {
        let rows = self.ctx.payment_repo().status_report().await?;
        Ok(rows.iter().map(PaymentStatusResponse::from).collect())
    }

    /// Payment history, newest first
    #[instrument(skip(self))]
    pub async fn history(&self) -> ServiceResult<Vec<TransactionResponse>> {
        let entries = self.ctx.payment_repo().history().await?;
        Ok(entries.iter().map(TransactionResponse::from).collect())
    }
}
