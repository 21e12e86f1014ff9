//! Attendance service
//!
//! Daily member attendance. A record is created either by a member being
//! marked present or by the absence sweep; both are single idempotent writes,
//! so they can interleave in any order and `Present` always wins.

use chrono::NaiveDate;
use tracing::{info, instrument};

use gym_core::{AttendanceStatus, DomainError, MemberId};

use crate::dto::{AttendanceEntryResponse, ClientStatusResponse, MarkPresentRequest, MessageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Attendance service
pub struct AttendanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttendanceService<'a> {
    /// Create a new AttendanceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Mark a member present for today
    #[instrument(skip(self, request), fields(member_id = %request.client_id))]
    pub async fn mark_present(&self, request: MarkPresentRequest) -> ServiceResult<MessageResponse> {
        let today = self.ctx.clock().today();
        self.ctx
            .attendance_repo()
            .mark_present(request.client_id, today)
            .await?;

        info!(member_id = %request.client_id, date = %today, "Member marked present");
        Ok(MessageResponse::new("Attendance marked as Present"))
    }

    /// Record `Absent` for every member without a record on `date`
    ///
    /// Returns how many members were marked absent.
    #[instrument(skip(self))]
    pub async fn sweep_absences(&self, date: NaiveDate) -> ServiceResult<u64> {
        let inserted = self.ctx.attendance_repo().sweep_absences(date).await?;
        Ok(inserted)
    }

    /// Every member with today's status
    #[instrument(skip(self))]
    pub async fn roster_today(&self) -> ServiceResult<Vec<ClientStatusResponse>> {
        let today = self.ctx.clock().today();
        let rows = self.ctx.attendance_repo().roster_for(today).await?;
        Ok(rows.iter().map(ClientStatusResponse::from).collect())
    }

    /// Attendance history of the member registered with `mobile`, newest first
    #[instrument(skip(self))]
    pub async fn history_by_mobile(&self, mobile: &str) -> ServiceResult<Vec<AttendanceEntryResponse>> {
        let mobile = mobile.trim();
        if mobile.is_empty() {
            return Err(ServiceError::validation("Mobile number is required"));
        }

        let member = self
            .ctx
            .member_repo()
            .find_by_mobile(mobile)
            .await?
            .ok_or_else(|| DomainError::MobileNotFound(mobile.to_string()))?;

        let records = self.ctx.attendance_repo().history_for(member.id).await?;
        Ok(records.iter().map(AttendanceEntryResponse::from).collect())
    }

    /// Status of a member on `date`, `None` when nothing was recorded yet
    #[instrument(skip(self))]
    pub async fn status_for(
        &self,
        member_id: MemberId,
        date: NaiveDate,
    ) -> ServiceResult<Option<AttendanceStatus>> {
        let record = self.ctx.attendance_repo().status_for(member_id, date).await?;
        Ok(record.map(|r| r.status))
    }
}
