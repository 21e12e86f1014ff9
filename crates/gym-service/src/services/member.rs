//! Member service
//!
//! Member administration and lookups by mobile number.

use tracing::{info, instrument};
use validator::Validate;

use gym_core::{DomainError, Member, MemberChanges, MemberId, NewMember};

use crate::dto::{CreateMemberRequest, CreatedResponse, MemberResponse, UpdateMemberRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all members
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.member_repo().list().await?;
        Ok(members.iter().map(MemberResponse::from).collect())
    }

    /// Add a member from the admin form; a duplicate mobile is a conflict
    pub async fn create(&self, request: CreateMemberRequest) -> ServiceResult<CreatedResponse> {
        let member = self.insert(request).await?;
        Ok(CreatedResponse::new("User added successfully", member.id))
    }

    /// Self registration; same rules as [`Self::create`]
    pub async fn register(&self, request: CreateMemberRequest) -> ServiceResult<MemberResponse> {
        let member = self.insert(request).await?;
        Ok(MemberResponse::from(&member))
    }

    #[instrument(skip(self, request), fields(mobile = %request.mobile))]
    async fn insert(&self, request: CreateMemberRequest) -> ServiceResult<Member> {
        request.validate()?;
        let new_member = NewMember::from(request);

        let member = self
            .ctx
            .member_repo()
            .create(&new_member, self.ctx.clock().now())
            .await?;

        info!(member_id = %member.id, "Member created");
        Ok(member)
    }

    /// Partially update a member; absent fields keep their value
    #[instrument(skip(self, request))]
    pub async fn update(&self, member_id: MemberId, request: UpdateMemberRequest) -> ServiceResult<()> {
        request.validate()?;
        let changes = MemberChanges::from(request);

        let mut member = self
            .ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or(DomainError::MemberNotFound(member_id))?;

        if changes.is_empty() {
            return Ok(());
        }

        changes.apply(&mut member);
        self.ctx.member_repo().update(&member).await?;

        info!(member_id = %member_id, "Member updated");
        Ok(())
    }

    /// Delete a member together with their attendance and payment
    #[instrument(skip(self))]
    pub async fn delete(&self, member_id: MemberId) -> ServiceResult<()> {
        self.ctx.member_repo().delete(member_id).await?;
        info!(member_id = %member_id, "Member deleted");
        Ok(())
    }

    /// Find the member registered with `mobile`
    #[instrument(skip(self))]
    pub async fn get_by_mobile(&self, mobile: &str) -> ServiceResult<MemberResponse> {
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

        Ok(MemberResponse::from(&member))
    }
}
