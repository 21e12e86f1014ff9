//! Equipment service

use tracing::{info, instrument};
use validator::Validate;

use gym_core::{DomainError, EquipmentChanges, EquipmentId, NewEquipment};

use crate::dto::{CreateEquipmentRequest, CreatedResponse, EquipmentResponse, UpdateEquipmentRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Equipment service
pub struct EquipmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EquipmentService<'a> {
    /// Create a new EquipmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<EquipmentResponse>> {
        let items = self.ctx.equipment_repo().list().await?;
        Ok(items.iter().map(EquipmentResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateEquipmentRequest) -> ServiceResult<CreatedResponse> {
        request.validate()?;
        let new_item = NewEquipment::from(request);

        let item = self
            .ctx
            .equipment_repo()
            .create(&new_item, self.ctx.clock().now())
            .await?;

        info!(equipment_id = %item.id, "Equipment added");
        Ok(CreatedResponse::new("Equipment added successfully", item.id))
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: EquipmentId, request: UpdateEquipmentRequest) -> ServiceResult<()> {
        request.validate()?;
        let changes = EquipmentChanges::from(request);

        let mut item = self
            .ctx
            .equipment_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::EquipmentNotFound(id))?;

        if changes == EquipmentChanges::default() {
            return Ok(());
        }

        changes.apply(&mut item);
        self.ctx.equipment_repo().update(&item).await?;

        info!(equipment_id = %id, "Equipment updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: EquipmentId) -> ServiceResult<()> {
        self.ctx.equipment_repo().delete(id).await?;
        info!(equipment_id = %id, "Equipment deleted");
        Ok(())
    }
}
