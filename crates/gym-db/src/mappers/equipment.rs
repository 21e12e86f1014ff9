//! Equipment model -> entity

use gym_core::{Equipment, EquipmentId};

use crate::models::EquipmentModel;

impl From<EquipmentModel> for Equipment {
    fn from(model: EquipmentModel) -> Self {
        Equipment {
            id: EquipmentId::new(model.id),
            name: model.name,
            quantity: model.quantity,
            vendor: model.vendor,
            price: model.price,
            contact: model.contact,
            place: model.place,
            created_at: model.created_at,
        }
    }
}
