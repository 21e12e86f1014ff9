//! Equipment inventory item

use chrono::{DateTime, Utc};

use crate::value_objects::EquipmentId;

/// Equipment inventory item
#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    pub quantity: i32,
    pub vendor: String,
    pub price: f64,
    pub contact: String,
    /// Where the equipment is kept
    pub place: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEquipment {
    pub name: String,
    pub quantity: i32,
    pub vendor: String,
    pub price: f64,
    pub contact: String,
    pub place: String,
}

/// Partial update; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentChanges {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub vendor: Option<String>,
    pub price: Option<f64>,
    pub contact: Option<String>,
    pub place: Option<String>,
}

impl EquipmentChanges {
    pub fn apply(self, item: &mut Equipment) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(vendor) = self.vendor {
            item.vendor = vendor;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(contact) = self.contact {
            item.contact = contact;
        }
        if let Some(place) = self.place {
            item.place = place;
        }
    }
}
