//! Value objects - immutable domain primitives

mod id;

pub use id::{EquipmentId, IdParseError, MemberId, SessionId, TrainerId};
