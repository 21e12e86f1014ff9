//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod attendance;
pub mod equipment;
pub mod health;
pub mod members;
pub mod payments;
pub mod trainers;
