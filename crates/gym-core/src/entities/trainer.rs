//! Trainer entity

use chrono::{DateTime, Utc};

use super::session::TrainerSession;
use crate::value_objects::TrainerId;

/// Gym trainer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trainer {
    pub id: TrainerId,
    pub name: String,
    pub age: i32,
    pub city: String,
    /// Years of experience
    pub experience: i32,
    pub mobile: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Data required to add a trainer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrainer {
    pub name: String,
    pub age: i32,
    pub city: String,
    pub experience: i32,
    pub mobile: String,
    pub email: String,
}

/// Partial update; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainerChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub city: Option<String>,
    pub experience: Option<i32>,
    pub mobile: Option<String>,
    pub email: Option<String>,
}

impl TrainerChanges {
    pub fn apply(self, trainer: &mut Trainer) {
        if let Some(name) = self.name {
            trainer.name = name;
        }
        if let Some(age) = self.age {
            trainer.age = age;
        }
        if let Some(city) = self.city {
            trainer.city = city;
        }
        if let Some(experience) = self.experience {
            trainer.experience = experience;
        }
        if let Some(mobile) = self.mobile {
            trainer.mobile = mobile;
        }
        if let Some(email) = self.email {
            trainer.email = email;
        }
    }
}

/// Trainer joined with their most recent check-in session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerWithSession {
    pub trainer: Trainer,
    pub latest_session: Option<TrainerSession>,
}
