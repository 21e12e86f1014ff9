//! Trainer and session models -> entities

use gym_core::{SessionId, Trainer, TrainerId, TrainerSession, TrainerWithSession};

use crate::models::{SessionModel, TrainerModel, TrainerWithSessionModel};

impl From<TrainerModel> for Trainer {
    fn from(model: TrainerModel) -> Self {
        Trainer {
            id: TrainerId::new(model.id),
            name: model.name,
            age: model.age,
            city: model.city,
            experience: model.experience,
            mobile: model.mobile,
            email: model.email,
            created_at: model.created_at,
        }
    }
}

impl From<SessionModel> for TrainerSession {
    fn from(model: SessionModel) -> Self {
        TrainerSession {
            id: SessionId::new(model.id),
            trainer_id: TrainerId::new(model.trainer_id),
            check_in_time: model.check_in_time,
            check_out_time: model.check_out_time,
        }
    }
}

impl From<TrainerWithSessionModel> for TrainerWithSession {
    fn from(model: TrainerWithSessionModel) -> Self {
        let trainer_id = TrainerId::new(model.trainer.id);
        // LEFT JOIN: the session columns are all NULL when there is no session
        let latest_session = match (model.session_id, model.check_in_time) {
            (Some(id), Some(check_in_time)) => Some(TrainerSession {
                id: SessionId::new(id),
                trainer_id,
                check_in_time,
                check_out_time: model.check_out_time,
            }),
            _ => None,
        };

        TrainerWithSession {
            trainer: model.trainer.into(),
            latest_session,
        }
    }
}
