//! Trainer check-in sessions
//!
//! A session is opened by a check-in and closed by a check-out. A trainer has
//! at most one open session at any instant; [`ToggleAction::decide`] is the
//! single place that turns "latest session" into the next transition.

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{SessionId, TrainerId};

/// One check-in/check-out pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerSession {
    pub id: SessionId,
    pub trainer_id: TrainerId,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
}

impl TrainerSession {
    /// A session with no recorded check-out
    #[inline]
    pub fn is_open(&self) -> bool {
        self.check_out_time.is_none()
    }

    /// Close the session at `at`
    ///
    /// Fails if the session is already closed or `at` is not after check-in.
    pub fn close(&mut self, at: DateTime<Utc>) -> Result<(), DomainError> {
        if !self.is_open() {
            return Err(DomainError::SessionAlreadyClosed(self.id));
        }
        if at <= self.check_in_time {
            return Err(DomainError::CheckOutBeforeCheckIn);
        }
        self.check_out_time = Some(at);
        Ok(())
    }
}

/// What a toggle must do given the trainer's latest session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// No session, or the latest one is closed
    Open,
    /// The latest session is open
    Close(SessionId),
}

impl ToggleAction {
    pub fn decide(latest: Option<&TrainerSession>) -> Self {
        match latest {
            Some(session) if session.is_open() => Self::Close(session.id),
            _ => Self::Open,
        }
    }
}

/// Result of a toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTransition {
    CheckedIn(TrainerSession),
    CheckedOut(TrainerSession),
}

impl SessionTransition {
    pub fn session(&self) -> &TrainerSession {
        match self {
            Self::CheckedIn(s) | Self::CheckedOut(s) => s,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::CheckedIn(_) => "Checked In",
            Self::CheckedOut(_) => "Checked Out",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn open_session() -> TrainerSession {
        TrainerSession {
            id: SessionId::new(1),
            trainer_id: TrainerId::new(10),
            check_in_time: Utc::now(),
            check_out_time: None,
        }
    }

    #[test]
    fn test_decide_without_session_opens() {
        assert_eq!(ToggleAction::decide(None), ToggleAction::Open);
    }

    #[test]
    fn test_decide_with_open_session_closes() {
        let session = open_session();
        assert_eq!(
            ToggleAction::decide(Some(&session)),
            ToggleAction::Close(SessionId::new(1))
        );
    }

    #[test]
    fn test_decide_with_closed_session_opens() {
        let mut session = open_session();
        session.close(session.check_in_time + Duration::hours(2)).unwrap();
        assert_eq!(ToggleAction::decide(Some(&session)), ToggleAction::Open);
    }

    #[test]
    fn test_close_twice_fails() {
        let mut session = open_session();
        let out = session.check_in_time + Duration::minutes(30);
        session.close(out).unwrap();
        assert!(matches!(
            session.close(out + Duration::minutes(1)),
            Err(DomainError::SessionAlreadyClosed(_))
        ));
        assert_eq!(session.check_out_time, Some(out));
    }

    #[test]
    fn test_close_before_check_in_fails() {
        let mut session = open_session();
        let err = session.close(session.check_in_time).unwrap_err();
        assert!(matches!(err, DomainError::CheckOutBeforeCheckIn));
        assert!(session.is_open());
    }

    #[test]
    fn test_transition_message() {
        let session = open_session();
        assert_eq!(SessionTransition::CheckedIn(session.clone()).message(), "Checked In");
        assert_eq!(SessionTransition::CheckedOut(session).message(), "Checked Out");
    }
}
