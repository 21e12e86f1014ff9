//! Daily member attendance

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::member::Member;
use crate::value_objects::MemberId;

/// Attendance status for one member on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Present" => Ok(Self::Present),
            "Absent" => Ok(Self::Absent),
            other => Err(format!("unknown attendance status: {other}")),
        }
    }
}

/// One row of the attendance ledger, unique per (member, date)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyAttendance {
    pub member_id: MemberId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// A member with their status for a given day (`None` before the first sweep)
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDayStatus {
    pub member: Member,
    pub status: Option<AttendanceStatus>,
}
