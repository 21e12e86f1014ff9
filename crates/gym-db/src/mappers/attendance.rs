//! Attendance models -> entities

use gym_core::{DailyAttendance, DomainError, MemberDayStatus, MemberId};

use super::parse_column;
use crate::models::{AttendanceModel, MemberDayStatusModel};

impl TryFrom<AttendanceModel> for DailyAttendance {
    type Error = DomainError;

    fn try_from(model: AttendanceModel) -> Result<Self, Self::Error> {
        Ok(DailyAttendance {
            member_id: MemberId::new(model.member_id),
            date: model.date,
            status: parse_column("member_attendance.status", &model.status)?,
        })
    }
}

impl TryFrom<MemberDayStatusModel> for MemberDayStatus {
    type Error = DomainError;

    fn try_from(model: MemberDayStatusModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .as_deref()
            .map(|raw| parse_column("member_attendance.status", raw))
            .transpose()?;

        Ok(MemberDayStatus {
            member: model.member.into(),
            status,
        })
    }
}
