//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use gym_core::{
    DailyAttendance, Equipment, Member, MemberDayStatus, MemberPaymentStatus, PaymentHistoryEntry,
    SessionTransition, Trainer, TrainerWithSession,
};

use super::responses::{
    AttendanceEntryResponse, CheckInOutResponse, ClientStatusResponse, EquipmentResponse,
    MemberResponse, PaymentStatusResponse, TrainerAttendanceResponse, TrainerResponse,
    TransactionResponse,
};

// ============================================================================
// Member Mappers
// ============================================================================

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            age: member.age,
            gender: member.gender.clone(),
            address: member.address.clone(),
            program: member.program.clone(),
            membership_type: member.membership_type.clone(),
            mobile: member.mobile.clone(),
            email: member.email.clone(),
            fitness_goals: member.fitness_goals.clone(),
            medical_conditions: member.medical_conditions.clone(),
            is_paid: member.is_paid,
            payment_date: member.payment_date,
            created_at: member.created_at,
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self::from(&member)
    }
}

impl From<&MemberDayStatus> for ClientStatusResponse {
    fn from(row: &MemberDayStatus) -> Self {
        Self {
            member: MemberResponse::from(&row.member),
            status: row.status,
        }
    }
}

impl From<&DailyAttendance> for AttendanceEntryResponse {
    fn from(record: &DailyAttendance) -> Self {
        Self {
            date: record.date,
            status: record.status,
        }
    }
}

// ============================================================================
// Trainer Mappers
// ============================================================================

impl From<&Trainer> for TrainerResponse {
    fn from(trainer: &Trainer) -> Self {
        Self {
            id: trainer.id,
            name: trainer.name.clone(),
            age: trainer.age,
            city: trainer.city.clone(),
            experience: trainer.experience,
            mobile: trainer.mobile.clone(),
            email: trainer.email.clone(),
            created_at: trainer.created_at,
        }
    }
}

impl From<Trainer> for TrainerResponse {
    fn from(trainer: Trainer) -> Self {
        Self::from(&trainer)
    }
}

impl From<&TrainerWithSession> for TrainerAttendanceResponse {
    fn from(row: &TrainerWithSession) -> Self {
        Self {
            trainer: TrainerResponse::from(&row.trainer),
            check_in_time: row.latest_session.as_ref().map(|s| s.check_in_time),
            check_out_time: row.latest_session.as_ref().and_then(|s| s.check_out_time),
        }
    }
}

impl From<&SessionTransition> for CheckInOutResponse {
    fn from(transition: &SessionTransition) -> Self {
        let session = transition.session();
        Self {
            message: transition.message(),
            check_in_time: session.check_in_time,
            check_out_time: session.check_out_time,
        }
    }
}

// ============================================================================
// Equipment Mappers
// ============================================================================

impl From<&Equipment> for EquipmentResponse {
    fn from(item: &Equipment) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity,
            vendor: item.vendor.clone(),
            price: item.price,
            contact: item.contact.clone(),
            place: item.place.clone(),
            created_at: item.created_at,
        }
    }
}

// ============================================================================
// Payment Mappers
// ============================================================================

impl From<&MemberPaymentStatus> for PaymentStatusResponse {
    fn from(row: &MemberPaymentStatus) -> Self {
        Self {
            id: row.member.id,
            name: row.member.name.clone(),
            email: row.member.email.clone(),
            mobile: row.member.mobile.clone(),
            program: row.member.program.clone(),
            payment_date: row.member.payment_date,
            payment_status: row.status,
        }
    }
}

impl From<&PaymentHistoryEntry> for TransactionResponse {
    fn from(entry: &PaymentHistoryEntry) -> Self {
        Self {
            user_id: entry.member_id,
            name: entry.name.clone(),
            mobile: entry.mobile.clone(),
            amount: entry.amount,
            transaction_id: entry.transaction_id.clone(),
            payment_date: entry.payment_date,
        }
    }
}
