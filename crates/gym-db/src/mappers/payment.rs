//! Payment models -> entities

use gym_core::{
    DomainError, MemberId, MemberPaymentStatus, PaymentHistoryEntry, PaymentRecord, PaymentStatus,
};

use super::parse_column;
use crate::models::{MemberPaymentStatusModel, PaymentHistoryModel, PaymentModel};

impl TryFrom<PaymentModel> for PaymentRecord {
    type Error = DomainError;

    fn try_from(model: PaymentModel) -> Result<Self, Self::Error> {
        Ok(PaymentRecord {
            member_id: MemberId::new(model.member_id),
            amount: model.amount,
            transaction_id: model.transaction_id,
            status: parse_column("payments.status", &model.status)?,
            payment_date: model.payment_date,
        })
    }
}

impl TryFrom<MemberPaymentStatusModel> for MemberPaymentStatus {
    type Error = DomainError;

    fn try_from(model: MemberPaymentStatusModel) -> Result<Self, Self::Error> {
        let stored = model
            .payment_status
            .as_deref()
            .map(|raw| parse_column("payments.status", raw))
            .transpose()?;

        Ok(MemberPaymentStatus {
            member: model.member.into(),
            status: PaymentStatus::project(stored),
        })
    }
}

impl From<PaymentHistoryModel> for PaymentHistoryEntry {
    fn from(model: PaymentHistoryModel) -> Self {
        PaymentHistoryEntry {
            member_id: MemberId::new(model.member_id),
            name: model.name,
            mobile: model.mobile,
            amount: model.amount,
            transaction_id: model.transaction_id,
            payment_date: model.payment_date,
        }
    }
}
