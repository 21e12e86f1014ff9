//! Member model -> entity

use gym_core::{Member, MemberId};

use crate::models::MemberModel;

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: MemberId::new(model.id),
            name: model.name,
            age: model.age,
            gender: model.gender,
            address: model.address,
            program: model.program,
            membership_type: model.membership_type,
            mobile: model.mobile,
            email: model.email,
            fitness_goals: model.fitness_goals.0,
            medical_conditions: model.medical_conditions,
            is_paid: model.is_paid,
            payment_date: model.payment_date,
            created_at: model.created_at,
        }
    }
}
