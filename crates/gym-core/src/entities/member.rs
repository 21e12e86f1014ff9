//! Member entity - a registered gym client

use chrono::{DateTime, Utc};

use crate::value_objects::MemberId;

/// Gym member
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub address: String,
    pub program: String,
    pub membership_type: String,
    pub mobile: String,
    pub email: String,
    pub fitness_goals: Vec<String>,
    pub medical_conditions: Option<String>,
    /// Denormalized copy of the payment state, kept in step by the payment state machine
    pub is_paid: bool,
    pub payment_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Data required to register a member
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub address: String,
    pub program: String,
    pub membership_type: String,
    pub mobile: String,
    pub email: String,
    pub fitness_goals: Vec<String>,
    pub medical_conditions: Option<String>,
}

impl NewMember {
    /// Materialize the member once the store has assigned an id
    pub fn into_member(self, id: MemberId, created_at: DateTime<Utc>) -> Member {
        Member {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            address: self.address,
            program: self.program,
            membership_type: self.membership_type,
            mobile: self.mobile,
            email: self.email,
            fitness_goals: self.fitness_goals,
            medical_conditions: self.medical_conditions,
            is_paid: false,
            payment_date: None,
            created_at,
        }
    }
}

/// Partial update; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub program: Option<String>,
    pub membership_type: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
}

impl MemberChanges {
    /// Whether any field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the set fields to a member
    pub fn apply(self, member: &mut Member) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(age) = self.age {
            member.age = age;
        }
        if let Some(gender) = self.gender {
            member.gender = gender;
        }
        if let Some(address) = self.address {
            member.address = address;
        }
        if let Some(program) = self.program {
            member.program = program;
        }
        if let Some(membership_type) = self.membership_type {
            member.membership_type = membership_type;
        }
        if let Some(mobile) = self.mobile {
            member.mobile = mobile;
        }
        if let Some(email) = self.email {
            member.email = email;
        }
    }
}
