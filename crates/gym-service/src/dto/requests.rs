//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names follow the JSON the gym front end already sends, so a few
//! fields accept both snake_case and camelCase.

use gym_core::{
    EquipmentChanges, MemberChanges, MemberId, NewEquipment, NewMember, NewTrainer, TrainerChanges,
    TrainerId,
};
use serde::Deserialize;
use validator::{Validate, ValidationError};

// ============================================================================
// Attendance Requests
// ============================================================================

/// Trainer check-in/check-out toggle
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckInOutRequest {
    pub trainer_id: TrainerId,
}

/// Mark a member present today
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MarkPresentRequest {
    pub client_id: MemberId,
}

// ============================================================================
// Payment Requests
// ============================================================================

/// Record (or refresh) a member's payment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordPaymentRequest {
    pub user_id: MemberId,

    #[validate(range(
        min = 0.01,
        max = 99_999_999.99,
        message = "Amount must be between 0.01 and 99999999.99"
    ))]
    pub amount: f64,

    #[validate(length(min = 1, max = 255, message = "Transaction id must be 1-255 characters"))]
    pub transaction_id: String,
}

/// Payment reminder, addressed either by member id or by explicit contact
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_reminder_target"))]
pub struct PaymentReminderRequest {
    pub member_id: Option<MemberId>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
}

fn validate_reminder_target(req: &PaymentReminderRequest) -> Result<(), ValidationError> {
    if req.member_id.is_some() || (req.email.is_some() && req.name.is_some()) {
        return Ok(());
    }
    let mut err = ValidationError::new("reminder_target");
    err.message = Some("Missing email or name".into());
    Err(err)
}

// ============================================================================
// Member Requests
// ============================================================================

/// Create a member (admin form and self registration)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMemberRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: i32,

    #[validate(length(min = 1, max = 20, message = "Gender is required"))]
    pub gender: String,

    #[validate(length(min = 1, max = 255, message = "Address is required"))]
    pub address: String,

    #[validate(length(min = 1, max = 100, message = "Program is required"))]
    pub program: String,

    #[serde(alias = "membershipType")]
    #[validate(length(min = 1, max = 50, message = "Membership type is required"))]
    pub membership_type: String,

    #[validate(length(min = 7, max = 15, message = "Mobile must be 7-15 characters"))]
    pub mobile: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default, alias = "fitnessGoals")]
    pub fitness_goals: Vec<String>,

    #[serde(default, alias = "medicalConditions")]
    pub medical_conditions: Option<String>,
}

impl From<CreateMemberRequest> for NewMember {
    fn from(req: CreateMemberRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            age: req.age,
            gender: req.gender,
            address: req.address,
            program: req.program,
            membership_type: req.membership_type,
            mobile: req.mobile.trim().to_string(),
            email: req.email,
            fitness_goals: req.fitness_goals,
            medical_conditions: req.medical_conditions.filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Partial member update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMemberRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: Option<i32>,

    pub gender: Option<String>,

    pub address: Option<String>,

    pub program: Option<String>,

    #[serde(alias = "membershipType")]
    pub membership_type: Option<String>,

    #[validate(length(min = 7, max = 15, message = "Mobile must be 7-15 characters"))]
    pub mobile: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

impl From<UpdateMemberRequest> for MemberChanges {
    fn from(req: UpdateMemberRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            gender: req.gender,
            address: req.address,
            program: req.program,
            membership_type: req.membership_type,
            mobile: req.mobile,
            email: req.email,
        }
    }
}

// ============================================================================
// Trainer Requests
// ============================================================================

/// Create a trainer
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrainerRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(range(min = 16, max = 100, message = "Age must be between 16 and 100"))]
    pub age: i32,

    #[validate(length(min = 1, max = 100, message = "City is required"))]
    pub city: String,

    /// Years of experience
    #[validate(range(min = 0, max = 80, message = "Experience must be between 0 and 80"))]
    pub experience: i32,

    #[validate(length(min = 7, max = 15, message = "Mobile must be 7-15 characters"))]
    pub mobile: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

impl From<CreateTrainerRequest> for NewTrainer {
    fn from(req: CreateTrainerRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            age: req.age,
            city: req.city,
            experience: req.experience,
            mobile: req.mobile.trim().to_string(),
            email: req.email,
        }
    }
}

/// Partial trainer update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTrainerRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 16, max = 100, message = "Age must be between 16 and 100"))]
    pub age: Option<i32>,

    pub city: Option<String>,

    #[validate(range(min = 0, max = 80, message = "Experience must be between 0 and 80"))]
    pub experience: Option<i32>,

    #[validate(length(min = 7, max = 15, message = "Mobile must be 7-15 characters"))]
    pub mobile: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

impl From<UpdateTrainerRequest> for TrainerChanges {
    fn from(req: UpdateTrainerRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            city: req.city,
            experience: req.experience,
            mobile: req.mobile,
            email: req.email,
        }
    }
}

// ============================================================================
// Equipment Requests
// ============================================================================

/// Add an equipment line
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEquipmentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,

    #[validate(length(min = 1, max = 100, message = "Vendor is required"))]
    pub vendor: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    #[validate(length(min = 1, max = 50, message = "Contact is required"))]
    pub contact: String,

    #[validate(length(min = 1, max = 100, message = "Place is required"))]
    pub place: String,
}

impl From<CreateEquipmentRequest> for NewEquipment {
    fn from(req: CreateEquipmentRequest) -> Self {
        Self {
            name: req.name,
            quantity: req.quantity,
            vendor: req.vendor,
            price: req.price,
            contact: req.contact,
            place: req.place,
        }
    }
}

/// Partial equipment update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEquipmentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i32>,

    pub vendor: Option<String>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,

    pub contact: Option<String>,

    pub place: Option<String>,
}

impl From<UpdateEquipmentRequest> for EquipmentChanges {
    fn from(req: UpdateEquipmentRequest) -> Self {
        Self {
            name: req.name,
            quantity: req.quantity,
            vendor: req.vendor,
            price: req.price,
            contact: req.contact,
            place: req.place,
        }
    }
}
