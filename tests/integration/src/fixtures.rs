//! Test fixtures and data generators
//!
//! Provides request bodies with unique mobile numbers and the response
//! shapes the tests read back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Mobile number unique across runs; 14 digits, inside the accepted length
pub fn unique_mobile() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst) % 1000;
    let micros = Utc::now().timestamp_micros() % 100_000_000_000;
    format!("{micros:011}{n:03}")
}

/// Member form for `POST /users` and `POST /register`
#[derive(Debug, Clone, Serialize)]
pub struct MemberForm {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub address: String,
    pub program: String,
    #[serde(rename = "membershipType")]
    pub membership_type: String,
    pub mobile: String,
    pub email: String,
    #[serde(rename = "fitnessGoals")]
    pub fitness_goals: Vec<String>,
}

impl MemberForm {
    pub fn unique() -> Self {
        Self {
            name: "Integration Member".to_string(),
            age: 29,
            gender: "Female".to_string(),
            address: "4 Ring Road".to_string(),
            program: "Strength".to_string(),
            membership_type: "Monthly".to_string(),
            mobile: unique_mobile(),
            email: "member@example.com".to_string(),
            fitness_goals: vec!["endurance".to_string()],
        }
    }
}

/// Trainer form for `POST /tusers` and `POST /add-trainer`
#[derive(Debug, Clone, Serialize)]
pub struct TrainerForm {
    pub name: String,
    pub age: i32,
    pub city: String,
    pub experience: i32,
    pub mobile: String,
    pub email: String,
}

impl TrainerForm {
    pub fn unique() -> Self {
        Self {
            name: "Integration Trainer".to_string(),
            age: 35,
            city: "Nagpur".to_string(),
            experience: 8,
            mobile: unique_mobile(),
            email: "trainer@example.com".to_string(),
        }
    }
}

/// Equipment form for `POST /equip`
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentForm {
    pub name: String,
    pub quantity: i32,
    pub vendor: String,
    pub price: f64,
    pub contact: String,
    pub place: String,
}

impl EquipmentForm {
    pub fn treadmill() -> Self {
        Self {
            name: "Treadmill".to_string(),
            quantity: 3,
            vendor: "FitSupply".to_string(),
            price: 45999.5,
            contact: "9000000000".to_string(),
            place: "Cardio floor".to_string(),
        }
    }
}

/// `{message}` acknowledgement
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// `{message, id}` acknowledgement
#[derive(Debug, Deserialize)]
pub struct CreatedBody {
    pub message: String,
    pub id: i64,
}

/// `POST /check-in-out` response
#[derive(Debug, Deserialize)]
pub struct CheckInOutBody {
    pub message: String,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
}

/// `GET /trainers` row
#[derive(Debug, Deserialize)]
pub struct TrainerRow {
    pub id: i64,
    pub name: String,
    pub check_in_time: Option<DateTime<Utc>>,
    pub check_out_time: Option<DateTime<Utc>>,
}

/// `GET /clients` row
#[derive(Debug, Deserialize)]
pub struct ClientRow {
    pub id: i64,
    pub mobile: String,
    pub status: Option<String>,
}

/// `GET /attendance/mobile/{mobile}` row
#[derive(Debug, Deserialize)]
pub struct AttendanceRow {
    pub date: String,
    pub status: String,
}

/// `GET /api/payment-status` row
#[derive(Debug, Deserialize)]
pub struct PaymentStatusRow {
    pub id: i64,
    pub payment_status: String,
    pub payment_date: Option<DateTime<Utc>>,
}

/// `GET /equip` row
#[derive(Debug, Deserialize)]
pub struct EquipmentRow {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Standard error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
