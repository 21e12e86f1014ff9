//! Route definitions
//!
//! Paths match what the gym front end already calls, so nothing is nested
//! under a version prefix.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{attendance, equipment, health, members, payments, trainers};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(attendance_routes())
        .merge(trainer_routes())
        .merge(member_routes())
        .merge(payment_routes())
        .merge(equipment_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Member attendance routes
fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(attendance::list_clients))
        .route("/mark-present", post(attendance::mark_present))
        .route("/attendance/mobile/:mobile", get(attendance::history_by_mobile))
}

/// Trainer check-in and administration routes
fn trainer_routes() -> Router<AppState> {
    Router::new()
        .route("/trainers", get(trainers::list_with_latest_session))
        .route("/check-in-out", post(trainers::check_in_out))
        .route(
            "/tusers",
            get(trainers::list_trainers).post(trainers::create_trainer),
        )
        .route(
            "/tusers/:id",
            patch(trainers::update_trainer).delete(trainers::delete_trainer),
        )
        .route("/add-trainer", post(trainers::add_trainer))
}

/// Member administration and lookup routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(members::list_members).post(members::create_member),
        )
        .route(
            "/users/:id",
            patch(members::update_member).delete(members::delete_member),
        )
        .route("/register", post(members::register))
        .route("/user/:mobile", get(members::get_by_mobile))
        .route("/user/details/mobile/:mobile", get(members::get_by_mobile))
        .route("/api/getUserByMobile/:mobile", get(members::get_user_envelope))
}

/// Payment and reminder routes
fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/api/payment", post(payments::record_payment))
        .route("/api/payment-status", get(payments::payment_status))
        .route("/transaction", get(payments::transactions))
        .route(
            "/api/send-payment-reminder",
            post(payments::send_payment_reminder),
        )
}

/// Equipment inventory routes
fn equipment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/equip",
            get(equipment::list_equipment).post(equipment::create_equipment),
        )
        .route(
            "/equip/:id",
            patch(equipment::update_equipment).delete(equipment::delete_equipment),
        )
}
