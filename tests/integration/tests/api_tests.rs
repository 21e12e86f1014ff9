//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use gym_core::MemberId;
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn create_member(server: &TestServer) -> (i64, MemberForm) {
    let form = MemberForm::unique();
    let response = server.post("/users", &form).await.unwrap();
    let created: CreatedBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    (created.id, form)
}

async fn create_trainer(server: &TestServer) -> i64 {
    let response = server.post("/tusers", &TrainerForm::unique()).await.unwrap();
    let created: CreatedBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.id
}

async fn payment_status_of(server: &TestServer, member_id: i64) -> PaymentStatusRow {
    let response = server.get("/api/payment-status").await.unwrap();
    let rows: Vec<PaymentStatusRow> = assert_json(response, StatusCode::OK).await.unwrap();
    rows.into_iter()
        .find(|row| row.id == member_id)
        .expect("member missing from payment status report")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready_follows_scheduler() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();

    server.state().scheduler().start().await;
    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    server.state().scheduler().shutdown().await;
}

// ============================================================================
// Trainer Check-in Tests
// ============================================================================

#[tokio::test]
async fn test_check_in_then_check_out_shows_both_times() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let trainer_id = create_trainer(&server).await;
    let body = json!({ "trainer_id": trainer_id });

    let response = server.post("/check-in-out", &body).await.unwrap();
    let checked_in: CheckInOutBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(checked_in.message, "Checked In");
    assert!(checked_in.check_out_time.is_none());

    let response = server.post("/check-in-out", &body).await.unwrap();
    let checked_out: CheckInOutBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(checked_out.message, "Checked Out");
    assert_eq!(checked_out.check_in_time, checked_in.check_in_time);
    let check_out_time = checked_out.check_out_time.expect("check_out_time missing");

    let response = server.get("/trainers").await.unwrap();
    let rows: Vec<TrainerRow> = assert_json(response, StatusCode::OK).await.unwrap();
    let row = rows
        .into_iter()
        .find(|row| row.id == trainer_id)
        .expect("trainer missing from /trainers");

    assert_eq!(row.check_in_time, Some(checked_in.check_in_time));
    let stored = row.check_out_time.expect("stored check_out_time missing");
    // Postgres keeps microseconds
    assert!((stored - check_out_time).num_milliseconds().abs() < 1);
}

#[tokio::test]
async fn test_new_trainer_has_no_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post("/add-trainer", &TrainerForm::unique()).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let trainer_id = body["trainerId"].as_i64().expect("trainerId missing");

    let response = server.get("/trainers").await.unwrap();
    let rows: Vec<TrainerRow> = assert_json(response, StatusCode::OK).await.unwrap();
    let row = rows.into_iter().find(|row| row.id == trainer_id).unwrap();
    assert!(row.check_in_time.is_none());
    assert!(row.check_out_time.is_none());
}

#[tokio::test]
async fn test_check_in_unknown_trainer() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/check-in-out", &json!({ "trainer_id": i64::MAX }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_TRAINER");
}

// ============================================================================
// Member Attendance Tests
// ============================================================================

#[tokio::test]
async fn test_mark_present_survives_absence_sweep() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (member_id, form) = create_member(&server).await;

    let response = server
        .post("/mark-present", &json!({ "client_id": member_id }))
        .await
        .unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Attendance marked as Present");

    server.sweep_absences().await.unwrap();
    server.sweep_absences().await.unwrap();

    let response = server.get("/clients").await.unwrap();
    let rows: Vec<ClientRow> = assert_json(response, StatusCode::OK).await.unwrap();
    let row = rows.into_iter().find(|row| row.id == member_id).unwrap();
    assert_eq!(row.status.as_deref(), Some("Present"));

    let path = format!("/attendance/mobile/{}", form.mobile);
    let response = server.get(&path).await.unwrap();
    let history: Vec<AttendanceRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, "Present");
}

#[tokio::test]
async fn test_absence_sweep_marks_unmarked_members_absent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (member_id, _) = create_member(&server).await;

    server.sweep_absences().await.unwrap();

    let response = server.get("/clients").await.unwrap();
    let rows: Vec<ClientRow> = assert_json(response, StatusCode::OK).await.unwrap();
    let row = rows.into_iter().find(|row| row.id == member_id).unwrap();
    assert_eq!(row.status.as_deref(), Some("Absent"));
}

#[tokio::test]
async fn test_attendance_for_unknown_mobile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/attendance/mobile/0000000").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Payment Tests
// ============================================================================

#[tokio::test]
async fn test_old_payment_becomes_due_after_sweep() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (stale_id, _) = create_member(&server).await;
    let (fresh_id, _) = create_member(&server).await;

    for (member_id, tx) in [(stale_id, "tx-stale"), (fresh_id, "tx-fresh")] {
        let response = server
            .post(
                "/api/payment",
                &json!({ "user_id": member_id, "amount": 1500, "transaction_id": tx }),
            )
            .await
            .unwrap();
        let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body["message"], "Payment recorded successfully");
        assert_eq!(body["user_id"], member_id);
    }
    assert_eq!(payment_status_of(&server, stale_id).await.payment_status, "Paid");

    server
        .backdate_payment(MemberId::new(stale_id), 31)
        .await
        .unwrap();
    let outcome = server.sweep_payments().await.unwrap();
    assert!(outcome.payments_expired >= 1);

    assert_eq!(payment_status_of(&server, stale_id).await.payment_status, "Due");
    assert_eq!(payment_status_of(&server, fresh_id).await.payment_status, "Paid");
}

#[tokio::test]
async fn test_member_without_payment_is_due() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (member_id, _) = create_member(&server).await;

    let row = payment_status_of(&server, member_id).await;
    assert_eq!(row.payment_status, "Due");
    assert!(row.payment_date.is_none());
}

#[tokio::test]
async fn test_payment_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/payment", &json!({ "user_id": 1, "amount": 0, "transaction_id": "tx" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post(
            "/api/payment",
            &json!({ "user_id": i64::MAX, "amount": 10, "transaction_id": "tx" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_transactions_list_recorded_payment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (member_id, form) = create_member(&server).await;
    server
        .post(
            "/api/payment",
            &json!({ "user_id": member_id, "amount": 999.5, "transaction_id": "tx-history" }),
        )
        .await
        .unwrap();

    let response = server.get("/transaction").await.unwrap();
    let rows: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    let row = rows
        .iter()
        .find(|row| row["user_id"] == member_id)
        .expect("payment missing from /transaction");
    assert_eq!(row["mobile"], form.mobile.as_str());
    assert_eq!(row["transaction_id"], "tx-history");
}

#[tokio::test]
async fn test_payment_reminder_by_member_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (member_id, _) = create_member(&server).await;

    let response = server
        .post("/api/send-payment-reminder", &json!({ "member_id": member_id }))
        .await
        .unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Payment reminder sent successfully!");

    let response = server
        .post("/api/send-payment-reminder", &json!({ "email": "a@example.com" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Member Administration Tests
// ============================================================================

#[tokio::test]
async fn test_member_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (member_id, form) = create_member(&server).await;

    // Duplicate mobile
    let response = server.post("/users", &form).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let path = format!("/users/{member_id}");
    let response = server.patch(&path, &json!({ "program": "Yoga" })).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "User updated successfully");

    let response = server
        .get(&format!("/api/getUserByMobile/{}", form.mobile))
        .await
        .unwrap();
    let envelope: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope["user"]["program"], "Yoga");

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/user/{}", form.mobile)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.patch(&path, &json!({ "program": "Yoga" })).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_register_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let form = MemberForm::unique();

    let response = server.post("/register", &form).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.message, "User registered successfully!");

    let response = server
        .get(&format!("/user/details/mobile/{}", form.mobile))
        .await
        .unwrap();
    let member: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(member["fitness_goals"], json!(["endurance"]));
}

// ============================================================================
// Equipment Tests
// ============================================================================

#[tokio::test]
async fn test_equipment_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/equip", &EquipmentForm::treadmill()).await.unwrap();
    let created: CreatedBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.message, "Equipment added successfully");

    let path = format!("/equip/{}", created.id);
    let response = server.patch(&path, &json!({ "quantity": 5 })).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/equip").await.unwrap();
    let rows: Vec<EquipmentRow> = assert_json(response, StatusCode::OK).await.unwrap();
    let row = rows.into_iter().find(|row| row.id == created.id).unwrap();
    assert_eq!(row.quantity, 5);
    assert!((row.price - 45999.5).abs() < f64::EPSILON);

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_equipment_requires_all_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/equip", &json!({ "name": "Bench", "quantity": 2 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
