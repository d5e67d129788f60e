//! API Integration Tests
//!
//! Each test spawns a server on a free port backed by the in-memory
//! account store and a manual clock; no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use backoffice_core::{Actor, StaffRole};
use chrono::Duration;
use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

async fn provision(server: &TestServer, request: &ProvisionRequest) {
    let response = server
        .post_auth("/api/users", &server.staff_token, request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

async fn profile(server: &TestServer, user_type: &str, user_id: &str) -> ProfileResponse {
    let response = server
        .get_auth(
            &format!("/api/profile/{user_type}/{user_id}"),
            &server.staff_token,
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn audit_actions(server: &TestServer, user_id: &str) -> Vec<String> {
    let response = server
        .get_auth(&format!("/api/users/{user_id}/audit"), &server.staff_token)
        .await
        .unwrap();
    let log: AuditLogResponse = assert_json(response, StatusCode::OK).await.unwrap();
    log.entries.into_iter().map(|entry| entry.action).collect()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["repository"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/api/profile/status", &json!({ "userId": "x" }))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get_auth("/api/profile/jobseeker/anyone", "not-a-jwt")
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.code, "INVALID_TOKEN");
}

// ============================================================================
// Provisioning & Profile Tests
// ============================================================================

#[tokio::test]
async fn test_provision_and_get_profile() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::recruiter();
    provision(&server, &request).await;

    let profile = profile(&server, "recruiter", &request.user_id).await;
    assert_eq!(profile.id, request.user_id);
    assert_eq!(profile.user_type, "recruiter");
    assert_eq!(profile.status, "active");
    assert_eq!(profile.profile["firstName"], request.profile["firstName"]);
    assert!(profile.badges.is_empty());
}

#[tokio::test]
async fn test_provision_duplicate_is_conflict() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::jobseeker();
    provision(&server, &request).await;

    let response = server
        .post_auth("/api/users", &server.staff_token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.code, "USER_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_get_profile_errors() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::jobseeker();
    provision(&server, &request).await;

    let response = server
        .get_auth(
            &format!("/api/profile/admin/{}", request.user_id),
            &server.staff_token,
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "Invalid user type");

    let response = server
        .get_auth("/api/profile/jobseeker/nobody", &server.staff_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_profile() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::jobseeker();
    provision(&server, &request).await;
    let path = format!("/api/profile/jobseeker/{}", request.user_id);

    let response = server
        .patch_auth(&path, &server.staff_token, &json!({ "city": "Porto" }))
        .await
        .unwrap();
    let ack: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(ack.success);

    let updated = profile(&server, "jobseeker", &request.user_id).await;
    assert_eq!(updated.profile["city"], "Porto");

    // Lifecycle fields cannot be edited through the profile
    let response = server
        .patch_auth(&path, &server.staff_token, &json!({ "status": "active" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Moderation Action Tests
// ============================================================================

#[tokio::test]
async fn test_suspend_and_unsuspend() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::jobseeker();
    provision(&server, &request).await;

    let response = server
        .post_auth(
            "/api/profile/status",
            &server.staff_token,
            &ActionRequest::suspend(&request.user_id, "2024-03-01", "2024-03-08"),
        )
        .await
        .unwrap();
    let outcome: ActionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.new_status, "suspended");
    assert!(outcome.notified);

    let suspended = profile(&server, "jobseeker", &request.user_id).await;
    assert!(suspended.suspension.is_some());

    let response = server
        .post_auth(
            "/api/profile/status",
            &server.staff_token,
            &ActionRequest::new(&request.user_id, "unsuspend", "Appeal accepted"),
        )
        .await
        .unwrap();
    let outcome: ActionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(outcome.new_status, "active");

    let restored = profile(&server, "jobseeker", &request.user_id).await;
    assert!(restored.suspension.is_none());

    assert_eq!(
        audit_actions(&server, &request.user_id).await,
        vec![
            "account.provisioned",
            "account.suspended",
            "account.unsuspended"
        ]
    );
}

#[tokio::test]
async fn test_suspend_without_window_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::jobseeker();
    provision(&server, &request).await;

    let response = server
        .post_auth(
            "/api/profile/status",
            &server.staff_token,
            &ActionRequest::new(&request.user_id, "suspend", "spam"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let unchanged = profile(&server, "jobseeker", &request.user_id).await;
    assert_eq!(unchanged.status, "active");
}

#[tokio::test]
async fn test_invalid_action() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::jobseeker();
    provision(&server, &request).await;

    let response = server
        .post_auth(
            "/api/profile/status",
            &server.staff_token,
            &ActionRequest::new(&request.user_id, "ban", "spam"),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "Invalid action");
}

#[tokio::test]
async fn test_missing_fields() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_auth(
            "/api/profile/status",
            &server.staff_token,
            &json!({ "userId": "someone" }),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "Missing required fields");
    assert_eq!(error.code, "VALIDATION_ERROR");
    let details = error.details.unwrap();
    assert!(details.get("action").is_some());
    assert!(details.get("reason").is_some());
}

#[tokio::test]
async fn test_block_twice_records_both() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::recruiter();
    provision(&server, &request).await;

    for reason in ["Fraudulent listings", "Repeated fraudulent listings"] {
        let block = ActionRequest::new(&request.user_id, "block", reason);
        let response = server
            .post_auth("/api/profile/status", &server.staff_token, &block)
            .await
            .unwrap();
        let outcome: ActionResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(outcome.new_status, "blocked");
        assert!(outcome.notified);
    }

    let actions = audit_actions(&server, &request.user_id).await;
    assert_eq!(actions, vec!["account.provisioned", "account.blocked", "account.blocked"]);
}

#[tokio::test]
async fn test_suspend_blocked_account() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::jobseeker();
    provision(&server, &request).await;

    let response = server
        .post_auth(
            "/api/profile/status",
            &server.staff_token,
            &ActionRequest::new(&request.user_id, "block", "Chargeback fraud"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            "/api/profile/status",
            &server.staff_token,
            &ActionRequest::suspend(&request.user_id, "2024-03-01", "2024-03-15"),
        )
        .await
        .unwrap();
    let outcome: ActionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(outcome.new_status, "suspended");
}

// ============================================================================
// User Administration Tests
// ============================================================================

#[tokio::test]
async fn test_legacy_block_deactivates() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::jobseeker();
    provision(&server, &request).await;

    let response = server
        .post_auth(
            "/api/users/block",
            &server.staff_token,
            &json!({ "userId": request.user_id }),
        )
        .await
        .unwrap();
    let body: StatusChangeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
    assert_eq!(body.data.user_id, request.user_id);
    assert_eq!(body.data.status, "inactive");
    assert_eq!(body.data.reason.as_deref(), Some("Deactivated by staff"));
}

#[tokio::test]
async fn test_change_status() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::jobseeker();
    provision(&server, &request).await;

    let response = server
        .patch_auth(
            "/api/users/status",
            &server.staff_token,
            &json!({ "userId": request.user_id, "status": "blocked", "reason": "Chargebacks" }),
        )
        .await
        .unwrap();
    let body: StatusChangeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.status, "blocked");

    // Suspension needs a window, so it has its own endpoint
    let response = server
        .patch_auth(
            "/api/users/status",
            &server.staff_token,
            &json!({ "userId": request.user_id, "status": "suspended" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_suspend_endpoint() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::recruiter();
    provision(&server, &request).await;

    let response = server
        .post_auth(
            "/api/users/suspend",
            &server.staff_token,
            &json!({
                "userId": request.user_id,
                "startDate": "2024-03-01",
                "endDate": "2024-03-15",
                "reason": "Misleading job ads",
            }),
        )
        .await
        .unwrap();
    let body: StatusChangeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.status, "suspended");
    assert_eq!(body.data.start_date.as_deref(), Some("2024-03-01"));
    assert_eq!(body.data.end_date.as_deref(), Some("2024-03-15"));

    let response = server
        .post_auth(
            "/api/users/suspend",
            &server.staff_token,
            &json!({
                "userId": request.user_id,
                "startDate": "2024-03-20",
                "endDate": "2024-03-10",
                "reason": "Backwards window",
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_delete_and_cancel() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::jobseeker();
    provision(&server, &request).await;

    let response = server
        .post_auth(
            "/api/users/delete",
            &server.staff_token,
            &json!({ "userId": request.user_id, "reason": "User request" }),
        )
        .await
        .unwrap();
    let body: StatusChangeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.status, "pending-deletion");
    assert!(body.data.deletion_date.is_some());

    // Activation does not bypass cancellation
    let response = server
        .post_auth(
            "/api/profile/status",
            &server.staff_token,
            &ActionRequest::new(&request.user_id, "activate", "oops"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .post_auth(
            "/api/users/deletion/cancel",
            &server.staff_token,
            &json!({ "userId": request.user_id }),
        )
        .await
        .unwrap();
    let body: StatusChangeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.status, "active");

    let restored = profile(&server, "jobseeker", &request.user_id).await;
    assert!(restored.deletion_scheduled_at.is_none());
}

#[tokio::test]
async fn test_delete_twice_keeps_deadline_and_block_overrides() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::recruiter();
    provision(&server, &request).await;
    let delete = json!({ "userId": request.user_id, "reason": "User request" });

    let response = server
        .post_auth("/api/users/delete", &server.staff_token, &delete)
        .await
        .unwrap();
    let first: StatusChangeResponse = assert_json(response, StatusCode::OK).await.unwrap();

    server.clock.advance(Duration::days(3));
    let response = server
        .post_auth("/api/users/delete", &server.staff_token, &delete)
        .await
        .unwrap();
    let second: StatusChangeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.data.status, "pending-deletion");
    assert_eq!(second.data.deletion_date, first.data.deletion_date);
    assert_eq!(audit_actions(&server, &request.user_id).await.len(), 2);

    let response = server
        .post_auth(
            "/api/profile/status",
            &server.staff_token,
            &ActionRequest::new(&request.user_id, "block", "Fraud found during grace period"),
        )
        .await
        .unwrap();
    let outcome: ActionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(outcome.new_status, "blocked");

    let blocked = profile(&server, "recruiter", &request.user_id).await;
    assert!(blocked.deletion_scheduled_at.is_none());

    // The sweeper leaves a blocked account alone
    server.clock.advance(Duration::days(40));
    assert_eq!(server.sweep().await.unwrap().finalized, 0);
    assert_eq!(profile(&server, "recruiter", &request.user_id).await.status, "blocked");
}

#[tokio::test]
async fn test_deletion_is_finalized_after_grace_period() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::jobseeker();
    provision(&server, &request).await;

    let response = server
        .post_auth(
            "/api/users/delete",
            &server.staff_token,
            &json!({ "userId": request.user_id, "reason": "User request" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Not yet due
    assert_eq!(server.sweep().await.unwrap().finalized, 0);

    server.clock.advance(Duration::days(31));
    assert_eq!(server.sweep().await.unwrap().finalized, 1);

    let deleted = profile(&server, "jobseeker", &request.user_id).await;
    assert_eq!(deleted.status, "deleted");
    assert!(!deleted.profile.contains_key("firstName"));

    // Deleted is terminal
    let response = server
        .post_auth(
            "/api/users/deletion/cancel",
            &server.staff_token,
            &json!({ "userId": request.user_id }),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.code, "TERMINAL_STATE");

    let actions = audit_actions(&server, &request.user_id).await;
    assert_eq!(actions.last().map(String::as_str), Some("account.deleted"));
}

// ============================================================================
// Badge Tests
// ============================================================================

#[tokio::test]
async fn test_add_and_remove_badge() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::recruiter();
    provision(&server, &request).await;

    let response = server
        .post_auth(
            "/api/profile/badges",
            &server.staff_token,
            &json!({ "userId": request.user_id, "label": "Verified", "reason": "KYC passed" }),
        )
        .await
        .unwrap();
    let created: BadgeCreatedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(created.success);
    assert_eq!(created.badge.label, "Verified");
    assert_eq!(created.badge.added_by, "Morgan");

    let with_badge = profile(&server, "recruiter", &request.user_id).await;
    assert_eq!(with_badge.badges.len(), 1);

    // Owner is resolved from the badge id
    let response = server
        .delete_auth(
            "/api/profile/badges",
            &server.staff_token,
            &[("badgeId", created.badge.id.as_str()), ("reason", "Expired")],
        )
        .await
        .unwrap();
    let ack: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(ack.success);

    let without_badge = profile(&server, "recruiter", &request.user_id).await;
    assert!(without_badge.badges.is_empty());
}

#[tokio::test]
async fn test_badge_errors() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_auth(
            "/api/profile/badges",
            &server.staff_token,
            &json!({ "userId": "someone", "label": "Verified" }),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "Missing required fields");

    let unknown = uuid::Uuid::new_v4().to_string();
    let response = server
        .delete_auth(
            "/api/profile/badges",
            &server.staff_token,
            &[("badgeId", unknown.as_str()), ("reason", "cleanup")],
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .delete_auth(
            "/api/profile/badges",
            &server.staff_token,
            &[("badgeId", "badge-1700000000000"), ("reason", "cleanup")],
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.code, "UNKNOWN_BADGE");

    let response = server
        .delete_auth("/api/profile/badges", &server.staff_token, &[])
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "Missing required fields");
}

// ============================================================================
// Note Tests
// ============================================================================

#[tokio::test]
async fn test_private_notes_are_filtered() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::jobseeker();
    provision(&server, &request).await;

    for (content, is_private) in [("Called the user", false), ("Suspected alt account", true)] {
        let response = server
            .post_auth(
                "/api/profile/notes",
                &server.staff_token,
                &json!({
                    "userId": request.user_id,
                    "content": content,
                    "category": "dispute",
                    "isPrivate": is_private,
                }),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let path = format!("/api/profile/notes?userId={}", request.user_id);

    let response = server.get_auth(&path, &server.staff_token).await.unwrap();
    let own: NotesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(own.notes.len(), 2);
    assert_eq!(own.notes[0].content, "Called the user");

    let colleague = server
        .token_for(&Actor::new("staff-2", "Kim", StaffRole::Staff))
        .unwrap();
    let response = server.get_auth(&path, &colleague).await.unwrap();
    let visible: NotesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(visible.notes.len(), 1);
    assert!(!visible.notes[0].is_private);

    let super_admin = server
        .token_for(&Actor::new("root-1", "Avery", StaffRole::SuperAdmin))
        .unwrap();
    let response = server.get_auth(&path, &super_admin).await.unwrap();
    let all: NotesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.notes.len(), 2);
}

#[tokio::test]
async fn test_list_notes_requires_user_id() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get_auth("/api/profile/notes", &server.staff_token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "User ID is required");
}

#[tokio::test]
async fn test_note_content_stays_out_of_audit() {
    let server = TestServer::start().await.unwrap();
    let request = ProvisionRequest::jobseeker();
    provision(&server, &request).await;

    let response = server
        .post_auth(
            "/api/profile/notes",
            &server.staff_token,
            &json!({
                "userId": request.user_id,
                "content": "Sensitive detail",
                "category": "fraud",
            }),
        )
        .await
        .unwrap();
    let created: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(created["note"]["isPrivate"], false);

    let response = server
        .get_auth(
            &format!("/api/users/{}/audit", request.user_id),
            &server.staff_token,
        )
        .await
        .unwrap();
    let log: AuditLogResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let entry = log.entries.last().unwrap();
    assert_eq!(entry.action, "note.added");
    assert_eq!(entry.actor_id, "staff-1");
    assert!(entry.details.get("content").is_none());
}

#[tokio::test]
async fn test_audit_for_unknown_user() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get_auth("/api/users/nobody/audit", &server.staff_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
