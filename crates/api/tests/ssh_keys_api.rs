//! HTTP-level integration tests for the authorized keys store: envelope
//! handling, key shape checks, scoped uniqueness, and id-addressed
//! operations.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

const ED25519_KEY: &str = "AAAAC3NzaC1lZDI1NTE5AAAAIOiKKC7lLUcyvJMo1gjvMr56XvOq814Hhin0OCYFDqT4";

const KEYS_URL: &str = "/build-server/jenkins/authorized_keys";

fn ed25519_request(comment: &str) -> serde_json::Value {
    json!({
        "ssh-key": {
            "type": "ssh-ed25519",
            "public": ED25519_KEY,
            "comment": comment
        }
    })
}

// ---------------------------------------------------------------------------
// Test: registration returns 201 with the assigned id and server scope
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_returns_flat_response_with_id(pool: PgPool) {
    let response = post_json(build_test_app(pool), KEYS_URL, ed25519_request("ci@jenkins")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert!(body["id"].is_i64());
    assert_eq!(body["type"], "ssh-ed25519");
    assert_eq!(body["public"], ED25519_KEY);
    assert_eq!(body["comment"], "ci@jenkins");
    assert_eq!(body["serverType"], "build-server");
    assert_eq!(body["serverName"], "jenkins");
    // The response is flat, never re-wrapped in the request envelope.
    assert!(body.get("ssh-key").is_none());
}

// ---------------------------------------------------------------------------
// Test: the same key under the same server is rejected with 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_key_in_same_scope_returns_400(pool: PgPool) {
    let app = build_test_app(pool);

    let first = post_json(app.clone(), KEYS_URL, ed25519_request("ci@jenkins")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app, KEYS_URL, ed25519_request("other comment")).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let body = body_json(second).await;
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["message"], "SSH key already exists");
}

// ---------------------------------------------------------------------------
// Test: the same key under a different server is a new record
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn same_key_under_other_server_is_accepted(pool: PgPool) {
    let app = build_test_app(pool);

    let first = post_json(app.clone(), KEYS_URL, ed25519_request("ci@jenkins")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(
        app,
        "/web-server/nginx/authorized_keys",
        ed25519_request("ci@jenkins"),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CREATED);
    assert_eq!(body_json(second).await["serverType"], "web-server");
}

// ---------------------------------------------------------------------------
// Test: a too-short ed25519 blob fails the shape check
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn short_ed25519_key_returns_400(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        KEYS_URL,
        json!({"ssh-key": {"type": "ssh-ed25519", "public": "TEST-ED25519"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "The content of the public key is invalid for the type 'ed25519'"
    );
}

// ---------------------------------------------------------------------------
// Test: a too-short ssh-rsa blob fails the shape check
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn short_rsa_key_returns_400(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        KEYS_URL,
        json!({"ssh-key": {"type": "ssh-rsa", "public": "AAAAB3NzaC1yc2E"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "The content of the public key is invalid for the type 'ssh-rsa'"
    );
}

// ---------------------------------------------------------------------------
// Test: missing envelope and fields produce the per-field validation map
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_without_envelope_returns_validation_errors(pool: PgPool) {
    let response = post_json(build_test_app(pool), KEYS_URL, json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["validationErrors"]["ssh-key"], "SSH key payload is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_empty_key_returns_validation_errors(pool: PgPool) {
    let response = post_json(build_test_app(pool), KEYS_URL, json!({"ssh-key": {}})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["validationErrors"]["type"], "SSH key type is required");
    assert_eq!(body["validationErrors"]["public"], "Public key is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_unknown_key_type_returns_pattern_error(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        KEYS_URL,
        json!({"ssh-key": {"type": "ssh-dss", "public": ED25519_KEY}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["validationErrors"]["type"],
        "must match \"^(ssh-rsa|ssh-ed25519)$\""
    );
}

// ---------------------------------------------------------------------------
// Test: list returns every key for the scope in insertion order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_keys_in_id_order(pool: PgPool) {
    let app = build_test_app(pool);

    post_json(app.clone(), KEYS_URL, ed25519_request("first")).await;
    post_json(
        app.clone(),
        KEYS_URL,
        json!({"ssh-key": {"type": "ssh-ed25519", "public": "A".repeat(64), "comment": "second"}}),
    )
    .await;
    // A key under another server must not leak into this scope.
    post_json(
        app.clone(),
        "/web-server/nginx/authorized_keys",
        ed25519_request("elsewhere"),
    )
    .await;

    let response = get(app, KEYS_URL).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let list = body.as_array().expect("list body should be an array");
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["comment"], "first");
    assert_eq!(list[1]["comment"], "second");
}

// ---------------------------------------------------------------------------
// Test: lookup by id, and 404 with the exact message for an unknown id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_id_and_unknown_id(pool: PgPool) {
    let app = build_test_app(pool);

    let created = post_json(app.clone(), KEYS_URL, ed25519_request("ci@jenkins")).await;
    let id = body_json(created).await["id"].as_i64().unwrap();

    let found = get(app.clone(), &format!("{KEYS_URL}/{id}")).await;
    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(body_json(found).await["id"], id);

    let missing = get(app, &format!("{KEYS_URL}/{}", id + 1)).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(missing).await["message"], "SSH key not found");
}

// ---------------------------------------------------------------------------
// Test: a comment-only PUT merges without touching the key material
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_comment_preserves_key_material(pool: PgPool) {
    let app = build_test_app(pool);

    let created = post_json(app.clone(), KEYS_URL, ed25519_request("ci@jenkins")).await;
    let id = body_json(created).await["id"].as_i64().unwrap();

    let response = put_json(
        app,
        &format!("{KEYS_URL}/{id}"),
        json!({"ssh-key": {"comment": "rotated 2026-08"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["comment"], "rotated 2026-08");
    assert_eq!(body["type"], "ssh-ed25519");
    assert_eq!(body["public"], ED25519_KEY);
}

// ---------------------------------------------------------------------------
// Test: PUT rejects a type outside the permitted pattern
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_rejects_unknown_key_type(pool: PgPool) {
    let app = build_test_app(pool);

    let created = post_json(app.clone(), KEYS_URL, ed25519_request("ci@jenkins")).await;
    let id = body_json(created).await["id"].as_i64().unwrap();

    let response = put_json(
        app,
        &format!("{KEYS_URL}/{id}"),
        json!({"ssh-key": {"type": "ecdsa-sha2-nistp256"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Validation failed");
}

// ---------------------------------------------------------------------------
// Test: PUT on an unknown id returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_unknown_id_returns_404(pool: PgPool) {
    let response = put_json(
        build_test_app(pool),
        &format!("{KEYS_URL}/42"),
        json!({"ssh-key": {"comment": "none"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "SSH key not found");
}

// ---------------------------------------------------------------------------
// Test: delete, then read and delete again both miss
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_then_read_returns_404(pool: PgPool) {
    let app = build_test_app(pool);

    let created = post_json(app.clone(), KEYS_URL, ed25519_request("ci@jenkins")).await;
    let id = body_json(created).await["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("{KEYS_URL}/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let read_back = get(app.clone(), &format!("{KEYS_URL}/{id}")).await;
    assert_eq!(read_back.status(), StatusCode::NOT_FOUND);

    let again = delete(app, &format!("{KEYS_URL}/{id}")).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(again).await["message"], "SSH key not found");
}
