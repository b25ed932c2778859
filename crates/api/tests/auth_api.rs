//! HTTP-level integration tests for signup, login, session check, logout,
//! and the session guard on resource routes.

mod common;

use axum::http::{header, StatusCode};
use chrono::{Duration, Utc};
use common::{
    body_json, delete_with_cookie, get, get_with_cookie, post_json, session_cookie_from,
    signup_session,
};
use playbill_api::auth::password::hash_password;
use playbill_api::auth::session::{generate_session_token, hash_session_token};
use playbill_db::models::session::CreateSession;
use playbill_db::models::user::{CreateUser, User};
use playbill_db::repositories::{SessionRepo, UserRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a user directly in the database with the given password.
async fn create_test_user(pool: &SqlitePool, username: &str, password: &str) -> User {
    let password_hash = hash_password(password).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash,
        },
    )
    .await
    .expect("user creation should succeed")
}

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

/// Signup returns 201 with the user form, no password hash, and a session
/// cookie that immediately authenticates.
#[sqlx::test(migrations = "../../db/migrations")]
async fn signup_creates_account_and_logs_in(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/signup",
        serde_json::json!({ "username": "joe", "password": "secretpw" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = session_cookie_from(&response);
    assert!(cookie.starts_with("session="));

    let json = body_json(response).await;
    assert_eq!(json["username"], "joe");
    assert!(json["id"].is_number());
    assert!(
        json.get("password_hash").is_none(),
        "password hash must never leave the server"
    );

    // The fresh cookie is a live session.
    let response = get_with_cookie(app, "/check_session", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["username"], "joe");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 201 with the user form and a session cookie.
#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_user_form_and_cookie(pool: SqlitePool) {
    let user = create_test_user(&pool, "joe", "secretpw").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/login",
        serde_json::json!({ "username": "joe", "password": "secretpw" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = session_cookie_from(&response);

    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["username"], "joe");

    let response = get_with_cookie(app, "/check_session", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Login with an unknown username returns 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn login_unknown_user_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/login",
        serde_json::json!({ "username": "nobody", "password": "whatever" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "User not found");
}

/// Login with a wrong password returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn login_wrong_password_returns_401(pool: SqlitePool) {
    create_test_user(&pool, "joe", "secretpw").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/login",
        serde_json::json!({ "username": "joe", "password": "incorrect" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid password");
}

// ---------------------------------------------------------------------------
// Session check
// ---------------------------------------------------------------------------

/// Without a cookie, /check_session is 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn check_session_without_cookie_returns_401(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/check_session").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Missing session cookie");
}

/// A token that matches no session row is 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn check_session_with_bogus_token_returns_401(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get_with_cookie(app, "/check_session", "session=bogus-token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid session");
}

/// A session keeps resolving across requests until logged out.
#[sqlx::test(migrations = "../../db/migrations")]
async fn session_survives_multiple_requests(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let cookie = signup_session(&app, "joe").await;

    for _ in 0..2 {
        let response = get_with_cookie(app.clone(), "/check_session", &cookie).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

// ---------------------------------------------------------------------------
// Logout
// ---------------------------------------------------------------------------

/// Logout deletes the session row and clears the cookie; the old token
/// never authenticates again.
#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_invalidates_the_session(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let cookie = signup_session(&app, "joe").await;

    let response = delete_with_cookie(app.clone(), "/logout", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The response clears the cookie.
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("logout must clear the cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("session=;"));

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({}));

    // The old token is dead.
    let response = get_with_cookie(app, "/check_session", &cookie).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout without a session is rejected by the guard.
#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_without_session_returns_401(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = delete_with_cookie(app, "/logout", "session=bogus-token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Expiry
// ---------------------------------------------------------------------------

/// An expired session is rejected and its row removed on sight.
#[sqlx::test(migrations = "../../db/migrations")]
async fn expired_session_returns_401_and_is_purged(pool: SqlitePool) {
    let user = create_test_user(&pool, "joe", "secretpw").await;

    let (token, token_hash) = generate_session_token();
    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            token_hash,
            expires_at: Utc::now() - Duration::hours(1),
        },
    )
    .await
    .expect("session creation should succeed");

    let app = common::build_test_app(pool.clone());
    let cookie = format!("session={token}");

    let response = get_with_cookie(app, "/check_session", &cookie).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Session expired");

    // The stale row was dropped during resolution.
    let remaining = SessionRepo::find_by_token_hash(&pool, &hash_session_token(&token))
        .await
        .unwrap();
    assert!(remaining.is_none());
}

// ---------------------------------------------------------------------------
// Guard on resource routes
// ---------------------------------------------------------------------------

/// Resource routes reject requests without a session.
#[sqlx::test(migrations = "../../db/migrations")]
async fn guarded_route_without_session_returns_401(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    for path in ["/owners", "/pets", "/productions", "/cast_members"] {
        let response = get(app.clone(), path).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{path} must require a session"
        );
    }
}

/// Resource routes answer normally once a session is presented.
#[sqlx::test(migrations = "../../db/migrations")]
async fn guarded_route_with_session_succeeds(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let cookie = signup_session(&app, "joe").await;

    let response = get_with_cookie(app, "/owners", &cookie).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}
