use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use betterct::api::{create_router, AppState, SecurityConfig};
use betterct::config::AppConfig;
use betterct::db::Database;
use betterct::identity::{
    Credentials, IdentityError, IdentityProvider, KeyEnvironment, PublishableKey, Session,
    StaticIdentity,
};
use betterct::models::*;
use serde_json::{json, Value};
use uuid::Uuid;

const ALICE: &str = "tok_alice";
const BOB: &str = "tok_bob";
const CAROL: &str = "tok_carol";

fn config() -> AppConfig {
    AppConfig::for_key(PublishableKey::for_host(KeyEnvironment::Test, "clerk.betterct.test"))
}

fn identity() -> StaticIdentity {
    StaticIdentity::new()
        .with_user(ALICE, "user_alice")
        .with_user(BOB, "user_bob")
        .with_org_user(CAROL, "user_carol", "org_acme")
}

fn server_with(identity: Arc<dyn IdentityProvider>, security: SecurityConfig) -> TestServer {
    let db = Database::open_memory().expect("Failed to create database");
    db.migrate().expect("Failed to migrate");
    let app = create_router(AppState::new(config(), identity, db), security);
    TestServer::new(app).expect("Failed to create test server")
}

fn setup() -> TestServer {
    server_with(Arc::new(identity()), SecurityConfig::disabled())
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

async fn create_task(server: &TestServer, token: &str, title: &str) -> Task {
    server
        .post("/api/tasks")
        .add_header(header::AUTHORIZATION, bearer(token))
        .json(&json!({ "title": title }))
        .await
        .json::<Task>()
}

/// Provider that is always down.
struct UnreachableIdentity;

#[async_trait]
impl IdentityProvider for UnreachableIdentity {
    async fn session(&self, _credentials: &Credentials) -> Result<Option<Session>, IdentityError> {
        Err(IdentityError::Upstream("connection refused".into()))
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn is_public() {
        let server = setup();

        let response = server.get("/api/health").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
    }
}

mod authentication {
    use super::*;

    #[tokio::test]
    async fn missing_credentials_are_unauthorized() {
        let server = setup();

        let response = server.get("/api/tasks").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["error"], "unauthorized");
    }

    #[tokio::test]
    async fn invalid_token_is_unauthorized() {
        let server = setup();

        server
            .get("/api/tasks")
            .add_header(header::AUTHORIZATION, bearer("tok_forged"))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn session_cookie_is_accepted() {
        let server = setup();

        server
            .get("/api/tasks")
            .add_header(header::COOKIE, HeaderValue::from_static("__session=tok_alice"))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn provider_outage_is_service_unavailable() {
        let server = server_with(Arc::new(UnreachableIdentity), SecurityConfig::disabled());

        let response = server
            .get("/api/tasks")
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = response.json();
        assert_eq!(body["error"], "identity_unavailable");
    }

    #[tokio::test]
    async fn provider_outage_renders_protected_page_as_signed_out() {
        let server = server_with(Arc::new(UnreachableIdentity), SecurityConfig::disabled());

        server
            .get("/project-management")
            .add_header(header::COOKIE, HeaderValue::from_static("__session=tok_alice"))
            .await
            .assert_status(StatusCode::SEE_OTHER);
    }
}

mod tasks {
    use super::*;

    #[tokio::test]
    async fn create_returns_created_task_in_backlog() {
        let server = setup();

        let response = server
            .post("/api/tasks")
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .json(&json!({ "title": "  Draft pricing page ", "description": "Three tiers" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let task: Task = response.json();
        assert_eq!(task.title, "Draft pricing page");
        assert_eq!(task.description.as_deref(), Some("Three tiers"));
        assert_eq!(task.status, TaskStatus::Backlog);
        assert_eq!(task.org_id, "user_alice");
        assert_eq!(task.created_by, "user_alice");
    }

    #[tokio::test]
    async fn blank_title_is_a_bad_request() {
        let server = setup();

        let response = server
            .post("/api/tasks")
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .json(&json!({ "title": "   " }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn list_returns_tasks_in_creation_order() {
        let server = setup();
        create_task(&server, ALICE, "First").await;
        create_task(&server, ALICE, "Second").await;

        let tasks: Vec<Task> = server
            .get("/api/tasks")
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .await
            .json();

        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let server = setup();
        let task = create_task(&server, ALICE, "Move me").await;
        create_task(&server, ALICE, "Stay").await;

        server
            .patch(&format!("/api/tasks/{}/status", task.id))
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .json(&TaskStatusUpdate {
                status: TaskStatus::InReview,
            })
            .await
            .assert_status_ok();

        let in_review: Vec<Task> = server
            .get("/api/tasks?status=in_review")
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .await
            .json();
        assert_eq!(in_review.len(), 1);
        assert_eq!(in_review[0].id, task.id);

        server
            .get("/api/tasks?status=archived")
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let server = setup();
        let task = create_task(&server, ALICE, "Original").await;

        let updated: Task = server
            .put(&format!("/api/tasks/{}", task.id))
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .json(&json!({ "description": "Now with details" }))
            .await
            .json();

        assert_eq!(updated.title, "Original");
        assert_eq!(updated.description.as_deref(), Some("Now with details"));
        assert_eq!(updated.status, TaskStatus::Backlog);
    }

    #[tokio::test]
    async fn update_with_null_description_clears_it() {
        let server = setup();
        let created: Task = server
            .post("/api/tasks")
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .json(&json!({ "title": "Described", "description": "Old notes" }))
            .await
            .json();

        let updated: Task = server
            .put(&format!("/api/tasks/{}", created.id))
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .json(&json!({ "description": null }))
            .await
            .json();

        assert_eq!(updated.title, "Described");
        assert_eq!(updated.description, None);
    }

    #[tokio::test]
    async fn delete_removes_the_task() {
        let server = setup();
        let task = create_task(&server, ALICE, "Short lived").await;

        server
            .delete(&format!("/api/tasks/{}", task.id))
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        server
            .get(&format!("/api/tasks/{}", task.id))
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn unknown_task_is_not_found() {
        let server = setup();

        let response = server
            .get(&format!("/api/tasks/{}", Uuid::new_v4()))
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["error"], "not_found");
    }
}

mod malformed_requests {
    use super::*;

    #[tokio::test]
    async fn bad_task_id_answers_json() {
        let server = setup();

        let response = server
            .get("/api/tasks/not-a-uuid")
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn unreadable_body_answers_json() {
        let server = setup();

        let response = server
            .post("/api/tasks")
            .add_header(header::AUTHORIZATION, bearer(ALICE))
            .json(&json!({ "description": "no title" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}

mod workspaces {
    use super::*;

    #[tokio::test]
    async fn tasks_are_invisible_to_other_users() {
        let server = setup();
        let task = create_task(&server, ALICE, "Private").await;

        server
            .get(&format!("/api/tasks/{}", task.id))
            .add_header(header::AUTHORIZATION, bearer(BOB))
            .await
            .assert_status_not_found();

        server
            .delete(&format!("/api/tasks/{}", task.id))
            .add_header(header::AUTHORIZATION, bearer(BOB))
            .await
            .assert_status_not_found();

        let bobs: Vec<Task> = server
            .get("/api/tasks")
            .add_header(header::AUTHORIZATION, bearer(BOB))
            .await
            .json();
        assert!(bobs.is_empty());
    }

    #[tokio::test]
    async fn organization_sessions_share_the_org_workspace() {
        let server = setup();

        let task = create_task(&server, CAROL, "Org roadmap").await;

        assert_eq!(task.org_id, "org_acme");
        assert_eq!(task.created_by, "user_carol");
    }
}

mod rate_limiting {
    use super::*;
    use betterct::api::RateLimiter;
    use std::time::Duration;

    #[tokio::test]
    async fn requests_over_the_limit_are_rejected() {
        let security = SecurityConfig {
            cors_origins: None,
            rate_limiter: Some(RateLimiter::new(2, Duration::from_secs(60))),
        };
        let server = server_with(Arc::new(identity()), security);

        server.get("/api/health").await.assert_status_ok();
        server.get("/api/health").await.assert_status_ok();

        let response = server.get("/api/health").await;
        response.assert_status(StatusCode::TOO_MANY_REQUESTS);
        let body: Value = response.json();
        assert_eq!(body["error"], "rate_limited");
    }

    #[tokio::test]
    async fn pages_are_not_rate_limited() {
        let security = SecurityConfig {
            cors_origins: None,
            rate_limiter: Some(RateLimiter::new(1, Duration::from_secs(60))),
        };
        let server = server_with(Arc::new(identity()), security);

        for _ in 0..3 {
            server.get("/").await.assert_status_ok();
        }
    }
}

mod unknown_endpoints {
    use super::*;

    #[tokio::test]
    async fn answer_json_not_found() {
        let server = setup();

        let response = server.get("/api/projects").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["error"], "not_found");
    }
}
