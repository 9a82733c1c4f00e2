mod error;
mod handlers;
pub mod middleware;
mod pages;

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::db::Database;
use crate::identity::IdentityProvider;
use crate::router::RouteTable;
use crate::theme::Theme;

pub use error::ApiError;
pub use middleware::{RateLimiter, SecurityConfig};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub identity: Arc<dyn IdentityProvider>,
    pub db: Database,
    pub theme: Arc<Theme>,
    pub routes: Arc<RouteTable>,
}

impl AppState {
    pub fn new(config: AppConfig, identity: Arc<dyn IdentityProvider>, db: Database) -> Self {
        let theme = if config.plain_theme {
            Theme::plain()
        } else {
            Theme::default()
        };

        Self {
            config: Arc::new(config),
            identity,
            db,
            theme: Arc::new(theme),
            routes: Arc::new(RouteTable::standard()),
        }
    }
}

/// Build the application from an already validated configuration.
pub fn build_app(config: AppConfig, identity: Arc<dyn IdentityProvider>, db: Database) -> Router {
    let security = SecurityConfig::from_config(&config);
    create_router(AppState::new(config, identity, db), security)
}

pub fn create_router(state: AppState, security: SecurityConfig) -> Router {
    let tasks = Router::new()
        .route("/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route(
            "/tasks/{id}",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .route("/tasks/{id}/status", patch(handlers::update_task_status))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_api_session,
        ));

    let mut api = tasks
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found);

    if let Some(limiter) = security.rate_limiter.clone() {
        api = api.layer(axum::middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ));
    }

    Router::new()
        .nest("/api", api.layer(security.cors_layer()))
        .route("/preferences/theme", get(pages::set_color_mode))
        .fallback(pages::serve_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{KeyEnvironment, PublishableKey, StaticIdentity};
    use axum::body::Body;
    use axum::extract::ConnectInfo;
    use axum::http::{header, Method, Request, StatusCode};
    use std::net::SocketAddr;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> Router {
        let db = Database::open_memory().unwrap();
        db.migrate().unwrap();
        let config =
            AppConfig::for_key(PublishableKey::for_host(KeyEnvironment::Test, "clerk.example.com"));
        build_app(config, Arc::new(StaticIdentity::new()), db)
    }

    #[tokio::test]
    async fn head_requests_reach_pages() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::HEAD)
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("accept-ch"));
    }

    #[tokio::test]
    async fn protected_page_redirect_uses_see_other() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/project-management")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/sign-in?redirect_url=%2Fproject-management"
        );
    }

    fn limited_app(limiter: RateLimiter) -> Router {
        let db = Database::open_memory().unwrap();
        db.migrate().unwrap();
        let config =
            AppConfig::for_key(PublishableKey::for_host(KeyEnvironment::Test, "clerk.example.com"));
        let security = SecurityConfig {
            cors_origins: None,
            rate_limiter: Some(limiter),
        };
        create_router(
            AppState::new(config, Arc::new(StaticIdentity::new()), db),
            security,
        )
    }

    async fn health_from(app: &Router, peer: &str, forwarded: Option<&str>) -> StatusCode {
        let mut builder = Request::builder().uri("/api/health");
        if let Some(forwarded) = forwarded {
            builder = builder.header("X-Forwarded-For", forwarded);
        }
        let mut request = builder.body(Body::empty()).unwrap();
        let addr: SocketAddr = peer.parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));

        app.clone().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn rate_limit_is_per_peer_and_ignores_forged_headers() {
        let app = limited_app(RateLimiter::new(2, Duration::from_secs(60)));

        assert_eq!(health_from(&app, "198.51.100.1:4000", None).await, StatusCode::OK);
        assert_eq!(health_from(&app, "198.51.100.1:4001", None).await, StatusCode::OK);
        assert_eq!(health_from(&app, "203.0.113.5:4000", None).await, StatusCode::OK);

        assert_eq!(
            health_from(&app, "198.51.100.1:4002", Some("1.2.3.4")).await,
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[tokio::test]
    async fn trusted_proxy_splits_clients_by_forwarded_header() {
        let app = limited_app(RateLimiter::new(1, Duration::from_secs(60)).trust_forwarded(true));

        assert_eq!(health_from(&app, "10.0.0.1:443", Some("1.2.3.4")).await, StatusCode::OK);
        assert_eq!(health_from(&app, "10.0.0.1:443", Some("5.6.7.8")).await, StatusCode::OK);
        assert_eq!(
            health_from(&app, "10.0.0.1:443", Some("1.2.3.4")).await,
            StatusCode::TOO_MANY_REQUESTS
        );
    }
}
