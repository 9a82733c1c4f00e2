//! Security middleware for API sessions, CORS and rate limiting.

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::{
    collections::HashMap,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use tower_http::cors::{Any, CorsLayer};

use super::error::ApiError;
use super::AppState;
use crate::config::AppConfig;
use crate::identity::Credentials;

/// Security settings for the `/api` routes, derived from [`AppConfig`].
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Allowed CORS origins. `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
    /// Rate limiter instance. `None` disables rate limiting.
    pub rate_limiter: Option<RateLimiter>,
}

impl SecurityConfig {
    pub fn from_config(config: &AppConfig) -> Self {
        let rate_limiter = if config.rate_limit > 0 {
            Some(
                RateLimiter::new(config.rate_limit, Duration::from_secs(60))
                    .trust_forwarded(config.trust_forwarded),
            )
        } else {
            None
        };

        Self {
            cors_origins: config.cors_origins.clone(),
            rate_limiter,
        }
    }

    /// No CORS restriction and no rate limiting.
    pub fn disabled() -> Self {
        Self {
            cors_origins: None,
            rate_limiter: None,
        }
    }

    pub fn cors_layer(&self) -> CorsLayer {
        match &self.cors_origins {
            Some(origins) => {
                let origins: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|origin| match origin.parse() {
                        Ok(value) => Some(value),
                        Err(_) => {
                            tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                            None
                        }
                    })
                    .collect();
                CorsLayer::new()
                    .allow_origin(origins)
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
            None => CorsLayer::permissive(),
        }
    }
}

/// Simple in-memory rate limiter using sliding window.
///
/// Clients are keyed on the peer address. Proxy headers are only consulted
/// when [`RateLimiter::trust_forwarded`] is enabled.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    /// Maximum requests allowed per window
    max_requests: u32,
    /// Time window duration
    window: Duration,
    trust_forwarded: bool,
    state: Arc<Mutex<LimiterState>>,
}

#[derive(Debug)]
struct LimiterState {
    /// Request timestamps per IP
    requests: HashMap<IpAddr, Vec<Instant>>,
    last_sweep: Instant,
}

impl LimiterState {
    fn sweep(&mut self, cutoff: Instant, now: Instant) {
        self.requests.retain(|_, timestamps| {
            timestamps.retain(|&t| t > cutoff);
            !timestamps.is_empty()
        });
        self.last_sweep = now;
    }
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            trust_forwarded: false,
            state: Arc::new(Mutex::new(LimiterState {
                requests: HashMap::new(),
                last_sweep: Instant::now(),
            })),
        }
    }

    /// Key clients on `X-Forwarded-For` / `X-Real-IP` when present.
    pub fn trust_forwarded(mut self, trust: bool) -> Self {
        self.trust_forwarded = trust;
        self
    }

    /// Check if a request from the given IP is allowed, recording it if so.
    ///
    /// Idle IPs are dropped at most once per window.
    pub fn check(&self, ip: IpAddr) -> bool {
        let now = Instant::now();
        let cutoff = now.checked_sub(self.window).unwrap_or(now);

        let mut state = self.state.lock().expect("rate limiter lock poisoned");
        if now.duration_since(state.last_sweep) >= self.window {
            state.sweep(cutoff, now);
        }

        let entry = state.requests.entry(ip).or_default();
        entry.retain(|&t| t > cutoff);

        if entry.len() < self.max_requests as usize {
            entry.push(now);
            true
        } else {
            false
        }
    }

    /// Drop IPs with no requests in the current window.
    pub fn cleanup(&self) {
        let now = Instant::now();
        let cutoff = now.checked_sub(self.window).unwrap_or(now);
        self.state
            .lock()
            .expect("rate limiter lock poisoned")
            .sweep(cutoff, now);
    }

    pub fn tracked_ips(&self) -> usize {
        self.state
            .lock()
            .expect("rate limiter lock poisoned")
            .requests
            .len()
    }
}

/// Requires a live session on the request. The session is made available to
/// handlers as an `Extension<Session>`.
pub async fn require_api_session(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let credentials = Credentials::from_headers(request.headers());
    if credentials.token().is_none() {
        tracing::warn!("Missing session credentials for {}", request.uri().path());
        return Err(ApiError::Unauthorized("sign in required".to_string()));
    }

    match state.identity.session(&credentials).await? {
        Some(session) => {
            tracing::debug!(user = %session.user_id, "API session accepted");
            request.extensions_mut().insert(session);
            Ok(next.run(request).await)
        }
        None => {
            tracing::warn!("Rejected session credentials for {}", request.uri().path());
            Err(ApiError::Unauthorized("session is not valid".to_string()))
        }
    }
}

/// Rate limiting middleware.
pub async fn rate_limit_middleware(
    State(rate_limiter): State<RateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let ip = extract_client_ip(&request, rate_limiter.trust_forwarded);

    if rate_limiter.check(ip) {
        Ok(next.run(request).await)
    } else {
        tracing::warn!("Rate limit exceeded for IP: {}", ip);
        Err(ApiError::RateLimited)
    }
}

/// Client IP for rate limiting: proxy headers when trusted, then the peer
/// address, falling back to localhost when the server runs without
/// connection info.
fn extract_client_ip(request: &Request<Body>, trust_forwarded: bool) -> IpAddr {
    if trust_forwarded {
        if let Some(ip) = forwarded_ip(request) {
            return ip;
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

fn forwarded_ip(request: &Request<Body>) -> Option<IpAddr> {
    if let Some(forwarded) = request.headers().get("X-Forwarded-For") {
        if let Ok(value) = forwarded.to_str() {
            if let Some(ip_str) = value.split(',').next() {
                if let Ok(ip) = ip_str.trim().parse() {
                    return Some(ip);
                }
            }
        }
    }

    request
        .headers()
        .get("X-Real-IP")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}
