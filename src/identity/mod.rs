//! Identity provider capability.
//!
//! The application never owns session state. Every request carries some
//! credentials (a cookie set by the provider's browser script, or a bearer
//! token for API clients), and an [`IdentityProvider`] answers whether they
//! belong to a live session.
//!
//! - [`HostedIdentity`]: the hosted provider, checked over HTTP.
//! - [`StaticIdentity`]: a fixed token table for tests and local development.

mod hosted;
mod key;
mod memory;

pub use hosted::HostedIdentity;
pub use key::{KeyEnvironment, KeyError, PublishableKey};
pub use memory::StaticIdentity;

use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

/// Cookie the provider's browser script keeps the session token in.
pub const SESSION_COOKIE: &str = "__session";

/// Query parameter the provider reads to send the user back after sign-in.
pub const RETURN_PARAM: &str = "redirect_url";

/// Proof that a user is currently signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    /// Organization the session is acting for, if any.
    pub org_id: Option<String>,
    /// Opaque provider token. Never inspected by this crate.
    #[serde(skip_serializing)]
    pub token: String,
}

impl Session {
    /// Key that scopes task board data: the organization when one is active,
    /// the user otherwise.
    pub fn workspace(&self) -> &str {
        self.org_id.as_deref().unwrap_or(&self.user_id)
    }
}

/// Session token presented by a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    token: Option<String>,
}

impl Credentials {
    pub fn none() -> Self {
        Self { token: None }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Read the session cookie, falling back to an `Authorization: Bearer` header.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let from_cookie = CookieJar::from_headers(headers)
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value_trimmed().to_string());

        let token = from_cookie.or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Bearer "))
                .map(|t| t.trim().to_string())
        });

        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider request failed: {0}")]
    Upstream(String),
    #[error("identity provider returned an unreadable session: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for IdentityError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}

/// The external identity provider, reduced to what the application needs:
/// "is this request signed in?" and "where do I send it to sign in?".
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the session behind the given credentials.
    ///
    /// `Ok(None)` means signed out. Errors mean the provider could not answer.
    async fn session(&self, credentials: &Credentials) -> Result<Option<Session>, IdentityError>;

    fn sign_in_path(&self) -> &str {
        "/sign-in"
    }

    fn sign_up_path(&self) -> &str {
        "/sign-up"
    }

    /// Browser script that mounts the provider's sign-in and sign-up widgets.
    fn widget_script_url(&self) -> Option<String> {
        None
    }

    /// Sign-in entry point that returns the user to `return_path` afterwards.
    fn redirect_to_sign_in(&self, return_path: &str) -> String {
        format!(
            "{}?{}={}",
            self.sign_in_path(),
            RETURN_PARAM,
            urlencoding::encode(return_path)
        )
    }
}
