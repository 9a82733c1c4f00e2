//! BetterCT web application.
//!
//! A server-rendered landing site with a hosted-identity sign-in flow and a
//! project-management area gated behind an authenticated session.
//!
//! # Layout
//!
//! - [`config`]: environment configuration, validated once at startup.
//! - [`identity`]: the identity provider capability and its implementations.
//! - [`router`]: the page route table.
//! - [`gate`]: the access decision for protected pages and API routes.
//! - [`theme`]: the theme configuration passed down to every page.
//! - [`views`]: server-side rendered page compositions.
//! - [`models`] and [`db`]: the task board behind the project-management area.
//! - [`api`]: the axum application tying it all together.

pub mod api;
pub mod config;
pub mod db;
pub mod gate;
pub mod identity;
pub mod models;
pub mod router;
pub mod theme;
pub mod views;

pub use api::{build_app, AppState};
pub use config::{AppConfig, ConfigError};
