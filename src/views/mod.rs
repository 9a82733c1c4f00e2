//! Server-side rendered pages.
//!
//! Each `render_*` function produces a complete HTML document, including
//! `<!DOCTYPE html>`. Pages are pure functions of a [`PageContext`] and their
//! own inputs: nothing here performs I/O or checks sessions.

mod auth;
mod board;
pub mod content;
mod document;
mod icons;
mod landing;
mod styles;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::identity::Session;
use crate::models::BoardColumn;
use crate::theme::{ColorModePreference, PaletteMode, Theme};

use auth::AuthPage;
use board::ProjectManagementPage;
use document::Document;
use landing::LandingPage;

/// Everything a page needs to know about the request it is rendered for.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub theme: Theme,
    pub preference: ColorModePreference,
    /// Palette the preference resolved to for this request.
    pub mode: PaletteMode,
    pub session: Option<Session>,
    /// Path and query of the current request, used as the return target of
    /// the colour-mode toggle.
    pub current_path: String,
    pub sign_in_path: String,
    pub sign_up_path: String,
    /// Base URL of the template showcase images, without a trailing slash.
    pub template_image_url: String,
}

impl PageContext {
    pub fn signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub(crate) fn image_url(&self, stem: &str) -> String {
        format!(
            "{}/static/images/templates/templates-images/{}-{}.png",
            self.template_image_url,
            stem,
            self.mode.as_str()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
        }
    }
}

/// Mount configuration for the provider's sign-in or sign-up widget.
#[derive(Debug, Clone)]
pub struct AuthWidget {
    pub mode: AuthMode,
    pub publishable_key: String,
    pub script_url: Option<String>,
    /// Local path the user is sent back to after authenticating.
    pub return_path: Option<String>,
}

/// Landing page. `feature` selects the highlighted feature; an index outside
/// the feature list falls back to the first one.
pub fn render_landing(ctx: &PageContext, feature: usize) -> String {
    let ctx = ctx.clone();
    let doc = view! {
        <Document ctx=ctx.clone() title="BetterCT">
            <LandingPage ctx=ctx feature=feature />
        </Document>
    };

    html_document(doc)
}

pub fn render_auth(ctx: &PageContext, widget: AuthWidget) -> String {
    let ctx = ctx.clone();
    let title = match widget.mode {
        AuthMode::SignIn => "Sign in | BetterCT",
        AuthMode::SignUp => "Sign up | BetterCT",
    };
    let doc = view! {
        <Document ctx=ctx.clone() title=title>
            <AuthPage ctx=ctx widget=widget />
        </Document>
    };

    html_document(doc)
}

/// Project-management area: the signed-in user's header, the task board and
/// the pricing plans.
pub fn render_project_management(ctx: &PageContext, columns: Vec<BoardColumn>) -> String {
    let ctx = ctx.clone();
    let doc = view! {
        <Document ctx=ctx.clone() title="Project management | BetterCT">
            <ProjectManagementPage ctx=ctx columns=columns />
        </Document>
    };

    html_document(doc)
}

fn html_document(view: impl RenderHtml) -> String {
    // Leptos doesn't emit a doctype
    format!("<!DOCTYPE html>\n{}", view.to_html())
}
