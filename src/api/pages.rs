//! Page requests: resolve the route, ask the gate, render.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use super::error::ApiError;
use super::AppState;
use crate::gate::{AccessGate, GateDecision};
use crate::identity::{Credentials, Session};
use crate::models::board_columns;
use crate::router::{local_path, Page};
use crate::theme::{prefers_dark, ColorModePreference, THEME_COOKIE};
use crate::views::{self, AuthMode, AuthWidget, PageContext};

const THEME_COOKIE_MAX_AGE: time::Duration = time::Duration::days(365);

#[derive(Debug, Default, Deserialize)]
struct LandingQuery {
    feature: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct AuthQuery {
    redirect_url: Option<String>,
}

/// Fallback handler for every path outside `/api`.
pub async fn serve_page(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let path = uri.path();
    let requested = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or(path);

    let Some(route) = state.routes.resolve(path) else {
        tracing::debug!("No page at {}, redirecting to /", path);
        return Redirect::to("/").into_response();
    };

    let session = current_session(&state, &headers).await;
    let decision =
        AccessGate::new(state.identity.as_ref()).decide(route.access, session.as_ref(), requested);
    tracing::debug!(
        page = route.page.as_str(),
        signed_in = session.is_some(),
        ?decision,
        "Gate decision"
    );

    if let GateDecision::RedirectToSignIn(location) = decision {
        tracing::warn!("No session for {}, redirecting to sign-in", requested);
        return Redirect::to(&location).into_response();
    }

    let ctx = page_context(&state, &headers, session, requested);
    match render(&state, route.page, &ctx, &uri) {
        Ok(html) => with_client_hints(Html(html).into_response()),
        Err(err) => err.into_response(),
    }
}

fn render(state: &AppState, page: Page, ctx: &PageContext, uri: &Uri) -> Result<String, ApiError> {
    let html = match page {
        Page::Landing => {
            let query = Query::<LandingQuery>::try_from_uri(uri)
                .map(|q| q.0)
                .unwrap_or_default();
            views::render_landing(ctx, query.feature.unwrap_or(0))
        }
        Page::SignIn => views::render_auth(ctx, auth_widget(state, AuthMode::SignIn, uri)),
        Page::SignUp => views::render_auth(ctx, auth_widget(state, AuthMode::SignUp, uri)),
        Page::ProjectManagement => {
            let tasks = match &ctx.session {
                Some(session) => state.db.list_tasks(session.workspace(), None)?,
                None => Vec::new(),
            };
            views::render_project_management(ctx, board_columns(tasks))
        }
    };

    Ok(html)
}

/// The session behind the request's credentials. A provider failure is
/// logged and treated as signed out.
async fn current_session(state: &AppState, headers: &HeaderMap) -> Option<Session> {
    let credentials = Credentials::from_headers(headers);
    if credentials.token().is_none() {
        return None;
    }

    match state.identity.session(&credentials).await {
        Ok(session) => session,
        Err(err) => {
            tracing::warn!("Session check failed, treating request as signed out: {}", err);
            None
        }
    }
}

fn page_context(
    state: &AppState,
    headers: &HeaderMap,
    session: Option<Session>,
    requested: &str,
) -> PageContext {
    let preference = ColorModePreference::from_headers(headers);
    let mode = state.theme.resolve(preference, prefers_dark(headers));

    PageContext {
        theme: state.theme.as_ref().clone(),
        preference,
        mode,
        session,
        current_path: requested.to_string(),
        sign_in_path: state.identity.sign_in_path().to_string(),
        sign_up_path: state.identity.sign_up_path().to_string(),
        template_image_url: state.config.template_image_url.clone(),
    }
}

fn auth_widget(state: &AppState, mode: AuthMode, uri: &Uri) -> AuthWidget {
    let return_path = Query::<AuthQuery>::try_from_uri(uri)
        .ok()
        .and_then(|q| q.0.redirect_url)
        .and_then(|target| local_path(&target).map(str::to_string));

    AuthWidget {
        mode,
        publishable_key: state.config.publishable_key.as_str().to_string(),
        script_url: state.identity.widget_script_url(),
        return_path,
    }
}

/// Ask the browser to report its colour scheme on later requests.
fn with_client_hints(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        "accept-ch",
        HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme"),
    );
    headers.insert(
        header::VARY,
        HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme, Cookie"),
    );
    response
}

#[derive(Debug, Deserialize)]
pub struct ColorModeQuery {
    pub mode: String,
    pub return_to: Option<String>,
}

/// `GET /preferences/theme`: store the colour-mode preference and go back.
pub async fn set_color_mode(jar: CookieJar, Query(query): Query<ColorModeQuery>) -> Response {
    let Some(preference) = ColorModePreference::from_str(&query.mode) else {
        return ApiError::BadRequest(format!("unknown color mode: {}", query.mode)).into_response();
    };

    let target = query
        .return_to
        .as_deref()
        .and_then(local_path)
        .unwrap_or("/");
    let cookie = Cookie::build((THEME_COOKIE, preference.as_str()))
        .path("/")
        .max_age(THEME_COOKIE_MAX_AGE)
        .same_site(SameSite::Lax);
    tracing::debug!(mode = preference.as_str(), "Color mode preference stored");

    (jar.add(cookie), Redirect::to(target)).into_response()
}
