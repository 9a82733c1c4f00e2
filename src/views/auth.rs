//! Sign-in and sign-up pages.
//!
//! The forms themselves belong to the identity provider: the page only
//! provides a mount point carrying the publishable key, the mode and the
//! path to return to, plus the provider's browser script when one is known.

use leptos::prelude::*;

use super::content::BRAND;
use super::icons::{Icon, ICON_DASHBOARD};
use super::styles::AUTH_WIDGET_JS;
use super::{AuthMode, AuthWidget, PageContext};

#[component]
pub fn AuthPage(ctx: PageContext, widget: AuthWidget) -> impl IntoView {
    let (heading, alternative) = match widget.mode {
        AuthMode::SignIn => (
            "Sign in",
            view! {
                <p class="muted">"Don't have an account? " <a href=ctx.sign_up_path.clone()>"Sign up"</a></p>
            }
            .into_any(),
        ),
        AuthMode::SignUp => (
            "Sign up",
            view! {
                <p class="muted">"Already have an account? " <a href=ctx.sign_in_path.clone()>"Sign in"</a></p>
            }
            .into_any(),
        ),
    };

    let script = widget.script_url.clone().map(|src| {
        view! {
            <script
                defer=true
                crossorigin="anonymous"
                data-clerk-publishable-key=widget.publishable_key.clone()
                src=src
            ></script>
            <script>{AUTH_WIDGET_JS}</script>
        }
    });

    view! {
        <main class="auth-page">
            <div class="card auth-card stack">
                <a class="brand" href="/">
                    <Icon path=ICON_DASHBOARD size="24" color="var(--palette-primary)" />
                    {BRAND}
                </a>
                <h1 class="t-h4">{heading}</h1>
                <div
                    id="auth-widget"
                    data-mode=widget.mode.as_str()
                    data-clerk-publishable-key=widget.publishable_key.clone()
                    data-sign-in-url=ctx.sign_in_path.clone()
                    data-sign-up-url=ctx.sign_up_path.clone()
                    data-return-path=widget.return_path.clone()
                >
                    <noscript>"Enable JavaScript to continue with " {BRAND} "."</noscript>
                </div>
                {alternative}
            </div>
        </main>
        {script}
    }
}
