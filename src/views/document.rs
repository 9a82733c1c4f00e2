//! Document shell and app bar shared by every page.

use leptos::prelude::*;

use super::content::{BRAND, SECTION_LINKS};
use super::icons::{Icon, ICON_DASHBOARD, ICON_MONITOR, ICON_MOON, ICON_SUN};
use super::styles::SITE_CSS;
use super::PageContext;
use crate::theme::ColorModePreference;

/// The complete HTML document: head with the resolved theme, body with the
/// page content.
#[component]
pub fn Document(ctx: PageContext, title: &'static str, children: Children) -> impl IntoView {
    let theme_css = ctx.theme.stylesheet(ctx.mode);

    view! {
        <html lang="en" data-color-scheme=ctx.mode.as_str()>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="color-scheme" content="light dark" />
                <title>{title}</title>
                <style>{theme_css}</style>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                {children()}
            </body>
        </html>
    }
}

#[component]
pub fn AppAppBar(ctx: PageContext) -> impl IntoView {
    let account = match &ctx.session {
        Some(session) => {
            let user = session.user_id.clone();
            view! {
                <a class="btn btn-primary btn-small" href="/project-management">"Project management"</a>
                <span class="chip" title="Signed in">{user}</span>
            }
            .into_any()
        }
        None => view! {
            <a class="btn btn-text btn-small" href=ctx.sign_in_path.clone()>"Sign in"</a>
            <a class="btn btn-primary btn-small" href=ctx.sign_up_path.clone()>"Sign up"</a>
        }
        .into_any(),
    };

    view! {
        <header class="app-bar">
            <div class="container">
                <div class="app-bar-inner">
                    <div class="row">
                        <a class="brand" href="/">
                            <Icon path=ICON_DASHBOARD size="24" color="var(--palette-primary)" />
                            {BRAND}
                        </a>
                        <nav>
                            {SECTION_LINKS.iter().map(|(label, anchor)| {
                                view! {
                                    <a class="btn btn-text btn-small" href=format!("/#{anchor}")>{*label}</a>
                                }
                            }).collect::<Vec<_>>()}
                        </nav>
                    </div>
                    <div class="row">
                        {account}
                        <ColorModeToggle ctx=ctx.clone() />
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Links that store a colour-mode preference and come back to the current
/// page.
#[component]
fn ColorModeToggle(ctx: PageContext) -> impl IntoView {
    let return_to = urlencoding::encode(&ctx.current_path).into_owned();

    view! {
        <div class="color-mode" role="group" aria-label="Color mode">
            {ColorModePreference::all().into_iter().map(|pref| {
                let icon = match pref {
                    ColorModePreference::Light => ICON_SUN,
                    ColorModePreference::Dark => ICON_MOON,
                    ColorModePreference::System => ICON_MONITOR,
                };
                let href = format!("/preferences/theme?mode={}&return_to={}", pref.as_str(), return_to);
                let current = if pref == ctx.preference { "true" } else { "false" };
                view! {
                    <a class="btn btn-small" href=href aria-current=current title=pref.as_str()>
                        <Icon path=icon size="16" />
                    </a>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
