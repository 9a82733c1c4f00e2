//! Landing page sections.

use chrono::Datelike;
use leptos::prelude::*;

use super::content::{
    logo_url, COPYRIGHT_HOLDER, COPYRIGHT_HREF, DARK_LOGOS, FAQS, FEATURES, FOOTER_LINKS,
    HIGHLIGHTS, PRICING_TIERS, SOCIAL_LINKS, TESTIMONIALS, WHITE_LOGOS, BRAND,
};
use super::document::AppAppBar;
use super::icons::{Icon, ICON_CHECK_CIRCLE, ICON_DASHBOARD};
use super::PageContext;
use crate::theme::PaletteMode;

#[component]
pub fn LandingPage(ctx: PageContext, feature: usize) -> impl IntoView {
    view! {
        <hr class="divider" />
        <AppAppBar ctx=ctx.clone() />
        <Hero ctx=ctx.clone() />
        <main>
            <LogoCollection mode=ctx.mode />
            <Features ctx=ctx.clone() selected=feature />
            <hr class="divider" />
            <Testimonials mode=ctx.mode />
            <hr class="divider" />
            <Highlights />
            <hr class="divider" />
            <Pricing />
            <hr class="divider" />
            <Faq />
            <hr class="divider" />
            <Footer />
        </main>
    }
}

#[component]
fn Hero(ctx: PageContext) -> impl IntoView {
    let screenshot = match ctx.mode {
        PaletteMode::Light => "dashboard.jpg",
        PaletteMode::Dark => "dashboard-dark.jpg",
    };
    let image = format!(
        "background-image: url(\"{}/static/screenshots/material-ui/getting-started/templates/{}\")",
        ctx.template_image_url, screenshot
    );

    view! {
        <section id="hero" class="hero">
            <div class="container stack">
                <h1 class="t-h1">"Our latest " <span class="accent">"products"</span></h1>
                <p class="muted">
                    "Explore our cutting-edge dashboard, delivering high-quality solutions tailored to your needs. "
                    "Elevate your experience with top-tier features and services."
                </p>
                <form class="row" method="get" action=ctx.sign_up_path.clone()>
                    <label class="row">
                        <span class="muted">"Email"</span>
                        <input type="email" name="email_address" placeholder="Your email address" autocomplete="off" />
                    </label>
                    <button class="btn btn-primary" type="submit">"Start now"</button>
                </form>
                <p class="muted t-caption">
                    "By clicking \"Start now\" you agree to our " <a href="#">"Terms & Conditions"</a> "."
                </p>
                <div class="hero-image" style=image role="img" aria-label="Dashboard preview"></div>
            </div>
        </section>
    }
}

fn logos_for(mode: PaletteMode) -> &'static [&'static str] {
    match mode {
        PaletteMode::Light => DARK_LOGOS,
        PaletteMode::Dark => WHITE_LOGOS,
    }
}

#[component]
fn LogoCollection(mode: PaletteMode) -> impl IntoView {
    view! {
        <section id="logo-collection" class="container">
            <p class="muted" style="text-align: center">"Trusted by the best companies"</p>
            <div class="logos">
                {logos_for(mode).iter().enumerate().map(|(i, file)| {
                    view! { <img src=logo_url(file) alt=format!("Company logo {}", i + 1) /> }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Feature list with one selected item. Selection is a plain link so the
/// page works without scripts.
#[component]
fn Features(ctx: PageContext, selected: usize) -> impl IntoView {
    let selected = if selected < FEATURES.len() { selected } else { 0 };
    let current = &FEATURES[selected];
    let showcase = format!("background-image: url(\"{}\")", ctx.image_url(current.image));

    view! {
        <section id="features" class="section container">
            <div class="section-header">
                <h2 class="t-h4">"Product features"</h2>
                <p class="muted">
                    "Provide a brief overview of the key features of the product. "
                    "For example, you could list the number of features, their types or benefits, and add-ons."
                </p>
            </div>
            <div class="features">
                <div class="stack">
                    {FEATURES.iter().enumerate().map(|(index, item)| {
                        let is_selected = if index == selected { "true" } else { "false" };
                        view! {
                            <a
                                class="card feature-item"
                                href=format!("/?feature={index}#features")
                                aria-selected=is_selected
                            >
                                <Icon path=item.icon size="24" />
                                <div>
                                    <h3 class="t-h6">{item.title}</h3>
                                    <p class="muted">{item.description}</p>
                                </div>
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>
                <div class="card feature-image" style=showcase role="img" aria-label=current.title></div>
            </div>
        </section>
    }
}

#[component]
fn Testimonials(mode: PaletteMode) -> impl IntoView {
    let logos = logos_for(mode);

    view! {
        <section id="testimonials" class="section container">
            <div class="section-header">
                <h2 class="t-h4">"Testimonials"</h2>
                <p class="muted">
                    "See what our customers love about our products. "
                    "Discover how we excel in efficiency, durability and satisfaction."
                </p>
            </div>
            <div class="grid grid-3">
                {TESTIMONIALS.iter().enumerate().map(|(index, t)| {
                    let logo = logo_url(logos[index % logos.len()]);
                    view! {
                        <article class="card testimonial">
                            <p class="muted">{t.quote}</p>
                            <div class="row" style="justify-content: space-between">
                                <div class="row">
                                    <img class="avatar" src=format!("/static/images/avatar/{}.jpg", t.avatar) alt=t.name />
                                    <div>
                                        <strong>{t.name}</strong>
                                        <div class="muted t-caption">{t.occupation}</div>
                                    </div>
                                </div>
                                <img src=logo alt="" style="width: 64px; opacity: 0.3" />
                            </div>
                        </article>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn Highlights() -> impl IntoView {
    view! {
        <section id="highlights" class="section section-dark">
            <div class="container">
                <div class="section-header">
                    <h2 class="t-h4">"Highlights"</h2>
                    <p class="muted">
                        "Explore why our product stands out: adaptability, durability, "
                        "user-friendly design and innovation. Enjoy reliable customer support and precision in every detail."
                    </p>
                </div>
                <div class="grid grid-3">
                    {HIGHLIGHTS.iter().map(|h| view! {
                        <div class="card stack">
                            <Icon path=h.icon size="28" />
                            <div>
                                <h3 class="t-h6">{h.title}</h3>
                                <p class="muted">{h.description}</p>
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="section container pricing">
            <div class="section-header">
                <h2 class="t-h4">"Pricing"</h2>
                <p class="muted">
                    "Quickly build an effective pricing table for your potential customers with this layout. "
                    "It's built with default components with little customization."
                </p>
            </div>
            <div class="grid grid-3">
                {PRICING_TIERS.iter().map(|tier| {
                    let class = if tier.recommended { "card card-highlighted" } else { "card" };
                    let button = if tier.recommended { "btn btn-primary" } else { "btn" };
                    view! {
                        <div class=class data-tier=tier.title>
                            <div class="row" style="justify-content: space-between">
                                <h3 class="t-h6">{tier.title}</h3>
                                {tier.recommended.then(|| view! { <span class="chip">"Recommended"</span> })}
                            </div>
                            <div class="row">
                                <span class="price">"$" {tier.price}</span>
                                <span class="muted">" per month"</span>
                            </div>
                            <hr class="divider" />
                            <ul>
                                {tier.description.iter().map(|line| view! {
                                    <li>
                                        <Icon path=ICON_CHECK_CIRCLE size="18" color="var(--palette-primary)" />
                                        <span>{*line}</span>
                                    </li>
                                }).collect::<Vec<_>>()}
                            </ul>
                            <a class=button href=tier.href style="width: 100%">{tier.button_text}</a>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn Faq() -> impl IntoView {
    view! {
        <section id="faq" class="section container faq">
            <h2 class="t-h4" style="text-align: center">"Frequently asked questions"</h2>
            <div>
                {FAQS.iter().enumerate().map(|(index, faq)| view! {
                    <details id=format!("faq-{index}")>
                        <summary>{faq.question}</summary>
                        <p class="muted">{faq.answer}</p>
                    </details>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer id="footer" class="footer container">
            <div class="footer-top">
                <div class="stack" style="max-width: 360px">
                    <a class="brand" href="/">
                        <Icon path=ICON_DASHBOARD size="24" color="var(--palette-primary)" />
                        {BRAND}
                    </a>
                    <div>
                        <strong>"Join the newsletter"</strong>
                        <p class="muted">"Subscribe for weekly updates. No spams ever!"</p>
                    </div>
                    <form class="row" method="get" action="/">
                        <label class="row">
                            <span class="muted">"Email"</span>
                            <input type="email" name="newsletter" placeholder="Your email address" autocomplete="off" aria-label="Enter your email address" />
                        </label>
                        <button class="btn btn-primary btn-small" type="submit">"Subscribe"</button>
                    </form>
                </div>
                <div class="footer-links">
                    {FOOTER_LINKS.iter().map(|group| view! {
                        <div>
                            <strong>{group.heading}</strong>
                            <ul>
                                {group.links.iter().map(|link| view! {
                                    <li><a class="muted" href="#">{*link}</a></li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
            <div class="footer-bottom">
                <div>
                    <a class="muted" href="#">"Privacy Policy"</a>
                    " • "
                    <a class="muted" href="#">"Terms of Service"</a>
                    <p class="muted t-body2">
                        "Copyright © " <a class="muted" href=COPYRIGHT_HREF>{COPYRIGHT_HOLDER}</a> " " {year}
                    </p>
                </div>
                <div class="row">
                    {SOCIAL_LINKS.iter().map(|social| view! {
                        <a class="btn btn-text btn-small" href=social.href aria-label=social.label>
                            <Icon path=social.icon size="18" />
                        </a>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}
