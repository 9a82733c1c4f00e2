//! Site-wide stylesheet.
//!
//! Colours, radii and fonts come from the custom properties emitted by
//! [`crate::theme::Theme::stylesheet`]; nothing here hard-codes a palette.

pub const SITE_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
html, body { margin: 0; padding: 0; }
body {
    font-family: var(--font-family);
    background: var(--palette-background);
    color: var(--palette-text);
    line-height: 1.5;
}
a { color: var(--palette-primary); text-decoration: none; }
a:hover { text-decoration: underline; }
hr.divider { border: 0; border-top: 1px solid var(--palette-divider); margin: 0; }
.container { width: 100%; max-width: 1200px; margin: 0 auto; padding: 0 24px; }
.muted { color: var(--palette-text-secondary); }
.stack { display: flex; flex-direction: column; gap: 16px; }
.row { display: flex; flex-direction: row; gap: 8px; align-items: center; }
.grid { display: grid; gap: 16px; }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
.grid-2 { grid-template-columns: repeat(auto-fit, minmax(360px, 1fr)); }

.btn {
    display: inline-flex; align-items: center; justify-content: center; gap: 6px;
    padding: 6px 16px; border-radius: var(--shape-radius);
    border: 1px solid var(--palette-divider);
    background: var(--palette-paper); color: var(--palette-text);
    font: inherit; font-size: 0.875rem; font-weight: 500; cursor: pointer;
}
.btn:hover { text-decoration: none; border-color: var(--palette-primary); }
.btn-primary { background: var(--palette-primary); border-color: var(--palette-primary); color: #fff; }
.btn-text { border-color: transparent; background: transparent; }
.btn-small { padding: 4px 10px; font-size: 0.8125rem; }

.card {
    background: var(--palette-paper);
    border: 1px solid var(--palette-divider);
    border-radius: var(--card-radius);
    padding: 24px;
}
.card-highlighted { border-color: var(--palette-primary); box-shadow: 0 8px 12px rgba(72, 118, 239, 0.2); }
.chip {
    display: inline-block; padding: 2px 10px; border-radius: 16px;
    font-size: 0.75rem; font-weight: 600;
    background: var(--palette-primary); color: #fff;
}

.app-bar { position: sticky; top: 28px; z-index: 10; margin-top: 28px; }
.app-bar-inner {
    display: flex; align-items: center; justify-content: space-between; gap: 12px;
    padding: 8px 12px; border-radius: calc(var(--shape-radius) + 8px);
    border: 1px solid var(--palette-divider);
    background: var(--palette-paper);
    backdrop-filter: blur(24px);
}
.app-bar nav { display: flex; gap: 4px; flex-wrap: wrap; }
.brand { display: inline-flex; align-items: center; gap: 8px; font-weight: 700; color: var(--palette-text); }
.color-mode { display: inline-flex; gap: 2px; }
.color-mode a[aria-current="true"] { border-color: var(--palette-primary); color: var(--palette-primary); }

.hero { padding: 140px 0 64px; text-align: center; }
.hero h1 .accent { color: var(--palette-primary); }
.hero form { justify-content: center; margin-top: 24px; flex-wrap: wrap; }
.hero-image {
    margin-top: 56px; height: 400px; border-radius: var(--card-radius);
    border: 1px solid var(--palette-divider);
    background-size: cover; background-position: center;
}
input[type="email"], input[type="text"], textarea, select {
    font: inherit; padding: 6px 10px; border-radius: var(--shape-radius);
    border: 1px solid var(--palette-divider);
    background: var(--palette-paper); color: var(--palette-text);
}

.section { padding: 64px 0 96px; }
.section-header { max-width: 720px; margin: 0 auto 32px; text-align: center; }
.section-dark { background: #0C1017; color: #FFFFFF; }
.section-dark .card { background: #1B2430; border-color: #333B4D; color: #FFFFFF; }
.section-dark .muted { color: #B4BED0; }

.logos { display: flex; flex-wrap: wrap; justify-content: center; gap: 32px; padding: 32px 0; }
.logos img { width: 100px; height: 80px; margin: 0 32px; opacity: 0.7; }

.features { display: grid; grid-template-columns: minmax(0, 1fr) minmax(0, 1fr); gap: 24px; }
.feature-item { display: flex; gap: 16px; color: var(--palette-text); }
.feature-item:hover { text-decoration: none; }
.feature-item[aria-selected="true"] { border-color: var(--palette-primary); }
.feature-image {
    min-height: 500px; border-radius: var(--card-radius);
    background-size: contain; background-repeat: no-repeat; background-position: center;
}

.testimonial { display: flex; flex-direction: column; justify-content: space-between; }
.avatar { width: 40px; height: 40px; border-radius: 50%; }

.pricing .price { font-size: 3rem; font-weight: 700; }
.pricing ul { list-style: none; padding: 0; margin: 16px 0; }
.pricing li { display: flex; gap: 8px; align-items: center; padding: 4px 0; }

.faq details { border-bottom: 1px solid var(--palette-divider); padding: 12px 0; }
.faq summary { cursor: pointer; font-weight: 500; }

.footer { padding: 64px 0 80px; }
.footer-top { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 32px; }
.footer-links { display: flex; gap: 48px; }
.footer-links ul { list-style: none; padding: 0; margin: 0; }
.footer-bottom {
    display: flex; justify-content: space-between; align-items: center;
    margin-top: 32px; padding-top: 32px; border-top: 1px solid var(--palette-divider);
}

.auth-page { min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 24px; }
.auth-card { width: 100%; max-width: 440px; }

.project-header { padding: 48px 0 24px; }
.board { display: grid; grid-template-columns: repeat(5, minmax(200px, 1fr)); gap: 12px; overflow-x: auto; }
.board-column { background: var(--palette-background); border: 1px solid var(--palette-divider); border-radius: var(--card-radius); padding: 12px; }
.board-column h3 { display: flex; justify-content: space-between; margin: 0 0 12px; font-size: 0.875rem; }
.task-card { padding: 12px; margin-bottom: 8px; }
.task-card p { margin: 4px 0 0; font-size: 0.8125rem; }
.empty { font-size: 0.8125rem; color: var(--palette-text-secondary); }
"#;

/// Wires the sign-in/sign-up mount point to the provider widget once its
/// script has loaded.
pub const AUTH_WIDGET_JS: &str = r#"
window.addEventListener("load", () => {
  const mount = document.getElementById("auth-widget");
  if (!mount || !window.Clerk) return;
  const clerk = window.Clerk;
  const options = {
    signInUrl: mount.dataset.signInUrl,
    signUpUrl: mount.dataset.signUpUrl,
    forceRedirectUrl: mount.dataset.returnPath || "/",
  };
  clerk.load().then(() => {
    if (mount.dataset.mode === "sign-up") {
      clerk.mountSignUp(mount, options);
    } else {
      clerk.mountSignIn(mount, options);
    }
  });
});
"#;
