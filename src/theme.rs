//! Theme configuration.
//!
//! One [`Theme`] is built at startup and handed to every page render. The
//! only per-request input is the colour mode, which comes from the
//! `theme-mode` cookie and, for the `system` setting, the browser's
//! `Sec-CH-Prefers-Color-Scheme` client hint.

use std::fmt::Write as _;

use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

pub const THEME_COOKIE: &str = "theme-mode";
pub const PREFERS_COLOR_SCHEME_HEADER: &str = "sec-ch-prefers-color-scheme";

const PRIMARY_COLOR: &str = "#4876EF";
const SECONDARY_COLOR: &str = "#00D3AB";
const FONT_FAMILY: &str = r#""Inter", "Roboto", "Helvetica", "Arial", sans-serif"#;

/// The colour mode a visitor picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorModePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ColorModePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Light, Self::System, Self::Dark]
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        CookieJar::from_headers(headers)
            .get(THEME_COOKIE)
            .and_then(|cookie| Self::from_str(cookie.value_trimmed()))
            .unwrap_or_default()
    }
}

/// The colour mode a page is actually rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteMode {
    Light,
    Dark,
}

impl PaletteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Whether the browser reported a dark system preference.
pub fn prefers_dark(headers: &HeaderMap) -> bool {
    headers
        .get(PREFERS_COLOR_SCHEME_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().trim_matches('"').eq_ignore_ascii_case("dark"))
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub divider: &'static str,
}

impl Palette {
    fn for_mode(mode: PaletteMode) -> Self {
        match mode {
            PaletteMode::Light => Self {
                primary: PRIMARY_COLOR,
                secondary: SECONDARY_COLOR,
                background: "#ffffff",
                paper: "#f5f7fa",
                text_primary: "rgba(0, 0, 0, 0.87)",
                text_secondary: "rgba(0, 0, 0, 0.6)",
                divider: "rgba(0, 0, 0, 0.12)",
            },
            PaletteMode::Dark => Self {
                primary: PRIMARY_COLOR,
                secondary: SECONDARY_COLOR,
                background: "#121212",
                paper: "#1e1e1e",
                text_primary: "#ffffff",
                text_secondary: "rgba(255, 255, 255, 0.7)",
                divider: "rgba(255, 255, 255, 0.12)",
            },
        }
    }
}

/// Size, weight and line height of one typography variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeStyle {
    pub name: &'static str,
    pub font_size: &'static str,
    pub font_weight: Option<u16>,
    pub line_height: Option<&'static str>,
}

const fn style(
    name: &'static str,
    font_size: &'static str,
    font_weight: Option<u16>,
    line_height: Option<&'static str>,
) -> TypeStyle {
    TypeStyle {
        name,
        font_size,
        font_weight,
        line_height,
    }
}

const TYPE_SCALE: &[TypeStyle] = &[
    style("h1", "clamp(2.625rem, 10vw, 4rem)", Some(800), Some("1.1")),
    style("h2", "clamp(1.5rem, 5vw, 2.5rem)", Some(700), Some("1.2")),
    style("h3", "clamp(1.25rem, 3vw, 2rem)", Some(600), Some("1.3")),
    style("h4", "clamp(1.125rem, 2.5vw, 1.75rem)", Some(600), Some("1.4")),
    style("h5", "1.125rem", Some(600), None),
    style("h6", "1rem", Some(600), None),
    style("body1", "1rem", None, Some("1.6")),
    style("body2", "0.875rem", None, Some("1.5")),
    style("subtitle1", "1rem", Some(500), None),
    style("subtitle2", "0.875rem", Some(500), None),
    style("caption", "0.75rem", None, None),
];

/// Immutable theme configuration.
#[derive(Debug, Clone)]
pub struct Theme {
    pub font_family: &'static str,
    pub typography: &'static [TypeStyle],
    /// Base corner radius in pixels.
    pub border_radius: u8,
    pub card_radius: u8,
    /// The plain theme ignores the custom palette and typography.
    pub custom: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: FONT_FAMILY,
            typography: TYPE_SCALE,
            border_radius: 8,
            card_radius: 12,
            custom: true,
        }
    }
}

impl Theme {
    pub fn plain() -> Self {
        Self {
            custom: false,
            ..Self::default()
        }
    }

    pub fn resolve(&self, preference: ColorModePreference, prefers_dark: bool) -> PaletteMode {
        match preference {
            ColorModePreference::Light => PaletteMode::Light,
            ColorModePreference::Dark => PaletteMode::Dark,
            ColorModePreference::System if prefers_dark => PaletteMode::Dark,
            ColorModePreference::System => PaletteMode::Light,
        }
    }

    pub fn palette(&self, mode: PaletteMode) -> Palette {
        let mut palette = Palette::for_mode(mode);
        if !self.custom {
            palette.primary = "#1976d2";
            palette.secondary = "#9c27b0";
        }
        palette
    }

    /// CSS custom properties and variant rules for the resolved mode.
    pub fn stylesheet(&self, mode: PaletteMode) -> String {
        let p = self.palette(mode);
        let mut css = String::new();

        let _ = writeln!(css, ":root {{");
        let _ = writeln!(css, "    color-scheme: {};", mode.as_str());
        let _ = writeln!(css, "    --palette-primary: {};", p.primary);
        let _ = writeln!(css, "    --palette-secondary: {};", p.secondary);
        let _ = writeln!(css, "    --palette-background: {};", p.background);
        let _ = writeln!(css, "    --palette-paper: {};", p.paper);
        let _ = writeln!(css, "    --palette-text: {};", p.text_primary);
        let _ = writeln!(css, "    --palette-text-secondary: {};", p.text_secondary);
        let _ = writeln!(css, "    --palette-divider: {};", p.divider);
        let _ = writeln!(css, "    --shape-radius: {}px;", self.border_radius);
        let _ = writeln!(css, "    --card-radius: {}px;", self.card_radius);
        let _ = writeln!(css, "    --font-family: {};", self.font_family);
        let _ = writeln!(css, "}}");

        if self.custom {
            for variant in self.typography {
                let _ = write!(css, ".t-{} {{ font-size: {};", variant.name, variant.font_size);
                if let Some(weight) = variant.font_weight {
                    let _ = write!(css, " font-weight: {weight};");
                }
                if let Some(line_height) = variant.line_height {
                    let _ = write!(css, " line-height: {line_height};");
                }
                let _ = writeln!(css, " }}");
            }
        }

        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};

    #[test]
    fn explicit_preference_wins_over_system_hint() {
        let theme = Theme::default();
        assert_eq!(theme.resolve(ColorModePreference::Light, true), PaletteMode::Light);
        assert_eq!(theme.resolve(ColorModePreference::Dark, false), PaletteMode::Dark);
    }

    #[test]
    fn system_preference_follows_hint() {
        let theme = Theme::default();
        assert_eq!(theme.resolve(ColorModePreference::System, true), PaletteMode::Dark);
        assert_eq!(theme.resolve(ColorModePreference::System, false), PaletteMode::Light);
    }

    #[test]
    fn reads_preference_cookie_and_hint() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("__session=x; theme-mode=dark"));
        headers.insert(PREFERS_COLOR_SCHEME_HEADER, HeaderValue::from_static("\"dark\""));

        assert_eq!(ColorModePreference::from_headers(&headers), ColorModePreference::Dark);
        assert!(prefers_dark(&headers));
    }

    #[test]
    fn unknown_cookie_value_means_system() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme-mode=sepia"));

        assert_eq!(ColorModePreference::from_headers(&headers), ColorModePreference::System);
        assert!(!prefers_dark(&headers));
    }

    #[test]
    fn stylesheet_carries_brand_colors_and_mode() {
        let css = Theme::default().stylesheet(PaletteMode::Dark);

        assert!(css.contains("--palette-primary: #4876EF;"));
        assert!(css.contains("--palette-secondary: #00D3AB;"));
        assert!(css.contains("color-scheme: dark;"));
        assert!(css.contains(".t-h1 { font-size: clamp(2.625rem, 10vw, 4rem); font-weight: 800; line-height: 1.1; }"));
    }

    #[test]
    fn plain_theme_skips_custom_typography() {
        let css = Theme::plain().stylesheet(PaletteMode::Light);

        assert!(!css.contains("#4876EF"));
        assert!(!css.contains(".t-h1"));
    }
}
