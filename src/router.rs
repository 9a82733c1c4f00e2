//! Page route table.
//!
//! Maps a request path to exactly one page. Entries are either exact paths or
//! prefixes; a prefix matches itself and anything below it (`/sign-in`,
//! `/sign-in/factor-one`) but never a sibling that merely shares characters
//! (`/sign-inx`). The first matching entry wins.

/// A page composition the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    SignIn,
    SignUp,
    ProjectManagement,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::SignIn => "sign_in",
            Self::SignUp => "sign_up",
            Self::ProjectManagement => "project_management",
        }
    }
}

/// Whether a page requires a signed-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl PathPattern {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => normalize(path) == *expected,
            Self::Prefix(prefix) => match path.strip_prefix(prefix) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: PathPattern,
    pub page: Page,
    pub access: Access,
}

/// A resolved route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: Page,
    pub access: Access,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    /// The application's routes.
    pub fn standard() -> Self {
        Self::new(vec![
            RouteEntry {
                pattern: PathPattern::Exact("/"),
                page: Page::Landing,
                access: Access::Public,
            },
            RouteEntry {
                pattern: PathPattern::Prefix("/sign-in"),
                page: Page::SignIn,
                access: Access::Public,
            },
            RouteEntry {
                pattern: PathPattern::Prefix("/sign-up"),
                page: Page::SignUp,
                access: Access::Public,
            },
            RouteEntry {
                pattern: PathPattern::Exact("/project-management"),
                page: Page::ProjectManagement,
                access: Access::Protected,
            },
        ])
    }

    /// Resolve `path` (without query string) to a page.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.entries
            .iter()
            .find(|entry| entry.pattern.matches(path))
            .map(|entry| RouteMatch {
                page: entry.page,
                access: entry.access,
            })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// `candidate` if it is a path on this site, for use as a redirect target.
/// Absolute URLs and protocol-relative `//host` forms are rejected.
pub fn local_path(candidate: &str) -> Option<&str> {
    let is_local = candidate.starts_with('/')
        && !candidate.starts_with("//")
        && !candidate.contains('\\')
        && !candidate.chars().any(char::is_control);
    is_local.then_some(candidate)
}

/// Strip one trailing slash, keeping the root as `/`.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}
