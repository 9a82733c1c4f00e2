//! Access gate for protected pages.
//!
//! The gate is a pure decision over the route's access level and the session
//! the identity provider reported for this request. It holds no state, so
//! evaluating it again with the same session yields the same decision.

use crate::identity::{IdentityProvider, Session};
use crate::router::Access;

/// What to do with a page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    /// Send the browser to this sign-in location.
    RedirectToSignIn(String),
}

impl GateDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }
}

pub struct AccessGate<'a> {
    identity: &'a dyn IdentityProvider,
}

impl<'a> AccessGate<'a> {
    pub fn new(identity: &'a dyn IdentityProvider) -> Self {
        Self { identity }
    }

    /// Decide whether the page at `requested` (path plus query, as the user
    /// asked for it) may render for `session`.
    pub fn decide(&self, access: Access, session: Option<&Session>, requested: &str) -> GateDecision {
        match (access, session) {
            (Access::Public, _) | (Access::Protected, Some(_)) => GateDecision::Render,
            (Access::Protected, None) => {
                GateDecision::RedirectToSignIn(self.identity.redirect_to_sign_in(requested))
            }
        }
    }
}
