use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::{Credentials, IdentityError, IdentityProvider, Session};

/// Identity provider backed by a fixed token table.
///
/// Sessions are registered up front and can be revoked, which stands in for
/// sign-out or expiry at the real provider.
#[derive(Clone, Default)]
pub struct StaticIdentity {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl StaticIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a personal session for `user_id` under `token`.
    pub fn with_user(self, token: &str, user_id: &str) -> Self {
        self.sign_in(Session {
            user_id: user_id.to_string(),
            org_id: None,
            token: token.to_string(),
        });
        self
    }

    /// Register an organization session for `user_id` under `token`.
    pub fn with_org_user(self, token: &str, user_id: &str, org_id: &str) -> Self {
        self.sign_in(Session {
            user_id: user_id.to_string(),
            org_id: Some(org_id.to_string()),
            token: token.to_string(),
        });
        self
    }

    pub fn sign_in(&self, session: Session) {
        let mut sessions = self.sessions.write().expect("session table poisoned");
        sessions.insert(session.token.clone(), session);
    }

    /// Revoke the session behind `token`. Returns whether one existed.
    pub fn sign_out(&self, token: &str) -> bool {
        let mut sessions = self.sessions.write().expect("session table poisoned");
        sessions.remove(token).is_some()
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn session(&self, credentials: &Credentials) -> Result<Option<Session>, IdentityError> {
        let Some(token) = credentials.token() else {
            return Ok(None);
        };
        let sessions = self.sessions.read().expect("session table poisoned");
        Ok(sessions.get(token).cloned())
    }
}
