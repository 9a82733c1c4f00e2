use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use super::{Credentials, IdentityError, IdentityProvider, PublishableKey, Session};

/// Major version of the provider's browser bundle the widget pages load.
const BROWSER_BUNDLE_VERSION: u8 = 5;

/// Minimum time between key set downloads triggered by an unknown `kid`.
const KEY_REFRESH_COOLDOWN: Duration = Duration::from_secs(30);

/// Claims of a provider session token.
///
/// The active organization arrives either as a flat `org_id` claim or, in
/// newer token versions, as `o.id`.
#[derive(Debug, Deserialize)]
struct SessionClaims {
    sub: String,
    #[serde(default)]
    org_id: Option<String>,
    #[serde(default)]
    o: Option<OrganizationClaim>,
}

#[derive(Debug, Deserialize)]
struct OrganizationClaim {
    id: String,
}

impl SessionClaims {
    fn organization(self) -> (String, Option<String>) {
        let org = self.org_id.or(self.o.map(|o| o.id)).filter(|o| !o.is_empty());
        (self.sub, org)
    }
}

#[derive(Debug, Default)]
struct KeyCache {
    keys: Option<Arc<JwkSet>>,
    fetched_at: Option<Instant>,
}

/// The hosted identity provider.
///
/// Session tokens set by the provider's browser script are RS256 JWTs. They
/// are verified locally against the provider's published key set
/// (`/.well-known/jwks.json` on the frontend API), which is downloaded once
/// and refreshed when a token names a key it does not contain.
#[derive(Clone)]
pub struct HostedIdentity {
    base_url: String,
    http: reqwest::Client,
    cache: Arc<RwLock<KeyCache>>,
}

impl HostedIdentity {
    pub fn new(key: PublishableKey) -> Result<Self, IdentityError> {
        Self::with_base_url(format!("https://{}", key.frontend_api()))
    }

    /// Point the provider at a different frontend API origin (e.g. a local mock).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            cache: Arc::new(RwLock::new(KeyCache::default())),
        })
    }

    pub fn jwks_url(&self) -> String {
        format!("{}/.well-known/jwks.json", self.base_url)
    }

    async fn fetch_keys(&self) -> Result<Arc<JwkSet>, IdentityError> {
        let response = self.http.get(self.jwks_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdentityError::Upstream(format!("jwks returned {status}")));
        }

        let keys: JwkSet = response
            .json()
            .await
            .map_err(|e| IdentityError::InvalidResponse(e.to_string()))?;
        tracing::debug!(keys = keys.keys.len(), "Fetched identity provider signing keys");

        let keys = Arc::new(keys);
        let mut cache = self.cache.write().expect("key cache lock poisoned");
        cache.keys = Some(keys.clone());
        cache.fetched_at = Some(Instant::now());
        Ok(keys)
    }

    /// Decoding key for `kid`, downloading the key set when it is missing or stale.
    async fn decoding_key(&self, kid: &str) -> Result<Option<DecodingKey>, IdentityError> {
        let (cached, may_refresh) = {
            let cache = self.cache.read().expect("key cache lock poisoned");
            let may_refresh = cache
                .fetched_at
                .map_or(true, |at| at.elapsed() >= KEY_REFRESH_COOLDOWN);
            (cache.keys.clone(), may_refresh)
        };

        let keys = match cached {
            Some(keys) if keys.find(kid).is_some() => keys,
            Some(keys) if !may_refresh => keys,
            _ => self.fetch_keys().await?,
        };

        match keys.find(kid) {
            Some(jwk) => DecodingKey::from_jwk(jwk)
                .map(Some)
                .map_err(|e| IdentityError::InvalidResponse(e.to_string())),
            None => Ok(None),
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }
}

#[async_trait]
impl IdentityProvider for HostedIdentity {
    async fn session(&self, credentials: &Credentials) -> Result<Option<Session>, IdentityError> {
        let Some(token) = credentials.token() else {
            return Ok(None);
        };

        let header = match jsonwebtoken::decode_header(token) {
            Ok(header) => header,
            Err(e) => {
                tracing::debug!("Session token is not a JWT: {}", e);
                return Ok(None);
            }
        };
        if header.alg != Algorithm::RS256 {
            tracing::debug!(alg = ?header.alg, "Session token uses an unexpected algorithm");
            return Ok(None);
        }
        let Some(kid) = header.kid else {
            tracing::debug!("Session token names no signing key");
            return Ok(None);
        };

        let Some(key) = self.decoding_key(&kid).await? else {
            tracing::debug!(kid = %kid, "Session token signed with an unknown key");
            return Ok(None);
        };

        match jsonwebtoken::decode::<SessionClaims>(token, &key, &Self::validation()) {
            Ok(data) => {
                let (user_id, org_id) = data.claims.organization();
                Ok(Some(Session {
                    user_id,
                    org_id,
                    token: token.to_string(),
                }))
            }
            Err(e) => {
                tracing::debug!("Identity provider session token rejected: {}", e);
                Ok(None)
            }
        }
    }

    fn widget_script_url(&self) -> Option<String> {
        Some(format!(
            "{}/npm/@clerk/clerk-js@{}/dist/clerk.browser.js",
            self.base_url, BROWSER_BUNDLE_VERSION
        ))
    }
}
