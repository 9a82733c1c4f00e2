use std::fmt;
use std::str::FromStr;

use base64::Engine as _;

/// Errors produced while parsing a [`PublishableKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("publishable key must start with pk_test_ or pk_live_")]
    UnknownPrefix,
    #[error("publishable key payload is not valid base64")]
    InvalidEncoding,
    #[error("publishable key does not name a frontend API host")]
    MissingHost,
}

/// Which provider instance a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEnvironment {
    Test,
    Live,
}

impl KeyEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Live => "live",
        }
    }
}

/// The public client key of the hosted identity provider.
///
/// The key is safe to embed in pages. Its payload is the base64 encoding of
/// the provider's frontend API host followed by a `$` terminator, which is
/// how the server finds the endpoints it talks to.
#[derive(Clone, PartialEq, Eq)]
pub struct PublishableKey {
    raw: String,
    environment: KeyEnvironment,
    frontend_api: String,
}

impl PublishableKey {
    pub fn parse(raw: &str) -> Result<Self, KeyError> {
        let raw = raw.trim();
        let (environment, payload) = if let Some(rest) = raw.strip_prefix("pk_test_") {
            (KeyEnvironment::Test, rest)
        } else if let Some(rest) = raw.strip_prefix("pk_live_") {
            (KeyEnvironment::Live, rest)
        } else {
            return Err(KeyError::UnknownPrefix);
        };

        // Payloads are published both with and without padding.
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .or_else(|_| base64::engine::general_purpose::STANDARD_NO_PAD.decode(payload))
            .map_err(|_| KeyError::InvalidEncoding)?;
        let decoded = String::from_utf8(decoded).map_err(|_| KeyError::InvalidEncoding)?;

        let host = decoded.strip_suffix('$').ok_or(KeyError::MissingHost)?;
        if host.is_empty() || host.contains(['/', ' ', '$']) {
            return Err(KeyError::MissingHost);
        }

        Ok(Self {
            raw: raw.to_string(),
            environment,
            frontend_api: host.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn environment(&self) -> KeyEnvironment {
        self.environment
    }

    /// Host name of the provider's frontend API, e.g. `clerk.example.com`.
    pub fn frontend_api(&self) -> &str {
        &self.frontend_api
    }

    /// Build a key for the given host. Used by tests and local tooling.
    pub fn for_host(environment: KeyEnvironment, host: &str) -> Self {
        let payload = base64::engine::general_purpose::STANDARD.encode(format!("{host}$"));
        Self {
            raw: format!("pk_{}_{}", environment.as_str(), payload),
            environment,
            frontend_api: host.to_string(),
        }
    }
}

impl FromStr for PublishableKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// The key is public, but keep logs readable.
impl fmt::Debug for PublishableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishableKey")
            .field("environment", &self.environment)
            .field("frontend_api", &self.frontend_api)
            .finish()
    }
}
