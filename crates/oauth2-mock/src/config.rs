//! Configuration for the mock authorization server.

use std::time::Duration;

/// Lifetime of issued access tokens: 1 hour.
pub const TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Server configuration, fixed at startup.
///
/// This is the only state shared across requests, and it is read-only.
#[derive(Clone)]
pub struct Config {
    /// TCP port to bind. Port 0 binds an ephemeral port; the bound address
    /// is logged at startup so callers can find it.
    pub port: u16,

    /// Shared secret for HS512 token signing. Injected from a flag or the
    /// `TOKEN_SIGNING_KEY` environment variable, never a source literal.
    pub signing_secret: String,

    /// Issued-token lifetime, also reported as `expires_in`.
    pub token_ttl: Duration,
}

impl Config {
    /// Create a configuration with the default token lifetime.
    #[must_use]
    pub fn new(port: u16, signing_secret: String) -> Self {
        Self { port, signing_secret, token_ttl: TOKEN_TTL }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}
