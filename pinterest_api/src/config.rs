//! Client configuration: base URL, request timeout and access token.

use std::fmt;
use std::time::Duration;

/// Production base URL of the Pinterest v1 API.
pub const DEFAULT_BASE_URL: &str = "https://api.pinterest.com/v1";

/// Request timeout applied to the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ENV_ACCESS_TOKEN: &str = "PINTEREST_ACCESS_TOKEN";
const ENV_BASE_URL: &str = "PINTEREST_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "PINTEREST_TIMEOUT_SECS";

/// Settings used to build a [`Client`](crate::Client).
#[derive(Clone)]
pub struct ClientConfig {
    /// API root that request paths are appended to.
    pub base_url: String,
    /// Timeout for a whole request, connection included.
    pub timeout: Duration,
    /// Access token sent as the `access_token` query parameter.
    pub access_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            access_token: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl ClientConfig {
    /// Reads `PINTEREST_ACCESS_TOKEN`, `PINTEREST_BASE_URL` and
    /// `PINTEREST_TIMEOUT_SECS`, falling back to the defaults for anything
    /// unset or invalid.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env_string(ENV_BASE_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout: env_u64(ENV_TIMEOUT_SECS)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            access_token: env_string(ENV_ACCESS_TOKEN),
        }
    }

    /// Sets the API root. A trailing `/` is dropped.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_access_token(mut self, access_token: &str) -> Self {
        self.access_token = Some(access_token.to_string());
        self
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_u64(key: &str) -> Option<u64> {
    let value = env_string(key)?;
    match value.parse::<u64>() {
        Ok(parsed) if parsed > 0 => Some(parsed),
        _ => {
            tracing::warn!("Ignoring invalid {}={}", key, value);
            None
        }
    }
}
