//! Error types for the API client, plus the translation from an HTTP
//! response into a [`PinterestError`].

use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Pinterest(#[from] PinterestError),
    /// No response was obtained (DNS, connection, TLS, timeout) or the body
    /// could not be read.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response: {source}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },
    /// A 2xx single-object response arrived without a `data` payload.
    #[error("Response envelope contained no data")]
    MissingData,
    /// The base URL and path did not form a valid URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// An image file for pin creation could not be read.
    #[error("Failed to read image: {0}")]
    Image(#[from] std::io::Error),
}

impl Error {
    /// Returns the HTTP status code when this is a [`PinterestError`].
    pub fn status_code(&self) -> Option<u16> {
        self.as_pinterest().map(|e| e.status_code)
    }

    /// Returns the domain error, if this is one.
    pub fn as_pinterest(&self) -> Option<&PinterestError> {
        match self {
            Error::Pinterest(e) => Some(e),
            _ => None,
        }
    }
}

/// Error returned for every non-2xx response from the API.
///
/// The display form is `PinterestError: {"status_code":404,"message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinterestError {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Human-readable message taken from the response body.
    pub message: String,
    /// Rate-limit headers, when the response carried any of them.
    pub rate_limit: Option<RateLimit>,
}

impl std::error::Error for PinterestError {}

impl fmt::Display for PinterestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[derive(Serialize)]
        struct Wire<'a> {
            status_code: u16,
            message: &'a str,
        }

        let json = serde_json::to_string(&Wire {
            status_code: self.status_code,
            message: &self.message,
        })
        .map_err(|_| fmt::Error)?;
        write!(f, "PinterestError: {}", json)
    }
}

/// Values of the `X-Ratelimit-*` response headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub remaining: i64,
    pub limit: i64,
    pub refresh: i64,
}

const RATELIMIT_REMAINING: &str = "X-Ratelimit-Remaining";
const RATELIMIT_LIMIT: &str = "X-Ratelimit-Limit";
const RATELIMIT_REFRESH: &str = "X-Ratelimit-Refresh";

impl RateLimit {
    /// Reads the rate-limit headers. Returns `None` when none of them is
    /// present; an individual header that is missing or unparsable reads as 0.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let present = [RATELIMIT_REMAINING, RATELIMIT_LIMIT, RATELIMIT_REFRESH]
            .iter()
            .any(|name| headers.contains_key(*name));
        if !present {
            return None;
        }
        Some(Self {
            remaining: header_value(headers, RATELIMIT_REMAINING),
            limit: header_value(headers, RATELIMIT_LIMIT),
            refresh: header_value(headers, RATELIMIT_REFRESH),
        })
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> i64 {
    let Some(value) = headers.get(name) else {
        return 0;
    };
    match value.to_str().ok().and_then(|v| v.trim().parse::<i64>().ok()) {
        Some(parsed) => parsed,
        None => {
            tracing::debug!("Ignoring unparsable {} header: {:?}", name, value);
            0
        }
    }
}

/// Error fields the API may put in a failure body. Regular endpoints use
/// `message`; the OAuth token endpoint uses `error`/`error_description`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| {
        [b.message, b.error_description, b.error]
            .into_iter()
            .flatten()
            .find(|m| !m.is_empty())
    });
    parsed.unwrap_or_else(|| truncate_body(body))
}

/// Decides whether a response succeeded. Every request goes through here.
pub(crate) fn check_response(
    status: StatusCode,
    headers: &HeaderMap,
    body: &str,
) -> Result<(), Error> {
    if status.is_success() {
        return Ok(());
    }
    let error = PinterestError {
        status_code: status.as_u16(),
        message: error_message(body),
        rate_limit: RateLimit::from_headers(headers),
    };
    tracing::warn!("Request failed with status {}: {}", status, error.message);
    Err(Error::Pinterest(error))
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
    }
}
