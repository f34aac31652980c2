//! The generic `{data, message, type, page}` wrapper around API responses.

use serde::{Deserialize, Serialize};

/// Response wrapper shared by every non-OAuth endpoint. `data` is decoded
/// straight into the caller's payload type.
#[derive(Serialize, Deserialize, Debug)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "super::common::null_as_default")]
    pub page: Page,
}

/// Continuation token for list endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Page {
    /// Opaque token to pass as the next request's `cursor`.
    pub cursor: Option<String>,
    /// Full URL of the next page, as returned by the API.
    pub next: Option<String>,
}

impl Page {
    /// The cursor for the next page, or `None` when this was the last page.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref().filter(|c| !c.is_empty())
    }

    pub fn is_last(&self) -> bool {
        self.cursor().is_none()
    }
}

/// One page of results from a list endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub page: Page,
}

impl<T> Paginated<T> {
    pub fn next_cursor(&self) -> Option<&str> {
        self.page.cursor()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
