//! Options for list endpoints: cursors, counts and search limits.

use super::{Options, Request};
use crate::types::Page;

/// Cursor for paginated list endpoints. An empty cursor fetches the first page.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    pub cursor: Option<String>,
}

impl Options for PageOptions {
    fn add_to_request(&self, request: Request) -> Request {
        request.with_optional_query("cursor", self.cursor.as_deref())
    }
}

impl PageOptions {
    pub fn with_cursor(mut self, cursor: &str) -> Self {
        self.cursor = Some(cursor.to_string());
        self
    }

    /// Options for the page after `page`, or `None` if `page` was the last one.
    pub fn after(page: &Page) -> Option<Self> {
        page.cursor().map(|cursor| Self::default().with_cursor(cursor))
    }
}

/// Options for `/me/boards/suggested/`.
#[derive(Debug, Clone, Default)]
pub struct SuggestedBoardsOptions {
    /// Maximum number of suggestions.
    pub count: Option<u32>,
    /// Pin id to suggest boards for.
    pub pin: Option<String>,
}

impl Options for SuggestedBoardsOptions {
    fn add_to_request(&self, request: Request) -> Request {
        request
            .with_optional_count("count", self.count)
            .with_optional_query("pin", self.pin.as_deref())
    }
}

impl SuggestedBoardsOptions {
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_pin(mut self, pin_id: &str) -> Self {
        self.pin = Some(pin_id.to_string());
        self
    }
}

/// Options for the `/me/search/` endpoints.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub cursor: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
}

impl Options for SearchOptions {
    fn add_to_request(&self, request: Request) -> Request {
        request
            .with_optional_query("cursor", self.cursor.as_deref())
            .with_optional_count("limit", self.limit)
    }
}

impl SearchOptions {
    pub fn with_cursor(mut self, cursor: &str) -> Self {
        self.cursor = Some(cursor.to_string());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}
