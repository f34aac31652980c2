//! Shared request infrastructure: the [`Request`] value and the [`Options`] trait.

use reqwest::Method;
use url::{ParseError, Url};

use crate::Error;

/// Trait implemented by all optional-parameter values. Applies the options
/// that are set to a request and leaves the rest out.
pub trait Options {
    /// Adds this value's parameters to the request, returning the modified request.
    fn add_to_request(&self, request: Request) -> Request;
}

/// One outbound API request, relative to the client's base URL.
///
/// Optional parameters are only attached when they carry a value, so an
/// unset option can never clear a field server-side.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    form: Vec<(String, String)>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            form: Vec::new(),
        }
    }

    /// A GET request. Reads always name the fields they want back.
    pub fn get(path: impl Into<String>, fields: &str) -> Self {
        Self::new(Method::GET, path).with_fields(fields)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Sets the comma-separated `fields` list the server should return.
    pub fn with_fields(self, fields: &str) -> Self {
        self.with_query("fields", fields)
    }

    /// Appends a required query parameter.
    pub fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Appends a query parameter only when it is set and non-empty.
    pub fn with_optional_query(self, key: &str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(value) => self.with_query(key, value),
            None => self,
        }
    }

    /// Appends a numeric query parameter only when it is set and non-zero.
    pub fn with_optional_count(self, key: &str, value: Option<u32>) -> Self {
        match value.filter(|v| *v != 0) {
            Some(value) => self.with_query(key, value.to_string()),
            None => self,
        }
    }

    /// Appends a required form parameter.
    pub fn with_form(mut self, key: &str, value: impl Into<String>) -> Self {
        self.form.push((key.to_string(), value.into()));
        self
    }

    /// Appends a form parameter only when it is set and non-empty.
    pub fn with_optional_form(self, key: &str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(value) => self.with_form(key, value),
            None => self,
        }
    }

    /// Applies an options value to this request.
    pub fn with_options(self, options: &impl Options) -> Self {
        options.add_to_request(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn form_pairs(&self) -> &[(String, String)] {
        &self.form
    }

    /// Builds the absolute URL. The access token, when present, is appended
    /// last so it rides along on every verb.
    ///
    /// Each `/`-separated part of the path is percent-encoded as one segment,
    /// so an id or username holding `?` or `#` stays inside the path.
    pub fn to_url(&self, base_url: &str, access_token: Option<&str>) -> Result<Url, Error> {
        let mut url = Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::InvalidUrl(e)
        })?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                tracing::error!("Base URL cannot take a path: {}", base_url);
                Error::InvalidUrl(ParseError::RelativeUrlWithoutBase)
            })?;
            segments.pop_if_empty();
            for segment in self.path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
            if self.path.ends_with('/') {
                segments.push("");
            }
        }
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
            if let Some(token) = access_token.filter(|t| !t.is_empty()) {
                pairs.append_pair("access_token", token);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }
}
