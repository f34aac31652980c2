//! Decoding of response bodies into typed payloads.

use serde::de::DeserializeOwned;

use crate::errors::truncate_body;
use crate::types::{Envelope, Paginated};
use crate::Error;

/// Decodes the generic envelope with `data` typed as `T`.
pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>, Error> {
    decode_top_level(body)
}

/// Decodes a single-object response. A 2xx envelope without data is an error.
pub(crate) fn decode_object<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    decode_envelope::<T>(body)?.data.ok_or_else(|| {
        tracing::error!("Response envelope has no data | body: {}", truncate_body(body));
        Error::MissingData
    })
}

/// Decodes a list response. No items is a valid, empty page.
pub(crate) fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Paginated<T>, Error> {
    let envelope = decode_envelope::<Vec<T>>(body)?;
    Ok(Paginated {
        data: envelope.data.unwrap_or_default(),
        page: envelope.page,
    })
}

/// Decodes a body that is not wrapped in an envelope.
pub(crate) fn decode_top_level<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str::<T>(body).map_err(|e| {
        let snippet = truncate_body(body);
        tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
        Error::Decode {
            source: e,
            body: snippet,
        }
    })
}
