use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::{Options, Request};
use crate::Error;

/// Image for a new pin: either a URL the API downloads, or the raw bytes.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Sent as `image_url`.
    Url(String),
    /// Base64-encoded and sent as `image_base64`.
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Reads an image file fully into memory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            tracing::error!("Failed to read image {}: {}", path.display(), e);
            Error::Image(e)
        })?;
        Ok(ImageSource::Bytes(bytes))
    }

    fn add_to_request(&self, request: Request) -> Request {
        match self {
            ImageSource::Url(url) => request.with_optional_form("image_url", Some(url.as_str())),
            ImageSource::Bytes(bytes) if bytes.is_empty() => request,
            ImageSource::Bytes(bytes) => request.with_form("image_base64", STANDARD.encode(bytes)),
        }
    }
}

/// Optional parameters for creating a pin.
#[derive(Debug, Clone, Default)]
pub struct PinCreateOptions {
    pub link: Option<String>,
    pub image: Option<ImageSource>,
}

impl Options for PinCreateOptions {
    fn add_to_request(&self, request: Request) -> Request {
        let request = request.with_optional_form("link", self.link.as_deref());
        match &self.image {
            Some(image) => image.add_to_request(request),
            None => request,
        }
    }
}

impl PinCreateOptions {
    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }

    pub fn with_image_url(mut self, image_url: &str) -> Self {
        self.image = Some(ImageSource::Url(image_url.to_string()));
        self
    }

    pub fn with_image_bytes(mut self, bytes: Vec<u8>) -> Self {
        self.image = Some(ImageSource::Bytes(bytes));
        self
    }

    pub fn with_image(mut self, image: ImageSource) -> Self {
        self.image = Some(image);
        self
    }
}

/// Fields to change on an existing pin. Unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PinUpdateOptions {
    /// Board spec (`owner/slug`) to move the pin to.
    pub board: Option<String>,
    pub note: Option<String>,
    pub link: Option<String>,
}

impl Options for PinUpdateOptions {
    fn add_to_request(&self, request: Request) -> Request {
        request
            .with_optional_form("board", self.board.as_deref())
            .with_optional_form("note", self.note.as_deref())
            .with_optional_form("link", self.link.as_deref())
    }
}

impl PinUpdateOptions {
    pub fn with_board(mut self, board_spec: &str) -> Self {
        self.board = Some(board_spec.to_string());
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }
}
