//! Pin resource and its nested value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, timestamp, Creator, Image};
use super::{Board, PinMetadata};

/// Fields requested for every pin. Must list exactly the keys of [`Pin`].
pub const PIN_FIELDS: &str =
    "id,link,note,url,attribution,color,board,counts,created_at,creator,image,media,metadata,original_link";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Pin {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Where the pin links to, if anywhere.
    pub link: Option<String>,
    /// Pin URL on pinterest.com.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub creator: Creator,
    /// The board the pin lives on. Only a subset of board fields is filled in.
    #[serde(deserialize_with = "null_as_default")]
    pub board: Board,
    #[serde(with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub note: String,
    /// Dominant color as a hex string, e.g. `#a8a49b`.
    pub color: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub counts: PinCounts,
    #[serde(deserialize_with = "null_as_default")]
    pub media: Media,
    pub original_link: Option<String>,
    /// Set for pins saved from a rich source (videos, articles).
    pub attribution: Option<Attribution>,
    #[serde(deserialize_with = "null_as_default")]
    pub image: PinImage,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: PinMetadata,
}

impl Pin {
    /// URL of the original-size image, if the API returned one.
    pub fn image_url(&self) -> Option<&str> {
        Some(self.image.original.url.as_str()).filter(|u| !u.is_empty())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PinImage {
    #[serde(deserialize_with = "null_as_default")]
    pub original: Image,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PinCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub likes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub comments: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub repins: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Media {
    /// `image` or `video`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Attribution {
    pub title: Option<String>,
    pub url: Option<String>,
    pub provider_icon_url: Option<String>,
    pub author_name: Option<String>,
    pub provider_favicon_url: Option<String>,
    pub author_url: Option<String>,
    pub provider_name: Option<String>,
}
