//! Board resource, addressed by its spec (`owner-username/board-slug`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, timestamp, Creator, Images};

/// Fields requested for every board. Must list exactly the keys of [`Board`].
pub const BOARD_FIELDS: &str = "id,name,url,description,creator,created_at,counts,image,privacy";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Board {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub creator: Creator,
    #[serde(with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub counts: BoardCounts,
    #[serde(deserialize_with = "null_as_default")]
    pub image: Images,
    /// `public` or `secret`.
    #[serde(deserialize_with = "null_as_default")]
    pub privacy: String,
}

impl Board {
    /// The `owner/slug` spec parsed from the board URL, e.g.
    /// `https://www.pinterest.com/jdoe/recipes/` gives `jdoe/recipes`.
    pub fn spec(&self) -> Option<String> {
        let url = url::Url::parse(&self.url).ok()?;
        let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
        let owner = segments.next()?;
        let slug = segments.next()?;
        Some(format!("{}/{}", owner, slug))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BoardCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub pins: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub collaborators: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub followers: i64,
}
