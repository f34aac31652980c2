//! User resource, returned by `/users/<username>/` and `/me/`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, timestamp, Images};

/// Fields requested for every user. Must list exactly the keys of [`User`].
pub const USER_FIELDS: &str =
    "first_name,last_name,url,account_type,bio,counts,created_at,id,image,username";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bio: String,
    /// `individual` or `business`.
    #[serde(deserialize_with = "null_as_default")]
    pub account_type: String,
    /// Profile URL on pinterest.com.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub counts: UserCounts,
    #[serde(deserialize_with = "null_as_default")]
    pub image: Images,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UserCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub pins: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub following: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub followers: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub boards: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub likes: i64,
}
