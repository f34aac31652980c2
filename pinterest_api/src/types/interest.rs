use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// Fields requested for every interest. Must list exactly the keys of [`Interest`].
pub const INTEREST_FIELDS: &str = "id,name";

/// A topic the authenticated user follows.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Interest {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}
