//! OAuth token exchange payload and permission scopes.

use serde::{Deserialize, Serialize};

/// Result of exchanging an authorization code. Unlike every other
/// response, these fields are top-level rather than wrapped in `data`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub scope: Vec<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Permission scopes that can be requested during authorization.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    ReadPublic,
    WritePublic,
    ReadRelationships,
    WriteRelationships,
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Scope::ReadPublic => "read_public",
            Scope::WritePublic => "write_public",
            Scope::ReadRelationships => "read_relationships",
            Scope::WriteRelationships => "write_relationships",
        })
    }
}
