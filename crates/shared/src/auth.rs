//! Authentication claim types.

use serde::{Deserialize, Serialize};

/// Group memberships as they appear in a token.
///
/// Identity providers encode this claim either as a JSON array of group
/// names or as a single comma-separated string ("Uploaders,Approvers").
/// Both shapes are accepted and normalized by the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupsClaim {
    /// A sequence of group names.
    List(Vec<String>),
    /// A comma-separated string of group names.
    Csv(String),
}

impl GroupsClaim {
    /// Normalizes either encoding into trimmed, non-empty group names.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        match self {
            Self::List(items) => items
                .iter()
                .map(|g| g.trim().to_string())
                .filter(|g| !g.is_empty())
                .collect(),
            Self::Csv(raw) => raw
                .split(',')
                .map(|g| g.trim().to_string())
                .filter(|g| !g.is_empty())
                .collect(),
        }
    }
}

/// JWT claims for upload-initiation callers.
///
/// Every identity field is optional: a token may be minted by an
/// external provider that omits any of them, and absence is handled by
/// the actor-context fallback rather than by rejecting the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (stable user identifier).
    #[serde(default)]
    pub sub: Option<String>,
    /// Namespaced display name claim, preferred when present.
    #[serde(rename = "docvault:username", default)]
    pub namespaced_username: Option<String>,
    /// Plain display name claim, fallback.
    #[serde(default)]
    pub username: Option<String>,
    /// Group memberships, in either supported encoding.
    #[serde(default)]
    pub groups: Option<GroupsClaim>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
