//! Request-scoped actor identity derived from token claims.

use std::collections::BTreeSet;

use docvault_shared::auth::Claims;

/// Identity used when no claims are attached to the request.
pub const ANONYMOUS: &str = "anonymous";

/// Identity used when claims are present but a field is missing.
const UNKNOWN: &str = "unknown";

/// Identity of the caller for one request.
///
/// Never persisted directly; consumed by the authorization gate and
/// embedded into audit events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorContext {
    /// Stable user identifier.
    pub user_id: String,
    /// Display name.
    pub username: String,
    /// Group memberships.
    pub groups: BTreeSet<String>,
}

impl ActorContext {
    /// The anonymous fallback context.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            user_id: ANONYMOUS.to_string(),
            username: ANONYMOUS.to_string(),
            groups: BTreeSet::new(),
        }
    }

    /// Derives an actor context from optional token claims.
    ///
    /// This is a total function: absent claims produce the anonymous
    /// context, and absent fields within present claims fall back to
    /// `"unknown"`. The groups claim is normalized from either of its
    /// encodings into a set of trimmed, non-empty names.
    #[must_use]
    pub fn from_claims(claims: Option<&Claims>) -> Self {
        let Some(claims) = claims else {
            return Self::anonymous();
        };

        let user_id = claims
            .sub
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string());
        let username = claims
            .namespaced_username
            .clone()
            .or_else(|| claims.username.clone())
            .unwrap_or_else(|| UNKNOWN.to_string());
        let groups = claims
            .groups
            .as_ref()
            .map(|g| g.names().into_iter().collect())
            .unwrap_or_default();

        Self {
            user_id,
            username,
            groups,
        }
    }
}
