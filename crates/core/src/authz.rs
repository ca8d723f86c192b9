//! The single authorization rule guarding upload initiation.

use thiserror::Error;

use crate::actor::ActorContext;

/// Group required to initiate uploads.
pub const UPLOADER_GROUP: &str = "Uploaders";

/// Typed failure of the authorization gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct PermissionDenied(pub String);

/// Checks that the actor may initiate uploads.
///
/// When enforcement is disabled the gate always passes, which keeps the
/// service usable before the identity provider is wired up. When
/// enabled, membership in [`UPLOADER_GROUP`] is required. This is one
/// static rule, not a policy engine.
///
/// # Errors
///
/// Returns `PermissionDenied` when enforcement is on and the actor
/// lacks the required group.
pub fn require_uploader(actor: &ActorContext, enforce: bool) -> Result<(), PermissionDenied> {
    if !enforce {
        return Ok(());
    }

    if actor.groups.contains(UPLOADER_GROUP) {
        Ok(())
    } else {
        Err(PermissionDenied("Uploader role required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor_with_groups(groups: &[&str]) -> ActorContext {
        let mut actor = ActorContext::anonymous();
        actor.groups = groups.iter().map(ToString::to_string).collect();
        actor
    }

    #[test]
    fn test_enforcement_disabled_always_passes() {
        assert!(require_uploader(&ActorContext::anonymous(), false).is_ok());
        assert!(require_uploader(&actor_with_groups(&["Approvers"]), false).is_ok());
    }

    #[test]
    fn test_enforcement_requires_uploader_group() {
        assert!(require_uploader(&actor_with_groups(&["Uploaders"]), true).is_ok());
        assert!(require_uploader(&actor_with_groups(&["Uploaders", "Approvers"]), true).is_ok());
    }

    #[test]
    fn test_denied_without_group() {
        let err = require_uploader(&ActorContext::anonymous(), true).unwrap_err();
        assert_eq!(err.0, "Uploader role required");

        let err = require_uploader(&actor_with_groups(&["Approvers"]), true).unwrap_err();
        assert_eq!(err.0, "Uploader role required");
    }
}
