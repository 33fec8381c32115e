//! Ownership authorization
//!
//! Decides whether a caller may act on one specific resource instance.
//! The decision depends on the stored owner of that instance, not on the
//! resource type, so it is a plain function over identities and is
//! evaluated only after the resource is known to exist.

use crate::domain::{DomainError, DomainResult, UserRole};

/// Authenticated caller as seen by the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: String,
    pub role: UserRole,
}

impl Caller {
    pub fn new(user_id: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    pub fn can_override_ownership(&self) -> bool {
        self.role.can_override_ownership()
    }
}

/// Kind of operation requested on a resource instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl ResourceOperation {
    fn is_mutation_of_existing(&self) -> bool {
        matches!(self, ResourceOperation::Update | ResourceOperation::Delete)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    /// Map a denial to the caller-facing forbidden error.
    pub fn into_result(self, resource: &str) -> DomainResult<()> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny => Err(DomainError::Forbidden(format!(
                "You are not allowed to modify {}",
                resource
            ))),
        }
    }
}

/// Authorize `operation` by `caller` on a resource owned by `owner_id`.
pub fn authorize(caller: &Caller, owner_id: &str, operation: ResourceOperation) -> Decision {
    if !operation.is_mutation_of_existing() {
        return Decision::Allow;
    }

    if caller.user_id == owner_id || caller.can_override_ownership() {
        Decision::Allow
    } else {
        Decision::Deny
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_may_update_and_delete() {
        let owner = Caller::new("u-1", UserRole::User);
        assert_eq!(authorize(&owner, "u-1", ResourceOperation::Delete), Decision::Allow);
        assert_eq!(authorize(&owner, "u-1", ResourceOperation::Update), Decision::Allow);
    }

    #[test]
    fn other_users_are_denied_mutations() {
        for role in [UserRole::User, UserRole::Manager] {
            let other = Caller::new("u-2", role);
            assert_eq!(authorize(&other, "u-1", ResourceOperation::Delete), Decision::Deny);
            assert_eq!(authorize(&other, "u-1", ResourceOperation::Update), Decision::Deny);
        }
    }

    #[test]
    fn admin_overrides_ownership() {
        let admin = Caller::new("admin", UserRole::Admin);
        assert_eq!(authorize(&admin, "u-1", ResourceOperation::Delete), Decision::Allow);
    }

    #[test]
    fn reads_and_creates_do_not_depend_on_owner() {
        let other = Caller::new("u-2", UserRole::User);
        assert_eq!(authorize(&other, "u-1", ResourceOperation::Read), Decision::Allow);
        assert_eq!(authorize(&other, "u-1", ResourceOperation::Create), Decision::Allow);
    }

    #[test]
    fn denial_maps_to_forbidden() {
        let err = Decision::Deny.into_result("restaurant 7").unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
        assert!(Decision::Allow.into_result("restaurant 7").is_ok());
    }
}
