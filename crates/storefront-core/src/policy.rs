//! Operation authorization.
//!
//! A single decision table replaces per-endpoint permission branches. Given
//! (operation class, acting principal, resource owner) it returns an
//! [`Access`] deterministically; no state is retained between calls.
//!
//! Existence is checked *before* policy: a nonexistent resource id yields
//! `NotFound` from the store and never reaches this table. Staff bypasses
//! ownership, not existence.

use crate::error::{Result, StorefrontError};
use crate::model::principal::{Principal, PrincipalId};

/// What the caller is trying to do, collapsed to the classes the table
/// distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationClass {
    /// Read a public resource (product list/detail, product ratings).
    ReadPublic,
    /// Read a private, owned resource (own order/address/rating).
    ReadOwned,
    /// Create a new owned resource (caller becomes owner).
    Create,
    /// Update or delete an owned resource.
    Mutate,
    /// Destructive operation requiring re-authentication (account delete).
    /// `credential_ok` is the outcome of the caller's password check.
    DestructiveReauth { credential_ok: bool },
    /// Staff-only transition (mark delivered, change report status,
    /// list all users, catalog writes).
    AdminOnly,
}

/// Policy outcome. `NotFound` is not produced here; see module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Forbidden,
    Unauthenticated,
}

impl Access {
    /// Convert a denial into its error, for `?`-style gating.
    pub fn require(self, what: &'static str) -> Result<()> {
        match self {
            Access::Allow => Ok(()),
            Access::Forbidden => Err(StorefrontError::Forbidden(what)),
            Access::Unauthenticated => Err(StorefrontError::Unauthenticated),
        }
    }
}

/// The decision table. First matching row wins.
///
/// `owner` is `None` for collection-level operations (list, create).
pub fn decide(
    op: OperationClass,
    principal: Option<&Principal>,
    owner: Option<PrincipalId>,
) -> Access {
    // Public reads short-circuit before any identity requirement.
    if op == OperationClass::ReadPublic {
        return Access::Allow;
    }

    let Some(actor) = principal else {
        return Access::Unauthenticated;
    };

    match op {
        OperationClass::ReadPublic => Access::Allow,
        OperationClass::Create => Access::Allow,
        OperationClass::ReadOwned | OperationClass::Mutate => {
            if actor.staff || owner == Some(actor.id) {
                Access::Allow
            } else {
                Access::Forbidden
            }
        }
        OperationClass::DestructiveReauth { credential_ok } => {
            if actor.staff {
                // Staff needs no credential.
                Access::Allow
            } else if owner != Some(actor.id) {
                Access::Forbidden
            } else if credential_ok {
                Access::Allow
            } else {
                Access::Forbidden
            }
        }
        OperationClass::AdminOnly => {
            if actor.staff {
                Access::Allow
            } else {
                Access::Forbidden
            }
        }
    }
}

/// Ownership shortcut used by services: owner-or-staff gate on an existing
/// resource.
pub fn require_owner_or_staff(
    actor: &Principal,
    owner: PrincipalId,
    what: &'static str,
) -> Result<()> {
    decide(OperationClass::Mutate, Some(actor), Some(owner)).require(what)
}
