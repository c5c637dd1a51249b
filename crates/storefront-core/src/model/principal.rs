use serde::{Deserialize, Serialize};

/// Identifier for a principal (user account id).
pub type PrincipalId = u64;

/// The acting identity behind a request.
///
/// Anonymous callers are represented by the *absence* of a `Principal`
/// (`Option<Principal>` at the policy seam), never by a sentinel id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    /// Elevated, ownership-independent privileges.
    pub staff: bool,
}

impl Principal {
    pub fn new(id: PrincipalId) -> Self {
        Self { id, staff: false }
    }

    pub fn staff(id: PrincipalId) -> Self {
        Self { id, staff: true }
    }
}
