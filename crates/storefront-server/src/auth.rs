//! Session tokens and credential digests.
//!
//! Tokens are opaque v4 UUIDs handed out at login and resolved on every
//! request; the wire format is not a contract and can change freely.
//! Credentials are stored as domain-prefixed SHA-256 digests, never
//! plaintext.

use dashmap::DashMap;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use storefront_core::error::{Result, StorefrontError};
use storefront_core::model::PrincipalId;

/// Live sessions: token -> principal id.
#[derive(Default)]
pub struct SessionRegistry {
    tokens: DashMap<String, PrincipalId>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            tokens: DashMap::new(),
        }
    }

    /// Issue a fresh token for a logged-in principal.
    pub fn issue(&self, principal_id: PrincipalId) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.insert(token.clone(), principal_id);
        token
    }

    /// Resolve a presented token, or fail as unauthenticated.
    pub fn resolve(&self, token: &str) -> Result<PrincipalId> {
        self.tokens
            .get(token)
            .map(|e| *e.value())
            .ok_or(StorefrontError::Unauthenticated)
    }

    /// Drop every session belonging to a principal (account deleted or
    /// password changed).
    pub fn revoke_all(&self, principal_id: PrincipalId) {
        self.tokens.retain(|_, v| *v != principal_id);
    }
}

/// Digest a plaintext credential for storage.
pub fn credential_digest(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"storefront.v1:");
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a presented credential against a stored digest.
pub fn verify_credential(presented: &str, stored_digest: &str) -> bool {
    // Constant-time-ish comparison over fixed-length hex digests.
    let candidate = credential_digest(presented);
    if candidate.len() != stored_digest.len() {
        return false;
    }
    candidate
        .bytes()
        .zip(stored_digest.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
