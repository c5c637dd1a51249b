//! User accounts: registration, login, profile, password, deletion.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use storefront_core::error::{Result, StorefrontError};
use storefront_core::model::{Principal, PrincipalId, UserAccount};
use storefront_core::policy::{decide, require_owner_or_staff, OperationClass};

use crate::app_state::AppState;
use crate::auth::{credential_digest, verify_credential};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserAccount,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteAccountRequest {
    /// Re-authentication credential; staff callers may omit it.
    #[serde(default)]
    pub password: Option<String>,
}

pub fn register(state: &AppState, req: RegisterRequest) -> Result<UserAccount> {
    if req.username.is_empty() || req.email.is_empty() {
        return Err(StorefrontError::Validation(
            "username or email cannot be empty".into(),
        ));
    }
    if !req.email.contains('@') {
        return Err(StorefrontError::Validation(
            "email must be an email address".into(),
        ));
    }
    if req.password.is_empty() {
        return Err(StorefrontError::Validation("password cannot be empty".into()));
    }

    let user = UserAccount {
        id: state.store().next_id(),
        username: req.username,
        email: req.email,
        credential: credential_digest(&req.password),
        staff: false,
        joined_at: Utc::now(),
    };
    let user = state.store().create_user(user)?;
    tracing::info!(user_id = user.id, username = %user.username, "user registered");
    Ok(user)
}

/// Exchange credentials for an opaque session token.
pub fn login(state: &AppState, req: LoginRequest) -> Result<SessionResponse> {
    let user = state
        .store()
        .find_user_by_username(&req.username)
        .ok_or(StorefrontError::Unauthenticated)?;
    if !verify_credential(&req.password, &user.credential) {
        return Err(StorefrontError::Unauthenticated);
    }

    let token = state.sessions().issue(user.id);
    Ok(SessionResponse { token, user })
}

pub fn me(state: &AppState, actor: &Principal) -> Result<UserAccount> {
    state.store().get_user(actor.id)
}

/// Profile detail is a private read: owner or staff only.
pub fn get_user(state: &AppState, actor: &Principal, id: PrincipalId) -> Result<UserAccount> {
    let user = state.store().get_user(id)?;
    decide(OperationClass::ReadOwned, Some(actor), Some(user.id)).require("user profile")?;
    Ok(user)
}

pub fn update_user(
    state: &AppState,
    actor: &Principal,
    id: PrincipalId,
    req: UpdateUserRequest,
) -> Result<UserAccount> {
    let mut user = state.store().get_user(id)?;
    require_owner_or_staff(actor, user.id, "user profile")?;

    if let Some(username) = req.username {
        if username.is_empty() {
            return Err(StorefrontError::Validation("username cannot be empty".into()));
        }
        user.username = username;
    }
    if let Some(email) = req.email {
        if !email.contains('@') {
            return Err(StorefrontError::Validation(
                "email must be an email address".into(),
            ));
        }
        user.email = email;
    }
    let password_changed = match req.password {
        Some(p) if !p.is_empty() => {
            user.credential = credential_digest(&p);
            true
        }
        _ => false,
    };

    let user = state.store().update_user(user)?;
    if password_changed {
        state.sessions().revoke_all(user.id);
    }
    Ok(user)
}

pub fn change_password(
    state: &AppState,
    actor: &Principal,
    id: PrincipalId,
    req: ChangePasswordRequest,
) -> Result<()> {
    let mut user = state.store().get_user(id)?;
    require_owner_or_staff(actor, user.id, "user profile")?;

    if req.old_password.is_empty() || req.new_password.is_empty() {
        return Err(StorefrontError::Validation(
            "both old_password and new_password are required".into(),
        ));
    }
    if !actor.staff && !verify_credential(&req.old_password, &user.credential) {
        return Err(StorefrontError::Validation(
            "old password does not match".into(),
        ));
    }

    user.credential = credential_digest(&req.new_password);
    state.store().update_user(user)?;
    // Existing sessions die with the old credential.
    state.sessions().revoke_all(id);
    Ok(())
}

/// Destructive delete: the caller must re-present the account credential
/// unless they are staff.
pub fn delete_account(
    state: &AppState,
    actor: &Principal,
    id: PrincipalId,
    req: DeleteAccountRequest,
) -> Result<()> {
    let user = state.store().get_user(id)?;

    let credential_ok = req
        .password
        .as_deref()
        .map(|p| verify_credential(p, &user.credential))
        .unwrap_or(false);
    decide(
        OperationClass::DestructiveReauth { credential_ok },
        Some(actor),
        Some(user.id),
    )
    .require("account")?;

    state.store().delete_user(id)?;
    state.sessions().revoke_all(id);
    tracing::info!(user_id = id, by = actor.id, "account deleted");
    Ok(())
}

pub fn list_users(state: &AppState, actor: &Principal) -> Result<Vec<UserAccount>> {
    decide(OperationClass::AdminOnly, Some(actor), None).require("user list")?;
    Ok(state.store().list_users())
}
