#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use storefront_core::model::Principal;
use storefront_server::app_state::AppState;
use storefront_server::config;
use storefront_server::services::{accounts, addresses};

const CFG: &str = r#"
version: 1
admin:
  username: "root"
  email: "root@example.com"
  password: "rootpw"
"#;

fn state() -> AppState {
    let cfg = config::load_from_str(CFG).unwrap();
    AppState::new(cfg).unwrap()
}

fn admin(state: &AppState) -> Principal {
    login(state, "root", "rootpw").unwrap().user.principal()
}

fn login(
    state: &AppState,
    username: &str,
    password: &str,
) -> storefront_core::Result<accounts::SessionResponse> {
    accounts::login(
        state,
        accounts::LoginRequest {
            username: username.into(),
            password: password.into(),
        },
    )
}

fn register(state: &AppState, name: &str) -> Principal {
    accounts::register(
        state,
        accounts::RegisterRequest {
            username: name.into(),
            email: format!("{name}@example.com"),
            password: "pw".into(),
        },
    )
    .unwrap()
    .principal()
}

#[test]
fn register_rejects_empty_and_duplicate_identities() {
    let state = state();

    let err = accounts::register(
        &state,
        accounts::RegisterRequest {
            username: String::new(),
            email: "a@example.com".into(),
            password: "pw".into(),
        },
    )
    .unwrap_err();
    assert_eq!(err.client_code().as_str(), "VALIDATION");

    register(&state, "alice");

    let dup_name = accounts::register(
        &state,
        accounts::RegisterRequest {
            username: "alice".into(),
            email: "other@example.com".into(),
            password: "pw".into(),
        },
    )
    .unwrap_err();
    assert_eq!(dup_name.client_code().as_str(), "CONFLICT");

    let dup_mail = accounts::register(
        &state,
        accounts::RegisterRequest {
            username: "alice2".into(),
            email: "alice@example.com".into(),
            password: "pw".into(),
        },
    )
    .unwrap_err();
    assert_eq!(dup_mail.client_code().as_str(), "CONFLICT");
}

#[test]
fn login_issues_resolvable_tokens() {
    let state = state();
    register(&state, "alice");

    let err = login(&state, "alice", "wrong").unwrap_err();
    assert_eq!(err.client_code().as_str(), "UNAUTHENTICATED");

    let session = login(&state, "alice", "pw").unwrap();
    let resolved = state.sessions().resolve(&session.token).unwrap();
    assert_eq!(resolved, session.user.id);

    assert!(state.sessions().resolve("no-such-token").is_err());
}

#[test]
fn profile_reads_are_private() {
    let state = state();
    let a = register(&state, "alice");
    let b = register(&state, "bob");
    let admin = admin(&state);

    assert!(accounts::get_user(&state, &a, a.id).is_ok());
    let err = accounts::get_user(&state, &b, a.id).unwrap_err();
    assert_eq!(err.client_code().as_str(), "FORBIDDEN");
    assert!(accounts::get_user(&state, &admin, a.id).is_ok());

    let err = accounts::get_user(&state, &a, 9999).unwrap_err();
    assert_eq!(err.client_code().as_str(), "NOT_FOUND");
}

#[test]
fn change_password_verifies_old_and_revokes_sessions() {
    let state = state();
    let a = register(&state, "alice");
    let session = login(&state, "alice", "pw").unwrap();

    let err = accounts::change_password(
        &state,
        &a,
        a.id,
        accounts::ChangePasswordRequest {
            old_password: "wrong".into(),
            new_password: "next".into(),
        },
    )
    .unwrap_err();
    assert_eq!(err.client_code().as_str(), "VALIDATION");

    accounts::change_password(
        &state,
        &a,
        a.id,
        accounts::ChangePasswordRequest {
            old_password: "pw".into(),
            new_password: "next".into(),
        },
    )
    .unwrap();

    // Old sessions die with the old credential.
    assert!(state.sessions().resolve(&session.token).is_err());
    assert!(login(&state, "alice", "pw").is_err());
    assert!(login(&state, "alice", "next").is_ok());
}

#[test]
fn staff_changes_password_without_the_old_one() {
    let state = state();
    let a = register(&state, "alice");
    let admin = admin(&state);

    accounts::change_password(
        &state,
        &admin,
        a.id,
        accounts::ChangePasswordRequest {
            old_password: "ignored".into(),
            new_password: "reset".into(),
        },
    )
    .unwrap();
    assert!(login(&state, "alice", "reset").is_ok());
}

#[test]
fn destructive_delete_requires_reauth_except_for_staff() {
    let state = state();
    let a = register(&state, "alice");
    let b = register(&state, "bob");
    let admin = admin(&state);

    // Missing credential.
    let err = accounts::delete_account(
        &state,
        &a,
        a.id,
        accounts::DeleteAccountRequest { password: None },
    )
    .unwrap_err();
    assert_eq!(err.client_code().as_str(), "FORBIDDEN");

    // Wrong credential.
    let err = accounts::delete_account(
        &state,
        &a,
        a.id,
        accounts::DeleteAccountRequest {
            password: Some("wrong".into()),
        },
    )
    .unwrap_err();
    assert_eq!(err.client_code().as_str(), "FORBIDDEN");

    // Someone else entirely, even with the right credential.
    let err = accounts::delete_account(
        &state,
        &b,
        a.id,
        accounts::DeleteAccountRequest {
            password: Some("pw".into()),
        },
    )
    .unwrap_err();
    assert_eq!(err.client_code().as_str(), "FORBIDDEN");

    // Owner with matching credential.
    accounts::delete_account(
        &state,
        &a,
        a.id,
        accounts::DeleteAccountRequest {
            password: Some("pw".into()),
        },
    )
    .unwrap();
    assert_eq!(
        accounts::get_user(&state, &admin, a.id)
            .unwrap_err()
            .client_code()
            .as_str(),
        "NOT_FOUND"
    );

    // Staff needs no credential.
    accounts::delete_account(
        &state,
        &admin,
        b.id,
        accounts::DeleteAccountRequest { password: None },
    )
    .unwrap();
}

#[test]
fn user_listing_is_admin_only() {
    let state = state();
    let a = register(&state, "alice");
    let admin = admin(&state);

    let err = accounts::list_users(&state, &a).unwrap_err();
    assert_eq!(err.client_code().as_str(), "FORBIDDEN");

    let users = accounts::list_users(&state, &admin).unwrap();
    assert_eq!(users.len(), 2); // root + alice
}

#[test]
fn address_delete_by_non_owner_is_forbidden_but_staff_may() {
    let state = state();
    let a = register(&state, "alice");
    let b = register(&state, "bob");
    let admin = admin(&state);

    let req = || addresses::AddressRequest {
        name: "Alice".into(),
        phone: "555-0100".into(),
        street: "1 Main St".into(),
        city: "Springfield".into(),
        state: "OR".into(),
        postal_code: "97000".into(),
        country: "US".into(),
    };

    let first = addresses::create(&state, &a, req()).unwrap();
    let second = addresses::create(&state, &a, req()).unwrap();

    let err = addresses::delete(&state, &b, first.id).unwrap_err();
    assert_eq!(err.client_code().as_str(), "FORBIDDEN");
    let err = addresses::get(&state, &b, first.id).unwrap_err();
    assert_eq!(err.client_code().as_str(), "FORBIDDEN");

    addresses::delete(&state, &a, first.id).unwrap();
    addresses::delete(&state, &admin, second.id).unwrap();
    assert!(addresses::list(&state, &a).is_empty());
}
