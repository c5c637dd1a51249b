#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use storefront_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listenz: "0.0.0.0:8080" # typo should fail
admin:
  username: "root"
  email: "root@example.com"
  password: "rootpw"
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "VALIDATION");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
admin:
  username: "root"
  email: "root@example.com"
  password: "rootpw"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.payments.currency, "usd");
    assert_eq!(cfg.admin.username, "root");
}

#[test]
fn rejects_wrong_version() {
    let bad = r#"
version: 2
admin:
  username: "root"
  email: "root@example.com"
  password: "rootpw"
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn rejects_bad_listen_address() {
    let bad = r#"
version: 1
server:
  listen: "not-an-addr"
admin:
  username: "root"
  email: "root@example.com"
  password: "rootpw"
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn rejects_bad_currency() {
    let bad = r#"
version: 1
payments:
  currency: "USDX"
admin:
  username: "root"
  email: "root@example.com"
  password: "rootpw"
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn rejects_empty_admin() {
    let bad = r#"
version: 1
admin:
  username: ""
  email: "root@example.com"
  password: "rootpw"
"#;
    assert!(config::load_from_str(bad).is_err());
}
