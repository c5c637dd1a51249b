#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rust_decimal::Decimal;
use storefront_core::model::{Principal, Product};
use storefront_server::app_state::AppState;
use storefront_server::config;
use storefront_server::services::{accounts, catalog, ratings};

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
    accounts::login(
        state,
        accounts::LoginRequest {
            username: "root".into(),
            password: "rootpw".into(),
        },
    )
    .unwrap()
    .user
    .principal()
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

fn seed_product(state: &AppState) -> Product {
    let admin = admin(state);
    catalog::create_product(
        state,
        Some(&admin),
        catalog::CreateProductRequest {
            name: "keyboard".into(),
            description: String::new(),
            price: "49.99".parse().unwrap(),
            in_stock: true,
        },
    )
    .unwrap()
}

fn rate(state: &AppState, actor: &Principal, product_id: u64, value: u8) -> storefront_core::Result<storefront_core::model::Rating> {
    ratings::submit(
        state,
        actor,
        product_id,
        ratings::RateRequest {
            value,
            comment: None,
        },
    )
}

fn stats(state: &AppState, product_id: u64) -> (u32, Decimal) {
    let p = catalog::get_product(state, product_id).unwrap();
    (p.total_ratings, p.average_rating)
}

#[test]
fn spec_scenario_two_raters_then_update() {
    let state = state();
    let product = seed_product(&state);
    let a = register(&state, "alice");
    let b = register(&state, "bob");

    assert_eq!(stats(&state, product.id), (0, "0.00".parse().unwrap()));

    let rating_a = rate(&state, &a, product.id, 4).unwrap();
    assert_eq!(stats(&state, product.id), (1, "4.00".parse().unwrap()));

    rate(&state, &b, product.id, 2).unwrap();
    assert_eq!(stats(&state, product.id), (2, "3.00".parse().unwrap()));

    // A second create by the same (owner, product) pair is rejected and
    // changes nothing.
    let err = rate(&state, &a, product.id, 5).unwrap_err();
    assert_eq!(err.client_code().as_str(), "CONFLICT");
    assert_eq!(stats(&state, product.id), (2, "3.00".parse().unwrap()));

    // Explicit update recomputes the average, count unchanged.
    ratings::update(
        &state,
        &a,
        rating_a.id,
        ratings::UpdateRatingRequest {
            value: Some(5),
            comment: None,
        },
    )
    .unwrap();
    assert_eq!(stats(&state, product.id), (2, "3.50".parse().unwrap()));
}

#[test]
fn rating_value_out_of_range_is_rejected() {
    let state = state();
    let product = seed_product(&state);
    let a = register(&state, "alice");

    for bad in [0u8, 6, 200] {
        let err = rate(&state, &a, product.id, bad).unwrap_err();
        assert_eq!(err.client_code().as_str(), "VALIDATION");
    }
    assert_eq!(stats(&state, product.id).0, 0);
}

#[test]
fn rating_on_missing_product_is_not_found() {
    let state = state();
    let a = register(&state, "alice");
    let err = rate(&state, &a, 9999, 3).unwrap_err();
    assert_eq!(err.client_code().as_str(), "NOT_FOUND");
}

#[test]
fn only_owner_or_staff_updates_a_rating() {
    let state = state();
    let product = seed_product(&state);
    let a = register(&state, "alice");
    let b = register(&state, "bob");
    let admin = admin(&state);

    let rating = rate(&state, &a, product.id, 3).unwrap();

    let err = ratings::update(
        &state,
        &b,
        rating.id,
        ratings::UpdateRatingRequest {
            value: Some(1),
            comment: None,
        },
    )
    .unwrap_err();
    assert_eq!(err.client_code().as_str(), "FORBIDDEN");

    // Staff bypasses ownership.
    ratings::update(
        &state,
        &admin,
        rating.id,
        ratings::UpdateRatingRequest {
            value: Some(5),
            comment: Some("moderated".into()),
        },
    )
    .unwrap();
    assert_eq!(stats(&state, product.id), (1, "5.00".parse().unwrap()));
}

#[test]
fn uniqueness_lookup_and_listings() {
    let state = state();
    let product = seed_product(&state);
    let a = register(&state, "alice");
    let b = register(&state, "bob");

    rate(&state, &a, product.id, 4).unwrap();

    assert!(state.store().find_rating(a.id, product.id).unwrap().is_some());
    assert!(state.store().find_rating(b.id, product.id).unwrap().is_none());

    assert_eq!(ratings::list_for_product(&state, product.id).unwrap().len(), 1);
    assert_eq!(ratings::my_ratings(&state, &a).len(), 1);
    assert!(ratings::my_ratings(&state, &b).is_empty());
}

#[test]
fn concurrent_creates_for_one_product_admit_exactly_one_per_user() {
    let state = state();
    let product = seed_product(&state);
    let a = register(&state, "alice");

    // Hammer the same (owner, product) pair from many threads; exactly one
    // create wins, everyone else loses the uniqueness race.
    let results: Vec<_> = std::thread::scope(|s| {
        (0..8)
            .map(|_| {
                let state = &state;
                let a = &a;
                s.spawn(move || rate(state, a, product.id, 4).is_ok())
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(results.iter().filter(|ok| **ok).count(), 1);
    assert_eq!(stats(&state, product.id), (1, "4.00".parse().unwrap()));
}
