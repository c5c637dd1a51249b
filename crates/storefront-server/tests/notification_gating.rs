#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use storefront_core::error::{Result, StorefrontError};
use storefront_core::model::{NotificationStatus, Order, Principal};
use storefront_server::app_state::AppState;
use storefront_server::config;
use storefront_server::mailer::Mailer;
use storefront_server::payment::SandboxGateway;
use storefront_server::services::{accounts, notifications, orders};

const CFG: &str = r#"
version: 1
admin:
  username: "root"
  email: "root@example.com"
  password: "rootpw"
"#;

/// Captures outbound mail instead of sending it.
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, _body: &str) -> Result<()> {
        self.sent
            .lock()
            .map_err(|_| StorefrontError::Internal("poisoned".into()))?
            .push((to.to_string(), subject.to_string()));
        Ok(())
    }
}

/// Fails every send.
struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _to: &str, _subject: &str, _body: &str) -> Result<()> {
        Err(StorefrontError::Internal("smtp down".into()))
    }
}

fn state_with(mailer: Arc<dyn Mailer>) -> AppState {
    let cfg = config::load_from_str(CFG).unwrap();
    AppState::with_adapters(cfg, Arc::new(SandboxGateway::new()), mailer).unwrap()
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

fn seed_order(state: &AppState, owner: u64) -> Order {
    state.store().insert_order(Order {
        id: state.store().next_id(),
        owner,
        ordered_item: "keyboard".into(),
        address: "1 Main St".into(),
        total_price: "49.99".parse().unwrap(),
        paid: true,
        paid_at: Some(Utc::now()),
        delivered: false,
        delivered_at: None,
        created_at: Utc::now(),
    })
}

#[tokio::test]
async fn mark_delivered_mails_the_owner_when_enabled() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = state_with(mailer.clone());
    let admin = admin(&state);
    let a = register(&state, "alice");
    let order = seed_order(&state, a.id);

    let updated = orders::mark_delivered(&state, &admin, order.id).await.unwrap();
    assert!(updated.delivered);
    assert!(updated.delivered_at.is_some());

    let inbox = mailer.sent.lock().unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].0, "alice@example.com");
    assert!(inbox[0].1.contains("Delivery Update"));

    let mine = notifications::list(&state, &a, false);
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].status, NotificationStatus::Sent);
    assert_eq!(mine[0].related_order, Some(order.id));
}

#[tokio::test]
async fn disabled_preference_suppresses_mail_but_records_the_notification() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = state_with(mailer.clone());
    let admin = admin(&state);
    let a = register(&state, "alice");

    notifications::update_preferences(
        &state,
        &a,
        notifications::UpdatePreferencesRequest {
            order_updates: None,
            delivery_updates: Some(false),
            promotional_emails: None,
            email_notifications: None,
            push_notifications: None,
        },
    );

    let order = seed_order(&state, a.id);
    orders::mark_delivered(&state, &admin, order.id).await.unwrap();

    assert!(mailer.sent.lock().unwrap().is_empty());

    let mine = notifications::list(&state, &a, false);
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].status, NotificationStatus::Pending);
}

#[tokio::test]
async fn mail_failure_marks_the_notification_failed_but_keeps_the_transition() {
    let state = state_with(Arc::new(FailingMailer));
    let admin = admin(&state);
    let a = register(&state, "alice");
    let order = seed_order(&state, a.id);

    let updated = orders::mark_delivered(&state, &admin, order.id).await.unwrap();
    assert!(updated.delivered);

    let mine = notifications::list(&state, &a, false);
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].status, NotificationStatus::Failed);
}

#[tokio::test]
async fn promotions_are_staff_only_and_respect_the_flag() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = state_with(mailer.clone());
    let admin = admin(&state);
    let a = register(&state, "alice");

    let err = notifications::promote(
        &state,
        &a,
        notifications::PromoteRequest {
            user_id: a.id,
            title: "Sale".into(),
            message: "Everything must go".into(),
            scheduled_for: None,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.client_code().as_str(), "FORBIDDEN");

    let sent = notifications::promote(
        &state,
        &admin,
        notifications::PromoteRequest {
            user_id: a.id,
            title: "Sale".into(),
            message: "Everything must go".into(),
            scheduled_for: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(sent.status, NotificationStatus::Sent);
    assert_eq!(mailer.sent.lock().unwrap().len(), 1);

    // Opting out of promotional mail leaves the record pending.
    notifications::update_preferences(
        &state,
        &a,
        notifications::UpdatePreferencesRequest {
            order_updates: None,
            delivery_updates: None,
            promotional_emails: Some(false),
            email_notifications: None,
            push_notifications: None,
        },
    );
    let second = notifications::promote(
        &state,
        &admin,
        notifications::PromoteRequest {
            user_id: a.id,
            title: "Sale again".into(),
            message: "Still going".into(),
            scheduled_for: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(second.status, NotificationStatus::Pending);
    assert_eq!(mailer.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn mark_read_and_unread_filter() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = state_with(mailer);
    let admin = admin(&state);
    let a = register(&state, "alice");
    let b = register(&state, "bob");

    let order = seed_order(&state, a.id);
    orders::mark_delivered(&state, &admin, order.id).await.unwrap();

    let mine = notifications::list(&state, &a, true);
    assert_eq!(mine.len(), 1);

    // Only the owner (or staff) may acknowledge.
    let err = notifications::mark_read(&state, &b, mine[0].id).unwrap_err();
    assert_eq!(err.client_code().as_str(), "FORBIDDEN");

    let read = notifications::mark_read(&state, &a, mine[0].id).unwrap();
    assert_eq!(read.status, NotificationStatus::Read);
    assert!(read.read_at.is_some());

    assert!(notifications::list(&state, &a, true).is_empty());
    assert_eq!(notifications::list(&state, &a, false).len(), 1);
}
