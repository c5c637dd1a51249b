//! Notification records, preference flags, and gated mail dispatch.
//!
//! Creating a notification always records it; mail goes out only when the
//! owner's per-type preference flag allows it. A mail failure marks the
//! record `Failed` and is logged, but never rolls back the triggering
//! operation (an order stays delivered even if SMTP is down).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use storefront_core::error::Result;
use storefront_core::model::{
    Notification, NotificationKind, NotificationPreference, Order, Principal, PrincipalId,
};
use storefront_core::policy::{decide, require_owner_or_staff, OperationClass};

use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub order_updates: Option<bool>,
    pub delivery_updates: Option<bool>,
    pub promotional_emails: Option<bool>,
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct PromoteRequest {
    pub user_id: PrincipalId,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
}

pub fn list(state: &AppState, actor: &Principal, unread_only: bool) -> Vec<Notification> {
    let mut out = state.store().notifications_by_owner(actor.id);
    if unread_only {
        out.retain(|n| n.is_unread());
    }
    out
}

pub fn mark_read(state: &AppState, actor: &Principal, id: u64) -> Result<Notification> {
    let mut notification = state.store().get_notification(id)?;
    require_owner_or_staff(actor, notification.owner, "notification")?;

    notification.mark_read();
    state.store().update_notification(notification)
}

pub fn preferences(state: &AppState, actor: &Principal) -> NotificationPreference {
    state.store().preferences_for(actor.id)
}

pub fn update_preferences(
    state: &AppState,
    actor: &Principal,
    req: UpdatePreferencesRequest,
) -> NotificationPreference {
    let mut prefs = state.store().preferences_for(actor.id);
    if let Some(v) = req.order_updates {
        prefs.order_updates = v;
    }
    if let Some(v) = req.delivery_updates {
        prefs.delivery_updates = v;
    }
    if let Some(v) = req.promotional_emails {
        prefs.promotional_emails = v;
    }
    if let Some(v) = req.email_notifications {
        prefs.email_notifications = v;
    }
    if let Some(v) = req.push_notifications {
        prefs.push_notifications = v;
    }
    state.store().update_preferences(prefs)
}

/// Staff-triggered promotional notification for one user.
pub async fn promote(
    state: &AppState,
    actor: &Principal,
    req: PromoteRequest,
) -> Result<Notification> {
    decide(OperationClass::AdminOnly, Some(actor), None).require("promotion")?;
    create_and_dispatch(
        state,
        req.user_id,
        NotificationKind::Promotional,
        req.title,
        req.message,
        req.scheduled_for,
        None,
    )
    .await
}

/// Record a notification, then mail it if the owner's preferences allow.
pub async fn create_and_dispatch(
    state: &AppState,
    owner: PrincipalId,
    kind: NotificationKind,
    title: String,
    message: String,
    scheduled_for: Option<DateTime<Utc>>,
    related_order: Option<u64>,
) -> Result<Notification> {
    let user = state.store().get_user(owner)?;

    let mut notification = Notification::new(
        state.store().next_id(),
        owner,
        kind,
        title,
        message,
        scheduled_for,
        related_order,
    );
    state.store().insert_notification(notification.clone());

    let prefs = state.store().preferences_for(owner);
    if prefs.mail_enabled(kind) {
        match state
            .mailer()
            .send(&user.email, &notification.title, &notification.message)
            .await
        {
            Ok(()) => notification.mark_sent(),
            Err(e) => {
                tracing::warn!(notification_id = notification.id, error = %e, "mail dispatch failed");
                notification.mark_failed();
            }
        }
        notification = state.store().update_notification(notification)?;
    }

    Ok(notification)
}

pub async fn send_order_confirmation(state: &AppState, order: &Order) -> Result<Notification> {
    let message = format!(
        "Thank you for your order #{}!\nOrder Total: {}\n\nYou will receive updates about your order status.",
        order.id, order.total_price
    );
    create_and_dispatch(
        state,
        order.owner,
        NotificationKind::OrderConfirmation,
        format!("Order Confirmation #{}", order.id),
        message,
        None,
        Some(order.id),
    )
    .await
}

pub async fn send_delivery_update(
    state: &AppState,
    order: &Order,
    status_update: &str,
) -> Result<Notification> {
    let message = format!(
        "Update for your order #{}:\nStatus: {status_update}\n\nTrack your order for more details.",
        order.id
    );
    create_and_dispatch(
        state,
        order.owner,
        NotificationKind::DeliveryUpdate,
        format!("Delivery Update for Order #{}", order.id),
        message,
        None,
        Some(order.id),
    )
    .await
}
