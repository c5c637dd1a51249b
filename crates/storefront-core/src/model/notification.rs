//! User notifications and per-user delivery preferences.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::principal::PrincipalId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    OrderConfirmation,
    DeliveryUpdate,
    Promotional,
    Reminder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationStatus {
    Pending,
    Sent,
    Failed,
    Read,
}

/// A notification recorded for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub owner: PrincipalId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub status: NotificationStatus,
    pub created_at: DateTime<Utc>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub sent_at: Option<DateTime<Utc>>,
    pub read_at: Option<DateTime<Utc>>,
    pub related_order: Option<u64>,
}

impl Notification {
    pub fn new(
        id: u64,
        owner: PrincipalId,
        kind: NotificationKind,
        title: String,
        message: String,
        scheduled_for: Option<DateTime<Utc>>,
        related_order: Option<u64>,
    ) -> Self {
        Self {
            id,
            owner,
            kind,
            title,
            message,
            status: NotificationStatus::Pending,
            created_at: Utc::now(),
            scheduled_for,
            sent_at: None,
            read_at: None,
            related_order,
        }
    }

    pub fn mark_sent(&mut self) {
        self.status = NotificationStatus::Sent;
        self.sent_at = Some(Utc::now());
    }

    pub fn mark_failed(&mut self) {
        self.status = NotificationStatus::Failed;
    }

    pub fn mark_read(&mut self) {
        self.status = NotificationStatus::Read;
        self.read_at = Some(Utc::now());
    }

    /// Unread means not yet acknowledged by the user (Pending or Sent).
    pub fn is_unread(&self) -> bool {
        matches!(
            self.status,
            NotificationStatus::Pending | NotificationStatus::Sent
        )
    }
}

/// Per-user delivery preference flags. Defaults are all-on; a row is
/// materialized on first touch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPreference {
    pub owner: PrincipalId,
    pub order_updates: bool,
    pub delivery_updates: bool,
    pub promotional_emails: bool,
    pub email_notifications: bool,
    pub push_notifications: bool,
}

impl NotificationPreference {
    pub fn new(owner: PrincipalId) -> Self {
        Self {
            owner,
            order_updates: true,
            delivery_updates: true,
            promotional_emails: true,
            email_notifications: true,
            push_notifications: true,
        }
    }

    /// Whether mail goes out for a notification of `kind`.
    ///
    /// Reminders are recorded but never mailed; the per-type flags gate the
    /// other kinds.
    pub fn mail_enabled(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::OrderConfirmation => self.order_updates,
            NotificationKind::DeliveryUpdate => self.delivery_updates,
            NotificationKind::Promotional => self.promotional_emails,
            NotificationKind::Reminder => false,
        }
    }
}
