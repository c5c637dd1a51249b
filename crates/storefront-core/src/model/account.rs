//! Account-side entities: users, billing addresses, orders, stored cards.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::principal::{Principal, PrincipalId};

/// A registered user account.
///
/// `credential` is an opaque digest produced by the server's auth layer;
/// the core never sees plaintext and never serializes the digest out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: PrincipalId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub credential: String,
    pub staff: bool,
    pub joined_at: DateTime<Utc>,
}

impl UserAccount {
    /// Policy-facing view of this account.
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id,
            staff: self.staff,
        }
    }
}

/// A billing address owned by one principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub id: u64,
    pub owner: PrincipalId,
    pub name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub owner: PrincipalId,
    pub ordered_item: String,
    pub address: String,
    pub total_price: Decimal,
    pub paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
    pub delivered: bool,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A stored payment card.
///
/// Only the masked tail of the number is persisted; the gateway holds the
/// real instrument behind `customer_id`/`card_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u64,
    pub owner: PrincipalId,
    pub last4: String,
    pub exp_month: u8,
    pub exp_year: u16,
    #[serde(default)]
    pub name_on_card: Option<String>,
    pub customer_id: String,
    pub card_id: String,
}
