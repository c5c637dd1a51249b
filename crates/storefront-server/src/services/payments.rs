//! Charge flow: gateway pass-through, then order + confirmation.

use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use storefront_core::error::{Result, StorefrontError};
use storefront_core::model::{NotificationStatus, Order, Principal};
use storefront_core::policy::require_owner_or_staff;

use crate::app_state::AppState;
use crate::services::notifications;

#[derive(Debug, Deserialize)]
pub struct ChargeRequest {
    pub card_id: u64,
    pub amount: Decimal,
    pub ordered_item: String,
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Charge a stored card and create the paid order it pays for.
///
/// The order belongs to the cardholder; staff may trigger a charge on any
/// card, a regular user only on their own.
pub async fn charge(state: &AppState, actor: &Principal, req: ChargeRequest) -> Result<Order> {
    let card = state.store().get_card(req.card_id)?;
    require_owner_or_staff(actor, card.owner, "card")?;

    if req.amount <= Decimal::ZERO {
        return Err(StorefrontError::Validation(
            "charge amount must be positive".into(),
        ));
    }
    if req.ordered_item.is_empty() {
        return Err(StorefrontError::Validation("ordered_item is required".into()));
    }

    let amount_minor = (req.amount * Decimal::from(100))
        .trunc()
        .to_i64()
        .ok_or_else(|| StorefrontError::Validation("charge amount out of range".into()))?;

    let currency = &state.cfg().payments.currency;
    let description = req.description.as_deref().unwrap_or("Charge");
    let receipt = state
        .payments()
        .charge(&card.customer_id, amount_minor, currency, description)
        .await?;
    tracing::info!(receipt_id = %receipt.receipt_id, amount_minor, "charge completed");

    let order = Order {
        id: state.store().next_id(),
        owner: card.owner,
        ordered_item: req.ordered_item,
        address: req.address,
        total_price: req.amount,
        paid: true,
        paid_at: Some(Utc::now()),
        delivered: false,
        delivered_at: None,
        created_at: Utc::now(),
    };
    let order = state.store().insert_order(order);

    let notification = notifications::send_order_confirmation(state, &order).await?;
    if notification.status == NotificationStatus::Failed {
        tracing::warn!(order_id = order.id, "order confirmation not mailed");
    }

    Ok(order)
}
