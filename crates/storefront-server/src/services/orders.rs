//! Orders: listing, delivery transitions, payment confirmation.

use chrono::Utc;

use storefront_core::error::Result;
use storefront_core::model::{NotificationStatus, Order, Principal};
use storefront_core::policy::{decide, require_owner_or_staff, OperationClass};

use crate::app_state::AppState;
use crate::services::notifications;

/// Staff see every order; everyone else sees their own.
pub fn list(state: &AppState, actor: &Principal) -> Vec<Order> {
    if actor.staff {
        state.store().list_orders()
    } else {
        state.store().orders_by_owner(actor.id)
    }
}

pub fn get(state: &AppState, actor: &Principal, id: u64) -> Result<Order> {
    let order = state.store().get_order(id)?;
    decide(OperationClass::ReadOwned, Some(actor), Some(order.owner)).require("order")?;
    Ok(order)
}

/// Staff-only transition. Emits a delivery-update notification to the
/// order's owner; a failed mail leaves the order delivered.
pub async fn mark_delivered(state: &AppState, actor: &Principal, id: u64) -> Result<Order> {
    decide(OperationClass::AdminOnly, Some(actor), None).require("order delivery")?;

    let mut order = state.store().get_order(id)?;
    order.delivered = true;
    order.delivered_at = Some(Utc::now());
    let order = state.store().update_order(order)?;

    let notification = notifications::send_delivery_update(state, &order, "delivered").await?;
    if notification.status == NotificationStatus::Failed {
        tracing::warn!(order_id = order.id, "delivery notification not mailed");
    }

    Ok(order)
}

/// Owner-or-staff: record that the order was paid.
pub fn confirm_payment(state: &AppState, actor: &Principal, id: u64) -> Result<Order> {
    let mut order = state.store().get_order(id)?;
    require_owner_or_staff(actor, order.owner, "order")?;

    order.paid = true;
    order.paid_at = Some(Utc::now());
    state.store().update_order(order)
}
