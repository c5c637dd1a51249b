//! Stored cards.
//!
//! The full number exists only inside the register request on its way to
//! the gateway; the store keeps the masked tail and the gateway tokens.

use serde::{Deserialize, Serialize};

use storefront_core::error::Result;
use storefront_core::model::{Card, Principal};
use storefront_core::policy::{decide, require_owner_or_staff, OperationClass};

use crate::app_state::AppState;
use crate::payment::CardDetails;

#[derive(Debug, Deserialize)]
pub struct RegisterCardRequest {
    pub number: String,
    pub exp_month: u8,
    pub exp_year: u16,
    pub cvc: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name_on_card: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MaskedCard {
    pub id: u64,
    pub last4: String,
}

pub fn list(state: &AppState, actor: &Principal) -> Vec<Card> {
    state.store().cards_by_owner(actor.id)
}

pub async fn register(
    state: &AppState,
    actor: &Principal,
    req: RegisterCardRequest,
) -> Result<Card> {
    decide(OperationClass::Create, Some(actor), None).require("card")?;

    let account = state.store().get_user(actor.id)?;
    let details = CardDetails {
        number: req.number,
        exp_month: req.exp_month,
        exp_year: req.exp_year,
        cvc: req.cvc,
        email: req.email.unwrap_or(account.email),
    };
    let gateway_card = state.payments().register_card(details).await?;

    let card = Card {
        id: state.store().next_id(),
        owner: actor.id,
        last4: gateway_card.last4,
        exp_month: req.exp_month,
        exp_year: req.exp_year,
        name_on_card: req.name_on_card,
        customer_id: gateway_card.customer_id,
        card_id: gateway_card.card_id,
    };
    Ok(state.store().insert_card(card))
}

/// Masked detail: last 4 digits only.
pub fn masked(state: &AppState, actor: &Principal, id: u64) -> Result<MaskedCard> {
    let card = state.store().get_card(id)?;
    decide(OperationClass::ReadOwned, Some(actor), Some(card.owner)).require("card")?;
    Ok(MaskedCard {
        id: card.id,
        last4: card.last4,
    })
}

/// Detach at the gateway first; the row survives a gateway failure.
pub async fn delete(state: &AppState, actor: &Principal, id: u64) -> Result<()> {
    let card = state.store().get_card(id)?;
    require_owner_or_staff(actor, card.owner, "card")?;

    state
        .payments()
        .delete_card(&card.customer_id, &card.card_id)
        .await?;
    state.store().delete_card(id)?;
    Ok(())
}
