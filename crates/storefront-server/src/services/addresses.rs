//! Billing addresses: per-user CRUD, staff override.

use serde::Deserialize;

use storefront_core::error::{Result, StorefrontError};
use storefront_core::model::{BillingAddress, Principal};
use storefront_core::policy::{decide, require_owner_or_staff, OperationClass};

use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddressRequest {
    pub name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAddressRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

pub fn list(state: &AppState, actor: &Principal) -> Vec<BillingAddress> {
    state.store().addresses_by_owner(actor.id)
}

pub fn create(state: &AppState, actor: &Principal, req: AddressRequest) -> Result<BillingAddress> {
    decide(OperationClass::Create, Some(actor), None).require("address")?;

    if req.name.is_empty() || req.street.is_empty() {
        return Err(StorefrontError::Validation(
            "address name and street are required".into(),
        ));
    }

    let address = BillingAddress {
        id: state.store().next_id(),
        owner: actor.id,
        name: req.name,
        phone: req.phone,
        street: req.street,
        city: req.city,
        state: req.state,
        postal_code: req.postal_code,
        country: req.country,
    };
    Ok(state.store().insert_address(address))
}

pub fn get(state: &AppState, actor: &Principal, id: u64) -> Result<BillingAddress> {
    let address = state.store().get_address(id)?;
    decide(OperationClass::ReadOwned, Some(actor), Some(address.owner)).require("address")?;
    Ok(address)
}

pub fn update(
    state: &AppState,
    actor: &Principal,
    id: u64,
    req: UpdateAddressRequest,
) -> Result<BillingAddress> {
    let mut address = state.store().get_address(id)?;
    require_owner_or_staff(actor, address.owner, "address")?;

    if let Some(v) = req.name {
        address.name = v;
    }
    if let Some(v) = req.phone {
        address.phone = v;
    }
    if let Some(v) = req.street {
        address.street = v;
    }
    if let Some(v) = req.city {
        address.city = v;
    }
    if let Some(v) = req.state {
        address.state = v;
    }
    if let Some(v) = req.postal_code {
        address.postal_code = v;
    }
    if let Some(v) = req.country {
        address.country = v;
    }

    state.store().update_address(address)
}

pub fn delete(state: &AppState, actor: &Principal, id: u64) -> Result<()> {
    let address = state.store().get_address(id)?;
    require_owner_or_staff(actor, address.owner, "address")?;
    state.store().delete_address(id)
}
