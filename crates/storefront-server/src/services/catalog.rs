//! Product catalog: public reads, staff-only writes.

use rust_decimal::Decimal;
use serde::Deserialize;

use storefront_core::error::{Result, StorefrontError};
use storefront_core::model::{Principal, Product};
use storefront_core::policy::{decide, OperationClass};

use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub in_stock: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub in_stock: Option<bool>,
}

pub fn list_products(state: &AppState) -> Vec<Product> {
    state.store().list_products()
}

pub fn get_product(state: &AppState, id: u64) -> Result<Product> {
    state.store().get_product(id)
}

pub fn create_product(
    state: &AppState,
    actor: Option<&Principal>,
    req: CreateProductRequest,
) -> Result<Product> {
    decide(OperationClass::AdminOnly, actor, None).require("catalog")?;

    if req.name.is_empty() {
        return Err(StorefrontError::Validation("product name cannot be empty".into()));
    }
    if req.price.is_sign_negative() {
        return Err(StorefrontError::Validation("price cannot be negative".into()));
    }

    let product = Product::new(
        state.store().next_id(),
        req.name,
        req.description,
        req.price,
        req.in_stock,
    );
    Ok(state.store().create_product(product))
}

pub fn update_product(
    state: &AppState,
    actor: Option<&Principal>,
    id: u64,
    req: UpdateProductRequest,
) -> Result<Product> {
    decide(OperationClass::AdminOnly, actor, None).require("catalog")?;

    if matches!(&req.name, Some(n) if n.is_empty()) {
        return Err(StorefrontError::Validation("product name cannot be empty".into()));
    }
    if matches!(&req.price, Some(p) if p.is_sign_negative()) {
        return Err(StorefrontError::Validation("price cannot be negative".into()));
    }

    state
        .store()
        .update_product_info(id, req.name, req.description, req.price, req.in_stock)
}

pub fn delete_product(state: &AppState, actor: Option<&Principal>, id: u64) -> Result<()> {
    decide(OperationClass::AdminOnly, actor, None).require("catalog")?;
    state.store().delete_product(id)
}
