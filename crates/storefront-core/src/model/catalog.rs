//! Catalog entities: products and their ratings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StorefrontError};
use crate::model::principal::PrincipalId;

/// Lowest accepted rating value.
pub const RATING_MIN: u8 = 1;
/// Highest accepted rating value.
pub const RATING_MAX: u8 = 5;

/// A catalog product.
///
/// `average_rating` and `total_ratings` are a derived projection over the
/// product's rating set. They are mutated only by
/// [`RatingAggregator`](crate::rating::RatingAggregator), inside the same
/// atomic unit as the triggering rating write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub in_stock: bool,
    /// Mean of all rating values, 2 decimal places. `0.00` with no ratings.
    pub average_rating: Decimal,
    /// Count of ratings. `0` with no ratings.
    pub total_ratings: u32,
}

impl Product {
    pub fn new(id: u64, name: String, description: String, price: Decimal, in_stock: bool) -> Self {
        Self {
            id,
            name,
            description,
            price,
            in_stock,
            average_rating: Decimal::new(0, 2),
            total_ratings: 0,
        }
    }
}

/// A single principal's rating of a product.
///
/// At most one rating exists per (owner, product) pair; a second create is
/// rejected, never merged. Ownership is immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: u64,
    pub owner: PrincipalId,
    pub product_id: u64,
    /// Integer 1..=5 inclusive.
    pub value: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(
        id: u64,
        owner: PrincipalId,
        product_id: u64,
        value: u8,
        comment: Option<String>,
    ) -> Result<Self> {
        validate_value(value)?;
        Ok(Self {
            id,
            owner,
            product_id,
            value,
            comment,
            created_at: Utc::now(),
        })
    }
}

/// Reject values outside 1..=5.
pub fn validate_value(value: u8) -> Result<()> {
    if !(RATING_MIN..=RATING_MAX).contains(&value) {
        return Err(StorefrontError::Validation(format!(
            "rating value must be between {RATING_MIN} and {RATING_MAX}, got {value}"
        )));
    }
    Ok(())
}
