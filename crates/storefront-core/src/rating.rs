//! Aggregate rating maintenance.
//!
//! A product's `average_rating`/`total_ratings` are an explicitly recomputed
//! projection over its rating set, never an incremental running average. The
//! recompute always re-derives the mean from the full current set, so the
//! result is exact and self-healing against prior drift, and repeated
//! recomputes over an unchanged set are idempotent.
//!
//! Callers must invoke these inside the same atomic unit as the rating
//! write; the server's store holds a product-scoped critical section around
//! the uniqueness check, the rating write, and the recompute.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::catalog::{Product, Rating};

/// Stateless recompute kernel for product rating statistics.
pub struct RatingAggregator;

impl RatingAggregator {
    /// Apply statistics after a rating was created.
    ///
    /// Precondition (enforced by the store's uniqueness check): `ratings`
    /// already contains the new rating and contains no other rating by the
    /// same owner for this product.
    pub fn on_rating_created(product: &mut Product, ratings: &[Rating]) {
        Self::recompute(product, ratings);
    }

    /// Apply statistics after an existing rating changed value.
    ///
    /// The count is unchanged by construction; the full-set recompute yields
    /// the same count again.
    pub fn on_rating_updated(product: &mut Product, ratings: &[Rating]) {
        Self::recompute(product, ratings);
    }

    /// Re-derive both statistics from the full rating set.
    pub fn recompute(product: &mut Product, ratings: &[Rating]) {
        product.total_ratings = ratings.len() as u32;
        product.average_rating = mean(ratings);
    }
}

/// Arithmetic mean of the rating values, 2 decimal places, rounded
/// half-away-from-zero. `0.00` for an empty set.
///
/// The rounding mode is user-visible and fixed: 3 ratings of 4, 5, 5 show
/// as 4.67; eight ratings averaging 1.125 show as 1.13.
fn mean(ratings: &[Rating]) -> Decimal {
    if ratings.is_empty() {
        return Decimal::new(0, 2);
    }
    let sum: Decimal = ratings
        .iter()
        .map(|r| Decimal::from(r.value))
        .sum();
    (sum / Decimal::from(ratings.len() as u64))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
