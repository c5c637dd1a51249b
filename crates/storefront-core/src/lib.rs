//! storefront core: domain entities, authorization policy, and aggregate
//! rating maintenance.
//!
//! This crate defines the entity types and the two decision kernels shared
//! by the server and tooling: the access decision table in [`policy`] (who
//! may do what) and [`rating::RatingAggregator`] (derived product
//! statistics). It intentionally carries
//! no transport or runtime dependencies so it can be reused in multiple
//! contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `StorefrontError`/`Result` so server
//! processes do not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod policy;
pub mod rating;

/// Shared result type.
pub use error::{Result, StorefrontError};
