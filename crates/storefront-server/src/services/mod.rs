//! Business logic per resource area.
//!
//! Every operation passes through the access decision table before touching
//! the store; handlers stay thin. Request DTOs live next to the
//! logic that consumes them.

pub mod accounts;
pub mod addresses;
pub mod cards;
pub mod catalog;
pub mod notifications;
pub mod orders;
pub mod payments;
pub mod ratings;
pub mod reports;
