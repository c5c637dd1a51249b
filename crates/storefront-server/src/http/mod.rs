//! HTTP edge: error mapping, principal extraction, handlers per area.

pub mod error;
pub mod extract;

pub mod account;
pub mod addresses;
pub mod cards;
pub mod catalog;
pub mod notifications;
pub mod orders;
pub mod payments;
pub mod ratings;
pub mod reports;

pub use error::{ApiError, ApiResult};
pub use extract::{AuthPrincipal, MaybePrincipal};
