//! Domain entities.
//!
//! Every owned resource (rating, address, order, card, report, notification)
//! carries exactly one `PrincipalId` owner, fixed at creation. Ownership
//! never transfers; the policy table compares it against the acting
//! principal.

pub mod account;
pub mod catalog;
pub mod notification;
pub mod principal;
pub mod report;

pub use account::{BillingAddress, Card, Order, UserAccount};
pub use catalog::{Product, Rating, RATING_MAX, RATING_MIN};
pub use notification::{
    Notification, NotificationKind, NotificationPreference, NotificationStatus,
};
pub use principal::{Principal, PrincipalId};
pub use report::{Report, ReportKind, ReportStatus};
