//! Product and seller issue reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::principal::PrincipalId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportKind {
    Product,
    Seller,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Pending,
    Investigating,
    Resolved,
    Closed,
}

/// An issue report filed by a user. Status transitions are staff-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub owner: PrincipalId,
    /// Present for product reports, absent for seller/other.
    pub product_id: Option<u64>,
    pub kind: ReportKind,
    pub title: String,
    pub description: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(
        id: u64,
        owner: PrincipalId,
        product_id: Option<u64>,
        kind: ReportKind,
        title: String,
        description: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner,
            product_id,
            kind,
            title,
            description,
            status: ReportStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}
