//! Issue reports: users file them, staff drive the status machine.

use chrono::Utc;
use serde::Deserialize;

use storefront_core::error::{Result, StorefrontError};
use storefront_core::model::{Principal, Report, ReportKind, ReportStatus};
use storefront_core::policy::{decide, OperationClass};

use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct FileReportRequest {
    pub kind: ReportKind,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub product_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeStatusRequest {
    pub status: ReportStatus,
}

pub fn file(state: &AppState, actor: &Principal, req: FileReportRequest) -> Result<Report> {
    decide(OperationClass::Create, Some(actor), None).require("report")?;

    if req.title.is_empty() || req.description.is_empty() {
        return Err(StorefrontError::Validation(
            "report title and description are required".into(),
        ));
    }
    // A product report must point at a product that exists.
    if let Some(pid) = req.product_id {
        state.store().get_product(pid)?;
    }

    let report = Report::new(
        state.store().next_id(),
        actor.id,
        req.product_id,
        req.kind,
        req.title,
        req.description,
    );
    Ok(state.store().insert_report(report))
}

/// Staff see every report; everyone else sees their own.
pub fn list(state: &AppState, actor: &Principal) -> Vec<Report> {
    if actor.staff {
        state.store().list_reports()
    } else {
        state.store().reports_by_owner(actor.id)
    }
}

pub fn get(state: &AppState, actor: &Principal, id: u64) -> Result<Report> {
    let report = state.store().get_report(id)?;
    decide(OperationClass::ReadOwned, Some(actor), Some(report.owner)).require("report")?;
    Ok(report)
}

pub fn change_status(
    state: &AppState,
    actor: &Principal,
    id: u64,
    req: ChangeStatusRequest,
) -> Result<Report> {
    decide(OperationClass::AdminOnly, Some(actor), None).require("report status")?;

    let mut report = state.store().get_report(id)?;
    report.status = req.status;
    report.updated_at = Utc::now();
    state.store().update_report(report)
}
