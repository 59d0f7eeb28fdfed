use actix_web::{web, HttpResponse, ResponseError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, warn, Level};

use crate::core::{AppError, Result};
use crate::modules::invoices::models::Invoice;
use crate::modules::reports::models::{DateRange, GstReport, HsnSummaryEntry};
use crate::modules::reports::services::GstReportService;

/// Query parameters for the HSN summary endpoint
#[derive(Debug, Deserialize)]
pub struct HsnSummaryQuery {
    pub shop_id: String,
    /// Start of period (inclusive, format: YYYY-MM-DD)
    #[serde(default)]
    pub from: Option<String>,
    /// End of period (inclusive, format: YYYY-MM-DD)
    #[serde(default)]
    pub to: Option<String>,
}

/// Response body: the invoices used and one row per HSN code
#[derive(Debug, Serialize, Deserialize)]
pub struct GstReportResponse {
    pub invoices: Vec<Invoice>,
    pub hsn_summary: Vec<HsnSummaryEntryResponse>,
}

/// HSN summary row; decimals as strings for JSON precision
#[derive(Debug, Serialize, Deserialize)]
pub struct HsnSummaryEntryResponse {
    pub hsn_code: String,
    pub description: String,
    pub uqc: String,
    pub total_quantity: String,
    pub taxable_value: String,
    pub integrated_tax_amount: String,
    pub central_tax_amount: String,
    pub state_tax_amount: String,
    pub cess_amount: String,
    pub total_value: String,
}

fn decimal_text(value: Decimal) -> String {
    value.normalize().to_string()
}

impl From<HsnSummaryEntry> for HsnSummaryEntryResponse {
    fn from(entry: HsnSummaryEntry) -> Self {
        Self {
            hsn_code: entry.hsn_code,
            description: entry.description,
            uqc: entry.uqc,
            total_quantity: decimal_text(entry.total_quantity),
            taxable_value: decimal_text(entry.taxable_value),
            integrated_tax_amount: decimal_text(entry.integrated_tax_amount),
            central_tax_amount: decimal_text(entry.central_tax_amount),
            state_tax_amount: decimal_text(entry.state_tax_amount),
            cess_amount: decimal_text(entry.cess_amount),
            total_value: decimal_text(entry.total_value),
        }
    }
}

impl From<GstReport> for GstReportResponse {
    fn from(report: GstReport) -> Self {
        Self {
            invoices: report.invoices,
            hsn_summary: report
                .hsn_summary
                .into_iter()
                .map(HsnSummaryEntryResponse::from)
                .collect(),
        }
    }
}

/// GET /reports/gst/hsn-summary
///
/// Returns the paid invoices of a shop in the period and their HSN summary.
pub async fn get_hsn_summary(
    service: web::Data<GstReportService>,
    query: web::Query<HsnSummaryQuery>,
) -> HttpResponse {
    match handle_get_hsn_summary(service, query.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            match log_level_for(&e) {
                Some(level) if level == Level::WARN => {
                    warn!("Rejected HSN summary request: {}", e)
                }
                Some(_) => error!("Failed to generate HSN summary: {}", e),
                None => {}
            }
            e.error_response()
        }
    }
}

// FetchFailed is logged with its cause by the service
fn log_level_for(err: &AppError) -> Option<Level> {
    match err {
        AppError::Validation(_) => Some(Level::WARN),
        AppError::FetchFailed(_) => None,
        _ => Some(Level::ERROR),
    }
}

async fn handle_get_hsn_summary(
    service: web::Data<GstReportService>,
    query: HsnSummaryQuery,
) -> Result<GstReportResponse> {
    let date_range = parse_date_range(query.from.as_deref(), query.to.as_deref())?;

    let report = service
        .generate_hsn_summary(&query.shop_id, date_range)
        .await?;

    Ok(GstReportResponse::from(report))
}

fn parse_date_range(from: Option<&str>, to: Option<&str>) -> Result<Option<DateRange>> {
    let from = from.map(|s| parse_date("from", s)).transpose()?;
    let to = to.map(|s| parse_date("to", s)).transpose()?;

    match (from, to) {
        (Some(from), to) => Ok(Some(DateRange::new(from, to))),
        (None, Some(_)) => Err(AppError::validation("'to' requires 'from'")),
        (None, None) => Ok(None),
    }
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError::validation(format!(
            "Invalid {} format: '{}'. Expected YYYY-MM-DD",
            field, raw
        ))
    })
}

/// Configure routes for reports module
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports/gst")
            .route("/hsn-summary", web::get().to(get_hsn_summary)),
    );
}
