use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::GstConfig;
use crate::core::{AppError, Result};
use crate::modules::invoices::repositories::InvoiceStore;
use crate::modules::reports::models::{DateRange, DateRangeMode, GstReport};
use crate::modules::reports::services::hsn_aggregator::aggregate_hsn_summary;
use crate::modules::reports::services::inter_state::{InterStatePolicy, IntraStateOnly};
use crate::modules::shops::models::ShopTaxDefaults;
use crate::modules::shops::repositories::ShopConfigStore;

/// Service for generating GST HSN summary reports
///
/// Holds no per-report state; every call reads the stores afresh.
pub struct GstReportService {
    invoice_store: Arc<dyn InvoiceStore>,
    shop_store: Arc<dyn ShopConfigStore>,
    inter_state_policy: Arc<dyn InterStatePolicy>,
    date_range_mode: DateRangeMode,
}

impl GstReportService {
    /// Create a report service with legacy behaviour: single-day `from`
    /// ranges and every sale treated as intra-state
    pub fn new(invoice_store: Arc<dyn InvoiceStore>, shop_store: Arc<dyn ShopConfigStore>) -> Self {
        Self {
            invoice_store,
            shop_store,
            inter_state_policy: Arc::new(IntraStateOnly),
            date_range_mode: DateRangeMode::SingleDay,
        }
    }

    /// Create a report service from configuration
    pub fn from_config(
        invoice_store: Arc<dyn InvoiceStore>,
        shop_store: Arc<dyn ShopConfigStore>,
        config: &GstConfig,
    ) -> Self {
        Self::new(invoice_store, shop_store)
            .with_inter_state_policy(config.inter_state_policy.build())
            .with_date_range_mode(config.date_range_mode)
    }

    pub fn with_inter_state_policy(mut self, policy: Arc<dyn InterStatePolicy>) -> Self {
        self.inter_state_policy = policy;
        self
    }

    pub fn with_date_range_mode(mut self, mode: DateRangeMode) -> Self {
        self.date_range_mode = mode;
        self
    }

    /// Generate the HSN summary for a shop's paid invoices
    ///
    /// # Arguments
    /// * `shop_id` - Shop whose invoices are reported
    /// * `date_range` - Optional period; `from` alone is interpreted per the
    ///   configured [`DateRangeMode`]
    ///
    /// # Errors
    /// * `AppError::Validation` for a blank shop id or an inverted range
    /// * `AppError::FetchFailed` if either store fails; nothing is returned
    ///   in that case
    pub async fn generate_hsn_summary(
        &self,
        shop_id: &str,
        date_range: Option<DateRange>,
    ) -> Result<GstReport> {
        if shop_id.trim().is_empty() {
            return Err(AppError::validation("shop_id is required"));
        }

        let bounds = date_range
            .map(|range| range.resolve(self.date_range_mode))
            .transpose()?;

        info!(
            shop_id,
            from = ?bounds.map(|b| b.from),
            to = ?bounds.and_then(|b| b.to),
            policy = self.inter_state_policy.name(),
            "Generating HSN summary"
        );

        let (invoices, settings) = tokio::try_join!(
            self.invoice_store.fetch_paid_invoices(shop_id, bounds),
            self.shop_store.fetch_tax_settings(shop_id),
        )
        .map_err(|e| {
            error!(shop_id, error = %e, "Failed to fetch GST data");
            AppError::fetch_failed(e.to_string())
        })?;

        let defaults = ShopTaxDefaults::from(settings);
        let hsn_summary =
            aggregate_hsn_summary(&invoices, &defaults, self.inter_state_policy.as_ref());

        let report = GstReport::new(invoices, hsn_summary);

        if report.is_empty() {
            warn!(shop_id, "No paid invoices found for HSN summary");
        } else {
            info!(
                shop_id,
                invoices = report.invoices.len(),
                hsn_entries = report.hsn_summary.len(),
                "HSN summary generated"
            );
        }

        Ok(report)
    }
}

// Store-backed behaviour is covered in tests/integration/gst_report_service_test.rs
