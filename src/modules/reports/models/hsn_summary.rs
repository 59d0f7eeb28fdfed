use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::invoices::models::Invoice;

/// Description printed against every HSN row
pub const HSN_DESCRIPTION: &str = "Gold Jewellery";

/// Unit quantity code for weights in grams
pub const UQC_GRAMS: &str = "GMS";

/// One row of the GSTR-1 HSN summary: all line items sharing an HSN code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HsnSummaryEntry {
    /// HSN code (7113 when the line carried none)
    pub hsn_code: String,
    /// Fixed description for every entry
    pub description: String,
    /// Unit quantity code, always GMS
    pub uqc: String,
    /// Sum of net weight in grams
    pub total_quantity: Decimal,
    /// Sum of pre-tax line amounts
    pub taxable_value: Decimal,
    /// IGST on inter-state lines
    pub integrated_tax_amount: Decimal,
    /// CGST on intra-state lines
    pub central_tax_amount: Decimal,
    /// SGST on intra-state lines
    pub state_tax_amount: Decimal,
    /// No cess applies to jewellery
    pub cess_amount: Decimal,
    /// Taxable value plus all tax applied
    pub total_value: Decimal,
}

impl HsnSummaryEntry {
    /// Create an empty entry for `hsn_code`
    pub fn new(hsn_code: impl Into<String>) -> Self {
        Self {
            hsn_code: hsn_code.into(),
            description: HSN_DESCRIPTION.to_string(),
            uqc: UQC_GRAMS.to_string(),
            total_quantity: Decimal::ZERO,
            taxable_value: Decimal::ZERO,
            integrated_tax_amount: Decimal::ZERO,
            central_tax_amount: Decimal::ZERO,
            state_tax_amount: Decimal::ZERO,
            cess_amount: Decimal::ZERO,
            total_value: Decimal::ZERO,
        }
    }

    /// Total tax across all components
    pub fn total_tax(&self) -> Decimal {
        self.integrated_tax_amount
            .saturating_add(self.central_tax_amount)
            .saturating_add(self.state_tax_amount)
            .saturating_add(self.cess_amount)
    }
}

/// Output of HSN summary generation: the invoices used and the summary rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GstReport {
    /// Paid invoices in the period, as fetched
    pub invoices: Vec<Invoice>,
    /// One entry per HSN code, in order of first appearance
    pub hsn_summary: Vec<HsnSummaryEntry>,
}

impl GstReport {
    pub fn new(invoices: Vec<Invoice>, hsn_summary: Vec<HsnSummaryEntry>) -> Self {
        Self {
            invoices,
            hsn_summary,
        }
    }

    /// Check if the report has no paid invoices
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }
}
