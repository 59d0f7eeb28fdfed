// Invoice model as read by the GST report.
//
// Invoices are issued and settled elsewhere; this crate only reads them.
// Tax amounts are stored at invoice level and may be missing on invoices
// created before the shop configured GST, so they stay optional.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use crate::core::numeric::lenient_decimal;

/// Invoice status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Being edited, not yet issued
    #[default]
    Draft,

    /// Issued and awaiting payment
    Pending,

    /// Settled; the only status included in GST reports
    Paid,

    /// Voided after issue
    Cancelled,
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::Draft => write!(f, "draft"),
            InvoiceStatus::Pending => write!(f, "pending"),
            InvoiceStatus::Paid => write!(f, "paid"),
            InvoiceStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "draft" => Ok(InvoiceStatus::Draft),
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            "cancelled" => Ok(InvoiceStatus::Cancelled),
            _ => Err(format!("Invalid invoice status: {}", s)),
        }
    }
}

/// Customer snapshot captured on the invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// GSTIN of a registered business customer
    #[serde(default)]
    pub gstin: Option<String>,
    /// Billing state, consulted for inter-state classification
    #[serde(default)]
    pub state: Option<String>,
}

/// Represents a sales invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,

    pub shop_id: String,

    #[serde(default)]
    pub invoice_number: Option<String>,

    pub invoice_date: NaiveDate,

    #[serde(default)]
    pub status: InvoiceStatus,

    /// Pre-tax invoice total
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub subtotal: Option<Decimal>,

    /// Central tax charged on the invoice
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub cgst_amount: Option<Decimal>,

    /// State tax charged on the invoice
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub sgst_amount: Option<Decimal>,

    #[serde(default)]
    pub customer: Customer,

    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl Invoice {
    /// Create a paid invoice with no tax amounts recorded
    pub fn new(id: impl Into<String>, shop_id: impl Into<String>, invoice_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            shop_id: shop_id.into(),
            invoice_number: None,
            invoice_date,
            status: InvoiceStatus::Paid,
            subtotal: None,
            cgst_amount: None,
            sgst_amount: None,
            customer: Customer::default(),
            line_items: Vec::new(),
        }
    }

    pub fn with_amounts(mut self, subtotal: Decimal, cgst_amount: Decimal, sgst_amount: Decimal) -> Self {
        self.subtotal = Some(subtotal);
        self.cgst_amount = Some(cgst_amount);
        self.sgst_amount = Some(sgst_amount);
        self
    }

    pub fn with_line_item(mut self, item: LineItem) -> Self {
        self.line_items.push(item);
        self
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = customer;
        self
    }

    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }

    /// Effective CGST percentage implied by the stored amounts, falling
    /// back to `default_rate` when the invoice carries no CGST.
    pub fn effective_cgst_rate(&self, default_rate: Decimal) -> Decimal {
        self.implied_rate(self.cgst_amount, default_rate, "cgst")
    }

    /// Effective SGST percentage, same rule as [`Invoice::effective_cgst_rate`]
    pub fn effective_sgst_rate(&self, default_rate: Decimal) -> Decimal {
        self.implied_rate(self.sgst_amount, default_rate, "sgst")
    }

    fn implied_rate(&self, tax_amount: Option<Decimal>, default_rate: Decimal, component: &str) -> Decimal {
        let tax_amount = tax_amount.unwrap_or(Decimal::ZERO);
        if tax_amount <= Decimal::ZERO {
            return default_rate;
        }

        let subtotal = self.subtotal.unwrap_or(Decimal::ZERO);
        if subtotal <= Decimal::ZERO {
            tracing::warn!(
                invoice_id = %self.id,
                component,
                %tax_amount,
                %subtotal,
                "Tax amount recorded without a positive subtotal, using shop default rate"
            );
            return default_rate;
        }

        match tax_amount
            .checked_div(subtotal)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        {
            Some(rate) => rate,
            None => {
                tracing::warn!(
                    invoice_id = %self.id,
                    component,
                    %tax_amount,
                    %subtotal,
                    "Implied tax rate out of range, using shop default rate"
                );
                default_rate
            }
        }
    }
}
