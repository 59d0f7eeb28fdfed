// A line item is one piece of jewellery sold on an invoice.
//
// Stored values are read as-is; resolution to report values (default HSN
// code, zero for missing numbers) happens through the `resolved_*` accessors
// so the raw record stays untouched.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::numeric::{lenient_code, lenient_decimal};

/// HSN code for articles of jewellery, used when a line carries none
pub const DEFAULT_HSN_CODE: &str = "7113";

/// Represents a single line item in an invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// HSN classification code as stored (numbers are kept as text)
    #[serde(default, deserialize_with = "lenient_code")]
    pub hsn_code: Option<String>,

    /// Net weight in grams as stored (non-numeric values decode to `None`)
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub net_weight: Option<Decimal>,

    /// Pre-tax taxable value of this line (non-numeric values decode to `None`)
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub amount: Option<Decimal>,
}

impl LineItem {
    pub fn new(
        hsn_code: Option<String>,
        net_weight: Option<Decimal>,
        amount: Option<Decimal>,
    ) -> Self {
        Self {
            hsn_code,
            net_weight,
            amount,
        }
    }

    /// HSN code used for grouping; empty or absent codes fall back to 7113
    pub fn resolved_hsn_code(&self) -> &str {
        match self.hsn_code.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => DEFAULT_HSN_CODE,
        }
    }

    /// Net weight in grams, zero when missing
    pub fn resolved_net_weight(&self) -> Decimal {
        self.net_weight.unwrap_or(Decimal::ZERO)
    }

    /// Taxable value, zero when missing
    pub fn resolved_amount(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }
}
