use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::numeric::lenient_decimal;

/// Rate applied to each of CGST and SGST when a shop has not configured one
pub const DEFAULT_HALF_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Tax settings as stored on the shop record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopTaxSettings {
    /// CGST percentage, e.g. 1.5
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub cgst_rate: Option<Decimal>,

    /// SGST percentage, e.g. 1.5
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub sgst_rate: Option<Decimal>,

    /// State where the shop is registered for GST
    #[serde(default)]
    pub state: Option<String>,
}

/// Resolved per-shop tax defaults used by the HSN summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopTaxDefaults {
    pub cgst_rate: Decimal,
    pub sgst_rate: Decimal,
    pub state: Option<String>,
}

impl ShopTaxDefaults {
    pub fn new(cgst_rate: Decimal, sgst_rate: Decimal) -> Self {
        Self {
            cgst_rate,
            sgst_rate,
            state: None,
        }
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Integrated rate charged on inter-state supplies
    pub fn igst_rate(&self) -> Decimal {
        self.cgst_rate.saturating_add(self.sgst_rate)
    }
}

impl Default for ShopTaxDefaults {
    fn default() -> Self {
        Self::new(DEFAULT_HALF_RATE, DEFAULT_HALF_RATE)
    }
}

impl From<ShopTaxSettings> for ShopTaxDefaults {
    /// Unset or non-numeric rates fall back to 1.5%. A stored zero is kept.
    fn from(settings: ShopTaxSettings) -> Self {
        Self {
            cgst_rate: settings.cgst_rate.unwrap_or(DEFAULT_HALF_RATE),
            sgst_rate: settings.sgst_rate.unwrap_or(DEFAULT_HALF_RATE),
            state: settings.state,
        }
    }
}
