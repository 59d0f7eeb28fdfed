//! Inter-state supply classification.
//!
//! A supply is inter-state when the customer's billing state differs from
//! the shop's registered state; it is then charged IGST instead of
//! CGST + SGST. Reports use [`IntraStateOnly`] unless configured otherwise,
//! which treats every sale as intra-state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decides whether an invoice is an inter-state supply
pub trait InterStatePolicy: Send + Sync {
    fn is_inter_state(&self, customer_state: Option<&str>, shop_state: Option<&str>) -> bool;

    /// Name used in logs
    fn name(&self) -> &'static str;
}

/// Every sale is intra-state
#[derive(Debug, Clone, Copy, Default)]
pub struct IntraStateOnly;

impl InterStatePolicy for IntraStateOnly {
    fn is_inter_state(&self, _customer_state: Option<&str>, _shop_state: Option<&str>) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "intra_state_only"
    }
}

/// Compares customer and shop state names, ignoring case and surrounding
/// whitespace. Unknown states are treated as intra-state.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateComparison;

impl InterStatePolicy for StateComparison {
    fn is_inter_state(&self, customer_state: Option<&str>, shop_state: Option<&str>) -> bool {
        match (known_state(customer_state), known_state(shop_state)) {
            (Some(customer), Some(shop)) => !customer.eq_ignore_ascii_case(shop),
            (customer, shop) => {
                tracing::debug!(
                    customer_state_known = customer.is_some(),
                    shop_state_known = shop.is_some(),
                    "State unknown, assuming intra-state supply"
                );
                false
            }
        }
    }

    fn name(&self) -> &'static str {
        "state_comparison"
    }
}

fn known_state(state: Option<&str>) -> Option<&str> {
    state.map(str::trim).filter(|s| !s.is_empty())
}

/// Configurable selection of a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterStatePolicyKind {
    #[default]
    IntraStateOnly,
    StateComparison,
}

impl InterStatePolicyKind {
    pub fn build(self) -> Arc<dyn InterStatePolicy> {
        match self {
            InterStatePolicyKind::IntraStateOnly => Arc::new(IntraStateOnly),
            InterStatePolicyKind::StateComparison => Arc::new(StateComparison),
        }
    }
}

impl std::str::FromStr for InterStatePolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "intra_state_only" => Ok(InterStatePolicyKind::IntraStateOnly),
            "state_comparison" => Ok(InterStatePolicyKind::StateComparison),
            _ => Err(format!("Invalid inter-state policy: {}", s)),
        }
    }
}
