use indexmap::IndexMap;
use rust_decimal::Decimal;
use tracing::warn;

use crate::modules::invoices::models::Invoice;
use crate::modules::reports::models::HsnSummaryEntry;
use crate::modules::reports::services::inter_state::InterStatePolicy;
use crate::modules::shops::models::ShopTaxDefaults;

/// Fold invoice line items into one summary entry per HSN code.
///
/// Tax is computed per line at the invoice's effective rates and then
/// accumulated, so `total_value` of an entry is the sum of each line's
/// taxable value plus that line's tax. Entries come back in the order
/// their HSN code first appears. No rounding is applied.
///
/// A line whose weight or amount overflows the running totals counts as
/// non-numeric for that field and contributes zero.
pub fn aggregate_hsn_summary(
    invoices: &[Invoice],
    defaults: &ShopTaxDefaults,
    policy: &dyn InterStatePolicy,
) -> Vec<HsnSummaryEntry> {
    let igst_rate = defaults.igst_rate();
    let mut entries: IndexMap<String, HsnSummaryEntry> = IndexMap::new();

    for invoice in invoices {
        let cgst_rate = invoice.effective_cgst_rate(defaults.cgst_rate);
        let sgst_rate = invoice.effective_sgst_rate(defaults.sgst_rate);
        let is_inter_state = policy.is_inter_state(
            invoice.customer.state.as_deref(),
            defaults.state.as_deref(),
        );

        for item in &invoice.line_items {
            let hsn = item.resolved_hsn_code();
            let weight = item.resolved_net_weight();
            let taxable_value = item.resolved_amount();

            let entry = entries
                .entry(hsn.to_string())
                .or_insert_with(|| HsnSummaryEntry::new(hsn));

            match entry.total_quantity.checked_add(weight) {
                Some(total) => entry.total_quantity = total,
                None => warn!(
                    invoice_id = %invoice.id,
                    hsn_code = hsn,
                    net_weight = %weight,
                    "Net weight out of range, treating it as non-numeric"
                ),
            }

            let tax = if is_inter_state {
                LineTax::integrated(taxable_value, igst_rate)
            } else {
                LineTax::split(taxable_value, cgst_rate, sgst_rate)
            };

            if tax.and_then(|tax| add_line_value(entry, taxable_value, tax)).is_none() {
                warn!(
                    invoice_id = %invoice.id,
                    hsn_code = hsn,
                    amount = %taxable_value,
                    "Line amount out of range, treating it as non-numeric"
                );
            }
        }
    }

    entries.into_values().collect()
}

#[derive(Debug, Clone, Copy, Default)]
struct LineTax {
    integrated: Decimal,
    central: Decimal,
    state: Decimal,
}

impl LineTax {
    fn integrated(value: Decimal, igst_rate: Decimal) -> Option<Self> {
        Some(Self {
            integrated: percent_of(value, igst_rate)?,
            ..Self::default()
        })
    }

    fn split(value: Decimal, cgst_rate: Decimal, sgst_rate: Decimal) -> Option<Self> {
        Some(Self {
            central: percent_of(value, cgst_rate)?,
            state: percent_of(value, sgst_rate)?,
            ..Self::default()
        })
    }

    fn total(&self) -> Option<Decimal> {
        self.integrated.checked_add(self.central)?.checked_add(self.state)
    }
}

// All-or-nothing: the entry is only updated when every sum fits
fn add_line_value(entry: &mut HsnSummaryEntry, value: Decimal, tax: LineTax) -> Option<()> {
    let taxable_value = entry.taxable_value.checked_add(value)?;
    let integrated = entry.integrated_tax_amount.checked_add(tax.integrated)?;
    let central = entry.central_tax_amount.checked_add(tax.central)?;
    let state = entry.state_tax_amount.checked_add(tax.state)?;
    let total_value = entry
        .total_value
        .checked_add(value.checked_add(tax.total()?)?)?;

    entry.taxable_value = taxable_value;
    entry.integrated_tax_amount = integrated;
    entry.central_tax_amount = central;
    entry.state_tax_amount = state;
    entry.total_value = total_value;
    Some(())
}

fn percent_of(value: Decimal, rate: Decimal) -> Option<Decimal> {
    value.checked_mul(rate)?.checked_div(Decimal::ONE_HUNDRED)
}
