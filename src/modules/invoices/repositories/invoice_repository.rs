// Invoice store: read access to paid invoices and their line items.
//
// Numeric columns are selected as text and decoded leniently so a single
// malformed legacy value cannot fail the query for a whole period.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, MySqlPool};

use crate::core::numeric::decimal_from_column;
use crate::core::Result;
use crate::modules::invoices::models::{Customer, Invoice, InvoiceStatus, LineItem};
use crate::modules::reports::models::DateBounds;

/// Source of paid invoices for reporting
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Non-deleted invoices with status `paid` for `shop_id`, within `bounds`
    /// when given, ordered by invoice date ascending. Line items keep their
    /// stored order.
    async fn fetch_paid_invoices(
        &self,
        shop_id: &str,
        bounds: Option<DateBounds>,
    ) -> Result<Vec<Invoice>>;
}

/// MySQL-backed invoice store
pub struct MySqlInvoiceStore {
    pool: MySqlPool,
}

impl MySqlInvoiceStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

const INVOICE_QUERY: &str = r#"
    SELECT
        i.id, i.shop_id, i.invoice_number, i.invoice_date, i.status,
        CAST(i.subtotal AS CHAR) AS subtotal,
        CAST(i.cgst_amount AS CHAR) AS cgst_amount,
        CAST(i.sgst_amount AS CHAR) AS sgst_amount,
        i.customer_name, i.customer_phone, i.customer_gstin, i.customer_state
    FROM invoices i
    WHERE i.shop_id = ?
      AND i.status = 'paid'
      AND i.deleted_at IS NULL
      AND (? IS NULL OR i.invoice_date >= ?)
      AND (? IS NULL OR i.invoice_date <= ?)
    ORDER BY i.invoice_date ASC, i.id ASC
"#;

const LINE_ITEM_QUERY: &str = r#"
    SELECT
        li.invoice_id, li.hsn_code,
        CAST(li.net_weight AS CHAR) AS net_weight,
        CAST(li.amount AS CHAR) AS amount
    FROM invoice_items li
    INNER JOIN invoices i ON i.id = li.invoice_id
    WHERE i.shop_id = ?
      AND i.status = 'paid'
      AND i.deleted_at IS NULL
      AND (? IS NULL OR i.invoice_date >= ?)
      AND (? IS NULL OR i.invoice_date <= ?)
    ORDER BY li.invoice_id ASC, li.position ASC, li.id ASC
"#;

#[async_trait]
impl InvoiceStore for MySqlInvoiceStore {
    async fn fetch_paid_invoices(
        &self,
        shop_id: &str,
        bounds: Option<DateBounds>,
    ) -> Result<Vec<Invoice>> {
        let from = bounds.map(|b| b.from);
        let to = bounds.and_then(|b| b.to);

        let invoice_rows: Vec<InvoiceRow> = sqlx::query_as(INVOICE_QUERY)
            .bind(shop_id)
            .bind(from)
            .bind(from)
            .bind(to)
            .bind(to)
            .fetch_all(&self.pool)
            .await?;

        let item_rows: Vec<LineItemRow> = sqlx::query_as(LINE_ITEM_QUERY)
            .bind(shop_id)
            .bind(from)
            .bind(from)
            .bind(to)
            .bind(to)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(
            shop_id,
            invoices = invoice_rows.len(),
            line_items = item_rows.len(),
            "Fetched paid invoices"
        );

        Ok(assemble_invoices(invoice_rows, item_rows))
    }
}

// Helper structs for database mapping

#[derive(Debug, FromRow)]
struct InvoiceRow {
    id: String,
    shop_id: String,
    invoice_number: Option<String>,
    invoice_date: NaiveDate,
    status: String,
    subtotal: Option<String>,
    cgst_amount: Option<String>,
    sgst_amount: Option<String>,
    customer_name: Option<String>,
    customer_phone: Option<String>,
    customer_gstin: Option<String>,
    customer_state: Option<String>,
}

impl InvoiceRow {
    fn into_invoice(self, line_items: Vec<LineItem>) -> Invoice {
        // The query filters on status already; an unknown value here would
        // mean a schema change, which should not hide paid invoices.
        let status = self.status.parse().unwrap_or(InvoiceStatus::Paid);

        Invoice {
            id: self.id,
            shop_id: self.shop_id,
            invoice_number: self.invoice_number,
            invoice_date: self.invoice_date,
            status,
            subtotal: decimal_from_column(self.subtotal.as_deref()),
            cgst_amount: decimal_from_column(self.cgst_amount.as_deref()),
            sgst_amount: decimal_from_column(self.sgst_amount.as_deref()),
            customer: Customer {
                name: self.customer_name,
                phone: self.customer_phone,
                gstin: self.customer_gstin,
                state: self.customer_state,
            },
            line_items,
        }
    }
}

#[derive(Debug, FromRow)]
struct LineItemRow {
    invoice_id: String,
    hsn_code: Option<String>,
    net_weight: Option<String>,
    amount: Option<String>,
}

impl LineItemRow {
    fn into_line_item(self) -> LineItem {
        LineItem::new(
            self.hsn_code,
            decimal_from_column(self.net_weight.as_deref()),
            decimal_from_column(self.amount.as_deref()),
        )
    }
}

/// Attach line items to their invoices, keeping invoice order from the
/// invoice query and item order from the item query.
fn assemble_invoices(invoice_rows: Vec<InvoiceRow>, item_rows: Vec<LineItemRow>) -> Vec<Invoice> {
    let mut items_by_invoice: HashMap<String, Vec<LineItem>> = HashMap::new();
    for row in item_rows {
        items_by_invoice
            .entry(row.invoice_id.clone())
            .or_default()
            .push(row.into_line_item());
    }

    invoice_rows
        .into_iter()
        .map(|row| {
            let items = items_by_invoice.remove(&row.id).unwrap_or_default();
            row.into_invoice(items)
        })
        .collect()
}
