//! Integration tests for inter-state classification in HSN summaries

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use helpers::*;
use jewelgst::config::GstConfig;
use jewelgst::reports::services::{InterStatePolicyKind, StateComparison};
use jewelgst::reports::GstReportService;
use jewelgst::shops::ShopTaxSettings;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn maharashtra_shop() -> InMemoryShopStore {
    InMemoryShopStore::new().with_shop(
        SHOP_ID,
        ShopTaxSettings {
            cgst_rate: Some(dec!(1.5)),
            sgst_rate: Some(dec!(1.5)),
            state: Some("Maharashtra".to_string()),
        },
    )
}

fn mixed_state_invoices() -> Vec<jewelgst::invoices::Invoice> {
    vec![
        paid_invoice("inv-local", 1)
            .with_customer(customer_in("maharashtra"))
            .with_line_item(line("7113", dec!(10), dec!(1000))),
        paid_invoice("inv-remote", 2)
            .with_customer(customer_in("Karnataka"))
            .with_line_item(line("7113", dec!(5), dec!(500))),
        paid_invoice("inv-unknown", 3).with_line_item(line("7113", dec!(1), dec!(100))),
    ]
}

#[tokio::test]
async fn test_default_policy_treats_every_sale_as_intra_state() {
    let service = GstReportService::new(
        Arc::new(InMemoryInvoiceStore::new(mixed_state_invoices())),
        Arc::new(maharashtra_shop()),
    );

    let report = service.generate_hsn_summary(SHOP_ID, None).await.unwrap();
    let entry = &report.hsn_summary[0];

    assert_eq!(entry.integrated_tax_amount, Decimal::ZERO);
    assert_eq!(entry.central_tax_amount, dec!(24));
    assert_eq!(entry.state_tax_amount, dec!(24));
    assert_eq!(entry.total_value, dec!(1648));
}

#[tokio::test]
async fn test_state_comparison_moves_remote_sales_to_igst() {
    let service = GstReportService::new(
        Arc::new(InMemoryInvoiceStore::new(mixed_state_invoices())),
        Arc::new(maharashtra_shop()),
    )
    .with_inter_state_policy(Arc::new(StateComparison));

    let report = service.generate_hsn_summary(SHOP_ID, None).await.unwrap();
    let entry = &report.hsn_summary[0];

    // Karnataka sale: 3% IGST on 500
    assert_eq!(entry.integrated_tax_amount, dec!(15));
    // Local and unknown-state sales: 1.5% + 1.5% on 1100
    assert_eq!(entry.central_tax_amount, dec!(16.5));
    assert_eq!(entry.state_tax_amount, dec!(16.5));
    assert_eq!(entry.total_value, dec!(1648));
}

#[tokio::test]
async fn test_policy_selected_from_config() {
    let config = GstConfig {
        inter_state_policy: InterStatePolicyKind::StateComparison,
        ..GstConfig::default()
    };
    let service = GstReportService::from_config(
        Arc::new(InMemoryInvoiceStore::new(mixed_state_invoices())),
        Arc::new(maharashtra_shop()),
        &config,
    );

    let report = service.generate_hsn_summary(SHOP_ID, None).await.unwrap();

    assert_eq!(report.hsn_summary[0].integrated_tax_amount, dec!(15));
}

#[tokio::test]
async fn test_shop_without_state_stays_intra_state() {
    let service = GstReportService::new(
        Arc::new(InMemoryInvoiceStore::new(mixed_state_invoices())),
        Arc::new(InMemoryShopStore::new()),
    )
    .with_inter_state_policy(Arc::new(StateComparison));

    let report = service.generate_hsn_summary(SHOP_ID, None).await.unwrap();

    assert_eq!(report.hsn_summary[0].integrated_tax_amount, Decimal::ZERO);
}
