// Lenient decoding of invoice payloads
//
// Malformed numbers on a line must decode to "missing" and count as zero in
// the summary instead of failing the whole report.

use jewelgst::invoices::Invoice;
use jewelgst::reports::aggregate_hsn_summary;
use jewelgst::reports::services::IntraStateOnly;
use jewelgst::shops::{ShopTaxDefaults, ShopTaxSettings};
use rust_decimal_macros::dec;
use serde_json::json;

fn invoice_from(value: serde_json::Value) -> Invoice {
    serde_json::from_value(value).expect("invoice payload should always decode")
}

#[test]
fn test_malformed_line_values_contribute_zero() {
    let invoice = invoice_from(json!({
        "id": "inv-1",
        "shop_id": "shop-001",
        "invoice_date": "2025-04-01",
        "status": "paid",
        "subtotal": 1500,
        "cgst_amount": 0,
        "sgst_amount": 0,
        "line_items": [
            {"hsn_code": null, "net_weight": "abc", "amount": 1000},
            {"hsn_code": "7113", "amount": "500"},
            {"hsn_code": "", "net_weight": "2.5", "amount": {"value": 10}},
            {"net_weight": "", "amount": null}
        ]
    }));

    let summary = aggregate_hsn_summary(&[invoice], &ShopTaxDefaults::default(), &IntraStateOnly);

    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].hsn_code, "7113");
    assert_eq!(summary[0].total_quantity, dec!(2.5));
    assert_eq!(summary[0].taxable_value, dec!(1500));
}

#[test]
fn test_numeric_strings_accepted_everywhere() {
    let invoice = invoice_from(json!({
        "id": "inv-2",
        "shop_id": "shop-001",
        "invoice_date": "2025-04-02",
        "status": "paid",
        "subtotal": " 1000.00 ",
        "cgst_amount": "15",
        "sgst_amount": "15.0",
        "line_items": [{"hsn_code": "7113", "net_weight": "10", "amount": "1000"}]
    }));

    let summary = aggregate_hsn_summary(&[invoice], &ShopTaxDefaults::default(), &IntraStateOnly);

    assert_eq!(summary[0].central_tax_amount, dec!(15));
    assert_eq!(summary[0].state_tax_amount, dec!(15));
    assert_eq!(summary[0].total_value, dec!(1030));
}

#[test]
fn test_garbage_shop_rates_use_default() {
    let settings: ShopTaxSettings = serde_json::from_value(json!({
        "cgst_rate": "N/A",
        "sgst_rate": null
    }))
    .unwrap();

    let defaults = ShopTaxDefaults::from(settings);
    assert_eq!(defaults.cgst_rate, dec!(1.5));
    assert_eq!(defaults.sgst_rate, dec!(1.5));
    assert_eq!(defaults.igst_rate(), dec!(3));
}

#[test]
fn test_missing_line_items_is_empty_invoice() {
    let invoice = invoice_from(json!({
        "id": "inv-3",
        "shop_id": "shop-001",
        "invoice_date": "2025-04-03"
    }));

    assert!(invoice.line_items.is_empty());
    assert_eq!(invoice.subtotal, None);
    assert_eq!(invoice.effective_cgst_rate(dec!(1.5)), dec!(1.5));
    assert_eq!(
        aggregate_hsn_summary(&[invoice], &ShopTaxDefaults::default(), &IntraStateOnly).len(),
        0
    );
}

#[test]
fn test_numeric_hsn_code_decodes_as_text() {
    let invoice = invoice_from(json!({
        "id": "inv-4",
        "shop_id": "shop-001",
        "invoice_date": "2025-04-04",
        "line_items": [
            {"hsn_code": 7108, "net_weight": "1", "amount": "100"},
            {"hsn_code": "7108", "net_weight": "1", "amount": "100"},
            {"hsn_code": false, "amount": "50"}
        ]
    }));

    let summary = aggregate_hsn_summary(&[invoice], &ShopTaxDefaults::default(), &IntraStateOnly);

    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].hsn_code, "7108");
    assert_eq!(summary[0].taxable_value, dec!(200));
    assert_eq!(summary[1].hsn_code, "7113");
}

#[test]
fn test_out_of_range_values_do_not_break_the_report() {
    let invoices = vec![
        invoice_from(json!({
            "id": "inv-5",
            "shop_id": "shop-001",
            "invoice_date": "2025-04-05",
            "line_items": [
                {"hsn_code": "7113", "net_weight": "1", "amount": "79228162514264337593543950335"},
                {"hsn_code": "7113", "net_weight": "1", "amount": "1000"}
            ]
        })),
        invoice_from(json!({
            "id": "inv-6",
            "shop_id": "shop-001",
            "invoice_date": "2025-04-06",
            "subtotal": "0.0000000000000000000000000001",
            "cgst_amount": 1,
            "line_items": [{"hsn_code": "7113", "net_weight": "1", "amount": "1000"}]
        })),
    ];

    let summary = aggregate_hsn_summary(&invoices, &ShopTaxDefaults::default(), &IntraStateOnly);

    assert_eq!(summary[0].total_quantity, dec!(3));
    assert_eq!(summary[0].taxable_value, dec!(2000));
    assert_eq!(summary[0].central_tax_amount, dec!(30));
    assert_eq!(summary[0].total_value, dec!(2060));
}
