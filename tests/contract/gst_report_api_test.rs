//! Contract tests for GET /reports/gst/hsn-summary
//!
//! Drives the route with actix's test service and in-memory stores, checking
//! the response shape, string decimals and error bodies.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::{test, web, App};
use helpers::*;
use jewelgst::middleware::{query_error_handler, RequestId};
use jewelgst::reports::controllers::{self, GstReportResponse};
use jewelgst::reports::GstReportService;
use rust_decimal_macros::dec;
use serde_json::Value;

fn report_data(invoices: InMemoryInvoiceStore, shops: InMemoryShopStore) -> web::Data<GstReportService> {
    web::Data::new(GstReportService::new(Arc::new(invoices), Arc::new(shops)))
}

macro_rules! init_app {
    ($data:expr) => {
        test::init_service(
            App::new()
                .wrap(RequestId)
                .app_data($data)
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .configure(controllers::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_hsn_summary_response_shape() {
    let app = init_app!(report_data(
        InMemoryInvoiceStore::new(two_invoice_scenario()),
        InMemoryShopStore::new().with_shop(SHOP_ID, shop_settings(dec!(1.5), dec!(1.5))),
    ));

    let req = test::TestRequest::get()
        .uri("/reports/gst/hsn-summary?shop_id=shop-001")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 2, "only invoices and hsn_summary are returned");
    assert_eq!(body["invoices"].as_array().unwrap().len(), 2);

    let summary = body["hsn_summary"].as_array().unwrap();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0]["hsn_code"], "7113");
    assert_eq!(summary[0]["description"], "Gold Jewellery");
    assert_eq!(summary[0]["uqc"], "GMS");
    assert_eq!(summary[0]["taxable_value"], "1000");
    assert_eq!(summary[0]["central_tax_amount"], "15");
    assert_eq!(summary[0]["state_tax_amount"], "15");
    assert_eq!(summary[0]["integrated_tax_amount"], "0");
    assert_eq!(summary[0]["cess_amount"], "0");
    assert_eq!(summary[0]["total_value"], "1030");
    assert_eq!(summary[1]["hsn_code"], "7108");
    assert_eq!(summary[1]["central_tax_amount"], "7.5");
    assert_eq!(summary[1]["total_value"], "515");
}

#[actix_web::test]
async fn test_single_day_query() {
    let invoices = vec![
        paid_invoice("inv-1", 1).with_line_item(line("7113", dec!(1), dec!(100))),
        paid_invoice("inv-2", 2).with_line_item(line("7113", dec!(1), dec!(250))),
    ];
    let app = init_app!(report_data(
        InMemoryInvoiceStore::new(invoices),
        InMemoryShopStore::new(),
    ));

    let req = test::TestRequest::get()
        .uri("/reports/gst/hsn-summary?shop_id=shop-001&from=2025-04-02")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: GstReportResponse = test::read_body_json(resp).await;
    assert_eq!(body.invoices.len(), 1);
    assert_eq!(body.invoices[0].id, "inv-2");
    assert_eq!(body.hsn_summary[0].taxable_value, "250");
}

#[actix_web::test]
async fn test_invalid_date_is_bad_request() {
    let app = init_app!(report_data(
        InMemoryInvoiceStore::default(),
        InMemoryShopStore::new(),
    ));

    let req = test::TestRequest::get()
        .uri("/reports/gst/hsn-summary?shop_id=shop-001&from=02-04-2025")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Expected YYYY-MM-DD"));
}

#[actix_web::test]
async fn test_to_without_from_is_bad_request() {
    let app = init_app!(report_data(
        InMemoryInvoiceStore::default(),
        InMemoryShopStore::new(),
    ));

    let req = test::TestRequest::get()
        .uri("/reports/gst/hsn-summary?shop_id=shop-001&to=2025-04-30")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_missing_shop_id_is_bad_request() {
    let app = init_app!(report_data(
        InMemoryInvoiceStore::default(),
        InMemoryShopStore::new(),
    ));

    let req = test::TestRequest::get()
        .uri("/reports/gst/hsn-summary")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_fetch_failure_returns_generic_error() {
    let app = init_app!(report_data(
        InMemoryInvoiceStore::failing("Access denied for user 'report'@'10.0.0.5'"),
        InMemoryShopStore::new(),
    ));

    let req = test::TestRequest::get()
        .uri("/reports/gst/hsn-summary?shop_id=shop-001")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "Failed to fetch GST data");
    assert_eq!(body["error"]["code"], 500);
}
