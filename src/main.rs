use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jewelgst::config::{AppConfig, Config, LogFormat};
use jewelgst::invoices::MySqlInvoiceStore;
use jewelgst::middleware::{query_error_handler, RequestId};
use jewelgst::modules::{health, reports};
use jewelgst::reports::GstReportService;
use jewelgst::shops::MySqlShopConfigStore;

fn init_tracing(app: &AppConfig) {
    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("jewelgst={},actix_web=info", app.log_level).into());
    let registry = tracing_subscriber::registry().with(filter);

    match app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    init_tracing(&config.app);

    tracing::info!("Starting jewelgst reporting service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.max_connections
    );

    let report_service = web::Data::new(GstReportService::from_config(
        Arc::new(MySqlInvoiceStore::new(db_pool.clone())),
        Arc::new(MySqlShopConfigStore::new(db_pool.clone())),
        &config.gst,
    ));

    tracing::info!(
        date_range_mode = ?config.gst.date_range_mode,
        inter_state_policy = ?config.gst.inter_state_policy,
        "GST report settings"
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(report_service.clone())
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .configure(health::configure)
            .configure(reports::controllers::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
