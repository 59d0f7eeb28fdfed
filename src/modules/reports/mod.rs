pub mod controllers;
pub mod models;
pub mod services;

pub use models::{DateRange, GstReport, HsnSummaryEntry};
pub use services::{aggregate_hsn_summary, GstReportService};
