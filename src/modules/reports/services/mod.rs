pub mod hsn_aggregator;
pub mod inter_state;
mod report_service;

pub use hsn_aggregator::aggregate_hsn_summary;
pub use inter_state::{InterStatePolicy, InterStatePolicyKind, IntraStateOnly, StateComparison};
pub use report_service::GstReportService;
