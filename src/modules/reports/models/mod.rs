mod date_range;
mod hsn_summary;

pub use date_range::{DateBounds, DateRange, DateRangeMode};
pub use hsn_summary::{GstReport, HsnSummaryEntry, HSN_DESCRIPTION, UQC_GRAMS};
