//! GST HSN-summary reporting for jewellery retail shops
//!
//! Groups the line items of a shop's paid invoices by HSN code and splits
//! their tax into central, state and integrated components for GSTR-1 filing.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::invoices;
pub use modules::reports;
pub use modules::shops;
