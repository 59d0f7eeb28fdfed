// Invoices module

pub mod models;
pub mod repositories;

pub use models::{Customer, Invoice, InvoiceStatus, LineItem};
pub use repositories::{InvoiceStore, MySqlInvoiceStore};
