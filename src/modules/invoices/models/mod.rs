mod invoice;
mod line_item;

pub use invoice::{Customer, Invoice, InvoiceStatus};
pub use line_item::{LineItem, DEFAULT_HSN_CODE};
