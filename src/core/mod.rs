pub mod error;
pub mod numeric;

pub use error::{AppError, Result};
pub use numeric::{decimal_from_column, decimal_from_value, lenient_code, lenient_decimal, parse_lenient};
