//! Lenient numeric coercion for stored invoice and shop values.
//!
//! Invoice rows are written by several clients over the years and numeric
//! columns are not always clean. Report generation must not fail because of
//! one bad row, so values are coerced the way a loosely typed client would:
//! numbers pass through, numeric text is parsed, booleans become 1/0 and
//! everything else is treated as "not a number" (`None`). Callers pick the
//! default for the `None` case.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse decimal text leniently.
///
/// Surrounding whitespace is ignored and an empty string counts as zero.
/// Plain (`"12.50"`) and scientific (`"1.25e1"`) notation are accepted.
pub fn parse_lenient(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Decimal::ZERO);
    }

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    Decimal::from_str(unsigned)
        .or_else(|_| Decimal::from_scientific(unsigned))
        .ok()
}

/// Coerce an arbitrary JSON value to a decimal.
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_lenient(&n.to_string()),
        Value::String(s) => parse_lenient(s),
        Value::Bool(true) => Some(Decimal::ONE),
        Value::Bool(false) => Some(Decimal::ZERO),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Serde adapter for `Option<Decimal>` fields that must never fail to decode.
///
/// Use together with `#[serde(default)]` so a missing field is also `None`.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value))
}

/// Serde adapter for code fields (HSN) that older clients sent as numbers.
///
/// Strings pass through, numbers are kept as their decimal text and anything
/// else is `None`.
pub fn lenient_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Decode a nullable text column leniently.
pub fn decimal_from_column(raw: Option<&str>) -> Option<Decimal> {
    raw.and_then(parse_lenient)
}
