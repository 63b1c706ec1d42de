//! Total conversions from raw workbook cells to typed values.
//!
//! None of these functions fail. A missing cell, a blank cell, or a value that
//! is not a strict numeric cast of the requested type yields the caller's
//! default, so a sloppy spreadsheet can never abort a run.

use calamine::DataType;

/// Floating-point interpretation of `cell`, or `default`.
///
/// Numbers convert directly and numeric text such as `"2.5"` parses. Anything
/// else (words, booleans, dates, error cells, infinities, NaN) falls back to
/// `default`.
pub fn to_float(cell: Option<&DataType>, default: f64) -> f64 {
    let value = match cell {
        Some(DataType::Float(value)) => Some(*value),
        Some(DataType::Int(value)) => Some(*value as f64),
        Some(DataType::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|value| value.is_finite()).unwrap_or(default)
}

/// Integer interpretation of `cell`, or `default`.
///
/// Floats truncate toward zero. Text must spell an integer: `"12"` converts,
/// `"12.5"` and `"abc"` do not.
pub fn to_int(cell: Option<&DataType>, default: i64) -> i64 {
    match cell {
        Some(DataType::Int(value)) => *value,
        Some(DataType::Float(value)) => float_to_int(*value).unwrap_or(default),
        Some(DataType::String(text)) => text.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// String form of `cell`, or `default` when the cell is absent or empty.
///
/// Whole floats render without a fraction: 5.0 becomes `"5"`, not `"5.0"`.
pub fn to_text(cell: Option<&DataType>, default: &str) -> String {
    match cell {
        None | Some(DataType::Empty) => default.to_string(),
        Some(DataType::String(text)) => text.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Whether `cell` carries nothing worth reading.
pub fn is_blank(cell: Option<&DataType>) -> bool {
    match cell {
        None | Some(DataType::Empty) => true,
        Some(DataType::String(text)) => text.trim().is_empty(),
        Some(_) => false,
    }
}

fn float_to_int(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    // i64::MAX is not representable as f64; the bound below is 2^63.
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}
