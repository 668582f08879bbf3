//! Category-tagged formatting
//!
//! Inputs are classified once into a [`Category`]; each category has its own
//! label shape.

use crate::error::{Result, UtilError};
use crate::models::Value;

// == Category ==
/// Coarse shape of a formattable input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Category<'a> {
    Integer(i64),
    Float(f64),
    Text(&'a str),
    /// Anything that is neither numeric nor text
    Other(&'a Value),
}

impl<'a> Category<'a> {
    /// Classifies `value`, rejecting `Null` as a missing value.
    ///
    /// Booleans are integers here: `true` is 1 and `false` is 0.
    pub fn classify(value: &'a Value) -> Result<Self> {
        match value {
            Value::Null => Err(UtilError::MissingValue),
            Value::Bool(b) => Ok(Category::Integer(i64::from(*b))),
            Value::Int(n) => Ok(Category::Integer(*n)),
            Value::Float(x) => Ok(Category::Float(*x)),
            Value::Text(s) => Ok(Category::Text(s)),
            other => Ok(Category::Other(other)),
        }
    }
}

/// Formats `value` according to its category.
///
/// Numbers are doubled, text is lowercased then trimmed, and anything else
/// uses its display form.
pub fn format_value(value: &Value) -> Result<String> {
    let label = match Category::classify(value)? {
        Category::Integer(n) => {
            let doubled = n
                .checked_mul(2)
                .ok_or_else(|| UtilError::Format(format!("doubling {} overflows i64", n)))?;
            format!("numeric_result_{}", doubled)
        }
        Category::Float(x) => format!("numeric_result_{}", Value::Float(x * 2.0)),
        Category::Text(s) => format!("string_result_{}", s.to_lowercase().trim()),
        Category::Other(v) => format!("generic_result_{}", v),
    };
    Ok(label)
}
