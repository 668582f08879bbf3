//! Input validation
//!
//! Rejects values that carry no usable content.

use crate::models::Value;

/// Returns `false` for `Null`, blank text, and empty lists or maps;
/// `true` for everything else.
pub fn validate(input: &Value) -> bool {
    match input {
        Value::Null => false,
        Value::Text(s) => !s.trim().is_empty(),
        Value::List(items) => !items.is_empty(),
        Value::Map(entries) => !entries.is_empty(),
        Value::Bool(_) | Value::Int(_) | Value::Float(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_rejects_empty_inputs() {
        assert!(!validate(&Value::Null));
        assert!(!validate(&Value::from("")));
        assert!(!validate(&Value::from("  ")));
        assert!(!validate(&Value::from("\t\n")));
        assert!(!validate(&Value::List(vec![])));
        assert!(!validate(&Value::Map(BTreeMap::new())));
    }

    #[test]
    fn test_accepts_content() {
        assert!(validate(&Value::from("x")));
        assert!(validate(&Value::from(" valid_string ")));
        assert!(validate(&Value::from(42)));
        assert!(validate(&Value::from(0)));
        assert!(validate(&Value::from(3.14)));
        assert!(validate(&Value::from(false)));
        assert!(validate(&Value::from(vec![Value::Null])));
    }
}
