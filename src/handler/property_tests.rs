//! Property-Based Tests for the Error Handler
//!
//! Uses proptest to check validation and formatting rules over random input.

use proptest::prelude::*;

use crate::handler::{validate, ErrorHandler};
use crate::models::Value;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Whitespace-only text never validates; anything with a visible character does.
    #[test]
    fn prop_blank_text_invalid(blank in "[ \t\n]{0,16}", word in "[a-z]{1,8}") {
        prop_assert!(!validate(&Value::from(blank.clone())));
        let padded = format!("{}{}{}", blank, word, blank);
        prop_assert!(validate(&Value::from(padded)));
    }

    // Text labels are lowercase and trimmed; the error count stays at zero.
    #[test]
    fn prop_text_format_normalized(text in "[ ]{0,4}[A-Za-z]{1,12}[ ]{0,4}") {
        let mut handler = ErrorHandler::new();
        let label = handler.safe_format(&Value::from(text.clone()));
        let expected = format!("string_result_{}", text.trim().to_lowercase());
        prop_assert_eq!(label, Some(expected));
        prop_assert_eq!(handler.error_stats().total_errors, 0);
    }

    // Doubling any integer that fits is formatted; overflow is counted instead.
    #[test]
    fn prop_numeric_format(n in any::<i64>()) {
        let mut handler = ErrorHandler::new();
        let label = handler.safe_format(&Value::Int(n));
        match n.checked_mul(2) {
            Some(doubled) => {
                prop_assert_eq!(label, Some(format!("numeric_result_{}", doubled)));
                prop_assert_eq!(handler.error_stats().total_errors, 0);
            }
            None => {
                prop_assert!(label.is_none());
                prop_assert_eq!(handler.error_stats().total_errors, 1);
            }
        }
    }
}
