//! Property-based tests for byte-bounded text fields.

use proptest::prelude::*;
use webframe::types::bounded::{StartUrl, TempPath, Title};
use webframe::types::errors::InitError;

proptest! {
    #[test]
    fn title_accepts_exactly_up_to_limit(s in "\\PC{0,300}") {
        let result = Title::new(s.clone());
        if s.len() <= Title::LIMIT {
            let title = result.unwrap();
            prop_assert_eq!(title.as_str(), s.as_str());
        } else {
            prop_assert_eq!(
                result,
                Err(InitError::TextTooLong { limit: Title::LIMIT, actual: s.len() })
            );
        }
    }

    #[test]
    fn limit_counts_bytes_not_chars(n in 1usize..200) {
        // 'é' is two bytes in UTF-8.
        let text = "é".repeat(n);
        prop_assert_eq!(TempPath::new(text.clone()).is_ok(), text.len() <= TempPath::LIMIT);
    }

    #[test]
    fn json_enforces_the_same_limit(len in 2000usize..2100) {
        let url = "u".repeat(len);
        let json = serde_json::to_string(&url).unwrap();
        let parsed: Result<StartUrl, _> = serde_json::from_str(&json);
        prop_assert_eq!(parsed.is_ok(), len <= StartUrl::LIMIT);
    }

    #[test]
    fn serializes_as_plain_string(s in "[a-zA-Z0-9 ]{0,64}") {
        let title = Title::new(s.clone()).unwrap();
        prop_assert_eq!(serde_json::to_value(&title).unwrap(), serde_json::Value::String(s));
    }
}
