//! Configuration types

use serde_json::{Map, Value};

/// Caller-owned producer configuration.
///
/// Values are arbitrary JSON: strings, numbers or opaque objects. A key bound
/// to [`Value::Null`] is treated exactly like a missing key, both when deciding
/// whether a remote value may fill it and when validating required keys.
pub type LocalConfig = Map<String, Value>;

/// Returns `true` if `key` is absent from `config` or bound to null.
pub fn is_unset(config: &LocalConfig, key: &str) -> bool {
    config.get(key).is_none_or(Value::is_null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_null_are_unset() {
        let mut config = LocalConfig::new();
        assert!(is_unset(&config, "topicName"));

        config.insert("topicName".to_string(), Value::Null);
        assert!(is_unset(&config, "topicName"));
    }

    #[test]
    fn test_non_null_values_are_set() {
        let mut config = LocalConfig::new();
        config.insert("topicName".to_string(), json!(""));
        config.insert("lingerMs".to_string(), json!(0));
        config.insert("extra".to_string(), json!({"nested": true}));

        assert!(!is_unset(&config, "topicName"));
        assert!(!is_unset(&config, "lingerMs"));
        assert!(!is_unset(&config, "extra"));
    }
}
