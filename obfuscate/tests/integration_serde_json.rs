//! Integration tests for loading obfuscator configuration with serde.

#![cfg(feature = "serde")]

use obfuscate::{ConfigError, Obfuscator, Portion, PortionConfig};

#[test]
fn deserializes_partial_portion_config() {
    let config: PortionConfig =
        serde_json::from_str(r#"{"keep_at_start": 4, "fixed_total_length": 9}"#).unwrap();
    assert_eq!(config.keep_at_start, 4);
    assert_eq!(config.keep_at_end, 0);
    assert_eq!(config.mask, "*");

    let obfuscator = Portion::try_from(config).unwrap();
    assert_eq!(obfuscator.obfuscate("foo"), "foo******");
}

#[test]
fn deserialized_config_is_validated_on_conversion() {
    let config: PortionConfig = serde_json::from_str(r#"{"mask": ""}"#).unwrap();
    assert_eq!(Portion::try_from(config).unwrap_err(), ConfigError::EmptyMask);
}

#[test]
fn rejects_unknown_fields() {
    let result = serde_json::from_str::<PortionConfig>(r#"{"keep_at_the_start": 4}"#);
    assert!(result.is_err());
}

#[test]
fn config_round_trips_through_json() {
    let obfuscator = obfuscate::portion()
        .keep_at_end(4)
        .mask("#")
        .build()
        .unwrap();
    let json = serde_json::to_value(obfuscator.config()).unwrap();
    assert_eq!(json["keep_at_end"], 4);
    assert_eq!(json["mask"], "#");
    assert_eq!(json["fixed_total_length"], serde_json::Value::Null);
}

#[cfg(feature = "http")]
mod http {
    use obfuscate::{ErrorStrategy, ParameterOptions};

    #[test]
    fn deserializes_error_strategy() {
        let options: ParameterOptions =
            serde_json::from_str(r#"{"on_error": "include"}"#).unwrap();
        assert_eq!(options.on_error, ErrorStrategy::Include);

        let options: ParameterOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.on_error, ErrorStrategy::Log);
    }
}
