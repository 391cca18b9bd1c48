// Mon Feb 9 2026 - Alex

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ATTRIBUTE: &str = "extract_offset";
pub const DEFAULT_SEPARATOR: &str = "::";
pub const DEFAULT_MAX_LENGTH: usize = 256;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub attribute: String,
    pub output_file: Option<PathBuf>,
    pub separator: String,
    pub prefix: String,
    pub capitalize: bool,
    pub append: bool,
    pub output_bits: bool,
    pub max_length: usize,
    pub macros: bool,
    pub lenient: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            output_file: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            prefix: String::new(),
            capitalize: false,
            append: false,
            output_bits: false,
            max_length: DEFAULT_MAX_LENGTH,
            macros: false,
            lenient: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = Some(output);
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Applies one `key` / `key=value` setting. Unknown keys fail the run
    /// unless the lenient policy is active, in which case they only warn.
    pub fn apply_setting(&mut self, key: &str, value: Option<&str>) -> Result<(), ExtractError> {
        match key {
            "attribute" => self.attribute = required(key, value)?.to_string(),
            "output" => self.output_file = Some(PathBuf::from(required(key, value)?)),
            "separator" => self.separator = required(key, value)?.to_string(),
            "prefix" => self.prefix = required(key, value)?.to_string(),
            "capitalize" => self.capitalize = true,
            "append" => self.append = true,
            "output_bits" => self.output_bits = true,
            "macros" => self.macros = true,
            "max_length" => match value.and_then(|v| v.parse::<usize>().ok()) {
                Some(n) if n > 0 => self.max_length = n,
                _ => log::warn!(
                    "Wrong max_length value, keeping the current value {}",
                    self.max_length
                ),
            },
            _ => {
                if self.lenient {
                    log::warn!("Unknown configuration key: {}", key);
                } else {
                    return Err(ExtractError::UnknownKey(key.to_string()));
                }
            }
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, settings: &[String]) -> Result<(), ExtractError> {
        for raw in settings {
            match raw.split_once('=') {
                Some((key, value)) => self.apply_setting(key, Some(value))?,
                None => self.apply_setting(raw, None)?,
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.attribute.is_empty() {
            return Err(ExtractError::InvalidConfig(
                "attribute name must not be empty".to_string(),
            ));
        }
        if self.separator.is_empty() {
            return Err(ExtractError::InvalidConfig(
                "separator must not be empty".to_string(),
            ));
        }
        if self.max_length == 0 {
            return Err(ExtractError::InvalidConfig(
                "max_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn required<'v>(key: &str, value: Option<&'v str>) -> Result<&'v str, ExtractError> {
    value.ok_or_else(|| ExtractError::InvalidConfig(format!("{} requires a value", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.attribute, "extract_offset");
        assert_eq!(config.separator, "::");
        assert_eq!(config.max_length, 256);
        assert!(config.output_file.is_none());
        assert!(!config.output_bits);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::new();
        config
            .apply_overrides(&[
                "attribute=exported".to_string(),
                "separator=_".to_string(),
                "capitalize".to_string(),
                "max_length=512".to_string(),
            ])
            .unwrap();

        assert_eq!(config.attribute, "exported");
        assert_eq!(config.separator, "_");
        assert!(config.capitalize);
        assert_eq!(config.max_length, 512);
    }

    #[test]
    fn test_unknown_key_is_fatal_by_default() {
        let mut config = Config::new();
        let err = config.apply_setting("no_such_key", None).unwrap_err();
        assert!(matches!(err, ExtractError::UnknownKey(k) if k == "no_such_key"));
    }

    #[test]
    fn test_unknown_key_warns_when_lenient() {
        let mut config = Config::new().with_lenient(true);
        config.apply_setting("no_such_key", None).unwrap();
    }

    #[test]
    fn test_bad_max_length_keeps_current_value() {
        let mut config = Config::new();
        config.apply_setting("max_length", Some("bogus")).unwrap();
        config.apply_setting("max_length", Some("0")).unwrap();
        assert_eq!(config.max_length, 256);
    }

    #[test]
    fn test_value_keys_require_a_value() {
        let mut config = Config::new();
        let err = config.apply_setting("separator", None).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_empty_attribute() {
        let config = Config::new().with_attribute("");
        assert!(matches!(
            config.validate(),
            Err(ExtractError::InvalidConfig(_))
        ));
    }
}
