//! Configuration for proposition extraction

use serde::{Deserialize, Serialize};

/// Configuration for rendering and assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Render lemmas instead of original surface forms
    pub lemmatize: bool,

    /// Allow propositions of unrestricted arity; when false (the
    /// default), every proposition is collapsed to at most 3 slots and
    /// optionality markings are dropped
    pub nary: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            lemmatize: false,
            nary: false,
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert!(!config.lemmatize);
        assert!(!config.nary);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig {
            lemmatize: true,
            nary: true,
        };
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = ExtractorConfig::from_toml("lemmatize = true\n").unwrap();
        assert!(parsed.lemmatize);
        assert!(!parsed.nary);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(ExtractorConfig::from_toml("lemmatize = \"maybe\"").is_err());
    }
}
