//! Configuration values tagged with where they came from.
//!
//! Modelled on the Remote Config value type: every key always resolves to a value, and the
//! source records whether it was compiled in or supplied at deployment time.

use serde::Serialize;

use crate::config::key::ConfigKey;

/// Indicates where a configuration value originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigValueSource {
    /// Value compiled into the crate.
    Default,
    /// Value read from a process environment variable.
    Environment,
    /// Value read from a JSON override document.
    Document,
    /// Value set explicitly through the registry builder.
    Override,
}

impl ConfigValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigValueSource::Default => "default",
            ConfigValueSource::Environment => "environment",
            ConfigValueSource::Document => "document",
            ConfigValueSource::Override => "override",
        }
    }
}

/// A single key/value entry of the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfigValue {
    key: ConfigKey,
    value: String,
    source: ConfigValueSource,
}

impl ConfigValue {
    pub(crate) fn new(key: ConfigKey, source: ConfigValueSource, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
            source,
        }
    }

    pub(crate) fn default_for(key: ConfigKey) -> Self {
        Self::new(key, ConfigValueSource::Default, key.default_value())
    }

    pub fn key(&self) -> ConfigKey {
        self.key
    }

    /// Returns the raw value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ai_pipeline_config::config::ConfigRegistry;
    /// use ai_pipeline_config::config::ConfigKey;
    ///
    /// let registry = ConfigRegistry::defaults();
    /// let value = registry.value(ConfigKey::TextLlmEndpoint);
    /// assert_eq!(value.as_str(), "gemini-1.5-flash-002");
    /// ```
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether the value is an unset placeholder (empty or whitespace only).
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn source(&self) -> ConfigValueSource {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_compiled_values() {
        let value = ConfigValue::default_for(ConfigKey::TranslationRemoteServiceType);
        assert_eq!(value.as_str(), "CLOUD_AI_TRANSLATE_V3");
        assert_eq!(value.source(), ConfigValueSource::Default);
        assert!(!value.is_empty());
    }

    #[test]
    fn whitespace_counts_as_placeholder() {
        let value = ConfigValue::new(ConfigKey::ProjectId, ConfigValueSource::Environment, "  \t");
        assert!(value.is_empty());
        assert!(ConfigValue::default_for(ConfigKey::SchemaName).is_empty());
    }

    #[test]
    fn source_serializes_lowercase() {
        let json = serde_json::to_value(ConfigValueSource::Environment).unwrap();
        assert_eq!(json, serde_json::json!("environment"));
    }
}
