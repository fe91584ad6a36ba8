//! The immutable configuration registry and the builder that assembles it.
//!
//! Values are resolved once, when [`ConfigRegistryBuilder::build`] runs. Layers are applied in a
//! fixed precedence regardless of the order the builder methods are called in: explicit
//! overrides win over a JSON document, which wins over the environment, which wins over the
//! values compiled into the crate.

use std::collections::BTreeMap;
use std::env::{self, VarError};

use serde_json::{Map, Value};

use crate::ai::{ModelEndpoint, RemoteServiceType, SentimentPrompt, ServiceCapability};
use crate::config::error::{invalid_argument, invalid_value, missing_configuration, ConfigResult};
use crate::config::key::ConfigKey;
use crate::config::value::{ConfigValue, ConfigValueSource};

/// Read-only mapping from every [`ConfigKey`] to its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigRegistry {
    values: [ConfigValue; 7],
}

impl ConfigRegistry {
    /// Registry holding only the values compiled into the crate.
    ///
    /// # Examples
    ///
    /// ```
    /// use ai_pipeline_config::config::{ConfigKey, ConfigRegistry};
    ///
    /// let registry = ConfigRegistry::defaults();
    /// assert_eq!(registry.get(ConfigKey::TranslationRemoteServiceType), "CLOUD_AI_TRANSLATE_V3");
    /// assert_eq!(registry.get(ConfigKey::ProjectId), "");
    /// ```
    pub fn defaults() -> Self {
        Self {
            values: ConfigKey::ALL.map(ConfigValue::default_for),
        }
    }

    pub fn builder() -> ConfigRegistryBuilder {
        ConfigRegistryBuilder::default()
    }

    /// Defaults overlaid with process environment variables named after the keys.
    ///
    /// Fails with `config/invalid-value` when a variable is set but is not valid UTF-8.
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self::builder().with_env()?.build())
    }

    /// Like [`ConfigRegistry::from_env`], reading `<prefix><KEY>` variables instead.
    pub fn from_env_with_prefix(prefix: &str) -> ConfigResult<Self> {
        Ok(Self::builder().with_env_prefix(prefix)?.build())
    }

    /// Defaults overlaid with whatever `lookup` returns for each key name.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::builder().with_lookup("", lookup).build()
    }

    /// Defaults overlaid with a flat JSON object mapping key names to strings.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(Self::builder().with_json_str(json)?.build())
    }

    pub fn get(&self, key: ConfigKey) -> &str {
        self.value(key).as_str()
    }

    /// Looks a value up by its key name, failing for names outside the key set.
    pub fn get_by_name(&self, name: &str) -> ConfigResult<&str> {
        let key: ConfigKey = name.parse()?;
        Ok(self.get(key))
    }

    pub fn value(&self, key: ConfigKey) -> &ConfigValue {
        &self.values[key.index()]
    }

    /// Iterates over every entry in key order.
    pub fn values(&self) -> impl Iterator<Item = &ConfigValue> {
        self.values.iter()
    }

    /// Checks that the registry is usable by the pipeline.
    ///
    /// Fails with `config/missing-configuration` naming every required identifier that is
    /// still a placeholder, then with `config/invalid-value` for the first selector, endpoint
    /// or prompt that cannot be interpreted.
    pub fn validate(&self) -> ConfigResult<()> {
        let result = self.check();
        if let Err(err) = &result {
            log::warn!("configuration validation failed: {err}");
        }
        result
    }

    /// Consumes the registry, returning it only if [`ConfigRegistry::validate`] passes.
    pub fn validated(self) -> ConfigResult<Self> {
        self.validate()?;
        Ok(self)
    }

    fn check(&self) -> ConfigResult<()> {
        let missing: Vec<&str> = self
            .values()
            .filter(|value| value.key().is_required() && value.is_empty())
            .map(|value| value.key().as_str())
            .collect();
        if !missing.is_empty() {
            return Err(missing_configuration(missing));
        }

        self.translation_service()?;
        self.embedding_service()?;
        self.text_llm_endpoint()?;
        if self.sentiment_prompt().labels().is_empty() {
            return Err(invalid_value(
                ConfigKey::SentimentAnalysisPrompt.as_str(),
                "Sentiment analysis prompt does not name any sentiment label",
            ));
        }
        Ok(())
    }

    /// Translation backend selector.
    pub fn translation_service(&self) -> ConfigResult<RemoteServiceType> {
        self.service(ConfigKey::TranslationRemoteServiceType, ServiceCapability::Translation)
    }

    /// Embedding backend selector.
    pub fn embedding_service(&self) -> ConfigResult<RemoteServiceType> {
        self.service(ConfigKey::EmbeddingRemoteServiceType, ServiceCapability::Embedding)
    }

    fn service(&self, key: ConfigKey, expected: ServiceCapability) -> ConfigResult<RemoteServiceType> {
        let service: RemoteServiceType = self
            .get(key)
            .parse()
            .map_err(|err| invalid_value(key.as_str(), format!("{key}: {err}")))?;
        if service.capability() != expected {
            return Err(invalid_value(
                key.as_str(),
                format!("{key}: {service} provides {}, expected {expected}", service.capability()),
            ));
        }
        Ok(service)
    }

    pub fn text_llm_endpoint(&self) -> ConfigResult<ModelEndpoint> {
        let key = ConfigKey::TextLlmEndpoint;
        ModelEndpoint::new(self.get(key)).map_err(|err| invalid_value(key.as_str(), format!("{key}: {err}")))
    }

    pub fn sentiment_prompt(&self) -> SentimentPrompt {
        SentimentPrompt::new(self.get(ConfigKey::SentimentAnalysisPrompt))
    }

    /// Fully qualified `project.schema.object` name for a table or remote model.
    ///
    /// # Examples
    ///
    /// ```
    /// use ai_pipeline_config::config::{ConfigKey, ConfigRegistry};
    ///
    /// let registry = ConfigRegistry::builder()
    ///     .set(ConfigKey::ProjectId, "acme-analytics")
    ///     .set(ConfigKey::SchemaName, "reviews")
    ///     .build();
    /// assert_eq!(
    ///     registry.qualified_name("sentiment_model").unwrap(),
    ///     "acme-analytics.reviews.sentiment_model"
    /// );
    /// ```
    pub fn qualified_name(&self, object: &str) -> ConfigResult<String> {
        let object = object.trim();
        if object.is_empty() {
            return Err(invalid_argument("Object name must not be empty"));
        }
        let missing: Vec<&str> = [ConfigKey::ProjectId, ConfigKey::SchemaName]
            .into_iter()
            .filter(|key| self.value(*key).is_empty())
            .map(|key| key.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(missing_configuration(missing));
        }
        Ok(format!(
            "{}.{}.{}",
            self.get(ConfigKey::ProjectId),
            self.get(ConfigKey::SchemaName),
            object
        ))
    }

    /// Flat JSON object of key names to values, accepted back by
    /// [`ConfigRegistry::from_json_str`].
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .values()
            .map(|value| (value.key().as_str().to_string(), Value::String(value.as_str().to_string())))
            .collect();
        Value::Object(map)
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Collects override layers and resolves them into a [`ConfigRegistry`].
#[derive(Clone, Debug, Default)]
pub struct ConfigRegistryBuilder {
    environment: BTreeMap<ConfigKey, String>,
    document: BTreeMap<ConfigKey, String>,
    overrides: BTreeMap<ConfigKey, String>,
}

impl ConfigRegistryBuilder {
    /// Reads process environment variables named after the keys.
    pub fn with_env(self) -> ConfigResult<Self> {
        self.with_env_prefix("")
    }

    /// Reads `<prefix><KEY>` process environment variables.
    ///
    /// A variable that is set but not valid UTF-8 fails with `config/invalid-value` instead of
    /// falling back to a lower layer.
    pub fn with_env_prefix(self, prefix: &str) -> ConfigResult<Self> {
        self.try_with_lookup(prefix, |key, name| match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(raw)) => {
                log::warn!("environment variable {name} is not valid UTF-8: {raw:?}");
                Err(invalid_value(
                    key.as_str(),
                    format!("Environment variable {name} is not valid UTF-8"),
                ))
            }
        })
    }

    /// Reads `<prefix><KEY>` through `lookup`. Missing and blank results leave the key unset.
    pub fn with_lookup<F>(mut self, prefix: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in ConfigKey::ALL {
            let name = format!("{prefix}{key}");
            self.insert_environment(key, lookup(&name));
        }
        self
    }

    fn try_with_lookup<F>(mut self, prefix: &str, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(ConfigKey, &str) -> ConfigResult<Option<String>>,
    {
        for key in ConfigKey::ALL {
            let name = format!("{prefix}{key}");
            let value = lookup(key, &name)?;
            self.insert_environment(key, value);
        }
        Ok(self)
    }

    fn insert_environment(&mut self, key: ConfigKey, value: Option<String>) {
        match value {
            Some(value) if !value.trim().is_empty() => {
                self.environment.insert(key, value);
            }
            _ => {}
        }
    }

    /// Parses a flat JSON object mapping key names to string values.
    ///
    /// Unknown key names fail with `config/unknown-key`; anything other than an object of
    /// strings fails with `config/invalid-argument`. Blank strings leave the key unset, as they
    /// do for the environment.
    pub fn with_json_str(mut self, json: &str) -> ConfigResult<Self> {
        let document: Value = serde_json::from_str(json)
            .map_err(|err| invalid_argument(format!("Configuration document is not valid JSON: {err}")))?;
        let Value::Object(entries) = document else {
            return Err(invalid_argument("Configuration document must be a JSON object"));
        };
        for (name, value) in entries {
            let key: ConfigKey = name.parse()?;
            let Value::String(value) = value else {
                return Err(invalid_argument(format!(
                    "Configuration value for {key} must be a string"
                )));
            };
            if !value.trim().is_empty() {
                self.document.insert(key, value);
            }
        }
        Ok(self)
    }

    /// Sets a value explicitly. Takes precedence over every other layer.
    pub fn set(mut self, key: ConfigKey, value: impl Into<String>) -> Self {
        self.overrides.insert(key, value.into());
        self
    }

    pub fn build(self) -> ConfigRegistry {
        let values = ConfigKey::ALL.map(|key| self.resolve(key));
        for value in values.iter().filter(|value| value.source() != ConfigValueSource::Default) {
            if value.key().is_loggable() {
                log::debug!(
                    "{} = '{}' (from {})",
                    value.key(),
                    value.as_str(),
                    value.source().as_str()
                );
            } else {
                log::debug!("{} overridden (from {})", value.key(), value.source().as_str());
            }
        }
        log::debug!("configuration registry built");
        ConfigRegistry { values }
    }

    fn resolve(&self, key: ConfigKey) -> ConfigValue {
        let layers = [
            (&self.overrides, ConfigValueSource::Override),
            (&self.document, ConfigValueSource::Document),
            (&self.environment, ConfigValueSource::Environment),
        ];
        layers
            .into_iter()
            .find_map(|(layer, source)| layer.get(&key).map(|value| (source, value.as_str())))
            .map(|(source, value)| {
                let value = if key.is_verbatim() { value } else { value.trim() };
                ConfigValue::new(key, source, value)
            })
            .unwrap_or_else(|| ConfigValue::default_for(key))
    }
}
