use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::constants;
use crate::config::error::{unknown_key, ConfigError};

/// The closed set of configuration keys understood by the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    ProjectId,
    SchemaName,
    RemoteConnection,
    TranslationRemoteServiceType,
    TextLlmEndpoint,
    EmbeddingRemoteServiceType,
    SentimentAnalysisPrompt,
}

impl ConfigKey {
    /// Every key, in declaration order.
    pub const ALL: [ConfigKey; 7] = [
        ConfigKey::ProjectId,
        ConfigKey::SchemaName,
        ConfigKey::RemoteConnection,
        ConfigKey::TranslationRemoteServiceType,
        ConfigKey::TextLlmEndpoint,
        ConfigKey::EmbeddingRemoteServiceType,
        ConfigKey::SentimentAnalysisPrompt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::ProjectId => "PROJECT_ID",
            ConfigKey::SchemaName => "SCHEMA_NAME",
            ConfigKey::RemoteConnection => "REMOTE_CONNECTION",
            ConfigKey::TranslationRemoteServiceType => "TRANSLATION_REMOTE_SERVICE_TYPE",
            ConfigKey::TextLlmEndpoint => "TEXT_LLM_ENDPOINT",
            ConfigKey::EmbeddingRemoteServiceType => "EMBEDDING_REMOTE_SERVICE_TYPE",
            ConfigKey::SentimentAnalysisPrompt => "SENTIMENT_ANALYSIS_PROMPT",
        }
    }

    /// Returns the value compiled into the crate for this key.
    pub fn default_value(&self) -> &'static str {
        match self {
            ConfigKey::ProjectId => constants::PROJECT_ID,
            ConfigKey::SchemaName => constants::SCHEMA_NAME,
            ConfigKey::RemoteConnection => constants::REMOTE_CONNECTION,
            ConfigKey::TranslationRemoteServiceType => constants::TRANSLATION_REMOTE_SERVICE_TYPE,
            ConfigKey::TextLlmEndpoint => constants::TEXT_LLM_ENDPOINT,
            ConfigKey::EmbeddingRemoteServiceType => constants::EMBEDDING_REMOTE_SERVICE_TYPE,
            ConfigKey::SentimentAnalysisPrompt => constants::SENTIMENT_ANALYSIS_PROMPT,
        }
    }

    /// Whether the key identifies a deployment resource that must be non-empty before use.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            ConfigKey::ProjectId | ConfigKey::SchemaName | ConfigKey::RemoteConnection
        )
    }

    /// Whether the value may be written to logs.
    pub(crate) fn is_loggable(&self) -> bool {
        !matches!(self, ConfigKey::SentimentAnalysisPrompt)
    }

    /// Whether the value is kept exactly as supplied. Every other value is trimmed on load.
    pub(crate) fn is_verbatim(&self) -> bool {
        matches!(self, ConfigKey::SentimentAnalysisPrompt)
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| unknown_key(s))
    }
}
