use once_cell::sync::Lazy;

use crate::config::key::ConfigKey;
use crate::config::registry::ConfigRegistry;

static DEFAULT_REGISTRY: Lazy<ConfigRegistry> = Lazy::new(ConfigRegistry::defaults);

/// Process-wide registry of the built-in values, built on first access.
///
/// Deployments that substitute identifiers should build their own registry with
/// [`ConfigRegistry::from_env`] or [`ConfigRegistry::builder`] and pass it to the components
/// that need it.
pub fn default_registry() -> &'static ConfigRegistry {
    &DEFAULT_REGISTRY
}

/// Reads `key` from [`default_registry`].
///
/// # Examples
///
/// ```
/// use ai_pipeline_config::config::{get, ConfigKey};
///
/// assert_eq!(get(ConfigKey::TextLlmEndpoint), "gemini-1.5-flash-002");
/// ```
pub fn get(key: ConfigKey) -> &'static str {
    default_registry().get(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants;

    #[test]
    fn default_registry_is_built_once() {
        let first = default_registry() as *const ConfigRegistry;
        let second = default_registry() as *const ConfigRegistry;
        assert_eq!(first, second);
        assert_eq!(default_registry(), &ConfigRegistry::defaults());
    }

    #[test]
    fn get_returns_exported_constants() {
        assert_eq!(get(ConfigKey::TranslationRemoteServiceType), constants::TRANSLATION_REMOTE_SERVICE_TYPE);
        assert_eq!(get(ConfigKey::EmbeddingRemoteServiceType), constants::EMBEDDING_REMOTE_SERVICE_TYPE);
        assert_eq!(get(ConfigKey::SentimentAnalysisPrompt), constants::SENTIMENT_ANALYSIS_PROMPT);
    }

    #[test]
    fn concurrent_readers_see_the_same_values() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| get(ConfigKey::TextLlmEndpoint)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "gemini-1.5-flash-002");
        }
    }
}
