#![doc = include_str!("README.md")]
mod api;
mod constants;
mod error;
mod key;
mod registry;
mod value;

#[doc(inline)]
pub use api::{default_registry, get};

#[doc(inline)]
pub use constants::{
    EMBEDDING_REMOTE_SERVICE_TYPE, PROJECT_ID, REMOTE_CONNECTION, SCHEMA_NAME, SENTIMENT_ANALYSIS_PROMPT,
    TEXT_LLM_ENDPOINT, TRANSLATION_REMOTE_SERVICE_TYPE,
};

#[doc(inline)]
pub use error::{
    invalid_argument, invalid_value, missing_configuration, unknown_key, ConfigError, ConfigErrorCode, ConfigResult,
};

#[doc(inline)]
pub use key::ConfigKey;

#[doc(inline)]
pub use registry::{ConfigRegistry, ConfigRegistryBuilder};

#[doc(inline)]
pub use value::{ConfigValue, ConfigValueSource};
