use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigErrorCode {
    MissingConfiguration,
    UnknownKey,
    InvalidValue,
    InvalidArgument,
}

impl ConfigErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigErrorCode::MissingConfiguration => "config/missing-configuration",
            ConfigErrorCode::UnknownKey => "config/unknown-key",
            ConfigErrorCode::InvalidValue => "config/invalid-value",
            ConfigErrorCode::InvalidArgument => "config/invalid-argument",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    pub code: ConfigErrorCode,
    message: String,
    keys: Vec<String>,
}

impl ConfigError {
    pub fn new(code: ConfigErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            keys: Vec::new(),
        }
    }

    pub(crate) fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Configuration keys the error refers to, in key order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for ConfigError {}

pub type ConfigResult<T> = Result<T, ConfigError>;

pub fn missing_configuration<I, S>(keys: I) -> ConfigError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
    ConfigError::new(
        ConfigErrorCode::MissingConfiguration,
        format!("Required configuration is empty or unset: {}", keys.join(", ")),
    )
    .with_keys(keys)
}

pub fn unknown_key(name: impl Into<String>) -> ConfigError {
    let name = name.into();
    ConfigError::new(
        ConfigErrorCode::UnknownKey,
        format!("Unknown configuration key '{name}'"),
    )
    .with_keys([name])
}

pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::new(ConfigErrorCode::InvalidValue, message).with_keys([key.into()])
}

pub fn invalid_argument(message: impl Into<String>) -> ConfigError {
    ConfigError::new(ConfigErrorCode::InvalidArgument, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_configuration_lists_every_key() {
        let err = missing_configuration(["PROJECT_ID", "SCHEMA_NAME"]);
        assert_eq!(err.code_str(), "config/missing-configuration");
        assert_eq!(err.keys(), ["PROJECT_ID", "SCHEMA_NAME"]);
        assert_eq!(
            err.to_string(),
            "Required configuration is empty or unset: PROJECT_ID, SCHEMA_NAME (config/missing-configuration)"
        );
    }

    #[test]
    fn unknown_key_reports_requested_name() {
        let err = unknown_key("MODEL_TEMPERATURE");
        assert_eq!(err.code, ConfigErrorCode::UnknownKey);
        assert!(err.message().contains("MODEL_TEMPERATURE"));
    }
}
