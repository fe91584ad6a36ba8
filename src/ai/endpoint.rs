use std::fmt;

use crate::ai::error::{invalid_argument, AiResult};

/// Identifier of a hosted language-model endpoint, e.g. `gemini-1.5-flash-002`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelEndpoint {
    id: String,
}

impl ModelEndpoint {
    /// Wraps an endpoint identifier after trimming it.
    ///
    /// Empty identifiers and identifiers containing whitespace are rejected.
    pub fn new<S: Into<String>>(id: S) -> AiResult<Self> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(invalid_argument("Model endpoint identifier must not be empty"));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(invalid_argument(format!(
                "Model endpoint identifier '{id}' must not contain whitespace"
            )));
        }
        Ok(Self { id: id.to_string() })
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Model family, the segment before the first `-` (`gemini` for `gemini-1.5-flash-002`).
    pub fn model_family(&self) -> &str {
        self.id.split('-').next().unwrap_or(&self.id)
    }

    /// Trailing numeric revision (`002` for `gemini-1.5-flash-002`), if the identifier pins one.
    pub fn version(&self) -> Option<&str> {
        let (_, last) = self.id.rsplit_once('-')?;
        if !last.is_empty() && last.chars().all(|c| c.is_ascii_digit()) {
            Some(last)
        } else {
            None
        }
    }
}

impl fmt::Display for ModelEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_endpoint_exposes_family_and_version() {
        let endpoint = ModelEndpoint::new("gemini-1.5-flash-002").unwrap();
        assert_eq!(endpoint.model_family(), "gemini");
        assert_eq!(endpoint.version(), Some("002"));
    }

    #[test]
    fn unpinned_endpoint_has_no_version() {
        let endpoint = ModelEndpoint::new(" gemini-pro ").unwrap();
        assert_eq!(endpoint.as_str(), "gemini-pro");
        assert_eq!(endpoint.version(), None);
        assert_eq!(ModelEndpoint::new("textembed").unwrap().model_family(), "textembed");
    }

    #[test]
    fn rejects_blank_and_spaced_identifiers() {
        assert_eq!(
            ModelEndpoint::new("   ").unwrap_err().code_str(),
            "ai/invalid-argument"
        );
        assert!(ModelEndpoint::new("gemini 1.5").is_err());
    }
}
