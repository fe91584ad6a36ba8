use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ai::error::{unsupported_service, AiError};

/// Capability a remote service provides to the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceCapability {
    Translation,
    Embedding,
    NaturalLanguage,
    Vision,
    SpeechToText,
    DocumentProcessing,
    TextGeneration,
}

impl fmt::Display for ServiceCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceCapability::Translation => "translation",
            ServiceCapability::Embedding => "embedding",
            ServiceCapability::NaturalLanguage => "natural language",
            ServiceCapability::Vision => "vision",
            ServiceCapability::SpeechToText => "speech to text",
            ServiceCapability::DocumentProcessing => "document processing",
            ServiceCapability::TextGeneration => "text generation",
        };
        f.write_str(label)
    }
}

/// Backend selector naming the cloud AI service a remote model is bound to.
///
/// The string form is the tag the warehouse expects in the remote model's
/// `REMOTE_SERVICE_TYPE` option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemoteServiceType {
    CloudAiTranslateV3,
    CloudAiTextEmbeddingModelV1,
    CloudAiNaturalLanguageV1,
    CloudAiVisionV1,
    CloudAiSpeechToTextV2,
    CloudAiDocumentV1,
    CloudAiLargeLanguageModelV1,
}

impl RemoteServiceType {
    pub const ALL: [RemoteServiceType; 7] = [
        RemoteServiceType::CloudAiTranslateV3,
        RemoteServiceType::CloudAiTextEmbeddingModelV1,
        RemoteServiceType::CloudAiNaturalLanguageV1,
        RemoteServiceType::CloudAiVisionV1,
        RemoteServiceType::CloudAiSpeechToTextV2,
        RemoteServiceType::CloudAiDocumentV1,
        RemoteServiceType::CloudAiLargeLanguageModelV1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteServiceType::CloudAiTranslateV3 => "CLOUD_AI_TRANSLATE_V3",
            RemoteServiceType::CloudAiTextEmbeddingModelV1 => "CLOUD_AI_TEXT_EMBEDDING_MODEL_V1",
            RemoteServiceType::CloudAiNaturalLanguageV1 => "CLOUD_AI_NATURAL_LANGUAGE_V1",
            RemoteServiceType::CloudAiVisionV1 => "CLOUD_AI_VISION_V1",
            RemoteServiceType::CloudAiSpeechToTextV2 => "CLOUD_AI_SPEECH_TO_TEXT_V2",
            RemoteServiceType::CloudAiDocumentV1 => "CLOUD_AI_DOCUMENT_V1",
            RemoteServiceType::CloudAiLargeLanguageModelV1 => "CLOUD_AI_LARGE_LANGUAGE_MODEL_V1",
        }
    }

    /// Returns the capability the service provides.
    pub fn capability(&self) -> ServiceCapability {
        match self {
            RemoteServiceType::CloudAiTranslateV3 => ServiceCapability::Translation,
            RemoteServiceType::CloudAiTextEmbeddingModelV1 => ServiceCapability::Embedding,
            RemoteServiceType::CloudAiNaturalLanguageV1 => ServiceCapability::NaturalLanguage,
            RemoteServiceType::CloudAiVisionV1 => ServiceCapability::Vision,
            RemoteServiceType::CloudAiSpeechToTextV2 => ServiceCapability::SpeechToText,
            RemoteServiceType::CloudAiDocumentV1 => ServiceCapability::DocumentProcessing,
            RemoteServiceType::CloudAiLargeLanguageModelV1 => ServiceCapability::TextGeneration,
        }
    }
}

impl fmt::Display for RemoteServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemoteServiceType {
    type Err = AiError;

    /// Parses a selector tag. Surrounding whitespace is ignored; the tag itself is matched
    /// exactly, as the warehouse does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        RemoteServiceType::ALL
            .into_iter()
            .find(|service| service.as_str() == tag)
            .ok_or_else(|| unsupported_service(format!("Unknown remote service type '{tag}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::error::AiErrorCode;

    #[test]
    fn pipeline_selectors_map_to_expected_capabilities() {
        let translate: RemoteServiceType = "CLOUD_AI_TRANSLATE_V3".parse().unwrap();
        assert_eq!(translate.capability(), ServiceCapability::Translation);

        let embedding: RemoteServiceType = "CLOUD_AI_TEXT_EMBEDDING_MODEL_V1".parse().unwrap();
        assert_eq!(embedding.capability(), ServiceCapability::Embedding);
    }

    #[test]
    fn parsing_trims_but_keeps_case() {
        assert_eq!(
            " CLOUD_AI_VISION_V1\n".parse::<RemoteServiceType>().unwrap(),
            RemoteServiceType::CloudAiVisionV1
        );
        let err = "cloud_ai_translate_v3".parse::<RemoteServiceType>().unwrap_err();
        assert_eq!(err.code, AiErrorCode::UnsupportedService);
    }

    #[test]
    fn serde_matches_display() {
        for service in RemoteServiceType::ALL {
            let json = serde_json::to_value(service).unwrap();
            assert_eq!(json, serde_json::Value::String(service.to_string()));
        }
    }
}
