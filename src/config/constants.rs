//! Built-in values for every configuration key.
//!
//! The three identifiers are empty placeholders that a deployment is expected to fill in
//! through the environment, a JSON override document, or the registry builder.

/// Identifier of the owning cloud project.
pub const PROJECT_ID: &str = "";

/// Target schema (dataset) holding the pipeline tables and remote models.
pub const SCHEMA_NAME: &str = "";

/// Reference to the external service connection used by remote models.
pub const REMOTE_CONNECTION: &str = "";

/// Backend selector for the translation remote service.
pub const TRANSLATION_REMOTE_SERVICE_TYPE: &str = "CLOUD_AI_TRANSLATE_V3";

/// Language-model endpoint used for text generation and classification.
pub const TEXT_LLM_ENDPOINT: &str = "gemini-1.5-flash-002";

/// Backend selector for the embedding remote service.
pub const EMBEDDING_REMOTE_SERVICE_TYPE: &str = "CLOUD_AI_TEXT_EMBEDDING_MODEL_V1";

/// Instruction prepended to caller text for sentiment classification.
pub const SENTIMENT_ANALYSIS_PROMPT: &str = "Classify the sentiment of the following text as one of the following: disappointed, satisfied, thrilled, angry, content, delighted, underwhelmed, frustrated, happy, or impressed. Text:";
