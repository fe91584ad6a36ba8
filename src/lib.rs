#![doc = include_str!("RUSTDOC.md")]

pub mod ai;
pub mod config;

#[doc(inline)]
pub use config::{
    EMBEDDING_REMOTE_SERVICE_TYPE, PROJECT_ID, REMOTE_CONNECTION, SCHEMA_NAME, SENTIMENT_ANALYSIS_PROMPT,
    TEXT_LLM_ENDPOINT, TRANSLATION_REMOTE_SERVICE_TYPE,
};
