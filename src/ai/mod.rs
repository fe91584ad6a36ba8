#![doc = include_str!("README.md")]
mod backend;
mod endpoint;
mod error;
mod sentiment;

#[doc(inline)]
pub use backend::{RemoteServiceType, ServiceCapability};

#[doc(inline)]
pub use endpoint::ModelEndpoint;

#[doc(inline)]
pub use error::{invalid_argument, invalid_response, unsupported_service, AiError, AiErrorCode, AiResult};

#[doc(inline)]
pub use sentiment::{SentimentLabel, SentimentPrompt};
