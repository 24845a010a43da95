pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use restyle_core::{GenerationSettings, RestyleError};

/// A single prompt ready to send upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub settings: GenerationSettings,
}

/// Trait for generative text backends.
///
/// Implementations own the transport and response decoding. Prompt assembly
/// lives in restyle-prompts; request validation lives in the server.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Optional model identifier for logging.
    fn model_hint(&self) -> Option<&str> {
        None
    }

    /// Send one prompt and return the generated text.
    async fn generate(&self, request: &GenerateRequest) -> Result<String, RestyleError>;
}
