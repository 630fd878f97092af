use crate::error::AppResult;

pub mod gemini;

pub use gemini::GeminiClient;

/// Single-turn text generation
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync {
    /// Sends one prompt and returns the model's raw text reply
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}
