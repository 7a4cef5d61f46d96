use std::env;

use openai::client::DEFAULT_VISION_MODEL;

/// Configuration for OpenAI API access.
///
/// Environment variables:
/// - OPENAI_API_KEY: API key (optional; without it image analysis is unavailable)
/// - OPENAI_VISION_MODEL: Vision model name (default: "gpt-4o")
pub struct OpenAIConfig {
    pub api_key: Option<String>,
    pub vision_model: String,
}

impl OpenAIConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("OPENAI_API_KEY").ok(),
            env::var("OPENAI_VISION_MODEL").ok(),
        )
    }

    fn from_values(api_key: Option<String>, vision_model: Option<String>) -> Self {
        Self {
            api_key: api_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            vision_model: vision_model
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_VISION_MODEL.to_string()),
        }
    }
}
