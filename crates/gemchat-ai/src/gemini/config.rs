//! Gemini API client configuration.

/// Public Generative Language API endpoint.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client configuration. The credential is not stored here; it
/// arrives per call from the session.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self {
            api_base: GEMINI_API_BASE.to_string(),
            max_output_tokens: 4096,
            temperature: 0.7,
        }
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self::new()
    }
}
