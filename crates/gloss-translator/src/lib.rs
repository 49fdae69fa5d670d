use serde::{Deserialize, Serialize};

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<TranslationResponse, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Everything the backend told us about one query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub primary_text: String,
    pub detected_source_language: Option<LanguageCode>,
    pub resolved_target_language: Option<LanguageCode>,
    pub source_correction: Option<SourceCorrection>,
    /// Backend thinks the input is written in another language than requested
    #[serde(default)]
    pub source_language_suggested: bool,
    pub pronunciation: Option<String>,
    /// Undecoded response body, still elided
    pub raw_secondary_payload: String,
}

/// Spelling fix proposed by the backend for the input text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCorrection {
    /// Corrected input; the changed words are wrapped in `[` `]`
    pub corrected_text: String,
    pub was_auto_corrected: bool,
    pub was_suggested: bool,
}

impl SourceCorrection {
    pub fn is_active(&self) -> bool {
        self.was_auto_corrected || self.was_suggested
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Malformed payload: {0}")]
    Payload(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}
