use unicode_normalization::UnicodeNormalization;

/// Cleanup applied to the launcher query before it is sent to the backend
pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // NFC, not NFKC: full-width input reaches the backend unchanged
        let text: String = text.nfc().collect();

        // Launcher queries are single line
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct QueryPreprocessor;
impl Preprocessor for QueryPreprocessor {}
