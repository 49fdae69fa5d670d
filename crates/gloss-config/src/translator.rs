use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36".to_string()
}

fn default_interface_lang() -> String {
    "en".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Whole-request timeout, connect included
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Language of the backend's own labels (`hl`)
    #[serde(default = "default_interface_lang")]
    pub interface_lang: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
            interface_lang: default_interface_lang(),
        }
    }
}
