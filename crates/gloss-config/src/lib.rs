use std::env;

use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::translator::TranslatorConfig;

pub mod log;
pub mod translator;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub log: LogConfig,
}

impl Config {
    /// Read settings from the process environment
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(api_url) = lookup("GLOSS_API_URL").filter(|v| !v.is_empty()) {
            config.translator.api_url = api_url;
        }

        if let Some(timeout) = lookup("GLOSS_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            config.translator.timeout_seconds = timeout;
        }

        if let Some(user_agent) = lookup("GLOSS_USER_AGENT").filter(|v| !v.is_empty()) {
            config.translator.user_agent = user_agent;
        }

        if let Some(lang) = lookup("GLOSS_INTERFACE_LANG").filter(|v| !v.is_empty()) {
            config.translator.interface_lang = lang;
        }

        if let Some(filter) = lookup("GLOSS_LOG").filter(|v| !v.is_empty()) {
            config.log.filter = filter;
        }

        if let Some(json) = lookup("GLOSS_LOG_JSON") {
            config.log.json = matches!(json.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(
            config.translator.api_url,
            "https://translate.googleapis.com/translate_a/single"
        );
        assert_eq!(config.translator.timeout_seconds, 10);
        assert_eq!(config.translator.interface_lang, "en");
        assert_eq!(config.log.filter, "warn");
        assert!(!config.log.json);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("GLOSS_API_URL", "http://localhost:9000/single"),
            ("GLOSS_TIMEOUT_SECONDS", "3"),
            ("GLOSS_LOG", "gloss=debug"),
            ("GLOSS_LOG_JSON", "TRUE"),
        ]);
        assert_eq!(config.translator.api_url, "http://localhost:9000/single");
        assert_eq!(config.translator.timeout_seconds, 3);
        assert_eq!(config.log.filter, "gloss=debug");
        assert!(config.log.json);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = config_from(&[("GLOSS_TIMEOUT_SECONDS", "soon"), ("GLOSS_API_URL", "")]);
        assert_eq!(config.translator.timeout_seconds, 10);
        assert_eq!(
            config.translator.api_url,
            "https://translate.googleapis.com/translate_a/single"
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"translator":{"timeout_seconds":5}}"#).unwrap();
        assert_eq!(config.translator.timeout_seconds, 5);
        assert_eq!(config.translator.interface_lang, "en");
        assert_eq!(config.log.filter, "warn");
    }
}
