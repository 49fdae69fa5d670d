use std::time::Duration;

use async_trait::async_trait;
use gloss_config::translator::TranslatorConfig;
use gloss_translator::{
    LanguageCode, ProviderMetadata, TranslateError, TranslationResponse, Translator,
};

use crate::decode::decode_body;

/// Response sections requested from the endpoint: translation, alternates,
/// dictionary, examples, detection, spelling and transliteration
const DATA_TYPES: &[&str] = &["at", "bd", "ex", "ld", "md", "qca", "rw", "rm", "ss", "t"];

#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
    interface_lang: String,
}

impl GoogleTranslator {
    pub fn new(config: &TranslatorConfig) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            interface_lang: config.interface_lang.clone(),
        })
    }

    fn query_params<'a>(
        &'a self,
        text: &'a str,
        from: &'a str,
        to: &'a str,
    ) -> Vec<(&'a str, &'a str)> {
        let mut params = vec![
            ("client", "gtx"),
            ("sl", from),
            ("tl", to),
            ("hl", self.interface_lang.as_str()),
        ];
        params.extend(DATA_TYPES.iter().map(|dt| ("dt", *dt)));
        params.extend([
            ("ie", "UTF-8"),
            ("oe", "UTF-8"),
            ("otf", "1"),
            ("ssel", "0"),
            ("tsel", "0"),
            ("kc", "7"),
            ("q", text),
        ]);
        params
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<TranslationResponse, TranslateError> {
        tracing::debug!("translating {} chars {from} -> {to}", text.chars().count());

        let response = self
            .client
            .get(&self.api_url)
            .query(&self.query_params(text, &from, &to))
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        tracing::trace!("raw body: {body}");

        decode_body(&body)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    fn translator(api_url: &str) -> GoogleTranslator {
        let config = TranslatorConfig {
            api_url: api_url.to_string(),
            timeout_seconds: 2,
            ..Default::default()
        };
        GoogleTranslator::new(&config).unwrap()
    }

    #[test]
    fn test_query_params() {
        let translator = translator("http://localhost/single");
        let params = translator.query_params("hello", "en", "es");

        assert_eq!(params[0], ("client", "gtx"));
        assert!(params.contains(&("sl", "en")));
        assert!(params.contains(&("tl", "es")));
        assert!(params.contains(&("hl", "en")));
        assert_eq!(params.iter().filter(|(k, _)| *k == "dt").count(), DATA_TYPES.len());
        assert_eq!(params.last(), Some(&("q", "hello")));
    }

    #[test]
    fn test_metadata() {
        let metadata = translator("http://localhost/single").metadata();
        assert_eq!(metadata.name, "Google Translate");
        assert!(!metadata.requires_api_key);
    }

    /// Local backend answering one request with a canned status and body
    async fn backend_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;

            let response = format!(
                "{status_line}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/translate_a/single")
    }

    #[tokio::test]
    async fn test_too_many_requests_is_rate_limit() {
        let url = backend_once("HTTP/1.1 429 Too Many Requests", "").await;
        let result = translator(&url)
            .translate("hello", "en".to_string(), "es".to_string())
            .await;

        assert!(matches!(result, Err(TranslateError::RateLimitExceeded)));
    }

    #[tokio::test]
    async fn test_server_error_is_api_error() {
        let url = backend_once("HTTP/1.1 503 Service Unavailable", "").await;
        let result = translator(&url)
            .translate("hello", "en".to_string(), "es".to_string())
            .await;

        match result {
            Err(TranslateError::ApiError(msg)) => assert!(msg.contains("503"), "{msg}"),
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_body_is_decoded() {
        let url = backend_once("HTTP/1.1 200 OK", r#"[[["hola","hello",,,1]],,"en"]"#).await;
        let response = translator(&url)
            .translate("hello", "en".to_string(), "es".to_string())
            .await
            .unwrap();

        assert_eq!(response.primary_text, "hola");
        assert_eq!(response.detected_source_language.as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Nothing listens on the discard port
        let translator = translator("http://127.0.0.1:9/translate_a/single");
        let result = translator
            .translate("hello", "en".to_string(), "es".to_string())
            .await;

        assert!(matches!(result, Err(TranslateError::NetworkError(_))));
    }
}
