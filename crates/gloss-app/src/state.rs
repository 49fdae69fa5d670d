use gloss_config::Config;
use gloss_core::LanguageTable;
use gloss_provider_google::GoogleTranslator;
use gloss_translator::Translator;

/// Everything one invocation needs, built once in `main`
pub struct AppState {
    pub translator: Box<dyn Translator>,
    pub languages: LanguageTable,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let translator = GoogleTranslator::new(&config.translator)?;
        tracing::debug!("using backend {}", config.translator.api_url);

        Ok(Self::with_translator(Box::new(translator)))
    }

    pub fn with_translator(translator: Box<dyn Translator>) -> Self {
        Self {
            translator,
            languages: LanguageTable::builtin(),
        }
    }
}
