use std::collections::HashMap;
use std::fmt;

use gloss_translator::TranslationResponse;

/// Languages understood by the translation backend
const BUILTIN_LANGUAGES: &[(&str, &str)] = &[
    ("auto", "Automatic"),
    ("af", "Afrikaans"),
    ("sq", "Albanian"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("hy", "Armenian"),
    ("az", "Azerbaijani"),
    ("eu", "Basque"),
    ("be", "Belarusian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("bg", "Bulgarian"),
    ("ca", "Catalan"),
    ("ceb", "Cebuano"),
    ("ny", "Chichewa"),
    ("zh-cn", "Chinese Simplified"),
    ("zh-tw", "Chinese Traditional"),
    ("co", "Corsican"),
    ("hr", "Croatian"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("nl", "Dutch"),
    ("en", "English"),
    ("eo", "Esperanto"),
    ("et", "Estonian"),
    ("tl", "Filipino"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("fy", "Frisian"),
    ("gl", "Galician"),
    ("ka", "Georgian"),
    ("de", "German"),
    ("el", "Greek"),
    ("gu", "Gujarati"),
    ("ht", "Haitian Creole"),
    ("ha", "Hausa"),
    ("haw", "Hawaiian"),
    ("iw", "Hebrew"),
    ("hi", "Hindi"),
    ("hmn", "Hmong"),
    ("hu", "Hungarian"),
    ("is", "Icelandic"),
    ("ig", "Igbo"),
    ("id", "Indonesian"),
    ("ga", "Irish"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("jw", "Javanese"),
    ("kn", "Kannada"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("ko", "Korean"),
    ("ku", "Kurdish (Kurmanji)"),
    ("ky", "Kyrgyz"),
    ("lo", "Lao"),
    ("la", "Latin"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("lb", "Luxembourgish"),
    ("mk", "Macedonian"),
    ("mg", "Malagasy"),
    ("ms", "Malay"),
    ("ml", "Malayalam"),
    ("mt", "Maltese"),
    ("mi", "Maori"),
    ("mr", "Marathi"),
    ("mn", "Mongolian"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("no", "Norwegian"),
    ("ps", "Pashto"),
    ("fa", "Persian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("pa", "Punjabi"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sm", "Samoan"),
    ("gd", "Scots Gaelic"),
    ("sr", "Serbian"),
    ("st", "Sesotho"),
    ("sn", "Shona"),
    ("sd", "Sindhi"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("so", "Somali"),
    ("es", "Spanish"),
    ("su", "Sundanese"),
    ("sw", "Swahili"),
    ("sv", "Swedish"),
    ("tg", "Tajik"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("cy", "Welsh"),
    ("xh", "Xhosa"),
    ("yi", "Yiddish"),
    ("yo", "Yoruba"),
    ("zu", "Zulu"),
];

/// Language code to display name lookup. Codes are matched case-insensitively.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    names: HashMap<String, String>,
}

impl LanguageTable {
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_LANGUAGES.iter().copied())
    }

    pub fn from_pairs<I, C, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: Into<String>,
    {
        let names = pairs
            .into_iter()
            .map(|(code, name)| (code.as_ref().to_lowercase(), name.into()))
            .collect();
        Self { names }
    }

    /// Unknown codes give `None`, never an error
    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.names.get(&code.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// One side of a [`LanguagePair`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub display_name: Option<String>,
}

impl Language {
    fn lookup(code: &str, table: &LanguageTable) -> Self {
        let display_name = table.display_name(code).map(str::to_string);
        if display_name.is_none() {
            tracing::debug!("no display name for language code '{code}'");
        }

        Self {
            code: code.to_string(),
            display_name,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name.as_deref().unwrap_or(&self.code))
    }
}

/// Source and target language shown next to translation items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl LanguagePair {
    /// Prefer what the backend detected, fall back to what was requested
    pub fn resolve(
        response: &TranslationResponse,
        requested_from: &str,
        requested_to: &str,
        table: &LanguageTable,
    ) -> Self {
        let source = response
            .detected_source_language
            .as_deref()
            .filter(|code| !code.is_empty())
            .unwrap_or(requested_from);
        let target = response
            .resolved_target_language
            .as_deref()
            .filter(|code| !code.is_empty())
            .unwrap_or(requested_to);

        Self {
            source: Language::lookup(source, table),
            target: Language::lookup(target, table),
        }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let table = LanguageTable::builtin();
        assert!(!table.is_empty());
        assert_eq!(table.len(), BUILTIN_LANGUAGES.len());
        assert_eq!(table.display_name("en"), Some("English"));
        assert_eq!(table.display_name("es"), Some("Spanish"));
        assert_eq!(table.display_name("zh-CN"), Some("Chinese Simplified"));
        assert_eq!(table.display_name("xx"), None);
    }

    #[test]
    fn test_detected_languages_win() {
        let table = LanguageTable::builtin();
        let response = TranslationResponse {
            detected_source_language: Some("fr".to_string()),
            resolved_target_language: Some("de".to_string()),
            ..Default::default()
        };

        let pair = LanguagePair::resolve(&response, "auto", "es", &table);
        assert_eq!(pair.to_string(), "(French -> German)");
    }

    #[test]
    fn test_falls_back_to_requested_languages() {
        let table = LanguageTable::builtin();
        let response = TranslationResponse::default();

        let pair = LanguagePair::resolve(&response, "en", "es", &table);
        assert_eq!(pair.source.code, "en");
        assert_eq!(pair.to_string(), "(English -> Spanish)");
    }

    #[test]
    fn test_unknown_code_has_no_display_name() {
        let table = LanguageTable::from_pairs([("en", "English")]);
        let pair = LanguagePair::resolve(&TranslationResponse::default(), "en", "tlh", &table);

        assert_eq!(pair.target.display_name, None);
        assert_eq!(pair.to_string(), "(English -> tlh)");
    }
}
