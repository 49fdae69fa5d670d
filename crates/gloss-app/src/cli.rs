use clap::Parser;

/// Translate a launcher query and print script filter JSON.
///
/// Arguments are positional so launcher workflows can pass them unnamed.
#[derive(Debug, Clone, Parser)]
#[command(name = "gloss", version)]
pub struct Invocation {
    /// Source language code, `auto` to let the backend detect it.
    pub source: String,

    /// Target language code.
    pub target: String,

    /// Text to translate.
    pub query: String,

    /// Display name of the target language. Accepted for workflow
    /// compatibility, not used.
    pub target_display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_order() {
        let invocation =
            Invocation::try_parse_from(["gloss", "en", "es", "hello world", "Spanish"]).unwrap();

        assert_eq!(invocation.source, "en");
        assert_eq!(invocation.target, "es");
        assert_eq!(invocation.query, "hello world");
        assert_eq!(invocation.target_display_name.as_deref(), Some("Spanish"));
    }

    #[test]
    fn test_display_name_is_optional() {
        let invocation = Invocation::try_parse_from(["gloss", "auto", "ja", "cat"]).unwrap();
        assert_eq!(invocation.target_display_name, None);
    }

    #[test]
    fn test_query_is_required() {
        assert!(Invocation::try_parse_from(["gloss", "en", "es"]).is_err());
    }
}
