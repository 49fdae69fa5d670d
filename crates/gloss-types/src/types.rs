use serde::{Deserialize, Serialize};

/// One row in the launcher's result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub title: String,
    pub subtitle: String,
    /// Value passed on when the row is actioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    /// Text the launcher expands the query to on tab
    #[serde(
        rename = "autocomplete",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub autocomplete_text: Option<String>,
}

impl SuggestionItem {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            arg: None,
            autocomplete_text: None,
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self
    }

    pub fn with_autocomplete(mut self, text: impl Into<String>) -> Self {
        self.autocomplete_text = Some(text.into());
        self
    }
}

/// Script filter document printed to stdout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptFilter {
    pub items: Vec<SuggestionItem>,
}

impl From<Vec<SuggestionItem>> for ScriptFilter {
    fn from(items: Vec<SuggestionItem>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_omitted() {
        let filter = ScriptFilter::from(vec![SuggestionItem::new("hola", "(English -> Spanish)")]);
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(
            json,
            r#"{"items":[{"title":"hola","subtitle":"(English -> Spanish)"}]}"#
        );
    }

    #[test]
    fn test_field_names_match_launcher_format() {
        let item = SuggestionItem::new("hello", "Did you mean this? (English -> Spanish)")
            .with_autocomplete("hello");
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["autocomplete"], "hello");
        assert!(value.get("autocomplete_text").is_none());
        assert!(value.get("arg").is_none());
    }

    #[test]
    fn test_arg_follows_subtitle() {
        let item = SuggestionItem::new("hola", "(English -> Spanish)").with_arg("hola");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"title":"hola","subtitle":"(English -> Spanish)","arg":"hola"}"#
        );
    }
}
