use std::sync::LazyLock;

use gloss_translator::{SourceCorrection, TranslationResponse};
use gloss_types::SuggestionItem;
use regex::Regex;
use serde_json::Value;

use crate::dictionary;
use crate::error::NormalizeError;
use crate::language::{LanguagePair, LanguageTable};

const DID_YOU_MEAN: &str = "Did you mean this? ";

/// Placeholder the backend leaves at the end of the text when a segment was empty
const NULL_ARTIFACT: &str = "null";

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]+>").expect("markup pattern is valid"));

/// Turn one backend response into launcher items.
///
/// Order: correction, primary translation, then dictionary entries as they
/// appear in `payload`. `payload` is the repaired secondary payload; it must be
/// an array or the whole response is rejected. A malformed dictionary section
/// is logged and skipped.
pub fn normalize(
    response: &TranslationResponse,
    requested_from: &str,
    requested_to: &str,
    payload: &Value,
    languages: &LanguageTable,
) -> Result<Vec<SuggestionItem>, NormalizeError> {
    if !payload.is_array() {
        return Err(NormalizeError::InvalidResponse(format!(
            "expected a top-level array, got {}",
            value_kind(payload)
        )));
    }

    let language_pair =
        LanguagePair::resolve(response, requested_from, requested_to, languages).to_string();

    let mut items = Vec::new();

    if let Some(corrected) = response
        .source_correction
        .as_ref()
        .and_then(correction_text)
    {
        items.push(
            SuggestionItem::new(corrected.clone(), format!("{DID_YOU_MEAN}{language_pair}"))
                .with_autocomplete(corrected),
        );
    }

    if !response.primary_text.is_empty() {
        let text = strip_null_artifact(&response.primary_text);
        items.push(SuggestionItem::new(text, language_pair.as_str()).with_arg(text));
    }

    match dictionary::extract_entries(payload) {
        Ok(entries) => {
            tracing::debug!("{} dictionary entries", entries.len());
            items.extend(entries.into_iter().map(|entry| {
                SuggestionItem::new(entry.word.clone(), entry.subtitle()).with_arg(entry.word)
            }));
        }
        Err(e) => tracing::warn!("skipping dictionary section: {e}"),
    }

    Ok(items)
}

/// Corrected input with markup and hint brackets removed, if the correction applies
fn correction_text(correction: &SourceCorrection) -> Option<String> {
    if !correction.is_active() {
        return None;
    }

    let text = MARKUP_TAG
        .replace_all(&correction.corrected_text, "")
        .replacen('[', "", 1)
        .replacen(']', "", 1);

    if text.is_empty() {
        tracing::debug!("correction flagged but empty after cleanup");
        return None;
    }

    Some(text)
}

fn strip_null_artifact(text: &str) -> &str {
    text.strip_suffix(NULL_ARTIFACT).unwrap_or(text)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
