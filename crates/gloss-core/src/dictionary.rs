use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::NormalizeError;

/// Slot of the backend payload holding the dictionary section
const DICTIONARY_SLOT: usize = 1;

/// Alternative translation of a single word, grouped by part of speech
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub part_of_speech: String,
    pub word: String,
    pub alternative_translations: Vec<String>,
    /// Backend relevance score, kept but not used for ordering
    pub frequency_score: Option<f64>,
}

impl DictionaryEntry {
    /// `(noun) gato, felino`
    pub fn subtitle(&self) -> String {
        format!(
            "({}) {}",
            self.part_of_speech,
            self.alternative_translations.join(", ")
        )
    }
}

/// Read every dictionary entry of a repaired payload, in payload order.
///
/// The section only exists for word lookups, so a missing or `null` slot gives
/// an empty list. Any other shape is reported as [`NormalizeError::PartialData`].
///
/// Group layout: `[pos, [terms..], [[word, [translations..], _, score], ..], ..]`
pub fn extract_entries(payload: &Value) -> Result<Vec<DictionaryEntry>, NormalizeError> {
    let groups = match payload.get(DICTIONARY_SLOT) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(groups)) => groups,
        Some(other) => {
            return Err(partial(format!(
                "dictionary section is not an array: {other}"
            )));
        }
    };

    let mut entries = Vec::new();
    for (index, group) in groups.iter().enumerate() {
        let part_of_speech = group
            .get(0)
            .and_then(Value::as_str)
            .ok_or_else(|| partial(format!("group {index} has no part of speech")))?;

        let words = group
            .get(2)
            .and_then(Value::as_array)
            .ok_or_else(|| partial(format!("group {index} ({part_of_speech}) has no entries")))?;

        for word_data in words {
            entries.push(read_entry(part_of_speech, word_data)?);
        }
    }

    Ok(entries)
}

fn read_entry(part_of_speech: &str, word_data: &Value) -> Result<DictionaryEntry, NormalizeError> {
    let word = word_data
        .get(0)
        .and_then(Value::as_str)
        .ok_or_else(|| partial(format!("{part_of_speech} entry without a word")))?;

    let alternative_translations = match word_data.get(1) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|t| {
                t.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| partial(format!("non-text translation for '{word}'")))
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(partial(format!("translations for '{word}' are not a list"))),
    };

    Ok(DictionaryEntry {
        part_of_speech: part_of_speech.to_string(),
        word: word.to_string(),
        alternative_translations,
        frequency_score: word_data.get(3).and_then(Value::as_f64),
    })
}

fn partial(reason: String) -> NormalizeError {
    NormalizeError::PartialData(reason)
}
