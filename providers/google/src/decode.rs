//! Decoding of the `translate_a/single` response body.
//!
//! Slots read from the top-level array:
//! - `[0]` sentence rows `[translated, original, ..]`, plus an optional
//!   transliteration row `[null, null, translit, ..]`
//! - `[2]` detected source language
//! - `[7]` spelling correction `[marked_up_text, plain_text, .., .., .., auto_corrected]`
//! - `[8]` language detection details, `[8][0][0]` is the backend's best guess

use gloss_translator::{SourceCorrection, TranslateError, TranslationResponse};
use serde_json::Value;

pub fn decode_body(body: &str) -> Result<TranslationResponse, TranslateError> {
    let value =
        gloss_core::parse_payload(body).map_err(|e| TranslateError::Payload(e.to_string()))?;

    let slots = value
        .as_array()
        .ok_or_else(|| TranslateError::InvalidResponse("body is not an array".to_string()))?;

    let sentences = slots
        .first()
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::InvalidResponse("no sentence list".to_string()))?;

    let mut primary_text = String::new();
    let mut pronunciation = String::new();
    for row in sentences {
        match row.get(0).and_then(Value::as_str) {
            Some(segment) => primary_text.push_str(segment),
            None => {
                if let Some(translit) = row.get(2).and_then(Value::as_str) {
                    pronunciation.push_str(translit);
                }
            }
        }
    }

    let detected = slots.get(2).and_then(Value::as_str);
    let best_guess = slots
        .get(8)
        .and_then(|v| v.get(0))
        .and_then(|v| v.get(0))
        .and_then(Value::as_str);

    let (detected_source_language, source_language_suggested) = match (detected, best_guess) {
        (Some(detected), Some(guess)) if detected != guess => {
            tracing::debug!("backend suggests source language {guess} over {detected}");
            (Some(guess.to_string()), true)
        }
        (Some(detected), _) => (Some(detected.to_string()), false),
        (None, guess) => (guess.map(str::to_string), false),
    };

    Ok(TranslationResponse {
        primary_text,
        detected_source_language,
        // Not echoed by this endpoint; callers fall back to the requested target
        resolved_target_language: None,
        source_correction: decode_correction(slots.get(7)),
        source_language_suggested,
        pronunciation: (!pronunciation.is_empty()).then_some(pronunciation),
        raw_secondary_payload: body.to_string(),
    })
}

fn decode_correction(slot: Option<&Value>) -> Option<SourceCorrection> {
    let marked_up = slot?.get(0)?.as_str()?;

    let corrected_text = marked_up
        .replace("<b><i>", "[")
        .replace("</i></b>", "]");
    let was_auto_corrected = slot
        .and_then(|s| s.get(5))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Some(SourceCorrection {
        corrected_text,
        was_auto_corrected,
        was_suggested: !was_auto_corrected,
    })
}
