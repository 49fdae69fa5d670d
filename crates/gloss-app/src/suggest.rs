use std::io::Write;

use anyhow::Context;
use gloss_core::preprocess::{Preprocessor, QueryPreprocessor};
use gloss_core::{normalize, parse_payload};
use gloss_types::ScriptFilter;

use crate::cli::Invocation;
use crate::state::AppState;

/// Query the backend and build the item list. Nothing is written here.
pub async fn suggest(state: &AppState, invocation: &Invocation) -> anyhow::Result<ScriptFilter> {
    let query = QueryPreprocessor.process(&invocation.query);
    if query.is_empty() {
        tracing::debug!("empty query, skipping backend call");
        return Ok(ScriptFilter::default());
    }

    let provider = state.translator.metadata().name;
    tracing::info!(
        "translating via {provider}: {} -> {}",
        invocation.source,
        invocation.target
    );

    let response = state
        .translator
        .translate(&query, invocation.source.clone(), invocation.target.clone())
        .await
        .with_context(|| format!("{provider} request failed"))?;

    if let Some(pronunciation) = &response.pronunciation {
        tracing::debug!("pronunciation: {pronunciation}");
    }
    if response.source_language_suggested {
        tracing::debug!(
            "backend suggests source language {:?} instead of {}",
            response.detected_source_language,
            invocation.source
        );
    }

    let payload = parse_payload(&response.raw_secondary_payload)
        .context("failed to parse translation payload")?;

    let items = normalize(
        &response,
        &invocation.source,
        &invocation.target,
        &payload,
        &state.languages,
    )
    .context("unusable translation response")?;

    tracing::debug!("{} items", items.len());
    Ok(ScriptFilter::from(items))
}

/// Run one invocation and write the JSON document to `out`.
///
/// The document is fully serialized before the first byte is written, so a
/// failure never leaves partial JSON behind.
pub async fn run(
    state: &AppState,
    invocation: &Invocation,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let filter = suggest(state, invocation).await?;
    let json = serde_json::to_string(&filter).context("failed to serialize items")?;

    out.write_all(json.as_bytes()).context("failed to write items")?;
    out.flush()?;

    Ok(())
}
