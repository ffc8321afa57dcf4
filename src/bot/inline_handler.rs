//! Inline Handler module for answering inline queries with screenshots

use tracing::{debug, error, info};

use crate::caption::wrap_caption;
use crate::config::DispatcherConfig;
use crate::errors::BotError;
use crate::search::SearchClient;
use crate::telegram::ChatClient;

use super::ui_builder::build_photo_results;

/// An inline query split into its search term and optional caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineRequest<'a> {
    pub term: &'a str,
    pub caption: Option<&'a str>,
}

/// Split `homer / d'oh` into the term `homer` and the caption `d'oh`
///
/// Only the first slash separates; the caption keeps any later ones. A caption
/// that is blank after trimming counts as no caption.
pub fn parse_inline_query(query: &str) -> InlineRequest<'_> {
    match query.split_once('/') {
        Some((term, caption)) => {
            let caption = caption.trim();
            InlineRequest {
                term: term.trim(),
                caption: (!caption.is_empty()).then_some(caption),
            }
        }
        None => InlineRequest {
            term: query.trim(),
            caption: None,
        },
    }
}

/// Search frames for the query and answer it with photo results
///
/// A failed search is answered with an empty result list so the query does
/// not stay pending on the user's side.
pub async fn handle_inline_query(
    search: &dyn SearchClient,
    chat: &dyn ChatClient,
    config: &DispatcherConfig,
    query_id: &str,
    query: &str,
) -> Result<(), BotError> {
    if query.is_empty() {
        debug!(query_id = %query_id, "Ignoring empty inline query");
        return Ok(());
    }

    let request = parse_inline_query(query);
    debug!(
        query_id = %query_id,
        term = %request.term,
        has_caption = request.caption.is_some(),
        "Received inline query"
    );

    let frames = match search.search(request.term).await {
        Ok(frames) => frames,
        Err(e) => {
            error!(query_id = %query_id, term = %request.term, error = %e, "Frinkiac search failed");
            Vec::new()
        }
    };

    let caption = request
        .caption
        .map(|caption| wrap_caption(caption, config.caption_width));
    let results = build_photo_results(search, &frames, caption.as_deref(), config);

    info!(query_id = %query_id, results = results.len(), "Answering inline query");
    chat.answer_inline_query(query_id, results).await
}
