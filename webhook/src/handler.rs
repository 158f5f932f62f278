//! Webhook update handling
//!
//! Routes a parsed update to the dex and builds the reply envelope. All
//! errors on this path are serialization failures; a missed lookup is a
//! normal reply (direct message) or no reply at all (inline query).

use anyhow::Result;
use tracing::debug;

use rotom_dex::Dex;

use crate::reply::{InlineQueryReply, InlineResult, MessageReply, Reply};
use crate::update::Update;

/// Inline queries are answered with at most this many results
pub const MAX_INLINE_RESULTS: usize = 50;

/// Handle one webhook update.
///
/// Returns `Ok(None)` when nothing should be sent back: an update that is
/// neither a text message nor an inline query, or an inline query with no
/// matches (Telegram treats an empty 200 as "no results").
pub fn handle_update(dex: &Dex, update: &Update) -> Result<Option<Reply>> {
    debug!(?update, "inbound update");

    if let Some(message) = &update.message {
        let Some(text) = &message.text else {
            return Ok(None);
        };
        let query = first_token(text);
        let reply = match dex.find(query) {
            Some(record) => MessageReply::record(message.chat.id, dex.render(record)),
            None => MessageReply::not_found(message.chat.id),
        };
        return Ok(Some(Reply::Message(reply)));
    }

    if let Some(inline_query) = &update.inline_query {
        let query = first_token(&inline_query.query);
        let results: Vec<InlineResult> = dex
            .search(query, MAX_INLINE_RESULTS)
            .into_iter()
            .map(|record| InlineResult::article(dex, record))
            .collect();

        if results.is_empty() {
            debug!(query, "no inline matches");
            return Ok(None);
        }

        let reply = InlineQueryReply::new(inline_query.id.clone(), &results)?;
        return Ok(Some(Reply::InlineQuery(reply)));
    }

    Ok(None)
}

/// The query is the first whitespace-delimited token of the input
fn first_token(text: &str) -> &str {
    text.split(' ').next().unwrap_or("")
}
