//! Outbound reply envelopes
//!
//! Replies are serialized straight into the webhook HTTP response, using
//! Telegram's "answer the webhook call" form: the API method name rides in
//! a `method` field next to its parameters.

use serde::Serialize;

use rotom_dex::{Dex, Record, type_line};

/// A reply to send back in the webhook response body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Message(MessageReply),
    InlineQuery(InlineQueryReply),
}

/// `sendMessage` parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageReply {
    pub method: &'static str,
    pub chat_id: i64,
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<&'static str>,
}

impl MessageReply {
    /// A rendered record block, sent as Markdown
    pub fn record(chat_id: i64, text: String) -> Self {
        Self {
            method: "sendMessage",
            chat_id,
            text,
            parse_mode: Some("Markdown"),
        }
    }

    /// A plain-text miss message
    pub fn not_found(chat_id: i64) -> Self {
        Self {
            method: "sendMessage",
            chat_id,
            text: "Couldn't find a matching Pokémon!".to_string(),
            parse_mode: None,
        }
    }
}

/// `answerInlineQuery` parameters. Telegram expects `results` as a
/// JSON-serialized string, not a nested array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineQueryReply {
    pub method: &'static str,
    pub inline_query_id: String,
    pub results: String,
}

impl InlineQueryReply {
    pub fn new(inline_query_id: String, results: &[InlineResult]) -> serde_json::Result<Self> {
        Ok(Self {
            method: "answerInlineQuery",
            inline_query_id,
            results: serde_json::to_string(results)?,
        })
    }
}

/// One inline query result article
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineResult {
    #[serde(rename = "type")]
    pub result_type: &'static str,
    pub id: u32,
    pub title: String,
    pub input_message_content: MessageContent,
    pub description: String,
    pub thumb_url: String,
}

impl InlineResult {
    /// Build an article for a matched record
    pub fn article(dex: &Dex, record: &Record) -> Self {
        Self {
            result_type: "article",
            id: record.id,
            title: format!("{} (#{})", record.name, record.number),
            input_message_content: MessageContent {
                message_text: dex.render(record),
                parse_mode: "Markdown",
            },
            description: type_line(&record.types),
            thumb_url: record.thumbnail().to_string(),
        }
    }
}

/// The message sent when an inline result is picked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageContent {
    pub message_text: String,
    pub parse_mode: &'static str,
}
