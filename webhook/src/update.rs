//! Inbound Telegram update types
//!
//! Only the fields the bot acts on are modeled; everything else in the
//! update payload is ignored during deserialization.

use anyhow::Result;
use serde::Deserialize;

/// An incoming webhook update, either a direct message or an inline query
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub message: Option<Message>,

    #[serde(default)]
    pub inline_query: Option<InlineQuery>,
}

impl Update {
    /// Parse an update from the raw request body
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A direct text message to the bot
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub chat: Chat,

    /// Absent for non-text messages (stickers, photos, ...)
    #[serde(default)]
    pub text: Option<String>,
}

/// The chat a message was sent from
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// An inline query typed into another chat
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub query: String,
}
