//! Telegram webhook adapter for the Rotom Pokedex bot.
//!
//! Parses inbound update payloads, queries [`rotom_dex`] for matching
//! records, and builds the reply envelope to send back in the webhook
//! response. Transport (HTTP server, TLS, Telegram auth) is out of scope;
//! the caller hands in a request body and writes out the serialized reply.
//!
//! # Example Usage
//!
//! ```no_run
//! use rotom_dex::Dex;
//! use rotom_webhook::{Update, handle_update};
//!
//! let dex = Dex::builtin()?;
//! let update = Update::parse(r#"{"message": {"chat": {"id": 1}, "text": "turtwig"}}"#)?;
//! if let Some(reply) = handle_update(&dex, &update)? {
//!     let body = serde_json::to_string(&reply)?;
//!     // write `body` as the webhook response
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod tests;

pub mod handler;
pub mod reply;
pub mod update;

pub use handler::{MAX_INLINE_RESULTS, handle_update};
pub use reply::{InlineQueryReply, InlineResult, MessageContent, MessageReply, Reply};
pub use update::{Chat, InlineQuery, Message, Update};
