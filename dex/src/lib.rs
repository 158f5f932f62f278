//! Pokedex records and type effectiveness engine.
//!
//! This crate holds everything the webhook layer needs to answer a query:
//! the type system with its effectiveness chart, the defensive matchup
//! aggregator, the embedded record set with id/slug matching, and the text
//! renderer.
//!
//! # Overview
//!
//! ```text
//! rotom-webhook (update parsing + reply envelopes)
//!        │
//!        ▼
//! rotom-dex (records + effectiveness engine) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! - [`Type`] / [`TypeChart`] - Pokemon types with the validated
//!   effectiveness chart
//! - [`Matchups`] - bucketed defensive multipliers (weak/resistant/immune)
//! - [`Record`] - one Pokedex entry
//! - [`Dex`] - immutable handle over the chart and the record sequence
//!
//! # Example Usage
//!
//! ```no_run
//! use rotom_dex::Dex;
//!
//! let dex = Dex::builtin()?;
//! if let Some(record) = dex.find("turtwig") {
//!     println!("{}", dex.render(record));
//! }
//! # Ok::<(), rotom_dex::DexError>(())
//! ```

use thiserror::Error;

pub mod effectiveness;
pub mod pokedex;
pub mod render;
pub mod types;

// Re-export main types at crate root for convenience
pub use effectiveness::{
    MatchupFormat, Matchups, combined_multipliers, format_matchups, matchups, weakness_block,
};
pub use pokedex::{Dex, Record};
pub use render::type_line;
pub use types::{Type, TypeChart};

/// Dataset validation errors. All of these are fatal at load time; none can
/// occur on the per-request path.
#[derive(Error, Debug)]
pub enum DexError {
    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record '{slug}' references unknown type '{type_name}'")]
    UnknownType { slug: String, type_name: String },

    #[error("Record '{slug}' has no image URLs")]
    NoImages { slug: String },

    #[error("Chart multiplier {value} for {attacker} vs {defender} is outside {{0, 0.5, 1, 2}}")]
    BadMultiplier {
        attacker: types::Type,
        defender: types::Type,
        value: f32,
    },
}
