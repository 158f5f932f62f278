//! Record display block rendering
//!
//! Composes a record's fields with the matchup block into the Markdown text
//! sent back to the user. Pure string assembly; rendering the same record
//! twice yields byte-identical output.

use crate::effectiveness::{MatchupFormat, weakness_block};
use crate::pokedex::{Dex, Record};
use crate::types::Type;

impl Dex {
    /// Render a record's full display block with the default matchup format
    pub fn render(&self, record: &Record) -> String {
        self.render_with(record, &MatchupFormat::default())
    }

    /// Render a record's full display block with an explicit matchup format
    pub fn render_with(&self, record: &Record, format: &MatchupFormat) -> String {
        format!(
            "*{name} (#{number})*\n\
             Type: {types}\n\
             {weaknesses}\n\
             Abilities: {abilities}\n\
             Height: {height}\n\
             Weight: {weight} lbs\n\
             [Image]({image})",
            name = record.name,
            number = record.number,
            types = type_line(&record.types),
            weaknesses = weakness_block(self.chart(), &record.types, format),
            abilities = record.abilities.join(", "),
            height = format_height(record.height),
            weight = format_weight(record.weight),
            image = full_image_url(record.thumbnail()),
        )
    }
}

/// Join a record's types into one word ("Grass", "Fire/Dragon")
pub fn type_line(types: &[Type]) -> String {
    let names: Vec<&str> = types.iter().map(Type::as_str).collect();
    names.join("/")
}

/// Display height in feet and inches
fn format_height(inches: u32) -> String {
    format!("{}' {}\"", inches / 12, inches % 12)
}

/// Display weight without a trailing `.0`
fn format_weight(pounds: f64) -> String {
    if pounds.fract() == 0.0 {
        format!("{}", pounds as i64)
    } else {
        format!("{pounds}")
    }
}

/// Rewrite the thumbnail URL to its higher-resolution variant
fn full_image_url(thumbnail: &str) -> String {
    thumbnail.replacen("detail", "full", 1)
}
