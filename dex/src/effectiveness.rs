//! Defensive matchup aggregation
//!
//! Combines the defensive rows of one or two types into a single ranked
//! multiplier map, partitions it into weakness/resistance/immunity buckets,
//! and renders the buckets as a text block.

use crate::types::{Type, TypeChart};

/// Aggregate defensive multipliers for a set of defending types.
///
/// For every attacking type the result holds the product of that attacker's
/// effectiveness against each defending type. Entries are sorted by
/// descending multiplier; exact ties are broken by ascending type name so
/// the order is fully deterministic.
pub fn combined_multipliers(chart: &TypeChart, defenders: &[Type]) -> Vec<(Type, f32)> {
    let mut entries: Vec<(Type, f32)> = Type::all()
        .iter()
        .map(|&attacker| (attacker, chart.effectiveness_multi(attacker, defenders)))
        .collect();
    entries.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| a.0.as_str().cmp(b.0.as_str()))
    });
    entries
}

/// Defensive matchups bucketed by multiplier.
///
/// Each bucket preserves the ranked order of [`combined_multipliers`].
/// Neutral entries (multiplier exactly 1) are not reported in any bucket.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matchups {
    /// Multiplier > 1
    pub weak: Vec<(Type, f32)>,
    /// 0 < multiplier < 1
    pub resistant: Vec<(Type, f32)>,
    /// Multiplier == 0
    pub immune: Vec<(Type, f32)>,
}

/// Compute the bucketed defensive matchups for one or two defending types
pub fn matchups(chart: &TypeChart, defenders: &[Type]) -> Matchups {
    let mut result = Matchups::default();
    for (attacker, multiplier) in combined_multipliers(chart, defenders) {
        if multiplier == 0.0 {
            result.immune.push((attacker, multiplier));
        } else if multiplier < 1.0 {
            result.resistant.push((attacker, multiplier));
        } else if multiplier > 1.0 {
            result.weak.push((attacker, multiplier));
        }
    }
    result
}

/// Formatting policy for the rendered matchup block.
///
/// The `Resistant to:` and `Immune to:` lines are always dropped when their
/// bucket is empty. Historically the `Weak against:` line was emitted even
/// with an empty bucket; `omit_empty_weak_label` switches that line to the
/// same drop-when-empty rule.
#[derive(Debug, Clone, Default)]
pub struct MatchupFormat {
    pub omit_empty_weak_label: bool,
}

/// Render bucketed matchups as a multi-line text block.
///
/// Weak and resistant entries carry a ` ({m}x)` annotation; immune entries
/// are listed by name only. Empty buckets are omitted per the format policy.
pub fn format_matchups(matchups: &Matchups, format: &MatchupFormat) -> String {
    let mut lines = Vec::with_capacity(3);
    if !(format.omit_empty_weak_label && matchups.weak.is_empty()) {
        lines.push(format!("Weak against: {}", annotated_list(&matchups.weak)));
    }
    if !matchups.resistant.is_empty() {
        lines.push(format!("Resistant to: {}", annotated_list(&matchups.resistant)));
    }
    if !matchups.immune.is_empty() {
        let names: Vec<&str> = matchups.immune.iter().map(|(t, _)| t.as_str()).collect();
        lines.push(format!("Immune to: {}", names.join(", ")));
    }
    lines.join("\n")
}

/// Compute and render the matchup block for one or two defending types
pub fn weakness_block(chart: &TypeChart, defenders: &[Type], format: &MatchupFormat) -> String {
    format_matchups(&matchups(chart, defenders), format)
}

fn annotated_list(entries: &[(Type, f32)]) -> String {
    let parts: Vec<String> = entries
        .iter()
        .map(|(t, m)| format!("{} ({}x)", t.as_str(), format_multiplier(*m)))
        .collect();
    parts.join(", ")
}

/// Format a multiplier without a trailing `.0` (2, 4, 0.5, 0.25)
fn format_multiplier(multiplier: f32) -> String {
    if multiplier.fract() == 0.0 {
        format!("{}", multiplier as u32)
    } else {
        format!("{multiplier}")
    }
}
