//! Pokedex records and lookup
//!
//! The record set is an ordered, immutable sequence loaded once at startup.
//! Lookups normalize the query, match against id or slug, and enumerate in
//! dataset order.

use serde::Deserialize;

use crate::DexError;
use crate::types::{Type, TypeChart};

/// Longest query fragment considered when matching, in characters
const MAX_QUERY_LEN: usize = 20;

/// A single Pokedex entry
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// National dex id. Unique in the shipped dataset, but multi-form rows
    /// in synthetic data may repeat it; consumers deduplicate.
    pub id: u32,
    /// Zero-padded national dex number as displayed ("006", "387")
    pub number: String,
    /// Display name
    pub name: String,
    /// Lowercase search key, may embed alternate forms
    pub slug: String,
    /// One or two elemental types
    pub types: Vec<Type>,
    /// Ability names
    pub abilities: Vec<String>,
    /// Height in inches
    pub height: u32,
    /// Weight in pounds
    pub weight: f64,
    /// Image URLs; the first is the thumbnail
    pub images: Vec<String>,
}

impl Record {
    /// The thumbnail image URL
    pub fn thumbnail(&self) -> &str {
        &self.images[0]
    }

    fn matches(&self, query: &str) -> bool {
        if query.parse::<u32>().is_ok_and(|id| id == self.id) {
            return true;
        }
        self.slug.contains(query)
    }
}

/// Raw dataset shape before type names are resolved
#[derive(Debug, Deserialize)]
struct RawRecord {
    id: u32,
    number: String,
    name: String,
    slug: String,
    types: Vec<String>,
    abilities: Vec<String>,
    height: u32,
    weight: f64,
    images: Vec<String>,
}

impl RawRecord {
    fn resolve(self) -> Result<Record, DexError> {
        let types = self
            .types
            .iter()
            .map(|name| {
                Type::from_name(name).ok_or_else(|| DexError::UnknownType {
                    slug: self.slug.clone(),
                    type_name: name.clone(),
                })
            })
            .collect::<Result<Vec<Type>, DexError>>()?;
        if self.images.is_empty() {
            return Err(DexError::NoImages { slug: self.slug });
        }
        Ok(Record {
            id: self.id,
            number: self.number,
            name: self.name,
            slug: self.slug,
            types,
            abilities: self.abilities,
            height: self.height,
            weight: self.weight,
            images: self.images,
        })
    }
}

/// Immutable handle over the type chart and the record sequence.
///
/// Constructed once at startup and shared read-only; every operation is
/// synchronous and allocation is bounded by the dataset size.
#[derive(Debug, Clone)]
pub struct Dex {
    chart: TypeChart,
    records: Vec<Record>,
}

impl Dex {
    /// Build a dex from an already-validated chart and record set
    pub fn new(chart: TypeChart, records: Vec<Record>) -> Self {
        Self { chart, records }
    }

    /// Load the embedded dataset with the built-in chart.
    ///
    /// Fails if the dataset references an unknown type or is otherwise
    /// inconsistent; the engine must not serve from bad data.
    pub fn builtin() -> Result<Self, DexError> {
        Self::from_json(TypeChart::default(), include_str!("../data/pokedex.json"))
    }

    /// Parse and validate a JSON record array against a chart
    pub fn from_json(chart: TypeChart, json: &str) -> Result<Self, DexError> {
        let raw: Vec<RawRecord> = serde_json::from_str(json)?;
        let records = raw
            .into_iter()
            .map(RawRecord::resolve)
            .collect::<Result<Vec<Record>, DexError>>()?;
        Ok(Self::new(chart, records))
    }

    /// The effectiveness chart this dex was validated against
    pub fn chart(&self) -> &TypeChart {
        &self.chart
    }

    /// All records in dataset order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Find the first record matching the query
    pub fn find(&self, query: &str) -> Option<&Record> {
        self.find_all(query).next()
    }

    /// Lazily enumerate every record matching the query, in dataset order.
    ///
    /// The iterator short-circuits: a caller that stops early never visits
    /// the remaining records. Call again for a fresh enumeration.
    pub fn find_all<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Record> + use<'a> {
        let query = bound_query(query);
        self.records.iter().filter(move |r| r.matches(&query))
    }

    /// Collect up to `limit` distinct matches, deduplicated by id
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Record> {
        let mut seen = std::collections::HashSet::new();
        self.find_all(query)
            .filter(move |r| seen.insert(r.id))
            .take(limit)
            .collect()
    }
}

/// Normalize a query: cap the length, lowercase
fn bound_query(query: &str) -> String {
    query.chars().take(MAX_QUERY_LEN).collect::<String>().to_lowercase()
}
