use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The set of discovered but not yet processed vertices, keyed by `(distance, vertex)`
///
/// Pairs are ordered by distance first and vertex index second, so the minimum is
/// unique and extraction order is deterministic. A vertex has at most one pair in the
/// frontier; lowering its distance is done by removing the old pair and inserting the
/// new one.
pub trait Frontier<W> {
    /// Adds a pair. The vertex must not already have a pair in the frontier.
    fn insert(&mut self, distance: W, vertex: usize);

    /// Removes and returns the smallest pair, ties going to the smaller vertex index
    fn extract_min(&mut self) -> Option<(W, usize)>;

    /// Removes the exact pair `(distance, vertex)`, returning whether it was present
    fn remove(&mut self, distance: W, vertex: usize) -> bool;

    /// Returns the number of live pairs
    fn len(&self) -> usize;

    /// Returns true if the frontier holds no live pairs
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which frontier implementation a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierKind {
    /// Balanced ordered set of pairs; decrease-key is remove + reinsert
    #[default]
    Ordered,
    /// Binary heap with lazy deletion of superseded pairs
    Lazy,
}

impl FrontierKind {
    /// All available kinds, in declaration order
    pub const ALL: [FrontierKind; 2] = [FrontierKind::Ordered, FrontierKind::Lazy];

    pub fn as_str(&self) -> &'static str {
        match self {
            FrontierKind::Ordered => "ordered",
            FrontierKind::Lazy => "lazy",
        }
    }
}

impl fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing an unknown frontier name
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown frontier kind '{0}', expected 'ordered' or 'lazy'")]
pub struct ParseFrontierKindError(String);

impl FromStr for FrontierKind {
    type Err = ParseFrontierKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ordered" | "btree" => Ok(FrontierKind::Ordered),
            "lazy" | "heap" => Ok(FrontierKind::Lazy),
            other => Err(ParseFrontierKindError(other.to_string())),
        }
    }
}
