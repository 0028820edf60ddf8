//! Parsed route representation.
//!
//! # Responsibilities
//! - Represent one expansion of a route template as an ordered piece list
//! - Group the expansions of one route into a route entry
//! - Answer which placeholder names a branch needs
//!
//! # Design Decisions
//! - Pieces are an explicit enum, dispatched by `match`
//! - Entries are never empty; ordering (shortest first) is the producer's job

use std::collections::BTreeSet;

use serde::Serialize;

use crate::generator::Values;
use crate::routing::table::TableError;

/// Pattern used for placeholders that do not declare one.
pub const DEFAULT_PLACEHOLDER_PATTERN: &str = "[^/]+";

/// A single fragment of a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Piece {
    /// Text emitted verbatim.
    Literal(String),
    /// A named variable position constrained by `pattern`.
    Placeholder { name: String, pattern: String },
}

impl Piece {
    pub fn literal(text: impl Into<String>) -> Self {
        Piece::Literal(text.into())
    }

    pub fn placeholder(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Piece::Placeholder {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// Placeholder name, if this piece is a placeholder.
    pub fn placeholder_name(&self) -> Option<&str> {
        match self {
            Piece::Placeholder { name, .. } => Some(name),
            Piece::Literal(_) => None,
        }
    }
}

/// One fully resolved expansion of a route template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Branch {
    pieces: Vec<Piece>,
}

impl Branch {
    pub fn new(pieces: Vec<Piece>) -> Self {
        Self { pieces }
    }

    /// Pieces in emission order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Placeholder names in emission order, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.pieces.iter().filter_map(Piece::placeholder_name)
    }

    /// The set of placeholder names this branch needs.
    pub fn required(&self) -> BTreeSet<&str> {
        self.placeholders().collect()
    }

    /// Number of distinct placeholders.
    pub fn specificity(&self) -> usize {
        self.required().len()
    }

    /// True when every required placeholder has a value.
    /// Surplus values are ignored.
    pub fn is_satisfied_by(&self, values: &Values) -> bool {
        self.placeholders().all(|name| values.contains(name))
    }
}

impl From<Vec<Piece>> for Branch {
    fn from(pieces: Vec<Piece>) -> Self {
        Self::new(pieces)
    }
}

/// All branches of one route, ordered from fewest to most placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteEntry {
    branches: Vec<Branch>,
}

impl RouteEntry {
    /// Wrap a producer-ordered branch list. Rejects an empty list.
    pub fn new(branches: Vec<Branch>) -> Result<Self, TableError> {
        if branches.is_empty() {
            return Err(TableError::EmptyEntry);
        }
        Ok(Self { branches })
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Branches from most to least specific.
    pub fn most_specific_first(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}
