//! Placeholder value validation.
//!
//! # Responsibilities
//! - Compile every placeholder pattern of a route table once
//! - Check a rendered value against its placeholder pattern
//!
//! # Design Decisions
//! - Patterns are anchored: the whole value must match
//! - One compiled regex per distinct pattern text
//! - Built at generator construction, read-only afterwards
//! - Patterns use `regex` crate syntax; look-around and backreferences
//!   are rejected at construction

use std::collections::HashMap;

use regex::Regex;

use crate::generator::types::{GenerateError, GenerateResult};
use crate::routing::branch::Piece;
use crate::routing::table::RouteTable;

/// Compiled placeholder patterns for one route table.
#[derive(Debug, Clone, Default)]
pub struct PatternValidator {
    compiled: HashMap<String, Regex>,
}

impl PatternValidator {
    /// Compile all placeholder patterns found in `table`.
    pub fn for_table(table: &RouteTable) -> GenerateResult<Self> {
        let mut compiled = HashMap::new();
        for (_, entry) in table.iter() {
            for branch in entry.branches() {
                for piece in branch.pieces() {
                    if let Piece::Placeholder { pattern, .. } = piece {
                        if !compiled.contains_key(pattern) {
                            compiled.insert(pattern.clone(), compile(pattern)?);
                        }
                    }
                }
            }
        }
        tracing::debug!(patterns = compiled.len(), "Compiled placeholder patterns");
        Ok(Self { compiled })
    }

    /// Check `value` for placeholder `placeholder` of `route`.
    pub fn check(&self, route: &str, placeholder: &str, pattern: &str, value: &str) -> GenerateResult<()> {
        let matched = match self.compiled.get(pattern) {
            Some(regex) => regex.is_match(value),
            None => compile(pattern)?.is_match(value),
        };

        if matched {
            Ok(())
        } else {
            Err(GenerateError::ValidationFailure {
                route: route.to_string(),
                placeholder: placeholder.to_string(),
                value: value.to_string(),
                pattern: pattern.to_string(),
            })
        }
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

fn compile(pattern: &str) -> GenerateResult<Regex> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| GenerateError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
