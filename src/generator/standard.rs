//! Longest-branch URL generator.

use std::sync::Arc;

use crate::generator::types::{GenerateError, GenerateResult, Values};
use crate::generator::validation::PatternValidator;
use crate::generator::RouteGenerator;
use crate::routing::branch::{Branch, Piece};
use crate::routing::table::RouteTable;

/// Generates URLs from a frozen route table.
///
/// Picks the branch with the most placeholders that the supplied values
/// can fill, scanning from the most specific branch down. Selection is
/// greedy: the first eligible branch wins.
#[derive(Debug, Clone)]
pub struct StdGenerator {
    table: Arc<RouteTable>,
    validator: Option<PatternValidator>,
}

impl StdGenerator {
    /// Create a generator that does not validate values.
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self {
            table,
            validator: None,
        }
    }

    /// Create a generator, optionally checking each value against its
    /// placeholder pattern. Fails if a pattern does not compile.
    pub fn with_validation(table: Arc<RouteTable>, should_validate: bool) -> GenerateResult<Self> {
        let validator = if should_validate {
            Some(PatternValidator::for_table(&table)?)
        } else {
            None
        };
        Ok(Self { table, validator })
    }

    pub fn validates(&self) -> bool {
        self.validator.is_some()
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    fn render(&self, route_name: &str, branch: &Branch, values: &Values) -> GenerateResult<String> {
        let mut url = String::new();
        for piece in branch.pieces() {
            match piece {
                Piece::Literal(text) => url.push_str(text),
                Piece::Placeholder { name, pattern } => {
                    let value = values
                        .get(name)
                        .ok_or_else(|| GenerateError::NoMatchingBranch(route_name.to_string()))?;
                    if let Some(validator) = &self.validator {
                        validator.check(route_name, name, pattern, value)?;
                    }
                    url.push_str(value);
                }
            }
        }
        Ok(url)
    }
}

impl RouteGenerator for StdGenerator {
    fn generate(&self, route_name: &str, values: &Values) -> GenerateResult<String> {
        let entry = self
            .table
            .get(route_name)
            .ok_or_else(|| GenerateError::UnknownRoute(route_name.to_string()))?;

        for branch in entry.most_specific_first() {
            if !branch.is_satisfied_by(values) {
                tracing::trace!(
                    route = route_name,
                    placeholders = branch.specificity(),
                    "Branch not satisfiable, trying shorter one"
                );
                continue;
            }

            tracing::debug!(
                route = route_name,
                placeholders = branch.specificity(),
                "Selected branch"
            );
            return self.render(route_name, branch, values);
        }

        Err(GenerateError::NoMatchingBranch(route_name.to_string()))
    }
}
