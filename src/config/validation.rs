//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect duplicate route names
//! - Reject routes without a pattern or methods
//! - Check the log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Template syntax is checked by the parser at registration, not here

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("route #{index} has an empty pattern")]
    EmptyPattern { index: usize },

    #[error("route #{index} has no methods")]
    NoMethods { index: usize },

    #[error("route name \"{0}\" is defined more than once")]
    DuplicateName(String),

    #[error("unknown log level \"{0}\"")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.pattern.is_empty() {
            errors.push(ValidationError::EmptyPattern { index });
        }
        if route.methods.is_empty() {
            errors.push(ValidationError::NoMethods { index });
        }
        if let Some(name) = route.name.as_deref().filter(|n| !n.is_empty()) {
            if !names.insert(name) {
                errors.push(ValidationError::DuplicateName(name.to_string()));
            }
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
