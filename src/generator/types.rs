//! Value sets and error definitions for URL generation.

use std::fmt::Display;

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while generating a URL.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The route name is not registered.
    #[error("Can't generate URL for unknown route {0}")]
    UnknownRoute(String),

    /// No branch of the route can be filled from the supplied values.
    #[error("Incorrect parameters for {0}")]
    NoMatchingBranch(String),

    /// A value does not satisfy its placeholder pattern (validation only).
    #[error("Value \"{value}\" for placeholder {placeholder} of route {route} does not match pattern {pattern}")]
    ValidationFailure {
        route: String,
        placeholder: String,
        value: String,
        pattern: String,
    },

    /// A placeholder pattern could not be compiled for validation.
    #[error("Invalid placeholder pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for URL generation.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors converting external data into a value set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValuesError {
    #[error("Expected a JSON object of placeholder values")]
    NotAnObject,

    #[error("Unsupported value for {name}: only strings, numbers and booleans are allowed")]
    Unsupported { name: String },

    #[error("Expected key=value, got \"{0}\"")]
    MalformedPair(String),
}

/// Placeholder values for one `generate` call.
///
/// Keeps insertion order. Each value is stored in its `Display` form,
/// so `42` becomes `"42"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    entries: Vec<(String, String)>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a value, returning the previous string form.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) -> Option<String> {
        let name = name.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build from a JSON object. Strings are used verbatim, numbers and
    /// booleans by their JSON text.
    pub fn from_json(json: &Value) -> Result<Self, ValuesError> {
        let object = json.as_object().ok_or(ValuesError::NotAnObject)?;
        let mut values = Self::new();
        for (name, value) in object {
            match value {
                Value::String(s) => values.insert(name.as_str(), s),
                Value::Number(n) => values.insert(name.as_str(), n),
                Value::Bool(b) => values.insert(name.as_str(), b),
                _ => return Err(ValuesError::Unsupported { name: name.clone() }),
            };
        }
        Ok(values)
    }

    /// Build from `key=value` strings, as given on a command line.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ValuesError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (name, value) = pair
                .split_once('=')
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| ValuesError::MalformedPair(pair.to_string()))?;
            values.insert(name, value);
        }
        Ok(values)
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}
