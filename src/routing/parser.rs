//! Route template parsing.
//!
//! # Responsibilities
//! - Split a template into its optional segments
//! - Turn each cumulative prefix into a branch of literals and placeholders
//! - Reject malformed templates with a precise error
//!
//! # Syntax
//! ```text
//! /users/{id}                   placeholder, default pattern [^/]+
//! /users/{id:\d+}               placeholder with explicit pattern
//! /archive/{year:\d{4}}         patterns may contain balanced braces
//! /articles/{id}[/{title}]      optional trailing segment
//! /a[/b[/c]]                    nested optional segments
//! ```
//!
//! # Design Decisions
//! - Optional segments only at the end of a template
//! - Branches are emitted shortest first, which the generator relies on
//! - Patterns are stored as text; nothing is compiled here

use std::collections::HashSet;

use thiserror::Error;

use crate::routing::branch::{Branch, Piece, DEFAULT_PLACEHOLDER_PATTERN};

/// Errors produced while parsing a route template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Optional segments can only occur at the end of a route: {template}")]
    OptionalNotAtEnd { template: String },

    #[error("Number of opening '[' and closing ']' does not match: {template}")]
    UnbalancedBrackets { template: String },

    #[error("Empty optional part in route: {template}")]
    EmptyOptional { template: String },

    #[error("Unclosed placeholder in route: {template}")]
    UnclosedPlaceholder { template: String },

    #[error("Invalid placeholder name \"{name}\" in route: {template}")]
    InvalidPlaceholder { name: String, template: String },

    #[error("Cannot use the same placeholder \"{name}\" twice in route: {template}")]
    DuplicatePlaceholder { name: String, template: String },

    #[error("Route parser produced no branches for: {template}")]
    NoBranches { template: String },
}

/// Result type for template parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Turns a route template into its branches.
pub trait RouteParser: Send + Sync + std::fmt::Debug {
    /// Parse `template` into branches ordered shortest first.
    fn parse(&self, template: &str) -> ParseResult<Vec<Branch>>;
}

/// Parser for the `{name:pattern}` / `[optional]` template syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdParser;

impl StdParser {
    pub fn new() -> Self {
        Self
    }
}

impl RouteParser for StdParser {
    fn parse(&self, template: &str) -> ParseResult<Vec<Branch>> {
        let without_closing = template.trim_end_matches(']');
        let num_optionals = template.len() - without_closing.len();

        let segments = split_segments(template, without_closing)?;
        if segments.len() - 1 != num_optionals {
            return Err(ParseError::UnbalancedBrackets {
                template: template.to_string(),
            });
        }

        let mut current = String::with_capacity(without_closing.len());
        let mut branches = Vec::with_capacity(segments.len());
        for (n, segment) in segments.iter().enumerate() {
            if segment.is_empty() && n != 0 {
                return Err(ParseError::EmptyOptional {
                    template: template.to_string(),
                });
            }
            current.push_str(segment);
            branches.push(parse_placeholders(template, &current)?);
        }

        Ok(branches)
    }
}

/// Split on top-level `[`. Brackets inside placeholders belong to patterns.
fn split_segments<'a>(template: &str, route: &'a str) -> ParseResult<Vec<&'a str>> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (pos, byte) in route.bytes().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b'[' if depth == 0 => {
                segments.push(&route[start..pos]);
                start = pos + 1;
            }
            b']' if depth == 0 => {
                return Err(ParseError::OptionalNotAtEnd {
                    template: template.to_string(),
                });
            }
            _ => {}
        }
    }

    if depth > 0 {
        return Err(ParseError::UnclosedPlaceholder {
            template: template.to_string(),
        });
    }

    segments.push(&route[start..]);
    Ok(segments)
}

fn parse_placeholders(template: &str, route: &str) -> ParseResult<Branch> {
    let bytes = route.as_bytes();
    let mut pieces = Vec::new();
    let mut seen = HashSet::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'{' {
            pos += 1;
            continue;
        }

        let close = matching_brace(bytes, pos).ok_or_else(|| ParseError::UnclosedPlaceholder {
            template: template.to_string(),
        })?;

        if literal_start < pos {
            pieces.push(Piece::literal(&route[literal_start..pos]));
        }

        let (name, pattern) = split_placeholder(template, &route[pos + 1..close])?;
        if !seen.insert(name) {
            return Err(ParseError::DuplicatePlaceholder {
                name: name.to_string(),
                template: template.to_string(),
            });
        }
        pieces.push(Piece::placeholder(name, pattern));

        pos = close + 1;
        literal_start = pos;
    }

    if literal_start < bytes.len() {
        pieces.push(Piece::literal(&route[literal_start..]));
    }

    Ok(Branch::new(pieces))
}

fn matching_brace(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, &byte) in bytes[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// `name` or `name:pattern`, whitespace trimmed. Empty pattern means default.
fn split_placeholder<'a>(template: &str, inner: &'a str) -> ParseResult<(&'a str, &'a str)> {
    let (name, pattern) = match inner.split_once(':') {
        Some((name, pattern)) => (name.trim(), pattern.trim()),
        None => (inner.trim(), ""),
    };

    if !is_valid_name(name) {
        return Err(ParseError::InvalidPlaceholder {
            name: name.to_string(),
            template: template.to_string(),
        });
    }

    let pattern = if pattern.is_empty() {
        DEFAULT_PLACEHOLDER_PATTERN
    } else {
        pattern
    };
    Ok((name, pattern))
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(template: &str) -> Vec<Branch> {
        StdParser::new().parse(template).unwrap()
    }

    fn ph(name: &str, pattern: &str) -> Piece {
        Piece::placeholder(name, pattern)
    }

    fn lit(text: &str) -> Piece {
        Piece::literal(text)
    }

    #[test]
    fn test_static_route() {
        let branches = parse("/users");
        assert_eq!(branches, vec![Branch::new(vec![lit("/users")])]);
    }

    #[test]
    fn test_placeholder_with_pattern() {
        let branches = parse("/user/{id:\\d+}");
        assert_eq!(branches, vec![Branch::new(vec![lit("/user/"), ph("id", "\\d+")])]);
    }

    #[test]
    fn test_default_pattern_and_whitespace() {
        let branches = parse("/{ name }/{ slug : [a-z-]+ }/{empty:}");
        assert_eq!(
            branches[0].pieces(),
            &[
                lit("/"),
                ph("name", DEFAULT_PLACEHOLDER_PATTERN),
                lit("/"),
                ph("slug", "[a-z-]+"),
                lit("/"),
                ph("empty", DEFAULT_PLACEHOLDER_PATTERN),
            ]
        );
    }

    #[test]
    fn test_pattern_with_braces_and_brackets() {
        let branches = parse("/archive/{year:\\d{4}}/{code:[A-Z]{2}}");
        assert_eq!(branches.len(), 1);
        assert_eq!(
            branches[0].pieces(),
            &[
                lit("/archive/"),
                ph("year", "\\d{4}"),
                lit("/"),
                ph("code", "[A-Z]{2}"),
            ]
        );
    }

    #[test]
    fn test_optional_segment_branches_shortest_first() {
        let branches = parse("/articles/{id:\\d+}[/{title}]");
        assert_eq!(branches.len(), 2);
        assert_eq!(branches[0].pieces(), &[lit("/articles/"), ph("id", "\\d+")]);
        assert_eq!(
            branches[1].pieces(),
            &[
                lit("/articles/"),
                ph("id", "\\d+"),
                lit("/"),
                ph("title", DEFAULT_PLACEHOLDER_PATTERN),
            ]
        );
    }

    #[test]
    fn test_nested_optional_segments() {
        let branches = parse("/a[/b[/{c}]]");
        assert_eq!(branches.len(), 3);
        assert_eq!(branches[0].pieces(), &[lit("/a")]);
        assert_eq!(branches[1].pieces(), &[lit("/a/b")]);
        assert_eq!(branches[2].pieces(), &[lit("/a/b/"), ph("c", DEFAULT_PLACEHOLDER_PATTERN)]);
    }

    #[test]
    fn test_fully_optional_route() {
        let branches = parse("[/{page}]");
        assert_eq!(branches.len(), 2);
        assert!(branches[0].pieces().is_empty());
    }

    #[test]
    fn test_optional_not_at_end() {
        let err = StdParser::new().parse("/a[/b]/c").unwrap_err();
        assert!(matches!(err, ParseError::OptionalNotAtEnd { .. }));
        assert!(err.to_string().contains("only occur at the end"));
    }

    #[test]
    fn test_unbalanced_brackets() {
        let err = StdParser::new().parse("/a[/b[/c]").unwrap_err();
        assert!(matches!(err, ParseError::UnbalancedBrackets { .. }));

        let err = StdParser::new().parse("/a/b]").unwrap_err();
        assert!(matches!(err, ParseError::UnbalancedBrackets { .. }));
    }

    #[test]
    fn test_empty_optional() {
        let err = StdParser::new().parse("/a[]").unwrap_err();
        assert!(matches!(err, ParseError::EmptyOptional { .. }));
    }

    #[test]
    fn test_unclosed_placeholder() {
        let err = StdParser::new().parse("/user/{id").unwrap_err();
        assert!(matches!(err, ParseError::UnclosedPlaceholder { .. }));
    }

    #[test]
    fn test_invalid_placeholder_name() {
        let err = StdParser::new().parse("/user/{1id}").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidPlaceholder {
                name: "1id".into(),
                template: "/user/{1id}".into(),
            }
        );
        assert!(StdParser::new().parse("/user/{}").is_err());
    }

    #[test]
    fn test_duplicate_placeholder() {
        let err = StdParser::new().parse("/{id}/{id}").unwrap_err();
        assert!(matches!(err, ParseError::DuplicatePlaceholder { ref name, .. } if name == "id"));
    }

    #[test]
    fn test_duplicate_across_optional_segment() {
        let err = StdParser::new().parse("/{id}[/{id}]").unwrap_err();
        assert!(matches!(err, ParseError::DuplicatePlaceholder { .. }));
    }

    #[test]
    fn test_stray_closing_brace_is_literal() {
        let branches = parse("/a}b");
        assert_eq!(branches[0].pieces(), &[lit("/a}b")]);
    }
}
