//! URL generation subsystem.
//!
//! # Data Flow
//! ```text
//! generate(route_name, values)
//!     → RouteTable lookup (UnknownRoute if absent)
//!     → scan branches most specific first
//!     → first branch whose placeholders ⊆ keys(values)
//!     → standard.rs renders literals + values
//!     → validation.rs checks values (only when enabled)
//!     → URL string or explicit error
//! ```
//!
//! # Design Decisions
//! - Pure function of the frozen table and the call's values
//! - Greedy selection, no backtracking
//! - No escaping or URL-encoding of values
//! - Validation is opt-in and never falls back to another branch

pub mod standard;
pub mod types;
pub mod validation;

pub use standard::StdGenerator;
pub use types::{GenerateError, GenerateResult, Values, ValuesError};
pub use validation::PatternValidator;

/// Builds URL strings for named routes.
pub trait RouteGenerator: Send + Sync {
    /// Returns the longest branch of `route_name` that `values` can fill.
    ///
    /// `values` may hold keys the route does not use; they are ignored.
    fn generate(&self, route_name: &str, values: &Values) -> GenerateResult<String>;
}
