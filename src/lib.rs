//! Reverse routing: build URLs from route names and placeholder values.

pub mod config;
pub mod generator;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use generator::{GenerateError, RouteGenerator, StdGenerator, Values};
pub use routing::{RouteCollector, RouteTable};
