//! Routing subsystem: the data the generator reads.
//!
//! # Data Flow
//! ```text
//! Route Registration (write phase):
//!     template string
//!     → parser.rs (optional segments → branches, shortest first)
//!     → collector.rs (assign name, record methods)
//!     → table.rs (name → RouteEntry)
//!     → Freeze as Arc<RouteTable>
//!
//! Generation (read phase):
//!     generator looks up RouteEntry by name
//!     → branch.rs (placeholders required by each branch)
//! ```
//!
//! # Design Decisions
//! - Tables are built once, immutable afterwards (thread-safe without locks)
//! - Registration order is preserved
//! - No forward dispatch here; this side only serves URL generation

pub mod branch;
pub mod collector;
pub mod parser;
pub mod table;

pub use branch::{Branch, Piece, RouteEntry, DEFAULT_PLACEHOLDER_PATTERN};
pub use collector::{RouteCollector, ANONYMOUS_ROUTE_PREFIX};
pub use parser::{ParseError, ParseResult, RouteParser, StdParser};
pub use table::{RouteTable, TableError};
