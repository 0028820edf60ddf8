//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! collector / generator / config
//!     → tracing macros (structured events)
//!     → logging.rs subscriber (stderr)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; the binary installs the subscriber
//! - Branch selection is logged at debug, skipped branches at trace

pub mod logging;
