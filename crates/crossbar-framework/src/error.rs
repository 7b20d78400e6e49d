//! Startup error types for the framework layer.
//!
//! Per-request errors live in `crossbar-core`; everything here is fatal to
//! initialisation.

use thiserror::Error;

/// Errors that can occur while building the routing table.
///
/// Initialisation halts on the first error; no partial table is served.
#[derive(Debug, Clone, Error)]
pub enum BuildError {
    /// A candidate controller could not be instantiated.
    #[error("failed to instantiate controller '{controller}': {reason}")]
    Instantiation {
        /// Name of the failing candidate.
        controller: &'static str,
        /// Stringified factory error.
        reason: String,
    },
}

/// Result type for registry construction.
pub type BuildResult<T> = Result<T, BuildError>;
