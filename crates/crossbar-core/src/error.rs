//! Per-request error types for the Crossbar core.
//!
//! Startup errors (instantiation failures during registry construction)
//! are defined in `crossbar-framework`; this module only covers failures
//! that are surfaced to the caller once per request and are never fatal
//! to the process.

use thiserror::Error;

use crate::method::HttpMethod;

/// The request's method string does not name any enumerated [`HttpMethod`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown HTTP method '{0}'")]
pub struct UnknownMethod(pub String);

/// Errors returned by handler resolution.
///
/// The dispatch layer decides the user-visible behaviour for each kind
/// (404, 405, ...); resolution never writes a response itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The request's method string could not be parsed.
    #[error(transparent)]
    UnknownMethod(#[from] UnknownMethod),

    /// No handler is registered under the request's `(path, method)` key.
    #[error("no handler registered for {method} {path}")]
    NoHandlerFound {
        /// The unmatched request path.
        path: String,
        /// The parsed request method.
        method: HttpMethod,
    },
}

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
