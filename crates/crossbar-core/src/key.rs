//! The routing key handlers are registered under.

use std::fmt;

use crate::method::HttpMethod;

/// Lookup key of the routing table: an exact path plus a method.
///
/// Equality and hashing are structural over `(path, method)`; two keys are
/// equal iff both fields match exactly. Paths are exact-match strings with
/// no patterns and no normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    path: String,
    method: HttpMethod,
}

impl RouteKey {
    /// Creates a key from an exact path and a method.
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            method,
        }
    }

    /// The exact route path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The method half of the key.
    pub fn method(&self) -> HttpMethod {
        self.method
    }
}

impl fmt::Display for RouteKey {
    /// Renders as `"GET /users"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
