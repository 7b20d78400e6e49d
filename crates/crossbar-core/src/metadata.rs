//! Route metadata attached to handler methods.

use serde::{Deserialize, Serialize};

use crate::key::RouteKey;
use crate::method::HttpMethod;

/// Declares where a handler method is mounted.
///
/// One value per handler method, supplied by the discovery layer (the
/// `#[controller]` macro, codegen, or a handwritten controller impl).
/// An empty `methods` set means the route applies to every enumerated
/// [`HttpMethod`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMetadata {
    path: String,
    #[serde(default)]
    methods: Vec<HttpMethod>,
}

impl RouteMetadata {
    /// Creates metadata mounting a handler at `path` for the given methods.
    pub fn new(path: impl Into<String>, methods: impl IntoIterator<Item = HttpMethod>) -> Self {
        Self {
            path: path.into(),
            methods: methods.into_iter().collect(),
        }
    }

    /// Creates metadata that matches `path` under every enumerated method.
    pub fn any_method(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            methods: Vec::new(),
        }
    }

    /// The declared mount path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The declared methods; empty means "all".
    pub fn methods(&self) -> &[HttpMethod] {
        &self.methods
    }

    /// Expands this declaration into concrete routing keys.
    ///
    /// One key per declared method, or one per [`HttpMethod::ALL`] entry
    /// when no method was declared.
    pub fn route_keys(&self) -> Vec<RouteKey> {
        let methods: &[HttpMethod] = if self.methods.is_empty() {
            &HttpMethod::ALL
        } else {
            &self.methods
        };

        methods
            .iter()
            .map(|&method| RouteKey::new(self.path.clone(), method))
            .collect()
    }
}
