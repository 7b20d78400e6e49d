//! # Crossbar
//!
//! A declarative handler-mapping framework: controllers declare routes on
//! their methods, the registry builder expands the declarations into an
//! immutable table keyed by exact `(path, method)` pairs, and the resolver
//! maps each incoming request to exactly one handler or an unambiguous
//! failure.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────┐     ┌────────────────────┐
//! │ Controllers │────▶│ HandlerMapping │────▶│ &HandlerExecution  │
//! │ #[route]    │     │ build / resolve│────▶│ NoHandlerFound     │
//! └─────────────┘     └────────────────┘────▶│ UnknownMethod      │
//!                                            └────────────────────┘
//! ```
//!
//! - **Controllers**: handler-owning types; one shared instance backs every
//!   route key expanded from its methods
//! - **Build**: runs once at startup; instantiation failures are fatal
//! - **Resolve**: a pure, lock-free lookup, safe from any number of threads
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crossbar::prelude::*;
//!
//! #[derive(Default)]
//! struct UsersController;
//!
//! #[controller]
//! impl UsersController {
//!     // No method(...) marker: mounted under every HTTP method.
//!     #[route("/users")]
//!     fn index(&self, _request: &dyn RequestDescriptor) -> HandlerResult {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), BuildError> {
//!     let mapping = HandlerMapping::build([UsersController::descriptor()])?;
//!
//!     let request = RequestLine::new("GET", "/users");
//!     match mapping.resolve(&request) {
//!         Ok(execution) => execution.invoke(&request).unwrap(),
//!         Err(err) => eprintln!("{err}"),
//!     }
//!     Ok(())
//! }
//! ```

pub use crossbar_core as core;
pub use crossbar_framework as framework;

pub use crossbar_macros::controller;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use crossbar::prelude::*;
/// ```
pub mod prelude {
    // Foundation types - keys, metadata, methods, requests
    pub use crossbar_core::{
        HttpMethod, RequestDescriptor, RequestLine, ResolveError, ResolveResult, RouteKey,
        RouteMetadata, UnknownMethod,
    };

    // Registry builder and resolver
    pub use crossbar_framework::{
        Action, BoxError, BuildError, BuildResult, Controller, ControllerDescriptor,
        ControllerRef, HandlerExecution, HandlerMapping, HandlerResult, RouteEntry, RoutingTable,
    };

    // Declarative registration
    pub use crossbar_macros::controller;
}
