//! # Crossbar Core
//!
//! Foundation types for the Crossbar handler-mapping framework.
//!
//! This crate defines the vocabulary the registry builder and resolver in
//! `crossbar-framework` operate on:
//!
//! - **Method enumeration**: the fixed set of HTTP verbs a route can be
//!   keyed on ([`HttpMethod`])
//! - **Routing key**: the exact-match `(path, method)` pair handlers are
//!   registered under ([`RouteKey`])
//! - **Route metadata**: the declaration attached to a handler method,
//!   where an empty method set means "every verb" ([`RouteMetadata`])
//! - **Request seam**: the minimal view of an already-parsed request that
//!   resolution consumes ([`RequestDescriptor`], [`RequestLine`])
//! - **Per-request errors**: the failures resolution can surface
//!   ([`UnknownMethod`], [`ResolveError`])
//!
//! Everything here is synchronous, in-memory, and free of transport
//! concerns; request parsing and response writing live upstream.

pub mod error;
pub mod key;
pub mod metadata;
pub mod method;
pub mod request;

pub use error::{ResolveError, ResolveResult, UnknownMethod};
pub use key::RouteKey;
pub use metadata::RouteMetadata;
pub use method::HttpMethod;
pub use request::{RequestDescriptor, RequestLine};
