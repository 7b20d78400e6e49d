//! # Crossbar Framework
//!
//! The two components of the Crossbar handler-mapping framework: the route
//! registry builder and the handler resolver, both exposed through
//! [`HandlerMapping`].
//!
//! Data flows one direction:
//!
//! ```text
//! ┌──────────────────────┐     ┌────────────────┐     ┌───────────────────┐
//! │ ControllerDescriptor │────▶│ HandlerMapping │────▶│ &HandlerExecution │
//! │     (discovery)      │     │ build / resolve│     │    (dispatch)     │
//! └──────────────────────┘     └────────────────┘     └───────────────────┘
//! ```
//!
//! The routing table is built exactly once during process startup and is
//! read-only afterwards; resolution is a pure lookup that many threads may
//! perform concurrently without synchronisation. Discovering candidate
//! controllers, binding handler arguments, and writing responses all live
//! upstream of this crate.

pub mod controller;
pub mod error;
pub mod execution;
pub mod mapping;
pub mod table;

pub use controller::{
    Action, ActionFn, BoxError, Controller, ControllerDescriptor, ControllerRef, CreateFn,
    HandlerResult, RouteEntry,
};
pub use error::{BuildError, BuildResult};
pub use execution::HandlerExecution;
pub use mapping::HandlerMapping;
pub use table::RoutingTable;
