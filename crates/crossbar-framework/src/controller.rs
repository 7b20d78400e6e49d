//! Controller trait and candidate-type descriptors.
//!
//! A *controller* is a handler-owning type: it declares zero or more
//! route-annotated methods, and one shared instance of it backs every route
//! key those methods expand to. A [`ControllerDescriptor`] is the static,
//! `Copy` handle the discovery layer hands to the registry builder; how
//! descriptors are produced (a static list, codegen, or the `#[controller]`
//! macro) stays upstream.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crossbar_core::{RequestDescriptor, RouteMetadata};

/// Boxed error type used at the framework's fallible seams.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result of invoking a handler method.
///
/// Handlers perform their effect through their own collaborators and report
/// failure through the boxed error; response writing stays upstream.
pub type HandlerResult = Result<(), BoxError>;

/// A handler-owning type.
///
/// One instance per controller is created during
/// [`HandlerMapping::build`](crate::mapping::HandlerMapping::build) and
/// shared by every route key that maps to one of its methods. Implement by
/// hand, or let the `#[controller]` attribute generate the impl from
/// `#[route(...)]` markers.
pub trait Controller: Any + Send + Sync {
    /// Short name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Every route-annotated handler method, paired with its metadata.
    ///
    /// Methods without route metadata simply never appear here; they are
    /// not an error.
    fn handler_methods(&self) -> Vec<RouteEntry>;

    /// Upcast used by action shims to downcast back to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to a live controller instance.
pub type ControllerRef = Arc<dyn Controller>;

/// `fn` signature of an action shim: borrows the owning controller and the
/// request, runs the underlying method.
pub type ActionFn = fn(&dyn Controller, &dyn RequestDescriptor) -> HandlerResult;

/// Descriptor of one operation on a controller: the method half of a
/// resolved handler.
///
/// Captured at registration time, so resolution never needs any dynamic
/// introspection: the shim already knows which method to run.
#[derive(Clone, Copy)]
pub struct Action {
    name: &'static str,
    invoke: ActionFn,
}

impl Action {
    /// Creates an action from a diagnostic name and its shim.
    pub const fn new(name: &'static str, invoke: ActionFn) -> Self {
        Self { name, invoke }
    }

    /// Diagnostic name, `"UsersController::index"` style.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the underlying method against `controller`.
    pub fn invoke(
        &self,
        controller: &dyn Controller,
        request: &dyn RequestDescriptor,
    ) -> HandlerResult {
        (self.invoke)(controller, request)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("name", &self.name).finish()
    }
}

/// One declared route: where it mounts, and what it runs.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Mount path and method set.
    pub metadata: RouteMetadata,
    /// The operation the route maps to.
    pub action: Action,
}

impl RouteEntry {
    /// Pairs route metadata with the action it maps to.
    pub fn new(metadata: RouteMetadata, action: Action) -> Self {
        Self { metadata, action }
    }
}

/// Instantiation hook for a candidate controller type.
///
/// Called exactly once per descriptor during registry construction; a
/// failure is fatal and aborts the build.
pub type CreateFn = fn() -> Result<ControllerRef, BoxError>;

/// A static, `Copy` descriptor identifying a candidate controller type.
///
/// The discovery layer's whole job is reduced to producing these; the
/// registry builder never inspects anything beyond `name` and `create`.
#[derive(Debug, Clone, Copy)]
pub struct ControllerDescriptor {
    /// Controller name used in logs and startup errors.
    pub name: &'static str,
    /// Factory producing the shared instance.
    pub create: CreateFn,
}

impl ControllerDescriptor {
    /// Runs the instantiation hook.
    pub fn instantiate(&self) -> Result<ControllerRef, BoxError> {
        (self.create)()
    }
}
