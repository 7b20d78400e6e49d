//! Resolved handler references.

use std::fmt;
use std::sync::Arc;

use crossbar_core::RequestDescriptor;

use crate::controller::{Action, ControllerRef, HandlerResult};

/// A resolved handler: the shared owning instance plus the operation to
/// invoke on it.
///
/// Resolution returns these by reference; the table keeps ownership and
/// nothing is cloned on the request path. Every route key expanded from
/// one controller shares the same instance.
#[derive(Clone)]
pub struct HandlerExecution {
    controller: ControllerRef,
    action: Action,
}

impl HandlerExecution {
    /// Pairs a controller instance with one of its actions.
    pub fn new(controller: ControllerRef, action: Action) -> Self {
        Self { controller, action }
    }

    /// The owning controller instance.
    pub fn controller(&self) -> &ControllerRef {
        &self.controller
    }

    /// The operation this handler maps to.
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Runs the underlying method.
    ///
    /// Argument binding and response writing are the caller's concern; the
    /// shim only hands the request through to the method.
    pub fn invoke(&self, request: &dyn RequestDescriptor) -> HandlerResult {
        self.action.invoke(self.controller.as_ref(), request)
    }

    /// `true` when both references point at the same instance and method.
    pub fn same_target(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.controller, &other.controller)
            && self.action.name() == other.action.name()
    }
}

impl fmt::Debug for HandlerExecution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerExecution")
            .field("controller", &self.controller.name())
            .field("action", &self.action.name())
            .finish()
    }
}

impl fmt::Display for HandlerExecution {
    /// Renders the action name, `"UsersController::index"` style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action.name())
    }
}
