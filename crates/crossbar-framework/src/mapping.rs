//! Registry builder and handler resolver.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crossbar_core::{HttpMethod, RequestDescriptor, ResolveError, ResolveResult, RouteKey};

use crate::controller::ControllerDescriptor;
use crate::error::{BuildError, BuildResult};
use crate::execution::HandlerExecution;
use crate::table::RoutingTable;

/// The populated handler mapping.
///
/// Built exactly once, synchronously, during process startup; read-only
/// for the remainder of the process lifetime. Because there are no writers
/// after construction, [`resolve`](Self::resolve) may be called from any
/// number of threads without locks.
#[derive(Debug)]
pub struct HandlerMapping {
    table: RoutingTable,
}

impl HandlerMapping {
    /// Builds the routing table from the supplied candidate descriptors.
    ///
    /// Each candidate is instantiated exactly once via its `create` hook,
    /// and all of its route-annotated methods share that instance. Metadata
    /// with an empty method set is expanded across [`HttpMethod::ALL`]. A
    /// later registration under an identical key replaces the earlier one
    /// (last registration wins); every overwrite is logged at WARN.
    ///
    /// An empty candidate sequence yields an empty table. The builder keeps
    /// no reference to the sequence after returning.
    ///
    /// # Errors
    ///
    /// [`BuildError::Instantiation`] when a candidate's factory fails. The
    /// build aborts immediately and no partial table is returned.
    pub fn build<I>(candidates: I) -> BuildResult<Self>
    where
        I: IntoIterator<Item = ControllerDescriptor>,
    {
        let mut table = RoutingTable::default();

        for descriptor in candidates {
            let controller =
                descriptor
                    .instantiate()
                    .map_err(|source| BuildError::Instantiation {
                        controller: descriptor.name,
                        reason: source.to_string(),
                    })?;

            let entries = controller.handler_methods();
            debug!(
                controller = descriptor.name,
                handler_methods = entries.len(),
                "Registered controller"
            );

            for entry in entries {
                for key in entry.metadata.route_keys() {
                    let execution = HandlerExecution::new(Arc::clone(&controller), entry.action);
                    if let Some(prev) = table.insert(key.clone(), execution) {
                        warn!(
                            route = %key,
                            prev = %prev,
                            new = entry.action.name(),
                            "Duplicate route — last registration wins"
                        );
                    }
                }
            }
        }

        info!(routes = table.len(), "Handler mapping initialised");
        Ok(Self { table })
    }

    /// Resolves a request to its registered handler.
    ///
    /// A pure function of `(table, request)`: parses the method token,
    /// builds the key, and returns the stored reference unchanged.
    ///
    /// # Errors
    ///
    /// [`ResolveError::UnknownMethod`] when the method token names no
    /// enumerated [`HttpMethod`]; [`ResolveError::NoHandlerFound`] when
    /// nothing is registered under the request's key. Both are per-request
    /// failures for the dispatch layer to translate.
    pub fn resolve(&self, request: &dyn RequestDescriptor) -> ResolveResult<&HandlerExecution> {
        let method: HttpMethod = request.method().parse()?;
        let key = RouteKey::new(request.path(), method);

        self.table.get(&key).ok_or_else(|| {
            debug!(path = request.path(), %method, "No handler for request");
            ResolveError::NoHandlerFound {
                path: request.path().to_string(),
                method,
            }
        })
    }

    /// Read access to the underlying table.
    pub fn table(&self) -> &RoutingTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::any::Any;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crossbar_core::{RequestLine, RouteMetadata, UnknownMethod};

    use crate::controller::{
        Action, Controller, ControllerRef, HandlerResult, RouteEntry,
    };

    // A controller mounted at "/users" for every method, with a hit counter
    // so tests can observe invocation.
    #[derive(Default)]
    struct UsersController {
        hits: AtomicUsize,
    }

    impl UsersController {
        fn index(&self, _request: &dyn RequestDescriptor) -> HandlerResult {
            self.hits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn users_index_shim(
        controller: &dyn Controller,
        request: &dyn RequestDescriptor,
    ) -> HandlerResult {
        match controller.as_any().downcast_ref::<UsersController>() {
            Some(this) => this.index(request),
            None => Err("action invoked on a foreign controller".into()),
        }
    }

    impl Controller for UsersController {
        fn name(&self) -> &'static str {
            "UsersController"
        }

        fn handler_methods(&self) -> Vec<RouteEntry> {
            vec![RouteEntry::new(
                RouteMetadata::any_method("/users"),
                Action::new("UsersController::index", users_index_shim),
            )]
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn users_descriptor() -> ControllerDescriptor {
        ControllerDescriptor {
            name: "users",
            create: || {
                let controller: ControllerRef = Arc::new(UsersController::default());
                Ok(controller)
            },
        }
    }

    // A controller with two explicit-method routes, used for shared-instance
    // and exact-match assertions.
    #[derive(Default)]
    struct StatusController;

    impl StatusController {
        fn show(&self, _request: &dyn RequestDescriptor) -> HandlerResult {
            Ok(())
        }

        fn refresh(&self, _request: &dyn RequestDescriptor) -> HandlerResult {
            Ok(())
        }
    }

    fn status_shim(name: &'static str) -> Action {
        fn show(controller: &dyn Controller, request: &dyn RequestDescriptor) -> HandlerResult {
            controller
                .as_any()
                .downcast_ref::<StatusController>()
                .expect("status controller")
                .show(request)
        }
        fn refresh(controller: &dyn Controller, request: &dyn RequestDescriptor) -> HandlerResult {
            controller
                .as_any()
                .downcast_ref::<StatusController>()
                .expect("status controller")
                .refresh(request)
        }

        match name {
            "StatusController::show" => Action::new(name, show),
            _ => Action::new(name, refresh),
        }
    }

    impl Controller for StatusController {
        fn name(&self) -> &'static str {
            "StatusController"
        }

        fn handler_methods(&self) -> Vec<RouteEntry> {
            vec![
                RouteEntry::new(
                    RouteMetadata::new("/status", [HttpMethod::Get]),
                    status_shim("StatusController::show"),
                ),
                RouteEntry::new(
                    RouteMetadata::new("/status", [HttpMethod::Post]),
                    status_shim("StatusController::refresh"),
                ),
            ]
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn status_descriptor() -> ControllerDescriptor {
        ControllerDescriptor {
            name: "status",
            create: || {
                let controller: ControllerRef = Arc::new(StatusController::default());
                Ok(controller)
            },
        }
    }

    // Two controllers claiming the same key, for the collision test.
    struct FirstClaimant;
    struct SecondClaimant;

    fn noop(_: &dyn Controller, _: &dyn RequestDescriptor) -> HandlerResult {
        Ok(())
    }

    impl Controller for FirstClaimant {
        fn name(&self) -> &'static str {
            "FirstClaimant"
        }

        fn handler_methods(&self) -> Vec<RouteEntry> {
            vec![RouteEntry::new(
                RouteMetadata::new("/dup", [HttpMethod::Get]),
                Action::new("FirstClaimant::dup", noop),
            )]
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    impl Controller for SecondClaimant {
        fn name(&self) -> &'static str {
            "SecondClaimant"
        }

        fn handler_methods(&self) -> Vec<RouteEntry> {
            vec![RouteEntry::new(
                RouteMetadata::new("/dup", [HttpMethod::Get]),
                Action::new("SecondClaimant::dup", noop),
            )]
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn resolves_registered_path_and_method() {
        let mapping = HandlerMapping::build([status_descriptor()]).unwrap();

        let execution = mapping
            .resolve(&RequestLine::new("GET", "/status"))
            .unwrap();
        assert_eq!(execution.action().name(), "StatusController::show");

        let execution = mapping
            .resolve(&RequestLine::new("POST", "/status"))
            .unwrap();
        assert_eq!(execution.action().name(), "StatusController::refresh");
    }

    #[test]
    fn empty_method_set_matches_every_method() {
        let mapping = HandlerMapping::build([users_descriptor()]).unwrap();

        let via_get = mapping.resolve(&RequestLine::new("GET", "/users")).unwrap();
        for method in HttpMethod::ALL {
            let execution = mapping
                .resolve(&RequestLine::new(method.as_str(), "/users"))
                .unwrap();
            assert!(execution.same_target(via_get));
        }
    }

    #[test]
    fn one_instance_is_shared_across_routes() {
        let mapping = HandlerMapping::build([status_descriptor()]).unwrap();

        let show = mapping
            .resolve(&RequestLine::new("GET", "/status"))
            .unwrap();
        let refresh = mapping
            .resolve(&RequestLine::new("POST", "/status"))
            .unwrap();

        assert!(Arc::ptr_eq(show.controller(), refresh.controller()));
        assert!(!show.same_target(refresh));
    }

    #[test]
    fn duplicate_key_keeps_the_last_registration() {
        let first = ControllerDescriptor {
            name: "first",
            create: || {
                let controller: ControllerRef = Arc::new(FirstClaimant);
                Ok(controller)
            },
        };
        let second = ControllerDescriptor {
            name: "second",
            create: || {
                let controller: ControllerRef = Arc::new(SecondClaimant);
                Ok(controller)
            },
        };

        let mapping = HandlerMapping::build([first, second]).unwrap();
        assert_eq!(mapping.table().len(), 1);

        let execution = mapping.resolve(&RequestLine::new("GET", "/dup")).unwrap();
        assert_eq!(execution.action().name(), "SecondClaimant::dup");
    }

    #[test]
    fn unregistered_path_is_no_handler_found() {
        let mapping = HandlerMapping::build([users_descriptor()]).unwrap();

        let err = mapping
            .resolve(&RequestLine::new("GET", "/users2"))
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::NoHandlerFound {
                path: "/users2".into(),
                method: HttpMethod::Get,
            }
        );
    }

    #[test]
    fn unknown_method_is_rejected_even_for_registered_paths() {
        let mapping = HandlerMapping::build([users_descriptor()]).unwrap();

        let err = mapping
            .resolve(&RequestLine::new("FETCH", "/users"))
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownMethod(UnknownMethod("FETCH".into()))
        );
    }

    #[test]
    fn empty_candidate_list_builds_an_empty_table() {
        let mapping = HandlerMapping::build([]).unwrap();

        assert!(mapping.table().is_empty());
        assert!(matches!(
            mapping.resolve(&RequestLine::new("GET", "/anything")),
            Err(ResolveError::NoHandlerFound { .. })
        ));
    }

    #[test]
    fn instantiation_failure_aborts_the_build() {
        let failing = ControllerDescriptor {
            name: "failing",
            create: || Err("database unreachable".into()),
        };

        let err = HandlerMapping::build([users_descriptor(), failing]).unwrap_err();
        let BuildError::Instantiation { controller, reason } = err;
        assert_eq!(controller, "failing");
        assert!(reason.contains("database unreachable"));
    }

    #[test]
    fn invoke_reaches_the_underlying_method() {
        let mapping = HandlerMapping::build([users_descriptor()]).unwrap();
        let request = RequestLine::new("DELETE", "/users");

        let execution = mapping.resolve(&request).unwrap();
        execution.invoke(&request).unwrap();
        execution.invoke(&request).unwrap();

        let controller = execution
            .controller()
            .as_any()
            .downcast_ref::<UsersController>()
            .unwrap();
        assert_eq!(controller.hits.load(Ordering::SeqCst), 2);
    }
}
