//! Procedural macros for the Crossbar handler-mapping framework.
//!
//! This crate provides:
//!
//! - `#[controller]` - Implements `Controller` for an inherent `impl` block
//!   from `#[route(...)]` markers on its methods.
//!
//! The macro is sugar over the framework's plain types: everything it
//! generates can be written by hand with `Controller`, `RouteEntry`, and
//! `ControllerDescriptor`.

mod controller;

use proc_macro::TokenStream;
use syn::{ItemImpl, parse_macro_input};

/// Turns an inherent `impl` block into a controller.
///
/// Methods marked with `#[route("/path")]` or
/// `#[route("/path", method(GET, POST))]` become route-annotated handler
/// methods; a marker without `method(...)` mounts the handler under every
/// HTTP method. Unmarked methods are left untouched. The markers are
/// stripped from the emitted impl.
///
/// Marked methods must have the signature
/// `fn(&self, &dyn RequestDescriptor) -> HandlerResult`.
///
/// Generated items:
///
/// - an implementation of the `Controller` trait enumerating one
///   `RouteEntry` per marker, each wrapping the method in a downcasting
///   `fn` shim;
/// - an associated `descriptor()` constructor returning the
///   `ControllerDescriptor` for the type. Instantiation goes through
///   `Default` unless a fallible factory is named with `create`.
///
/// # Attributes
///
/// - `#[controller(name = "...")]` - Override the controller name used in
///   logs and startup errors (default: the type name).
/// - `#[controller(create = path::to::factory)]` - Instantiate through
///   `fn() -> Result<Self, BoxError>` instead of `Default::default`.
///
/// # Example
///
/// ```rust,ignore
/// use crossbar::prelude::*;
///
/// #[derive(Default)]
/// struct UsersController;
///
/// #[controller]
/// impl UsersController {
///     #[route("/users")]
///     fn index(&self, _request: &dyn RequestDescriptor) -> HandlerResult {
///         Ok(())
///     }
///
///     #[route("/users/new", method(GET, POST))]
///     fn new_form(&self, _request: &dyn RequestDescriptor) -> HandlerResult {
///         Ok(())
///     }
/// }
///
/// let mapping = HandlerMapping::build([UsersController::descriptor()])?;
/// ```
#[proc_macro_attribute]
pub fn controller(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as controller::ControllerArgs);
    let item = parse_macro_input!(item as ItemImpl);

    match controller::expand(args, item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
