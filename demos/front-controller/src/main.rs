//! Front Controller Demo
//!
//! Declares two controllers with `#[controller]`, builds the handler
//! mapping once at startup, then resolves and invokes the request given on
//! the command line, the same flow a dispatch layer would run per request.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package front-controller -- GET /users
//! cargo run --package front-controller -- POST /users/new
//! cargo run --package front-controller -- DELETE /status   # resolution miss
//! cargo run --package front-controller -- FETCH /users     # unknown method
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use crossbar::prelude::*;

// ============================================================================
// CLI
// ============================================================================

/// Resolve one request against the demo routing table.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// HTTP method token (e.g. GET).
    method: String,

    /// Exact request path (e.g. /users).
    path: String,
}

// ============================================================================
// Controllers
// ============================================================================

#[derive(Default)]
struct UsersController;

#[controller]
impl UsersController {
    // No method(...) marker: answers on every HTTP method.
    #[route("/users")]
    fn index(&self, request: &dyn RequestDescriptor) -> HandlerResult {
        println!("users index ({} {})", request.method(), request.path());
        Ok(())
    }

    #[route("/users/new", method(GET, POST))]
    fn new_form(&self, _request: &dyn RequestDescriptor) -> HandlerResult {
        println!("users form");
        Ok(())
    }
}

#[derive(Default)]
struct StatusController;

#[controller(name = "status")]
impl StatusController {
    #[route("/status", method(GET))]
    fn show(&self, _request: &dyn RequestDescriptor) -> HandlerResult {
        println!("ok");
        Ok(())
    }
}

// ============================================================================
// Entry point
// ============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("crossbar=debug,front_controller=info")
                }),
        )
        .init();

    let cli = Cli::parse();

    // Built once; read-only from here on.
    let mapping = HandlerMapping::build([
        UsersController::descriptor(),
        StatusController::descriptor(),
    ])?;

    let request = RequestLine::new(&cli.method, &cli.path);
    match mapping.resolve(&request) {
        Ok(execution) => {
            info!(handler = %execution, "Resolved request");
            execution
                .invoke(&request)
                .map_err(|err| anyhow::anyhow!("handler failed: {err}"))?;
        }
        Err(err @ ResolveError::NoHandlerFound { .. }) => {
            warn!(%err, "Resolution miss");
            println!("404: {err}");
        }
        Err(err @ ResolveError::UnknownMethod(_)) => {
            warn!(%err, "Resolution miss");
            println!("400: {err}");
        }
    }

    Ok(())
}
