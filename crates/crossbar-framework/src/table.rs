//! The routing table.

use std::collections::HashMap;

use crossbar_core::RouteKey;

use crate::execution::HandlerExecution;

/// Mapping from [`RouteKey`] to [`HandlerExecution`], keys unique.
///
/// Populated once by the registry builder. There are no public mutators,
/// so the table is immutable after
/// [`build`](crate::mapping::HandlerMapping::build) returns and may be read
/// concurrently by any number of resolver calls without synchronisation.
#[derive(Debug, Default)]
pub struct RoutingTable {
    entries: HashMap<RouteKey, HandlerExecution>,
}

impl RoutingTable {
    /// Registers a handler under `key`, returning the previous occupant on
    /// collision (last registration wins).
    pub(crate) fn insert(
        &mut self,
        key: RouteKey,
        execution: HandlerExecution,
    ) -> Option<HandlerExecution> {
        self.entries.insert(key, execution)
    }

    /// Looks up the handler registered under `key`.
    pub fn get(&self, key: &RouteKey) -> Option<&HandlerExecution> {
        self.entries.get(key)
    }

    /// Number of registered route keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no route is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &RouteKey> {
        self.entries.keys()
    }
}
