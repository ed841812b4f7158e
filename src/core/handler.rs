//! Per-container event dispatch table.

use std::fmt;

use crate::core::event::{ContainerEvent, EventKind};

/// Callback invoked with every matching event of its kind.
pub type Handler = Box<dyn FnMut(&ContainerEvent) + Send>;

/// Fixed dispatch table: one optional [`Handler`] per [`EventKind`].
///
/// Kinds with no handler set dispatch as no-ops. Setting a handler for a kind
/// replaces whatever was stored for that kind before.
pub struct HandlerTable {
    entries: [Option<Handler>; EventKind::ALL.len()],
}

impl Default for HandlerTable {
    fn default() -> Self {
        Self {
            entries: std::array::from_fn(|_| None),
        }
    }
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handler` as the single callback for `kind`.
    pub fn set(&mut self, kind: EventKind, handler: Handler) {
        self.entries[kind.index()] = Some(handler);
    }

    /// Whether a handler is currently set for `kind`.
    pub fn is_set(&self, kind: EventKind) -> bool {
        self.entries[kind.index()].is_some()
    }

    /// Dispatch `event` to the handler of its kind, if one is set.
    pub fn handle(&mut self, event: &ContainerEvent) {
        if let Some(handler) = self.entries[event.kind().index()].as_mut() {
            handler(event);
        }
    }
}

impl fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set: Vec<&str> = EventKind::ALL
            .into_iter()
            .filter(|kind| self.is_set(*kind))
            .map(|kind| kind.name())
            .collect();
        f.debug_struct("HandlerTable").field("set", &set).finish()
    }
}
