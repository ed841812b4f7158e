//! Event routing from the host to registered containers.

use tracing::{debug, trace};

use crate::config::EnvConfig;
use crate::core::event::ContainerEvent;
use crate::runtime::registry::SharedRegistry;

/// Routes raw host events to every registered container they involve.
///
/// Matching is by live-handle identity only: a container that has not been
/// built, or whose handle is not carried by the event, is skipped. One event
/// may reach several containers (a transfer between two registered grids) or
/// none at all. Delivery order across matches is unspecified.
///
/// The registry lock is released before any handler runs, so handlers are
/// free to register and unregister containers. A handler must not lock its
/// own container; it already runs under that lock.
pub struct EventRouter {
    registry: SharedRegistry,
    trace_dispatch: bool,
}

impl EventRouter {
    /// Router over `registry`, configured from the process environment.
    pub fn new(registry: SharedRegistry) -> Self {
        Self::with_config(registry, &EnvConfig::from_env())
    }

    pub fn with_config(registry: SharedRegistry, config: &EnvConfig) -> Self {
        Self {
            registry,
            trace_dispatch: config.trace_dispatch,
        }
    }

    /// The registry this router dispatches against.
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Deliver `event` to the handler table of every container it involves.
    ///
    /// Returns the number of containers invoked.
    pub fn dispatch(&self, event: &ContainerEvent) -> usize {
        let snapshot = self
            .registry
            .lock()
            .expect("registry mutex poisoned")
            .all();

        let mut matched = 0;
        for shared in snapshot {
            let mut container = shared.lock().expect("container mutex poisoned");
            let Some(handle) = container.live() else {
                continue;
            };
            if !event.involves(handle) {
                continue;
            }
            trace!(
                kind = event.kind().name(),
                key = %container.key(),
                handle = handle.raw(),
                "dispatching event"
            );
            container.handle_event(event);
            matched += 1;
        }

        if self.trace_dispatch {
            debug!(kind = event.kind().name(), matched, "event dispatched");
        }
        matched
    }
}
