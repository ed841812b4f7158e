//! Process-wide container registry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::container::Container;
use crate::core::key::IdentityKey;

/// A registered container, shared between the caller and the registry.
///
/// The registry holds a non-owning reference: unregistering removes the
/// lookup entry and nothing else. The container stays alive for as long as
/// any clone of the `Arc` does, and its live handle stays open until the
/// host closes it.
pub type SharedContainer = Arc<Mutex<Container>>;

/// The shared handle a plugin threads through its components.
///
/// One lock guards all registry mutation, which is all the synchronization a
/// multi-threaded host needs for it.
pub type SharedRegistry = Arc<Mutex<Registry>>;

/// Mapping from [`IdentityKey`] to live container instances.
///
/// An explicit object with an owner-defined lifecycle: create one at plugin
/// start, pass it by reference, drop it at shutdown. Tests get isolation by
/// constructing their own. Nothing auto-expires; entries come and go only
/// through [`register`](Registry::register) and
/// [`unregister`](Registry::unregister).
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<IdentityKey, SharedContainer>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh registry behind the shared handle.
    pub fn shared() -> SharedRegistry {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Wrap a container and register the shared handle, returning it.
    pub(crate) fn insert(&mut self, container: Container) -> SharedContainer {
        let shared = Arc::new(Mutex::new(container));
        self.register(shared.clone());
        shared
    }

    /// Register a container under its identity key.
    ///
    /// Unconditional: a key collision silently replaces the earlier entry
    /// (last writer wins).
    pub fn register(&mut self, container: SharedContainer) {
        let key = container
            .lock()
            .expect("container mutex poisoned")
            .key()
            .clone();
        debug!(%key, "container registered");
        self.entries.insert(key, container);
    }

    /// Remove and return the entry for `key`; `None` (and no effect) when
    /// absent.
    pub fn unregister(&mut self, key: &IdentityKey) -> Option<SharedContainer> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            debug!(%key, "container unregistered");
        }
        removed
    }

    /// Look up the container registered under `key`.
    pub fn get(&self, key: &IdentityKey) -> Option<SharedContainer> {
        self.entries.get(key).cloned()
    }

    /// Snapshot of every registered container. Iteration order is
    /// unspecified.
    pub fn all(&self) -> Vec<SharedContainer> {
        self.entries.values().cloned().collect()
    }

    /// Every registered container satisfying `predicate`, in [`all`] order.
    /// Empty when none match, never an error.
    ///
    /// [`all`]: Registry::all
    pub fn filter<P>(&self, predicate: P) -> Vec<SharedContainer>
    where
        P: Fn(&Container) -> bool,
    {
        self.entries
            .values()
            .filter(|shared| predicate(&shared.lock().expect("container mutex poisoned")))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
