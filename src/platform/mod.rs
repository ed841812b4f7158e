//! Host-platform boundary.
//!
//! Invariant: the library never draws, stores, or delivers anything itself.
//! Realizing a container, touching its live slots, and presenting it to a
//! subject all go through [`Host`]; raw interaction events flow the other
//! way, from a host adapter into [`crate::EventRouter::dispatch`].

pub mod memory;

pub use memory::MemoryHost;

use crate::container::ContainerKind;
use crate::core::content::Content;

/// Live handle to a realized container.
///
/// Semantics:
/// - Minted by the host when a container is realized.
/// - Never reused while the container is live; equality of two `HandleId`s is
///   an identity comparison, and it is the only matching the router performs.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HandleId(u64);

impl HandleId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Identifier for the party a container is presented to.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SubjectId(u64);

impl SubjectId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Minimal host interface the container layer builds against.
///
/// Implementations are expected to be infallible at this boundary; contract
/// violations (an unknown handle, a slot index past the realized size) may
/// be ignored or logged at the host's discretion.
pub trait Host {
    /// Realize a container and return its live handle.
    fn create(&mut self, kind: ContainerKind, size: usize, title: &str) -> HandleId;

    /// Write one slot on a live handle.
    fn set_slot(&mut self, handle: HandleId, index: usize, content: &Content);

    /// Read one slot on a live handle.
    fn slot(&self, handle: HandleId, index: usize) -> Option<Content>;

    /// Read the full slot sequence of a live handle.
    fn contents(&self, handle: HandleId) -> Vec<Option<Content>>;

    /// Present the live handle to a subject.
    fn present(&mut self, handle: HandleId, subject: SubjectId);

    /// Force-close the live handle for every viewer.
    fn dismiss(&mut self, handle: HandleId);
}
