//! Declarative slot-grid containers for plugin hosts.
//!
//! Invariant: the host platform owns every pixel and every raw event. This
//! crate only compiles shape descriptions into slot contents, builds
//! containers through the [`Host`] boundary, and routes the host's events
//! back to the one registered container (or few, for cross-container events)
//! that owns each affected live handle.
//!
//! # Public API Overview
//! - Describe a grid with [`ShapeGrid`]: row patterns like `"XXXX-yyy-zz"`
//!   plus a letter-to-[`Content`] mapping.
//! - Configure and [`build`](Container::build) a [`Container`], then
//!   [`register`](Container::register) it in a [`Registry`].
//! - Feed host events into an [`EventRouter`]; matching containers' handler
//!   tables fire, everything else is untouched.
//! - Implement [`Host`] for your platform, or use [`MemoryHost`] in tests.

pub mod config;

pub mod container;
pub mod core;
pub mod platform;
pub mod runtime;

/// Shape compilation.
pub use crate::core::shape::{ShapeGrid, COLUMNS, MAX_ROWS};

/// Slot content and identity types.
pub use crate::core::content::Content;
pub use crate::core::key::IdentityKey;

/// Events and per-container dispatch tables.
pub use crate::core::event::{ContainerEvent, EventKind};
pub use crate::core::handler::{Handler, HandlerTable};

/// Error handling.
pub use crate::core::error::{Error, ErrorCategory};

/// Container configuration and lifecycle.
pub use crate::container::{
    Container, ContainerKind, DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE,
};

/// Host platform boundary and the in-memory implementation.
pub use crate::platform::{HandleId, Host, MemoryHost, SubjectId};

/// Registry and event routing.
pub use crate::runtime::{EventRouter, Registry, SharedContainer, SharedRegistry};

/// Environment-driven configuration.
pub use crate::config::EnvConfig;
