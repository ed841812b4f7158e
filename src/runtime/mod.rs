//! Runtime orchestration: the registry and the event router.

pub mod registry;
pub mod router;

pub use registry::{Registry, SharedContainer, SharedRegistry};
pub use router::EventRouter;
