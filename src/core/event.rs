//! Interaction events delivered by the host platform.

use std::str::FromStr;

use crate::core::content::Content;
use crate::core::error::Error;
use crate::platform::{HandleId, SubjectId};

/// The closed set of recognized event kinds.
///
/// Host adapters translating platform-native tags should go through
/// [`EventKind::from_str`], which rejects anything outside this set.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EventKind {
    Open,
    Close,
    Click,
    Drag,
    CreativeEdit,
    Pickup,
    Transfer,
}

impl EventKind {
    /// Every recognized kind, in table order.
    pub const ALL: [EventKind; 7] = [
        EventKind::Open,
        EventKind::Close,
        EventKind::Click,
        EventKind::Drag,
        EventKind::CreativeEdit,
        EventKind::Pickup,
        EventKind::Transfer,
    ];

    /// Stable lowercase name, the inverse of [`EventKind::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Open => "open",
            EventKind::Close => "close",
            EventKind::Click => "click",
            EventKind::Drag => "drag",
            EventKind::CreativeEdit => "creative_edit",
            EventKind::Pickup => "pickup",
            EventKind::Transfer => "transfer",
        }
    }

    /// Position of this kind in a fixed dispatch table.
    pub(crate) fn index(self) -> usize {
        match self {
            EventKind::Open => 0,
            EventKind::Close => 1,
            EventKind::Click => 2,
            EventKind::Drag => 3,
            EventKind::CreativeEdit => 4,
            EventKind::Pickup => 5,
            EventKind::Transfer => 6,
        }
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Error> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| Error::UnrecognizedEventKind {
                name: name.to_string(),
            })
    }
}

/// A raw interaction event, carrying the live handle(s) it involves.
///
/// Most kinds involve exactly one container. A click or creative edit may
/// additionally name the specific sub-container that was clicked; a transfer
/// names both ends of the move.
#[derive(Clone, Debug, PartialEq)]
pub enum ContainerEvent {
    Open {
        container: HandleId,
        subject: SubjectId,
    },
    Close {
        container: HandleId,
        subject: SubjectId,
    },
    Click {
        container: HandleId,
        clicked: Option<HandleId>,
        slot: usize,
        subject: SubjectId,
    },
    Drag {
        container: HandleId,
        slots: Vec<usize>,
        subject: SubjectId,
    },
    CreativeEdit {
        container: HandleId,
        clicked: Option<HandleId>,
        slot: usize,
        content: Option<Content>,
    },
    Pickup {
        container: HandleId,
        content: Content,
    },
    Transfer {
        source: HandleId,
        destination: HandleId,
        content: Content,
    },
}

impl ContainerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ContainerEvent::Open { .. } => EventKind::Open,
            ContainerEvent::Close { .. } => EventKind::Close,
            ContainerEvent::Click { .. } => EventKind::Click,
            ContainerEvent::Drag { .. } => EventKind::Drag,
            ContainerEvent::CreativeEdit { .. } => EventKind::CreativeEdit,
            ContainerEvent::Pickup { .. } => EventKind::Pickup,
            ContainerEvent::Transfer { .. } => EventKind::Transfer,
        }
    }

    /// Whether this event touches the given live handle.
    ///
    /// This is the identity test the router runs against every registered
    /// container: handle equality, never content comparison.
    pub fn involves(&self, handle: HandleId) -> bool {
        match self {
            ContainerEvent::Open { container, .. }
            | ContainerEvent::Close { container, .. }
            | ContainerEvent::Drag { container, .. }
            | ContainerEvent::Pickup { container, .. } => *container == handle,
            ContainerEvent::Click {
                container, clicked, ..
            }
            | ContainerEvent::CreativeEdit {
                container, clicked, ..
            } => *container == handle || *clicked == Some(handle),
            ContainerEvent::Transfer {
                source,
                destination,
                ..
            } => *source == handle || *destination == handle,
        }
    }
}
