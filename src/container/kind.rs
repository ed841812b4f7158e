//! Container categories.

/// Category of a container.
///
/// Only [`Grid`](ContainerKind::Grid) supports dynamic sizing and shaping;
/// every other kind realizes with a layout fixed by the kind itself.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ContainerKind {
    /// Row-based storage grid, nine columns per row, 1 to 6 rows.
    Grid,
    /// Three-by-three panel of 9 slots.
    Panel,
    /// Single-row strip of 5 slots.
    Strip,
}

/// Slot count a grid realizes with when neither a shape nor an explicit size
/// dictates one (three rows).
pub const DEFAULT_GRID_SIZE: usize = 27;

/// Smallest and largest realizable grid sizes (one and six rows).
pub const MIN_GRID_SIZE: usize = 9;
pub const MAX_GRID_SIZE: usize = 54;

impl ContainerKind {
    /// The size this kind always realizes with, or `None` for [`Grid`].
    ///
    /// [`Grid`]: ContainerKind::Grid
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            ContainerKind::Grid => None,
            ContainerKind::Panel => Some(9),
            ContainerKind::Strip => Some(5),
        }
    }

    /// Staged slot count a fresh container of this kind starts with.
    pub fn default_size(self) -> usize {
        self.fixed_size().unwrap_or(DEFAULT_GRID_SIZE)
    }

    /// Whether a [`crate::ShapeGrid`] may be attached to this kind.
    pub fn supports_shaping(self) -> bool {
        matches!(self, ContainerKind::Grid)
    }
}
