//! Crate-wide error type.

use thiserror::Error;

use crate::container::ContainerKind;

/// Coarse classification of an [`Error`].
///
/// Argument errors mean the caller supplied an out-of-contract value; state
/// errors mean the operation is invalid for the current lifecycle or
/// container category. Registry lookup misses are represented as `None` and
/// never surface here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Argument,
    State,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("row count {rows} is outside the supported range 1..=6")]
    RowCountOutOfRange { rows: usize },

    #[error("row pattern {pattern:?} is not valid: {reason}")]
    InvalidRowPattern {
        pattern: String,
        reason: &'static str,
    },

    #[error("letter '{letter}' does not occur anywhere in the shape")]
    LetterNotInShape { letter: char },

    #[error("letter '{letter}' is not mapped to any content")]
    LetterUnmapped { letter: char },

    #[error("size {size} must be a multiple of 9 within 9..=54")]
    InvalidSize { size: usize },

    #[error("size {size} does not match the attached shape, which mandates {expected} slots")]
    SizeShapeMismatch { size: usize, expected: usize },

    #[error("container kind {kind:?} has a fixed layout and rejects an explicit size")]
    ExplicitSizeUnsupported { kind: ContainerKind },

    #[error("slot index {index} is outside the staged range 0..{len}")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("container kind {kind:?} cannot be shaped")]
    ShapeUnsupported { kind: ContainerKind },

    #[error("container has already been built")]
    AlreadyBuilt,

    #[error("container has not been built yet")]
    NotBuilt,

    #[error("unrecognized event kind {name:?}")]
    UnrecognizedEventKind { name: String },
}

impl Error {
    /// Classify this error per the argument/state split.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::RowCountOutOfRange { .. }
            | Error::InvalidRowPattern { .. }
            | Error::LetterNotInShape { .. }
            | Error::InvalidSize { .. }
            | Error::SizeShapeMismatch { .. }
            | Error::ExplicitSizeUnsupported { .. }
            | Error::SlotOutOfRange { .. }
            | Error::UnrecognizedEventKind { .. } => ErrorCategory::Argument,
            Error::LetterUnmapped { .. }
            | Error::ShapeUnsupported { .. }
            | Error::AlreadyBuilt
            | Error::NotBuilt => ErrorCategory::State,
        }
    }
}
