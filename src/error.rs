//! Error types for dicesim.
//!
//! All errors are raised synchronously at the call that detects them and are
//! never retried internally. Apart from `set_weight` (atomic per call), a
//! failing operation leaves no observable side effect.

use thiserror::Error;

/// Top-level error type for dicesim.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DiceError {
    /// Die construction saw the same face value twice.
    #[error("die faces must be distinct: {0} appears more than once")]
    DuplicateFace(String),

    /// Weight update addressed a face the die does not have.
    #[error("die has no face {0}")]
    UnknownFace(String),

    /// Weight update with a negative or non-finite weight.
    #[error("invalid weight {weight} for face {face}: weights must be finite and non-negative")]
    InvalidWeight { face: String, weight: f64 },

    /// Every face weight is zero, so no outcome can be drawn.
    #[error("all face weights are zero, nothing can be drawn")]
    ZeroWeightSum,

    /// A game was constructed with an empty dice list.
    #[error("a game needs at least one die")]
    NoDice,

    /// A die's face list differs from the first die's face list.
    #[error("die at position {position} does not share the first die's faces")]
    MismatchedFaces { position: usize },

    /// `play` called with zero rounds.
    #[error("rounds must be at least 1")]
    InvalidRounds,

    /// Results or statistics requested before any `play`.
    #[error("no results recorded yet, call play first")]
    NotPlayed,
}

/// Result type alias for dicesim.
pub type Result<T> = std::result::Result<T, DiceError>;
