//! Errors shared by steps, edits and grids.
//!
//! Only two kinds of failure exist here: a broken grid invariant (a builder bug,
//! never expected in practice) and a malformed path handed to
//! [`Grid::edits_along_path`](crate::Grid::edits_along_path). Asking about a
//! coordinate outside the grid is not an error; queries return empty results.

use crate::step::Coord;

/// Errors for edit-grid operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A step was resolved before one of the predecessors its coordinate requires.
    #[error("invalid topology: step {0} is missing a required predecessor")]
    InvalidTopology(Coord),
    /// An edit without a predecessor was requested for a step other than the origin.
    #[error("step {0} has no predecessor; only the origin may start a path")]
    MissingPredecessor(Coord),
    /// The two steps are not connected by any relation of the active variant.
    #[error("invalid predecessor: {from} is not adjacent to {to}")]
    InvalidPredecessor {
        /// Claimed predecessor.
        from: Coord,
        /// Target step.
        to: Coord,
    },
    /// A diagonal-two edit was requested where the adjacent-swap test fails.
    #[error("invalid transposition: symbols at {0} are not an adjacent swap")]
    InvalidTransposition(Coord),
    /// A path coordinate lies outside the grid.
    #[error("invalid path: {coord} at position {index} is out of bounds")]
    PathOutOfBounds {
        /// Position of the offending coordinate in the path.
        index: usize,
        /// The offending coordinate.
        coord: Coord,
    },
    /// A path must begin at the origin.
    #[error("invalid path: expected the origin first, got {0}")]
    PathNotAtOrigin(Coord),
    /// Variant name not recognised by [`Variant::from_str`](crate::Variant).
    #[error("unknown variant {0:?}, expected `base` or `transposition`")]
    UnknownVariant(String),
}

/// Convenience result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
