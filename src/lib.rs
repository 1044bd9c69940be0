//! Edit distance with every optimal alignment exposed.
//!
//! Beyond the scalar distance, a [`Grid`] answers which cells lie on *some*
//! minimum-cost alignment, picks one canonical alignment deterministically, and
//! turns any alignment into typed [`Edit`]s (insertion, deletion, substitution and,
//! under [`Variant::Transposition`], adjacent transposition).
//!
//! Public invariants (must not change):
//! - Grids are immutable after construction; every query is a pure read.
//! - Symbols are atomic (`T: Clone + PartialEq`); strings are split into `char`s.
//! - Canonical paths are deterministic: parents are preferred in the order
//!   transposition, diagonal, left, top.
//! - Out-of-range queries yield empty results; only malformed paths are errors.
//!
//! ```
//! use editgrid::{EditKind, Grid, Variant};
//!
//! let grid = Grid::from_strs("WORM", "FROM", Variant::Transposition).unwrap();
//! assert_eq!(grid.distance(), 2);
//!
//! let edits = grid.canonical_edits(grid.end()).unwrap();
//! assert_eq!(edits.iter().filter(|e| e.kind() == EditKind::Transposition).count(), 1);
//! ```

pub mod edit;
pub mod error;
pub mod grid;
pub mod step;
pub mod variant;

pub use edit::{Edit, EditKind, EditOp};
pub use error::{Error, Result};
pub use grid::Grid;
pub use step::{Coord, Links, Step, Window};
pub use variant::Variant;
