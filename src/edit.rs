//! Typed transitions between steps.
//!
//! An edit is derived from *which* relation connects a predecessor to its target,
//! not from re-comparing symbols. The only symbol check is on the diagonal, where
//! equal last symbols make a free no-op and anything else a substitution.

use std::fmt;

use crate::error::{Error, Result};
use crate::step::{Coord, Step};

/// Payload-free tag of an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum EditKind {
    /// Symbols already match.
    Noop,
    /// A symbol of B is inserted.
    Insertion,
    /// A symbol of A is deleted.
    Deletion,
    /// A symbol of A is replaced by a symbol of B.
    Substitution,
    /// Two adjacent symbols of A are swapped.
    Transposition,
}

impl EditKind {
    /// Lowercase name (`"none"` for [`EditKind::Noop`]).
    pub fn name(self) -> &'static str {
        match self {
            EditKind::Noop => "none",
            EditKind::Insertion => "insertion",
            EditKind::Deletion => "deletion",
            EditKind::Substitution => "substitution",
            EditKind::Transposition => "transposition",
        }
    }

    /// Unit cost for every real edit, zero for a no-op.
    pub fn cost(self) -> usize {
        match self {
            EditKind::Noop => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Edit operation together with the symbols it touches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum EditOp<T> {
    /// Symbols already match.
    Noop,
    /// Inserted symbol (last of B's prefix).
    Insertion(T),
    /// Deleted symbol (last of A's prefix).
    Deletion(T),
    /// Replaced symbol pair.
    Substitution {
        /// Last symbol of A's prefix.
        deleted: T,
        /// Last symbol of B's prefix.
        inserted: T,
    },
    /// Swapped pair, in A's order.
    Transposition {
        /// Second-to-last symbol of A's prefix.
        first: T,
        /// Last symbol of A's prefix.
        second: T,
    },
}

impl<T> EditOp<T> {
    /// Tag of this operation.
    pub fn kind(&self) -> EditKind {
        match self {
            EditOp::Noop => EditKind::Noop,
            EditOp::Insertion(_) => EditKind::Insertion,
            EditOp::Deletion(_) => EditKind::Deletion,
            EditOp::Substitution { .. } => EditKind::Substitution,
            EditOp::Transposition { .. } => EditKind::Transposition,
        }
    }
}

/// Transition consumed when moving from `from` (absent at the origin) to `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edit<T> {
    /// Predecessor coordinate; `None` only when `to` is the origin.
    pub from: Option<Coord>,
    /// Target coordinate.
    pub to: Coord,
    /// Operation and payload.
    pub op: EditOp<T>,
}

impl<T: Clone + PartialEq> Edit<T> {
    /// Classify the transition from `from` into `to`.
    ///
    /// `from` is compared against the target's recorded relations:
    /// absent (origin only) or diagonal gives a no-op or substitution, top an
    /// insertion, left a deletion, diagonal-two a transposition. Anything else is
    /// not adjacent under the grid's variant.
    pub fn between(from: Option<Coord>, to: &Step<T>) -> Result<Self> {
        let target = to.coord();
        let links = to.links();
        let window = to.window();

        let op = match from {
            None if to.is_origin() => diagonal_op(to)?,
            None => return Err(Error::MissingPredecessor(target)),
            Some(p) if links.diagonal_two == Some(p) => {
                if !to.can_transpose() {
                    return Err(Error::InvalidTransposition(target));
                }
                match &window.a {
                    [Some(first), Some(second)] => EditOp::Transposition {
                        first: first.clone(),
                        second: second.clone(),
                    },
                    _ => return Err(Error::InvalidTransposition(target)),
                }
            }
            Some(p) if links.diagonal == Some(p) => diagonal_op(to)?,
            Some(p) if links.top == Some(p) => match &window.b[1] {
                Some(s) => EditOp::Insertion(s.clone()),
                None => return Err(Error::InvalidTopology(target)),
            },
            Some(p) if links.left == Some(p) => match &window.a[1] {
                Some(s) => EditOp::Deletion(s.clone()),
                None => return Err(Error::InvalidTopology(target)),
            },
            Some(p) => return Err(Error::InvalidPredecessor { from: p, to: target }),
        };

        Ok(Self { from, to: target, op })
    }
}

fn diagonal_op<T: Clone + PartialEq>(to: &Step<T>) -> Result<EditOp<T>> {
    if to.last_symbols_equal() {
        return Ok(EditOp::Noop);
    }
    let window = to.window();
    match (&window.a[1], &window.b[1]) {
        (Some(deleted), Some(inserted)) => Ok(EditOp::Substitution {
            deleted: deleted.clone(),
            inserted: inserted.clone(),
        }),
        _ => Err(Error::InvalidTopology(to.coord())),
    }
}

impl<T> Edit<T> {
    /// Tag of this edit.
    pub fn kind(&self) -> EditKind {
        self.op.kind()
    }

    /// 0 for a no-op, 1 otherwise.
    pub fn cost(&self) -> usize {
        self.kind().cost()
    }

    /// True when nothing changes.
    pub fn is_noop(&self) -> bool {
        self.cost() == 0
    }

    /// Symbol removed from A, for deletions and substitutions.
    pub fn deleted(&self) -> Option<&T> {
        match &self.op {
            EditOp::Deletion(s) | EditOp::Substitution { deleted: s, .. } => Some(s),
            _ => None,
        }
    }

    /// Symbol taken from B, for insertions and substitutions.
    pub fn inserted(&self) -> Option<&T> {
        match &self.op {
            EditOp::Insertion(s) | EditOp::Substitution { inserted: s, .. } => Some(s),
            _ => None,
        }
    }

    /// Swapped pair in A's order, for transpositions.
    pub fn transposed(&self) -> Option<(&T, &T)> {
        match &self.op {
            EditOp::Transposition { first, second } => Some((first, second)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grid, Variant};

    fn grid(a: &str, b: &str, variant: Variant) -> Grid<char> {
        Grid::from_strs(a, b, variant).unwrap()
    }

    fn edit(
        g: &Grid<char>,
        from: Option<(usize, usize)>,
        to: (usize, usize),
    ) -> Result<Edit<char>> {
        let step = g.step(to.into()).unwrap();
        Edit::between(from.map(Coord::from), step)
    }

    #[test]
    fn origin_edit_is_a_noop() {
        let g = grid("abc", "xyz", Variant::Base);
        let e = edit(&g, None, (0, 0)).unwrap();
        assert_eq!(e.op, EditOp::Noop);
        assert_eq!(e.from, None);
        assert_eq!(e.cost(), 0);
    }

    #[test]
    fn diagonal_is_noop_or_substitution() {
        let g = grid("ab", "ac", Variant::Base);
        assert!(edit(&g, Some((0, 0)), (1, 1)).unwrap().is_noop());

        let e = edit(&g, Some((1, 1)), (2, 2)).unwrap();
        assert_eq!(e.op, EditOp::Substitution { deleted: 'b', inserted: 'c' });
        assert_eq!(e.deleted(), Some(&'b'));
        assert_eq!(e.inserted(), Some(&'c'));
        assert_eq!(e.cost(), 1);
    }

    #[test]
    fn top_inserts_and_left_deletes() {
        let g = grid("ab", "xy", Variant::Base);
        let ins = edit(&g, Some((1, 0)), (1, 1)).unwrap();
        assert_eq!(ins.op, EditOp::Insertion('x'));
        assert_eq!(ins.deleted(), None);

        let del = edit(&g, Some((1, 2)), (2, 2)).unwrap();
        assert_eq!(del.op, EditOp::Deletion('b'));
        assert_eq!(del.kind(), EditKind::Deletion);
    }

    #[test]
    fn transposition_carries_a_pair_in_a_order() {
        let g = grid("ab", "ba", Variant::Transposition);
        let e = edit(&g, Some((0, 0)), (2, 2)).unwrap();
        assert_eq!(e.op, EditOp::Transposition { first: 'a', second: 'b' });
        assert_eq!(e.transposed(), Some((&'a', &'b')));
        assert_eq!(e.cost(), 1);
    }

    #[test]
    fn ineligible_diagonal_two_is_rejected() {
        let g = grid("ab", "ab", Variant::Transposition);
        let err = edit(&g, Some((0, 0)), (2, 2)).unwrap_err();
        assert_eq!(err, Error::InvalidTransposition(Coord::new(2, 2)));
    }

    #[test]
    fn non_adjacent_steps_are_rejected() {
        let g = grid("ab", "ba", Variant::Base);
        let err = edit(&g, Some((0, 0)), (2, 2)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidPredecessor { from: Coord::ORIGIN, to: Coord::new(2, 2) }
        );
        assert!(matches!(
            edit(&g, Some((2, 2)), (1, 1)),
            Err(Error::InvalidPredecessor { .. })
        ));
    }

    #[test]
    fn missing_predecessor_away_from_origin() {
        let g = grid("ab", "ba", Variant::Base);
        assert_eq!(
            edit(&g, None, (1, 1)).unwrap_err(),
            Error::MissingPredecessor(Coord::new(1, 1))
        );
    }

    #[test]
    fn kind_names() {
        assert_eq!(EditKind::Noop.to_string(), "none");
        assert_eq!(EditKind::Transposition.name(), "transposition");
        assert_eq!(EditKind::Insertion.cost(), 1);
    }
}
