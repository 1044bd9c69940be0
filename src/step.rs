//! One cell of the edit-distance grid.
//!
//! A step at `(x, y)` pairs the prefix of A of length `x` with the prefix of B of
//! length `y`. Conceptually both prefixes start with a sentinel symbol so index 0
//! means "empty prefix"; here the sentinel is `None`.
//!
//! Predecessors are typed fields ([`Links`]) holding coordinates into the owning
//! grid, never references. Classifying an edit is then a direct field comparison.

use std::fmt;

use tracing::trace;

use crate::edit::Edit;
use crate::error::{Error, Result};
use crate::variant::Variant;

/// Grid position: `x` indexes A's prefix length, `y` indexes B's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    /// Column (length of A's prefix).
    pub x: usize,
    /// Row (length of B's prefix).
    pub y: usize,
}

impl Coord {
    /// The empty-prefix pairing.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Construct a coordinate.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// True for `(0, 0)`.
    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// The last two symbols of each prefix, `[second_last, last]`.
///
/// `None` stands for the sentinel (or for nothing at all, before it), and only
/// equals another `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window<T> {
    /// Tail of A's prefix.
    pub a: [Option<T>; 2],
    /// Tail of B's prefix.
    pub b: [Option<T>; 2],
}

impl<T: Clone> Window<T> {
    /// Window for the prefixes ending at `at`.
    pub fn at(a: &[T], b: &[T], at: Coord) -> Self {
        Self {
            a: tail(a, at.x),
            b: tail(b, at.y),
        }
    }
}

impl<T: PartialEq> Window<T> {
    /// Last symbol of A's prefix equals last symbol of B's (sentinels included).
    pub fn last_equal(&self) -> bool {
        self.a[1] == self.b[1]
    }
}

fn tail<T: Clone>(seq: &[T], len: usize) -> [Option<T>; 2] {
    let at = |back: usize| len.checked_sub(back).and_then(|i| seq.get(i)).cloned();
    [at(2), at(1)]
}

/// Structural predecessor relations of a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Links {
    /// `(x, y-1)`: consumes a symbol of B (insertion).
    pub top: Option<Coord>,
    /// `(x-1, y)`: consumes a symbol of A (deletion).
    pub left: Option<Coord>,
    /// `(x-1, y-1)`: no-op or substitution.
    pub diagonal: Option<Coord>,
    /// `(x-2, y-2)`: transposition, variant-dependent.
    pub diagonal_two: Option<Coord>,
}

impl Links {
    /// Relations that exist at `at` under `variant`.
    pub fn at(at: Coord, variant: Variant) -> Self {
        let Coord { x, y } = at;
        Self {
            top: (y > 0).then(|| Coord::new(x, y - 1)),
            left: (x > 0).then(|| Coord::new(x - 1, y)),
            diagonal: (x > 0 && y > 0).then(|| Coord::new(x - 1, y - 1)),
            diagonal_two: variant.diagonal_two(at),
        }
    }
}

/// A resolved grid cell: minimal distance plus the predecessors achieving it.
#[derive(Debug, Clone)]
pub struct Step<T> {
    coord: Coord,
    window: Window<T>,
    links: Links,
    transposable: bool,
    distance: usize,
    optimal_parents: Vec<Coord>,
}

impl<T: Clone + PartialEq> Step<T> {
    /// Resolve the step at `coord`.
    ///
    /// `distance_of` reports the distance of an already-resolved step, or `None` if
    /// that coordinate has not been built. Every predecessor the coordinate requires
    /// must already be resolved; otherwise this fails with
    /// [`Error::InvalidTopology`].
    ///
    /// Optimal parents are ordered transposition, diagonal, left, top. The first
    /// one is the canonical continuation.
    pub fn resolve<F>(
        coord: Coord,
        window: Window<T>,
        variant: Variant,
        distance_of: F,
    ) -> Result<Self>
    where
        F: Fn(Coord) -> Option<usize>,
    {
        let links = Links::at(coord, variant);
        let transposable = links.diagonal_two.is_some() && variant.can_transpose(&window);
        let mut step = Step {
            coord,
            window,
            links,
            transposable,
            distance: 0,
            optimal_parents: Vec::new(),
        };

        if coord.is_origin() {
            step.distance = if step.last_symbols_equal() { 0 } else { 1 };
            return Ok(step);
        }

        let mut candidates: Vec<(Coord, usize)> = Vec::with_capacity(4);
        for parent in step.candidates() {
            let base = distance_of(parent).ok_or(Error::InvalidTopology(coord))?;
            let edit = Edit::between(Some(parent), &step)?;
            candidates.push((parent, base + edit.cost()));
        }

        let distance = candidates
            .iter()
            .map(|&(_, d)| d)
            .min()
            .ok_or(Error::InvalidTopology(coord))?;
        step.distance = distance;
        step.optimal_parents = candidates
            .into_iter()
            .filter(|&(_, d)| d == distance)
            .map(|(p, _)| p)
            .collect();

        trace!(
            x = coord.x,
            y = coord.y,
            distance,
            parents = step.optimal_parents.len(),
            "resolved step"
        );
        Ok(step)
    }
}

impl<T> Step<T> {
    // Candidate predecessors in precedence order. Diagonal-two only counts when the
    // swap test passes, which already excludes the case where the diagonal is free.
    fn candidates(&self) -> impl Iterator<Item = Coord> {
        let two = if self.transposable {
            self.links.diagonal_two
        } else {
            None
        };
        [two, self.links.diagonal, self.links.left, self.links.top]
            .into_iter()
            .flatten()
    }

    /// Position of this step.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// True for the origin step.
    pub fn is_origin(&self) -> bool {
        self.coord.is_origin()
    }

    /// Minimal number of edits turning A's prefix into B's prefix.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Predecessors achieving `distance`, in precedence order.
    pub fn optimal_parents(&self) -> &[Coord] {
        &self.optimal_parents
    }

    /// First optimal parent; `None` only at the origin.
    pub fn canonical_parent(&self) -> Option<Coord> {
        self.optimal_parents.first().copied()
    }

    /// Structural predecessor relations.
    pub fn links(&self) -> &Links {
        &self.links
    }

    /// Last two symbols of each prefix.
    pub fn window(&self) -> &Window<T> {
        &self.window
    }

    /// Whether a diagonal-two (transposition) edit into this step is legal.
    pub fn can_transpose(&self) -> bool {
        self.transposable
    }
}

impl<T: PartialEq> Step<T> {
    /// Whether the prefixes end in the same symbol.
    pub fn last_symbols_equal(&self) -> bool {
        self.window.last_equal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(a: &str, b: &str, at: Coord) -> Window<char> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        Window::at(&a, &b, at)
    }

    // Distances for "ab" vs "ba" in the cells surrounding (2, 2).
    fn ab_ba(c: Coord) -> Option<usize> {
        match (c.x, c.y) {
            (0, 0) => Some(0),
            (1, 1) | (1, 2) | (2, 1) => Some(1),
            _ => None,
        }
    }

    #[test]
    fn origin_has_zero_distance_and_no_parents() {
        let w = window("abc", "", Coord::ORIGIN);
        let step = Step::resolve(Coord::ORIGIN, w, Variant::Base, |_| None).unwrap();
        assert_eq!(step.distance(), 0);
        assert!(step.optimal_parents().is_empty());
        assert!(step.last_symbols_equal());
    }

    #[test]
    fn window_reads_sentinel_as_none() {
        let w = window("xy", "z", Coord::new(1, 1));
        assert_eq!(w.a, [None, Some('x')]);
        assert_eq!(w.b, [None, Some('z')]);
        let w = window("xy", "z", Coord::new(2, 0));
        assert_eq!(w.a, [Some('x'), Some('y')]);
        assert_eq!(w.b, [None, None]);
    }

    #[test]
    fn links_follow_grid_edges() {
        let l = Links::at(Coord::new(0, 3), Variant::Transposition);
        assert_eq!(l.top, Some(Coord::new(0, 2)));
        assert_eq!((l.left, l.diagonal, l.diagonal_two), (None, None, None));

        let l = Links::at(Coord::new(2, 2), Variant::Transposition);
        assert_eq!(l.diagonal_two, Some(Coord::ORIGIN));
        assert_eq!(Links::at(Coord::new(2, 2), Variant::Base).diagonal_two, None);
    }

    #[test]
    fn missing_predecessor_is_a_topology_error() {
        let at = Coord::new(1, 0);
        let err = Step::resolve(at, window("a", "", at), Variant::Base, |_| None).unwrap_err();
        assert_eq!(err, Error::InvalidTopology(at));
    }

    #[test]
    fn cheaper_swap_is_the_only_parent() {
        let at = Coord::new(2, 2);
        let w = window("ab", "ba", at);
        let step = Step::resolve(at, w, Variant::Transposition, ab_ba).unwrap();
        assert!(step.can_transpose());
        assert_eq!(step.distance(), 1);
        assert_eq!(step.optimal_parents(), &[Coord::ORIGIN]);
    }

    // "xab" vs "ba" around (3, 2): the swap from (1, 0) ties with deleting 'b' from (2, 2).
    fn xab_ba(c: Coord) -> Option<usize> {
        match (c.x, c.y) {
            (1, 0) | (2, 2) => Some(1),
            (2, 1) | (3, 1) => Some(2),
            _ => None,
        }
    }

    #[test]
    fn swap_ties_are_ordered_before_left() {
        let at = Coord::new(3, 2);
        let w = window("xab", "ba", at);
        let step = Step::resolve(at, w, Variant::Transposition, xab_ba).unwrap();
        assert!(step.can_transpose());
        assert_eq!(step.distance(), 2);
        assert_eq!(step.optimal_parents(), &[Coord::new(1, 0), Coord::new(2, 2)]);
        assert_eq!(step.canonical_parent(), Some(Coord::new(1, 0)));
    }

    #[test]
    fn base_ties_are_ordered_diagonal_left_top() {
        let at = Coord::new(2, 2);
        let step = Step::resolve(at, window("ab", "ba", at), Variant::Base, ab_ba).unwrap();
        assert!(!step.can_transpose());
        assert_eq!(step.distance(), 2);
        assert_eq!(
            step.optimal_parents(),
            &[Coord::new(1, 1), Coord::new(1, 2), Coord::new(2, 1)]
        );
        assert_eq!(step.canonical_parent(), Some(Coord::new(1, 1)));
    }
}
