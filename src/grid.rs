//! The full edit-distance grid for one `(A, B, variant)` triple.
//!
//! Steps live in a flat row-major arena of shape `(|B|+1) × (|A|+1)`:
//! \[
//! D_{y,x} = \min\big(D_{y-1,x-1} + [a_x \ne b_y],\; D_{y,x-1} + 1,\; D_{y-1,x} + 1,\;
//! D_{y-2,x-2} + 1 \text{ if } (a_{x-1},a_x) = (b_y,b_{y-1})\big)
//! \]
//! with the last term only under [`Variant::Transposition`].
//!
//! Filling rows top to bottom and columns left to right resolves every predecessor
//! before its dependents. The grid is immutable once built; all queries are reads.

use std::collections::BTreeSet;

use tracing::debug;

use crate::edit::Edit;
use crate::error::{Error, Result};
use crate::step::{Coord, Step, Window};
use crate::variant::Variant;

/// Edit-distance grid with optimal-path queries.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    a: Vec<T>,
    b: Vec<T>,
    variant: Variant,
    width: usize,
    height: usize,
    steps: Vec<Step<T>>,
}

impl Grid<char> {
    /// Build a grid over the `char`s of two strings.
    pub fn from_strs(a: &str, b: &str, variant: Variant) -> Result<Self> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        Self::new(&a, &b, variant)
    }
}

impl<T: Clone + PartialEq> Grid<T> {
    /// Build the grid turning `a` into `b` under `variant`.
    ///
    /// Only fails on a broken fill order, which would be a bug in this module.
    pub fn new(a: &[T], b: &[T], variant: Variant) -> Result<Self> {
        let width = a.len() + 1;
        let height = b.len() + 1;
        debug!(width, height, variant = variant.name(), "building edit grid");

        let mut steps: Vec<Step<T>> = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let coord = Coord::new(x, y);
                let window = Window::at(a, b, coord);
                // Row-major: a coordinate is resolved iff its index is below `steps.len()`.
                let step = Step::resolve(coord, window, variant, |p| {
                    steps.get(p.y * width + p.x).map(Step::distance)
                })?;
                steps.push(step);
            }
        }

        let grid = Self {
            a: a.to_vec(),
            b: b.to_vec(),
            variant,
            width,
            height,
            steps,
        };
        debug!(distance = grid.distance(), "edit grid built");
        Ok(grid)
    }

    /// Edits along a contiguous path, one per coordinate.
    ///
    /// The first coordinate must be the origin and is paired with no predecessor;
    /// each later one is paired with the coordinate before it. Fails if a
    /// coordinate is out of bounds, the path does not start at the origin, or two
    /// consecutive coordinates are not adjacent under this grid's variant.
    pub fn edits_along_path(&self, path: &[Coord]) -> Result<Vec<Edit<T>>> {
        let mut edits = Vec::with_capacity(path.len());
        let mut prev: Option<Coord> = None;
        for (index, &coord) in path.iter().enumerate() {
            let step = self.step(coord).ok_or(Error::PathOutOfBounds { index, coord })?;
            if index == 0 && !coord.is_origin() {
                return Err(Error::PathNotAtOrigin(coord));
            }
            edits.push(Edit::between(prev, step)?);
            prev = Some(coord);
        }
        Ok(edits)
    }

    /// Edits along [`canonical_path`](Self::canonical_path) to `target`.
    ///
    /// Empty when `target` is out of bounds.
    pub fn canonical_edits(&self, target: Coord) -> Result<Vec<Edit<T>>> {
        self.edits_along_path(&self.canonical_path(target))
    }
}

impl<T> Grid<T> {
    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.x < self.width && coord.y < self.height).then(|| coord.y * self.width + coord.x)
    }

    /// Number of columns, `|A| + 1`.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, `|B| + 1`.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Variant this grid was built with.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Bottom-right coordinate `(|A|, |B|)`.
    pub fn end(&self) -> Coord {
        Coord::new(self.width - 1, self.height - 1)
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Step at `coord`, if in bounds.
    pub fn step(&self, coord: Coord) -> Option<&Step<T>> {
        self.index(coord).map(|i| &self.steps[i])
    }

    /// Distance between the full sequences.
    pub fn distance(&self) -> usize {
        self.steps.last().map_or(0, Step::distance)
    }

    /// Distance at `coord`, if in bounds.
    pub fn distance_at(&self, coord: Coord) -> Option<usize> {
        self.step(coord).map(Step::distance)
    }

    /// All distances, one row per B-position.
    pub fn distance_matrix(&self) -> Vec<Vec<usize>> {
        self.steps
            .chunks(self.width)
            .map(|row| row.iter().map(Step::distance).collect())
            .collect()
    }

    /// Prefixes of A and B paired at `coord` (without the sentinel).
    pub fn prefixes(&self, coord: Coord) -> Option<(&[T], &[T])> {
        self.contains(coord).then(|| (&self.a[..coord.x], &self.b[..coord.y]))
    }

    /// Every coordinate lying on some optimal alignment ending at `target`.
    ///
    /// Closure of `target` under optimal-parent edges, including `target` itself.
    /// Empty if `target` is out of bounds.
    pub fn all_optimal_coordinates(&self, target: Coord) -> BTreeSet<Coord> {
        let mut seen = BTreeSet::new();
        if !self.contains(target) {
            return seen;
        }
        let mut stack = vec![target];
        while let Some(coord) = stack.pop() {
            if !seen.insert(coord) {
                continue;
            }
            if let Some(step) = self.step(coord) {
                stack.extend(step.optimal_parents().iter().filter(|p| !seen.contains(*p)));
            }
        }
        seen
    }

    /// One optimal path from the origin to `target`, following first parents.
    ///
    /// Deterministic for a fixed grid. Empty if `target` is out of bounds.
    pub fn canonical_path(&self, target: Coord) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut cursor = self.step(target);
        while let Some(step) = cursor {
            path.push(step.coord());
            cursor = step.canonical_parent().and_then(|p| self.step(p));
        }
        path.reverse();
        path
    }
}
