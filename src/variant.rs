//! Variant policy: which predecessor relations a step may use.
//!
//! Step and edit logic is variant-agnostic. Everything that differs between plain
//! Levenshtein and the transposition-enabled variant (restricted Damerau-Levenshtein,
//! a.k.a. optimal string alignment) is answered here:
//!
//! - which extra predecessor a coordinate has (`diagonal_two`, two back on both axes)
//! - whether that predecessor is eligible (the adjacent-swap test)

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::Error;
use crate::step::{Coord, Window};

/// Edit-distance variant selected at grid construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Variant {
    /// Insertion, deletion and substitution.
    #[default]
    Base,
    /// Base operations plus unit-cost transposition of two adjacent symbols.
    Transposition,
}

impl Variant {
    /// Short lowercase name, accepted back by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Base => "base",
            Variant::Transposition => "transposition",
        }
    }

    /// Whether the diagonal-two relation exists at all under this variant.
    pub fn supports_transposition(self) -> bool {
        matches!(self, Variant::Transposition)
    }

    /// The extra predecessor coordinate this variant contributes at `at`, if any.
    pub fn diagonal_two(self, at: Coord) -> Option<Coord> {
        if !self.supports_transposition() || at.x < 2 || at.y < 2 {
            return None;
        }
        Some(Coord::new(at.x - 2, at.y - 2))
    }

    /// Adjacent-swap test: the last two symbols of A's prefix are the last two of
    /// B's prefix reversed, and the last symbols differ.
    ///
    /// Sentinel positions never take part in a swap, so this is false for any step
    /// closer than two cells to either edge.
    pub fn can_transpose<T: PartialEq>(self, window: &Window<T>) -> bool {
        if !self.supports_transposition() {
            return false;
        }
        let eligible = match (&window.a, &window.b) {
            ([Some(a_prev), Some(a_last)], [Some(b_prev), Some(b_last)]) => {
                a_last == b_prev && a_prev == b_last && a_last != b_last
            }
            _ => false,
        };
        if eligible {
            trace!("adjacent swap eligible");
        }
        eligible
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" | "standard" | "levenshtein" => Ok(Variant::Base),
            "transposition" | "damerau" | "osa" => Ok(Variant::Transposition),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}
