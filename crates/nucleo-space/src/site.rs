//! The [`Site`] lattice coordinate type.

use std::fmt;

/// A lattice coordinate: row `r`, column `c`.
///
/// Sites returned by [`Torus2D`](crate::Torus2D) operations are always
/// canonical (wrapped into bounds). Raw construction with out-of-range
/// components is permitted for arithmetic convenience; pass the result
/// through [`Torus2D::wrap`](crate::Torus2D::wrap) before ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    /// Row index.
    pub r: i32,
    /// Column index.
    pub c: i32,
}

impl Site {
    /// Create a site from row and column indices.
    pub fn new(r: i32, c: i32) -> Self {
        Self { r, c }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl From<(i32, i32)> for Site {
    fn from((r, c): (i32, i32)) -> Self {
        Self { r, c }
    }
}
