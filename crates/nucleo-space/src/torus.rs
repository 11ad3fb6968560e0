//! 2D lattice with periodic (torus) boundaries.

use crate::error::SpaceError;
use crate::site::Site;
use smallvec::SmallVec;

/// A fixed-size 2D lattice where both axes wrap around.
///
/// Cells have coordinate `(row, col)` with `0 <= row < rows` and
/// `0 <= col < cols`; all arithmetic is modulo the lattice dimensions.
/// Distance is toroidal L1: per axis the minimum of the direct and the
/// wraparound separation, summed across axes. This metric — never the
/// straight-line Euclidean one — governs every neighbour and search
/// operation, so that searches stay consistent with wraparound.
///
/// # Examples
///
/// ```
/// use nucleo_space::{Site, Torus2D};
///
/// let t = Torus2D::new(10, 10).unwrap();
/// // Direct: 9 + 9 = 18; wrapped: 1 + 1 = 2.
/// assert_eq!(t.distance(Site::new(0, 0), Site::new(9, 9)), 2);
/// assert_eq!(t.wrap(Site::new(-1, 10)), Site::new(9, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Torus2D {
    rows: u32,
    cols: u32,
}

impl Torus2D {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a lattice with `rows * cols` cells.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::EmptySpace`] if either dimension is 0, or
    /// [`SpaceError::DimensionTooLarge`] if either exceeds [`Self::MAX_DIM`].
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Euclidean length of the lattice diagonal, `sqrt(rows² + cols²)`.
    ///
    /// Used as the upper scale when deriving diffusion search radii.
    pub fn diagonal(&self) -> f64 {
        let r = self.rows as f64;
        let c = self.cols as f64;
        (r * r + c * c).sqrt()
    }

    /// Wrap an arbitrary site into canonical bounds.
    pub fn wrap(&self, site: Site) -> Site {
        Site {
            r: wrap_axis(site.r, self.rows),
            c: wrap_axis(site.c, self.cols),
        }
    }

    /// The site reached from `site` by moving `(dr, dc)`, wrapped.
    pub fn offset(&self, site: Site, dr: i32, dc: i32) -> Site {
        self.wrap(Site::new(site.r + dr, site.c + dc))
    }

    /// Toroidal L1 distance between two canonical sites.
    pub fn distance(&self, a: Site, b: Site) -> u32 {
        axis_distance(a.r, b.r, self.rows) + axis_distance(a.c, b.c, self.cols)
    }

    /// Row-major flat rank of a canonical site.
    pub fn rank(&self, site: Site) -> usize {
        debug_assert!(site.r >= 0 && (site.r as u32) < self.rows, "row out of bounds");
        debug_assert!(site.c >= 0 && (site.c as u32) < self.cols, "col out of bounds");
        (site.r as usize) * (self.cols as usize) + (site.c as usize)
    }

    /// Inverse of [`rank`](Self::rank).
    pub fn site_of(&self, rank: usize) -> Site {
        debug_assert!(rank < self.cell_count(), "rank out of bounds");
        let cols = self.cols as usize;
        Site::new((rank / cols) as i32, (rank % cols) as i32)
    }

    /// The 3×3 Moore neighbourhood of `site`, centre excluded, wrapped.
    ///
    /// Degenerate lattices (an axis of size 1 or 2) fold some of the eight
    /// offsets onto each other or onto the centre; duplicates and the
    /// centre itself are removed.
    pub fn moore_neighbours(&self, site: Site) -> SmallVec<[Site; 8]> {
        let mut result: SmallVec<[Site; 8]> = SmallVec::new();
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let nb = self.offset(site, dr, dc);
                if nb != site && !result.contains(&nb) {
                    result.push(nb);
                }
            }
        }
        result
    }
}

fn wrap_axis(v: i32, len: u32) -> i32 {
    let n = len as i32;
    ((v % n) + n) % n
}

fn axis_distance(a: i32, b: i32, len: u32) -> u32 {
    let direct = (a - b).unsigned_abs();
    direct.min(len - direct)
}
