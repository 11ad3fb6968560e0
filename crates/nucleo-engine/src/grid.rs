//! Free-particle count grid.

/// Per-cell free-particle counts, stored flat in row-major rank order.
///
/// Ranks come from [`Torus2D::rank`](nucleo_space::Torus2D::rank). A cell
/// is *free* iff its count is zero; free cells are the only legal diffusion
/// destinations. A cell may hold several free particles, and the chromatin
/// may share a cell with any number of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticleGrid {
    cells: Vec<u32>,
}

impl ParticleGrid {
    /// Create an empty grid with `cell_count` cells.
    pub(crate) fn new(cell_count: usize) -> Self {
        Self {
            cells: vec![0; cell_count],
        }
    }

    /// Count at `rank`.
    pub fn count(&self, rank: usize) -> u32 {
        self.cells[rank]
    }

    /// True iff the cell at `rank` holds no particle.
    pub fn is_free(&self, rank: usize) -> bool {
        self.cells[rank] == 0
    }

    /// Total number of free particles on the grid.
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&n| u64::from(n)).sum()
    }

    /// Flat view of the counts in rank order.
    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True iff the grid has zero cells. Construction from a validated
    /// lattice always yields at least one.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Add one particle at `rank`.
    pub(crate) fn increment(&mut self, rank: usize) {
        self.cells[rank] += 1;
    }

    /// Remove one particle at `rank`. The cell must not be empty.
    pub(crate) fn decrement(&mut self, rank: usize) {
        debug_assert!(self.cells[rank] > 0, "decrement on empty cell {rank}");
        self.cells[rank] -= 1;
    }

    /// Overwrite the count at `rank`.
    pub(crate) fn set(&mut self, rank: usize, count: u32) {
        self.cells[rank] = count;
    }
}
