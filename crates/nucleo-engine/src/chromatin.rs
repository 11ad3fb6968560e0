//! Self-avoiding chromatin walk construction.
//!
//! The walk is built once at nucleus construction and never modified. It
//! marches with a fixed heading, turning into the 3×3 neighbourhood when
//! blocked or when a turn event fires, and teleporting to a random free
//! cell when fully trapped — the fallback is what guarantees the walk
//! always reaches its configured length on a finite torus.

use nucleo_space::{Site, Torus2D};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

/// Heading applied on a straight step: one cell up (row − 1).
///
/// The reference model keeps a single heading for the whole walk; turns
/// happen through neighbourhood jumps, not by changing the heading.
const HEADING: (i32, i32) = (-1, 0);

/// Build a self-avoiding walk of `len` distinct sites in backbone order.
///
/// Returns the backbone and the flat occupancy mask (exactly `len` set
/// cells). Each step continues straight unless the cell ahead is occupied
/// or a turn event fires with probability `turn_rate`; a turn picks
/// uniformly among the free cells of the Moore neighbourhood. A trapped
/// walk jumps to a uniformly random free cell anywhere on the lattice,
/// permitting rare backbone discontinuities. Near full lattice occupancy
/// the jumps dominate; that is expected, not an error.
///
/// Callers guarantee `1 <= len <= space.cell_count()`.
pub(crate) fn build_walk(
    space: &Torus2D,
    len: usize,
    turn_rate: f64,
    rng: &mut ChaCha8Rng,
) -> (Vec<Site>, Vec<bool>) {
    debug_assert!(len >= 1 && len <= space.cell_count());
    let mut map = vec![false; space.cell_count()];
    let mut walk = Vec::with_capacity(len);

    let start = Site::new(
        rng.random_range(0..space.rows() as i32),
        rng.random_range(0..space.cols() as i32),
    );
    map[space.rank(start)] = true;
    walk.push(start);

    let mut curr = start;
    while walk.len() < len {
        let ahead = space.offset(curr, HEADING.0, HEADING.1);
        let next = if !map[space.rank(ahead)] && rng.random::<f64>() >= turn_rate {
            ahead
        } else {
            let free: SmallVec<[Site; 8]> = space
                .moore_neighbours(curr)
                .into_iter()
                .filter(|&s| !map[space.rank(s)])
                .collect();
            if free.is_empty() {
                // Trapped: teleport the backbone to a random free cell.
                let open: Vec<usize> = (0..map.len()).filter(|&i| !map[i]).collect();
                space.site_of(open[rng.random_range(0..open.len())])
            } else {
                free[rng.random_range(0..free.len())]
            }
        };
        map[space.rank(next)] = true;
        walk.push(next);
        curr = next;
    }
    (walk, map)
}
