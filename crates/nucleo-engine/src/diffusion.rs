//! Density-weighted stochastic particle relocation.
//!
//! Each step relocates a sampled subset of free particles. Particles in
//! locally sparse regions score a high diffusability and may jump far;
//! particles in crowded regions are constrained to move locally. The
//! free-cell set is recomputed before every individual move, so each move
//! sees every move already applied this step — two particles can never
//! land on the same cell from one stale free-site pool. That ordering is
//! load-bearing; do not batch the destination searches.

use crate::error::StepError;
use crate::grid::ParticleGrid;
use crate::nucleus::TickId;
use crate::smoothing;
use nucleo_space::{Site, Torus2D};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Gaussian width of the local-density field, per axis.
const DENSITY_SIGMA: f64 = 0.5;

/// Relocate `round(diff_update_rate * total)` particle instances.
///
/// Sampling is uniform with replacement over particle positions: a cell
/// holding k particles has k chances per draw. A particle whose origin
/// cell has already been drained this step is skipped.
///
/// # Errors
///
/// [`StepError::ConservationViolated`] if the grid total drifts from its
/// step-start value — a fatal bookkeeping defect, never recoverable.
pub(crate) fn diffuse(
    space: &Torus2D,
    protein: &mut ParticleGrid,
    diff_rate: f64,
    diff_update_rate: f64,
    tick: TickId,
    rng: &mut ChaCha8Rng,
) -> Result<(), StepError> {
    let present = protein.total();
    let moves = (diff_update_rate * present as f64).round() as usize;
    if moves == 0 {
        return Ok(());
    }

    // Particle positions with multiplicity.
    let mut positions: Vec<usize> = Vec::with_capacity(present as usize);
    for (rank, &n) in protein.as_slice().iter().enumerate() {
        for _ in 0..n {
            positions.push(rank);
        }
    }
    let origins: Vec<usize> = (0..moves)
        .map(|_| positions[rng.random_range(0..positions.len())])
        .collect();

    let ratios = diffusability(space, protein, &origins);

    let max_radius = space.diagonal() * diff_rate;
    for (&origin, &ratio) in origins.iter().zip(&ratios) {
        // A cell drained by an earlier move cannot source another this step.
        if protein.is_free(origin) {
            continue;
        }
        let found = protein.total();
        if found != present {
            return Err(StepError::ConservationViolated {
                expected: present,
                found,
                tick,
            });
        }
        let origin_site = space.site_of(origin);
        let radius = max_radius * ratio;
        if let Some(dest) = choose_destination(space, protein, origin_site, radius, rng) {
            protein.decrement(origin);
            protein.increment(space.rank(dest));
        }
    }
    Ok(())
}

/// Per-origin diffusability scores in `[0, 1]`.
///
/// The negated smoothed density at each origin, shifted so the minimum of
/// the selected subset is zero and divided by the subset maximum. When
/// every selected origin sees the same density the scores degenerate to
/// 0/0; all origins are then treated as fully diffusable.
fn diffusability(space: &Torus2D, protein: &ParticleGrid, origins: &[usize]) -> Vec<f64> {
    let density = smoothing::gaussian_smooth(space, protein.as_slice(), DENSITY_SIGMA);
    let raw: Vec<f64> = origins.iter().map(|&rank| -density[rank]).collect();
    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let range = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max) - min;
    if range > 0.0 {
        raw.iter().map(|v| (v - min) / range).collect()
    } else {
        vec![1.0; raw.len()]
    }
}

/// Pick a destination for one move.
///
/// Uniform among the free cells with toroidal distance strictly below
/// `radius`; when none qualify, the globally nearest free cell, ties
/// broken by first occurrence in row-major scan order. `None` when the
/// lattice holds no free cell at all (the move is skipped).
fn choose_destination(
    space: &Torus2D,
    protein: &ParticleGrid,
    origin: Site,
    radius: f64,
    rng: &mut ChaCha8Rng,
) -> Option<Site> {
    let mut in_radius: Vec<Site> = Vec::new();
    let mut nearest: Option<(u32, Site)> = None;
    for rank in 0..space.cell_count() {
        if !protein.is_free(rank) {
            continue;
        }
        let site = space.site_of(rank);
        let d = space.distance(origin, site);
        if f64::from(d) < radius {
            in_radius.push(site);
        }
        if nearest.is_none_or(|(best, _)| d < best) {
            nearest = Some((d, site));
        }
    }
    if in_radius.is_empty() {
        nearest.map(|(_, site)| site)
    } else {
        Some(in_radius[rng.random_range(0..in_radius.len())])
    }
}
