//! Stochastic association and dissociation between particles and monomers.
//!
//! Binding removes a particle from the free pool; the bound particle is
//! represented solely by the monomer's `associated` flag. Self-avoidance
//! guarantees monomer sites are distinct, so updates within one call
//! cannot cascade from one monomer to another.

use crate::grid::ParticleGrid;
use nucleo_space::{Site, Torus2D};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Bind free particles to unoccupied monomers with probability `k_on`.
///
/// Eligibility — monomer not associated and at least one free particle at
/// its site — is evaluated against the state at entry. A successful draw
/// sets `associated` and `repaired` and removes one particle from the
/// monomer's cell; remaining particles at the cell stay in the free pool.
pub(crate) fn associate(
    space: &Torus2D,
    protein: &mut ParticleGrid,
    chromatin: &[Site],
    associated: &mut [bool],
    repaired: &mut [bool],
    k_on: f64,
    rng: &mut ChaCha8Rng,
) {
    let eligible: Vec<usize> = (0..chromatin.len())
        .filter(|&i| !associated[i] && !protein.is_free(space.rank(chromatin[i])))
        .collect();
    for i in eligible {
        if rng.random::<f64>() < k_on {
            associated[i] = true;
            repaired[i] = true;
            protein.decrement(space.rank(chromatin[i]));
        }
    }
}

/// Release bound monomers with probability `k_off`.
///
/// A released particle returns to the free pool at the coordinate it was
/// bound to. Monomers that associated earlier in the same tick are
/// eligible; that is part of the model's tick ordering.
pub(crate) fn dissociate(
    space: &Torus2D,
    protein: &mut ParticleGrid,
    chromatin: &[Site],
    associated: &mut [bool],
    k_off: f64,
    rng: &mut ChaCha8Rng,
) {
    for i in 0..chromatin.len() {
        if associated[i] && rng.random::<f64>() < k_off {
            associated[i] = false;
            protein.increment(space.rank(chromatin[i]));
        }
    }
}

/// Unconditionally release every bound monomer (regime reset).
///
/// Restoration assigns the cell count to exactly 1 rather than
/// incrementing — observed source behaviour, kept deliberately. The
/// assertion surfaces the case where the target cell was not empty and
/// the assignment would drop particles.
pub(crate) fn release_all(
    space: &Torus2D,
    protein: &mut ParticleGrid,
    chromatin: &[Site],
    associated: &mut [bool],
) {
    for i in 0..chromatin.len() {
        if !associated[i] {
            continue;
        }
        let rank = space.rank(chromatin[i]);
        debug_assert!(
            protein.is_free(rank),
            "reset restoring a particle onto a non-empty cell {}",
            chromatin[i]
        );
        associated[i] = false;
        protein.set(rank, 1);
    }
}
