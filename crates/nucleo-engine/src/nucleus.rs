//! The [`Nucleus`] simulation state aggregate.

use crate::config::{check_rate, ConfigError, NucleusConfig};
use crate::error::StepError;
use crate::grid::ParticleGrid;
use crate::{chromatin, diffusion, kinetics};
use nucleo_space::{Site, Torus2D};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation advances one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Full state of one simulated nucleus.
///
/// Owns the lattice, the free-particle grid, the chromatin walk with its
/// occupancy mask, the per-monomer `associated`/`repaired` flags, the
/// kinetic rates, and the RNG. There is exactly one logical thread of
/// control: [`tick`](Self::tick) and [`reset`](Self::reset) take `&mut self`
/// and the read-only accessors expose state to external drivers and
/// renderers between ticks.
pub struct Nucleus {
    space: Torus2D,
    protein: ParticleGrid,
    chromatin: Vec<Site>,
    chromatin_map: Vec<bool>,
    associated: Vec<bool>,
    repaired: Vec<bool>,
    k_on: f64,
    k_off: f64,
    diff_rate: f64,
    diff_update_rate: f64,
    rng: ChaCha8Rng,
    tick: TickId,
}

impl Nucleus {
    /// Build a nucleus from a validated configuration.
    ///
    /// Constructs the lattice, grows the chromatin walk, and seeds the
    /// initial particles — either a Bernoulli fill at `p_init`, or a
    /// centred block of ones spanning ±10% of each dimension when
    /// `p_init` is negative.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`NucleusConfig::validate`], before any
    /// simulation state is built.
    pub fn new(config: NucleusConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let space = Torus2D::new(config.rows, config.cols).map_err(ConfigError::Space)?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        let (chromatin, chromatin_map) =
            chromatin::build_walk(&space, config.chromatin_len, config.turn_rate, &mut rng);

        let mut protein = ParticleGrid::new(space.cell_count());
        if config.p_init < 0.0 {
            seed_centre_block(&space, &mut protein);
        } else {
            for rank in 0..space.cell_count() {
                if rng.random::<f64>() < config.p_init {
                    protein.set(rank, 1);
                }
            }
        }

        let len = config.chromatin_len;
        Ok(Self {
            space,
            protein,
            chromatin,
            chromatin_map,
            associated: vec![false; len],
            repaired: vec![false; len],
            k_on: config.k_on,
            k_off: config.k_off,
            diff_rate: config.diff_rate,
            diff_update_rate: config.diff_update_rate,
            rng,
            tick: TickId(0),
        })
    }

    /// Advance the simulation by exactly one step.
    ///
    /// Runs the fixed pipeline Diffusion → Associate → Dissociate. The
    /// ordering is part of the model: a particle that diffuses onto a
    /// monomer's cell this tick may associate in the same tick, and a
    /// monomer that associates this tick may dissociate in the same tick.
    ///
    /// # Errors
    ///
    /// [`StepError::ConservationViolated`] if diffusion bookkeeping is
    /// found corrupted; the run must stop.
    pub fn tick(&mut self) -> Result<(), StepError> {
        diffusion::diffuse(
            &self.space,
            &mut self.protein,
            self.diff_rate,
            self.diff_update_rate,
            self.tick,
            &mut self.rng,
        )?;
        kinetics::associate(
            &self.space,
            &mut self.protein,
            &self.chromatin,
            &mut self.associated,
            &mut self.repaired,
            self.k_on,
            &mut self.rng,
        );
        kinetics::dissociate(
            &self.space,
            &mut self.protein,
            &self.chromatin,
            &mut self.associated,
            self.k_off,
            &mut self.rng,
        );
        self.tick = TickId(self.tick.0 + 1);
        Ok(())
    }

    /// Regime reset: release every bound particle and install new rates.
    ///
    /// Clears all `repaired` flags, returns each bound particle to its
    /// monomer's coordinate (setting the cell count to exactly 1 — see
    /// [`kinetics`] module notes), then overwrites `k_on`/`k_off`. May be
    /// invoked between any two ticks.
    ///
    /// # Errors
    ///
    /// [`ConfigError::RateOutOfRange`] when a new rate is outside `[0, 1]`;
    /// the nucleus is left untouched in that case.
    pub fn reset(&mut self, new_k_on: f64, new_k_off: f64) -> Result<(), ConfigError> {
        check_rate("k_on", new_k_on)?;
        check_rate("k_off", new_k_off)?;

        self.repaired.fill(false);
        kinetics::release_all(
            &self.space,
            &mut self.protein,
            &self.chromatin,
            &mut self.associated,
        );
        self.k_on = new_k_on;
        self.k_off = new_k_off;
        Ok(())
    }

    /// Deposit one free particle at `site` (wrapped into bounds).
    ///
    /// For drivers building bespoke initial conditions before the first
    /// tick. Calling it mid-run grows the conserved particle total.
    pub fn place_particle(&mut self, site: Site) {
        let rank = self.space.rank(self.space.wrap(site));
        let count = self.protein.count(rank);
        self.protein.set(rank, count + 1);
    }

    // ── Read-only state accessors ──────────────────────────────────

    /// The lattice.
    pub fn space(&self) -> &Torus2D {
        &self.space
    }

    /// Free-particle counts in rank order.
    pub fn protein(&self) -> &ParticleGrid {
        &self.protein
    }

    /// The chromatin backbone in monomer order.
    pub fn chromatin(&self) -> &[Site] {
        &self.chromatin
    }

    /// Flat occupancy mask: true where some monomer sits.
    pub fn chromatin_map(&self) -> &[bool] {
        &self.chromatin_map
    }

    /// Per-monomer binding flags.
    pub fn associated(&self) -> &[bool] {
        &self.associated
    }

    /// Per-monomer visited flags; monotone between resets.
    pub fn repaired(&self) -> &[bool] {
        &self.repaired
    }

    /// Current binding probability.
    pub fn k_on(&self) -> f64 {
        self.k_on
    }

    /// Current unbinding probability.
    pub fn k_off(&self) -> f64 {
        self.k_off
    }

    /// Ticks completed so far.
    pub fn tick_id(&self) -> TickId {
        self.tick
    }

    /// Total free particles on the lattice.
    pub fn free_particles(&self) -> u64 {
        self.protein.total()
    }

    /// Number of currently bound monomers.
    pub fn bound_count(&self) -> usize {
        self.associated.iter().filter(|&&a| a).count()
    }
}

/// Fill a centred block spanning ±10% of each dimension with one particle
/// per cell. Dimensions below 10 produce an empty extent on that axis and
/// thus no particles, matching the reference initialisation.
fn seed_centre_block(space: &Torus2D, protein: &mut ParticleGrid) {
    let half_r = (0.1 * space.rows() as f64) as i32;
    let half_c = (0.1 * space.cols() as f64) as i32;
    let mid_r = space.rows() as i32 / 2;
    let mid_c = space.cols() as i32 / 2;
    for r in (mid_r - half_r)..(mid_r + half_r) {
        for c in (mid_c - half_c)..(mid_c + half_c) {
            protein.set(space.rank(Site::new(r, c)), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(seed: u64) -> NucleusConfig {
        NucleusConfig {
            rows: 16,
            cols: 16,
            chromatin_len: 40,
            p_init: 0.2,
            seed,
            ..Default::default()
        }
    }

    #[test]
    fn construction_rejects_invalid_config() {
        let config = NucleusConfig {
            chromatin_len: 0,
            ..small_config(0)
        };
        assert!(matches!(
            Nucleus::new(config),
            Err(ConfigError::ChromatinEmpty)
        ));
    }

    #[test]
    fn chromatin_state_sizes_match() {
        let nucl = Nucleus::new(small_config(1)).unwrap();
        assert_eq!(nucl.chromatin().len(), 40);
        assert_eq!(nucl.associated().len(), 40);
        assert_eq!(nucl.repaired().len(), 40);
        assert_eq!(
            nucl.chromatin_map().iter().filter(|&&b| b).count(),
            40
        );
    }

    #[test]
    fn centre_block_initialisation() {
        let config = NucleusConfig {
            rows: 20,
            cols: 20,
            chromatin_len: 30,
            p_init: -1.0,
            seed: 2,
            ..Default::default()
        };
        let nucl = Nucleus::new(config).unwrap();
        // ±10% of 20 is a 4×4 block centred on (10, 10).
        assert_eq!(nucl.free_particles(), 16);
        let space = nucl.space();
        for r in 8..12 {
            for c in 8..12 {
                assert_eq!(nucl.protein().count(space.rank(Site::new(r, c))), 1);
            }
        }
    }

    #[test]
    fn tick_advances_the_counter() {
        let mut nucl = Nucleus::new(small_config(3)).unwrap();
        assert_eq!(nucl.tick_id(), TickId(0));
        nucl.tick().unwrap();
        nucl.tick().unwrap();
        assert_eq!(nucl.tick_id(), TickId(2));
    }

    #[test]
    fn reset_rejects_bad_rates() {
        let mut nucl = Nucleus::new(small_config(4)).unwrap();
        assert!(nucl.reset(1.5, 0.1).is_err());
        assert!(nucl.reset(0.1, f64::NAN).is_err());
        // Untouched on failure.
        assert_eq!(nucl.k_on(), 0.4);
        assert_eq!(nucl.k_off(), 0.1);
    }

    #[test]
    fn reset_installs_exact_rates() {
        let mut nucl = Nucleus::new(small_config(5)).unwrap();
        nucl.reset(0.7, 0.25).unwrap();
        assert_eq!(nucl.k_on(), 0.7);
        assert_eq!(nucl.k_off(), 0.25);
    }

    #[test]
    fn place_particle_wraps_and_accumulates() {
        let mut nucl = Nucleus::new(NucleusConfig {
            p_init: -1.0,
            rows: 8,
            cols: 8,
            chromatin_len: 10,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(nucl.free_particles(), 0); // block extent is empty at 8x8
        nucl.place_particle(Site::new(-1, 9));
        nucl.place_particle(Site::new(7, 1));
        let rank = nucl.space().rank(Site::new(7, 1));
        assert_eq!(nucl.protein().count(rank), 2);
    }
}
