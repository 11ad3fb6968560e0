//! Nucleus configuration, validation, and error types.
//!
//! [`NucleusConfig`] is the construction input for [`Nucleus`](crate::Nucleus).
//! [`validate()`](NucleusConfig::validate) checks structural invariants
//! before any simulation state is built, so a bad configuration fails fast.

use nucleo_space::{SpaceError, Torus2D};
use std::error::Error;
use std::fmt;

/// Configuration for constructing a [`Nucleus`](crate::Nucleus).
///
/// Defaults reproduce the reference parameterization: a 100×100 lattice,
/// a 3600-monomer chromatin walk, and a 15% random initial fill.
#[derive(Clone, Debug, PartialEq)]
pub struct NucleusConfig {
    /// Scales the diffusion search radius as a fraction of the lattice
    /// diagonal. Zero collapses every move to the nearest free cell.
    /// Default: 0.5.
    pub diff_rate: f64,
    /// Fraction of free particles relocated per tick. Default: 0.1.
    pub diff_update_rate: f64,
    /// Per-tick binding probability for an eligible monomer. Default: 0.4.
    pub k_on: f64,
    /// Per-tick unbinding probability for a bound monomer. Default: 0.1.
    pub k_off: f64,
    /// Lattice rows. Default: 100.
    pub rows: u32,
    /// Lattice columns. Default: 100.
    pub cols: u32,
    /// Chromatin length in monomers. Must fit on the lattice. Default: 3600.
    pub chromatin_len: usize,
    /// Initial particle placement: a fraction in (0, 1) fills each cell
    /// with one particle with that probability; any negative value places
    /// a centred block of ones spanning ±10% of each dimension. Default: 0.15.
    pub p_init: f64,
    /// Probability of a direction-change event per walk step. Default: 0.6.
    pub turn_rate: f64,
    /// RNG seed. Identical seeds yield bit-identical runs. Default: 0.
    pub seed: u64,
}

impl Default for NucleusConfig {
    fn default() -> Self {
        Self {
            diff_rate: 0.5,
            diff_update_rate: 0.1,
            k_on: 0.4,
            k_off: 0.1,
            rows: 100,
            cols: 100,
            chromatin_len: 3600,
            p_init: 0.15,
            turn_rate: 0.6,
            seed: 0,
        }
    }
}

impl NucleusConfig {
    /// Validate structural invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first violated invariant:
    /// lattice dimensions, chromatin capacity, probability ranges, or the
    /// initial-fill fraction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let space = Torus2D::new(self.rows, self.cols).map_err(ConfigError::Space)?;

        if self.chromatin_len == 0 {
            return Err(ConfigError::ChromatinEmpty);
        }
        if self.chromatin_len > space.cell_count() {
            return Err(ConfigError::ChromatinTooLong {
                len: self.chromatin_len,
                capacity: space.cell_count(),
            });
        }

        check_rate("diff_rate", self.diff_rate)?;
        check_rate("diff_update_rate", self.diff_update_rate)?;
        check_rate("k_on", self.k_on)?;
        check_rate("k_off", self.k_off)?;
        check_rate("turn_rate", self.turn_rate)?;

        // Negative is the centred-block sentinel; otherwise a strict fraction.
        if self.p_init >= 0.0 && !(self.p_init > 0.0 && self.p_init < 1.0) {
            return Err(ConfigError::InvalidInitFraction { value: self.p_init });
        }
        if !self.p_init.is_finite() {
            return Err(ConfigError::InvalidInitFraction { value: self.p_init });
        }

        Ok(())
    }
}

/// Check that a probability parameter lies in `[0, 1]` and is finite.
pub(crate) fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}

/// Errors detected during [`NucleusConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Lattice construction failed.
    Space(SpaceError),
    /// Chromatin length is zero.
    ChromatinEmpty,
    /// Chromatin length exceeds the lattice capacity.
    ChromatinTooLong {
        /// The configured length.
        len: usize,
        /// Number of cells on the lattice.
        capacity: usize,
    },
    /// A probability parameter is outside `[0, 1]` or non-finite.
    RateOutOfRange {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// `p_init` is neither a fraction in (0, 1) nor a negative sentinel.
    InvalidInitFraction {
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "lattice: {e}"),
            Self::ChromatinEmpty => write!(f, "chromatin_len must be at least 1"),
            Self::ChromatinTooLong { len, capacity } => {
                write!(f, "chromatin_len {len} exceeds lattice capacity {capacity}")
            }
            Self::RateOutOfRange { name, value } => {
                write!(f, "{name} must be in [0, 1], got {value}")
            }
            Self::InvalidInitFraction { value } => write!(
                f,
                "p_init must be a fraction in (0, 1) or negative for a centred block, got {value}"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(NucleusConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_dimension() {
        let config = NucleusConfig {
            rows: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Space(SpaceError::EmptySpace))
        );
    }

    #[test]
    fn rejects_chromatin_exceeding_capacity() {
        let config = NucleusConfig {
            rows: 10,
            cols: 10,
            chromatin_len: 101,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ChromatinTooLong {
                len: 101,
                capacity: 100
            })
        );
    }

    #[test]
    fn rejects_zero_chromatin() {
        let config = NucleusConfig {
            chromatin_len: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ChromatinEmpty));
    }

    #[test]
    fn rejects_out_of_range_rates() {
        for bad in [-0.1, 1.1, f64::NAN] {
            let config = NucleusConfig {
                k_on: bad,
                ..Default::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::RateOutOfRange { name: "k_on", .. })
                ),
                "k_on = {bad} should be rejected"
            );

            let config = NucleusConfig {
                diff_update_rate: bad,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::RateOutOfRange {
                    name: "diff_update_rate",
                    ..
                })
            ));

            let config = NucleusConfig {
                turn_rate: bad,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::RateOutOfRange {
                    name: "turn_rate",
                    ..
                })
            ));
        }
    }

    #[test]
    fn rejects_degenerate_init_fraction() {
        for bad in [0.0, 1.0, 1.5, f64::NAN] {
            let config = NucleusConfig {
                p_init: bad,
                ..Default::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::InvalidInitFraction { .. })
                ),
                "p_init = {bad} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_negative_init_sentinel() {
        let config = NucleusConfig {
            p_init: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
