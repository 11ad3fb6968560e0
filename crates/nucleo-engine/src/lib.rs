//! Simulation engine for repair-factor recruitment on chromatin.
//!
//! A [`Nucleus`] holds the full simulation state: a toroidal lattice of
//! free-particle counts, a self-avoiding chromatin walk, and the per-monomer
//! binding flags. Each [`Nucleus::tick`] runs the fixed pipeline
//! Diffusion → Associate → Dissociate; [`Nucleus::reset`] releases every
//! bound particle and installs new kinetic rates mid-run.
//!
//! All randomness flows through a single seeded ChaCha8 RNG owned by the
//! nucleus: identical seeds produce bit-identical state trajectories.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod chromatin;
mod config;
mod diffusion;
mod error;
mod grid;
mod kinetics;
mod nucleus;
mod smoothing;

pub use config::{ConfigError, NucleusConfig};
pub use error::StepError;
pub use grid::ParticleGrid;
pub use nucleus::{Nucleus, TickId};
