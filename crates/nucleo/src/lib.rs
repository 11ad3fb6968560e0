//! Nucleo: stochastic lattice simulation of repair-factor recruitment to
//! chromatin.
//!
//! A polymer ("chromatin") is grown as a self-avoiding walk on a 2D
//! toroidal lattice and embedded in a field of diffusing, binding and
//! unbinding particles ("protein"). Each tick runs the fixed pipeline
//! Diffusion → Associate → Dissociate; a regime reset can release every
//! bound particle and change the kinetic rates mid-run.
//!
//! This facade crate re-exports the public API of the workspace. For most
//! users, adding `nucleo` as a single dependency is sufficient; rendering
//! and export layers consume the read-only state accessors.
//!
//! # Quick start
//!
//! ```rust
//! use nucleo::prelude::*;
//!
//! let config = NucleusConfig {
//!     rows: 20,
//!     cols: 20,
//!     chromatin_len: 60,
//!     seed: 7,
//!     ..Default::default()
//! };
//! let mut nucl = Nucleus::new(config).unwrap();
//! for _ in 0..10 {
//!     nucl.tick().unwrap();
//! }
//! // Mid-run regime change: release everything, new kinetics.
//! nucl.reset(0.4, 0.1).unwrap();
//! assert_eq!(nucl.bound_count(), 0);
//! let visited = nucl.repaired().iter().filter(|&&r| r).count();
//! assert_eq!(visited, 0);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Simulation engine: the [`engine::Nucleus`] aggregate, configuration,
/// and error types (`nucleo-engine`).
pub use nucleo_engine as engine;

/// Toroidal lattice geometry: [`space::Torus2D`] and [`space::Site`]
/// (`nucleo-space`).
pub use nucleo_space as space;

/// Common imports for typical usage.
///
/// ```rust
/// use nucleo::prelude::*;
/// ```
pub mod prelude {
    pub use nucleo_engine::{ConfigError, Nucleus, NucleusConfig, ParticleGrid, StepError, TickId};
    pub use nucleo_space::{Site, SpaceError, Torus2D};
}
