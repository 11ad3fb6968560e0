//! Toroidal lattice geometry for the nucleo simulation.
//!
//! This is the leaf crate of the workspace. It defines the [`Site`]
//! coordinate type, the [`Torus2D`] lattice with periodic boundaries, and
//! the construction errors. Every neighbour and search operation elsewhere
//! in the workspace goes through the toroidal L1 metric defined here; there
//! is deliberately no ad hoc modulo arithmetic outside this crate.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod site;
mod torus;

pub use error::SpaceError;
pub use site::Site;
pub use torus::Torus2D;
