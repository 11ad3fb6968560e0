//! Error types for lattice construction.

use std::fmt;

/// Errors arising from lattice construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a lattice with zero cells.
    EmptySpace,
    /// A dimension exceeds the maximum representable size.
    DimensionTooLarge {
        /// Which dimension ("rows" or "cols").
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "lattice must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
