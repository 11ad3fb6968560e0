//! Fatal errors raised during a simulation tick.

use crate::nucleus::TickId;
use std::fmt;

/// Errors from [`Nucleus::tick`](crate::Nucleus::tick).
///
/// There are no transient variants: the model is deterministic given its
/// random draws, so any failure indicates a logic defect and the run must
/// stop rather than continue on corrupted state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The free-particle total changed unexpectedly mid-diffusion.
    ///
    /// Diffusion moves exactly one particle unit per relocation, so the
    /// grid total must stay constant throughout the batch. A mismatch
    /// means the move bookkeeping is defective.
    ConservationViolated {
        /// Free-particle total at the start of the diffusion step.
        expected: u64,
        /// Total observed mid-step.
        found: u64,
        /// Tick during which the violation was detected.
        tick: TickId,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConservationViolated {
                expected,
                found,
                tick,
            } => write!(
                f,
                "particle conservation violated at tick {tick}: expected {expected}, found {found}"
            ),
        }
    }
}

impl std::error::Error for StepError {}
