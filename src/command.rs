//! Per-tick command input.

use crate::length::Direction;

/// Level-triggered commands sampled once per tick.
///
/// Fill this from whatever input backend drives the rope; the core never
/// polls input itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RopeCommands {
    /// Lengthen the rest length while held.
    pub extend_length: bool,
    /// Shorten the rest length while held.
    pub retract_length: bool,
    /// Pull the start body along the rope axis while held.
    pub pull_extend: bool,
    /// Pull the start body against the rope axis while held.
    pub pull_retract: bool,
}

impl RopeCommands {
    /// No command held.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Requested pull, if any. `pull_extend` wins when both are held.
    pub fn pull_direction(&self) -> Option<Direction> {
        if self.pull_extend {
            Some(Direction::Extend)
        } else if self.pull_retract {
            Some(Direction::Retract)
        } else {
            None
        }
    }
}
