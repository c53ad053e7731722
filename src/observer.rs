//! Observer trait for monitoring rope steps.

use crate::body::BodyResponse;
use crate::float::Float;
use crate::length::LengthAdjustment;
use crate::solver::SolveOutcome;

/// Trait for observing rope simulation steps.
///
/// Implement this to monitor rope activity (debug overlays, sound cues,
/// telemetry). All methods have default no-op implementations.
pub trait RopeObserver<F: Float> {
    /// Called when a rest-length adjustment fires.
    fn on_length_adjusted(&mut self, _adjustment: &LengthAdjustment<F>) {}

    /// Called when a manual pull was applied to the start body.
    fn on_pull(&mut self, _response: &BodyResponse<F>) {}

    /// Called after the stretch correction, when both bodies were present.
    fn on_solve(&mut self, _outcome: &SolveOutcome<F>) {}

    /// Called when a rope step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpObserver;

impl<F: Float> RopeObserver<F> for NoOpObserver {}
