//! Manual pull: reel the start body along the rope axis.
//!
//! This acts on the start body only. The stretch correction in
//! [`solver`](crate::solver) acts on the end body only.

use crate::body::{Body, BodyResponse};
use crate::constraint::RopeConstraint;
use crate::float::Float;
use crate::length::Direction;
use crate::vec::Vec;

impl<F: Float> RopeConstraint<F> {
    /// Push the start body along the start→end axis with a constant force
    /// of `spring_force`, or displace it by
    /// `spring_force * dt * pull_displacement_scale` when it is kinematic.
    ///
    /// `Extend` pushes along +axis while the separation is below
    /// `max_length`; `Retract` pushes along -axis while it is above
    /// `min_length`. The bounds gate the pull but do not clamp it; a single
    /// tick may overshoot.
    ///
    /// Returns `None` when a body is missing, the endpoints coincide or the
    /// bound gate is closed.
    pub fn pull(
        &self,
        start: Option<&mut Body<'_, F>>,
        end: Option<&Body<'_, F>>,
        direction: Direction,
        dt: F,
    ) -> Option<BodyResponse<F>> {
        let (start, end) = (start?, end?);

        let span = Self::span(start.position(), end.position());
        let distance = span.length();
        if distance.is_near_zero(F::from_f32(1e-10)) {
            log::trace!("rope pull skipped: coincident endpoints");
            return None;
        }
        let axis = span.normalize();

        let axis = match direction {
            Direction::Extend if distance < self.max_length => axis,
            Direction::Retract if distance > self.min_length => -axis,
            _ => return None,
        };

        let force = axis.scale(self.spring_force);
        let displacement = axis.scale(dt * self.spring_force * self.pull_displacement_scale);
        Some(start.drive(force, displacement))
    }
}
