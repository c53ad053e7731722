//! Rope state: rest length, bounds, stiffness and the adjustment timer.
//!
//! The operations live next to their concerns: [`length`](crate::length)
//! adjusts the rest length, [`pull`](crate::pull) injects manual pulls and
//! [`solver`](crate::solver) applies the stretch correction.

use crate::config::RopeConfig;
use crate::error::RopeError;
use crate::float::Float;
use crate::vec::{Vec2, Vec3};

/// One-sided distance constraint between a start and an end body.
///
/// Resists stretching beyond `rest_length`, never compression. The only
/// runtime mutations are the bounded rest-length adjustments and the
/// debounce timer.
#[derive(Clone, Debug, PartialEq)]
pub struct RopeConstraint<F: Float> {
    pub(crate) rest_length: F,
    pub(crate) min_length: F,
    pub(crate) max_length: F,
    pub(crate) spring_force: F,
    pub(crate) adjust_rate: F,
    pub(crate) adjust_debounce: F,
    pub(crate) adjust_timer: F,
    pub(crate) anchor_depth: F,
    pub(crate) pull_displacement_scale: F,
}

impl<F: Float> RopeConstraint<F> {
    /// Build a rope from a validated config. The initial rest length is
    /// clamped into the configured bounds; every other invariant is checked
    /// and rejected.
    pub fn new(config: &RopeConfig<F>) -> Result<Self, RopeError> {
        config.validate()?;
        Ok(RopeConstraint {
            rest_length: config.rest_length.clamp(config.min_length, config.max_length),
            min_length: config.min_length,
            max_length: config.max_length,
            spring_force: config.spring_force,
            adjust_rate: config.adjust_rate,
            adjust_debounce: config.adjust_debounce,
            adjust_timer: F::zero(),
            anchor_depth: config.anchor_depth,
            pull_displacement_scale: config.pull_displacement_scale,
        })
    }

    pub fn rest_length(&self) -> F { self.rest_length }
    pub fn min_length(&self) -> F { self.min_length }
    pub fn max_length(&self) -> F { self.max_length }
    pub fn spring_force(&self) -> F { self.spring_force }
    pub fn adjust_rate(&self) -> F { self.adjust_rate }
    pub fn adjust_debounce(&self) -> F { self.adjust_debounce }
    pub fn adjust_timer(&self) -> F { self.adjust_timer }
    pub fn anchor_depth(&self) -> F { self.anchor_depth }
    pub fn pull_displacement_scale(&self) -> F { self.pull_displacement_scale }

    /// Put a body position on the rope plane.
    pub fn project(&self, pos: Vec3<F>) -> Vec3<F> {
        pos.with_z(self.anchor_depth)
    }

    /// Planar offset from `start` to `end`.
    pub(crate) fn span(start: Vec3<F>, end: Vec3<F>) -> Vec2<F> {
        end.truncate() - start.truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_length_clamped_on_construction() {
        let long = RopeConstraint::new(&RopeConfig::<f32>::new().with_rest_length(40.0)).unwrap();
        assert_eq!(long.rest_length(), 15.0);

        let short = RopeConstraint::new(&RopeConfig::<f32>::new().with_rest_length(0.5)).unwrap();
        assert_eq!(short.rest_length(), 2.0);
    }

    #[test]
    fn timer_starts_at_zero() {
        let rope = RopeConstraint::new(&RopeConfig::<f64>::default()).unwrap();
        assert_eq!(rope.adjust_timer(), 0.0);
        assert_eq!(rope.rest_length(), 5.0);
    }

    #[test]
    fn projection_locks_depth() {
        let rope = RopeConstraint::new(&RopeConfig::<f32>::new().with_anchor_depth(-2.0)).unwrap();
        assert_eq!(rope.project(Vec3::new(1.0, 2.0, 9.0)), Vec3::new(1.0, 2.0, -2.0));
    }
}
