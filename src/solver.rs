//! Stretch correction: the per-step rope solve.

use crate::body::{Body, BodyResponse};
use crate::constraint::RopeConstraint;
use crate::float::Float;
use crate::vec::{Vec, Vec3};

/// The two rope endpoints on the rope plane, for drawing the link.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RopeEndpoints<F: Float> {
    pub start: Vec3<F>,
    pub end: Vec3<F>,
}

/// Rope state found by a solve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Tension<F: Float> {
    /// Separation within the rest length; nothing applied.
    Slack,
    /// Endpoints coincide; correction skipped this step.
    Degenerate,
    /// Separation exceeded the rest length by `excess`; `response` was
    /// applied to the end body.
    Stretched { excess: F, response: BodyResponse<F> },
}

/// Result of one [`RopeConstraint::solve`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolveOutcome<F: Float> {
    /// Endpoints as read before the correction.
    pub endpoints: RopeEndpoints<F>,
    pub distance: F,
    pub tension: Tension<F>,
}

impl<F: Float> RopeConstraint<F> {
    /// Pull the end body back toward the start body if the rope is stretched.
    ///
    /// A dynamic end receives `-axis * excess * spring_force`; a kinematic
    /// end is moved by `-axis * excess`, landing exactly on the rest length.
    /// The start body is only read.
    ///
    /// Returns `None` without touching anything if either body is missing.
    pub fn solve(
        &self,
        start: Option<&Body<'_, F>>,
        end: Option<&mut Body<'_, F>>,
    ) -> Option<SolveOutcome<F>> {
        let (start, end) = (start?, end?);

        let endpoints = RopeEndpoints {
            start: self.project(start.position()),
            end: self.project(end.position()),
        };
        let span = Self::span(endpoints.start, endpoints.end);
        let distance = span.length();

        let tension = if distance.is_near_zero(F::from_f32(1e-10)) {
            log::trace!("rope solve skipped: coincident endpoints");
            Tension::Degenerate
        } else if distance <= self.rest_length {
            Tension::Slack
        } else {
            let excess = distance - self.rest_length;
            let toward_start = -span.normalize();
            let response = end.drive(
                toward_start.scale(excess * self.spring_force),
                toward_start.scale(excess),
            );
            Tension::Stretched { excess, response }
        };

        Some(SolveOutcome { endpoints, distance, tension })
    }
}
