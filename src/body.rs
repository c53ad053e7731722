//! Body handles: the two endpoints a rope acts on.
//!
//! A rope never owns its bodies. Callers hand them in for each operation
//! wrapped in [`Body`], which records once whether the body can take a
//! force or only a direct displacement.

use crate::float::Float;
use crate::vec::{Vec, Vec2, Vec3};

/// Anything with a position on the rope plane.
pub trait KinematicBody<F: Float> {
    /// Current position. `z` is the locked axis and is ignored by the rope.
    fn position(&self) -> Vec3<F>;

    /// Move the body directly on the plane.
    fn translate(&mut self, delta: Vec2<F>);
}

/// A body driven by a physics integrator that accumulates forces.
pub trait DynamicBody<F: Float>: KinematicBody<F> {
    /// Add a force to this body's accumulator for the current step.
    fn apply_force(&mut self, force: Vec2<F>);
}

/// Capability-tagged, non-owning reference to a rope endpoint.
pub enum Body<'a, F: Float> {
    /// Responds to forces.
    Dynamic(&'a mut dyn DynamicBody<F>),
    /// Position only; corrections are applied as displacements.
    Kinematic(&'a mut dyn KinematicBody<F>),
}

/// What a rope did to a body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BodyResponse<F: Float> {
    /// Force added to a dynamic body's accumulator.
    Force(Vec2<F>),
    /// Displacement applied to a kinematic body.
    Displacement(Vec2<F>),
}

impl<'a, F: Float> Body<'a, F> {
    pub fn position(&self) -> Vec3<F> {
        match self {
            Body::Dynamic(b) => b.position(),
            Body::Kinematic(b) => b.position(),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Body::Dynamic(_))
    }

    /// Apply `force` if the body is dynamic, otherwise move it by `displacement`.
    pub fn drive(&mut self, force: Vec2<F>, displacement: Vec2<F>) -> BodyResponse<F> {
        match self {
            Body::Dynamic(b) => {
                b.apply_force(force);
                BodyResponse::Force(force)
            }
            Body::Kinematic(b) => {
                b.translate(displacement);
                BodyResponse::Displacement(displacement)
            }
        }
    }
}

/// A point mass with velocity and a force accumulator.
///
/// Forces added during a step are consumed by [`PointMass::integrate`]
/// (semi-implicit Euler). The locked axis is never integrated.
#[derive(Clone, Debug)]
pub struct PointMass<F: Float> {
    pub pos: Vec3<F>,
    pub velocity: Vec2<F>,
    pub force: Vec2<F>,
    pub mass: F,
    pub inv_mass: F,
}

impl<F: Float> PointMass<F> {
    /// Create a point mass at rest. A zero, near-zero or negative mass
    /// gives infinite inertia.
    pub fn new(pos: Vec3<F>, mass: F) -> Self {
        let inv_mass = if mass <= F::zero() || mass.is_near_zero(F::from_f32(1e-10)) {
            F::zero()
        } else {
            F::one() / mass
        };
        PointMass {
            pos,
            velocity: Vec2::zero(),
            force: Vec2::zero(),
            mass,
            inv_mass,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2<F>) -> Self {
        self.velocity = velocity;
        self
    }

    /// Advance one step and clear the force accumulator.
    pub fn integrate(&mut self, dt: F, gravity: Vec2<F>, damping: F) {
        if self.inv_mass == F::zero() {
            self.force = Vec2::zero();
            return;
        }
        let accel = self.force.scale(self.inv_mass) + gravity;
        self.velocity = (self.velocity + accel.scale(dt)).scale(damping);
        let step = self.velocity.scale(dt);
        self.pos = self.pos + step.extend(F::zero());
        self.force = Vec2::zero();
    }
}

impl<F: Float> KinematicBody<F> for PointMass<F> {
    fn position(&self) -> Vec3<F> {
        self.pos
    }

    fn translate(&mut self, delta: Vec2<F>) {
        self.pos = self.pos + delta.extend(F::zero());
    }
}

impl<F: Float> DynamicBody<F> for PointMass<F> {
    fn apply_force(&mut self, force: Vec2<F>) {
        self.force = self.force + force;
    }
}

/// A purely kinematic endpoint, such as a hook or a scripted object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anchor<F: Float> {
    pub pos: Vec3<F>,
}

impl<F: Float> Anchor<F> {
    pub fn new(pos: Vec3<F>) -> Self {
        Anchor { pos }
    }

    pub fn move_to(&mut self, pos: Vec3<F>) {
        self.pos = pos;
    }
}

impl<F: Float> KinematicBody<F> for Anchor<F> {
    fn position(&self) -> Vec3<F> {
        self.pos
    }

    fn translate(&mut self, delta: Vec2<F>) {
        self.pos = self.pos + delta.extend(F::zero());
    }
}
