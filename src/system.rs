//! Tick driver for a single rope, and a multi-rope system that owns its bodies.

use crate::body::{Anchor, Body, PointMass};
use crate::command::RopeCommands;
use crate::config::{RopeConfig, SystemConfig};
use crate::constraint::RopeConstraint;
use crate::error::RopeError;
use crate::float::Float;
use crate::observer::RopeObserver;
use crate::solver::RopeEndpoints;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

impl<F: Float> RopeConstraint<F> {
    /// Run one fixed step: rest-length adjustment, then manual pull, then
    /// stretch correction.
    ///
    /// Commands go first so this step's correction already sees the new rest
    /// length and any pull displacement. Returns the endpoints to draw, or
    /// `None` if a body is missing.
    pub fn step<O: RopeObserver<F>>(
        &mut self,
        dt: F,
        commands: RopeCommands,
        mut start: Option<&mut Body<'_, F>>,
        mut end: Option<&mut Body<'_, F>>,
        observer: &mut O,
    ) -> Option<RopeEndpoints<F>> {
        if let Some(adjustment) =
            self.adjust_length(dt, commands.extend_length, commands.retract_length)
        {
            observer.on_length_adjusted(&adjustment);
        }

        if let Some(direction) = commands.pull_direction() {
            if let Some(response) = self.pull(start.as_deref_mut(), end.as_deref(), direction, dt) {
                observer.on_pull(&response);
            }
        }

        let outcome = self.solve(start.as_deref(), end.as_deref_mut());
        if let Some(outcome) = &outcome {
            observer.on_solve(outcome);
        }

        observer.on_step_complete();
        outcome.map(|o| o.endpoints)
    }
}

/// Handle to a body stored in a [`RopeSystem`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// Handle to a rope stored in a [`RopeSystem`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RopeId(pub usize);

/// A body owned by a [`RopeSystem`].
#[derive(Clone, Debug)]
pub enum BodySlot<F: Float> {
    Dynamic(PointMass<F>),
    Kinematic(Anchor<F>),
}

impl<F: Float> BodySlot<F> {
    pub fn position(&self) -> Vec3<F> {
        match self {
            BodySlot::Dynamic(p) => p.pos,
            BodySlot::Kinematic(a) => a.pos,
        }
    }

    /// Borrow as a rope endpoint.
    pub fn as_body(&mut self) -> Body<'_, F> {
        match self {
            BodySlot::Dynamic(p) => Body::Dynamic(p),
            BodySlot::Kinematic(a) => Body::Kinematic(a),
        }
    }
}

struct RopeLink<F: Float> {
    start: BodyId,
    end: BodyId,
    constraint: RopeConstraint<F>,
    commands: RopeCommands,
    endpoints: Option<RopeEndpoints<F>>,
}

/// A set of bodies linked by independent ropes.
///
/// Each rope keeps the two body handles it was created with. On every step
/// ropes run in insertion order, then dynamic bodies integrate the forces
/// the ropes accumulated.
pub struct RopeSystem<F: Float> {
    bodies: AllocVec<BodySlot<F>>,
    ropes: AllocVec<RopeLink<F>>,
    config: SystemConfig<F>,
}

impl<F: Float> RopeSystem<F> {
    /// Create an empty system. Rejects an invalid world config.
    pub fn new(config: SystemConfig<F>) -> Result<Self, RopeError> {
        config.validate()?;
        Ok(RopeSystem {
            bodies: AllocVec::new(),
            ropes: AllocVec::new(),
            config,
        })
    }

    pub fn add_body(&mut self, body: BodySlot<F>) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        id
    }

    /// Link two distinct bodies with a new rope.
    pub fn add_rope(
        &mut self,
        start: BodyId,
        end: BodyId,
        config: &RopeConfig<F>,
    ) -> Result<RopeId, RopeError> {
        let count = self.bodies.len();
        for id in [start, end] {
            if id.0 >= count {
                return Err(RopeError::UnknownBody { index: id.0, count });
            }
        }
        if start == end {
            return Err(RopeError::SelfLink);
        }
        let constraint = RopeConstraint::new(config)?;

        let id = RopeId(self.ropes.len());
        log::debug!(
            "rope {} links body {} -> body {} (rest length {:?})",
            id.0,
            start.0,
            end.0,
            constraint.rest_length()
        );
        self.ropes.push(RopeLink {
            start,
            end,
            constraint,
            commands: RopeCommands::idle(),
            endpoints: None,
        });
        Ok(id)
    }

    /// Set the commands held for a rope from the next step on.
    /// Unknown rope ids are ignored.
    pub fn set_commands(&mut self, rope: RopeId, commands: RopeCommands) {
        if let Some(link) = self.ropes.get_mut(rope.0) {
            link.commands = commands;
        }
    }

    pub fn step<O: RopeObserver<F>>(&mut self, dt: F, observer: &mut O) {
        for link in self.ropes.iter_mut() {
            link.endpoints = match pair_mut(&mut self.bodies, link.start.0, link.end.0) {
                Some((start, end)) => {
                    let mut start = start.as_body();
                    let mut end = end.as_body();
                    link.constraint.step(
                        dt,
                        link.commands,
                        Some(&mut start),
                        Some(&mut end),
                        observer,
                    )
                }
                None => None,
            };
        }

        for slot in self.bodies.iter_mut() {
            if let BodySlot::Dynamic(p) = slot {
                p.integrate(dt, self.config.gravity, self.config.damping);
            }
        }
    }

    /// Endpoints from the most recent step, for drawing.
    pub fn endpoints(&self, rope: RopeId) -> Option<RopeEndpoints<F>> {
        self.ropes.get(rope.0).and_then(|link| link.endpoints)
    }

    pub fn rope(&self, rope: RopeId) -> Option<&RopeConstraint<F>> {
        self.ropes.get(rope.0).map(|link| &link.constraint)
    }

    pub fn body(&self, id: BodyId) -> Option<&BodySlot<F>> {
        self.bodies.get(id.0)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut BodySlot<F>> {
        self.bodies.get_mut(id.0)
    }

    pub fn body_count(&self) -> usize { self.bodies.len() }
    pub fn rope_count(&self) -> usize { self.ropes.len() }
    pub fn config(&self) -> &SystemConfig<F> { &self.config }
}

/// Two distinct mutable elements, or `None` if the indices are equal or out of range.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b || a >= items.len() || b >= items.len() {
        return None;
    }
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        Some((&mut lo[a], &mut hi[0]))
    } else {
        let (lo, hi) = items.split_at_mut(a);
        Some((&mut hi[0], &mut lo[b]))
    }
}

#[cfg(test)]
mod tests {
    use super::pair_mut;

    #[test]
    fn pair_mut_orders_and_rejects() {
        let mut items = [1, 2, 3];
        let (a, b) = pair_mut(&mut items, 2, 0).unwrap();
        assert_eq!((*a, *b), (3, 1));
        assert!(pair_mut(&mut items, 1, 1).is_none());
        assert!(pair_mut(&mut items, 0, 3).is_none());
    }
}
