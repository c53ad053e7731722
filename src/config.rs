//! Configuration types for ropes and rope systems.

use crate::error::RopeError;
use crate::float::Float;
use crate::vec::{Vec, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Construction parameters for a [`RopeConstraint`](crate::RopeConstraint).
///
/// # Builder Pattern
/// ```
/// use tether::config::RopeConfig;
///
/// let config: RopeConfig<f32> = RopeConfig::new()
///     .with_length_bounds(2.0, 15.0)
///     .with_rest_length(5.0)
///     .with_spring_force(50.0)
///     .with_adjust_rate(1.0)
///     .with_adjust_debounce(0.1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RopeConfig<F: Float> {
    /// Initial rest length. Clamped into `[min_length, max_length]`. Default: 5.
    pub rest_length: F,
    /// Shortest allowed rest length. Default: 2.
    pub min_length: F,
    /// Longest allowed rest length. Default: 15.
    pub max_length: F,
    /// Stiffness of the stretch correction and magnitude of the pull force. Default: 50.
    pub spring_force: F,
    /// Rest length change per adjustment. Default: 1.
    pub adjust_rate: F,
    /// Seconds between successive adjustments while a command is held. Default: 0.1.
    pub adjust_debounce: F,
    /// Value of the locked axis for both endpoints. Default: 0.
    pub anchor_depth: F,
    /// Converts pull force into a per-tick displacement for kinematic bodies. Default: 0.01.
    pub pull_displacement_scale: F,
}

impl<F: Float> RopeConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        RopeConfig {
            rest_length: F::from_f32(5.0),
            min_length: F::from_f32(2.0),
            max_length: F::from_f32(15.0),
            spring_force: F::from_f32(50.0),
            adjust_rate: F::one(),
            adjust_debounce: F::from_f32(0.1),
            anchor_depth: F::zero(),
            pull_displacement_scale: F::from_f32(0.01),
        }
    }

    /// Set the initial rest length.
    pub fn with_rest_length(mut self, rest_length: F) -> Self {
        self.rest_length = rest_length;
        self
    }

    /// Set the minimum and maximum rest length.
    pub fn with_length_bounds(mut self, min_length: F, max_length: F) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Set the spring force coefficient.
    pub fn with_spring_force(mut self, spring_force: F) -> Self {
        self.spring_force = spring_force;
        self
    }

    /// Set the rest length change per adjustment.
    pub fn with_adjust_rate(mut self, adjust_rate: F) -> Self {
        self.adjust_rate = adjust_rate;
        self
    }

    /// Set the minimum interval between adjustments.
    pub fn with_adjust_debounce(mut self, adjust_debounce: F) -> Self {
        self.adjust_debounce = adjust_debounce;
        self
    }

    /// Set the value of the locked axis.
    pub fn with_anchor_depth(mut self, anchor_depth: F) -> Self {
        self.anchor_depth = anchor_depth;
        self
    }

    /// Set the force-to-displacement scale used when pulling kinematic bodies.
    pub fn with_pull_displacement_scale(mut self, scale: F) -> Self {
        self.pull_displacement_scale = scale;
        self
    }

    /// Check every construction invariant. The rest length itself is not
    /// checked beyond finiteness; it is clamped on construction.
    pub fn validate(&self) -> Result<(), RopeError> {
        let params = [
            self.rest_length,
            self.min_length,
            self.max_length,
            self.spring_force,
            self.adjust_rate,
            self.adjust_debounce,
            self.anchor_depth,
            self.pull_displacement_scale,
        ];
        if params.iter().any(|p| !p.is_finite()) {
            return Err(RopeError::NonFiniteParameter);
        }

        let zero = F::zero();
        if self.min_length <= zero {
            return Err(RopeError::NonPositiveMinLength);
        }
        if self.min_length > self.max_length {
            return Err(RopeError::InvertedLengthBounds);
        }
        if self.spring_force <= zero {
            return Err(RopeError::NonPositiveSpringForce);
        }
        if self.adjust_rate <= zero {
            return Err(RopeError::NonPositiveAdjustRate);
        }
        if self.adjust_debounce < zero {
            return Err(RopeError::NegativeAdjustDebounce);
        }
        if self.pull_displacement_scale < zero {
            return Err(RopeError::NegativePullScale);
        }
        Ok(())
    }
}

impl<F: Float> Default for RopeConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// World parameters for [`RopeSystem`](crate::RopeSystem).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SystemConfig<F: Float> {
    /// Gravity acceleration applied to dynamic bodies. Default: zero.
    pub gravity: Vec2<F>,
    /// Velocity damping factor [0, 1]. 1.0 = no damping. Default: 0.99.
    pub damping: F,
}

impl<F: Float> SystemConfig<F> {
    pub fn new() -> Self {
        SystemConfig {
            gravity: Vec2::zero(),
            damping: F::from_f32(0.99),
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor, clamped to [0, 1].
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping.clamp(F::zero(), F::one());
        self
    }

    /// Check the world parameters. Needed for configs that bypass the
    /// builder, such as deserialized ones; damping above 1 adds energy.
    pub fn validate(&self) -> Result<(), RopeError> {
        if !(self.gravity.x.is_finite() && self.gravity.y.is_finite() && self.damping.is_finite()) {
            return Err(RopeError::NonFiniteParameter);
        }
        if self.damping < F::zero() || self.damping > F::one() {
            return Err(RopeError::InvalidDamping);
        }
        Ok(())
    }
}

impl<F: Float> Default for SystemConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
