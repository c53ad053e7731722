//! Debounced rest-length adjustment driven by held commands.

use crate::constraint::RopeConstraint;
use crate::float::Float;

/// Which way a command moves the rope.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Extend,
    Retract,
}

/// A fired rest-length adjustment.
///
/// `previous == current` when the rope was already at the bound; the
/// adjustment still fires and still resets the debounce timer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LengthAdjustment<F: Float> {
    pub direction: Direction,
    pub previous: F,
    pub current: F,
}

impl<F: Float> RopeConstraint<F> {
    /// Advance the debounce timer by `dt` and, once it has reached the
    /// debounce interval, move the rest length by one adjust step.
    ///
    /// Extend wins when both commands are held. With neither held the timer
    /// keeps accumulating, so the next press fires straight away.
    pub fn adjust_length(
        &mut self,
        dt: F,
        extend_held: bool,
        retract_held: bool,
    ) -> Option<LengthAdjustment<F>> {
        self.adjust_timer = self.adjust_timer + dt;
        if self.adjust_timer < self.adjust_debounce {
            return None;
        }

        let previous = self.rest_length;
        let direction = if extend_held {
            self.rest_length = (self.rest_length + self.adjust_rate).min(self.max_length);
            Direction::Extend
        } else if retract_held {
            self.rest_length = (self.rest_length - self.adjust_rate).max(self.min_length);
            Direction::Retract
        } else {
            return None;
        };
        self.adjust_timer = F::zero();

        log::debug!(
            "rope rest length {:?} -> {:?} ({:?})",
            previous,
            self.rest_length,
            direction
        );

        Some(LengthAdjustment {
            direction,
            previous,
            current: self.rest_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RopeConfig;

    fn rope() -> RopeConstraint<f32> {
        RopeConstraint::new(&RopeConfig::new()).unwrap()
    }

    #[test]
    fn waits_for_debounce() {
        let mut rope = rope();
        assert_eq!(rope.adjust_length(0.05, true, false), None);
        assert_eq!(rope.rest_length(), 5.0);

        let adj = rope.adjust_length(0.05, true, false).unwrap();
        assert_eq!(adj.direction, Direction::Extend);
        assert_eq!(adj.previous, 5.0);
        assert_eq!(adj.current, 6.0);
        assert_eq!(rope.adjust_timer(), 0.0);
    }

    #[test]
    fn extend_takes_priority() {
        let mut rope = rope();
        let adj = rope.adjust_length(0.2, true, true).unwrap();
        assert_eq!(adj.direction, Direction::Extend);
        assert_eq!(rope.rest_length(), 6.0);
    }

    #[test]
    fn idle_timer_keeps_accumulating() {
        let mut rope = rope();
        for _ in 0..10 {
            assert_eq!(rope.adjust_length(0.1, false, false), None);
        }
        assert!(rope.adjust_timer() > 0.9);

        // Fires on the first held tick, even with a tiny dt.
        let adj = rope.adjust_length(0.001, false, true).unwrap();
        assert_eq!(adj.direction, Direction::Retract);
        assert_eq!(rope.rest_length(), 4.0);
    }

    #[test]
    fn pinned_at_bound_still_resets_timer() {
        let mut rope = RopeConstraint::new(&RopeConfig::<f32>::new().with_rest_length(2.0)).unwrap();
        let adj = rope.adjust_length(0.5, false, true).unwrap();
        assert_eq!(adj.previous, 2.0);
        assert_eq!(adj.current, 2.0);
        assert_eq!(rope.adjust_timer(), 0.0);
    }
}
