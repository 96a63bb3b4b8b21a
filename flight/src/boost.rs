use serde::{Deserialize, Serialize};

use crate::FlightSpec;

/// Depleting/recharging boost reserve.
///
/// `current` stays within `[0, max]`. Draining to zero latches the reserve as
/// exhausted; a held request does not restart boosting until it is released.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostResource {
    current: f32,
    max: f32,
    drain_rate: f32,
    recharge_rate: f32,
    multiplier: f32,
    requested: bool,
    boosting: bool,
    exhausted: bool,
}

impl BoostResource {
    /// Full reserve, not boosting.
    pub fn new(max: f32, drain_rate: f32, recharge_rate: f32, multiplier: f32) -> Self {
        Self {
            current: max,
            max,
            drain_rate,
            recharge_rate,
            multiplier,
            requested: false,
            boosting: false,
            exhausted: false,
        }
    }

    pub fn from_spec(spec: &FlightSpec) -> Self {
        Self::new(
            spec.boost_max,
            spec.boost_drain_rate,
            spec.boost_recharge_rate,
            spec.boost_multiplier,
        )
    }

    /// Record the latest boost intent. Takes effect on the next `advance`.
    pub fn set_requested(&mut self, active: bool) {
        if !active {
            self.exhausted = false;
        }
        self.requested = active;
    }

    /// Step the reserve by one tick.
    pub fn advance(&mut self) {
        if self.requested && !self.exhausted && self.current > 0.0 {
            self.boosting = true;
            self.current = (self.current - self.drain_rate).max(0.0);
            if self.current <= 0.0 {
                self.exhausted = true;
                tracing::debug!(max = self.max, "boost reserve exhausted");
            }
        } else {
            self.boosting = false;
            self.current = (self.current + self.recharge_rate).min(self.max);
        }
    }

    /// Forward thrust multiplier for the current tick.
    pub fn current_multiplier(&self) -> f32 {
        if self.boosting {
            self.multiplier
        } else {
            1.0
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Remaining reserve in [0, 1]; an empty-capacity reserve reads as 0.
    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }

    pub fn is_boosting(&self) -> bool {
        self.boosting
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Back to the spawn state: full reserve, no request.
    pub fn reset(&mut self) {
        self.current = self.max;
        self.requested = false;
        self.boosting = false;
        self.exhausted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserve() -> BoostResource {
        BoostResource::new(2.0, 0.25, 0.5, 5.0)
    }

    #[test]
    fn starts_full_and_idle() {
        let boost = reserve();
        assert_eq!(boost.current(), 2.0);
        assert!(!boost.is_boosting());
        assert_eq!(boost.current_multiplier(), 1.0);
        assert_eq!(boost.fraction(), 1.0);
    }

    #[test]
    fn request_applies_on_next_advance() {
        let mut boost = reserve();
        boost.set_requested(true);
        assert!(!boost.is_boosting());
        assert_eq!(boost.current(), 2.0);

        boost.advance();
        assert!(boost.is_boosting());
        assert_eq!(boost.current_multiplier(), 5.0);
        assert_eq!(boost.current(), 1.75);
    }

    #[test]
    fn recharge_never_overshoots_max() {
        let mut boost = reserve();
        boost.set_requested(true);
        boost.advance(); // 1.75
        boost.set_requested(false);
        boost.advance();
        assert_eq!(boost.current(), 2.0, "0.5 recharge from 1.75 clamps to max");
        boost.advance();
        assert_eq!(boost.current(), 2.0);
    }

    #[test]
    fn drain_clamps_at_zero() {
        let mut boost = BoostResource::new(1.0, 0.4, 0.1, 3.0);
        boost.set_requested(true);
        boost.advance(); // 0.6
        boost.advance(); // 0.2
        boost.advance(); // clamps from -0.2
        assert_eq!(boost.current(), 0.0);
        assert!(boost.is_boosting());
        assert!(boost.is_exhausted());

        boost.advance();
        assert!(!boost.is_boosting());
        assert!(boost.is_requested());
        assert!((boost.current() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn releasing_clears_exhaustion() {
        let mut boost = BoostResource::new(0.5, 0.5, 0.25, 2.0);
        boost.set_requested(true);
        boost.advance();
        assert!(boost.is_exhausted());
        boost.advance();
        assert!(!boost.is_boosting(), "held request stays locked out");
        assert_eq!(boost.current(), 0.25);

        boost.set_requested(false);
        assert!(!boost.is_exhausted());
        boost.set_requested(true);
        boost.advance();
        assert!(boost.is_boosting());
        assert_eq!(boost.current(), 0.0);
    }

    #[test]
    fn reset_restores_spawn_state() {
        let mut boost = reserve();
        boost.set_requested(true);
        boost.advance();
        boost.reset();
        assert_eq!(boost, reserve());
    }

    #[test]
    fn zero_capacity_never_boosts() {
        let mut boost = BoostResource::new(0.0, 0.25, 0.5, 5.0);
        boost.set_requested(true);
        boost.advance();
        assert!(!boost.is_boosting());
        assert_eq!(boost.current(), 0.0);
        assert_eq!(boost.fraction(), 0.0);
    }
}
