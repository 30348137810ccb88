use super::tween::Tween;
use crate::constants::{MAGNETIC_FOLLOW_MS, MAGNETIC_SETTLE_MS, MAGNETIC_STRENGTH};
use crate::easing::Easing;
use crate::geometry::Rect;
use glam::Vec2;
use std::time::Duration;

/// Pulls an element toward the pointer while it hovers, then springs it home.
#[derive(Clone, Debug)]
pub struct Magnetic {
    strength: f32,
    offset: Tween<Vec2>,
}

impl Default for Magnetic {
    fn default() -> Self {
        Self::new(MAGNETIC_STRENGTH)
    }
}

impl Magnetic {
    pub fn new(strength: f32) -> Self {
        Self {
            strength,
            offset: Tween::settled(Vec2::ZERO),
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.strength > 0.0
    }

    /// Returns false when the effect is disabled or the element has no layout.
    pub fn pointer_move(&mut self, bounds: Rect, pointer: Vec2) -> bool {
        if !self.is_enabled() || bounds.is_empty() {
            return false;
        }
        let target = (pointer - bounds.center()) * self.strength;
        self.offset.retarget(
            target,
            Duration::from_millis(MAGNETIC_FOLLOW_MS),
            Easing::Power2Out,
        );
        true
    }

    pub fn pointer_leave(&mut self) -> bool {
        if !self.is_enabled() {
            return false;
        }
        self.offset.retarget(
            Vec2::ZERO,
            Duration::from_millis(MAGNETIC_SETTLE_MS),
            Easing::ELASTIC,
        );
        true
    }

    pub fn step(&mut self, dt: Duration) -> Vec2 {
        self.offset.step(dt)
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset.value()
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.offset.target()
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.offset.is_finished()
    }

    /// Drop any displacement immediately (unmount / reduced motion).
    pub fn reset(&mut self) {
        self.offset.snap(Vec2::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_scaled_distance_from_center() {
        let mut m = Magnetic::new(0.3);
        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert!(m.pointer_move(bounds, Vec2::new(100.0, 40.0)));
        assert!(m.target().abs_diff_eq(Vec2::new(15.0, 6.0), 1e-4));
        m.step(Duration::from_millis(MAGNETIC_FOLLOW_MS));
        assert!(m.offset().abs_diff_eq(Vec2::new(15.0, 6.0), 1e-4));
    }

    #[test]
    fn leave_returns_home() {
        let mut m = Magnetic::new(0.3);
        m.pointer_move(Rect::new(0.0, 0.0, 10.0, 10.0), Vec2::new(10.0, 10.0));
        m.step(Duration::from_millis(1000));
        assert!(m.pointer_leave());
        m.step(Duration::from_millis(MAGNETIC_SETTLE_MS));
        assert!(m.offset().abs_diff_eq(Vec2::ZERO, 1e-5));
        assert!(m.is_settled());
    }

    #[test]
    fn zero_strength_never_fires() {
        let mut m = Magnetic::new(0.0);
        assert!(!m.pointer_move(Rect::new(0.0, 0.0, 10.0, 10.0), Vec2::new(10.0, 10.0)));
        assert!(!m.pointer_leave());
        assert_eq!(m.step(Duration::from_millis(16)), Vec2::ZERO);
    }

    #[test]
    fn unmounted_element_is_a_no_op() {
        let mut m = Magnetic::default();
        assert!(!m.pointer_move(Rect::default(), Vec2::new(5.0, 5.0)));
        assert_eq!(m.offset(), Vec2::ZERO);
    }
}
