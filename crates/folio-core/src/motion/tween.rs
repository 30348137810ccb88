use crate::easing::Easing;
use glam::Vec2;
use std::time::Duration;

pub trait Interpolate: Copy {
    fn interpolate(self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn interpolate(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Vec2 {
    #[inline]
    fn interpolate(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

/// Fixed-duration transition between two values, advanced by frame deltas.
///
/// `retarget` starts the new transition from wherever the current one is, so
/// a tween interrupted mid-flight never jumps.
#[derive(Clone, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(from: T, to: T, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    pub fn settled(value: T) -> Self {
        Self::new(value, value, Duration::ZERO, Easing::Linear)
    }

    pub fn retarget(&mut self, to: T, duration: Duration, easing: Easing) {
        self.from = self.value();
        self.to = to;
        self.duration = duration;
        self.elapsed = Duration::ZERO;
        self.easing = easing;
    }

    /// Jump straight to `value` with no transition.
    pub fn snap(&mut self, value: T) {
        *self = Self::settled(value);
    }

    pub fn step(&mut self, dt: Duration) -> T {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> T {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from.interpolate(self.to, self.easing.apply(t))
    }

    #[inline]
    pub fn target(&self) -> T {
        self.to
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_tween_reaches_target() {
        let mut t = Tween::new(0.0_f32, 10.0, Duration::from_millis(100), Easing::Linear);
        assert!((t.step(Duration::from_millis(50)) - 5.0).abs() < 1e-4);
        assert!(!t.is_finished());
        assert_eq!(t.step(Duration::from_millis(80)), 10.0);
        assert!(t.is_finished());
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let mut t = Tween::new(0.0_f32, 10.0, Duration::from_millis(100), Easing::Linear);
        t.step(Duration::from_millis(50));
        t.retarget(0.0, Duration::from_millis(100), Easing::Linear);
        assert!((t.value() - 5.0).abs() < 1e-4);
        assert!((t.step(Duration::from_millis(50)) - 2.5).abs() < 1e-4);
    }

    #[test]
    fn zero_duration_is_immediately_at_target() {
        let t = Tween::new(Vec2::ZERO, Vec2::ONE, Duration::ZERO, Easing::Power2Out);
        assert_eq!(t.value(), Vec2::ONE);
        assert!(t.is_finished());
    }
}
