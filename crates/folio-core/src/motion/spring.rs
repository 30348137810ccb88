use std::time::Duration;

// Integration substep; keeps stiff, heavily damped springs stable at 60 Hz.
const MAX_SUBSTEP_SEC: f32 = 0.002;
// Frames longer than this (tab in background) are treated as this long.
const MAX_FRAME_SEC: f32 = 0.1;
const REST_DISTANCE: f32 = 1e-4;
const REST_VELOCITY: f32 = 1e-3;

/// Damped spring chasing a target value (unit mass).
#[derive(Clone, Debug)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        (self.value - self.target).abs() < REST_DISTANCE && self.velocity.abs() < REST_VELOCITY
    }

    /// Jump to the target and stop.
    pub fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    pub fn step(&mut self, dt: Duration) -> f32 {
        let mut remaining = dt.as_secs_f32().min(MAX_FRAME_SEC);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SEC);
            let accel = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stiff_spring_settles_without_blowing_up() {
        let mut s = Spring::new(500.0, 100.0);
        s.set_target(0.5);
        let mut max_seen = 0.0_f32;
        for _ in 0..120 {
            let v = s.step(Duration::from_millis(16));
            assert!(v.is_finite());
            max_seen = max_seen.max(v);
        }
        assert!(max_seen <= 0.5 + 1e-3);
        assert!((s.value() - 0.5).abs() < 1e-2);
    }

    #[test]
    fn huge_frame_is_clamped() {
        let mut s = Spring::new(500.0, 100.0);
        s.set_target(1.0);
        let v = s.step(Duration::from_secs(30));
        assert!(v.is_finite() && v <= 1.0);
    }
}
