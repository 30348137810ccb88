//! Timing curves mapping linear progress in [0, 1] to eased progress.
//!
//! `BackOut` and `ElasticOut` overshoot past 1.0 before settling; every curve
//! starts at exactly 0 and ends at exactly 1.

use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out.
    EaseOut,
    /// Quadratic ease-in-out.
    EaseInOut,
    /// f(t) = 1 - (1-t)³
    Power2Out,
    /// f(t) = 1 - (1-t)⁴
    Power3Out,
    BackOut,
    ElasticOut { amplitude: f32, period: f32 },
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Elastic settle used when a displaced element snaps home.
    pub const ELASTIC: Easing = Easing::ElasticOut {
        amplitude: 1.0,
        period: 0.3,
    };

    /// Mask-reveal curve for text sliding out from under its clip.
    pub const REVEAL: Easing = Easing::CubicBezier(0.6, 0.01, -0.05, 0.95);

    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match *self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::Power3Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv * inv
            }
            Easing::BackOut => {
                let c1 = 1.701_58_f32;
                let c3 = c1 + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + c1 * u * u
            }
            Easing::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
    let a = amplitude.max(1.0);
    let p = if period > 0.0 { period } else { 0.3 };
    let s = p / TAU * (1.0 / a).asin();
    a * 2f32.powf(-10.0 * t) * ((t - s) * TAU / p).sin() + 1.0
}

#[inline]
fn bezier_axis(u: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

// x(u) is monotonic for x1, x2 in [0, 1], so bisection always converges.
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut u = t;
    for _ in 0..32 {
        let x = bezier_axis(u, x1, x2);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = u;
        } else {
            hi = u;
        }
        u = 0.5 * (lo + hi);
    }
    bezier_axis(u, y1, y2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 8] = [
        Easing::Linear,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Power2Out,
        Easing::Power3Out,
        Easing::BackOut,
        Easing::ELASTIC,
        Easing::REVEAL,
    ];

    #[test]
    fn every_curve_pins_its_endpoints() {
        for e in ALL {
            assert_eq!(e.apply(0.0), 0.0, "{:?} at t=0", e);
            assert_eq!(e.apply(1.0), 1.0, "{:?} at t=1", e);
            assert_eq!(e.apply(-3.0), 0.0, "{:?} below range", e);
            assert_eq!(e.apply(7.0), 1.0, "{:?} above range", e);
        }
    }

    #[test]
    fn non_overshooting_curves_are_monotonic() {
        for e in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::Power2Out,
            Easing::Power3Out,
        ] {
            let mut prev = 0.0;
            for i in 0..=20 {
                let v = e.apply(i as f32 / 20.0);
                assert!(v >= prev, "{:?} not monotonic at step {}", e, i);
                prev = v;
            }
        }
    }

    #[test]
    fn elastic_and_back_overshoot() {
        let peak = (1..20)
            .map(|i| Easing::ELASTIC.apply(i as f32 / 20.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
        assert!(Easing::BackOut.apply(0.6) > 1.0);
    }

    #[test]
    fn bezier_midpoint_is_reasonable() {
        let v = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75).apply(0.5);
        assert!((v - 0.5).abs() < 1e-3);
    }
}
