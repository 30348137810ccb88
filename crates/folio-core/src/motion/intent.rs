use crate::easing::Easing;
use crate::prefs::{MotionGate, MotionPreference};
use std::time::Duration;

/// What starts an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    OnMount,
    OnViewportEnter,
    OnHover,
    OnPointerMove,
}

/// Visual properties an animation moves between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    /// Vertical offset as a percentage of the element's own height.
    pub y_pct: f32,
    pub scale: f32,
    pub rotate_x: f32,
}

impl Default for MotionState {
    fn default() -> Self {
        Self::VISIBLE
    }
}

impl MotionState {
    pub const VISIBLE: MotionState = MotionState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        y_pct: 0.0,
        scale: 1.0,
        rotate_x: 0.0,
    };

    pub const HIDDEN: MotionState = MotionState {
        opacity: 0.0,
        ..MotionState::VISIBLE
    };

    pub fn hidden_offset(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Self::HIDDEN
        }
    }

    pub fn lerp(&self, to: &MotionState, t: f32) -> MotionState {
        let l = |a: f32, b: f32| a + (b - a) * t;
        MotionState {
            opacity: l(self.opacity, to.opacity),
            x: l(self.x, to.x),
            y: l(self.y, to.y),
            y_pct: l(self.y_pct, to.y_pct),
            scale: l(self.scale, to.scale),
            rotate_x: l(self.rotate_x, to.rotate_x),
        }
    }

    /// CSS `transform` value for this state.
    pub fn css_transform(&self) -> String {
        let mut out = format!("translate3d({:.2}px, {:.2}px, 0)", self.x, self.y);
        if self.y_pct != 0.0 {
            out.push_str(&format!(" translateY({:.2}%)", self.y_pct));
        }
        if self.scale != 1.0 {
            out.push_str(&format!(" scale({:.4})", self.scale));
        }
        if self.rotate_x != 0.0 {
            out.push_str(&format!(" rotateX({:.2}deg)", self.rotate_x));
        }
        out
    }

    #[inline]
    pub fn css_opacity(&self) -> String {
        format!("{:.3}", self.opacity.clamp(0.0, 1.0))
    }
}

/// Declarative description of a transition, consumed once by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationIntent {
    pub trigger: Trigger,
    pub from: MotionState,
    pub to: MotionState,
    pub easing: Easing,
    pub duration: Duration,
    pub delay: Duration,
    pub stagger: Option<Duration>,
}

impl AnimationIntent {
    pub fn new(trigger: Trigger, from: MotionState, to: MotionState) -> Self {
        Self {
            trigger,
            from,
            to,
            easing: Easing::EaseOut,
            duration: Duration::from_millis(500),
            delay: Duration::ZERO,
            stagger: None,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = Some(stagger);
        self
    }

    /// Start time of unit `index`: `delay + index * stagger`.
    pub fn start_offset(&self, index: usize) -> Duration {
        self.start_offset_ranked(index as f32)
    }

    pub fn start_offset_ranked(&self, rank: f32) -> Duration {
        match self.stagger {
            Some(s) => {
                let nanos = (s.as_nanos() as f64 * f64::from(rank.max(0.0))).round();
                self.delay + Duration::from_nanos(nanos as u64)
            }
            None => self.delay,
        }
    }

    /// Time until the last of `units` finishes.
    pub fn total_duration(&self, units: usize) -> Duration {
        self.start_offset(units.saturating_sub(1)) + self.duration
    }

    /// State of a unit whose animation starts `start` into the timeline, at
    /// `elapsed` since the trigger fired.
    pub fn sample_at(&self, start: Duration, elapsed: Duration) -> MotionState {
        if elapsed <= start {
            return if self.duration.is_zero() && elapsed >= start {
                self.to
            } else {
                self.from
            };
        }
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (elapsed - start).as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(&self.to, self.easing.apply(t))
    }

    pub fn sample(&self, index: usize, elapsed: Duration) -> MotionState {
        self.sample_at(self.start_offset(index), elapsed)
    }

    /// Applies the reduced-motion degradation: no delay, no stagger, no tween.
    pub fn resolve(mut self, prefs: &MotionPreference) -> Self {
        if prefs.animations_enabled() {
            return self;
        }
        self.from = self.to;
        self.duration = Duration::ZERO;
        self.delay = Duration::ZERO;
        self.stagger = None;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayDirection {
    Forward,
    Reverse,
}

/// Plays an intent over a group of units, forwards or backwards.
#[derive(Clone, Debug)]
pub struct IntentPlayer {
    intent: AnimationIntent,
    starts: Vec<Duration>,
    elapsed: Duration,
    direction: PlayDirection,
    playing: bool,
}

impl IntentPlayer {
    pub fn new(intent: AnimationIntent, units: usize) -> Self {
        let starts = (0..units.max(1)).map(|i| intent.start_offset(i)).collect();
        Self::with_starts(intent, starts)
    }

    /// Units start at explicit offsets (e.g. center-out stagger order).
    pub fn with_starts(intent: AnimationIntent, starts: Vec<Duration>) -> Self {
        Self {
            intent,
            starts,
            elapsed: Duration::ZERO,
            direction: PlayDirection::Forward,
            playing: false,
        }
    }

    pub fn intent(&self) -> &AnimationIntent {
        &self.intent
    }

    #[inline]
    pub fn units(&self) -> usize {
        self.starts.len()
    }

    fn total(&self) -> Duration {
        self.starts.iter().copied().max().unwrap_or_default() + self.intent.duration
    }

    pub fn play(&mut self) {
        self.direction = PlayDirection::Forward;
        self.playing = true;
    }

    pub fn reverse(&mut self) {
        self.direction = PlayDirection::Reverse;
        self.playing = true;
    }

    /// Jump to the end state without animating.
    pub fn finish(&mut self) {
        self.elapsed = self.total();
        self.direction = PlayDirection::Forward;
        self.playing = false;
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    pub fn is_active(&self) -> bool {
        self.playing
    }

    pub fn step(&mut self, dt: Duration) {
        if !self.playing {
            return;
        }
        match self.direction {
            PlayDirection::Forward => {
                let total = self.total();
                self.elapsed = (self.elapsed + dt).min(total);
                if self.elapsed >= total {
                    self.playing = false;
                }
            }
            PlayDirection::Reverse => {
                self.elapsed = self.elapsed.saturating_sub(dt);
                if self.elapsed.is_zero() {
                    self.playing = false;
                }
            }
        }
    }

    /// Step under a preference that may change mid-flight. With motion
    /// reduced the player jumps to its end state instead of tweening. Returns
    /// true when the units need redrawing.
    pub fn step_gated(
        &mut self,
        dt: Duration,
        gate: &mut MotionGate,
        prefs: &MotionPreference,
    ) -> bool {
        let flipped = gate.update(prefs);
        if gate.is_reduced() {
            if flipped || self.playing {
                self.finish();
                return true;
            }
            return false;
        }
        if !self.playing {
            return false;
        }
        self.step(dt);
        true
    }

    pub fn state(&self, index: usize) -> MotionState {
        let start = self.starts.get(index).copied().unwrap_or_default();
        if self.elapsed.is_zero() && self.direction == PlayDirection::Reverse {
            return self.intent.from;
        }
        self.intent.sample_at(start, self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide_up() -> AnimationIntent {
        AnimationIntent::new(
            Trigger::OnViewportEnter,
            MotionState::hidden_offset(0.0, 20.0),
            MotionState::VISIBLE,
        )
        .with_easing(Easing::Linear)
        .with_duration(Duration::from_millis(100))
        .with_delay(Duration::from_millis(50))
        .with_stagger(Duration::from_millis(10))
    }

    #[test]
    fn stagger_schedules_units() {
        let i = slide_up();
        assert_eq!(i.start_offset(0), Duration::from_millis(50));
        assert_eq!(i.start_offset(3), Duration::from_millis(80));
        assert_eq!(i.total_duration(4), Duration::from_millis(180));
    }

    #[test]
    fn sample_moves_from_hidden_to_visible() {
        let i = slide_up();
        assert_eq!(i.sample(0, Duration::from_millis(10)), i.from);
        let mid = i.sample(0, Duration::from_millis(100));
        assert!((mid.y - 10.0).abs() < 1e-3);
        assert_eq!(i.sample(0, Duration::from_millis(400)), MotionState::VISIBLE);
    }

    #[test]
    fn reduced_motion_renders_end_state() {
        let prefs = MotionPreference {
            reduced_motion: true,
            ..MotionPreference::default()
        };
        let i = slide_up().resolve(&prefs);
        assert_eq!(i.sample(5, Duration::ZERO), MotionState::VISIBLE);
    }

    #[test]
    fn player_reverses_back_to_start() {
        let mut p = IntentPlayer::new(slide_up(), 2);
        p.play();
        p.step(Duration::from_millis(500));
        assert!(!p.is_active());
        assert_eq!(p.state(1), MotionState::VISIBLE);
        p.reverse();
        p.step(Duration::from_millis(500));
        assert_eq!(p.state(0), p.intent().from);
    }

    #[test]
    fn css_transform_includes_only_active_parts() {
        assert_eq!(
            MotionState::VISIBLE.css_transform(),
            "translate3d(0.00px, 0.00px, 0)"
        );
        let s = MotionState {
            scale: 1.5,
            rotate_x: -90.0,
            ..MotionState::VISIBLE
        };
        assert_eq!(
            s.css_transform(),
            "translate3d(0.00px, 0.00px, 0) scale(1.5000) rotateX(-90.00deg)"
        );
    }
}
