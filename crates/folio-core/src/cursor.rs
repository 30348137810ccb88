//! Custom pointer overlay state.
//!
//! Raw coordinates are captured per pointer event; the ring position is
//! smoothed once per animation frame, so its update rate never exceeds the
//! display refresh rate no matter how fast events arrive.

use crate::constants::{
    CURSOR_COLOR, CURSOR_DOT_SIZE_PX, CURSOR_HOVER_TWEEN_MS, CURSOR_PRESS_TWEEN_MS,
    CURSOR_RING_SIZE_PX, CURSOR_SCALE_HOVER, CURSOR_SCALE_IDLE, CURSOR_SCALE_PRESSED,
    CURSOR_SMOOTHING,
};
use crate::easing::Easing;
use crate::motion::Tween;
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct CursorSettings {
    pub color: String,
    pub ring_size: f32,
    pub dot_size: f32,
    /// Fraction of the remaining distance the ring covers each frame.
    pub smoothing: f32,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            color: CURSOR_COLOR.to_string(),
            ring_size: CURSOR_RING_SIZE_PX,
            dot_size: CURSOR_DOT_SIZE_PX,
            smoothing: CURSOR_SMOOTHING,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub raw: Vec2,
    pub smoothed: Vec2,
    pub is_over_interactive: bool,
    pub is_pressed: bool,
    pub is_window_focused: bool,
    pub in_viewport: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            raw: Vec2::ZERO,
            smoothed: Vec2::ZERO,
            is_over_interactive: false,
            is_pressed: false,
            is_window_focused: true,
            in_viewport: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorPhase {
    Idle,
    Hovering,
    Pressed,
    Hidden,
}

impl PointerState {
    /// Hidden beats Pressed, which beats Hovering.
    pub fn phase(&self) -> CursorPhase {
        if !self.is_window_focused || !self.in_viewport {
            CursorPhase::Hidden
        } else if self.is_pressed {
            CursorPhase::Pressed
        } else if self.is_over_interactive {
            CursorPhase::Hovering
        } else {
            CursorPhase::Idle
        }
    }
}

/// Values the overlay writes to the DOM for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    /// Ring top-left corner.
    pub ring_pos: Vec2,
    /// Dot top-left corner.
    pub dot_pos: Vec2,
    pub ring_scale: f32,
    pub opacity: f32,
    /// Tint the ring fill while over an interactive element.
    pub filled: bool,
}

#[derive(Clone, Debug)]
pub struct CursorModel {
    settings: CursorSettings,
    pointer: PointerState,
    ring_scale: Tween<f32>,
}

impl Default for CursorModel {
    fn default() -> Self {
        Self::new(CursorSettings::default())
    }
}

impl CursorModel {
    pub fn new(settings: CursorSettings) -> Self {
        Self {
            settings,
            pointer: PointerState::default(),
            ring_scale: Tween::settled(CURSOR_SCALE_IDLE),
        }
    }

    #[inline]
    pub fn settings(&self) -> &CursorSettings {
        &self.settings
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn phase(&self) -> CursorPhase {
        self.pointer.phase()
    }

    /// The native cursor is hidden only while the window has focus.
    #[inline]
    pub fn body_class_active(&self) -> bool {
        self.pointer.is_window_focused
    }

    /// Scale the ring is heading toward.
    #[inline]
    pub fn ring_scale_target(&self) -> f32 {
        self.ring_scale.target()
    }

    fn resting_scale(&self) -> f32 {
        if self.pointer.is_over_interactive {
            CURSOR_SCALE_HOVER
        } else {
            CURSOR_SCALE_IDLE
        }
    }

    pub fn on_move(&mut self, pos: Vec2, interactive: bool) {
        self.pointer.raw = pos;
        if self.pointer.is_over_interactive == interactive {
            return;
        }
        self.pointer.is_over_interactive = interactive;
        if !self.pointer.is_pressed {
            self.ring_scale.retarget(
                self.resting_scale(),
                Duration::from_millis(CURSOR_HOVER_TWEEN_MS),
                Easing::Power2Out,
            );
        }
    }

    pub fn on_press(&mut self) {
        if self.pointer.is_pressed {
            return;
        }
        self.pointer.is_pressed = true;
        self.ring_scale.retarget(
            CURSOR_SCALE_PRESSED,
            Duration::from_millis(CURSOR_PRESS_TWEEN_MS),
            Easing::EaseOut,
        );
    }

    pub fn on_release(&mut self) {
        if !self.pointer.is_pressed {
            return;
        }
        self.pointer.is_pressed = false;
        self.ring_scale.retarget(
            self.resting_scale(),
            Duration::from_millis(CURSOR_HOVER_TWEEN_MS),
            Easing::ELASTIC,
        );
    }

    pub fn on_leave_viewport(&mut self) {
        self.pointer.in_viewport = false;
    }

    pub fn on_enter_viewport(&mut self) {
        self.pointer.in_viewport = true;
    }

    pub fn on_blur(&mut self) {
        self.pointer.is_window_focused = false;
    }

    /// Hover and press state survive a blur, so the overlay comes back as it was.
    pub fn on_focus(&mut self) {
        self.pointer.is_window_focused = true;
    }

    /// One animation frame: smooth the ring toward the raw position and
    /// advance the scale tween.
    pub fn step_frame(&mut self, dt: Duration) -> CursorFrame {
        let p = &mut self.pointer;
        p.smoothed += (p.raw - p.smoothed) * self.settings.smoothing;
        let ring_scale = self.ring_scale.step(dt);
        self.frame_with_scale(ring_scale)
    }

    /// Current values without advancing anything.
    pub fn frame(&self) -> CursorFrame {
        self.frame_with_scale(self.ring_scale.value())
    }

    fn frame_with_scale(&self, ring_scale: f32) -> CursorFrame {
        let p = &self.pointer;
        CursorFrame {
            ring_pos: p.smoothed - Vec2::splat(self.settings.ring_size / 2.0),
            dot_pos: p.raw - Vec2::splat(self.settings.dot_size / 2.0),
            ring_scale,
            opacity: if p.phase() == CursorPhase::Hidden { 0.0 } else { 1.0 },
            filled: p.is_over_interactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_lags_dot_tracks() {
        let mut c = CursorModel::default();
        c.on_move(Vec2::new(100.0, 200.0), false);
        let f = c.step_frame(Duration::from_millis(16));
        assert!(f.dot_pos.abs_diff_eq(Vec2::new(96.0, 196.0), 1e-4));
        assert!(f.ring_pos.abs_diff_eq(Vec2::new(15.0 - 10.0, 30.0 - 10.0), 1e-3));
        for _ in 0..200 {
            c.step_frame(Duration::from_millis(16));
        }
        assert!(c.pointer().smoothed.abs_diff_eq(Vec2::new(100.0, 200.0), 1e-2));
    }

    #[test]
    fn press_overrides_hover_scale() {
        let mut c = CursorModel::default();
        c.on_move(Vec2::ZERO, true);
        assert_eq!(c.ring_scale_target(), CURSOR_SCALE_HOVER);
        c.on_press();
        assert_eq!(c.ring_scale_target(), CURSOR_SCALE_PRESSED);
        c.on_move(Vec2::ONE, false);
        assert_eq!(c.ring_scale_target(), CURSOR_SCALE_PRESSED);
        c.on_release();
        assert_eq!(c.ring_scale_target(), CURSOR_SCALE_IDLE);
    }

    #[test]
    fn leaving_viewport_hides() {
        let mut c = CursorModel::default();
        c.on_leave_viewport();
        assert_eq!(c.phase(), CursorPhase::Hidden);
        assert_eq!(c.frame().opacity, 0.0);
        assert!(c.body_class_active());
        c.on_enter_viewport();
        assert_eq!(c.phase(), CursorPhase::Idle);
    }
}
