use super::magnetic::Magnetic;
use super::tween::Tween;
use crate::constants::{BUTTON_HOVER_SCALE, BUTTON_PRESS_SCALE, MAGNETIC_STRENGTH};
use crate::easing::Easing;
use crate::geometry::Rect;
use glam::Vec2;
use std::time::Duration;

const SCALE_TWEEN_MS: u64 = 150;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

/// Magnetic wrapper plus hover/press scale for a call-to-action button.
#[derive(Clone, Debug)]
pub struct AnimatedButton {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    disabled: bool,
    hovered: bool,
    pressed: bool,
    magnetic: Magnetic,
    scale: Tween<f32>,
}

impl AnimatedButton {
    pub fn new(variant: ButtonVariant, size: ButtonSize) -> Self {
        Self {
            variant,
            size,
            disabled: false,
            hovered: false,
            pressed: false,
            magnetic: Magnetic::new(MAGNETIC_STRENGTH),
            scale: Tween::settled(1.0),
        }
    }

    pub fn with_magnetic_strength(mut self, strength: f32) -> Self {
        self.magnetic = Magnetic::new(strength);
        self
    }

    /// Disabled buttons neither scale nor follow the pointer.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.magnetic.reset();
            self.hovered = false;
            self.pressed = false;
            self.scale.snap(1.0);
        }
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn class_list(&self) -> String {
        let mut out = format!("btn {} {}", self.variant.class(), self.size.class());
        if self.disabled {
            out.push_str(" btn-disabled");
        }
        out
    }

    fn target_scale(&self) -> f32 {
        if self.disabled {
            1.0
        } else if self.pressed {
            BUTTON_PRESS_SCALE
        } else if self.hovered {
            BUTTON_HOVER_SCALE
        } else {
            1.0
        }
    }

    fn retarget_scale(&mut self) {
        let target = self.target_scale();
        if self.scale.target() != target {
            self.scale
                .retarget(target, Duration::from_millis(SCALE_TWEEN_MS), Easing::EaseOut);
        }
    }

    pub fn pointer_move(&mut self, bounds: Rect, pointer: Vec2) {
        if self.disabled {
            return;
        }
        self.hovered = true;
        self.magnetic.pointer_move(bounds, pointer);
        self.retarget_scale();
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.pressed = false;
        self.magnetic.pointer_leave();
        self.retarget_scale();
    }

    pub fn press(&mut self) {
        self.pressed = !self.disabled;
        self.retarget_scale();
    }

    pub fn release(&mut self) {
        self.pressed = false;
        self.retarget_scale();
    }

    /// Drop hover, press and offset at once. `disabled` is kept.
    pub fn reset(&mut self) {
        self.hovered = false;
        self.pressed = false;
        self.magnetic.reset();
        self.scale.snap(1.0);
    }

    pub fn step(&mut self, dt: Duration) {
        self.magnetic.step(dt);
        self.scale.step(dt);
    }

    pub fn is_settled(&self) -> bool {
        self.magnetic.is_settled() && self.scale.is_finished()
    }

    pub fn css_transform(&self) -> String {
        let o = self.magnetic.offset();
        format!(
            "translate3d({:.2}px, {:.2}px, 0) scale({:.4})",
            o.x,
            o.y,
            self.scale.value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_then_press_scales() {
        let mut b = AnimatedButton::new(ButtonVariant::Primary, ButtonSize::Lg);
        let r = Rect::new(0.0, 0.0, 100.0, 40.0);
        b.pointer_move(r, Vec2::new(50.0, 20.0));
        b.step(Duration::from_millis(500));
        assert!(b.css_transform().ends_with("scale(1.0200)"));
        b.press();
        b.step(Duration::from_millis(500));
        assert!(b.css_transform().ends_with("scale(0.9800)"));
    }

    #[test]
    fn disabled_stays_put() {
        let mut b = AnimatedButton::new(ButtonVariant::Outline, ButtonSize::Sm);
        b.set_disabled(true);
        b.pointer_move(Rect::new(0.0, 0.0, 10.0, 10.0), Vec2::new(10.0, 10.0));
        b.press();
        b.step(Duration::from_millis(500));
        assert_eq!(b.css_transform(), "translate3d(0.00px, 0.00px, 0) scale(1.0000)");
        assert_eq!(b.class_list(), "btn btn-outline btn-sm btn-disabled");
    }
}
