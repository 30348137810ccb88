use super::spring::Spring;
use super::tween::Tween;
use crate::constants::{
    CARD_HOVER_TWEEN_MS, GLOW_SHADOW, LIFT_OFFSET_PX, LIFT_SHADOW, TILT_MAX_DEG,
    TILT_SPRING_DAMPING, TILT_SPRING_STIFFNESS,
};
use crate::easing::Easing;
use crate::geometry::Rect;
use glam::Vec2;
use std::time::Duration;

/// Mutually exclusive card hover treatments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverEffect {
    #[default]
    Tilt,
    Lift,
    Glow,
    None,
}

/// Resolved per-frame style for a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardStyle {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub translate_y: f32,
    /// Shadow to apply and how strongly (0..1), if any.
    pub shadow: Option<(&'static str, f32)>,
    /// Radial glow center in percent of the card box.
    pub glow_at: Option<Vec2>,
}

impl CardStyle {
    pub fn css_transform(&self) -> String {
        format!(
            "perspective(800px) rotateX({:.2}deg) rotateY({:.2}deg) translateY({:.2}px)",
            self.rotate_x_deg, self.rotate_y_deg, self.translate_y
        )
    }
}

#[derive(Clone, Debug)]
pub struct TiltCard {
    effect: HoverEffect,
    fx: Spring,
    fy: Spring,
    hover: Tween<f32>,
}

impl TiltCard {
    pub fn new(effect: HoverEffect) -> Self {
        Self {
            effect,
            fx: Spring::new(TILT_SPRING_STIFFNESS, TILT_SPRING_DAMPING),
            fy: Spring::new(TILT_SPRING_STIFFNESS, TILT_SPRING_DAMPING),
            hover: Tween::settled(0.0),
        }
    }

    #[inline]
    pub fn effect(&self) -> HoverEffect {
        self.effect
    }

    pub fn pointer_move(&mut self, bounds: Rect, pointer: Vec2) -> bool {
        if self.effect == HoverEffect::None {
            return false;
        }
        let Some(f) = bounds.centered_fraction(pointer) else {
            return false;
        };
        if self.hover.target() < 1.0 {
            self.hover.retarget(
                1.0,
                Duration::from_millis(CARD_HOVER_TWEEN_MS),
                Easing::EaseOut,
            );
        }
        if self.effect == HoverEffect::Tilt {
            self.fx.set_target(f.x);
            self.fy.set_target(f.y);
        }
        true
    }

    pub fn pointer_leave(&mut self) {
        self.fx.set_target(0.0);
        self.fy.set_target(0.0);
        self.hover.retarget(
            0.0,
            Duration::from_millis(CARD_HOVER_TWEEN_MS),
            Easing::EaseOut,
        );
    }

    /// Back to neutral with no spring-back.
    pub fn reset(&mut self) {
        for s in [&mut self.fx, &mut self.fy] {
            s.set_target(0.0);
            s.snap();
        }
        self.hover.snap(0.0);
    }

    pub fn step(&mut self, dt: Duration) {
        self.fx.step(dt);
        self.fy.step(dt);
        self.hover.step(dt);
    }

    pub fn is_at_rest(&self) -> bool {
        self.fx.is_at_rest() && self.fy.is_at_rest() && self.hover.is_finished()
    }

    /// Smoothed pointer fraction, each axis in -0.5..0.5.
    pub fn fraction(&self) -> Vec2 {
        Vec2::new(self.fx.value(), self.fy.value())
    }

    pub fn style(&self) -> CardStyle {
        let hover = self.hover.value();
        let mut style = CardStyle {
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            translate_y: 0.0,
            shadow: None,
            glow_at: None,
        };
        match self.effect {
            HoverEffect::Tilt => {
                let f = self.fraction();
                // -0.5..0.5 maps onto +max..-max for X and -max..+max for Y.
                style.rotate_x_deg = -f.y * 2.0 * TILT_MAX_DEG;
                style.rotate_y_deg = f.x * 2.0 * TILT_MAX_DEG;
                style.glow_at = Some((f + Vec2::splat(0.5)) * 100.0);
            }
            HoverEffect::Lift => {
                style.translate_y = LIFT_OFFSET_PX * hover;
                style.shadow = Some((LIFT_SHADOW, hover));
            }
            HoverEffect::Glow => {
                style.shadow = Some((GLOW_SHADOW, hover));
            }
            HoverEffect::None => {}
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(card: &mut TiltCard) {
        for _ in 0..300 {
            card.step(Duration::from_millis(16));
        }
    }

    #[test]
    fn corner_hover_tilts_to_max() {
        let mut card = TiltCard::new(HoverEffect::Tilt);
        let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert!(card.pointer_move(bounds, Vec2::new(200.0, 0.0)));
        settle(&mut card);
        let s = card.style();
        assert!((s.rotate_y_deg - 10.0).abs() < 0.05);
        assert!((s.rotate_x_deg - 10.0).abs() < 0.05);
        let glow = s.glow_at.unwrap_or_default();
        assert!((glow.x - 100.0).abs() < 0.5 && glow.y.abs() < 0.5);
    }

    #[test]
    fn leave_springs_back_to_neutral() {
        let mut card = TiltCard::new(HoverEffect::Tilt);
        card.pointer_move(Rect::new(0.0, 0.0, 100.0, 100.0), Vec2::new(0.0, 100.0));
        settle(&mut card);
        card.pointer_leave();
        settle(&mut card);
        assert!(card.is_at_rest());
        assert_eq!(card.fraction(), Vec2::ZERO);
    }

    #[test]
    fn reset_drops_tilt_in_one_step() {
        let mut card = TiltCard::new(HoverEffect::Glow);
        card.pointer_move(Rect::new(0.0, 0.0, 100.0, 100.0), Vec2::new(90.0, 90.0));
        settle(&mut card);
        card.reset();
        assert!(card.is_at_rest());
        assert_eq!(card.style().shadow, Some((GLOW_SHADOW, 0.0)));
    }

    #[test]
    fn lift_translates_without_rotation() {
        let mut card = TiltCard::new(HoverEffect::Lift);
        card.pointer_move(Rect::new(0.0, 0.0, 100.0, 100.0), Vec2::new(10.0, 10.0));
        settle(&mut card);
        let s = card.style();
        assert_eq!(s.rotate_x_deg, 0.0);
        assert_eq!(s.translate_y, LIFT_OFFSET_PX);
        assert_eq!(s.shadow, Some((LIFT_SHADOW, 1.0)));
    }

    #[test]
    fn none_ignores_pointer() {
        let mut card = TiltCard::new(HoverEffect::None);
        assert!(!card.pointer_move(Rect::new(0.0, 0.0, 10.0, 10.0), Vec2::new(1.0, 1.0)));
        assert_eq!(card.style().shadow, None);
    }
}
