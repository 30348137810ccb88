use super::intent::{AnimationIntent, MotionState, Trigger};
use crate::constants::SECTION_REVEAL_MS;
use crate::easing::Easing;
use std::time::Duration;

/// Entrance animation for a whole page section, played once when 20% of it
/// is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionReveal {
    #[default]
    Fade,
    Slide,
    Scale,
    None,
}

impl SectionReveal {
    pub fn hidden_state(self) -> MotionState {
        match self {
            SectionReveal::Fade => MotionState::HIDDEN,
            SectionReveal::Slide => MotionState::hidden_offset(0.0, 50.0),
            SectionReveal::Scale => MotionState {
                scale: 0.95,
                ..MotionState::HIDDEN
            },
            SectionReveal::None => MotionState::VISIBLE,
        }
    }

    pub fn intent(self) -> AnimationIntent {
        AnimationIntent::new(Trigger::OnViewportEnter, self.hidden_state(), MotionState::VISIBLE)
            .with_easing(Easing::EaseOut)
            .with_duration(Duration::from_millis(SECTION_REVEAL_MS))
    }

    /// `data-reveal` attribute values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fade" => Some(SectionReveal::Fade),
            "slide" => Some(SectionReveal::Slide),
            "scale" => Some(SectionReveal::Scale),
            "none" => Some(SectionReveal::None),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_starts_visible() {
        let i = SectionReveal::None.intent();
        assert_eq!(i.sample(0, Duration::ZERO), MotionState::VISIBLE);
    }

    #[test]
    fn slide_starts_below() {
        let i = SectionReveal::parse("slide").unwrap_or_default().intent();
        assert_eq!(i.from.y, 50.0);
        assert_eq!(i.duration, Duration::from_millis(800));
    }
}
