//! Splitting strings into independently animated units.
//!
//! Per-character modes split on extended grapheme clusters, so an emoji or a
//! letter with combining marks is one unit, never a broken half-glyph.

use super::intent::{AnimationIntent, MotionState, Trigger};
use crate::constants::{TEXT_DURATION_MS, TEXT_STAGGER_MS, TYPEWRITER_UNIT_MS};
use crate::easing::Easing;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

pub const NBSP: &str = "\u{00A0}";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextMode {
    #[default]
    Fade,
    SlideUp,
    Typewriter,
    Reveal,
    Wave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitGranularity {
    Words,
    Graphemes,
    Whole,
}

/// Per-mode transition for one unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextVariant {
    pub from: MotionState,
    pub easing: Easing,
    pub duration: Duration,
}

impl TextMode {
    pub fn granularity(self) -> SplitGranularity {
        match self {
            TextMode::Fade | TextMode::SlideUp => SplitGranularity::Words,
            TextMode::Typewriter | TextMode::Wave => SplitGranularity::Graphemes,
            TextMode::Reveal => SplitGranularity::Whole,
        }
    }

    /// `Reveal` slides out from under an overflow-clipped wrapper.
    #[inline]
    pub fn needs_mask(self) -> bool {
        matches!(self, TextMode::Reveal)
    }

    pub fn variant(self, duration: Duration) -> TextVariant {
        match self {
            TextMode::Fade => TextVariant {
                from: MotionState::HIDDEN,
                easing: Easing::EaseOut,
                duration,
            },
            TextMode::SlideUp => TextVariant {
                from: MotionState::hidden_offset(0.0, 20.0),
                easing: Easing::EaseOut,
                duration,
            },
            TextMode::Typewriter => TextVariant {
                from: MotionState::hidden_offset(-10.0, 0.0),
                easing: Easing::Linear,
                duration: Duration::from_millis(TYPEWRITER_UNIT_MS),
            },
            TextMode::Reveal => TextVariant {
                from: MotionState {
                    y_pct: 100.0,
                    ..MotionState::HIDDEN
                },
                easing: Easing::REVEAL,
                duration,
            },
            TextMode::Wave => TextVariant {
                from: MotionState {
                    y: 20.0,
                    rotate_x: -90.0,
                    ..MotionState::HIDDEN
                },
                easing: Easing::BackOut,
                duration,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextOptions {
    pub delay: Duration,
    pub duration: Duration,
    pub stagger: Duration,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            duration: Duration::from_millis(TEXT_DURATION_MS),
            stagger: Duration::from_millis(TEXT_STAGGER_MS),
        }
    }
}

impl TextOptions {
    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }

    pub fn stagger_ms(mut self, ms: u64) -> Self {
        self.stagger = Duration::from_millis(ms);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextUnit {
    /// Rendered text; a lone space becomes a non-breaking space.
    pub text: String,
    pub index: usize,
    pub is_space: bool,
    pub start: Duration,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SplitText {
    /// Accessible name: always the original, unsplit string.
    pub label: String,
    pub mode: TextMode,
    pub units: Vec<TextUnit>,
    pub intent: AnimationIntent,
}

impl SplitText {
    pub fn masked(&self) -> bool {
        self.mode.needs_mask()
    }

    /// Concatenation of the unit texts with spaces restored.
    pub fn rendered_text(&self) -> String {
        let sep = match self.mode.granularity() {
            SplitGranularity::Words => " ",
            _ => "",
        };
        self.units
            .iter()
            .map(|u| if u.is_space { " " } else { u.text.as_str() })
            .collect::<Vec<_>>()
            .join(sep)
    }
}

pub fn split_text(text: &str, mode: TextMode, options: TextOptions) -> SplitText {
    let variant = mode.variant(options.duration);
    let mut intent = AnimationIntent::new(Trigger::OnViewportEnter, variant.from, MotionState::VISIBLE)
        .with_easing(variant.easing)
        .with_duration(variant.duration)
        .with_delay(options.delay);
    if mode.granularity() != SplitGranularity::Whole {
        intent = intent.with_stagger(options.stagger);
    }

    let pieces: Vec<&str> = match mode.granularity() {
        SplitGranularity::Words => text.split(' ').collect(),
        SplitGranularity::Graphemes => text.graphemes(true).collect(),
        SplitGranularity::Whole => vec![text],
    };

    let units = pieces
        .into_iter()
        .enumerate()
        .map(|(index, piece)| {
            let is_space = piece == " ";
            TextUnit {
                text: if is_space { NBSP.to_string() } else { piece.to_string() },
                index,
                is_space,
                start: intent.start_offset(index),
            }
        })
        .collect();

    SplitText {
        label: text.to_string(),
        mode,
        units,
        intent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_up_splits_words() {
        let s = split_text("Let's Work Together", TextMode::SlideUp, TextOptions::default());
        let words: Vec<&str> = s.units.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(words, vec!["Let's", "Work", "Together"]);
        assert_eq!(s.rendered_text(), "Let's Work Together");
    }

    #[test]
    fn reveal_is_one_masked_unit() {
        let s = split_text("About This Project", TextMode::Reveal, TextOptions::default());
        assert_eq!(s.units.len(), 1);
        assert!(s.masked());
        assert_eq!(s.intent.from.y_pct, 100.0);
    }

    #[test]
    fn typewriter_keeps_graphemes_whole() {
        let s = split_text("e\u{301}👍🏽!", TextMode::Typewriter, TextOptions::default());
        let units: Vec<&str> = s.units.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(units, vec!["e\u{301}", "👍🏽", "!"]);
        assert_eq!(s.intent.duration, Duration::from_millis(TYPEWRITER_UNIT_MS));
    }

    #[test]
    fn units_start_after_delay_plus_stagger() {
        let s = split_text("abc", TextMode::Wave, TextOptions::default().delay_ms(300).stagger_ms(50));
        let starts: Vec<u64> = s.units.iter().map(|u| u.start.as_millis() as u64).collect();
        assert_eq!(starts, vec![300, 350, 400]);
    }
}
