//! Scroll-linked triggers: a region of the page, defined by where a reference
//! element's edge meets a line in the viewport, mapped onto an animation.

use super::intent::MotionState;
use crate::error::{FolioError, Result};
use std::str::FromStr;

/// `"<element edge> <viewport line>"`, e.g. `"top 80%"` or `"bottom top"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPosition {
    /// Fraction down the reference element (0 = top edge, 1 = bottom edge).
    pub element: f64,
    /// Fraction down the viewport (0 = top, 1 = bottom).
    pub viewport: f64,
}

impl TriggerPosition {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }
}

fn parse_line(word: &str) -> Option<f64> {
    match word {
        "top" => Some(0.0),
        "center" => Some(0.5),
        "bottom" => Some(1.0),
        w => {
            let pct = w.strip_suffix('%')?.parse::<f64>().ok()?;
            pct.is_finite().then_some(pct / 100.0)
        }
    }
}

impl FromStr for TriggerPosition {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let (Some(a), Some(b), None) = (words.next(), words.next(), words.next()) else {
            return Err(FolioError::TriggerPosition(s.to_string()));
        };
        match (parse_line(a), parse_line(b)) {
            (Some(element), Some(viewport)) => Ok(Self { element, viewport }),
            _ => Err(FolioError::TriggerPosition(s.to_string())),
        }
    }
}

/// Document-space layout the trigger region is resolved against.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriggerLayout {
    /// Reference element top, in document coordinates.
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Replay {
    Once,
    Repeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerMode {
    /// Transform is a direct function of scroll offset.
    Scrub,
    /// Crossing the start line plays a fixed-duration animation.
    Toggle(Replay),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerAction {
    None,
    Scrub(f64),
    Play,
    Reverse,
}

#[derive(Clone, Debug)]
pub struct ScrollTrigger {
    pub start: TriggerPosition,
    pub end: TriggerPosition,
    pub mode: TriggerMode,
    past_start: Option<bool>,
    played: bool,
    last_progress: Option<f64>,
}

impl ScrollTrigger {
    pub fn new(start: TriggerPosition, end: TriggerPosition, mode: TriggerMode) -> Self {
        Self {
            start,
            end,
            mode,
            past_start: None,
            played: false,
            last_progress: None,
        }
    }

    /// Default region: element top at 80% of the viewport to its bottom at 20%.
    pub fn toggle(replay: Replay) -> Self {
        Self::new(
            TriggerPosition::new(0.0, 0.8),
            TriggerPosition::new(1.0, 0.2),
            TriggerMode::Toggle(replay),
        )
    }

    pub fn parse(start: &str, end: &str, mode: TriggerMode) -> Result<Self> {
        Ok(Self::new(start.parse()?, end.parse()?, mode))
    }

    fn scroll_for(pos: TriggerPosition, layout: &TriggerLayout) -> f64 {
        layout.element_top + pos.element * layout.element_height
            - pos.viewport * layout.viewport_height
    }

    /// Scroll offsets at which the region starts and ends.
    pub fn region(&self, layout: &TriggerLayout) -> (f64, f64) {
        (
            Self::scroll_for(self.start, layout),
            Self::scroll_for(self.end, layout),
        )
    }

    pub fn progress(&self, scroll_y: f64, layout: &TriggerLayout) -> f64 {
        let (start, end) = self.region(layout);
        if end <= start {
            return if scroll_y >= start { 1.0 } else { 0.0 };
        }
        ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
    }

    pub fn has_played(&self) -> bool {
        self.played
    }

    /// Feed the current scroll offset; returns what the bound animation should do.
    pub fn update(&mut self, scroll_y: f64, layout: &TriggerLayout) -> TriggerAction {
        match self.mode {
            TriggerMode::Scrub => {
                let p = self.progress(scroll_y, layout);
                if self.last_progress == Some(p) {
                    return TriggerAction::None;
                }
                self.last_progress = Some(p);
                TriggerAction::Scrub(p)
            }
            TriggerMode::Toggle(replay) => {
                let (start, _) = self.region(layout);
                let now_past = scroll_y >= start;
                let was_past = self.past_start.replace(now_past).unwrap_or(false);
                match (was_past, now_past, replay) {
                    (false, true, Replay::Once) if !self.played => {
                        self.played = true;
                        TriggerAction::Play
                    }
                    (false, true, Replay::Repeat) => {
                        self.played = true;
                        TriggerAction::Play
                    }
                    (true, false, Replay::Repeat) => TriggerAction::Reverse,
                    _ => TriggerAction::None,
                }
            }
        }
    }
}

/// Pair of states a scrubbed element moves between, with no easing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubBinding {
    pub from: MotionState,
    pub to: MotionState,
}

impl ScrubBinding {
    #[inline]
    pub fn state_at(&self, progress: f64) -> MotionState {
        self.from.lerp(&self.to, progress.clamp(0.0, 1.0) as f32)
    }
}

/// Vertical parallax offset for an element at `element_top` (document space).
#[inline]
pub fn parallax_offset(scroll_y: f64, element_top: f64, viewport_height: f64, speed: f64) -> f64 {
    (scroll_y - element_top + viewport_height) * speed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> TriggerLayout {
        TriggerLayout {
            element_top: 1000.0,
            element_height: 400.0,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn parses_keyword_and_percent_positions() {
        assert_eq!(
            "top 80%".parse::<TriggerPosition>().ok(),
            Some(TriggerPosition::new(0.0, 0.8))
        );
        assert_eq!(
            "bottom top".parse::<TriggerPosition>().ok(),
            Some(TriggerPosition::new(1.0, 0.0))
        );
        assert!("top".parse::<TriggerPosition>().is_err());
        assert!("left 10%".parse::<TriggerPosition>().is_err());
        assert!("top 10% extra".parse::<TriggerPosition>().is_err());
    }

    #[test]
    fn region_resolves_against_layout() {
        let t = ScrollTrigger::toggle(Replay::Once);
        let (start, end) = t.region(&layout());
        assert!((start - 360.0).abs() < 1e-9);
        assert!((end - 1240.0).abs() < 1e-9);
    }

    #[test]
    fn scrub_is_direct_and_clamped() {
        let mut t = ScrollTrigger::parse("top top", "bottom top", TriggerMode::Scrub)
            .unwrap_or_else(|_| ScrollTrigger::toggle(Replay::Once));
        assert_eq!(t.update(0.0, &layout()), TriggerAction::Scrub(0.0));
        assert_eq!(t.update(1200.0, &layout()), TriggerAction::Scrub(0.5));
        assert_eq!(t.update(1200.0, &layout()), TriggerAction::None);
        assert_eq!(t.update(9000.0, &layout()), TriggerAction::Scrub(1.0));
    }

    #[test]
    fn toggle_once_is_idempotent() {
        let mut t = ScrollTrigger::toggle(Replay::Once);
        assert_eq!(t.update(0.0, &layout()), TriggerAction::None);
        assert_eq!(t.update(500.0, &layout()), TriggerAction::Play);
        assert_eq!(t.update(0.0, &layout()), TriggerAction::None);
        assert_eq!(t.update(500.0, &layout()), TriggerAction::None);
        assert!(t.has_played());
    }

    #[test]
    fn toggle_repeat_replays() {
        let mut t = ScrollTrigger::toggle(Replay::Repeat);
        assert_eq!(t.update(500.0, &layout()), TriggerAction::Play);
        assert_eq!(t.update(0.0, &layout()), TriggerAction::Reverse);
        assert_eq!(t.update(500.0, &layout()), TriggerAction::Play);
    }

    #[test]
    fn parallax_matches_formula() {
        assert_eq!(parallax_offset(200.0, 1000.0, 800.0, 0.5), 0.0);
        assert_eq!(parallax_offset(400.0, 1000.0, 800.0, 0.5), 100.0);
    }
}
