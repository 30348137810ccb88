//! Optional third-party embeds: a 3D scene and looping vector animations.
//! Neither may ever block or break the page around it.

use crate::easing::Easing;
use crate::error::FolioError;
use crate::motion::MotionState;
use crate::visibility::VisibilityChange;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbedState {
    /// No scene configured; the static placeholder is shown.
    Placeholder,
    Loading,
    Ready,
    /// Load failed; falls back to the static placeholder.
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneEmbed {
    scene: Option<String>,
    state: EmbedState,
}

impl SceneEmbed {
    /// A blank scene id counts as absent.
    pub fn new(scene: Option<&str>) -> Self {
        let scene = scene.map(str::trim).filter(|s| !s.is_empty());
        Self {
            state: if scene.is_some() {
                EmbedState::Loading
            } else {
                EmbedState::Placeholder
            },
            scene: scene.map(str::to_string),
        }
    }

    #[inline]
    pub fn state(&self) -> EmbedState {
        self.state
    }

    pub fn scene(&self) -> Option<&str> {
        self.scene.as_deref()
    }

    pub fn on_load(&mut self) -> bool {
        if self.state != EmbedState::Loading {
            return false;
        }
        self.state = EmbedState::Ready;
        true
    }

    /// Returns the error to log; the state drops back to the placeholder.
    pub fn on_error(&mut self, reason: &str) -> Option<FolioError> {
        if self.state != EmbedState::Loading {
            return None;
        }
        self.state = EmbedState::Failed;
        Some(FolioError::EmbedLoad(format!(
            "{}: {}",
            self.scene.as_deref().unwrap_or_default(),
            reason
        )))
    }

    #[inline]
    pub fn shows_placeholder(&self) -> bool {
        matches!(self.state, EmbedState::Placeholder | EmbedState::Failed)
    }

    #[inline]
    pub fn shows_spinner(&self) -> bool {
        self.state == EmbedState::Loading
    }
}

pub const SCENE_PLACEHOLDER_TITLE: &str = "3D Scene Placeholder";
pub const SCENE_PLACEHOLDER_HINT: &str = "Add your Spline scene URL to activate";

const PARTICLE_RISE_PX: f32 = 20.0;
const PARTICLE_OPACITY_LOW: f32 = 0.2;
const PARTICLE_OPACITY_HIGH: f32 = 0.5;

/// A dot drifting behind the scene placeholder. Positions are percentages of
/// the placeholder box; times are in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f32,
    pub top_pct: f32,
    pub delay: f32,
    pub period: f32,
}

impl Particle {
    /// Rises and brightens to the middle of each period, then falls back.
    /// Holds the resting state until its delay has passed.
    pub fn sample(&self, since_mount: Duration) -> MotionState {
        let t = since_mount.as_secs_f32() - self.delay;
        let phase = if t <= 0.0 || self.period <= 0.0 {
            0.0
        } else {
            (t % self.period) / self.period
        };
        let k = Easing::EaseInOut.apply(1.0 - (2.0 * phase - 1.0).abs());
        MotionState {
            y: -PARTICLE_RISE_PX * k,
            opacity: PARTICLE_OPACITY_LOW + (PARTICLE_OPACITY_HIGH - PARTICLE_OPACITY_LOW) * k,
            ..MotionState::VISIBLE
        }
    }

    #[inline]
    pub fn rest(&self) -> MotionState {
        self.sample(Duration::ZERO)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LottieTrigger {
    #[default]
    Autoplay,
    /// Play while at least half visible, pause otherwise.
    OnView,
    /// Play while hovered, stop (rewind) on leave.
    OnHover,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LottieCommand {
    Play,
    Pause,
    Stop,
    SetSpeed(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LottiePlayback {
    pub trigger: LottieTrigger,
    pub speed: f32,
    pub looped: bool,
    playing: bool,
    suppressed: bool,
}

impl LottiePlayback {
    pub fn new(trigger: LottieTrigger, speed: f32, looped: bool) -> Self {
        Self {
            trigger,
            speed,
            looped,
            playing: false,
            suppressed: false,
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Commands to issue once the player is mounted.
    pub fn mount(&mut self) -> Vec<LottieCommand> {
        let mut out = vec![LottieCommand::SetSpeed(self.speed)];
        if self.trigger == LottieTrigger::Autoplay {
            self.playing = true;
        }
        if self.suppressed {
            out.push(LottieCommand::Stop);
        } else if self.playing {
            out.push(LottieCommand::Play);
        }
        out
    }

    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Hold the animation stopped under reduced motion. Triggers keep being
    /// tracked, so lifting the hold resumes whatever should be running.
    pub fn set_suppressed(&mut self, suppressed: bool) -> Option<LottieCommand> {
        if self.suppressed == suppressed {
            return None;
        }
        self.suppressed = suppressed;
        Some(if suppressed {
            LottieCommand::Stop
        } else if self.playing {
            LottieCommand::Play
        } else {
            LottieCommand::Pause
        })
    }

    pub fn on_visibility(&mut self, change: VisibilityChange) -> Option<LottieCommand> {
        if self.trigger != LottieTrigger::OnView {
            return None;
        }
        match change {
            VisibilityChange::Entered => self.set_playing(true, LottieCommand::Play),
            VisibilityChange::Exited => self.set_playing(false, LottieCommand::Pause),
            VisibilityChange::Unchanged => None,
        }
    }

    pub fn on_hover(&mut self, entered: bool) -> Option<LottieCommand> {
        if self.trigger != LottieTrigger::OnHover {
            return None;
        }
        if entered {
            self.set_playing(true, LottieCommand::Play)
        } else {
            self.set_playing(false, LottieCommand::Stop)
        }
    }

    /// End of one iteration.
    pub fn on_complete(&mut self) {
        if !self.looped {
            self.playing = false;
        }
    }

    fn set_playing(&mut self, playing: bool, cmd: LottieCommand) -> Option<LottieCommand> {
        if self.playing == playing {
            return None;
        }
        self.playing = playing;
        (!self.suppressed).then_some(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_without_id_is_placeholder() {
        assert_eq!(SceneEmbed::new(None).state(), EmbedState::Placeholder);
        assert_eq!(SceneEmbed::new(Some("  ")).state(), EmbedState::Placeholder);
    }

    #[test]
    fn scene_load_and_failure() {
        let mut ok = SceneEmbed::new(Some("abc"));
        assert!(ok.shows_spinner());
        assert!(ok.on_load());
        assert_eq!(ok.state(), EmbedState::Ready);
        assert!(ok.on_error("late").is_none());

        let mut bad = SceneEmbed::new(Some("abc"));
        assert!(matches!(bad.on_error("404"), Some(FolioError::EmbedLoad(_))));
        assert!(bad.shows_placeholder());
    }

    #[test]
    fn suppressed_lottie_tracks_triggers_silently() {
        let mut l = LottiePlayback::new(LottieTrigger::OnView, 1.0, true);
        assert_eq!(l.set_suppressed(true), Some(LottieCommand::Stop));
        assert_eq!(l.mount(), vec![LottieCommand::SetSpeed(1.0), LottieCommand::Stop]);
        assert_eq!(l.on_visibility(VisibilityChange::Entered), None);
        assert!(l.is_playing());
        assert_eq!(l.set_suppressed(false), Some(LottieCommand::Play));
        assert_eq!(l.set_suppressed(false), None);
        assert_eq!(l.on_visibility(VisibilityChange::Exited), Some(LottieCommand::Pause));
        l.set_suppressed(true);
        assert_eq!(l.set_suppressed(false), Some(LottieCommand::Pause));
    }

    #[test]
    fn particle_peaks_mid_period() {
        let p = Particle {
            left_pct: 5.0,
            top_pct: 10.0,
            delay: 0.5,
            period: 2.0,
        };
        assert_eq!(p.sample(Duration::from_millis(400)), p.rest());
        assert!((p.rest().opacity - 0.2).abs() < 1e-6);
        let peak = p.sample(Duration::from_millis(1500));
        assert!((peak.y + 20.0).abs() < 1e-4);
        assert!((peak.opacity - 0.5).abs() < 1e-4);
        let back = p.sample(Duration::from_millis(2500));
        assert!(back.y.abs() < 1e-4);
    }

    #[test]
    fn lottie_on_view_toggles() {
        let mut l = LottiePlayback::new(LottieTrigger::OnView, 1.5, true);
        assert_eq!(l.mount(), vec![LottieCommand::SetSpeed(1.5)]);
        assert_eq!(l.on_visibility(VisibilityChange::Entered), Some(LottieCommand::Play));
        assert_eq!(l.on_visibility(VisibilityChange::Entered), None);
        assert_eq!(l.on_visibility(VisibilityChange::Exited), Some(LottieCommand::Pause));
        assert_eq!(l.on_hover(true), None);
    }

    #[test]
    fn lottie_hover_stops_on_leave() {
        let mut l = LottiePlayback::new(LottieTrigger::OnHover, 1.0, false);
        l.mount();
        assert_eq!(l.on_hover(true), Some(LottieCommand::Play));
        l.on_complete();
        assert!(!l.is_playing());
        assert_eq!(l.on_hover(false), None);
    }
}
