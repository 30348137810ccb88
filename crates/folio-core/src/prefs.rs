/// Environment capabilities that decide whether motion runs at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionPreference {
    /// `(prefers-reduced-motion: reduce)` matched, or forced by config.
    pub reduced_motion: bool,
    /// `IntersectionObserver` is available.
    pub observer_supported: bool,
}

impl Default for MotionPreference {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            observer_supported: true,
        }
    }
}

impl MotionPreference {
    /// Combine the media query result with an optional config override.
    pub fn detect(media_reduced: bool, forced: Option<bool>, observer_supported: bool) -> Self {
        Self {
            reduced_motion: forced.unwrap_or(media_reduced),
            observer_supported,
        }
    }

    #[inline]
    pub fn animations_enabled(&self) -> bool {
        !self.reduced_motion
    }
}

/// One binding's view of a preference that can flip while the page is up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionGate {
    reduced: bool,
}

impl MotionGate {
    pub fn new(prefs: &MotionPreference) -> Self {
        Self {
            reduced: prefs.reduced_motion,
        }
    }

    #[inline]
    pub fn is_reduced(&self) -> bool {
        self.reduced
    }

    /// Record the current preference. True when it differs from the last one seen.
    pub fn update(&mut self, prefs: &MotionPreference) -> bool {
        let changed = self.reduced != prefs.reduced_motion;
        self.reduced = prefs.reduced_motion;
        changed
    }
}
