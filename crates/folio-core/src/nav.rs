use crate::routes::SectionId;
use crate::scroll::ScrollSnapshot;

/// Header state: compact style once scrolled, and the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[inline]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Returns true when the compact style flips.
    pub fn apply_scroll(&mut self, snapshot: &ScrollSnapshot) -> bool {
        let changed = self.scrolled != snapshot.scrolled;
        self.scrolled = snapshot.scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// `aria-expanded` value for the menu toggle.
    pub fn aria_expanded(&self) -> &'static str {
        if self.menu_open {
            "true"
        } else {
            "false"
        }
    }

    /// A nav link click: close the menu and report where to scroll, if the
    /// href names a section.
    pub fn navigate(&mut self, href: &str) -> Option<SectionId> {
        self.close_menu();
        SectionId::from_anchor(href)
    }
}

/// `transform` for the top progress bar, anchored at its left edge.
pub fn progress_bar_transform(progress: f64) -> String {
    format!("scaleX({:.4})", progress.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggles_and_closes_on_navigate() {
        let mut nav = NavState::new();
        assert!(nav.toggle_menu());
        assert_eq!(nav.aria_expanded(), "true");
        assert_eq!(nav.navigate("#about"), Some(SectionId::About));
        assert!(!nav.is_menu_open());
        assert_eq!(nav.aria_expanded(), "false");
    }

    #[test]
    fn scrolled_flag_follows_snapshot() {
        let mut nav = NavState::new();
        let mut snap = ScrollSnapshot::default();
        assert!(!nav.apply_scroll(&snap));
        snap.scrolled = true;
        assert!(nav.apply_scroll(&snap));
        assert!(nav.is_scrolled());
        assert!(!nav.apply_scroll(&snap));
    }

    #[test]
    fn progress_bar_is_clamped() {
        assert_eq!(progress_bar_transform(0.5), "scaleX(0.5000)");
        assert_eq!(progress_bar_transform(2.0), "scaleX(1.0000)");
    }
}
