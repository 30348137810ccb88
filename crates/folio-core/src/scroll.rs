use crate::constants::NAV_SCROLLED_THRESHOLD_PX;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// `scroll_top / (document_height - viewport_height)`, clamped to [0, 1].
///
/// A page that does not scroll (content no taller than the viewport) reports 0.
pub fn scroll_progress(m: &ScrollMetrics) -> f64 {
    let max = m.document_height - m.viewport_height;
    if !(max > 0.0) || !m.scroll_top.is_finite() {
        return 0.0;
    }
    (m.scroll_top / max).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub progress: f64,
    pub scroll_top: f64,
    /// Past the point where the nav bar switches to its compact style.
    pub scrolled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type ScrollListener = Box<dyn FnMut(&ScrollSnapshot)>;

/// Page-wide scroll progress, recomputed on every scroll and resize.
#[derive(Default)]
pub struct ScrollProgress {
    snapshot: ScrollSnapshot,
    listeners: FnvHashMap<SubscriptionId, ScrollListener>,
    next_id: u32,
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn snapshot(&self) -> ScrollSnapshot {
        self.snapshot
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ScrollSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.insert(id, Box::new(listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Recompute from fresh metrics and notify every subscriber synchronously.
    pub fn update(&mut self, metrics: &ScrollMetrics) -> ScrollSnapshot {
        self.snapshot = ScrollSnapshot {
            progress: scroll_progress(metrics),
            scroll_top: metrics.scroll_top,
            scrolled: metrics.scroll_top > NAV_SCROLLED_THRESHOLD_PX,
        };
        let snap = self.snapshot;
        for listener in self.listeners.values_mut() {
            listener(&snap);
        }
        snap
    }
}

impl std::fmt::Debug for ScrollProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollProgress")
            .field("snapshot", &self.snapshot)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn progress_endpoints() {
        let m = |top| ScrollMetrics {
            scroll_top: top,
            document_height: 3000.0,
            viewport_height: 1000.0,
        };
        assert_eq!(scroll_progress(&m(0.0)), 0.0);
        assert_eq!(scroll_progress(&m(1000.0)), 0.5);
        assert_eq!(scroll_progress(&m(2000.0)), 1.0);
        assert_eq!(scroll_progress(&m(2600.0)), 1.0);
        assert_eq!(scroll_progress(&m(-40.0)), 0.0);
    }

    #[test]
    fn short_page_reports_zero() {
        let m = ScrollMetrics {
            scroll_top: 0.0,
            document_height: 600.0,
            viewport_height: 800.0,
        };
        assert_eq!(scroll_progress(&m), 0.0);
        let m = ScrollMetrics {
            document_height: 800.0,
            ..m
        };
        assert_eq!(scroll_progress(&m), 0.0);
    }

    #[test]
    fn subscribers_see_updates_until_unsubscribed() {
        let mut sp = ScrollProgress::new();
        let seen = Rc::new(Cell::new(0.0));
        let seen_cb = seen.clone();
        let id = sp.subscribe(move |s| seen_cb.set(s.progress));
        let snap = sp.update(&ScrollMetrics {
            scroll_top: 250.0,
            document_height: 1500.0,
            viewport_height: 1000.0,
        });
        assert_eq!(seen.get(), 0.5);
        assert!(snap.scrolled);
        assert!(sp.unsubscribe(id));
        sp.update(&ScrollMetrics::default());
        assert_eq!(seen.get(), 0.5);
        assert_eq!(sp.subscriber_count(), 0);
    }
}
