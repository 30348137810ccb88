use crate::constants::DEFAULT_VIEW_THRESHOLD;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be inside the viewport.
    pub threshold: f64,
    /// Latch on first entry and stop observing.
    pub once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_VIEW_THRESHOLD,
            once: true,
        }
    }
}

impl VisibilityOptions {
    pub fn once(threshold: f64) -> Self {
        Self {
            threshold,
            once: true,
        }
    }

    pub fn repeating(threshold: f64) -> Self {
        Self {
            threshold,
            once: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityChange {
    Entered,
    Exited,
    Unchanged,
}

/// Whether the observer should keep watching the element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserveDirective {
    Keep,
    Stop,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewportVisibility {
    pub element_id: String,
    pub options: VisibilityOptions,
    is_visible: bool,
    has_fired_once: bool,
}

impl ViewportVisibility {
    pub fn new(element_id: impl Into<String>, options: VisibilityOptions) -> Self {
        Self {
            element_id: element_id.into(),
            options,
            is_visible: false,
            has_fired_once: false,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    #[inline]
    pub fn has_fired_once(&self) -> bool {
        self.has_fired_once
    }

    /// `once` watches are frozen after their first entry.
    #[inline]
    pub fn is_latched(&self) -> bool {
        self.options.once && self.has_fired_once
    }

    /// Apply one intersection observation.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> (VisibilityChange, ObserveDirective) {
        if self.is_latched() {
            return (VisibilityChange::Unchanged, ObserveDirective::Stop);
        }
        let inside = is_intersecting && ratio + 1e-9 >= self.options.threshold;
        let change = match (self.is_visible, inside) {
            (false, true) => VisibilityChange::Entered,
            (true, false) => VisibilityChange::Exited,
            _ => VisibilityChange::Unchanged,
        };
        if inside {
            self.is_visible = true;
            self.has_fired_once = true;
            if self.options.once {
                return (change, ObserveDirective::Stop);
            }
        } else {
            self.is_visible = false;
        }
        (change, ObserveDirective::Keep)
    }

    /// Without an observer API, content is shown immediately.
    pub fn force_visible(&mut self) -> VisibilityChange {
        let change = if self.is_visible {
            VisibilityChange::Unchanged
        } else {
            VisibilityChange::Entered
        };
        self.is_visible = true;
        self.has_fired_once = true;
        change
    }
}

/// Visibility watches keyed by element id, each with a caller-owned handler.
pub struct VisibilityRegistry<H> {
    entries: FnvHashMap<String, (ViewportVisibility, H)>,
}

impl<H> Default for VisibilityRegistry<H> {
    fn default() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }
}

impl<H> VisibilityRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watch(&mut self, element_id: &str, options: VisibilityOptions, handler: H) {
        self.entries.insert(
            element_id.to_string(),
            (ViewportVisibility::new(element_id, options), handler),
        );
    }

    pub fn unwatch(&mut self, element_id: &str) -> bool {
        self.entries.remove(element_id).is_some()
    }

    pub fn get(&self, element_id: &str) -> Option<&ViewportVisibility> {
        self.entries.get(element_id).map(|(v, _)| v)
    }

    pub fn handler_mut(&mut self, element_id: &str) -> Option<&mut H> {
        self.entries.get_mut(element_id).map(|(_, h)| h)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unknown ids (already unwatched) yield `None`.
    pub fn observe(
        &mut self,
        element_id: &str,
        is_intersecting: bool,
        ratio: f64,
    ) -> Option<(VisibilityChange, ObserveDirective, &mut H)> {
        let (vis, handler) = self.entries.get_mut(element_id)?;
        let (change, directive) = vis.observe(is_intersecting, ratio);
        Some((change, directive, handler))
    }

    pub fn force_visible(&mut self, element_id: &str) -> Option<(VisibilityChange, &mut H)> {
        let (vis, handler) = self.entries.get_mut(element_id)?;
        Some((vis.force_visible(), handler))
    }
}
