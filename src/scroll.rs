use crate::dom;
use crate::motion::LivePrefs;
use folio_core::{
    parallax_offset, Disposer, EffectScope, ScrollMetrics, ScrollProgress, ScrollSnapshot,
    ScrollTrigger, TriggerAction, TriggerLayout,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// Feeds window scroll and resize into a shared `ScrollProgress`.
#[derive(Clone)]
pub struct ScrollDriver {
    progress: Rc<RefCell<ScrollProgress>>,
}

fn read_metrics() -> ScrollMetrics {
    let document_height = dom::window_document()
        .and_then(|d| d.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    ScrollMetrics {
        scroll_top: dom::scroll_y(),
        document_height,
        viewport_height: dom::viewport_height(),
    }
}

impl ScrollDriver {
    /// Attach the window listeners; they are removed when `scope` is disposed.
    pub fn install(scope: &mut EffectScope) -> Self {
        let driver = Self {
            progress: Rc::new(RefCell::new(ScrollProgress::new())),
        };
        if let Some(window) = web::window() {
            let target: &web::EventTarget = window.as_ref();
            for event in ["scroll", "resize"] {
                let d = driver.clone();
                scope.add(dom::listen_passive(target, event, move |_: web::Event| {
                    d.refresh();
                }));
            }
        }
        driver
    }

    /// Recompute from the live page and notify subscribers.
    pub fn refresh(&self) -> ScrollSnapshot {
        let metrics = read_metrics();
        match self.progress.try_borrow_mut() {
            Ok(mut p) => p.update(&metrics),
            Err(_) => self.snapshot(),
        }
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        self.progress
            .try_borrow()
            .map(|p| p.snapshot())
            .unwrap_or_default()
    }

    /// The listener gets the current snapshot immediately, then every change.
    pub fn subscribe(&self, mut listener: impl FnMut(&ScrollSnapshot) + 'static) -> Disposer {
        listener(&self.snapshot());
        let id = self.progress.borrow_mut().subscribe(listener);
        let weak: Weak<RefCell<ScrollProgress>> = Rc::downgrade(&self.progress);
        Disposer::new(move || {
            if let Some(p) = weak.upgrade() {
                if let Ok(mut p) = p.try_borrow_mut() {
                    p.unsubscribe(id);
                }
            }
        })
    }

    /// Drive `trigger` against the layout of `reference` on every scroll.
    pub fn bind_trigger(
        &self,
        reference: &web::Element,
        mut trigger: ScrollTrigger,
        mut on_action: impl FnMut(TriggerAction) + 'static,
    ) -> Disposer {
        let reference = reference.clone();
        self.subscribe(move |snap| {
            let r = reference.get_bounding_client_rect();
            let layout = TriggerLayout {
                element_top: r.top() + snap.scroll_top,
                element_height: r.height(),
                viewport_height: dom::viewport_height(),
            };
            let action = trigger.update(snap.scroll_top, &layout);
            if action != TriggerAction::None {
                on_action(action);
            }
        })
    }

    /// Translate `el` by the parallax offset of `reference`. The reference must
    /// not be transformed by the effect itself. Reduced motion pins the offset
    /// at zero from the next scroll on.
    pub fn bind_parallax(
        &self,
        el: &web::HtmlElement,
        reference: &web::Element,
        speed: f64,
        prefs: LivePrefs,
    ) -> Disposer {
        let el = el.clone();
        let reference = reference.clone();
        self.subscribe(move |snap| {
            let y = if prefs.get().animations_enabled() {
                let top = reference.get_bounding_client_rect().top() + snap.scroll_top;
                parallax_offset(snap.scroll_top, top, dom::viewport_height(), speed)
            } else {
                0.0
            };
            dom::set_style(&el, "transform", &format!("translate3d(0, {:.2}px, 0)", y));
        })
    }
}
