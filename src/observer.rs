//! One `IntersectionObserver` per threshold, shared by every watched element.

use folio_core::{Disposer, ObserveDirective, VisibilityChange, VisibilityOptions, VisibilityRegistry};
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const WATCH_ATTR: &str = "data-watch";

pub type VisibilityHandler = Box<dyn FnMut(VisibilityChange)>;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

struct WatcherInner {
    registry: RefCell<VisibilityRegistry<VisibilityHandler>>,
    observers: RefCell<FnvHashMap<u32, (web::IntersectionObserver, ObserverCallback)>>,
    supported: bool,
    next_id: Cell<u32>,
}

#[derive(Clone)]
pub struct ViewportWatcher {
    inner: Rc<WatcherInner>,
}

fn threshold_key(threshold: f64) -> u32 {
    (threshold.clamp(0.0, 1.0) * 1000.0).round() as u32
}

impl ViewportWatcher {
    pub fn new() -> Self {
        let supported = web::window()
            .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
            .unwrap_or(false);
        if !supported {
            log::warn!("[scroll] IntersectionObserver unavailable; content shown immediately");
        }
        Self {
            inner: Rc::new(WatcherInner {
                registry: RefCell::new(VisibilityRegistry::new()),
                observers: RefCell::new(FnvHashMap::default()),
                supported,
                next_id: Cell::new(0),
            }),
        }
    }

    #[inline]
    pub fn is_supported(&self) -> bool {
        self.inner.supported
    }

    /// Call `handler` on every visibility transition of `el`. Without observer
    /// support the handler fires `Entered` right away.
    pub fn watch(
        &self,
        el: &web::Element,
        options: VisibilityOptions,
        mut handler: impl FnMut(VisibilityChange) + 'static,
    ) -> Disposer {
        let n = self.inner.next_id.get();
        self.inner.next_id.set(n.wrapping_add(1));
        let id = format!("w{}", n);
        _ = el.set_attribute(WATCH_ATTR, &id);

        if !self.inner.supported {
            handler(VisibilityChange::Entered);
            return Disposer::noop();
        }

        let observer = match self.observer_for(options.threshold) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[scroll] observer creation failed: {:?}", e);
                handler(VisibilityChange::Entered);
                return Disposer::noop();
            }
        };
        self.inner
            .registry
            .borrow_mut()
            .watch(&id, options, Box::new(handler));
        observer.observe(el);

        let weak: Weak<WatcherInner> = Rc::downgrade(&self.inner);
        let el = el.clone();
        Disposer::new(move || {
            observer.unobserve(&el);
            if let Some(inner) = weak.upgrade() {
                if let Ok(mut reg) = inner.registry.try_borrow_mut() {
                    reg.unwatch(&id);
                }
            }
        })
    }

    fn observer_for(&self, threshold: f64) -> Result<web::IntersectionObserver, JsValue> {
        let key = threshold_key(threshold);
        if let Some((o, _)) = self.inner.observers.borrow().get(&key) {
            return Ok(o.clone());
        }
        let weak = Rc::downgrade(&self.inner);
        let cb: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                if let Some(inner) = weak.upgrade() {
                    dispatch(&inner, &entries, &observer);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(key as f64 / 1000.0));
        let observer =
            web::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
        self.inner
            .observers
            .borrow_mut()
            .insert(key, (observer.clone(), cb));
        Ok(observer)
    }
}

impl Default for ViewportWatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Handlers run with no registry borrow held, so they may watch new elements.
fn dispatch(inner: &WatcherInner, entries: &js_sys::Array, observer: &web::IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
            continue;
        };
        let target = entry.target();
        let Some(id) = target.get_attribute(WATCH_ATTR) else {
            continue;
        };
        let taken = {
            let mut reg = inner.registry.borrow_mut();
            match reg.observe(&id, entry.is_intersecting(), entry.intersection_ratio()) {
                Some((change, directive, handler)) => {
                    let h = (change != VisibilityChange::Unchanged)
                        .then(|| std::mem::replace(handler, Box::new(|_: VisibilityChange| {})));
                    Some((change, directive, h))
                }
                None => None,
            }
        };
        let Some((change, directive, handler)) = taken else {
            observer.unobserve(&target);
            continue;
        };
        if directive == ObserveDirective::Stop {
            observer.unobserve(&target);
        }
        if let Some(mut h) = handler {
            log::debug!("[scroll] {} {:?}", id, change);
            h(change);
            if let Some(slot) = inner.registry.borrow_mut().handler_mut(&id) {
                *slot = h;
            }
        }
    }
}

impl Drop for WatcherInner {
    fn drop(&mut self) {
        for (observer, _) in self.observers.get_mut().values() {
            observer.disconnect();
        }
    }
}
