use crate::frame::{Animated, FrameLoop};
use crate::observer::ViewportWatcher;
use crate::scroll::ScrollDriver;
use crate::timer::WindowTimer;
use folio_core::{Disposer, EffectScope, MotionPreference, SiteConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Shared services handed to every section while it mounts. Everything a
/// section acquires goes into `scope` and is released with the page.
pub struct MountContext {
    pub document: web::Document,
    pub frame: FrameLoop,
    pub watcher: ViewportWatcher,
    pub scroll: ScrollDriver,
    pub prefs: Rc<Cell<MotionPreference>>,
    pub config: Rc<SiteConfig>,
    pub timer: WindowTimer,
    pub scope: EffectScope,
}

impl MountContext {
    #[inline]
    pub fn keep(&mut self, disposer: Disposer) {
        self.scope.add(disposer);
    }

    #[inline]
    pub fn prefs(&self) -> MotionPreference {
        self.prefs.get()
    }

    /// Run `anim` on the frame loop for the lifetime of the scope.
    pub fn animate<A: Animated + 'static>(&mut self, anim: &Rc<RefCell<A>>) {
        let d = self.frame.add(anim.clone());
        self.scope.add(d);
    }
}
