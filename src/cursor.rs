//! The custom pointer overlay: a lagging ring and a dot that tracks the raw
//! pointer. At most one is mounted per page.

use crate::dom;
use crate::frame::{Animated, FrameLoop};
use crate::motion::LivePrefs;
use folio_core::{
    CursorFrame, CursorModel, CursorSettings, EffectScope, MotionGate, CURSOR_BODY_CLASS,
    INTERACTIVE_SELECTOR,
};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

static MOUNTED: AtomicBool = AtomicBool::new(false);

pub struct CursorOverlay {
    model: CursorModel,
    ring: web::HtmlElement,
    dot: web::HtmlElement,
    body: web::HtmlElement,
    body_class_on: bool,
    prefs: LivePrefs,
    gate: MotionGate,
}

fn is_interactive(target: Option<web::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

impl CursorOverlay {
    /// Mount the overlay and wire its listeners into `scope`. Returns `None`
    /// when an overlay is already mounted. The native cursor comes back while
    /// motion is reduced.
    pub fn mount(
        document: &web::Document,
        settings: CursorSettings,
        prefs: LivePrefs,
        frame: &FrameLoop,
        scope: &mut EffectScope,
    ) -> anyhow::Result<Option<Rc<RefCell<CursorOverlay>>>> {
        if MOUNTED.swap(true, Ordering::SeqCst) {
            log::warn!("[cursor] overlay already mounted");
            return Ok(None);
        }
        scope.add_fn(|| MOUNTED.store(false, Ordering::SeqCst));

        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        let ring = dom::el(document, "div", "cursor-ring")?;
        let dot = dom::el(document, "div", "cursor-dot")?;
        for (el, size) in [(&ring, settings.ring_size), (&dot, settings.dot_size)] {
            dom::mark_decorative(el);
            let px = format!("{}px", size);
            dom::set_style(el, "position", "fixed");
            dom::set_style(el, "top", "0");
            dom::set_style(el, "left", "0");
            dom::set_style(el, "width", &px);
            dom::set_style(el, "height", &px);
            dom::set_style(el, "border-radius", "50%");
            dom::set_style(el, "pointer-events", "none");
            dom::set_style(el, "z-index", "9999");
            dom::set_style(el, "transition", "opacity 0.3s");
            dom::append(&body, el)?;
        }
        dom::set_style(&ring, "border", &format!("2px solid {}", settings.color));
        dom::set_style(&ring, "mix-blend-mode", "difference");
        dom::set_style(&dot, "background-color", &settings.color);
        _ = body.class_list().add_1(CURSOR_BODY_CLASS);

        let overlay = Rc::new(RefCell::new(CursorOverlay {
            model: CursorModel::new(settings),
            ring: ring.clone(),
            dot: dot.clone(),
            body: body.clone(),
            body_class_on: true,
            gate: MotionGate::new(&prefs.get()),
            prefs,
        }));
        if overlay.borrow().gate.is_reduced() {
            overlay.borrow_mut().set_suspended(true);
        }

        let body_cleanup = body.clone();
        scope.add_fn(move || {
            ring.remove();
            dot.remove();
            _ = body_cleanup.class_list().remove_1(CURSOR_BODY_CLASS);
            log::info!("[cursor] unmounted");
        });
        scope.add(frame.add(overlay.clone()));
        wire_listeners(document, &overlay, scope);
        log::info!("[cursor] mounted");
        Ok(Some(overlay))
    }

    fn apply(&mut self, f: &CursorFrame) {
        dom::set_style(
            &self.ring,
            "transform",
            &format!(
                "translate3d({:.2}px, {:.2}px, 0) scale({:.4})",
                f.ring_pos.x, f.ring_pos.y, f.ring_scale
            ),
        );
        dom::set_style(
            &self.dot,
            "transform",
            &format!("translate3d({:.2}px, {:.2}px, 0)", f.dot_pos.x, f.dot_pos.y),
        );
        let opacity = format!("{}", f.opacity);
        dom::set_style(&self.ring, "opacity", &opacity);
        dom::set_style(&self.dot, "opacity", &opacity);
        let fill = if f.filled {
            format!("color-mix(in srgb, {} 12%, transparent)", self.model.settings().color)
        } else {
            "transparent".to_string()
        };
        dom::set_style(&self.ring, "background-color", &fill);

        let want = self.model.body_class_active();
        if want != self.body_class_on {
            let cl = self.body.class_list();
            _ = if want {
                cl.add_1(CURSOR_BODY_CLASS)
            } else {
                cl.remove_1(CURSOR_BODY_CLASS)
            };
            self.body_class_on = want;
        }
    }
}

impl CursorOverlay {
    fn set_suspended(&mut self, suspended: bool) {
        let display = if suspended { "none" } else { "" };
        dom::set_style(&self.ring, "display", display);
        dom::set_style(&self.dot, "display", display);
        if suspended && self.body_class_on {
            _ = self.body.class_list().remove_1(CURSOR_BODY_CLASS);
            self.body_class_on = false;
        }
        log::info!("[cursor] {}", if suspended { "suspended" } else { "resumed" });
    }
}

impl Animated for CursorOverlay {
    fn frame(&mut self, dt: Duration) {
        if self.gate.update(&self.prefs.get()) {
            self.set_suspended(self.gate.is_reduced());
        }
        if self.gate.is_reduced() {
            return;
        }
        let f = self.model.step_frame(dt);
        self.apply(&f);
    }
}

fn wire_listeners(
    document: &web::Document,
    overlay: &Rc<RefCell<CursorOverlay>>,
    scope: &mut EffectScope,
) {
    let doc_target: &web::EventTarget = document.as_ref();

    let o = overlay.clone();
    scope.add(dom::listen_passive(doc_target, "pointermove", move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        o.borrow_mut().model.on_move(pos, is_interactive(ev.target()));
    }));

    let o = overlay.clone();
    scope.add(dom::listen(doc_target, "pointerdown", move |_: web::PointerEvent| {
        o.borrow_mut().model.on_press();
    }));

    let o = overlay.clone();
    scope.add(dom::listen(doc_target, "pointerup", move |_: web::PointerEvent| {
        o.borrow_mut().model.on_release();
    }));

    if let Some(root) = document.document_element() {
        let root_target: &web::EventTarget = root.as_ref();
        let o = overlay.clone();
        scope.add(dom::listen(root_target, "mouseleave", move |_: web::MouseEvent| {
            o.borrow_mut().model.on_leave_viewport();
        }));
        let o = overlay.clone();
        scope.add(dom::listen(root_target, "mouseenter", move |_: web::MouseEvent| {
            o.borrow_mut().model.on_enter_viewport();
        }));
    }

    if let Some(window) = web::window() {
        let win_target: &web::EventTarget = window.as_ref();
        let o = overlay.clone();
        scope.add(dom::listen(win_target, "blur", move |_: web::FocusEvent| {
            o.borrow_mut().model.on_blur();
        }));
        let o = overlay.clone();
        scope.add(dom::listen(win_target, "focus", move |_: web::FocusEvent| {
            o.borrow_mut().model.on_focus();
        }));
    }
}
