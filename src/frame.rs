use folio_core::Disposer;
use instant::Instant;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Anything driven once per animation frame.
pub trait Animated {
    fn frame(&mut self, dt: Duration);
}

pub type SharedAnimated = Rc<RefCell<dyn Animated>>;

pub struct FrameContext {
    entries: Vec<(u32, SharedAnimated)>,
    next_id: u32,
    last_instant: Instant,
}

impl FrameContext {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            last_instant: Instant::now(),
        }
    }

    /// Steps a snapshot of the entries with no borrow of the context held, so
    /// an animation may add or remove entries while it runs.
    fn frame(ctx: &Rc<RefCell<FrameContext>>) {
        let (dt, batch) = {
            let mut c = ctx.borrow_mut();
            let now = Instant::now();
            let dt = now - c.last_instant;
            c.last_instant = now;
            let batch: SmallVec<[SharedAnimated; 16]> =
                c.entries.iter().map(|(_, a)| a.clone()).collect();
            (dt, batch)
        };
        for anim in batch {
            if let Ok(mut a) = anim.try_borrow_mut() {
                a.frame(dt);
            }
        }
    }
}

/// The page's single `requestAnimationFrame` loop.
#[derive(Clone)]
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            ctx: Rc::new(RefCell::new(FrameContext::new())),
            tick: Rc::new(RefCell::new(None)),
            raf_id: Rc::new(Cell::new(None)),
        }
    }

    pub fn add(&self, anim: SharedAnimated) -> Disposer {
        let id = {
            let mut c = self.ctx.borrow_mut();
            let id = c.next_id;
            c.next_id = c.next_id.wrapping_add(1);
            c.entries.push((id, anim));
            id
        };
        let weak: Weak<RefCell<FrameContext>> = Rc::downgrade(&self.ctx);
        Disposer::new(move || {
            if let Some(ctx) = weak.upgrade() {
                ctx.borrow_mut().entries.retain(|(i, _)| *i != id);
            }
        })
    }

    pub fn len(&self) -> usize {
        self.ctx.borrow().entries.len()
    }

    pub fn start(&self) {
        if self.tick.borrow().is_some() {
            return;
        }
        let ctx = self.ctx.clone();
        let tick_clone = self.tick.clone();
        let raf_id = self.raf_id.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            FrameContext::frame(&ctx);
            if let Some(w) = web::window() {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    raf_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                }
            }
        }) as Box<dyn FnMut()>));
        self.ctx.borrow_mut().last_instant = Instant::now();
        if let (Some(w), Some(cb)) = (web::window(), self.tick.borrow().as_ref()) {
            self.raf_id
                .set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
    }

    /// Cancel the pending frame and release the loop closure.
    pub fn stop(&self) {
        if let (Some(w), Some(id)) = (web::window(), self.raf_id.take()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        self.ctx.borrow_mut().entries.clear();
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
