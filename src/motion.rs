//! DOM bindings for the motion primitives in `folio_core::motion`.

use crate::context::MountContext;
use crate::dom;
use crate::frame::Animated;
use folio_core::{
    split_text, stagger_offsets, AnimatedButton, AnimationIntent, CardStyle, HoverEffect,
    IntentPlayer, Magnetic, MotionGate, MotionPreference, MotionState, SectionReveal, StaggerFrom,
    TextMode, TextOptions, TiltCard, VisibilityChange, VisibilityOptions, SECTION_VIEW_THRESHOLD,
};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

pub fn apply_state(el: &web::HtmlElement, state: &MotionState) {
    dom::set_style(el, "opacity", &state.css_opacity());
    dom::set_style(el, "transform", &state.css_transform());
}

fn pointer_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Read on every event and frame, so a preference flip takes effect at once.
pub type LivePrefs = Rc<Cell<MotionPreference>>;

#[inline]
fn motion_on(prefs: &LivePrefs) -> bool {
    prefs.get().animations_enabled()
}

struct MotionWatch {
    prefs: LivePrefs,
    gate: MotionGate,
    on_flip: Box<dyn FnMut(bool)>,
}

impl Animated for MotionWatch {
    fn frame(&mut self, _dt: Duration) {
        if self.gate.update(&self.prefs.get()) {
            (self.on_flip)(self.gate.is_reduced());
        }
    }
}

/// Call `on_flip(reduced)` whenever the reduced-motion preference changes,
/// for effects that are not stepped by the frame loop themselves.
pub fn on_motion_change(ctx: &mut MountContext, on_flip: impl FnMut(bool) + 'static) {
    let watch = Rc::new(RefCell::new(MotionWatch {
        prefs: ctx.prefs.clone(),
        gate: MotionGate::new(&ctx.prefs()),
        on_flip: Box::new(on_flip),
    }));
    ctx.animate(&watch);
}

/// True when motion was just switched off and the binding must drop to rest.
pub(crate) fn switched_off(gate: &mut MotionGate, prefs: &LivePrefs) -> bool {
    gate.update(&prefs.get()) && gate.is_reduced()
}

/// An intent played over a group of elements, unit `i` on `targets[i]`.
/// Under reduced motion the targets sit at the end state.
pub struct IntentAnimation {
    player: IntentPlayer,
    targets: Vec<web::HtmlElement>,
    prefs: LivePrefs,
    gate: MotionGate,
}

impl IntentAnimation {
    pub fn new(
        intent: AnimationIntent,
        targets: Vec<web::HtmlElement>,
        from: StaggerFrom,
        prefs: LivePrefs,
    ) -> Self {
        let starts = stagger_offsets(&intent, targets.len().max(1), from);
        let gate = MotionGate::new(&prefs.get());
        let mut player = IntentPlayer::with_starts(intent, starts);
        if gate.is_reduced() {
            player.finish();
        }
        let anim = Self {
            player,
            targets,
            prefs,
            gate,
        };
        anim.apply();
        anim
    }

    pub fn play(&mut self) {
        self.player.play();
    }

    pub fn reverse(&mut self) {
        self.player.reverse();
    }

    fn apply(&self) {
        for (i, t) in self.targets.iter().enumerate() {
            apply_state(t, &self.player.state(i));
        }
    }
}

impl Animated for IntentAnimation {
    fn frame(&mut self, dt: Duration) {
        if self.player.step_gated(dt, &mut self.gate, &self.prefs.get()) {
            self.apply();
        }
    }
}

/// Hide `targets` now and play `intent` over them when `watch_el` scrolls into
/// view. Repeating watches reverse on exit.
pub fn play_on_view(
    ctx: &mut MountContext,
    watch_el: &web::Element,
    targets: Vec<web::HtmlElement>,
    intent: AnimationIntent,
    from: StaggerFrom,
    options: VisibilityOptions,
) -> Rc<RefCell<IntentAnimation>> {
    let anim = Rc::new(RefCell::new(IntentAnimation::new(
        intent,
        targets,
        from,
        ctx.prefs.clone(),
    )));
    ctx.animate(&anim);
    let a = anim.clone();
    let d = ctx.watcher.watch(watch_el, options, move |change| match change {
        VisibilityChange::Entered => a.borrow_mut().play(),
        VisibilityChange::Exited => a.borrow_mut().reverse(),
        VisibilityChange::Unchanged => {}
    });
    ctx.keep(d);
    anim
}

/// Section-level entrance, once, at 20% visibility.
pub fn reveal_section(ctx: &mut MountContext, section: &web::HtmlElement, reveal: SectionReveal) {
    if reveal == SectionReveal::None {
        return;
    }
    _ = play_on_view(
        ctx,
        section,
        vec![section.clone()],
        reveal.intent(),
        StaggerFrom::Start,
        VisibilityOptions::once(SECTION_VIEW_THRESHOLD),
    );
}

/// Build a split-text element: the container carries the full string as its
/// accessible name, the per-unit spans are hidden from assistive tech.
pub fn render_text(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
    mode: TextMode,
    options: TextOptions,
) -> anyhow::Result<(web::HtmlElement, Vec<web::HtmlElement>, AnimationIntent)> {
    let split = split_text(text, mode, options);
    let root = dom::el(document, tag, class)?;
    _ = root.set_attribute("aria-label", &split.label);
    let parent = if split.masked() {
        let mask = dom::el(document, "span", "split-mask")?;
        dom::set_style(&mask, "display", "inline-block");
        dom::set_style(&mask, "overflow", "hidden");
        dom::set_style(&mask, "vertical-align", "bottom");
        dom::append(&root, &mask)?;
        mask
    } else {
        root.clone()
    };
    let mut spans = Vec::with_capacity(split.units.len());
    for (i, unit) in split.units.iter().enumerate() {
        if i > 0 && matches!(mode, TextMode::Fade | TextMode::SlideUp) {
            let gap = document.create_text_node(" ");
            dom::append(&parent, &gap)?;
        }
        let span = dom::text_el(document, "span", "split-unit", &unit.text)?;
        _ = span.set_attribute("aria-hidden", "true");
        dom::set_style(&span, "display", "inline-block");
        if mode == TextMode::Wave {
            dom::set_style(&span, "transform-origin", "bottom");
        }
        dom::append(&parent, &span)?;
        spans.push(span);
    }
    if mode == TextMode::Wave {
        dom::set_style(&root, "perspective", "1000px");
    }
    Ok((root, spans, split.intent))
}

/// `render_text` plus its on-view animation. Returns the container.
pub fn animated_text(
    ctx: &mut MountContext,
    tag: &str,
    class: &str,
    text: &str,
    mode: TextMode,
    options: TextOptions,
    threshold: f64,
) -> anyhow::Result<web::HtmlElement> {
    let (root, spans, intent) = render_text(&ctx.document, tag, class, text, mode, options)?;
    _ = play_on_view(
        ctx,
        &root,
        spans,
        intent,
        StaggerFrom::Start,
        VisibilityOptions::once(threshold),
    );
    Ok(root)
}

struct MagneticBinding {
    el: web::HtmlElement,
    magnetic: Magnetic,
    written: bool,
    prefs: LivePrefs,
    gate: MotionGate,
}

impl Animated for MagneticBinding {
    fn frame(&mut self, dt: Duration) {
        if switched_off(&mut self.gate, &self.prefs) {
            self.magnetic.reset();
            self.written = false;
        }
        if self.magnetic.is_settled() && self.written {
            return;
        }
        let o = self.magnetic.step(dt);
        dom::set_style(
            &self.el,
            "transform",
            &format!("translate3d({:.2}px, {:.2}px, 0)", o.x, o.y),
        );
        self.written = self.magnetic.is_settled();
    }
}

/// Pull `el` toward the pointer while hovered. A zero strength leaves the
/// element untouched; reduced motion pauses the pull.
pub fn attach_magnetic(ctx: &mut MountContext, el: &web::HtmlElement, strength: f32) {
    let magnetic = Magnetic::new(strength);
    if !magnetic.is_enabled() {
        return;
    }
    let binding = Rc::new(RefCell::new(MagneticBinding {
        el: el.clone(),
        magnetic,
        written: true,
        prefs: ctx.prefs.clone(),
        gate: MotionGate::new(&ctx.prefs()),
    }));
    ctx.animate(&binding);
    let target: &web::EventTarget = el.as_ref();

    let b = binding.clone();
    let d = dom::listen(target, "pointermove", move |ev: web::PointerEvent| {
        let mut b = b.borrow_mut();
        if !motion_on(&b.prefs) {
            return;
        }
        let rect = dom::client_rect(&b.el);
        if b.magnetic.pointer_move(rect, pointer_pos(&ev)) {
            b.written = false;
        }
    });
    ctx.keep(d);

    let b = binding;
    let d = dom::listen(target, "pointerleave", move |_: web::PointerEvent| {
        let mut b = b.borrow_mut();
        if b.magnetic.pointer_leave() {
            b.written = false;
        }
    });
    ctx.keep(d);
}

struct TiltBinding {
    el: web::HtmlElement,
    card: TiltCard,
    written: bool,
    prefs: LivePrefs,
    gate: MotionGate,
}

fn apply_card_style(el: &web::HtmlElement, style: &CardStyle) {
    dom::set_style(el, "transform", &style.css_transform());
    match style.shadow {
        Some((shadow, strength)) if strength > 0.01 => {
            dom::set_style(el, "box-shadow", shadow);
            dom::set_style(el, "--hover-strength", &format!("{:.3}", strength));
        }
        _ => dom::set_style(el, "box-shadow", "none"),
    }
    if let Some(at) = style.glow_at {
        dom::set_style(el, "--glow-x", &format!("{:.1}%", at.x));
        dom::set_style(el, "--glow-y", &format!("{:.1}%", at.y));
    }
}

impl Animated for TiltBinding {
    fn frame(&mut self, dt: Duration) {
        if switched_off(&mut self.gate, &self.prefs) {
            self.card.reset();
            self.written = false;
        }
        if self.card.is_at_rest() && self.written {
            return;
        }
        self.card.step(dt);
        apply_card_style(&self.el, &self.card.style());
        self.written = self.card.is_at_rest();
    }
}

pub fn attach_tilt(ctx: &mut MountContext, el: &web::HtmlElement, effect: HoverEffect) {
    if effect == HoverEffect::None {
        return;
    }
    dom::set_style(el, "transform-style", "preserve-3d");
    let binding = Rc::new(RefCell::new(TiltBinding {
        el: el.clone(),
        card: TiltCard::new(effect),
        written: true,
        prefs: ctx.prefs.clone(),
        gate: MotionGate::new(&ctx.prefs()),
    }));
    ctx.animate(&binding);
    let target: &web::EventTarget = el.as_ref();

    let b = binding.clone();
    let d = dom::listen(target, "pointermove", move |ev: web::PointerEvent| {
        let mut b = b.borrow_mut();
        if !motion_on(&b.prefs) {
            return;
        }
        let rect = dom::client_rect(&b.el);
        if b.card.pointer_move(rect, pointer_pos(&ev)) {
            b.written = false;
        }
    });
    ctx.keep(d);

    let b = binding;
    let d = dom::listen(target, "pointerleave", move |_: web::PointerEvent| {
        let mut b = b.borrow_mut();
        b.card.pointer_leave();
        b.written = false;
    });
    ctx.keep(d);
}

struct ButtonBinding {
    el: web::HtmlElement,
    button: AnimatedButton,
    written: bool,
    prefs: LivePrefs,
    gate: MotionGate,
}

impl Animated for ButtonBinding {
    fn frame(&mut self, dt: Duration) {
        if switched_off(&mut self.gate, &self.prefs) {
            self.button.reset();
            self.written = false;
        }
        if self.button.is_settled() && self.written {
            return;
        }
        self.button.step(dt);
        dom::set_style(&self.el, "transform", &self.button.css_transform());
        self.written = self.button.is_settled();
    }
}

/// Create a `<button>` (or `<a>` when `href` is set) with the magnetic hover
/// and press feedback. Returns the element and a handle for toggling
/// `disabled`.
pub fn animated_button(
    ctx: &mut MountContext,
    button: AnimatedButton,
    label: &str,
    href: Option<&str>,
) -> anyhow::Result<(web::HtmlElement, ButtonHandle)> {
    let el = match href {
        Some(h) => dom::link(&ctx.document, h, &button.class_list(), label)?,
        None => dom::text_el(&ctx.document, "button", &button.class_list(), label)?,
    };
    let binding = Rc::new(RefCell::new(ButtonBinding {
        el: el.clone(),
        button,
        written: true,
        prefs: ctx.prefs.clone(),
        gate: MotionGate::new(&ctx.prefs()),
    }));
    ctx.animate(&binding);
    let target: &web::EventTarget = el.as_ref();

    let b = binding.clone();
    ctx.keep(dom::listen(target, "pointermove", move |ev: web::PointerEvent| {
        let mut b = b.borrow_mut();
        if !motion_on(&b.prefs) {
            return;
        }
        let rect = dom::client_rect(&b.el);
        b.button.pointer_move(rect, pointer_pos(&ev));
        b.written = false;
    }));
    let b = binding.clone();
    ctx.keep(dom::listen(target, "pointerleave", move |_: web::PointerEvent| {
        let mut b = b.borrow_mut();
        b.button.pointer_leave();
        b.written = false;
    }));
    let b = binding.clone();
    ctx.keep(dom::listen(target, "pointerdown", move |_: web::PointerEvent| {
        let mut b = b.borrow_mut();
        if !motion_on(&b.prefs) {
            return;
        }
        b.button.press();
        b.written = false;
    }));
    let b = binding.clone();
    ctx.keep(dom::listen(target, "pointerup", move |_: web::PointerEvent| {
        let mut b = b.borrow_mut();
        b.button.release();
        b.written = false;
    }));
    Ok((el, ButtonHandle(binding)))
}

#[derive(Clone)]
pub struct ButtonHandle(Rc<RefCell<ButtonBinding>>);

impl ButtonHandle {
    pub fn set_disabled(&self, disabled: bool) {
        let mut b = self.0.borrow_mut();
        b.button.set_disabled(disabled);
        b.el.set_class_name(&b.button.class_list());
        if disabled {
            _ = b.el.set_attribute("disabled", "");
        } else {
            _ = b.el.remove_attribute("disabled");
        }
        b.written = false;
    }

    pub fn set_label(&self, label: &str) {
        self.0.borrow().el.set_text_content(Some(label));
    }
}
