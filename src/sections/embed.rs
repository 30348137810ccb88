use crate::context::MountContext;
use crate::dom;
use crate::frame::Animated;
use crate::motion::{self, LivePrefs};
use folio_core::content::SCENE_PARTICLES;
use folio_core::{
    LottieCommand, LottiePlayback, LottieTrigger, MotionGate, Particle, SceneEmbed,
    VisibilityChange, VisibilityOptions, DEFAULT_VIEW_THRESHOLD, SCENE_PLACEHOLDER_HINT,
    SCENE_PLACEHOLDER_TITLE, TEXT_VIEW_THRESHOLD,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

const SCENE_HOST: &str = "https://my.spline.design";

fn scene_url(scene: &str) -> String {
    if scene.starts_with("https://") {
        scene.to_string()
    } else {
        format!("{}/{}/", SCENE_HOST, scene)
    }
}

/// Drifting dots behind the placeholder. Runs only while the placeholder is on
/// screen and holds every dot at rest under reduced motion.
struct ParticleField {
    dots: Vec<(web::HtmlElement, Particle)>,
    elapsed: Duration,
    visible: bool,
    prefs: LivePrefs,
    gate: MotionGate,
}

impl ParticleField {
    fn rest(&self) {
        for (el, p) in &self.dots {
            motion::apply_state(el, &p.rest());
        }
    }
}

impl Animated for ParticleField {
    fn frame(&mut self, dt: Duration) {
        if motion::switched_off(&mut self.gate, &self.prefs) {
            self.rest();
        }
        if self.gate.is_reduced() || !self.visible {
            return;
        }
        self.elapsed += dt;
        for (el, p) in &self.dots {
            motion::apply_state(el, &p.sample(self.elapsed));
        }
    }
}

fn mount_placeholder(
    ctx: &mut MountContext,
    wrap: &web::HtmlElement,
) -> anyhow::Result<web::HtmlElement> {
    let doc = ctx.document.clone();
    let placeholder = dom::el(&doc, "div", "scene-placeholder")?;
    dom::append(wrap, &placeholder)?;

    let copy = dom::el(&doc, "div", "scene-placeholder-copy")?;
    let badge = dom::el(&doc, "div", "scene-placeholder-icon")?;
    dom::mark_decorative(&badge);
    dom::append(&copy, &badge)?;
    dom::append(&copy, &dom::text_el(&doc, "p", "scene-placeholder-title", SCENE_PLACEHOLDER_TITLE)?)?;
    dom::append(&copy, &dom::text_el(&doc, "p", "scene-placeholder-hint", SCENE_PLACEHOLDER_HINT)?)?;
    dom::append(&placeholder, &copy)?;

    let layer = dom::el(&doc, "div", "scene-particles")?;
    dom::mark_decorative(&layer);
    dom::set_style(&layer, "position", "absolute");
    dom::set_style(&layer, "inset", "0");
    dom::set_style(&layer, "overflow", "hidden");
    dom::set_style(&layer, "pointer-events", "none");
    dom::append(&placeholder, &layer)?;

    let mut dots = Vec::with_capacity(SCENE_PARTICLES.len());
    for p in SCENE_PARTICLES {
        let dot = dom::el(&doc, "span", "scene-particle")?;
        dom::set_style(&dot, "position", "absolute");
        dom::set_style(&dot, "width", "8px");
        dom::set_style(&dot, "height", "8px");
        dom::set_style(&dot, "border-radius", "50%");
        dom::set_style(&dot, "background-color", "rgba(139, 92, 246, 0.2)");
        dom::set_style(&dot, "left", &format!("{}%", p.left_pct));
        dom::set_style(&dot, "top", &format!("{}%", p.top_pct));
        motion::apply_state(&dot, &p.rest());
        dom::append(&layer, &dot)?;
        dots.push((dot, p));
    }
    let field = Rc::new(RefCell::new(ParticleField {
        dots,
        elapsed: Duration::ZERO,
        visible: false,
        prefs: ctx.prefs.clone(),
        gate: MotionGate::new(&ctx.prefs()),
    }));
    ctx.animate(&field);
    let d = ctx.watcher.watch(
        &placeholder,
        VisibilityOptions::repeating(DEFAULT_VIEW_THRESHOLD),
        move |change| match change {
            VisibilityChange::Entered => field.borrow_mut().visible = true,
            VisibilityChange::Exited => field.borrow_mut().visible = false,
            VisibilityChange::Unchanged => {}
        },
    );
    ctx.keep(d);
    Ok(placeholder)
}

/// The hero's 3D scene. Shows a spinner while the frame loads and the static
/// placeholder when no scene is configured or loading fails.
pub fn mount_scene(ctx: &mut MountContext, parent: &web::HtmlElement) -> anyhow::Result<()> {
    let doc = ctx.document.clone();
    let embed = Rc::new(RefCell::new(SceneEmbed::new(ctx.config.scene_id())));
    let wrap = dom::el(&doc, "div", "scene")?;
    dom::append(parent, &wrap)?;

    let placeholder = mount_placeholder(ctx, &wrap)?;

    let Some(scene) = embed.borrow().scene().map(str::to_string) else {
        log::info!("[embed] no scene configured");
        return Ok(());
    };
    dom::set_style(&placeholder, "display", "none");

    let spinner = dom::el(&doc, "div", "scene-spinner")?;
    _ = spinner.set_attribute("role", "status");
    _ = spinner.set_attribute("aria-label", "Loading 3D scene");
    dom::append(&wrap, &spinner)?;

    let frame = dom::el(&doc, "iframe", "scene-frame")?;
    _ = frame.set_attribute("src", &scene_url(&scene));
    _ = frame.set_attribute("title", "3D scene");
    _ = frame.set_attribute("loading", "lazy");
    dom::set_style(&frame, "opacity", "0");
    dom::append(&wrap, &frame)?;

    let target: &web::EventTarget = frame.as_ref();
    let (e, s, f) = (embed.clone(), spinner.clone(), frame.clone());
    ctx.keep(dom::listen(target, "load", move |_: web::Event| {
        if e.borrow_mut().on_load() {
            log::info!("[embed] scene ready");
            s.remove();
            dom::set_style(&f, "opacity", "1");
        }
    }));
    let (e, s, f) = (embed, spinner, frame.clone());
    ctx.keep(dom::listen(target, "error", move |_: web::Event| {
        if let Some(err) = e.borrow_mut().on_error("frame error") {
            log::warn!("[embed] {}", err);
            s.remove();
            f.remove();
            dom::set_style(&placeholder, "display", "");
        }
    }));
    Ok(())
}

fn apply_command(el: &web::HtmlElement, cmd: LottieCommand) {
    match cmd {
        LottieCommand::Play => {
            _ = el.style().remove_property("animation-name");
            dom::set_style(el, "animation-play-state", "running");
        }
        LottieCommand::Pause => {
            _ = el.style().remove_property("animation-name");
            dom::set_style(el, "animation-play-state", "paused");
        }
        LottieCommand::Stop => {
            dom::set_style(el, "animation-name", "none");
            dom::set_style(el, "animation-play-state", "paused");
        }
        LottieCommand::SetSpeed(speed) => {
            dom::set_style(el, "--lottie-speed", &format!("{}", speed.max(0.01)));
        }
    }
}

/// A looping decorative animation driven by CSS keyframes on `el`. Held
/// stopped while motion is reduced.
pub fn mount_lottie(ctx: &mut MountContext, el: &web::HtmlElement, trigger: LottieTrigger) {
    dom::mark_decorative(el);
    let mut playback = LottiePlayback::new(trigger, ctx.config.lottie_speed, ctx.config.lottie_loop);
    _ = playback.set_suppressed(!ctx.prefs().animations_enabled());
    dom::set_style(
        el,
        "animation-iteration-count",
        if playback.looped { "infinite" } else { "1" },
    );
    dom::set_style(el, "animation-play-state", "paused");
    for cmd in playback.mount() {
        apply_command(el, cmd);
    }
    let playback = Rc::new(RefCell::new(playback));
    let target: &web::EventTarget = el.as_ref();

    let (p, e) = (playback.clone(), el.clone());
    motion::on_motion_change(ctx, move |reduced| {
        if let Some(cmd) = p.borrow_mut().set_suppressed(reduced) {
            apply_command(&e, cmd);
        }
    });

    let (p, e) = (playback.clone(), el.clone());
    ctx.keep(dom::listen(target, "animationend", move |_: web::Event| {
        p.borrow_mut().on_complete();
        if !p.borrow().is_playing() {
            apply_command(&e, LottieCommand::Pause);
        }
    }));

    match trigger {
        LottieTrigger::Autoplay => {}
        LottieTrigger::OnView => {
            let (p, e) = (playback, el.clone());
            let d = ctx.watcher.watch(
                el,
                VisibilityOptions::repeating(TEXT_VIEW_THRESHOLD),
                move |change| {
                    if let Some(cmd) = p.borrow_mut().on_visibility(change) {
                        apply_command(&e, cmd);
                    }
                },
            );
            ctx.keep(d);
        }
        LottieTrigger::OnHover => {
            for (event, entered) in [("pointerenter", true), ("pointerleave", false)] {
                let (p, e) = (playback.clone(), el.clone());
                ctx.keep(dom::listen(target, event, move |_: web::PointerEvent| {
                    if let Some(cmd) = p.borrow_mut().on_hover(entered) {
                        apply_command(&e, cmd);
                    }
                }));
            }
        }
    }
}
