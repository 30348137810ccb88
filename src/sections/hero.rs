use super::embed;
use crate::context::MountContext;
use crate::dom;
use crate::motion::{self, IntentAnimation};
use folio_core::content::{
    hero_greeting_options, hero_name_options, HERO_BADGE, HERO_GREETING, HERO_NAME, HERO_STATS,
    HERO_TAGLINE, HERO_TITLE_MODE,
};
use folio_core::{
    AnimatedButton, AnimationIntent, ButtonSize, ButtonVariant, LottieTrigger, MotionState,
    SectionId, SectionReveal, StaggerFrom, TextMode, TextOptions, Trigger, VisibilityOptions,
    TEXT_VIEW_THRESHOLD,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

// Entrance sequence, in ms from mount.
const BADGE_DELAY: u64 = 200;
const TAGLINE_DELAY: u64 = 1000;
const CTA_DELAY: u64 = 1400;
const STATS_DELAY: u64 = 1600;

fn mount_intent(from: MotionState, delay_ms: u64) -> AnimationIntent {
    AnimationIntent::new(Trigger::OnMount, from, MotionState::VISIBLE)
        .with_duration(Duration::from_millis(600))
        .with_delay(Duration::from_millis(delay_ms))
}

/// Play on mount rather than on view.
fn play_now(ctx: &mut MountContext, targets: Vec<web::HtmlElement>, intent: AnimationIntent, from: StaggerFrom) {
    let anim = Rc::new(RefCell::new(IntentAnimation::new(
        intent,
        targets,
        from,
        ctx.prefs.clone(),
    )));
    anim.borrow_mut().play();
    ctx.animate(&anim);
}

pub fn mount(ctx: &mut MountContext, main: &web::HtmlElement) -> anyhow::Result<()> {
    let hero = super::section(ctx, main, SectionId::Hero.id(), SectionReveal::None)?;
    let doc = ctx.document.clone();

    let bg = dom::el(&doc, "div", "hero-bg")?;
    dom::mark_decorative(&bg);
    dom::append(&hero, &bg)?;
    embed::mount_scene(ctx, &bg)?;

    let content = dom::el(&doc, "div", "hero-content")?;
    dom::append(&hero, &content)?;

    let badge = dom::text_el(&doc, "span", "hero-badge", HERO_BADGE)?;
    dom::append(&content, &badge)?;
    play_now(
        ctx,
        vec![badge],
        mount_intent(MotionState::hidden_offset(0.0, 20.0), BADGE_DELAY),
        StaggerFrom::Start,
    );

    let title = dom::el(&doc, "h1", "hero-title")?;
    _ = title.set_attribute("aria-label", &format!("{} {}", HERO_GREETING, HERO_NAME));
    dom::append(&content, &title)?;
    let greeting = motion::animated_text(
        ctx,
        "span",
        "hero-greeting",
        HERO_GREETING,
        HERO_TITLE_MODE,
        hero_greeting_options(),
        TEXT_VIEW_THRESHOLD,
    )?;
    dom::append(&title, &greeting)?;
    let name = motion::animated_text(
        ctx,
        "span",
        "hero-name gradient-text",
        HERO_NAME,
        HERO_TITLE_MODE,
        hero_name_options(),
        TEXT_VIEW_THRESHOLD,
    )?;
    dom::append(&title, &name)?;

    let tagline = motion::animated_text(
        ctx,
        "p",
        "hero-tagline",
        HERO_TAGLINE,
        TextMode::Fade,
        TextOptions::default().delay_ms(TAGLINE_DELAY).stagger_ms(20),
        TEXT_VIEW_THRESHOLD,
    )?;
    dom::append(&content, &tagline)?;

    let ctas = dom::el(&doc, "div", "hero-ctas")?;
    dom::append(&content, &ctas)?;
    let strength = ctx.config.magnetic_strength;
    let (work, _) = motion::animated_button(
        ctx,
        AnimatedButton::new(ButtonVariant::Primary, ButtonSize::Lg).with_magnetic_strength(strength),
        "View My Work",
        Some(&SectionId::Projects.anchor()),
    )?;
    let (talk, _) = motion::animated_button(
        ctx,
        AnimatedButton::new(ButtonVariant::Outline, ButtonSize::Lg).with_magnetic_strength(strength),
        "Get In Touch",
        Some(&SectionId::Contact.anchor()),
    )?;
    for b in [&work, &talk] {
        dom::append(&ctas, b)?;
        super::smooth_anchor(ctx, b);
    }
    play_now(
        ctx,
        vec![ctas],
        mount_intent(MotionState::hidden_offset(0.0, 20.0), CTA_DELAY),
        StaggerFrom::Start,
    );

    let stats = dom::el(&doc, "div", "hero-stats")?;
    dom::append(&content, &stats)?;
    let mut stat_els = Vec::with_capacity(HERO_STATS.len());
    for stat in HERO_STATS {
        let s = dom::el(&doc, "div", "hero-stat")?;
        dom::append(&s, &dom::text_el(&doc, "div", "hero-stat-value", stat.value)?)?;
        dom::append(&s, &dom::text_el(&doc, "div", "hero-stat-label", stat.label)?)?;
        dom::append(&stats, &s)?;
        stat_els.push(s);
    }
    motion::play_on_view(
        ctx,
        &stats,
        stat_els,
        mount_intent(MotionState::hidden_offset(0.0, 20.0), STATS_DELAY)
            .with_stagger(Duration::from_millis(100)),
        StaggerFrom::Center,
        VisibilityOptions::default(),
    );

    let scroll_hint = dom::link(&doc, &SectionId::Projects.anchor(), "scroll-indicator", "")?;
    _ = scroll_hint.set_attribute("aria-label", "Scroll to projects");
    let wheel = dom::el(&doc, "span", "scroll-indicator-wheel")?;
    dom::append(&scroll_hint, &wheel)?;
    dom::append(&hero, &scroll_hint)?;
    super::smooth_anchor(ctx, &scroll_hint);
    embed::mount_lottie(ctx, &wheel, LottieTrigger::Autoplay);

    log::info!("[route] hero mounted");
    Ok(())
}
