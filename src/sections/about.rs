use super::embed;
use crate::context::MountContext;
use crate::dom;
use crate::motion;
use folio_core::content::{Side, TIMELINE};
use folio_core::{
    AnimationIntent, LottieTrigger, MotionState, SectionId, SectionReveal, StaggerFrom, TextMode,
    TextOptions, Trigger, VisibilityOptions, PARALLAX_SPEED, TEXT_VIEW_THRESHOLD,
};
use std::time::Duration;
use web_sys as web;

const INTRO: &str = "I'm a developer who loves turning ideas into polished, interactive products. \
I care about motion, performance and the small details that make an interface feel alive.";

pub fn mount(ctx: &mut MountContext, main: &web::HtmlElement) -> anyhow::Result<()> {
    let section = super::section(ctx, main, SectionId::About.id(), SectionReveal::Slide)?;
    let doc = ctx.document.clone();

    let heading = motion::animated_text(
        ctx,
        "h2",
        "section-title",
        "About Me",
        TextMode::Reveal,
        TextOptions::default(),
        TEXT_VIEW_THRESHOLD,
    )?;
    dom::append(&section, &heading)?;
    let intro = motion::animated_text(
        ctx,
        "p",
        "about-intro",
        INTRO,
        TextMode::Fade,
        TextOptions::default().stagger_ms(15),
        TEXT_VIEW_THRESHOLD,
    )?;
    dom::append(&section, &intro)?;

    // The layer drifts inside a static frame; the frame is what gets measured.
    let visual = dom::el(&doc, "div", "about-visual")?;
    dom::mark_decorative(&visual);
    dom::append(&section, &visual)?;
    let drift = dom::el(&doc, "div", "about-drift")?;
    dom::append(&visual, &drift)?;
    let d = ctx
        .scroll
        .bind_parallax(&drift, &visual, PARALLAX_SPEED, ctx.prefs.clone());
    ctx.keep(d);
    let orbit = dom::el(&doc, "div", "about-orbit")?;
    dom::append(&drift, &orbit)?;
    embed::mount_lottie(ctx, &orbit, LottieTrigger::OnView);

    let timeline = dom::el(&doc, "ol", "timeline")?;
    dom::append(&section, &timeline)?;
    for (i, entry) in TIMELINE.iter().enumerate() {
        let side = Side::for_index(i);
        let li = dom::el(&doc, "li", "timeline-entry")?;
        _ = li
            .class_list()
            .add_1(if side == Side::Left { "left" } else { "right" });
        let icon = dom::text_el(&doc, "span", "timeline-icon", entry.icon)?;
        dom::mark_decorative(&icon);
        dom::append(&li, &icon)?;
        let card = dom::el(&doc, "div", "timeline-card")?;
        dom::append(&card, &dom::text_el(&doc, "span", "timeline-years", entry.years)?)?;
        dom::append(&card, &dom::text_el(&doc, "h3", "timeline-title", entry.title)?)?;
        dom::append(&card, &dom::text_el(&doc, "p", "timeline-company", entry.company)?)?;
        dom::append(&card, &dom::text_el(&doc, "p", "timeline-description", entry.description)?)?;
        dom::append(&li, &card)?;
        dom::append(&timeline, &li)?;

        let intent = AnimationIntent::new(
            Trigger::OnViewportEnter,
            MotionState::hidden_offset(side.entry_offset(), 0.0),
            MotionState::VISIBLE,
        )
        .with_duration(Duration::from_millis(600));
        motion::play_on_view(
            ctx,
            &li,
            vec![card],
            intent,
            StaggerFrom::Start,
            VisibilityOptions::once(TEXT_VIEW_THRESHOLD),
        );
    }
    Ok(())
}
