use crate::context::MountContext;
use crate::dom;
use crate::motion;
use folio_core::projects;
use folio_core::{
    AnimationIntent, HoverEffect, MotionState, ProjectRecord, SectionId,
    SectionReveal, StaggerFrom, TextMode, TextOptions, Trigger, VisibilityOptions,
    CARD_VIEW_THRESHOLD, TEXT_VIEW_THRESHOLD,
};
use std::time::Duration;
use web_sys as web;

const CARD_STAGGER_MS: u64 = 100;

fn card(doc: &web::Document, p: &ProjectRecord) -> anyhow::Result<web::HtmlElement> {
    let a = dom::el(doc, "a", "project-card")?;
    _ = a.set_attribute("href", &p.href());
    _ = a.set_attribute("data-cursor", "pointer");
    if p.featured {
        _ = a.class_list().add_1("featured");
    }

    let cover = dom::el(doc, "div", "project-cover")?;
    dom::set_style(&cover, "background", &p.color.css());
    dom::mark_decorative(&cover);
    dom::append(&a, &cover)?;

    let body = dom::el(doc, "div", "project-body")?;
    dom::append(&a, &body)?;
    if p.featured {
        dom::append(&body, &dom::text_el(doc, "span", "project-featured", "Featured")?)?;
    }
    dom::append(&body, &dom::text_el(doc, "h3", "project-title", p.title)?)?;
    dom::append(&body, &dom::text_el(doc, "p", "project-summary", p.summary)?)?;
    let tags = dom::el(doc, "ul", "project-tags")?;
    for tag in p.card_tags() {
        dom::append(&tags, &dom::text_el(doc, "li", "tag", tag)?)?;
    }
    dom::append(&body, &tags)?;
    Ok(a)
}

pub fn mount(ctx: &mut MountContext, main: &web::HtmlElement) -> anyhow::Result<()> {
    let section = super::section(ctx, main, SectionId::Projects.id(), SectionReveal::Fade)?;
    let doc = ctx.document.clone();

    let heading = motion::animated_text(
        ctx,
        "h2",
        "section-title",
        "Featured Projects",
        TextMode::SlideUp,
        TextOptions::default(),
        TEXT_VIEW_THRESHOLD,
    )?;
    dom::append(&section, &heading)?;

    let grid = dom::el(&doc, "div", "project-grid")?;
    dom::append(&section, &grid)?;
    let mut cards = Vec::new();
    for p in projects::all() {
        // Entrance on the wrapper, tilt on the card.
        let wrap = dom::el(&doc, "div", "project-card-wrap")?;
        let c = card(&doc, p)?;
        dom::append(&wrap, &c)?;
        dom::append(&grid, &wrap)?;
        motion::attach_tilt(ctx, &c, HoverEffect::Tilt);
        cards.push(wrap);
    }
    let intent = AnimationIntent::new(
        Trigger::OnViewportEnter,
        MotionState::hidden_offset(0.0, 50.0),
        MotionState::VISIBLE,
    )
    .with_duration(Duration::from_millis(600))
    .with_stagger(Duration::from_millis(CARD_STAGGER_MS));
    motion::play_on_view(
        ctx,
        &grid,
        cards,
        intent,
        StaggerFrom::Start,
        VisibilityOptions::once(CARD_VIEW_THRESHOLD),
    );
    Ok(())
}
