use crate::context::MountContext;
use crate::dom;
use crate::motion;
use folio_core::content::{skills_in, SkillCategory};
use folio_core::{
    AnimationIntent, HoverEffect, MotionState, SectionId, SectionReveal, StaggerFrom, TextMode,
    TextOptions, Trigger, VisibilityOptions, SECTION_VIEW_THRESHOLD, TEXT_STAGGER_MS,
    TEXT_VIEW_THRESHOLD,
};
use std::time::Duration;
use web_sys as web;

const CATEGORIES: [(SkillCategory, &str); 3] = [
    (SkillCategory::Frontend, "Frontend"),
    (SkillCategory::Backend, "Backend"),
    (SkillCategory::Tools, "Tools"),
];

pub fn mount(ctx: &mut MountContext, main: &web::HtmlElement) -> anyhow::Result<()> {
    let section = super::section(ctx, main, SectionId::Skills.id(), SectionReveal::Scale)?;
    let doc = ctx.document.clone();

    let heading = motion::animated_text(
        ctx,
        "h2",
        "section-title",
        "Skills & Technologies",
        TextMode::Typewriter,
        TextOptions::default(),
        TEXT_VIEW_THRESHOLD,
    )?;
    dom::append(&section, &heading)?;

    let grid = dom::el(&doc, "div", "skills-grid")?;
    dom::append(&section, &grid)?;

    let mut pills = Vec::new();
    for (category, label) in CATEGORIES {
        let card = dom::el(&doc, "div", "skills-card")?;
        dom::append(&card, &dom::text_el(&doc, "h3", "skills-category", label)?)?;
        let list = dom::el(&doc, "ul", "skills-list")?;
        for skill in skills_in(category) {
            let pill = dom::text_el(&doc, "li", "skill-pill", skill.name)?;
            dom::append(&list, &pill)?;
            pills.push(pill);
        }
        dom::append(&card, &list)?;
        dom::append(&grid, &card)?;
        motion::attach_tilt(ctx, &card, HoverEffect::Glow);
    }

    let intent = AnimationIntent::new(
        Trigger::OnViewportEnter,
        MotionState {
            scale: 0.8,
            ..MotionState::HIDDEN
        },
        MotionState::VISIBLE,
    )
    .with_duration(Duration::from_millis(400))
    .with_stagger(Duration::from_millis(TEXT_STAGGER_MS));
    motion::play_on_view(
        ctx,
        &grid,
        pills,
        intent,
        StaggerFrom::Start,
        VisibilityOptions::once(SECTION_VIEW_THRESHOLD),
    );
    Ok(())
}
