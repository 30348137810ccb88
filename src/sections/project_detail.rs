use crate::context::MountContext;
use crate::dom;
use crate::motion::{self, IntentAnimation};
use folio_core::{
    lookup, AnimatedButton, AnimationIntent, ButtonSize, ButtonVariant, MotionState,
    ProjectLookup, ProjectRecord, Replay, ScrollTrigger, ScrubBinding, SectionId, StaggerFrom,
    TextMode, TextOptions, Trigger, TriggerAction, TriggerMode, TEXT_VIEW_THRESHOLD,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

const CONTENT_STAGGER_MS: u64 = 200;

fn back_href() -> String {
    format!("/{}", SectionId::Projects.anchor())
}

pub fn mount(ctx: &mut MountContext, root: &web::HtmlElement, slug: &str) -> anyhow::Result<()> {
    match lookup(slug) {
        ProjectLookup::Found(p) => {
            log::info!("[route] project {}", p.slug);
            mount_found(ctx, root, p)
        }
        ProjectLookup::NotFound { slug } => {
            log::info!("[route] unknown project `{}`", slug);
            mount_not_found(ctx, root)
        }
    }
}

pub(crate) fn mount_not_found(ctx: &mut MountContext, root: &web::HtmlElement) -> anyhow::Result<()> {
    let doc = &ctx.document;
    let main = dom::el(doc, "main", "not-found")?;
    dom::append(root, &main)?;
    dom::append(&main, &dom::text_el(doc, "h1", "not-found-title", "Project Not Found")?)?;
    dom::append(
        &main,
        &dom::text_el(
            doc,
            "p",
            "not-found-text",
            "The project you're looking for doesn't exist or has been moved.",
        )?,
    )?;
    dom::append(&main, &dom::link(doc, &back_href(), "btn btn-primary", "Back to Projects")?)?;
    Ok(())
}

fn hero(ctx: &mut MountContext, main: &web::HtmlElement, p: &ProjectRecord) -> anyhow::Result<()> {
    let doc = ctx.document.clone();
    let hero = dom::el(&doc, "header", "project-hero")?;
    dom::set_style(&hero, "overflow", "hidden");
    dom::append(main, &hero)?;

    let bg = dom::el(&doc, "div", "project-hero-bg")?;
    dom::mark_decorative(&bg);
    dom::set_style(&bg, "background", &p.color.css());
    dom::append(&hero, &bg)?;

    // Scrubbed against the untransformed header, never the layer it moves.
    let binding = ScrubBinding {
        from: MotionState::VISIBLE,
        to: MotionState {
            y: 100.0,
            scale: 1.1,
            ..MotionState::VISIBLE
        },
    };
    let trigger = ScrollTrigger::parse("top top", "bottom top", TriggerMode::Scrub)?;
    let layer = bg.clone();
    let prefs = ctx.prefs.clone();
    let d = ctx.scroll.bind_trigger(&hero, trigger, move |action| {
        if let TriggerAction::Scrub(progress) = action {
            let progress = if prefs.get().animations_enabled() { progress } else { 0.0 };
            motion::apply_state(&layer, &binding.state_at(progress));
        }
    });
    ctx.keep(d);

    let inner = dom::el(&doc, "div", "project-hero-content")?;
    dom::append(&hero, &inner)?;
    let back = dom::link(&doc, &back_href(), "back-link", "← Back to Projects")?;
    dom::append(&inner, &back)?;
    let title = motion::animated_text(
        ctx,
        "h1",
        "project-detail-title",
        p.title,
        TextMode::Reveal,
        TextOptions::default().delay_ms(200),
        TEXT_VIEW_THRESHOLD,
    )?;
    dom::append(&inner, &title)?;
    dom::append(&inner, &dom::text_el(&doc, "p", "project-detail-description", p.description)?)?;

    let meta = dom::el(&doc, "dl", "project-meta")?;
    for (k, v) in [("Year", p.year), ("Client", p.client), ("Role", p.role)] {
        dom::append(&meta, &dom::text_el(&doc, "dt", "", k)?)?;
        dom::append(&meta, &dom::text_el(&doc, "dd", "", v)?)?;
    }
    dom::append(&inner, &meta)?;
    Ok(())
}

fn content_blocks(
    ctx: &mut MountContext,
    body: &web::HtmlElement,
    p: &ProjectRecord,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let doc = ctx.document.clone();
    let mut blocks = Vec::new();

    let about = dom::el(&doc, "div", "project-block")?;
    dom::append(&about, &dom::text_el(&doc, "h2", "", "About This Project")?)?;
    dom::append(&about, &dom::text_el(&doc, "p", "", p.long_description)?)?;
    blocks.push(about);

    let features = dom::el(&doc, "div", "project-block")?;
    dom::append(&features, &dom::text_el(&doc, "h2", "", "Key Features")?)?;
    let list = dom::el(&doc, "ul", "feature-list")?;
    for f in p.features {
        dom::append(&list, &dom::text_el(&doc, "li", "feature", f)?)?;
    }
    dom::append(&features, &list)?;
    blocks.push(features);

    let tech = dom::el(&doc, "div", "project-block")?;
    dom::append(&tech, &dom::text_el(&doc, "h2", "", "Technologies")?)?;
    let tags = dom::el(&doc, "ul", "project-tags")?;
    for t in p.tags {
        dom::append(&tags, &dom::text_el(&doc, "li", "tag", t)?)?;
    }
    dom::append(&tech, &tags)?;
    blocks.push(tech);

    let gallery = dom::el(&doc, "div", "project-block project-gallery")?;
    for (i, src) in p.gallery.iter().enumerate() {
        let g = dom::el(&doc, "div", "gallery-item")?;
        _ = g.set_attribute("data-src", src);
        _ = g.set_attribute("role", "img");
        _ = g.set_attribute("aria-label", &format!("{} screenshot {}", p.title, i + 1));
        dom::set_style(&g, "background", &p.color.css());
        dom::append(&gallery, &g)?;
    }
    blocks.push(gallery);

    if !p.links.is_empty() {
        let links = dom::el(&doc, "div", "project-block project-links")?;
        let strength = ctx.config.magnetic_strength;
        let live = p.links.live.map(|h| (h, "Live Demo", ButtonVariant::Primary));
        let source = p.links.source.map(|h| (h, "View Code", ButtonVariant::Outline));
        for (href, label, variant) in live.into_iter().chain(source) {
            let (a, _) = motion::animated_button(
                ctx,
                AnimatedButton::new(variant, ButtonSize::Md).with_magnetic_strength(strength),
                label,
                Some(href),
            )?;
            _ = a.set_attribute("target", "_blank");
            _ = a.set_attribute("rel", "noopener noreferrer");
            dom::append(&links, &a)?;
        }
        blocks.push(links);
    }

    for b in &blocks {
        dom::append(body, b)?;
    }
    Ok(blocks)
}

fn mount_found(ctx: &mut MountContext, root: &web::HtmlElement, p: &'static ProjectRecord) -> anyhow::Result<()> {
    let main = dom::el(&ctx.document, "main", "project-detail")?;
    dom::append(root, &main)?;
    hero(ctx, &main, p)?;

    let body = dom::el(&ctx.document, "article", "project-content")?;
    dom::append(&main, &body)?;
    let blocks = content_blocks(ctx, &body, p)?;

    let intent = AnimationIntent::new(
        Trigger::OnViewportEnter,
        MotionState::hidden_offset(0.0, 50.0),
        MotionState::VISIBLE,
    )
    .with_duration(Duration::from_millis(800))
    .with_stagger(Duration::from_millis(CONTENT_STAGGER_MS));
    let anim = Rc::new(RefCell::new(IntentAnimation::new(
        intent,
        blocks,
        StaggerFrom::Start,
        ctx.prefs.clone(),
    )));
    ctx.animate(&anim);
    let trigger = ScrollTrigger::parse("top 80%", "bottom 20%", TriggerMode::Toggle(Replay::Repeat))?;
    let d = ctx.scroll.bind_trigger(&body, trigger, move |action| match action {
        TriggerAction::Play => anim.borrow_mut().play(),
        TriggerAction::Reverse => anim.borrow_mut().reverse(),
        TriggerAction::Scrub(_) | TriggerAction::None => {}
    });
    ctx.keep(d);
    Ok(())
}
