//! Page sections. Each one builds its markup and sequences the motion
//! primitives with its own delays; none of them animates anything directly.

pub mod about;
pub mod contact;
pub mod embed;
pub mod hero;
pub mod nav;
pub mod project_detail;
pub mod projects;
pub mod skills;

use crate::context::MountContext;
use crate::dom;
use folio_core::{SectionId, SectionReveal};
use web_sys as web;

/// `<section id=...>` with its entrance reveal wired.
pub(crate) fn section(
    ctx: &mut MountContext,
    parent: &web::HtmlElement,
    id: &str,
    reveal: SectionReveal,
) -> anyhow::Result<web::HtmlElement> {
    let s = dom::el(&ctx.document, "section", "section")?;
    s.set_id(id);
    dom::append(parent, &s)?;
    crate::motion::reveal_section(ctx, &s, reveal);
    Ok(s)
}

/// Same-page anchors scroll smoothly instead of jumping.
pub(crate) fn smooth_anchor(ctx: &mut MountContext, a: &web::HtmlElement) {
    let doc = ctx.document.clone();
    let link = a.clone();
    let target: &web::EventTarget = a.as_ref();
    let d = dom::listen(target, "click", move |ev: web::MouseEvent| {
        let Some(section) = link
            .get_attribute("href")
            .and_then(|h| SectionId::from_anchor(&h))
        else {
            return;
        };
        if dom::smooth_scroll_to(&doc, section.id()) {
            ev.prevent_default();
        }
    });
    ctx.keep(d);
}

/// The composed home page.
pub fn mount_home(ctx: &mut MountContext, root: &web::HtmlElement) -> anyhow::Result<()> {
    nav::mount(ctx, root, true)?;
    let main = dom::el(&ctx.document, "main", "home")?;
    dom::append(root, &main)?;
    hero::mount(ctx, &main)?;
    projects::mount(ctx, &main)?;
    about::mount(ctx, &main)?;
    skills::mount(ctx, &main)?;
    contact::mount(ctx, &main)?;
    Ok(())
}

/// Any path outside the route surface.
pub fn mount_not_found(ctx: &mut MountContext, root: &web::HtmlElement) -> anyhow::Result<()> {
    nav::mount(ctx, root, false)?;
    project_detail::mount_not_found(ctx, root)
}

pub fn mount_project(ctx: &mut MountContext, root: &web::HtmlElement, slug: &str) -> anyhow::Result<()> {
    nav::mount(ctx, root, false)?;
    project_detail::mount(ctx, root, slug)
}
