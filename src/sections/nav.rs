use crate::context::MountContext;
use crate::dom;
use folio_core::content::NAV_ITEMS;
use folio_core::{progress_bar_transform, NavState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const MENU_ID: &str = "nav-menu";

pub fn mount(ctx: &mut MountContext, root: &web::HtmlElement, on_home: bool) -> anyhow::Result<()> {
    let doc = ctx.document.clone();
    let state = Rc::new(RefCell::new(NavState::new()));

    let bar = dom::el(&doc, "div", "scroll-progress")?;
    dom::mark_decorative(&bar);
    dom::set_style(&bar, "transform-origin", "left");
    dom::set_style(&bar, "transform", &progress_bar_transform(0.0));
    dom::append(root, &bar)?;

    let nav = dom::el(&doc, "nav", "site-nav")?;
    dom::append(root, &nav)?;
    let logo = dom::link(&doc, if on_home { "#hero" } else { "/" }, "nav-logo", "Portfolio")?;
    dom::append(&nav, &logo)?;
    if on_home {
        super::smooth_anchor(ctx, &logo);
    }

    let toggle = dom::el(&doc, "button", "nav-toggle")?;
    _ = toggle.set_attribute("type", "button");
    _ = toggle.set_attribute("aria-label", "Toggle menu");
    _ = toggle.set_attribute("aria-controls", MENU_ID);
    _ = toggle.set_attribute("aria-expanded", state.borrow().aria_expanded());
    for _ in 0..3 {
        let line = dom::el(&doc, "span", "nav-toggle-line")?;
        dom::append(&toggle, &line)?;
    }
    dom::append(&nav, &toggle)?;

    let menu = dom::el(&doc, "ul", "nav-menu")?;
    menu.set_id(MENU_ID);
    dom::append(&nav, &menu)?;

    let sync_menu = {
        let toggle = toggle.clone();
        let menu = menu.clone();
        move |s: &NavState| {
            _ = toggle.set_attribute("aria-expanded", s.aria_expanded());
            _ = menu.class_list().toggle_with_force("open", s.is_menu_open());
        }
    };

    let target: &web::EventTarget = toggle.as_ref();
    let st = state.clone();
    let sync = sync_menu.clone();
    ctx.keep(dom::listen(target, "click", move |_: web::MouseEvent| {
        let open = st.borrow_mut().toggle_menu();
        log::debug!("[nav] menu {}", if open { "open" } else { "closed" });
        sync(&st.borrow());
    }));

    let st = state.clone();
    let sync = sync_menu.clone();
    let t = toggle.clone();
    let doc_target: &web::EventTarget = doc.as_ref();
    ctx.keep(dom::listen(doc_target, "keydown", move |ev: web::KeyboardEvent| {
        if ev.key() != "Escape" || !st.borrow().is_menu_open() {
            return;
        }
        st.borrow_mut().close_menu();
        sync(&st.borrow());
        _ = t.focus();
    }));

    for item in NAV_ITEMS {
        let li = dom::el(&doc, "li", "")?;
        let href = if on_home {
            item.section.anchor()
        } else {
            format!("/{}", item.section.anchor())
        };
        let a = dom::link(&doc, &href, "nav-link", item.label)?;
        dom::append(&li, &a)?;
        dom::append(&menu, &li)?;

        let st = state.clone();
        let sync = sync_menu.clone();
        let d = doc.clone();
        let link = a.clone();
        let target: &web::EventTarget = a.as_ref();
        ctx.keep(dom::listen(target, "click", move |ev: web::MouseEvent| {
            let href = link.get_attribute("href").unwrap_or_default();
            let section = st.borrow_mut().navigate(&href);
            sync(&st.borrow());
            if !on_home {
                return;
            }
            if let Some(section) = section {
                if dom::smooth_scroll_to(&d, section.id()) {
                    ev.prevent_default();
                }
            }
        }));
    }

    let st = state;
    let nav_el = nav.clone();
    let d = ctx.scroll.subscribe(move |snap| {
        dom::set_style(&bar, "transform", &progress_bar_transform(snap.progress));
        if st.borrow_mut().apply_scroll(snap) {
            _ = nav_el.class_list().toggle_with_force("scrolled", snap.scrolled);
        }
    });
    ctx.keep(d);
    Ok(())
}
