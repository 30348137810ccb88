use folio_core::{Disposer, Rect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// `<tag class="...">`
pub fn el(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::HtmlElement> {
    let e = document.create_element(tag).map_err(js_err)?;
    if !class.is_empty() {
        e.set_class_name(class);
    }
    e.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

pub fn text_el(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::HtmlElement> {
    let e = el(document, tag, class)?;
    e.set_text_content(Some(text));
    Ok(e)
}

pub fn link(
    document: &web::Document,
    href: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::HtmlElement> {
    let a = text_el(document, "a", class, text)?;
    _ = a.set_attribute("href", href);
    Ok(a)
}

#[inline]
pub fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent.append_child(child).map(|_| ()).map_err(js_err)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

/// Hide purely visual layers from assistive tech.
pub fn mark_decorative(el: &web::Element) {
    _ = el.set_attribute("aria-hidden", "true");
    _ = el.set_attribute("role", "presentation");
}

pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(document: &web::Document, id: &str) -> bool {
    let Some(target) = document.get_element_by_id(id) else {
        return false;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

/// Add an event listener; the returned disposer removes it again.
pub fn listen<E, F>(target: &web::EventTarget, event: &'static str, handler: F) -> Disposer
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    listen_with(target, event, false, handler)
}

/// Passive listener, for scroll-rate events.
pub fn listen_passive<E, F>(target: &web::EventTarget, event: &'static str, handler: F) -> Disposer
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    listen_with(target, event, true, handler)
}

fn listen_with<E, F>(
    target: &web::EventTarget,
    event: &'static str,
    passive: bool,
    mut handler: F,
) -> Disposer
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
        return Disposer::noop();
    }
    let target = target.clone();
    Disposer::new(move || {
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        drop(closure);
    })
}
