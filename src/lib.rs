#![cfg(target_arch = "wasm32")]
use folio_core::{CursorSettings, EffectScope, MotionPreference, Route, SiteConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod context;
mod cursor;
mod dom;
mod frame;
mod motion;
mod observer;
mod scroll;
mod sections;
mod timer;

use context::MountContext;
use cursor::CursorOverlay;
use frame::FrameLoop;
use observer::ViewportWatcher;
use scroll::ScrollDriver;
use timer::WindowTimer;

const MOUNT_ID: &str = "app";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const FINE_POINTER_QUERY: &str = "(pointer: fine)";

thread_local! {
    static PAGE: RefCell<Option<MountContext>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn media_matches(window: &web::Window, query: &str) -> Option<web::MediaQueryList> {
    window.match_media(query).ok().flatten()
}

/// Track `prefers-reduced-motion` live unless the config pins it.
fn watch_reduced_motion(
    window: &web::Window,
    config: &SiteConfig,
    prefs: &Rc<Cell<MotionPreference>>,
    scope: &mut EffectScope,
) {
    let Some(mql) = media_matches(window, REDUCED_MOTION_QUERY) else {
        return;
    };
    let supported = prefs.get().observer_supported;
    prefs.set(MotionPreference::detect(mql.matches(), config.reduced_motion, supported));
    if config.reduced_motion.is_some() {
        return;
    }
    let prefs = prefs.clone();
    let target: &web::EventTarget = mql.as_ref();
    scope.add(dom::listen(target, "change", move |ev: web::MediaQueryListEvent| {
        let mut p = prefs.get();
        p.reduced_motion = ev.matches();
        prefs.set(p);
        log::info!("[motion] reduced motion {}", if p.reduced_motion { "on" } else { "off" });
    }));
}

fn current_route(window: &web::Window) -> Route {
    let location = window.location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let hash = location.hash().unwrap_or_default();
    Route::parse(&format!("{}{}", path, hash))
}

fn mount_cursor(ctx: &mut MountContext, window: &web::Window, settings: CursorSettings) {
    if !ctx.config.custom_cursor {
        return;
    }
    let fine = media_matches(window, FINE_POINTER_QUERY).is_some_and(|m| m.matches());
    if !fine {
        log::info!("[cursor] native cursor kept");
        return;
    }
    let prefs = ctx.prefs.clone();
    if let Err(e) = CursorOverlay::mount(&ctx.document, settings, prefs, &ctx.frame, &mut ctx.scope) {
        log::warn!("[cursor] mount failed: {:?}", e);
    }
}

fn teardown() {
    PAGE.with(|p| {
        if let Some(mut ctx) = p.borrow_mut().take() {
            ctx.frame.stop();
            let n = ctx.scope.dispose();
            log::info!("[route] page torn down ({} effects)", n);
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let root: web::HtmlElement = match document.get_element_by_id(MOUNT_ID) {
        Some(el) => el.dyn_into().map_err(|e| anyhow::anyhow!("{:?}", e))?,
        None => {
            log::warn!("[route] no #{} mount point; using body", MOUNT_ID);
            document.body().ok_or_else(|| anyhow::anyhow!("no body"))?
        }
    };
    let config = Rc::new(SiteConfig::load(root.get_attribute("data-config").as_deref()));

    let mut scope = EffectScope::new();
    let watcher = ViewportWatcher::new();
    let prefs = Rc::new(Cell::new(MotionPreference {
        reduced_motion: config.reduced_motion.unwrap_or(false),
        observer_supported: watcher.is_supported(),
    }));
    watch_reduced_motion(&window, &config, &prefs, &mut scope);
    if !prefs.get().animations_enabled() {
        log::warn!("[motion] reduced motion; animations resolve to their end state");
    }
    let scroll = ScrollDriver::install(&mut scope);

    let mut ctx = MountContext {
        document: document.clone(),
        frame: FrameLoop::new(),
        watcher,
        scroll,
        prefs,
        config: config.clone(),
        timer: WindowTimer,
        scope,
    };
    mount_cursor(&mut ctx, &window, config.cursor_settings());

    let route = current_route(&window);
    log::info!("[route] {}", route.path());
    match &route {
        Route::Home { .. } => sections::mount_home(&mut ctx, &root)?,
        Route::Project { slug } => sections::mount_project(&mut ctx, &root, slug)?,
        Route::NotFound { .. } => sections::mount_not_found(&mut ctx, &root)?,
    }

    ctx.scroll.refresh();
    if let Route::Home { anchor: Some(section) } = route {
        dom::smooth_scroll_to(&document, section.id());
    }
    log::info!("[route] mounted, {} animations on the frame loop", ctx.frame.len());
    ctx.frame.start();
    PAGE.with(|p| *p.borrow_mut() = Some(ctx));

    let on_hide = Closure::once_into_js(teardown);
    _ = window.add_event_listener_with_callback("pagehide", on_hide.unchecked_ref());
    Ok(())
}
