use folio_core::{TaskHandle, Timer};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setTimeout`-backed timer; cancelling a task clears the timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowTimer;

impl Timer for WindowTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = TaskHandle::new();
        let Some(window) = web::window() else {
            log::warn!("[timer] no window; task dropped");
            handle.cancel();
            return handle;
        };
        let run = handle.clone();
        let cb = Closure::once_into_js(move || {
            run.run_if_pending(task);
        });
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms) {
            Ok(id) => handle.set_cancel_hook(move || {
                if let Some(w) = web::window() {
                    w.clear_timeout_with_handle(id);
                }
            }),
            Err(e) => {
                log::warn!("[timer] setTimeout failed: {:?}", e);
                handle.cancel();
            }
        }
        handle
    }
}
