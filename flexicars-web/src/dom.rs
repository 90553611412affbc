use flexicars_core::Sleep;
use js_sys::{Function, Object, Promise};
use std::collections::BTreeMap;
use std::future::Future;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Event, EventTarget, FormData, HtmlFormElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Storage, Window,
};

/// The global `window`, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The page document, if running in a browser.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Show a blocking browser alert. Silently does nothing outside a browser.
pub fn alert(message: &str) {
    if let Some(win) = window() {
        if let Err(e) = win.alert_with_message(message) {
            log::warn!("alert failed: {}", js_error_message(&e));
        }
    }
}

/// Current vertical scroll offset in pixels.
#[must_use]
pub fn scroll_y() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

/// Smoothly scroll the first element matching `selector` to the top of the viewport.
/// Returns false when nothing matches or the selector is invalid.
pub fn smooth_scroll_to(selector: &str) -> bool {
    let Some(target) = document().and_then(|doc| doc.query_selector(selector).ok().flatten())
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Capture every named control of a form as `name → value`.
///
/// # Errors
/// Returns an error if the form data cannot be read or holds non-string entries.
pub fn form_entries(form: &HtmlFormElement) -> Result<BTreeMap<String, String>, JsValue> {
    let data = FormData::new_with_form(form)?;
    let object = Object::from_entries(&data)?;
    serde_wasm_bindgen::from_value(object.into()).map_err(JsValue::from)
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if there is no window, the timer cannot be scheduled, or the
/// underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: u32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let timeout = i32::try_from(duration_ms).unwrap_or(i32::MAX);
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timeout,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Browser timer source for simulated latency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserSleep;

impl Sleep for BrowserSleep {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        async move {
            if let Err(e) = sleep_ms(ms).await {
                log::warn!("timer failed: {}", js_error_message(&e));
            }
        }
    }
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// An attached DOM event listener, detached again on drop.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// # Errors
    /// Returns an error if the browser refuses the listener.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Attach to `window`, logging and returning `None` on failure.
    pub fn on_window<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let win = window()?;
        Self::new(&win, event, handler)
            .map_err(|e| log::error!("failed to listen for {event}: {}", js_error_message(&e)))
            .ok()
    }

    /// Attach to `document`, logging and returning `None` on failure.
    pub fn on_document<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let doc = document()?;
        Self::new(&doc, event, handler)
            .map_err(|e| log::error!("failed to listen for {event}: {}", js_error_message(&e)))
            .ok()
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// A repeating `setInterval` timer, cleared on drop.
pub struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    /// Start calling `tick` every `period_ms` milliseconds. Returns `None` outside a
    /// browser or if the timer cannot be scheduled.
    pub fn start<F>(period_ms: u32, tick: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let win = window()?;
        let callback = Closure::<dyn FnMut()>::new(tick);
        let period = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let handle = win
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period,
            )
            .map_err(|e| log::error!("failed to start interval: {}", js_error_message(&e)))
            .ok()?;
        Some(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.handle);
        }
    }
}
