#![forbid(unsafe_code)]
//! FlexiCars web front-end: Yew components over the `flexicars-core` logic.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod data;
pub mod dom;
pub mod format;
pub mod hooks;
pub mod pages;
pub mod paths;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logging(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    });
    yew::Renderer::<app::App>::new().render();
}

/// Route `log` records to the browser console. Later calls keep the first logger.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: log::Level) {
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}
