pub mod active_section;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod content;
pub mod count_up;
pub mod frame;
pub mod preference;
pub mod scroll_threshold;
pub mod viewport;
pub mod visibility;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    // only fails if a logger is already installed
    console_log::init_with_level(level).ok();
    leptos::mount::hydrate_body(App);
}
