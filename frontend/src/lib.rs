pub mod app;
pub mod clipboard;
pub mod components;
pub mod i18n;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Ignore a second init when the host already installed a logger.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount_to_body(app::App);
}
