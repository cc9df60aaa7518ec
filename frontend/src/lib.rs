mod app;
pub mod components;
pub mod config;
mod pages;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// WASM entry point: logging first, then runtime config, then the app.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    config::init();
    log::info!("starting {} frontend (wasm)", config::agency().name);
    app::mount_app();
}
