pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod theme;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry: logging, theme, runtime config, then the app.
#[cfg(target_arch = "wasm32")]
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console_log init failed: {}", err).into());
    }
    log::info!("Starting HRMS frontend");

    theme::init_system_theme();
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });

    router::mount_app();
}
