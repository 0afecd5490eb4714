pub mod api;
pub mod app;
pub mod component;
pub mod conf;
pub mod employee;
pub mod error;
pub mod error_template;
pub mod reference;

/// Browser entry point: route `log` records to the console and mount the
/// application.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
