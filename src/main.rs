//! Browser entry point: installs logging and mounts the root component.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        cloudninja_site::util::dom::install_error_logger();
        cloudninja_site::util::dom::register_service_worker();

        log::info!("mounting cloudninja-site");
        leptos::mount::mount_to_body(cloudninja_site::app::App);
    }
}
