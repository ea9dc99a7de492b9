#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
mod demo;
#[cfg(target_os = "windows")]
mod host;

use acrylic_chrome::config::{load_config, ChromeConfig};
use acrylic_chrome::log_info;

fn main() -> anyhow::Result<()> {
    log_info!("========================================");
    log_info!("acrylic-demo v{} STARTUP", env!("CARGO_PKG_VERSION"));
    log_info!("========================================");

    run(load_config())
}

#[cfg(target_os = "windows")]
fn run(config: ChromeConfig) -> anyhow::Result<()> {
    host::setup_crash_handler();
    host::init_dpi_awareness();
    host::run(config)
}

#[cfg(not(target_os = "windows"))]
fn run(config: ChromeConfig) -> anyhow::Result<()> {
    log_info!("[Demo] acrylic-demo needs a Windows desktop, nothing to show here");
    for window in demo::demo_windows(&config) {
        log_info!(
            "[Demo] would open {:?} \"{}\" (title bar {}, close {:?})",
            window.role,
            window.title,
            window.config.title_bar,
            window.config.close_behavior
        );
    }
    Ok(())
}
