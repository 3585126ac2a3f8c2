//! WalletDesk - a desktop wallet companion shell built with egui.
//!
//! Architecture:
//! - Main thread: runs the egui UI (menu bar + modal dialogs)
//! - Logger thread: writes shell event logs without blocking the UI
//! - Alias validation/storage happens behind the `AliasStore` trait

use eframe::egui;

use walletdesk::app::ShellApp;
use walletdesk::config;

fn main() -> eframe::Result<()> {
    let settings = config::load_settings().unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([300.0, 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "WalletDesk",
        options,
        Box::new(|cc| Ok(Box::new(ShellApp::new(cc, settings)))),
    )
}
