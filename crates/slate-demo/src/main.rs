//! Slate Demo - a trivial screen that toggles a bottom sheet
//!
//! The app owns a single `show_sheet` boolean: a button flips it to true,
//! the sheet flips it back to false when the user dismisses it (backdrop
//! press or drag-to-dismiss).

mod config;
mod ui;

use ui::app::{DemoApp, WINDOW_HEIGHT, WINDOW_WIDTH};

fn title(_app: &DemoApp) -> String {
    String::from("slate-demo - Bottom Sheet")
}

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("slate-demo starting up");

    iced::application(DemoApp::new, DemoApp::update, DemoApp::view)
        .title(title)
        .window_size(iced::Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .theme(DemoApp::theme)
        .run()
}
