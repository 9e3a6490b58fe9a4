//! PromptCut
//!
//! A desktop front-end demo for an AI-assisted, prompt-driven video editor.
//! All project data is hardcoded demo content; the assistant backend is a
//! canned local implementation behind a real request/response interface.

mod app;
mod assistant;
mod components;
mod constants;
mod state;
mod timeline;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("promptcut=info")),
        )
        .init();

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("PromptCut")
                .with_inner_size(LogicalSize::new(1440.0, 900.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
