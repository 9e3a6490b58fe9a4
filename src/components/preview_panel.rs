use dioxus::desktop::use_window;
use dioxus::prelude::*;
use tracing::debug;

use crate::constants::{BG_DEEPEST, BG_SURFACE, BORDER_SUBTLE, TEXT_DIM, TEXT_MUTED, TEXT_SECONDARY};

/// Video preview area with transport controls.
///
/// No media pipeline is wired up, so the viewport shows a placeholder and
/// the transport only flips local state.
#[component]
pub fn PreviewPanel() -> Element {
    let window = use_window();
    let mut playing = use_signal(|| false);
    let mut volume = use_signal(|| 75_i32);
    let mut muted = use_signal(|| false);
    let mut fullscreen = use_signal(|| false);

    let volume_icon = if muted() || volume() == 0 {
        "🔇"
    } else if volume() < 50 {
        "🔉"
    } else {
        "🔊"
    };

    rsx! {
        div {
            style: "
                flex: 1; display: flex; flex-direction: column;
                background-color: {BG_DEEPEST}; overflow: hidden;
            ",

            // Viewport
            div {
                style: "
                    flex: 1; display: flex; flex-direction: column;
                    align-items: center; justify-content: center; gap: 8px;
                    color: {TEXT_DIM};
                ",
                span { style: "font-size: 32px;", "🎞" }
                span { style: "font-size: 13px;", "No media selected" }
                span { style: "font-size: 11px; color: {TEXT_DIM};", "Drag media here or select a clip on the timeline" }
            }

            // Transport bar
            div {
                style: "
                    display: flex; flex-direction: column; gap: 6px; flex-shrink: 0;
                    padding: 8px 16px 12px;
                    background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_SUBTLE};
                ",
                // Seek bar. Inert until playback exists.
                input {
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: "0",
                    style: "width: 100%; accent-color: {TEXT_MUTED};",
                }
                div {
                    style: "display: flex; align-items: center; justify-content: space-between;",
                    div {
                        style: "display: flex; align-items: center; gap: 8px;",
                        button {
                            class: "toolbar-btn",
                            onclick: move |_| {
                                let next = !playing();
                                playing.set(next);
                                debug!(playing = next, "transport toggled");
                            },
                            if playing() { "⏸" } else { "▶" }
                        }
                        span {
                            style: "font-size: 11px; color: {TEXT_SECONDARY}; font-family: 'SF Mono', Consolas, monospace;",
                            "00:00 / 00:00"
                        }
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 8px;",
                        button {
                            class: "toolbar-btn",
                            onclick: move |_| muted.set(!muted()),
                            "{volume_icon}"
                        }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "100",
                            value: "{volume}",
                            style: "width: 80px; accent-color: {TEXT_MUTED};",
                            oninput: move |e| {
                                if let Ok(value) = e.value().parse::<i32>() {
                                    volume.set(value.clamp(0, 100));
                                    muted.set(false);
                                }
                            },
                        }
                        button {
                            class: "toolbar-btn",
                            onclick: move |_| {
                                let next = !fullscreen();
                                fullscreen.set(next);
                                window.set_fullscreen(next);
                            },
                            if fullscreen() { "🗗" } else { "⛶" }
                        }
                    }
                }
            }
        }
    }
}
