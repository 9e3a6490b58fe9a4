use dioxus::prelude::*;
use tracing::error;
use uuid::Uuid;

use crate::assistant::AssistantClient;
use crate::components::{ChatPanel, MediaPanel, PreviewPanel, PromptBox, TitleBar};
use crate::constants::{
    BG_BASE, BG_HOVER, BORDER_ACCENT, BORDER_DEFAULT, BORDER_STRONG, CHAT_PANEL_WIDTH,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY, TIMELINE_DEFAULT_HEIGHT, TIMELINE_MAX_HEIGHT,
    TIMELINE_MIN_HEIGHT,
};
use crate::state::{demo_media, Project};
use crate::timeline::layout::ZOOM_DEFAULT;
use crate::timeline::TimelinePanel;

/// Root component: global styles, top-level signals, and the panel layout.
#[component]
pub fn App() -> Element {
    let mut project = use_signal(|| {
        let demo = Project::demo();
        match demo.validate() {
            Ok(()) => demo,
            Err(err) => {
                error!(%err, "demo project failed validation, starting empty");
                Project::empty()
            }
        }
    });
    let media = use_hook(demo_media);
    let client = use_hook(AssistantClient::default);

    let mut show_chat = use_signal(|| true);
    let mut zoom = use_signal(|| ZOOM_DEFAULT);
    let mut selected_clip: Signal<Option<Uuid>> = use_signal(|| None);
    let mut timeline_height = use_signal(|| TIMELINE_DEFAULT_HEIGHT);
    // (pointer y, timeline height) at drag start
    let mut resize_drag: Signal<Option<(f64, f64)>> = use_signal(|| None);

    let main_margin = if show_chat() { CHAT_PANEL_WIDTH } else { 0.0 };

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{
                margin: 0; padding: 0; height: 100%; overflow: hidden;
                background-color: {BG_BASE};
                font-family: 'Inter', 'Segoe UI', system-ui, sans-serif;
                -webkit-font-smoothing: antialiased;
            }}
            ::-webkit-scrollbar {{ width: 8px; height: 8px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_STRONG}; border-radius: 4px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {TEXT_MUTED}; }}
            .toolbar-btn {{
                background: transparent; border: none; border-radius: 4px;
                padding: 4px 10px; font-size: 11px; color: {TEXT_SECONDARY};
                cursor: pointer; transition: background-color 0.15s ease;
            }}
            .toolbar-btn:hover {{ background-color: {BG_HOVER}; color: {TEXT_PRIMARY}; }}
            .toolbar-btn:disabled {{ cursor: default; }}
            .resize-handle {{
                height: 4px; cursor: ns-resize; flex-shrink: 0;
                background-color: transparent; transition: background-color 0.15s ease;
            }}
            .resize-handle:hover {{ background-color: {BORDER_ACCENT}; }}
            .resize-handle:active {{ background-color: {BORDER_ACCENT}; }}
            .typing-dot {{
                width: 6px; height: 6px; border-radius: 50%;
                background-color: {TEXT_MUTED};
                animation: typing-bounce 1s infinite;
            }}
            @keyframes typing-bounce {{
                0%, 60%, 100% {{ transform: translateY(0); }}
                30% {{ transform: translateY(-4px); }}
            }}
            "#
        }

        div {
            style: "
                height: 100vh; display: flex; flex-direction: column;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
            ",
            onmousemove: move |e| {
                if let Some((start_y, start_height)) = resize_drag() {
                    let delta = start_y - e.client_coordinates().y;
                    timeline_height.set(
                        (start_height + delta).clamp(TIMELINE_MIN_HEIGHT, TIMELINE_MAX_HEIGHT),
                    );
                }
            },
            onmouseup: move |_| resize_drag.set(None),

            TitleBar {
                project_name: project().name,
                on_rename: move |name| project.with_mut(|p| p.name = name),
                chat_open: show_chat(),
                on_toggle_chat: move |_| show_chat.set(!show_chat()),
            }

            div {
                style: "
                    flex: 1; display: flex; flex-direction: column; overflow: hidden;
                    margin-right: {main_margin}px; transition: margin-right 0.3s ease;
                ",

                div {
                    style: "flex: 1; display: flex; overflow: hidden;",
                    MediaPanel { items: media.clone() }
                    div {
                        style: "flex: 1; display: flex; flex-direction: column; overflow: hidden;",
                        PreviewPanel {}
                        PromptBox { client: client.clone() }
                    }
                }

                div {
                    class: "resize-handle",
                    style: "border-top: 1px solid {BORDER_DEFAULT};",
                    onmousedown: move |e| {
                        resize_drag.set(Some((e.client_coordinates().y, timeline_height())));
                    },
                }

                div {
                    style: "height: {timeline_height}px; display: flex; flex-direction: column; flex-shrink: 0;",
                    TimelinePanel {
                        project: project(),
                        zoom: zoom(),
                        on_zoom_change: move |z| zoom.set(z),
                        selected_clip: selected_clip(),
                        on_clip_select: move |id| selected_clip.set(Some(id)),
                    }
                }
            }

            ChatPanel {
                open: show_chat(),
                client: client.clone(),
                on_close: move |_| show_chat.set(false),
            }
        }
    }
}
