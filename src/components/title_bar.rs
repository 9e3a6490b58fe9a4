use dioxus::prelude::*;
use tracing::info;

use crate::constants::{
    ACCENT_PRIMARY, BG_SURFACE, BORDER_ACCENT, BORDER_DEFAULT, TEXT_MUTED, TEXT_PRIMARY,
    TITLE_BAR_HEIGHT,
};

/// Header bar: branding, project rename, and the top-level action buttons.
#[component]
pub fn TitleBar(
    project_name: String,
    on_rename: EventHandler<String>,
    chat_open: bool,
    on_toggle_chat: EventHandler<MouseEvent>,
) -> Element {
    let mut editing = use_signal(|| false);
    let mut draft = use_signal(String::new);

    let name_for_edit = project_name.clone();
    let commit_name = project_name.clone();
    let mut commit = move |value: String| {
        // Blank edits are discarded, the old name stays.
        if !value.trim().is_empty() && value != commit_name {
            on_rename.call(value);
        }
        editing.set(false);
    };
    let mut commit_on_blur = commit.clone();

    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: {TITLE_BAR_HEIGHT}px; padding: 0 16px; flex-shrink: 0;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none;
            ",
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                span { style: "font-size: 18px; color: {ACCENT_PRIMARY};", "🎬" }
                if editing() {
                    input {
                        r#type: "text",
                        value: "{draft}",
                        autofocus: "true",
                        style: "
                            background: transparent; border: 1px solid {BORDER_ACCENT};
                            border-radius: 4px; padding: 4px 8px;
                            font-size: 13px; font-weight: 600; color: {TEXT_PRIMARY};
                            outline: none; width: 220px;
                        ",
                        oninput: move |e| draft.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                commit(draft());
                            }
                        },
                        onblur: move |_| commit_on_blur(draft()),
                    }
                } else {
                    span {
                        style: "font-size: 13px; font-weight: 600; color: {TEXT_PRIMARY}; cursor: text;",
                        onclick: move |_| {
                            draft.set(name_for_edit.clone());
                            editing.set(true);
                        },
                        "{project_name}"
                    }
                }
            }
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                button {
                    class: "toolbar-btn",
                    onclick: move |_| info!("undo requested"),
                    "↩ Undo"
                }
                button {
                    class: "toolbar-btn",
                    onclick: move |_| info!("redo requested"),
                    "↪ Redo"
                }
                div { style: "width: 1px; height: 20px; background-color: {BORDER_DEFAULT};" }
                button {
                    class: "toolbar-btn",
                    onclick: move |_| info!("save requested"),
                    "Save"
                }
                button {
                    class: "toolbar-btn",
                    style: "background-color: {ACCENT_PRIMARY}; color: #ffffff;",
                    onclick: move |_| info!("export requested"),
                    "Export"
                }
                button {
                    class: "toolbar-btn",
                    onclick: move |_| info!("share requested"),
                    "Share"
                }
                div { style: "width: 1px; height: 20px; background-color: {BORDER_DEFAULT};" }
                button {
                    class: "toolbar-btn",
                    style: if chat_open {
                        format!("color: {ACCENT_PRIMARY};")
                    } else {
                        format!("color: {TEXT_MUTED};")
                    },
                    onclick: move |e| on_toggle_chat.call(e),
                    "💬 Assistant"
                }
            }
        }
    }
}
