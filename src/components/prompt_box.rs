use dioxus::prelude::*;
use tracing::{error, info};

use crate::assistant::AssistantClient;
use crate::constants::{
    ACCENT_PRIMARY, BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, BORDER_SUBTLE, PROMPT_BOX_HEIGHT,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

const SUGGESTIONS: [&str; 6] = [
    "Add a cinematic color grade",
    "Create a slow-motion effect",
    "Apply film grain texture",
    "Add a subtle vignette",
    "Create an RGB split effect",
    "Apply a dream-like glow",
];

/// AI prompt bar: free-text editing prompts with suggestions and a short
/// history of recent submissions.
#[component]
pub fn PromptBox(client: AssistantClient) -> Element {
    // Held in a signal so the submit closure stays Copy.
    let client = use_signal(move || client);
    let mut prompt = use_signal(String::new);
    let mut applying = use_signal(|| false);
    let mut show_suggestions = use_signal(|| false);
    let mut recent: Signal<Vec<String>> = use_signal(Vec::new);

    let mut submit = move |text: String| {
        let text = text.trim().to_string();
        if text.is_empty() || applying() {
            return;
        }
        info!(prompt = %text, "applying editing prompt");
        recent.with_mut(|r| {
            r.insert(0, text.clone());
            r.truncate(5);
        });
        prompt.set(String::new());
        show_suggestions.set(false);
        applying.set(true);
        let client = client();
        spawn(async move {
            match client.apply_edit(&text).await {
                Ok(()) => info!("prompt applied"),
                Err(err) => error!(%err, "prompt failed"),
            }
            applying.set(false);
        });
    };

    rsx! {
        div {
            style: "
                position: relative;
                min-height: {PROMPT_BOX_HEIGHT}px; flex-shrink: 0;
                display: flex; flex-direction: column; gap: 8px;
                padding: 12px 16px;
                background-color: {BG_ELEVATED};
                border-top: 1px solid {BORDER_SUBTLE};
            ",

            if show_suggestions() {
                div {
                    style: "
                        position: absolute; left: 16px; bottom: calc(100% - 4px);
                        width: 320px; padding: 6px; z-index: 20;
                        background-color: {BG_SURFACE};
                        border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.5);
                    ",
                    for suggestion in SUGGESTIONS {
                        button {
                            key: "{suggestion}",
                            class: "toolbar-btn",
                            style: "display: block; width: 100%; text-align: left; color: {TEXT_SECONDARY};",
                            onclick: move |_| {
                                // Fill the input so the prompt can be edited
                                // before applying.
                                prompt.set(suggestion.to_string());
                                show_suggestions.set(false);
                            },
                            "✨ {suggestion}"
                        }
                    }
                }
            }

            div {
                style: "display: flex; align-items: center; gap: 8px;",
                button {
                    class: "toolbar-btn",
                    style: "color: {ACCENT_PRIMARY};",
                    onclick: move |_| show_suggestions.set(!show_suggestions()),
                    "✨"
                }
                input {
                    r#type: "text",
                    value: "{prompt}",
                    placeholder: "Describe an edit, e.g. 'Apply a cinematic color grade'...",
                    style: "
                        flex: 1; padding: 8px 12px;
                        background-color: {BG_SURFACE};
                        border: 1px solid {BORDER_DEFAULT}; border-radius: 6px;
                        font-size: 12px; color: {TEXT_PRIMARY}; outline: none;
                    ",
                    oninput: move |e| prompt.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            submit(prompt());
                        }
                    },
                }
                button {
                    class: "toolbar-btn",
                    style: if applying() {
                        format!("background-color: {BG_SURFACE}; color: {TEXT_MUTED}; cursor: wait;")
                    } else {
                        format!("background-color: {ACCENT_PRIMARY}; color: #ffffff;")
                    },
                    disabled: applying(),
                    onclick: move |_| submit(prompt()),
                    if applying() { "Applying..." } else { "Apply" }
                }
            }

            if !recent().is_empty() {
                div {
                    style: "display: flex; align-items: center; gap: 6px; flex-wrap: wrap;",
                    span { style: "font-size: 10px; color: {TEXT_MUTED};", "Recent:" }
                    for (i, entry) in recent().into_iter().enumerate() {
                        span {
                            key: "{i}",
                            style: "
                                padding: 2px 8px; border-radius: 999px;
                                background-color: {BG_SURFACE};
                                border: 1px solid {BORDER_SUBTLE};
                                font-size: 10px; color: {TEXT_SECONDARY};
                                cursor: pointer;
                            ",
                            onclick: {
                                let entry = entry.clone();
                                move |_| prompt.set(entry.clone())
                            },
                            "{entry}"
                        }
                    }
                }
            }
        }
    }
}
