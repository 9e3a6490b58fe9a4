use dioxus::prelude::*;
use tracing::error;

use crate::assistant::AssistantClient;
use crate::constants::{
    ACCENT_PRIMARY, BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, BORDER_SUBTLE, CHAT_PANEL_WIDTH,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY, TITLE_BAR_HEIGHT,
};
use crate::state::{initial_transcript, ChatMessage, ChatRole};

const QUICK_QUESTIONS: [&str; 4] = [
    "How do I add transitions?",
    "Color correction tips",
    "How to export in 4K?",
    "Timeline keyboard shortcuts",
];

/// Assistant chat sidebar. Slides in from the right edge below the header.
#[component]
pub fn ChatPanel(open: bool, client: AssistantClient, on_close: EventHandler<MouseEvent>) -> Element {
    // Held in a signal so the send closure stays Copy.
    let client = use_signal(move || client);
    let mut transcript = use_signal(initial_transcript);
    let mut draft = use_signal(String::new);
    let mut awaiting_reply = use_signal(|| false);

    // Sends are fire-and-forget: a second send while a reply is pending
    // runs its own independent request.
    let mut send = move |text: String| {
        let text = text.trim().to_string();
        if text.is_empty() {
            return;
        }
        transcript.with_mut(|t| t.push(ChatMessage::user(text.clone())));
        draft.set(String::new());
        awaiting_reply.set(true);
        let client = client();
        spawn(async move {
            let reply = match client.reply(&text).await {
                Ok(reply) => reply,
                Err(err) => {
                    error!(%err, "assistant reply failed");
                    "Sorry, I couldn't reach the assistant. Please try again.".to_string()
                }
            };
            transcript.with_mut(|t| t.push(ChatMessage::assistant(reply)));
            awaiting_reply.set(false);
        });
    };

    let translate = if open { "0" } else { "100%" };

    rsx! {
        div {
            style: "
                position: fixed; right: 0; top: {TITLE_BAR_HEIGHT}px; bottom: 0;
                width: {CHAT_PANEL_WIDTH}px; z-index: 30;
                display: flex; flex-direction: column;
                background-color: {BG_ELEVATED};
                border-left: 1px solid {BORDER_DEFAULT};
                transform: translateX({translate});
                transition: transform 0.3s ease;
            ",

            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    padding: 12px 16px; flex-shrink: 0;
                    border-bottom: 1px solid {BORDER_SUBTLE};
                ",
                span { style: "font-size: 13px; font-weight: 600; color: {TEXT_PRIMARY};", "AI Assistant" }
                button {
                    class: "toolbar-btn",
                    onclick: move |e| on_close.call(e),
                    "✕"
                }
            }

            div {
                style: "flex: 1; overflow-y: auto; padding: 12px 16px; display: flex; flex-direction: column; gap: 10px;",
                for message in transcript() {
                    MessageBubble { key: "{message.id}", message }
                }
                if awaiting_reply() {
                    div {
                        style: "
                            align-self: flex-start; display: flex; gap: 4px;
                            padding: 10px 14px; border-radius: 12px;
                            background-color: {BG_SURFACE};
                        ",
                        span { class: "typing-dot", style: "animation-delay: 0ms;" }
                        span { class: "typing-dot", style: "animation-delay: 150ms;" }
                        span { class: "typing-dot", style: "animation-delay: 300ms;" }
                    }
                }
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 6px; padding: 0 16px 8px; flex-shrink: 0;",
                for question in QUICK_QUESTIONS {
                    button {
                        key: "{question}",
                        class: "toolbar-btn",
                        style: "
                            border: 1px solid {BORDER_SUBTLE}; border-radius: 999px;
                            font-size: 10px; color: {TEXT_SECONDARY};
                        ",
                        onclick: move |_| send(question.to_string()),
                        "{question}"
                    }
                }
            }

            div {
                style: "
                    display: flex; gap: 8px; padding: 12px 16px; flex-shrink: 0;
                    border-top: 1px solid {BORDER_SUBTLE};
                ",
                textarea {
                    value: "{draft}",
                    placeholder: "Ask about editing...",
                    rows: "1",
                    style: "
                        flex: 1; padding: 8px 12px; resize: none;
                        background-color: {BG_SURFACE};
                        border: 1px solid {BORDER_DEFAULT}; border-radius: 6px;
                        font-size: 12px; color: {TEXT_PRIMARY}; outline: none;
                        font-family: inherit;
                    ",
                    oninput: move |e| draft.set(e.value()),
                    onkeydown: move |e| {
                        // Shift+Enter inserts a newline instead of sending.
                        if e.key() == Key::Enter && !e.modifiers().shift() {
                            e.prevent_default();
                            send(draft());
                        }
                    },
                }
                button {
                    class: "toolbar-btn",
                    style: "background-color: {ACCENT_PRIMARY}; color: #ffffff;",
                    onclick: move |_| send(draft()),
                    "➤"
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let from_user = message.role == ChatRole::User;
    let (align, bg, fg) = if from_user {
        ("flex-end", ACCENT_PRIMARY, "#ffffff")
    } else {
        ("flex-start", BG_SURFACE, TEXT_SECONDARY)
    };
    let time = message.time_label();

    rsx! {
        div {
            style: "align-self: {align}; max-width: 85%; display: flex; flex-direction: column; gap: 2px;",
            div {
                style: "
                    padding: 8px 12px; border-radius: 12px;
                    background-color: {bg}; color: {fg};
                    font-size: 12px; line-height: 1.5;
                ",
                "{message.content}"
            }
            span {
                style: "font-size: 9px; color: {TEXT_MUTED}; align-self: {align};",
                "{time}"
            }
        }
    }
}
