//! Application chrome: header, panels, prompt box, and the chat sidebar.

mod chat_panel;
mod media_panel;
mod preview_panel;
mod prompt_box;
mod title_bar;

pub use chat_panel::ChatPanel;
pub use media_panel::MediaPanel;
pub use preview_panel::PreviewPanel;
pub use prompt_box::PromptBox;
pub use title_bar::TitleBar;
