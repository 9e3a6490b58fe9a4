//! State module
//!
//! Core data structures for the editor demo:
//! - Project: tracks and clips shown in the timeline
//! - Track / Clip: the timeline data model
//! - MediaItem: entries in the media library panel
//! - ChatMessage: the assistant chat transcript

mod chat;
mod clip;
mod media;
mod project;
mod track;

pub use chat::*;
pub use clip::*;
pub use media::*;
pub use project::*;
pub use track::*;
