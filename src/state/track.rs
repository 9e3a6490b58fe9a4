use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of content a track lane holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackKind {
    /// Video track - holds picture clips
    Video,
    /// Audio track - holds sound clips
    Audio,
    /// Effects track - holds transitions and filters
    Effects,
}

/// A horizontal lane in the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique identifier
    pub id: Uuid,
    /// Display name (e.g., "Video", "Audio", "Effects")
    pub name: String,
    /// Kind of track
    pub kind: TrackKind,
}

impl Track {
    /// Create a new track
    pub fn new(name: impl Into<String>, kind: TrackKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
        }
    }
}
