use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of a media library entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Video,
    Image,
    Audio,
}

impl MediaKind {
    /// Small glyph shown next to the item name.
    pub fn icon(self) -> &'static str {
        match self {
            MediaKind::Video => "🎬",
            MediaKind::Image => "🖼",
            MediaKind::Audio => "🎵",
        }
    }
}

/// Tab filter applied to the media library grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFilter {
    All,
    Video,
    Image,
    Audio,
}

impl MediaFilter {
    pub fn label(self) -> &'static str {
        match self {
            MediaFilter::All => "All",
            MediaFilter::Video => "Video",
            MediaFilter::Image => "Images",
            MediaFilter::Audio => "Audio",
        }
    }

    /// Whether an item of the given kind passes this filter.
    pub fn admits(self, kind: MediaKind) -> bool {
        match self {
            MediaFilter::All => true,
            MediaFilter::Video => kind == MediaKind::Video,
            MediaFilter::Image => kind == MediaKind::Image,
            MediaFilter::Audio => kind == MediaKind::Audio,
        }
    }
}

/// An entry in the media library panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Kind of media
    pub kind: MediaKind,
    /// Preformatted duration label, absent for still images
    pub duration: Option<String>,
    /// Remote thumbnail URL, absent for audio
    pub thumbnail: Option<String>,
}

impl MediaItem {
    fn new(
        name: impl Into<String>,
        kind: MediaKind,
        duration: Option<&str>,
        thumbnail: Option<&str>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            duration: duration.map(str::to_string),
            thumbnail: thumbnail.map(str::to_string),
        }
    }
}

/// The hardcoded demo media library.
pub fn demo_media() -> Vec<MediaItem> {
    vec![
        MediaItem::new(
            "Beach Sunset",
            MediaKind::Video,
            Some("0:45"),
            Some("https://images.pexels.com/photos/1032650/pexels-photo-1032650.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        ),
        MediaItem::new(
            "Mountain View",
            MediaKind::Image,
            None,
            Some("https://images.pexels.com/photos/933054/pexels-photo-933054.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        ),
        MediaItem::new("Background Music", MediaKind::Audio, Some("3:12"), None),
        MediaItem::new(
            "City Timelapse",
            MediaKind::Video,
            Some("1:22"),
            Some("https://images.pexels.com/photos/1105766/pexels-photo-1105766.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_admits() {
        assert!(MediaFilter::All.admits(MediaKind::Audio));
        assert!(MediaFilter::Video.admits(MediaKind::Video));
        assert!(!MediaFilter::Video.admits(MediaKind::Image));
        assert!(!MediaFilter::Audio.admits(MediaKind::Video));
    }

    #[test]
    fn test_demo_media_shape() {
        let media = demo_media();
        assert_eq!(media.len(), 4);
        // Stills carry no duration, audio carries no thumbnail.
        let mountain = media.iter().find(|m| m.name == "Mountain View").unwrap();
        assert_eq!(mountain.duration, None);
        let music = media.iter().find(|m| m.name == "Background Music").unwrap();
        assert_eq!(music.thumbnail, None);
    }
}
