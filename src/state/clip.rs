use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Color tag assigned to a clip block in the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipColor {
    Blue,
    Green,
    Purple,
    Amber,
}

impl ClipColor {
    /// Hex value used as the clip block background.
    pub fn hex(self) -> &'static str {
        match self {
            ClipColor::Blue => "#2563eb",
            ClipColor::Green => "#16a34a",
            ClipColor::Purple => "#9333ea",
            ClipColor::Amber => "#d97706",
        }
    }
}

/// A time-bounded segment placed on a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Unique identifier
    pub id: Uuid,
    /// The track this clip is on
    pub track_id: Uuid,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds, exclusive. Expected to exceed `start`; an
    /// inverted range renders with a non-positive width and nothing enforces
    /// it here.
    pub end: f64,
    /// Display name shown on the clip block
    pub name: String,
    /// Color tag
    pub color: ClipColor,
}

impl Clip {
    /// Create a new clip
    pub fn new(
        track_id: Uuid,
        start: f64,
        end: f64,
        name: impl Into<String>,
        color: ClipColor,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            track_id,
            start,
            end,
            name: name.into(),
            color,
        }
    }

    /// Length of this clip in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_is_end_minus_start() {
        let clip = Clip::new(Uuid::new_v4(), 10.0, 20.0, "Fade Transition", ClipColor::Amber);
        assert_eq!(clip.duration(), 10.0);
    }

    #[test]
    fn test_inverted_range_has_negative_duration() {
        let clip = Clip::new(Uuid::new_v4(), 20.0, 10.0, "Backwards", ClipColor::Blue);
        assert!(clip.duration() < 0.0);
    }
}
