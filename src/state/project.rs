use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{Clip, ClipColor, Track, TrackKind};

/// Validation failure for a project loaded into the editor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    /// A clip references a track id that does not exist in the project.
    #[error("clip {clip_id} references missing track {track_id}")]
    OrphanClip { clip_id: Uuid, track_id: Uuid },
}

/// The main project container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name shown in the title bar
    pub name: String,
    /// All tracks in the project (ordered top to bottom)
    pub tracks: Vec<Track>,
    /// All clips placed on tracks
    pub clips: Vec<Clip>,
}

impl Project {
    /// Create an empty project
    pub fn empty() -> Self {
        Self {
            name: "Untitled Project".to_string(),
            tracks: Vec::new(),
            clips: Vec::new(),
        }
    }

    /// Build the hardcoded demo project: three tracks, four clips.
    pub fn demo() -> Self {
        let video = Track::new("Video", TrackKind::Video);
        let audio = Track::new("Audio", TrackKind::Audio);
        let effects = Track::new("Effects", TrackKind::Effects);

        let clips = vec![
            Clip::new(video.id, 0.0, 15.0, "Beach Scene", ClipColor::Blue),
            Clip::new(video.id, 15.0, 25.0, "Mountain View", ClipColor::Green),
            Clip::new(audio.id, 0.0, 30.0, "Background Music", ClipColor::Purple),
            Clip::new(effects.id, 10.0, 20.0, "Fade Transition", ClipColor::Amber),
        ];

        Self {
            name: "Untitled Project".to_string(),
            tracks: vec![video, audio, effects],
            clips,
        }
    }

    /// Check referential integrity: every clip must sit on an existing track.
    /// Returns the first orphan found.
    pub fn validate(&self) -> Result<(), ProjectError> {
        for clip in &self.clips {
            if self.find_track(clip.track_id).is_none() {
                return Err(ProjectError::OrphanClip {
                    clip_id: clip.id,
                    track_id: clip.track_id,
                });
            }
        }
        Ok(())
    }

    /// Find a track by ID
    pub fn find_track(&self, id: Uuid) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Get all clips on a specific track
    pub fn clips_on_track(&self, track_id: Uuid) -> Vec<&Clip> {
        self.clips.iter().filter(|c| c.track_id == track_id).collect()
    }

    /// End of the last clip in seconds. The timeline renders a fixed 60 s
    /// window regardless; this is the data-derived figure.
    pub fn content_duration(&self) -> f64 {
        self.clips.iter().map(|c| c.end).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_project_shape() {
        let project = Project::demo();
        assert_eq!(project.tracks.len(), 3);
        assert_eq!(project.clips.len(), 4);
        assert_eq!(project.tracks[0].kind, TrackKind::Video);
        assert_eq!(project.tracks[1].kind, TrackKind::Audio);
        assert_eq!(project.tracks[2].kind, TrackKind::Effects);
    }

    #[test]
    fn test_demo_project_validates() {
        assert_eq!(Project::demo().validate(), Ok(()));
    }

    #[test]
    fn test_orphan_clip_rejected() {
        let mut project = Project::demo();
        let orphan_track = Uuid::new_v4();
        project.clips[0].track_id = orphan_track;
        let clip_id = project.clips[0].id;
        assert_eq!(
            project.validate(),
            Err(ProjectError::OrphanClip {
                clip_id,
                track_id: orphan_track,
            })
        );
    }

    #[test]
    fn test_content_duration_is_last_clip_end() {
        let project = Project::demo();
        assert_eq!(project.content_duration(), 30.0);
        assert_eq!(Project::empty().content_duration(), 0.0);
    }

    #[test]
    fn test_clips_on_track() {
        let project = Project::demo();
        let video_track = project.tracks[0].id;
        let names: Vec<&str> = project
            .clips_on_track(video_track)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Beach Scene", "Mountain View"]);
    }

    #[test]
    fn test_project_serialization() {
        let project = Project::demo();
        let json = serde_json::to_string_pretty(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project, parsed);
    }
}
