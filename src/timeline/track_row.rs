use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::{BG_BASE, BORDER_SUBTLE, TRACK_ROW_HEIGHT};
use crate::state::Clip;

use super::clip_element::ClipElement;

/// Track row content area: the clip blocks for one track.
#[component]
pub(crate) fn TrackRow(
    track_id: Uuid,
    clips: Vec<Clip>,
    scale: f64,
    width: f64,
    selected_clip: Option<Uuid>,
    on_clip_select: EventHandler<Uuid>,
) -> Element {
    let track_clips: Vec<_> = clips.iter().filter(|c| c.track_id == track_id).collect();

    rsx! {
        div {
            style: "
                height: {TRACK_ROW_HEIGHT}px;
                min-width: {width}px;
                border-bottom: 1px solid {BORDER_SUBTLE};
                background-color: {BG_BASE};
                position: relative;
            ",

            for clip in track_clips.iter() {
                ClipElement {
                    key: "{clip.id}",
                    clip: (*clip).clone(),
                    scale,
                    is_selected: selected_clip == Some(clip.id),
                    on_select: move |id| on_clip_select.call(id),
                }
            }
        }
    }
}
