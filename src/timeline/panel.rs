use dioxus::prelude::*;
use tracing::info;
use uuid::Uuid;

use crate::constants::{
    ACCENT_PLAYHEAD, BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, BORDER_SUBTLE, PLAYHEAD_OFFSET_PX,
    RULER_HEIGHT, TEXT_MUTED, TEXT_SECONDARY, TRACK_LABEL_WIDTH, TRACK_ROW_HEIGHT,
};
use crate::state::Project;
use crate::timeline::layout::{
    clamp_zoom, time_scale, timeline_width, TOTAL_DURATION_SECONDS, ZOOM_MAX, ZOOM_MIN,
};

use super::ruler::TimeRuler;
use super::track_label::TrackLabel;
use super::track_row::TrackRow;

/// The timeline panel: toolbar, track labels, ruler, and clip strip.
#[component]
pub fn TimelinePanel(
    project: Project,
    zoom: i32,
    on_zoom_change: EventHandler<i32>,
    selected_clip: Option<Uuid>,
    on_clip_select: EventHandler<Uuid>,
) -> Element {
    let scale = time_scale(zoom);
    let strip_width = timeline_width(TOTAL_DURATION_SECONDS, scale);
    let playhead_height = RULER_HEIGHT + project.tracks.len() as f64 * TRACK_ROW_HEIGHT;

    rsx! {
        div {
            style: "
                flex: 1;
                display: flex;
                flex-direction: column;
                background-color: {BG_ELEVATED};
                overflow: hidden;
            ",

            // Toolbar
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 40px; padding: 0 12px; flex-shrink: 0;
                    border-bottom: 1px solid {BORDER_SUBTLE};
                ",
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    button {
                        class: "toolbar-btn",
                        onclick: move |_| info!("cut tool selected"),
                        "✂ Cut"
                    }
                    button {
                        class: "toolbar-btn",
                        onclick: move |_| info!("delete tool selected"),
                        "🗑 Delete"
                    }
                }
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    button {
                        class: "toolbar-btn",
                        onclick: move |_| on_zoom_change.call(clamp_zoom(zoom - 10)),
                        "−"
                    }
                    input {
                        r#type: "range",
                        min: "{ZOOM_MIN}",
                        max: "{ZOOM_MAX}",
                        step: "1",
                        value: "{zoom}",
                        style: "width: 120px; accent-color: {TEXT_MUTED};",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<i32>() {
                                on_zoom_change.call(clamp_zoom(value));
                            }
                        },
                    }
                    button {
                        class: "toolbar-btn",
                        onclick: move |_| on_zoom_change.call(clamp_zoom(zoom + 10)),
                        "+"
                    }
                    button {
                        class: "toolbar-btn",
                        onclick: move |_| info!("track list toggle"),
                        "Tracks ▾"
                    }
                }
            }

            // Labels column plus scrollable strip
            div {
                style: "flex: 1; display: flex; overflow: hidden;",

                div {
                    style: "
                        width: {TRACK_LABEL_WIDTH}px; flex-shrink: 0;
                        background-color: {BG_SURFACE};
                        border-right: 1px solid {BORDER_DEFAULT};
                        display: flex; flex-direction: column;
                    ",
                    // Spacer matching the ruler height
                    div { style: "height: {RULER_HEIGHT}px; border-bottom: 1px solid {BORDER_SUBTLE}; flex-shrink: 0;" }
                    for track in project.tracks.iter() {
                        TrackLabel {
                            key: "{track.id}",
                            name: track.name.clone(),
                            kind: track.kind,
                        }
                    }
                    button {
                        class: "toolbar-btn",
                        style: "margin: 8px; color: {TEXT_SECONDARY};",
                        onclick: move |_| info!("add track requested"),
                        "+ Add Track"
                    }
                }

                div {
                    style: "flex: 1; overflow: auto; position: relative;",
                    div {
                        style: "position: relative; width: {strip_width}px;",

                        div {
                            style: "height: {RULER_HEIGHT}px; border-bottom: 1px solid {BORDER_SUBTLE}; position: relative;",
                            TimeRuler { scale }
                        }

                        for track in project.tracks.iter() {
                            TrackRow {
                                key: "{track.id}",
                                track_id: track.id,
                                clips: project.clips.clone(),
                                scale,
                                width: strip_width,
                                selected_clip,
                                on_clip_select: move |id| on_clip_select.call(id),
                            }
                        }

                        // Playhead. Stationary in the demo build.
                        div {
                            style: "
                                position: absolute;
                                left: {PLAYHEAD_OFFSET_PX}px;
                                top: 0;
                                width: 1px;
                                height: {playhead_height}px;
                                background-color: {ACCENT_PLAYHEAD};
                                pointer-events: none;
                            ",
                            div {
                                style: "
                                    position: absolute;
                                    left: -5px;
                                    top: 0;
                                    width: 10px;
                                    height: 10px;
                                    background-color: {ACCENT_PLAYHEAD};
                                    transform: rotate(45deg);
                                ",
                            }
                        }
                    }
                }
            }
        }
    }
}
