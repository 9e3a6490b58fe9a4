use dioxus::prelude::*;

use crate::constants::{BORDER_SUBTLE, TEXT_SECONDARY, TRACK_ROW_HEIGHT};
use crate::state::TrackKind;

/// Track label in the sidebar
#[component]
pub(crate) fn TrackLabel(name: String, kind: TrackKind) -> Element {
    let color = match kind {
        TrackKind::Video => "#3b82f6",
        TrackKind::Audio => "#22c55e",
        TrackKind::Effects => "#a855f7",
    };

    rsx! {
        div {
            style: "
                display: flex; align-items: center; gap: 10px; height: {TRACK_ROW_HEIGHT}px;
                padding: 0 12px; border-bottom: 1px solid {BORDER_SUBTLE};
                font-size: 12px; color: {TEXT_SECONDARY};
            ",
            div { style: "width: 3px; height: 16px; border-radius: 2px; background-color: {color};" }
            span { "{name}" }
        }
    }
}
